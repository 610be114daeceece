//! Emergency fund target and funding progress
//!
//! Computes the target amount from a fixed-field monthly expense breakdown
//! and a coverage horizon, then classifies funding progress into status
//! buckets at the 25/50/75/100 thresholds.

use serde::{Deserialize, Serialize};

/// Monthly expense breakdown
///
/// Fixed fields rather than a string-keyed map so every expense category is
/// accounted for at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyExpenses {
    pub housing: f64,
    pub utilities: f64,
    pub food: f64,
    pub transportation: f64,
    pub insurance: f64,
    pub healthcare: f64,
    pub debt: f64,
    pub other: f64,
}

impl MonthlyExpenses {
    pub fn total(&self) -> f64 {
        self.housing
            + self.utilities
            + self.food
            + self.transportation
            + self.insurance
            + self.healthcare
            + self.debt
            + self.other
    }

    /// Labeled non-zero expense lines for display
    pub fn breakdown(&self) -> Vec<(&'static str, f64)> {
        [
            ("Housing", self.housing),
            ("Utilities", self.utilities),
            ("Food", self.food),
            ("Transportation", self.transportation),
            ("Insurance", self.insurance),
            ("Healthcare", self.healthcare),
            ("Debt", self.debt),
            ("Other", self.other),
        ]
        .into_iter()
        .filter(|(_, value)| *value > 0.0)
        .collect()
    }
}

/// Funding status buckets by progress percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundingStatus {
    /// Progress below 25%
    Starting,
    /// 25% to just under 50%
    Building,
    /// 50% to just under 75%
    Halfway,
    /// 75% to just under 100%
    AlmostThere,
    /// 100% or more
    FullyFunded,
}

impl FundingStatus {
    pub fn from_progress(progress_pct: f64) -> Self {
        if progress_pct >= 100.0 {
            FundingStatus::FullyFunded
        } else if progress_pct >= 75.0 {
            FundingStatus::AlmostThere
        } else if progress_pct >= 50.0 {
            FundingStatus::Halfway
        } else if progress_pct >= 25.0 {
            FundingStatus::Building
        } else {
            FundingStatus::Starting
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FundingStatus::FullyFunded => "Fully Funded! You have excellent financial security.",
            FundingStatus::AlmostThere => "Almost there! You're building strong financial security.",
            FundingStatus::Halfway => "Good progress! Keep building your emergency fund.",
            FundingStatus::Building => "Getting started. Continue saving consistently.",
            FundingStatus::Starting => "Start building your emergency fund today!",
        }
    }
}

/// Inputs for an emergency fund plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmergencyFundPlan {
    pub expenses: MonthlyExpenses,
    pub current_savings: f64,
    pub monthly_savings: f64,

    /// Coverage horizon in months of expenses
    pub target_months: u32,
}

/// Derived funding report
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmergencyFundReport {
    pub total_monthly_expenses: f64,
    pub target_amount: f64,
    pub remaining: f64,

    /// Savings as a percentage of the target; 0 when the target is 0
    pub progress_pct: f64,

    /// Months of saving left at the current pace; None when not saving
    pub months_to_goal: Option<u32>,

    pub status: FundingStatus,
}

impl EmergencyFundPlan {
    pub fn report(&self) -> EmergencyFundReport {
        let total_monthly_expenses = self.expenses.total();
        let target_amount = total_monthly_expenses * self.target_months as f64;
        let remaining = (target_amount - self.current_savings).max(0.0);

        let progress_pct = if target_amount > 0.0 {
            self.current_savings / target_amount * 100.0
        } else {
            0.0
        };

        let months_to_goal = if self.monthly_savings > 0.0 {
            Some((remaining / self.monthly_savings).ceil() as u32)
        } else {
            None
        };

        EmergencyFundReport {
            total_monthly_expenses,
            target_amount,
            remaining,
            progress_pct,
            months_to_goal,
            status: FundingStatus::from_progress(progress_pct),
        }
    }
}
