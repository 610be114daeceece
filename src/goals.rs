//! Financial goal records and progress tracking
//!
//! Goals carry a target, current amount, optional deadline, category, and
//! priority. Progress math is pure; date arithmetic takes an explicit as-of
//! date so nothing in this module reads the clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Goal categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalCategory {
    EmergencyFund,
    Retirement,
    HomePurchase,
    Education,
    DebtPayoff,
    Investment,
    Vacation,
    Other,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::EmergencyFund => "Emergency Fund",
            GoalCategory::Retirement => "Retirement",
            GoalCategory::HomePurchase => "Home Purchase",
            GoalCategory::Education => "Education",
            GoalCategory::DebtPayoff => "Debt Payoff",
            GoalCategory::Investment => "Investment",
            GoalCategory::Vacation => "Vacation",
            GoalCategory::Other => "Other",
        }
    }
}

/// Goal priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A single financial goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Option<NaiveDate>,
    pub category: GoalCategory,
    pub priority: Priority,
}

impl Goal {
    /// Progress toward the target in percent; 0 when the target is 0
    pub fn progress_pct(&self) -> f64 {
        if self.target_amount > 0.0 {
            self.current_amount / self.target_amount * 100.0
        } else {
            0.0
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Days until the deadline as of the given date; negative when overdue,
    /// None when no deadline is set
    pub fn days_remaining(&self, as_of: NaiveDate) -> Option<i64> {
        self.deadline
            .map(|deadline| deadline.signed_duration_since(as_of).num_days())
    }

    /// Record progress, clamped so the current amount never exceeds the target
    pub fn record_progress(&mut self, amount: f64) {
        self.current_amount = amount.min(self.target_amount);
    }
}

/// Aggregate view over a set of goals
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalSummary {
    pub total_target: f64,
    pub total_current: f64,

    /// Combined progress in percent; 0 when the combined target is 0
    pub overall_progress_pct: f64,

    pub completed: usize,
    pub total: usize,
}

impl GoalSummary {
    pub fn from_goals(goals: &[Goal]) -> Self {
        let total_target: f64 = goals.iter().map(|g| g.target_amount).sum();
        let total_current: f64 = goals.iter().map(|g| g.current_amount).sum();

        let overall_progress_pct = if total_target > 0.0 {
            total_current / total_target * 100.0
        } else {
            0.0
        };

        Self {
            total_target,
            total_current,
            overall_progress_pct,
            completed: goals.iter().filter(|g| g.is_complete()).count(),
            total: goals.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn goal(target: f64, current: f64) -> Goal {
        Goal {
            id: "1".to_string(),
            name: "Down payment".to_string(),
            target_amount: target,
            current_amount: current,
            deadline: None,
            category: GoalCategory::HomePurchase,
            priority: Priority::High,
        }
    }

    #[test]
    fn test_progress() {
        assert_relative_eq!(goal(10_000.0, 2_500.0).progress_pct(), 25.0, max_relative = 1e-12);
        assert!(!goal(10_000.0, 2_500.0).is_complete());
        assert!(goal(10_000.0, 10_000.0).is_complete());
    }

    #[test]
    fn test_zero_target_progress_is_zero() {
        assert_eq!(goal(0.0, 500.0).progress_pct(), 0.0);
    }

    #[test]
    fn test_record_progress_clamps() {
        let mut g = goal(10_000.0, 0.0);
        g.record_progress(15_000.0);
        assert_eq!(g.current_amount, 10_000.0);

        g.record_progress(4_000.0);
        assert_eq!(g.current_amount, 4_000.0);
    }

    #[test]
    fn test_days_remaining() {
        let mut g = goal(1_000.0, 0.0);
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        assert_eq!(g.days_remaining(as_of), None);

        g.deadline = NaiveDate::from_ymd_opt(2026, 2, 1);
        assert_eq!(g.days_remaining(as_of), Some(17));

        g.deadline = NaiveDate::from_ymd_opt(2026, 1, 1);
        assert_eq!(g.days_remaining(as_of), Some(-14));
    }

    #[test]
    fn test_summary() {
        let goals = vec![goal(10_000.0, 10_000.0), goal(5_000.0, 1_000.0)];
        let summary = GoalSummary::from_goals(&goals);

        assert_eq!(summary.total_target, 15_000.0);
        assert_eq!(summary.total_current, 11_000.0);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 2);
        assert_relative_eq!(summary.overall_progress_pct, 11_000.0 / 15_000.0 * 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_summary_empty() {
        let summary = GoalSummary::from_goals(&[]);
        assert_eq!(summary.overall_progress_pct, 0.0);
        assert_eq!(summary.completed, 0);
    }
}
