//! Growth plan inputs

use serde::{Deserialize, Serialize};

/// Inputs for a growth projection
///
/// All amounts are in dollars. The rate is an annual percentage (7.0 = 7%)
/// and may be negative; negative contributions are accepted and feed through
/// the arithmetic unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPlan {
    /// Starting balance at year 0
    pub initial_amount: f64,

    /// Contribution added after each monthly compounding step
    pub monthly_contribution: f64,

    /// Annual rate of return, in percent
    pub annual_rate_pct: f64,

    /// Number of years to project
    pub years: u32,
}

impl GrowthPlan {
    pub fn new(initial_amount: f64, monthly_contribution: f64, annual_rate_pct: f64, years: u32) -> Self {
        Self {
            initial_amount,
            monthly_contribution,
            annual_rate_pct,
            years,
        }
    }

    /// Monthly compounding rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0 / 12.0
    }

    /// Same plan with the monthly contribution removed
    pub fn without_contributions(&self) -> Self {
        Self {
            monthly_contribution: 0.0,
            ..self.clone()
        }
    }

    /// Same plan with the annual rate shifted by `delta_pct` points
    pub fn with_rate_bump(&self, delta_pct: f64) -> Self {
        Self {
            annual_rate_pct: self.annual_rate_pct + delta_pct,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate() {
        let plan = GrowthPlan::new(10_000.0, 500.0, 7.0, 30);
        assert!((plan.monthly_rate() - 0.07 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_variants() {
        let plan = GrowthPlan::new(10_000.0, 500.0, 7.0, 30);

        let flat = plan.without_contributions();
        assert_eq!(flat.monthly_contribution, 0.0);
        assert_eq!(flat.initial_amount, plan.initial_amount);

        let bumped = plan.with_rate_bump(2.0);
        assert_eq!(bumped.annual_rate_pct, 9.0);
        assert_eq!(bumped.years, plan.years);
    }
}
