//! Core projection loop and output structures

use serde::{Deserialize, Serialize};

use super::plan::GrowthPlan;

/// Year-end snapshot of a projection
///
/// Amounts are rounded to whole dollars. Earnings are computed from the
/// rounded balance and contributions, so `earnings == balance - contributions`
/// holds exactly on every point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Years elapsed since the start of the plan
    pub year: u32,

    /// Account balance at the end of the year
    pub balance: i64,

    /// Cumulative contributions, including the initial amount
    pub contributions: i64,

    /// Balance in excess of contributions
    pub earnings: i64,
}

impl GrowthPoint {
    fn from_running(year: u32, balance: f64, contributions: f64) -> Self {
        let balance = balance.round() as i64;
        let contributions = contributions.round() as i64;
        Self {
            year,
            balance,
            contributions,
            earnings: balance - contributions,
        }
    }
}

/// Complete projection output for one plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthProjection {
    /// The plan that produced this projection
    pub plan: GrowthPlan,

    /// One point per year, 0..=years inclusive
    pub points: Vec<GrowthPoint>,
}

impl GrowthPlan {
    /// Run the projection for this plan
    ///
    /// The running balance starts at the initial amount and each year applies
    /// 12 monthly steps of `balance * (1 + monthly_rate) + contribution`.
    /// A plan with `years = 0` yields a single point equal to the initial
    /// state. Total over all finite inputs; never fails.
    pub fn project(&self) -> GrowthProjection {
        let monthly_rate = self.monthly_rate();
        let mut balance = self.initial_amount;
        let mut contributions = self.initial_amount;

        let mut points = Vec::with_capacity(self.years as usize + 1);
        points.push(GrowthPoint::from_running(0, balance, contributions));

        for year in 1..=self.years {
            for _month in 0..12 {
                balance = balance * (1.0 + monthly_rate) + self.monthly_contribution;
                contributions += self.monthly_contribution;
            }
            points.push(GrowthPoint::from_running(year, balance, contributions));
        }

        GrowthProjection {
            plan: self.clone(),
            points,
        }
    }
}

impl GrowthProjection {
    /// Final point of the projection
    ///
    /// The points vector is never empty (year 0 is always emitted).
    pub fn final_point(&self) -> &GrowthPoint {
        self.points.last().expect("projection always has a year-0 point")
    }

    /// Summary statistics over the full horizon
    pub fn summary(&self) -> GrowthSummary {
        let last = self.final_point();
        let final_balance = last.balance;
        let total_contributions = last.contributions;
        let total_earnings = last.earnings;

        let earnings_pct_of_contributions = if total_contributions != 0 {
            total_earnings as f64 / total_contributions as f64 * 100.0
        } else {
            0.0
        };
        let earnings_pct_of_balance = if final_balance != 0 {
            total_earnings as f64 / final_balance as f64 * 100.0
        } else {
            0.0
        };
        let growth_multiple = if total_contributions != 0 {
            final_balance as f64 / total_contributions as f64
        } else {
            0.0
        };

        GrowthSummary {
            years: self.plan.years,
            final_balance,
            total_contributions,
            total_earnings,
            earnings_pct_of_contributions,
            earnings_pct_of_balance,
            growth_multiple,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub years: u32,
    pub final_balance: i64,
    pub total_contributions: i64,
    pub total_earnings: i64,

    /// Earnings as a percentage of total contributions (the realized return)
    pub earnings_pct_of_contributions: f64,

    /// Earnings as a percentage of the final balance
    pub earnings_pct_of_balance: f64,

    /// Final balance divided by total contributions; 0 when contributions are 0
    pub growth_multiple: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_years_single_point() {
        let projection = GrowthPlan::new(10_000.0, 500.0, 7.0, 0).project();

        assert_eq!(projection.points.len(), 1);
        let point = &projection.points[0];
        assert_eq!(point.year, 0);
        assert_eq!(point.balance, 10_000);
        assert_eq!(point.contributions, 10_000);
        assert_eq!(point.earnings, 0);
    }

    #[test]
    fn test_zero_rate_zero_contribution_is_flat() {
        let projection = GrowthPlan::new(25_000.0, 0.0, 0.0, 10).project();

        assert_eq!(projection.points.len(), 11);
        for point in &projection.points {
            assert_eq!(point.balance, 25_000);
            assert_eq!(point.earnings, 0);
        }
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let projection = GrowthPlan::new(1_000.0, 100.0, 0.0, 5).project();

        for point in &projection.points {
            assert_eq!(point.balance, 1_000 + 1_200 * point.year as i64);
            assert_eq!(point.balance, point.contributions);
        }
    }

    #[test]
    fn test_one_year_compounding() {
        // 12 steps of balance * (1 + 0.07/12) + 500 from 10,000
        let projection = GrowthPlan::new(10_000.0, 500.0, 7.0, 1).project();

        assert_eq!(projection.points.len(), 2);
        let point = &projection.points[1];
        assert_eq!(point.balance, 16_919);
        assert_eq!(point.contributions, 16_000);
        assert_eq!(point.earnings, 919);
    }

    #[test]
    fn test_no_contribution_matches_closed_form() {
        let projection = GrowthPlan::new(10_000.0, 0.0, 7.0, 10).project();

        let expected = 10_000.0 * (1.0 + 0.07 / 12.0_f64).powi(120);
        let actual = projection.final_point().balance as f64;
        assert_relative_eq!(actual, expected.round(), max_relative = 1e-9);
        assert_eq!(projection.final_point().balance, 20_097);
    }

    #[test]
    fn test_monotonic_for_nonnegative_inputs() {
        let projection = GrowthPlan::new(5_000.0, 250.0, 6.0, 40).project();

        for pair in projection.points.windows(2) {
            assert!(pair[1].balance >= pair[0].balance);
        }
    }

    #[test]
    fn test_negative_rate_accepted() {
        let projection = GrowthPlan::new(10_000.0, 0.0, -5.0, 10).project();

        let last = projection.final_point();
        assert!(last.balance < 10_000);
        assert!(last.earnings < 0);
    }

    #[test]
    fn test_rounding_identity_on_every_point() {
        let projection = GrowthPlan::new(10_123.45, 333.33, 6.789, 30).project();

        for point in &projection.points {
            assert_eq!(point.earnings, point.balance - point.contributions);
        }
    }

    #[test]
    fn test_summary() {
        let projection = GrowthPlan::new(10_000.0, 500.0, 7.0, 1).project();
        let summary = projection.summary();

        assert_eq!(summary.final_balance, 16_919);
        assert_eq!(summary.total_contributions, 16_000);
        assert_eq!(summary.total_earnings, 919);
        assert_relative_eq!(summary.growth_multiple, 16_919.0 / 16_000.0, max_relative = 1e-12);
        assert_relative_eq!(
            summary.earnings_pct_of_contributions,
            919.0 / 16_000.0 * 100.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_summary_zero_contributions_guard() {
        let projection = GrowthPlan::new(0.0, 0.0, 7.0, 5).project();
        let summary = projection.summary();

        assert_eq!(summary.final_balance, 0);
        assert_eq!(summary.growth_multiple, 0.0);
        assert_eq!(summary.earnings_pct_of_contributions, 0.0);
    }
}
