//! Scenario runner for side-by-side growth comparisons
//!
//! Builds the standard comparison set for a plan (the plan itself, the same
//! plan with no monthly contributions, and the same plan at +2% annual
//! return) and aligns the resulting series year by year.

use serde::{Deserialize, Serialize};

use crate::growth::{GrowthPlan, GrowthProjection};

/// Rate bump applied to the optimistic comparison scenario, in points
pub const COMPARISON_RATE_BUMP_PCT: f64 = 2.0;

/// A named projection within a comparison set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedProjection {
    pub name: String,
    pub projection: GrowthProjection,
}

/// One row of an aligned comparison table: a year and the balance of each
/// scenario at that year, in scenario order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub year: u32,
    pub balances: Vec<i64>,
}

/// Runs a base plan against comparison variants
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: GrowthPlan,
}

impl ScenarioRunner {
    pub fn new(base: GrowthPlan) -> Self {
        Self { base }
    }

    /// Project the base plan alone
    pub fn run_base(&self) -> GrowthProjection {
        self.base.project()
    }

    /// Project the standard comparison set: the base plan, the base with no
    /// monthly contributions, and the base at +2% annual return
    pub fn run_comparison(&self) -> Vec<NamedProjection> {
        vec![
            NamedProjection {
                name: "Your Plan".to_string(),
                projection: self.base.project(),
            },
            NamedProjection {
                name: "No Monthly Contributions".to_string(),
                projection: self.base.without_contributions().project(),
            },
            NamedProjection {
                name: format!("Higher Return (+{:.0}%)", COMPARISON_RATE_BUMP_PCT),
                projection: self.base.with_rate_bump(COMPARISON_RATE_BUMP_PCT).project(),
            },
        ]
    }

    /// Project an arbitrary list of variant plans
    pub fn run_variants(&self, variants: &[GrowthPlan]) -> Vec<GrowthProjection> {
        variants.iter().map(|plan| plan.project()).collect()
    }

    /// Extra balance the monthly contributions add over the horizon,
    /// relative to the one-time initial investment alone
    pub fn contribution_advantage(&self) -> i64 {
        let with = self.base.project();
        let without = self.base.without_contributions().project();
        with.final_point().balance - without.final_point().balance
    }

    pub fn base(&self) -> &GrowthPlan {
        &self.base
    }
}

/// Align a set of projections into year-by-year rows
///
/// All scenarios in a comparison set share the base plan's horizon, so the
/// series have equal length; shorter series are padded with 0.
pub fn align_by_year(scenarios: &[NamedProjection]) -> Vec<ComparisonRow> {
    let max_len = scenarios
        .iter()
        .map(|s| s.projection.points.len())
        .max()
        .unwrap_or(0);

    (0..max_len)
        .map(|idx| ComparisonRow {
            year: idx as u32,
            balances: scenarios
                .iter()
                .map(|s| s.projection.points.get(idx).map_or(0, |p| p.balance))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_plan() -> GrowthPlan {
        GrowthPlan::new(10_000.0, 500.0, 7.0, 20)
    }

    #[test]
    fn test_comparison_set_shape() {
        let runner = ScenarioRunner::new(base_plan());
        let scenarios = runner.run_comparison();

        assert_eq!(scenarios.len(), 3);
        for scenario in &scenarios {
            assert_eq!(scenario.projection.points.len(), 21);
        }
        assert_eq!(scenarios[0].name, "Your Plan");
        assert_eq!(scenarios[2].name, "Higher Return (+2%)");
    }

    #[test]
    fn test_higher_rate_beats_base() {
        let runner = ScenarioRunner::new(base_plan());
        let scenarios = runner.run_comparison();

        let base_final = scenarios[0].projection.final_point().balance;
        let flat_final = scenarios[1].projection.final_point().balance;
        let bumped_final = scenarios[2].projection.final_point().balance;

        assert!(bumped_final > base_final);
        assert!(base_final > flat_final);
    }

    #[test]
    fn test_contribution_advantage_positive() {
        let runner = ScenarioRunner::new(base_plan());
        assert!(runner.contribution_advantage() > 0);
    }

    #[test]
    fn test_align_by_year() {
        let runner = ScenarioRunner::new(GrowthPlan::new(1_000.0, 0.0, 0.0, 2));
        let rows = align_by_year(&runner.run_comparison());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].year, 0);
        assert_eq!(rows[0].balances, vec![1_000, 1_000, 1_000]);
        assert_eq!(rows[2].balances.len(), 3);
    }
}
