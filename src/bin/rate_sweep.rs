//! Sweep a growth plan across a grid of annual return rates
//!
//! Projects the same plan at every half-point rate from 0% to 12% and writes
//! the aligned year-by-year balances for comparison.

use std::time::Instant;

use financial_tools::export;
use financial_tools::growth::GrowthPlan;
use financial_tools::scenario::NamedProjection;
use rayon::prelude::*;

fn main() {
    env_logger::init();

    let start = Instant::now();

    let base = GrowthPlan::new(10_000.0, 500.0, 0.0, 30);
    let rates: Vec<f64> = (0..=24).map(|step| step as f64 * 0.5).collect();
    println!("Sweeping {} rates over a {}-year horizon...", rates.len(), base.years);

    // Each rate projects independently
    let scenarios: Vec<NamedProjection> = rates
        .par_iter()
        .map(|&rate| NamedProjection {
            name: format!("{:.1}%", rate),
            projection: GrowthPlan {
                annual_rate_pct: rate,
                ..base.clone()
            }
            .project(),
        })
        .collect();

    println!("Projections complete in {:?}", start.elapsed());

    let output_path = "rate_sweep_output.csv";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    export::write_comparison(file, &scenarios).expect("Failed to write sweep CSV");
    println!("Output written to {}", output_path);

    // Print summary milestones
    println!("\nFinal balances:");
    for scenario in scenarios.iter().step_by(4) {
        println!(
            "  {:>6}: ${}",
            scenario.name,
            scenario.projection.final_point().balance
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
