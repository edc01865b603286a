//! Project every plan in the preset catalog and write an overlaid,
//! normalized comparison for charting
//!
//! Usage: cargo run --bin compare_plans

use anyhow::Context;
use payment_sim::plan::{default_catalog, load_default_catalog};
use payment_sim::{Comparison, ComparisonSession, Plan, SimulationResult};
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let plans: Vec<Plan> = match load_default_catalog() {
        Ok(plans) => plans,
        Err(e) => {
            log::warn!("falling back to built-in presets: {}", e);
            default_catalog(28_400.0)
        }
    };
    println!("Loaded {} plans", plans.len());

    let session = ComparisonSession::new();
    let start = Instant::now();

    let results: Vec<SimulationResult> = session.run_batch(&plans);

    println!("Projected {} plans in {:?}\n", results.len(), start.elapsed());

    // Per-plan headline numbers
    println!("{:>4} {:<16} {:>8} {:>6} {:>12} {:>12}",
        "ID", "Name", "Mode", "Term", "Monthly", "Financed");
    println!("{}", "-".repeat(64));
    for (plan, result) in plans.iter().zip(&results) {
        println!("{:>4} {:<16} {:>8} {:>6} {:>12.2} {:>12.2}",
            plan.id,
            plan.name,
            plan.mode.as_str(),
            plan.term,
            result.monthly_payment,
            result.financed_amount,
        );
    }

    let selected_id = plans.first().map(|p| p.id);
    let comparison = Comparison::new(&results, selected_id);

    // Shared-axis samples at a few milestones
    println!("\nRemaining ratio by progress:");
    for progress in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let samples = comparison.sample_at(progress);
        let rendered: Vec<String> = samples
            .iter()
            .map(|s| format!("#{}{}={:.4}",
                s.plan_id,
                if s.selected { "*" } else { "" },
                s.remaining_ratio))
            .collect();
        println!("  {:>4.0}%  {}", progress * 100.0, rendered.join("  "));
    }

    // Long-format CSV for the chart layer
    let output_path = "comparison_output.csv";
    let mut file = File::create(output_path)
        .with_context(|| format!("unable to create {}", output_path))?;
    writeln!(file, "plan_id,selected,progress,remaining_ratio")?;
    for curve in &comparison.curves {
        for point in &curve.points {
            writeln!(file, "{},{},{:.8},{:.8}",
                curve.plan_id,
                if curve.selected { 1 } else { 0 },
                point.progress,
                point.remaining_ratio,
            )?;
        }
    }

    println!("\nNormalized curves written to: {}", output_path);
    Ok(())
}
