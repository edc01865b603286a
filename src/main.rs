//! Payment Simulator CLI
//!
//! Projects a single plan from command-line arguments and prints the
//! schedule the way the dashboard would render it.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use payment_sim::{ComparisonSession, Plan, PlanMode};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Finance,
    Lease,
}

impl From<ModeArg> for PlanMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Finance => PlanMode::Finance,
            ModeArg::Lease => PlanMode::Lease,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "payment_sim", about = "Simulate a vehicle finance or lease plan")]
struct Cli {
    /// Vehicle price
    #[arg(long, default_value_t = 28_400.0)]
    price: f64,

    /// Contract length in months
    #[arg(long, default_value_t = 60)]
    term: u32,

    /// Annual percentage rate (percent)
    #[arg(long, default_value_t = 5.5)]
    apr: f64,

    /// Cash down payment
    #[arg(long, default_value_t = 4000.0)]
    down_payment: f64,

    /// Trade-in allowance
    #[arg(long, default_value_t = 0.0)]
    trade_in: f64,

    /// Sales-tax percentage (defaults to the 8.25% retail assumption)
    #[arg(long)]
    tax_rate: Option<f64>,

    /// Finance or lease calculation
    #[arg(long, value_enum, default_value_t = ModeArg::Finance)]
    mode: ModeArg,

    /// Write the full schedule to a CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut plan = Plan::new(1, "Custom", cli.price, cli.term, cli.apr, cli.down_payment)
        .with_trade_in(cli.trade_in)
        .with_mode(cli.mode.into());
    if let Some(tax_rate) = cli.tax_rate {
        plan = plan.with_tax_rate(tax_rate);
    }

    let session = ComparisonSession::new();
    let result = session.run(&plan);
    let summary = result.summary(&plan);

    if cli.json {
        let payload = serde_json::json!({
            "plan": plan,
            "result": result,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Payment Simulator v0.1.0");
        println!("========================\n");

        println!("Plan: {} ({:?})", plan.name, plan.mode);
        println!("  Price: ${:.2}", plan.price);
        println!("  Term: {} months @ {:.1}% APR", plan.term, plan.apr);
        println!("  Down: ${:.2}  Trade-in: ${:.2}", plan.down_payment, plan.trade_in);
        println!();

        if !result.has_curve() {
            println!("Nothing to display: plan has no valid term or principal.");
            return Ok(());
        }

        println!("{:>5} {:>14}", "Month", "Remaining");
        println!("{}", "-".repeat(20));
        for point in result.points.iter().take(24) {
            println!("{:>5} {:>14.2}", point.month, point.remaining);
        }
        if result.points.len() > 24 {
            println!("... ({} more months)", result.points.len() - 24);
        }

        println!("\nSummary:");
        println!("  Monthly Payment: ${:.2}", summary.monthly_payment);
        println!("  Financed Amount: ${:.2}", summary.financed_amount);
        println!("  Sales Tax: ${:.2}", summary.sales_tax);
        println!("  Total Paid: ${:.2}", summary.total_paid);
        println!("  Total Interest: ${:.2}", summary.total_interest);
    }

    if let Some(path) = &cli.output {
        let mut file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        writeln!(file, "month,remaining")?;
        for point in &result.points {
            writeln!(file, "{},{:.8}", point.month, point.remaining)?;
        }
        println!("\nFull schedule written to: {}", path.display());
    }

    Ok(())
}
