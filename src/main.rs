//! plancost - rank avatar/voice/hosting plan combinations by monthly cost
//!
//! Loads a pricing catalog (built-in by default), evaluates every plan
//! combination against the requested load, and prints the viable ones
//! ranked best-first.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use plancost_rs::utils::format::{format_inr, format_usd};
use plancost_rs::{default_catalog, rank_combinations, BudgetInput, Catalog, Result};

#[derive(Debug, Parser)]
#[command(name = "plancost", version, about)]
struct Cli {
    /// Total monthly budget in INR
    #[arg(long, default_value_t = 100_000.0)]
    budget: f64,

    /// Percentage of the budget allocated to API spend (avatar + voice)
    #[arg(long, default_value_t = 60.0)]
    api_percent: f64,

    /// Percentage of the budget allocated to hosting
    #[arg(long, default_value_t = 40.0)]
    hosting_percent: f64,

    /// Registered users
    #[arg(long, default_value_t = 50)]
    users: u32,

    /// Required simultaneous sessions
    #[arg(long, default_value_t = 10)]
    concurrency: u32,

    /// Requested conversation minutes per month
    #[arg(long, default_value_t = 3000.0)]
    minutes: f64,

    /// Use the avatar plan's inbuilt voice instead of a separate agent
    #[arg(long)]
    inbuilt_voice: bool,

    /// Catalog YAML file (built-in catalog when omitted)
    #[arg(long, env = "PLANCOST_CATALOG")]
    catalog: Option<PathBuf>,

    /// Show at most this many combinations
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Emit the ranked list as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_yaml_file(path)?,
        None => default_catalog().clone(),
    };

    let input = BudgetInput {
        monthly_budget_inr: cli.budget,
        api_allocation_percent: cli.api_percent,
        hosting_allocation_percent: cli.hosting_percent,
        users: cli.users,
        concurrent_sessions: cli.concurrency,
        minutes_per_month: cli.minutes,
        use_voice_agent: !cli.inbuilt_voice,
    };

    let ranked = rank_combinations(&catalog, &input);
    let shown = ranked.iter().take(cli.top).collect::<Vec<_>>();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No viable combinations for the requested load.");
        return Ok(());
    }

    println!(
        "{:>4}  {:<52} {:>14} {:>12} {:>7} {:>6} {:>9}",
        "#", "Setup", "Total/mo", "Total (USD)", "Score", "Fits", "Warnings"
    );
    for (rank, combination) in shown.iter().enumerate() {
        let voice = combination
            .voice_agent
            .as_ref()
            .map_or("inbuilt voice".to_string(), |a| a.name.clone());
        let setup = format!(
            "{} x{} / {} / {}",
            combination.avatar_plan.name,
            combination.avatar_accounts,
            voice,
            combination.hosting_option.name
        );
        println!(
            "{:>4}  {:<52} {:>14} {:>12} {:>7.1} {:>6} {:>9}",
            rank + 1,
            setup,
            format_inr(combination.total_cost_inr),
            format_usd(combination.breakdown.total_cost_usd),
            combination.score,
            if combination.fits_budget { "yes" } else { "no" },
            combination.warnings.len()
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
