mod heatmap;
mod logging;
mod summary;
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use drinkdash_core::{
    parse_as_of, Aggregator, Config, DashboardUseCase, GapPolicy, SyntheticGenerator,
};

#[derive(Parser)]
#[command(name = "drinkdash")]
#[command(about = "Drinking analytics dashboard for the terminal", long_about = None)]
struct Cli {
    /// Config file (default: ~/.drinkdash/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Year to generate (default: config, then the current year)
    #[arg(long, global = true)]
    year: Option<i32>,
    /// Seed for the synthetic series (default: config, then 42)
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// "Today" for the streak: today, yesterday, -Nd, -Nw or YYYY-MM-DD
    #[arg(long, global = true, default_value = "today")]
    as_of: String,
    /// Fail on missing days instead of counting them as zero
    #[arg(long, global = true)]
    strict: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the summary stat cards
    Summary,
    /// Show drinks per month
    Monthly,
    /// Print the yearly calendar heatmap
    Heatmap,
    /// Print the aggregate result as JSON
    Export {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Open the Terminal User Interface
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load(Some(config_path.as_path()))?;
    logging::init(cli.verbose, &config.logging.level);
    if config_path.exists() {
        tracing::debug!(path = %config_path.display(), "loaded config");
    } else {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
    }

    let today = Local::now().date_naive();
    let as_of = parse_as_of(&cli.as_of, today).context("Invalid --as-of")?;
    let year = cli.year.or(config.year).unwrap_or(today.year());
    let seed = cli.seed.unwrap_or(config.seed);
    let gap_policy = if cli.strict { GapPolicy::Reject } else { config.gap_policy };
    tracing::debug!(year, seed, %as_of, ?gap_policy, "resolved settings");

    let generator = SyntheticGenerator::new(seed);
    let aggregator = Aggregator::new().with_gap_policy(gap_policy);
    let dashboard = DashboardUseCase::new(&generator, aggregator).load(year, as_of)?;

    match cli.command {
        Some(Commands::Summary) => summary::show_summary(&dashboard),
        Some(Commands::Monthly) => summary::show_monthly(&dashboard),
        Some(Commands::Heatmap) => heatmap::show_heatmap(&dashboard.heatmap),
        Some(Commands::Export { pretty }) => {
            let json = if pretty {
                serde_json::to_string_pretty(&dashboard.data)?
            } else {
                serde_json::to_string(&dashboard.data)?
            };
            println!("{}", json);
        }
        Some(Commands::Tui) | None => tui::run(dashboard)?,
    }
    Ok(())
}
