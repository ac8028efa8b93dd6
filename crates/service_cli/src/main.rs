//! bscalc - Black-Scholes calculator CLI
//!
//! Operational front-end for the `pricer_analytic` closed-form kernel.
//!
//! # Commands
//!
//! - `bscalc` / `bscalc menu` - Interactive session: pick one of five
//!   quantities, enter the market inputs, get one result
//! - `bscalc eval --operation <op> ...` - Same evaluation from arguments
//! - `bscalc report ...` - Call/put prices with the full Greek set
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate owns all I/O: prompting,
//! percent-to-fraction conversion, configuration and logging. The
//! analytical layer stays pure.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod input;

pub use error::{CliError, Result};

use commands::eval::OperationArg;
use commands::report::ReportFormat;
use config::{build_config, CliArgs};
use input::{MarketArgs, Prompter};

/// Black-Scholes option price and Greeks calculator
#[derive(Parser)]
#[command(name = "bscalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Significant digits printed for results
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    /// Reject non-positive spot, strike, volatility or expiry
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu session (default)
    Menu,

    /// Evaluate one quantity from arguments
    Eval {
        /// Quantity to evaluate
        #[arg(short, long, value_enum)]
        operation: OperationArg,

        #[command(flatten)]
        market: MarketArgs,
    },

    /// Print call and put prices with all Greeks
    Report {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,

        #[command(flatten)]
        market: MarketArgs,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            precision: cli.precision,
            strict: cli.strict,
            verbose: cli.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli), |name| std::env::var(name).ok())
        .context("failed to load configuration")?;

    init_tracing(config.log_level.directive());
    debug!(?config, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), out);
            commands::menu::run(&mut prompter, &config).context("menu session failed")?;
        }
        Commands::Eval { operation, market } => {
            commands::eval::run(operation, market.into(), &config, &mut out)
                .context("evaluation failed")?;
        }
        Commands::Report { format, market } => {
            commands::report::run(market.into(), format, &config, &mut out)
                .context("report failed")?;
        }
    }

    info!("Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["bscalc"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_eval_arguments_parse() {
        let cli = Cli::try_parse_from([
            "bscalc",
            "eval",
            "--operation",
            "gamma",
            "--notional",
            "100",
            "--spot",
            "42.5",
            "--strike",
            "40",
            "--volatility",
            "30",
            "--expiry",
            "0.5",
            "--rate",
            "-0.25",
            "--strict",
        ])
        .unwrap();

        assert!(cli.strict);
        match cli.command {
            Some(Commands::Eval { operation, market }) => {
                assert_eq!(operation, OperationArg::Gamma);
                assert_eq!(market.notional, 100);
                assert_eq!(market.rate, -0.25);
                assert_eq!(market.dividend, 0.0);
            }
            _ => panic!("Expected eval subcommand"),
        }
    }

    #[test]
    fn test_report_format_parse() {
        let cli = Cli::try_parse_from([
            "bscalc", "report", "--format", "json", "--notional", "1", "--spot", "100",
            "--strike", "100", "--volatility", "20", "--expiry", "1", "--rate", "5",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Report { format, .. }) => assert_eq!(format, ReportFormat::Json),
            _ => panic!("Expected report subcommand"),
        }
    }

    #[test]
    fn test_missing_market_argument_rejected() {
        let result = Cli::try_parse_from(["bscalc", "eval", "--operation", "call", "--spot", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_args_conversion() {
        let cli = Cli::try_parse_from(["bscalc", "--verbose", "--precision", "6", "menu"]).unwrap();
        let args = CliArgs::from(&cli);
        assert!(args.verbose);
        assert_eq!(args.precision, Some(6));
        assert!(args.config_file.is_none());
    }
}
