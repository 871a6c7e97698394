//! Cosmic/Evolution Correlator CLI.
//!
//! Thin boundary over the analysis engine:
//! - Parses ISO-8601 date ranges with documented defaults
//! - Emits JSON payloads on stdout, logs on stderr
//! - Catches engine errors and reports structured failures with a
//!   stable exit code

use clap::{Args, Parser, Subcommand};
use cev_common::{DateRange, Error, Result};
use cev_config::AnalysisParams;
use cev_core::analyzer::{parse_kind, Analyzer, CosmicSource};
use cev_core::exit_codes::ExitCode;
use cev_core::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use serde::Serialize;
use std::path::PathBuf;

/// Correlates astronomical forcing signals with evolutionary event records
#[derive(Parser)]
#[command(name = "cev-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Path to an analysis parameters TOML file
    #[arg(long, global = true, env = "CEV_CONFIG")]
    config: Option<PathBuf>,

    /// Override the provider seed from the parameters file
    #[arg(long, global = true, env = "CEV_SEED")]
    seed: Option<u64>,

    /// Pretty-print the JSON payload
    #[arg(long, global = true)]
    pretty: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Log format (human, jsonl)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

#[derive(Args, Debug)]
struct RangeOpts {
    /// Range start, ISO-8601 (default 2000-01-01)
    #[arg(long)]
    start: Option<String>,

    /// Range end, ISO-8601 (default today)
    #[arg(long)]
    end: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List cosmic events (FTRT peaks and geomagnetic weak periods)
    Cosmic {
        #[command(flatten)]
        range: RangeOpts,

        /// Restrict to one source (ftrt, geomagnetic); unknown values
        /// return both
        #[arg(long)]
        source: Option<String>,
    },
    /// List evolutionary events (speciation and extinction episodes)
    Evolutionary {
        #[command(flatten)]
        range: RangeOpts,

        /// Restrict to one kind (speciation, extinction); unknown values
        /// return everything
        #[arg(long)]
        kind: Option<String>,
    },
    /// Run the full correlation pipeline
    Correlate {
        #[command(flatten)]
        range: RangeOpts,
    },
    /// Estimate molecular divergence dates for taxa
    Divergence {
        /// Taxon identifiers
        #[arg(required = true)]
        taxa: Vec<String>,
    },
}

/// Structured failure payload emitted on stderr before a nonzero exit.
#[derive(Serialize)]
struct Failure {
    code: u32,
    category: String,
    message: String,
}

fn main() {
    let cli = Cli::parse();
    let log_config = LogConfig::from_env(cli.global.log_level, cli.global.log_format);
    init_logging(&log_config);

    match run(&cli) {
        Ok(()) => std::process::exit(ExitCode::Success.as_i32()),
        Err(err) => {
            tracing::error!(code = err.code(), category = %err.category(), "{}", err);
            let failure = Failure {
                code: err.code(),
                category: err.category().to_string(),
                message: err.to_string(),
            };
            if let Ok(json) = serde_json::to_string(&failure) {
                eprintln!("{}", json);
            }
            std::process::exit(ExitCode::from(&err).as_i32());
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut params = match &cli.global.config {
        Some(path) => AnalysisParams::load(path).map_err(|e| Error::Config(e.to_string()))?,
        None => AnalysisParams::default(),
    };
    if let Some(seed) = cli.global.seed {
        params.seed = seed;
    }
    let analyzer = Analyzer::new(params);

    match &cli.command {
        Commands::Cosmic { range, source } => {
            let range = DateRange::parse(range.start.as_deref(), range.end.as_deref())?;
            let events =
                analyzer.cosmic_events(&range, CosmicSource::parse(source.as_deref()));
            emit(&events, cli.global.pretty)
        }
        Commands::Evolutionary { range, kind } => {
            let range = DateRange::parse(range.start.as_deref(), range.end.as_deref())?;
            let events = analyzer.evolutionary_events(&range, parse_kind(kind.as_deref()));
            emit(&events, cli.global.pretty)
        }
        Commands::Correlate { range } => {
            let range = DateRange::parse(range.start.as_deref(), range.end.as_deref())?;
            let result = analyzer.correlate(&range)?;
            emit(&result, cli.global.pretty)
        }
        Commands::Divergence { taxa } => {
            let estimates = analyzer.divergence_estimates(taxa);
            emit(&estimates, cli.global.pretty)
        }
    }
}

fn emit<T: Serialize>(payload: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    println!("{}", json);
    Ok(())
}
