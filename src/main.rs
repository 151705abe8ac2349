mod analyze;
mod cli;
mod clover;
mod config;
mod error;
mod publish;
mod report;
mod types;

use crate::error::CoverageError;
use crate::types::config::ReportSettings;
use crate::types::coverage::{CoverageMetric, Level};
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn prepare(args: &cli::ReportArgs) -> Result<(CoverageMetric, ReportSettings), CoverageError> {
    let loaded = config::load_config(&args.config_dir)?;
    if loaded.is_none() {
        tracing::debug!(
            dir = %args.config_dir.display(),
            "no {} found, using defaults",
            config::DEFAULT_CONFIG_FILE
        );
    }
    let settings = config::resolve_settings(loaded.as_ref(), &args.overrides())?;
    let metric = analyze::analyze(&args.path, &settings.thresholds)?;
    Ok((metric, settings))
}

fn run() -> Result<i32, CoverageError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let (metric, settings) = prepare(&cmd.report)?;
            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Status => report::OutputFormat::Status,
                cli::ReportFormat::Comment => report::OutputFormat::Comment,
            };
            let rendered = report::render(&metric, output_format, &settings)?;
            println!("{rendered}");

            if !cmd.strict {
                return Ok(exit_code::SUCCESS);
            }
            match metric.level {
                Level::Red => Ok(exit_code::BLOCKING),
                Level::Yellow => Ok(exit_code::WARNINGS),
                Level::Green => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Status(cmd) => {
            let (metric, settings) = prepare(&cmd.report)?;
            println!(
                "{}",
                report::render(&metric, report::OutputFormat::Status, &settings)?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Comment(cmd) => {
            let (metric, settings) = prepare(&cmd.report)?;
            println!(
                "{}",
                report::render(&metric, report::OutputFormat::Comment, &settings)?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Publish(cmd) => {
            let (metric, settings) = prepare(&cmd.report)?;
            let options = publish::PublishOptions {
                status: !cmd.no_status,
                comment: !cmd.no_comment,
            };
            match &cmd.out_dir {
                Some(dir) => {
                    let mut sink = publish::writer::DirectorySink::new(dir);
                    publish::publish(&metric, &settings, &options, &mut sink)?;
                    for path in sink.written() {
                        println!("wrote {}", path.display());
                    }
                }
                None => {
                    let mut sink = publish::writer::StdoutSink;
                    publish::publish(&metric, &settings, &options, &mut sink)?;
                }
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
