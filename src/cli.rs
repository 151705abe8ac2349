use crate::config::SettingsOverrides;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "clover-status",
    version,
    about = "Clover coverage report to CI status and comment payloads"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the coverage report
    Analyze(AnalyzeCommand),
    /// Print the status-creation call body
    Status(StatusCommand),
    /// Print the comment-creation call body
    Comment(CommentCommand),
    /// Send status and comment bodies to a sink
    Publish(PublishCommand),
}

#[derive(Args, Clone, Debug)]
pub struct ReportArgs {
    /// Path to the Clover XML report
    pub path: PathBuf,

    #[arg(long, env = "CLOVER_THRESHOLD_ALERT")]
    pub threshold_alert: Option<f64>,

    #[arg(long, env = "CLOVER_THRESHOLD_WARNING")]
    pub threshold_warning: Option<f64>,

    #[arg(long, env = "CLOVER_TARGET_URL")]
    pub target_url: Option<String>,

    #[arg(long, env = "CLOVER_STATUS_CONTEXT")]
    pub status_context: Option<String>,

    #[arg(long, env = "CLOVER_COMMENT_CONTEXT")]
    pub comment_context: Option<String>,

    /// Directory holding clover-status.toml
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

impl ReportArgs {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            threshold_alert: self.threshold_alert,
            threshold_warning: self.threshold_warning,
            target_url: self.target_url.clone(),
            status_context: self.status_context.clone(),
            comment_context: self.comment_context.clone(),
        }
    }
}

#[derive(Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub report: ReportArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Exit 2 on red and 1 on yellow coverage
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct StatusCommand {
    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args)]
pub struct CommentCommand {
    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args)]
pub struct PublishCommand {
    #[command(flatten)]
    pub report: ReportArgs,
    /// Write status.json and comment.json here instead of stdout
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    #[arg(long)]
    pub no_status: bool,
    #[arg(long)]
    pub no_comment: bool,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Status,
    Comment,
}
