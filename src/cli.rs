use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "inty",
    version,
    about = "Interior company dataset scoring and listing CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./inty.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every company and write the table with a score column
    Score(ScoreCommand),
    /// Count and list companies by city and service type
    List(ListCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum InputFormatArg {
    Csv,
    Json,
    Xlsx,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub input: PathBuf,
    /// Destination CSV (defaults to output.scored_file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormatArg>,
    /// Worksheet to read from .xlsx input (defaults to input.sheet)
    #[arg(long)]
    pub sheet: Option<String>,
    /// Print the N highest scoring companies
    #[arg(long)]
    pub top: Option<usize>,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ListCommand {
    pub input: PathBuf,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub service: Option<String>,
    /// Filter by service before city and list every service match
    #[arg(long)]
    pub service_first: bool,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}
