use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable quote summary
    Text,
    /// Breakdown (and ROI) as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "benefits-quote")]
#[command(about = "Benefits video pricing and proposal tool", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a selections JSON file
    Quote {
        /// Selections JSON file
        selections: PathBuf,

        /// Pricing config override (JSON)
        #[arg(long)]
        prices: Option<PathBuf>,

        /// Employee count for ROI metrics
        #[arg(long)]
        employees: Option<i64>,

        /// ROI benchmark override (JSON)
        #[arg(long, requires = "employees")]
        benchmarks: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Fill a proposal template's [[TOKEN]] placeholders
    Fill {
        /// Template file (e.g. an extracted word/document.xml)
        #[arg(long)]
        template: PathBuf,

        /// Selections JSON file
        #[arg(long)]
        selections: PathBuf,

        /// Output file
        #[arg(long)]
        out: PathBuf,

        #[arg(long)]
        client: Option<String>,

        #[arg(long)]
        project: Option<String>,

        #[arg(long)]
        date: Option<String>,

        /// Valid-through date
        #[arg(long)]
        valid: Option<String>,

        /// Package name (defaults to the preset label)
        #[arg(long)]
        package: Option<String>,

        /// Subscription description (defaults to the plan label)
        #[arg(long)]
        subscription: Option<String>,

        /// Escape values for XML character data
        #[arg(long)]
        xml_escape: bool,
    },

    /// Capture a quote snapshot for later verification
    Snapshot {
        /// Selections JSON file
        selections: PathBuf,

        /// Employee count for ROI metrics
        #[arg(long)]
        employees: Option<i64>,

        /// Pricing config override (JSON)
        #[arg(long)]
        prices: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Verify a stored quote snapshot against the current price table
    Verify {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Pricing config override (JSON)
        #[arg(long)]
        prices: Option<PathBuf>,
    },
}
