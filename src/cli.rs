use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "metricfu-scan")]
#[command(about = "Aggregates MetricFu complexity reports for Ruby projects", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a Ruby project against its MetricFu report
    Analyze {
        /// Project base directory
        path: PathBuf,

        /// Report location relative to the project (default tmp/metric_fu/report.yml)
        #[arg(long = "report-path")]
        report_path: Option<String>,

        /// Complexity metric to read: saikuro or cane
        #[arg(long = "metric")]
        metric: Option<String>,

        /// Glob patterns for files to skip
        #[arg(long = "ignore", value_delimiter = ',')]
        ignore: Option<Vec<String>>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
}
