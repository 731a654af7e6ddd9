use anyhow::Result;
use clap::Parser;
use metricfu_scan::cli::{Cli, Commands};
use metricfu_scan::config::ScanConfig;
use metricfu_scan::io::output::create_writer;
use metricfu_scan::measures::InMemorySink;
use metricfu_scan::scanner::{run_analysis, ScanReport};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            report_path,
            metric,
            ignore,
            format,
            output,
            verbosity,
        } => {
            init_logging(verbosity);

            let mut config = ScanConfig::load(&path);
            if let Some(report_path) = report_path {
                config.report_path = report_path;
            }
            if let Some(metric) = metric {
                config.complexity_metric = metric;
            }
            if let Some(ignore) = ignore {
                config.ignore_patterns = ignore;
            }

            let mut sink = InMemorySink::new();
            let summary = run_analysis(&path, &config, &mut sink)?;

            let report = ScanReport {
                summary,
                measures: sink,
            };
            create_writer(format, output)?.write_report(&report)?;
            Ok(())
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
