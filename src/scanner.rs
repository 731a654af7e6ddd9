//! Drives one analysis run over a project.
//!
//! Locates the MetricFu report, enumerates Ruby sources, and feeds each
//! file's aggregated complexity into the measure sink. A failure on one
//! file is logged and counted; the remaining files are still processed.

use crate::config::ScanConfig;
use crate::core::{
    aggregate, Result, SourceFile, FILE_DISTRIB_BOTTOM_LIMITS, FUNCTION_DISTRIB_BOTTOM_LIMITS,
};
use crate::io::walker::find_ruby_files;
use crate::measures::{Measure, MeasureSink, PersistenceMode, RangeDistribution};
use crate::report::{parse_functions, resolve_report};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outcome counts for one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Ruby files enumerated in the project.
    pub files_seen: usize,
    /// Files that produced measures.
    pub files_measured: usize,
    /// Files whose report lookup failed.
    pub files_failed: usize,
    /// Files with no functions in the report.
    pub files_skipped: usize,
}

/// Everything one run produces, in renderable form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport<S> {
    pub summary: ScanSummary,
    pub measures: S,
}

/// Run the complexity analysis for the project at `base_dir`.
///
/// When the report file is missing the run is skipped entirely and the
/// returned summary is empty; this is a warning, not a failure of the run.
pub fn run_analysis(
    base_dir: &Path,
    config: &ScanConfig,
    sink: &mut dyn MeasureSink,
) -> Result<ScanSummary> {
    let metric = config.metric()?;

    let Some(report) = resolve_report(base_dir, &config.report_path) else {
        return Ok(ScanSummary::default());
    };

    let files = find_ruby_files(base_dir, config.ignore_patterns.clone())?;
    let mut summary = ScanSummary {
        files_seen: files.len(),
        ..ScanSummary::default()
    };

    for file in &files {
        log::debug!("Analyzing functions in {}", file.path.display());
        match parse_functions(&file.name, &report, metric) {
            Ok(functions) => match aggregate(&functions) {
                Some(result) => {
                    save_file_measures(sink, file, &functions, result.total, result.mean);
                    summary.files_measured += 1;
                }
                None => {
                    log::debug!("No functions reported for {}", file.name);
                    summary.files_skipped += 1;
                }
            },
            Err(e) => {
                log::error!(
                    "Cannot analyze {} for complexity: {e}",
                    file.path.display()
                );
                summary.files_failed += 1;
            }
        }
    }

    Ok(summary)
}

fn save_file_measures(
    sink: &mut dyn MeasureSink,
    file: &SourceFile,
    functions: &[crate::core::FunctionRecord],
    total: u32,
    mean: f64,
) {
    let mut file_distribution = RangeDistribution::new(&FILE_DISTRIB_BOTTOM_LIMITS);
    file_distribution.add(total);
    sink.save_measure(
        file,
        Measure::FileComplexityDistribution(file_distribution),
        PersistenceMode::Memory,
    );

    sink.save_measure(
        file,
        Measure::FunctionComplexity(mean),
        PersistenceMode::Full,
    );

    let mut function_distribution = RangeDistribution::new(&FUNCTION_DISTRIB_BOTTOM_LIMITS);
    for function in functions {
        function_distribution.add(function.complexity);
    }
    sink.save_measure(
        file,
        Measure::FunctionComplexityDistribution(function_distribution),
        PersistenceMode::Memory,
    );
}
