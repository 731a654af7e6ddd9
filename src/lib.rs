// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod measures;
pub mod report;
pub mod scanner;

// Re-export commonly used types
pub use crate::core::{
    aggregate, bucket_index, ComplexityMetric, Error, FileComplexityResult, FunctionRecord,
    Result, SourceFile, FILE_DISTRIB_BOTTOM_LIMITS, FUNCTION_DISTRIB_BOTTOM_LIMITS,
};

pub use crate::config::ScanConfig;

pub use crate::measures::{
    InMemorySink, Measure, MeasureSink, PersistenceMode, RangeDistribution, SavedMeasure,
};

pub use crate::report::{parse_functions, resolve_report, MetricfuReport};

pub use crate::scanner::{run_analysis, ScanReport, ScanSummary};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::walker::{find_ruby_files, FileWalker};
