//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A single function's complexity score as reported by MetricFu.
///
/// Records are produced by the report parser and live only for the
/// duration of one file's analysis pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    pub complexity: u32,
}

impl FunctionRecord {
    pub fn new(name: impl Into<String>, complexity: u32) -> Self {
        Self {
            name: name.into(),
            complexity,
        }
    }
}

/// Aggregated complexity figures for one source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileComplexityResult {
    /// Sum of all function complexities in the file.
    pub total: u32,
    /// Total divided by the number of functions.
    pub mean: f64,
    /// Index into the file-level bottom-limits table for `total`.
    pub file_bucket: usize,
    /// One index per function, into the function-level table.
    pub function_buckets: Vec<usize>,
}

/// A Ruby source file known to the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceFile {
    /// File basename, the key MetricFu reports functions under.
    pub name: String,
    pub path: PathBuf,
}

impl SourceFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }
}

/// Which MetricFu report section supplies the complexity scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ComplexityMetric {
    #[default]
    Saikuro,
    Cane,
}

impl ComplexityMetric {
    pub fn display_name(&self) -> &str {
        match self {
            ComplexityMetric::Saikuro => "saikuro",
            ComplexityMetric::Cane => "cane",
        }
    }
}

impl fmt::Display for ComplexityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ComplexityMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "saikuro" => Ok(ComplexityMetric::Saikuro),
            "cane" => Ok(ComplexityMetric::Cane),
            other => Err(format!(
                "unknown complexity metric '{other}', expected 'saikuro' or 'cane'"
            )),
        }
    }
}
