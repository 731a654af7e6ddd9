//! Parser for the MetricFu report file.
//!
//! MetricFu serializes a Ruby hash with symbol keys, so every key in the
//! YAML carries a literal leading colon (`:saikuro:`, `:filename:`). Only
//! the sections this scanner consumes are modeled; anything else in the
//! report is ignored.

use crate::core::{ComplexityMetric, Error, FunctionRecord, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct MetricfuReport {
    #[serde(rename = ":saikuro", default)]
    saikuro: Option<SaikuroSection>,
    #[serde(rename = ":cane", default)]
    cane: Option<CaneSection>,
}

#[derive(Debug, Default, Deserialize)]
struct SaikuroSection {
    #[serde(rename = ":files", default)]
    files: Vec<SaikuroFile>,
}

#[derive(Debug, Deserialize)]
struct SaikuroFile {
    #[serde(rename = ":filename")]
    filename: String,
    #[serde(rename = ":classes", default)]
    classes: Vec<SaikuroClass>,
}

#[derive(Debug, Deserialize)]
struct SaikuroClass {
    #[serde(rename = ":methods", default)]
    methods: Vec<SaikuroMethod>,
}

#[derive(Debug, Deserialize)]
struct SaikuroMethod {
    #[serde(rename = ":name")]
    name: String,
    #[serde(rename = ":complexity")]
    complexity: u32,
}

#[derive(Debug, Default, Deserialize)]
struct CaneSection {
    #[serde(rename = ":abc_complexity", default)]
    abc_complexity: Vec<CaneEntry>,
}

#[derive(Debug, Deserialize)]
struct CaneEntry {
    #[serde(rename = ":file")]
    file: String,
    #[serde(rename = ":method")]
    method: String,
    #[serde(rename = ":complexity")]
    complexity: u32,
}

impl MetricfuReport {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| Error::report(path, e))
    }

    /// Function records reported for `file_name` under the given metric.
    ///
    /// Report entries carry project-relative paths; matching is by
    /// basename, the identity the scanner enumerates files under. A file
    /// absent from the report yields an empty vec.
    pub fn functions_for(&self, file_name: &str, metric: ComplexityMetric) -> Vec<FunctionRecord> {
        match metric {
            ComplexityMetric::Saikuro => self.saikuro_functions(file_name),
            ComplexityMetric::Cane => self.cane_functions(file_name),
        }
    }

    fn saikuro_functions(&self, file_name: &str) -> Vec<FunctionRecord> {
        let Some(section) = &self.saikuro else {
            return Vec::new();
        };
        section
            .files
            .iter()
            .filter(|f| basename(&f.filename) == file_name)
            .flat_map(|f| &f.classes)
            .flat_map(|c| &c.methods)
            .map(|m| FunctionRecord::new(m.name.clone(), m.complexity))
            .collect()
    }

    fn cane_functions(&self, file_name: &str) -> Vec<FunctionRecord> {
        let Some(section) = &self.cane else {
            return Vec::new();
        };
        section
            .abc_complexity
            .iter()
            .filter(|e| basename(&e.file) == file_name)
            .map(|e| FunctionRecord::new(e.method.clone(), e.complexity))
            .collect()
    }
}

/// Parse the records for one source file out of a report on disk.
pub fn parse_functions(
    file_name: &str,
    report_path: &Path,
    metric: ComplexityMetric,
) -> Result<Vec<FunctionRecord>> {
    let report = MetricfuReport::load(report_path)?;
    Ok(report.functions_for(file_name, metric))
}

fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
