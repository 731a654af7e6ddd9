//! Measure model and the sink the scanner emits into.
//!
//! A measure is one value attached to one source file: either a scalar or a
//! range distribution (a histogram over a fixed bottom-limits table). The
//! sink trait is the seam between the per-file analysis and whatever stores
//! or renders the results.

use crate::core::{bucket_index, SourceFile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Histogram over an ascending table of bucket lower bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeDistribution {
    limits: Vec<u32>,
    counts: Vec<u64>,
}

impl RangeDistribution {
    pub fn new(limits: &[u32]) -> Self {
        Self {
            limits: limits.to_vec(),
            counts: vec![0; limits.len()],
        }
    }

    /// Count `value` in its bucket. Values below the first limit are
    /// dropped rather than assigned a sentinel bucket.
    pub fn add(&mut self, value: u32) {
        if let Some(index) = bucket_index(value, &self.limits) {
            self.counts[index] += 1;
        }
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total_count(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl fmt::Display for RangeDistribution {
    /// Renders as `limit=count` pairs, e.g. `0=0;5=1;10=2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (limit, count) in self.limits.iter().zip(&self.counts) {
            if !first {
                f.write_str(";")?;
            }
            write!(f, "{limit}={count}")?;
            first = false;
        }
        Ok(())
    }
}

/// One measure emitted for a source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metric", content = "value")]
pub enum Measure {
    /// Distribution of the file's total complexity.
    FileComplexityDistribution(RangeDistribution),
    /// Mean complexity across the file's functions.
    FunctionComplexity(f64),
    /// Distribution of the individual function complexities.
    FunctionComplexityDistribution(RangeDistribution),
}

/// Whether a measure is kept in memory only or persisted by the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersistenceMode {
    Memory,
    Full,
}

/// Destination for the measures the scanner produces.
pub trait MeasureSink {
    fn save_measure(&mut self, file: &SourceFile, measure: Measure, mode: PersistenceMode);
}

/// A saved measure together with its persistence mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMeasure {
    #[serde(flatten)]
    pub measure: Measure,
    pub mode: PersistenceMode,
}

/// Sink that collects everything in memory, keyed by file path.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InMemorySink {
    measures: BTreeMap<PathBuf, Vec<SavedMeasure>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }

    /// Number of files that received at least one measure.
    pub fn file_count(&self) -> usize {
        self.measures.len()
    }

    pub fn measures_for(&self, path: &std::path::Path) -> Option<&[SavedMeasure]> {
        self.measures.get(path).map(|v| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &[SavedMeasure])> {
        self.measures.iter().map(|(path, m)| (path, m.as_slice()))
    }
}

impl MeasureSink for InMemorySink {
    fn save_measure(&mut self, file: &SourceFile, measure: Measure, mode: PersistenceMode) {
        self.measures
            .entry(file.path.clone())
            .or_default()
            .push(SavedMeasure { measure, mode });
    }
}
