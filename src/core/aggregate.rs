//! Pure aggregation of per-function complexity scores.
//!
//! One pass over the records of a single file: sum, mean, and the bucket
//! classifications the measurement sink turns into distributions. Holds no
//! state and touches nothing outside its input.

use crate::core::{FileComplexityResult, FunctionRecord};

/// Bottom limits for classifying a file's total complexity.
pub const FILE_DISTRIB_BOTTOM_LIMITS: [u32; 7] = [0, 5, 10, 20, 30, 60, 90];

/// Bottom limits for classifying a single function's complexity.
pub const FUNCTION_DISTRIB_BOTTOM_LIMITS: [u32; 9] = [1, 2, 4, 6, 8, 10, 12, 20, 30];

/// Classify `value` against an ascending table of bucket lower bounds.
///
/// Returns the index of the last bucket whose lower bound is <= `value`,
/// or `None` when the value sits below the first bound. A value exactly
/// equal to a bound falls into the bucket starting at that bound.
pub fn bucket_index(value: u32, limits: &[u32]) -> Option<usize> {
    limits
        .iter()
        .rposition(|&limit| value >= limit)
}

/// Aggregate one file's function records.
///
/// Returns `None` for an empty record list: a file without reported
/// functions gets no measures at all, which is not an error.
pub fn aggregate(functions: &[FunctionRecord]) -> Option<FileComplexityResult> {
    if functions.is_empty() {
        return None;
    }

    let total: u32 = functions.iter().map(|f| f.complexity).sum();
    let mean = f64::from(total) / functions.len() as f64;

    // Total is non-negative and the file table starts at 0, so this
    // always classifies.
    let file_bucket = bucket_index(total, &FILE_DISTRIB_BOTTOM_LIMITS)?;

    let function_buckets = functions
        .iter()
        .filter_map(|f| bucket_index(f.complexity, &FUNCTION_DISTRIB_BOTTOM_LIMITS))
        .collect();

    Some(FileComplexityResult {
        total,
        mean,
        file_bucket,
        function_buckets,
    })
}
