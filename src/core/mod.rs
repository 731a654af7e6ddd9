pub mod aggregate;
pub mod errors;
pub mod types;

pub use aggregate::{
    aggregate, bucket_index, FILE_DISTRIB_BOTTOM_LIMITS, FUNCTION_DISTRIB_BOTTOM_LIMITS,
};
pub use errors::{Error, Result};
pub use types::{ComplexityMetric, FileComplexityResult, FunctionRecord, SourceFile};
