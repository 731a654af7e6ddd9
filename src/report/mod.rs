pub mod locator;
pub mod parser;

pub use locator::resolve_report;
pub use parser::{parse_functions, MetricfuReport};
