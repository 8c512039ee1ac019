pub mod dataset;
pub mod generator;

pub use dataset::{Dataset, JsonEdge};
pub use generator::{DatasetGenerator, SuiteEntry, DEFAULT_SEED, STANDARD_SUITE};
