//! Travel event classification

pub mod classifier;
pub mod keywords;
pub mod normalizer;

pub use classifier::{Classification, KeywordClassifier};
pub use normalizer::scan_buffer;
