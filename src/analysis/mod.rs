pub mod extractor;
pub mod likelihood;
pub mod report;
pub mod statistics;
