pub mod aggregator;
pub mod fetcher;
pub mod report;
pub mod types;
