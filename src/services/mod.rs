pub mod features;
pub mod ingest;
pub mod providers;
pub mod recommendations;
pub mod selector;
pub mod similarity;
