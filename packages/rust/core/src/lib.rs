//! Leadbase core: record building, deduplication, the accumulation store,
//! email drafts, and the process/confirm pipeline.

pub mod dedup;
pub mod emails;
pub mod pipeline;
pub mod records;
pub mod store;

pub use pipeline::{ProcessOutcome, confirm_batch, process_file};
pub use store::{LeadBatch, LeadStore, StoreTotals};
