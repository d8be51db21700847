//! Batch sync from the dataset source into the store.
//!
//! # Algorithm
//!
//! 1. Fetch the full dataset once.
//! 2. For each record, in source order: translate it, ask the store whether
//!    the name already exists (ignoring case), and insert it only if not.
//! 3. The first failing existence check or insert aborts the batch. Rows
//!    already inserted stay; later records are never attempted.
//!
//! A second run over the same dataset inserts nothing and reports every
//! record as skipped.

mod orchestrator;
mod report;

pub use orchestrator::SyncOrchestrator;
pub use report::SyncReport;
