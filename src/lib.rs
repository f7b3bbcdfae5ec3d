//! label-automerge: merge pull requests that carry an automerge label
//!
//! Runs as a GitHub Action step. The triggering event names a pull
//! request; the action fetches it, checks its labels and mergeability,
//! and merges it through the REST API when every guard passes.

pub mod config;
pub mod error;
pub mod event;
pub mod merge;
pub mod platform;
pub mod types;
