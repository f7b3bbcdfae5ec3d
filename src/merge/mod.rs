//! Merge engine for a single pull request
//!
//! Three-phase pattern:
//! 1. Gather - resolve the PR and fetch its snapshot (effectful)
//! 2. Plan - run the guards and create a `MergePlan` (pure, testable)
//! 3. Execute - perform the merge (effectful, never fails the run)

mod execute;
mod gather;
mod outcome;
mod plan;

pub use execute::{MergeOptions, execute_merge};
pub use gather::run_automerge;
pub use outcome::Outcome;
pub use plan::{
    GuardRejection, MergePlan, build_merge_request, check_guards, commit_title,
    create_merge_plan, has_label, strip_checklist,
};
