//! Entity structs for all labtrack domain objects.
//!
//! The analytics engine only reads these; a storage layer owns their
//! lifecycle. All structs derive `Serialize`, `Deserialize`, and `JsonSchema`
//! for JSON roundtrip and schema validation.

mod deliverable;
mod idea;
mod task;
mod update_log;

pub use deliverable::Deliverable;
pub use idea::{Idea, PriorityInputs};
pub use task::Task;
pub use update_log::{DAILY_REPORT_SOURCE, UpdateLog};
