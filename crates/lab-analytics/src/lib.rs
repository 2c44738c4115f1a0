//! # lab-analytics
//!
//! Operational signals derived from an idea's entity state:
//! - [`progress`]: completion ratios
//! - [`detect_risks`]: delay, staleness and dependency flags
//! - [`recommend`]: prioritized next actions
//! - [`overview`]: workspace dashboard rollup
//!
//! Every function is synchronous and pure. The evaluation month and clock
//! are parameters, never read implicitly.

pub mod dashboard;
pub mod progress;
pub mod recommend;
pub mod risk;

use chrono::{DateTime, TimeDelta, Utc};
use lab_core::entities::Task;
use lab_core::enums::ItemStatus;
use lab_core::month::YearMonth;

pub use dashboard::overview;
pub use progress::progress;
pub use recommend::recommend;
pub use risk::{DependencyLookup, TaskStatusIndex, detect_risks};

/// Days without an update log before an idea counts as stale.
pub const STALENESS_WINDOW_DAYS: i64 = 14;

/// A task is delayed when its due month has passed and it is not completed.
#[must_use]
pub fn is_delayed(task: &Task, current_month: YearMonth) -> bool {
    task.due_month < current_month && task.status != ItemStatus::Completed
}

/// Start of the staleness window ending at `now`.
#[must_use]
pub fn staleness_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - TimeDelta::days(STALENESS_WINDOW_DAYS)
}


#[cfg(test)]
mod tests {
    use super::fixtures::{month, now, task};
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ItemStatus::InProgress, "2026-02", true)]
    #[case(ItemStatus::Planned, "2025-12", true)]
    #[case(ItemStatus::Discarded, "2026-02", true)]
    #[case(ItemStatus::Completed, "2026-02", false)]
    #[case(ItemStatus::InProgress, "2026-03", false)]
    #[case(ItemStatus::InProgress, "2026-04", false)]
    fn delayed_predicate(#[case] status: ItemStatus, #[case] due: &str, #[case] expected: bool) {
        assert_eq!(is_delayed(&task("t", status, due), month("2026-03")), expected);
    }

    #[test]
    fn cutoff_is_fourteen_days_back() {
        assert_eq!((now() - staleness_cutoff(now())).num_days(), 14);
    }
}
