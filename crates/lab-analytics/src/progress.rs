//! Completion ratios for one idea.

use lab_core::entities::{Deliverable, Task};
use lab_core::enums::{DeliverableStatus, ItemStatus};
use lab_core::responses::ProgressReport;

/// Weight of task completion in the overall score.
pub const TASK_WEIGHT: f64 = 0.7;
/// Weight of deliverable completion in the overall score.
pub const DELIVERABLE_WEIGHT: f64 = 0.3;

/// Compute task, deliverable, and weighted overall completion.
///
/// Discarded tasks are left out of the task pool. An empty pool or an empty
/// deliverable list yields `0.0`, not `1.0`. `overall` is weighted from the
/// unrounded ratios; all three are then rounded to four decimals.
#[must_use]
pub fn progress(tasks: &[Task], deliverables: &[Deliverable]) -> ProgressReport {
    let pool = tasks
        .iter()
        .filter(|t| t.status != ItemStatus::Discarded);
    let (pool_size, completed_tasks) = pool.fold((0, 0), |(size, done), t| {
        (size + 1, done + usize::from(t.status == ItemStatus::Completed))
    });
    let completed_deliverables = deliverables
        .iter()
        .filter(|d| d.status == DeliverableStatus::Completed)
        .count();

    let task_completion = ratio(completed_tasks, pool_size);
    let deliverable_completion = ratio(completed_deliverables, deliverables.len());
    // Plain multiply-add: the result must match an unfused computation bit for bit.
    #[allow(clippy::suboptimal_flops)]
    let overall = TASK_WEIGHT * task_completion + DELIVERABLE_WEIGHT * deliverable_completion;

    ProgressReport {
        task_completion: round4(task_completion),
        deliverable_completion: round4(deliverable_completion),
        overall: round4(overall),
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Round to four decimals, ties to even.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round_ties_even() / 10_000.0
}
