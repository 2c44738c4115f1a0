//! Next-action suggestions for one idea.

use lab_core::entities::{Deliverable, Task};
use lab_core::enums::{DeliverableStatus, ItemStatus};
use lab_core::month::YearMonth;

use crate::is_delayed;

/// Most suggestions returned.
pub const MAX_ACTIONS: usize = 7;

/// Returned when no rule produces a suggestion.
pub const FALLBACK_ACTION: &str =
    "No immediate blockers found. Review and set next quarterly target.";

/// Suggest what to work on next, most urgent first.
///
/// Each rule adds at most one line, in this order: the first delayed task,
/// the first in-progress task, the first planned task, and the pending
/// deliverable with the earliest due month. "First" is input order. Never
/// empty.
#[must_use]
pub fn recommend(
    tasks: &[Task],
    deliverables: &[Deliverable],
    current_month: YearMonth,
) -> Vec<String> {
    let mut actions = Vec::new();

    if let Some(task) = tasks.iter().find(|t| is_delayed(t, current_month)) {
        actions.push(format!("Resolve delayed task first: {}", task.title));
    }
    if let Some(task) = tasks.iter().find(|t| t.status == ItemStatus::InProgress) {
        actions.push(format!("Close current in-progress task: {}", task.title));
    }
    if let Some(task) = tasks.iter().find(|t| t.status == ItemStatus::Planned) {
        actions.push(format!("Start highest-priority planned task: {}", task.title));
    }

    // min_by_key keeps the first of equal keys, matching a stable sort.
    if let Some(nearest) = deliverables
        .iter()
        .filter(|d| d.status != DeliverableStatus::Completed)
        .min_by_key(|d| d.due_month)
    {
        actions.push(format!(
            "Prepare deliverable for due month {}: {}",
            nearest.due_month, nearest.title
        ));
    }

    if actions.is_empty() {
        actions.push(FALLBACK_ACTION.to_string());
    }
    actions.truncate(MAX_ACTIONS);
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{deliverable, month, task};
    use pretty_assertions::assert_eq;

    fn current() -> YearMonth {
        month("2026-03")
    }

    #[test]
    fn empty_gives_fallback() {
        assert_eq!(recommend(&[], &[], current()), [FALLBACK_ACTION]);
    }

    #[test]
    fn all_rules_in_priority_order() {
        let tasks = [
            task("p1", ItemStatus::Planned, "2026-06"),
            task("i1", ItemStatus::InProgress, "2026-05"),
            task("late", ItemStatus::OnHold, "2026-01"),
            task("p2", ItemStatus::Planned, "2026-04"),
        ];
        let deliverables = [
            deliverable("d-late", DeliverableStatus::Planned, "2026-09"),
            deliverable("d-done", DeliverableStatus::Completed, "2026-01"),
            deliverable("d-soon", DeliverableStatus::InProgress, "2026-04"),
        ];
        assert_eq!(
            recommend(&tasks, &deliverables, current()),
            [
                "Resolve delayed task first: Task late",
                "Close current in-progress task: Task i1",
                "Start highest-priority planned task: Task p1",
                "Prepare deliverable for due month 2026-04: Deliverable d-soon",
            ]
        );
    }

    #[test]
    fn equal_due_months_keep_input_order() {
        let deliverables = [
            deliverable("first", DeliverableStatus::Planned, "2026-05"),
            deliverable("second", DeliverableStatus::Planned, "2026-05"),
        ];
        assert_eq!(
            recommend(&[], &deliverables, current()),
            ["Prepare deliverable for due month 2026-05: Deliverable first"]
        );
    }

    #[test]
    fn overdue_planned_task_fires_two_rules() {
        let tasks = [task("t", ItemStatus::Planned, "2026-02")];
        assert_eq!(
            recommend(&tasks, &[], current()),
            [
                "Resolve delayed task first: Task t",
                "Start highest-priority planned task: Task t",
            ]
        );
    }

    #[test]
    fn only_completed_work_gives_fallback() {
        let tasks = [task("t", ItemStatus::Completed, "2026-01")];
        let deliverables = [deliverable("d", DeliverableStatus::Completed, "2026-01")];
        assert_eq!(recommend(&tasks, &deliverables, current()), [FALLBACK_ACTION]);
    }

    #[test]
    fn never_empty_and_bounded() {
        let statuses = ItemStatus::ALL;
        for status in statuses {
            let tasks = [task("t", status, "2026-01")];
            let actions = recommend(&tasks, &[], current());
            assert!((1..=MAX_ACTIONS).contains(&actions.len()), "{status}");
        }
    }
}
