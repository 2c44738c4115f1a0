//! Risk detection for one idea.
//!
//! Three independent rules are evaluated in order and their results merged:
//!
//! 1. `DELAYED` for every task past its due month and not completed.
//! 2. `LOW_ACTIVITY` when the latest log is older than the staleness window,
//!    or `NO_LOG` when the idea has no logs at all. Never both.
//! 3. `DEPENDENCY_VIOLATION` for every in-progress task with a known,
//!    incomplete dependency. At most one per task.
//!
//! The merge keys risks by `"<CODE>:<related_id>"`. Keys keep the position
//! they were first seen at; the value is the last one written.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use lab_core::entities::{Task, UpdateLog};
use lab_core::enums::{ItemStatus, RelatedEntity, RiskCode};
use lab_core::month::YearMonth;
use lab_core::responses::RiskItem;

use crate::{is_delayed, staleness_cutoff};

/// Resolves a dependency id to the status of the task it names.
///
/// `None` means the id is unknown. Unknown dependencies are neither
/// violations nor completions.
pub trait DependencyLookup {
    fn status_of(&self, task_id: &str) -> Option<ItemStatus>;
}

impl DependencyLookup for HashMap<String, ItemStatus> {
    fn status_of(&self, task_id: &str) -> Option<ItemStatus> {
        self.get(task_id).copied()
    }
}

/// Status of every task in a slice, keyed by task id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStatusIndex {
    statuses: HashMap<String, ItemStatus>,
}

impl TaskStatusIndex {
    /// Index `tasks`. A repeated id keeps the status of its last occurrence.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            statuses: tasks.iter().map(|t| (t.id.clone(), t.status)).collect(),
        }
    }
}

impl DependencyLookup for TaskStatusIndex {
    fn status_of(&self, task_id: &str) -> Option<ItemStatus> {
        self.statuses.status_of(task_id)
    }
}

/// Flag the conditions needing attention for `idea_id`.
///
/// `tasks` and `logs` are the idea's own records. Dependencies are resolved
/// through `dependencies`, which may know about tasks of other ideas.
#[must_use]
pub fn detect_risks<L: DependencyLookup + ?Sized>(
    idea_id: &str,
    tasks: &[Task],
    logs: &[UpdateLog],
    dependencies: &L,
    current_month: YearMonth,
    now: DateTime<Utc>,
) -> Vec<RiskItem> {
    let mut risks = RiskSet::default();

    for task in tasks.iter().filter(|t| is_delayed(t, current_month)) {
        risks.insert(RiskItem::new(
            RiskCode::Delayed,
            format!("Task is delayed: {}", task.title),
            RelatedEntity::Task,
            &task.id,
        ));
    }

    match logs.iter().map(|l| l.created_at).max() {
        Some(latest) if latest < staleness_cutoff(now) => {
            risks.insert(RiskItem::new(
                RiskCode::LowActivity,
                "No update log in last 14 days",
                RelatedEntity::Idea,
                idea_id,
            ));
        }
        Some(_) => {}
        None => {
            risks.insert(RiskItem::new(
                RiskCode::NoLog,
                "No update logs found for this idea",
                RelatedEntity::Idea,
                idea_id,
            ));
        }
    }

    for task in tasks.iter().filter(|t| t.status == ItemStatus::InProgress) {
        let blocked = task.dependencies.iter().any(|dep| {
            dependencies
                .status_of(dep)
                .is_some_and(|status| status != ItemStatus::Completed)
        });
        if blocked {
            risks.insert(RiskItem::new(
                RiskCode::DependencyViolation,
                format!("Dependency incomplete while task in progress: {}", task.title),
                RelatedEntity::Task,
                &task.id,
            ));
        }
    }

    let risks = risks.into_vec();
    tracing::debug!(idea_id, count = risks.len(), "detected risks");
    risks
}

/// Insertion-ordered risk map keyed by [`RiskItem::dedup_key`].
#[derive(Default)]
struct RiskSet {
    items: Vec<RiskItem>,
    positions: HashMap<String, usize>,
}

impl RiskSet {
    fn insert(&mut self, risk: RiskItem) {
        let key = risk.dedup_key();
        if let Some(&at) = self.positions.get(&key) {
            self.items[at] = risk;
        } else {
            self.positions.insert(key, self.items.len());
            self.items.push(risk);
        }
    }

    fn into_vec(self) -> Vec<RiskItem> {
        self.items
    }
}
