//! Workspace-wide dashboard rollup.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use lab_core::entities::{Idea, Task, UpdateLog};
use lab_core::enums::ItemStatus;
use lab_core::month::YearMonth;
use lab_core::responses::DashboardOverview;

use crate::{is_delayed, staleness_cutoff};

/// Summarize every idea, task, and log of a workspace.
///
/// `low_activity_tasks` counts in-progress tasks whose idea has no log
/// created within the staleness window ending at `now`.
#[must_use]
pub fn overview(
    ideas: &[Idea],
    tasks: &[Task],
    logs: &[UpdateLog],
    current_month: YearMonth,
    now: DateTime<Utc>,
) -> DashboardOverview {
    let mut idea_status_counts: BTreeMap<ItemStatus, usize> =
        ItemStatus::ALL.iter().map(|status| (*status, 0)).collect();
    for idea in ideas {
        *idea_status_counts.entry(idea.status).or_default() += 1;
    }
    let total_ideas = idea_status_counts.values().sum();

    let delayed_tasks = tasks
        .iter()
        .filter(|t| is_delayed(t, current_month))
        .count();

    let cutoff = staleness_cutoff(now);
    let recently_logged: HashSet<&str> = logs
        .iter()
        .filter(|l| l.created_at >= cutoff)
        .map(|l| l.idea_id.as_str())
        .collect();
    let low_activity_tasks = tasks
        .iter()
        .filter(|t| t.status == ItemStatus::InProgress)
        .filter(|t| !recently_logged.contains(t.idea_id.as_str()))
        .count();

    DashboardOverview {
        total_ideas,
        idea_status_counts,
        delayed_tasks,
        low_activity_tasks,
    }
}
