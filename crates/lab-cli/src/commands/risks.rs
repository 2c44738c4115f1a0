use chrono::Utc;
use lab_analytics::TaskStatusIndex;
use lab_core::month::YearMonth;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdeaMonthArgs;
use crate::context::load_snapshot;
use crate::output::output;

/// Handle `labtrack risks`.
///
/// Dependencies resolve against the idea's own tasks only; a dependency on
/// another idea's task is treated as unknown.
pub fn handle(args: &IdeaMonthArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let scope = snapshot.scope(&args.idea)?;
    let index = TaskStatusIndex::from_tasks(&scope.tasks);
    let risks = lab_analytics::detect_risks(
        &scope.idea_id,
        &scope.tasks,
        &scope.logs,
        &index,
        args.month.unwrap_or_else(YearMonth::current),
        Utc::now(),
    );
    output(&risks, flags.format)
}
