use chrono::Utc;
use lab_core::month::YearMonth;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OverviewArgs;
use crate::context::load_snapshot;
use crate::output::output;

/// Handle `labtrack overview`.
pub fn handle(args: &OverviewArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let month = args.month.unwrap_or_else(YearMonth::current);
    let overview = lab_analytics::overview(
        &snapshot.ideas,
        &snapshot.tasks,
        &snapshot.logs,
        month,
        Utc::now(),
    );
    output(&overview, flags.format)
}
