use lab_core::month::YearMonth;
use serde::Serialize;

use crate::cli::root_commands::IdeaMonthArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::load_snapshot;
use crate::output::output;

#[derive(Debug, Serialize)]
struct NextActions {
    idea_id: String,
    actions: Vec<String>,
}

/// Handle `labtrack next`.
pub fn handle(args: &IdeaMonthArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scope = load_snapshot(&args.snapshot)?.scope(&args.idea)?;
    let actions = lab_analytics::recommend(
        &scope.tasks,
        &scope.deliverables,
        args.month.unwrap_or_else(YearMonth::current),
    );

    match flags.format {
        OutputFormat::Table => output(&actions, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(
            &NextActions {
                idea_id: scope.idea_id,
                actions,
            },
            flags.format,
        ),
    }
}
