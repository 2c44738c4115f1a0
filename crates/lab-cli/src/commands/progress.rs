use serde::Serialize;

use lab_core::responses::ProgressReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdeaArgs;
use crate::context::load_snapshot;
use crate::output::output;

#[derive(Debug, Serialize)]
struct IdeaProgress {
    idea_id: String,
    #[serde(flatten)]
    progress: ProgressReport,
}

/// Handle `labtrack progress`.
pub fn handle(args: &IdeaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scope = load_snapshot(&args.snapshot)?.scope(&args.idea)?;
    let response = IdeaProgress {
        progress: lab_analytics::progress(&scope.tasks, &scope.deliverables),
        idea_id: scope.idea_id,
    };
    output(&response, flags.format)
}
