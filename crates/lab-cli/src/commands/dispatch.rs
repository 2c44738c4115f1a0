use lab_config::LabConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &LabConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Overview(args) => commands::overview::handle(&args, flags),
        Commands::Progress(args) => commands::progress::handle(&args, flags),
        Commands::Risks(args) => commands::risks::handle(&args, flags),
        Commands::Next(args) => commands::next::handle(&args, flags),
        Commands::Summarize(args) => commands::summarize::handle(&args, config, flags).await,
        Commands::Ingest(args) => commands::ingest::handle(&args, config, flags).await,
        Commands::AiStatus => commands::ai_status::handle(config, flags).await,
    }
}
