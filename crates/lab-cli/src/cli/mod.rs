use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `labtrack` binary.
#[derive(Debug, Parser)]
#[command(
    name = "labtrack",
    version,
    about = "labtrack - research progress and risk analytics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use lab_core::month::YearMonth;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["labtrack", "--format", "table", "--verbose", "ai-status"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::AiStatus));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["labtrack", "ai-status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["labtrack", "--format", "xml", "ai-status"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn month_argument_is_parsed() {
        let cli = Cli::try_parse_from([
            "labtrack",
            "risks",
            "--snapshot",
            "ws.json",
            "--idea",
            "idea-1",
            "--month",
            "2026-03",
        ])
        .expect("cli should parse");

        let Commands::Risks(args) = cli.command else {
            panic!("expected risks command");
        };
        assert_eq!(args.idea, "idea-1");
        assert_eq!(args.month, Some(YearMonth::new(2026, 3).unwrap()));
    }

    #[test]
    fn malformed_month_is_rejected() {
        let parsed = Cli::try_parse_from([
            "labtrack",
            "overview",
            "--snapshot",
            "ws.json",
            "--month",
            "2026-3",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn ingest_defaults_are_optional() {
        let cli = Cli::try_parse_from(["labtrack", "ingest", "--dir", "reports", "--idea", "i"])
            .expect("cli should parse");

        let Commands::Ingest(args) = cli.command else {
            panic!("expected ingest command");
        };
        assert!(args.workspace.is_none());
        assert!(args.pattern.is_none());
        assert!(args.snapshot.is_none());
    }

    #[test]
    fn summarize_takes_positional_file() {
        let cli = Cli::try_parse_from(["labtrack", "summarize", "Daily_Report_2026-03-01.md"])
            .expect("cli should parse");
        let Commands::Summarize(args) = cli.command else {
            panic!("expected summarize command");
        };
        assert_eq!(args.file.to_str(), Some("Daily_Report_2026-03-01.md"));
    }
}
