use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "chatsync",
    about = "Chat client state core: replays server updates into a versioned state tree"
)]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Apply a JSON-lines update stream and report the result
    Replay {
        /// File with one JSON update per line
        updates: PathBuf,
        /// JSON state snapshot to start from
        #[arg(long)]
        seed: Option<PathBuf>,
        /// Print the final state as JSON
        #[arg(long)]
        dump: bool,
        /// Wait for scheduled tasks (typing expiry) before exiting
        #[arg(long)]
        settle: bool,
    },
    /// Print the effective configuration
    CheckConfig,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::CheckConfig)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_check_config_when_command_is_missing() {
        let cli = Cli::parse_from(["chatsync"]);

        assert!(matches!(cli.command_or_default(), Command::CheckConfig));
    }

    #[test]
    fn parses_replay_with_flags() {
        let cli = Cli::parse_from([
            "chatsync",
            "replay",
            "updates.jsonl",
            "--seed",
            "seed.json",
            "--dump",
            "--config",
            "custom.toml",
        ]);

        match cli.command_or_default() {
            Command::Replay {
                updates,
                seed,
                dump,
                settle,
            } => {
                assert_eq!(updates, Path::new("updates.jsonl"));
                assert_eq!(seed.as_deref(), Some(Path::new("seed.json")));
                assert!(dump);
                assert!(!settle);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config.as_deref(), Some(Path::new("custom.toml")));
    }

    #[test]
    fn replay_requires_updates_path() {
        assert!(Cli::try_parse_from(["chatsync", "replay"]).is_err());
    }
}
