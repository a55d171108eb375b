//! Command-line arguments.

use super::app_config::{CacheBackend, LogLevel};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "avataurus",
    version,
    about = "Deterministic avatar URLs backed by the Avataurus service",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Avataurus service base URL.
    #[arg(long, value_name = "URL", env = "AVATAURUS_SERVICE_URL", global = true)]
    pub service_url: Option<String>,

    /// Cache backend for Gravatar checks.
    #[arg(long, value_enum, global = true)]
    pub cache: Option<CacheBackend>,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations the binary can run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the avatar URL for a user id or email.
    Resolve {
        /// Numeric user id or email address.
        identity: String,

        /// Requested size in pixels. Out-of-range values are clamped.
        #[arg(short, long, allow_negative_numbers = true)]
        size: Option<i64>,

        /// Default avatar selector for this call only.
        #[arg(short, long, value_name = "SELECTOR")]
        default: Option<String>,

        /// Skip the Gravatar check.
        #[arg(long)]
        force_default: bool,

        /// URL returned when Avataurus does not apply.
        #[arg(long, value_name = "URL", default_value = "")]
        fallback: String,
    },

    /// List selectable default avatars.
    Defaults,

    /// Set the site-wide default avatar.
    SetDefault {
        /// Selector, e.g. `avataurus` or `avataurus_initial`.
        selector: String,
    },

    /// Reset the default avatar and remove cached Gravatar checks.
    Uninstall,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve() {
        let args = CliArgs::parse_from([
            "avataurus",
            "resolve",
            "a@b.com",
            "--size",
            "64",
            "--default",
            "avataurus_initial",
            "--force-default",
        ]);

        match args.command {
            Command::Resolve {
                identity,
                size,
                default,
                force_default,
                fallback,
            } => {
                assert_eq!(identity, "a@b.com");
                assert_eq!(size, Some(64));
                assert_eq!(default.as_deref(), Some("avataurus_initial"));
                assert!(force_default);
                assert!(fallback.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_sizes_are_accepted() {
        for (raw, expected) in [("-5", -5), ("5000000000", 5_000_000_000)] {
            let args = CliArgs::try_parse_from(["avataurus", "resolve", "42", "--size", raw])
                .unwrap();

            match args.command {
                Command::Resolve { size, .. } => assert_eq!(size, Some(expected)),
                other => panic!("unexpected command: {other:?}"),
            }
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = CliArgs::parse_from(["avataurus", "uninstall", "--log-level", "debug"]);

        assert!(matches!(args.command, Command::Uninstall));
        assert_eq!(args.log_level, Some(LogLevel::Debug));
    }
}
