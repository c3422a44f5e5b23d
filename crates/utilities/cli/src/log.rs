//! Log configuration and the CLI flags it is built from.

use crate::LogFormat;
use clap::{ArgAction, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Global logging flags.
#[derive(Parser, Debug, Clone)]
pub struct LogArgs {
    /// Verbosity level (0-5). `-v` is errors only, `-vvvvv` is trace. Defaults to info.
    #[arg(short = 'v', long = "verbosity", action = ArgAction::Count, default_value = "3", global = true)]
    pub level: u8,
    /// Disables logging to stdout.
    #[arg(long = "log.stdout.quiet", short = 'q', global = true)]
    pub stdout_quiet: bool,
    /// Format of the logs written to stdout.
    #[arg(
        long = "log.stdout.format",
        env = "LOG_STDOUT_FORMAT",
        default_value = "full",
        global = true
    )]
    pub stdout_format: LogFormat,
    /// Directory to write rolling log files to. File logging is disabled when unset.
    #[arg(long = "log.file.directory", env = "LOG_FILE_DIRECTORY", global = true)]
    pub file_directory: Option<PathBuf>,
    /// Format of the logs written to files.
    #[arg(long = "log.file.format", env = "LOG_FILE_FORMAT", default_value = "full", global = true)]
    pub file_format: LogFormat,
    /// How often log files are rotated.
    #[arg(
        long = "log.file.rotation",
        env = "LOG_FILE_ROTATION",
        default_value = "never",
        global = true
    )]
    pub file_rotation: LogRotation,
}

impl Default for LogArgs {
    fn default() -> Self {
        Self {
            level: 3,
            stdout_quiet: false,
            stdout_format: LogFormat::Full,
            file_directory: None,
            file_format: LogFormat::Full,
            file_rotation: LogRotation::Never,
        }
    }
}

/// How often rolling log files are rotated.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate every minute.
    Minutely,
    /// Rotate every hour.
    Hourly,
    /// Rotate every day.
    Daily,
    /// Never rotate.
    #[default]
    Never,
}

/// Configuration of the stdout log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdoutLogConfig {
    /// Format of the logs.
    pub format: LogFormat,
}

/// Configuration of the rolling file log layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLogConfig {
    /// Directory the log files are written to.
    pub directory_path: PathBuf,
    /// Format of the logs.
    pub format: LogFormat,
    /// How often the log file is rotated.
    pub rotation: LogRotation,
}

/// The complete log configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level applied on top of the environment filter.
    pub global_level: LevelFilter,
    /// Stdout layer configuration, `None` disables stdout logs.
    pub stdout_logs: Option<StdoutLogConfig>,
    /// File layer configuration, `None` disables file logs.
    pub file_logs: Option<FileLogConfig>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(LogArgs::default())
    }
}

impl LogConfig {
    /// Builds the log configuration from the CLI flags.
    pub fn new(args: LogArgs) -> Self {
        let global_level = match args.level {
            0 => LevelFilter::OFF,
            1 => LevelFilter::ERROR,
            2 => LevelFilter::WARN,
            3 => LevelFilter::INFO,
            4 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };

        let stdout_logs =
            (!args.stdout_quiet).then_some(StdoutLogConfig { format: args.stdout_format });

        let file_logs = args.file_directory.map(|directory_path| FileLogConfig {
            directory_path,
            format: args.file_format,
            rotation: args.file_rotation,
        });

        Self { global_level, stdout_logs, file_logs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Parser, Debug)]
    struct MockCommand {
        #[clap(flatten)]
        logs: LogArgs,
    }

    #[test]
    fn test_default_log_config() {
        let config = LogConfig::default();
        assert_eq!(config.global_level, LevelFilter::INFO);
        assert_eq!(config.stdout_logs, Some(StdoutLogConfig { format: LogFormat::Full }));
        assert_eq!(config.file_logs, None);
    }

    #[test]
    fn test_default_flags_match_default_args() {
        let args = MockCommand::parse_from(["test"]).logs;
        assert_eq!(LogConfig::new(args), LogConfig::default());
    }

    #[rstest]
    #[case::errors(&["test", "-v"], LevelFilter::ERROR)]
    #[case::warnings(&["test", "-vv"], LevelFilter::WARN)]
    #[case::debug(&["test", "-vvvv"], LevelFilter::DEBUG)]
    #[case::trace(&["test", "-vvvvvv"], LevelFilter::TRACE)]
    fn test_verbosity(#[case] argv: &[&str], #[case] expected: LevelFilter) {
        let args = MockCommand::parse_from(argv).logs;
        assert_eq!(LogConfig::new(args).global_level, expected);
    }

    #[test]
    fn test_quiet_disables_stdout() {
        let args = MockCommand::parse_from(["test", "-q"]).logs;
        assert_eq!(LogConfig::new(args).stdout_logs, None);
    }

    #[test]
    fn test_file_logs() {
        let args = MockCommand::parse_from([
            "test",
            "--log.file.directory",
            "/tmp/logs",
            "--log.file.format",
            "json",
            "--log.file.rotation",
            "daily",
        ])
        .logs;

        assert_eq!(
            LogConfig::new(args).file_logs,
            Some(FileLogConfig {
                directory_path: PathBuf::from("/tmp/logs"),
                format: LogFormat::Json,
                rotation: LogRotation::Daily,
            })
        );
    }
}
