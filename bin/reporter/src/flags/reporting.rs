use clap::Args;
use std::time::Duration;

/// Version reporting arguments.
#[derive(Args, Debug, Clone)]
pub struct ReportingArgs {
    /// Version to report. Defaults to the version of this binary.
    #[arg(id = "reporting.version", long = "reporting.version", env = "REPORTING_VERSION")]
    pub version: Option<String>,

    /// Seconds between two version reports.
    #[arg(
        long = "reporting.interval",
        env = "REPORTING_INTERVAL",
        default_value_t = 300,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,

    /// Seconds between two service health checks.
    #[arg(
        long = "health.interval",
        env = "HEALTH_INTERVAL",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub health_interval: u64,
}

impl ReportingArgs {
    /// Returns the version to report.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(crate::version::CARGO_PKG_VERSION)
    }

    /// Returns the interval between two version reports.
    pub const fn reporting_interval(&self) -> Duration {
        Duration::from_secs(self.interval)
    }

    /// Returns the interval between two service health checks.
    pub const fn health_interval(&self) -> Duration {
        Duration::from_secs(self.health_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct MockCommand {
        #[clap(flatten)]
        reporting: ReportingArgs,
    }

    #[test]
    fn test_reporting_args_defaults() {
        let args = MockCommand::parse_from(["test"]).reporting;
        assert_eq!(args.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(args.reporting_interval(), Duration::from_secs(300));
        assert_eq!(args.health_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_reporting_args_overrides() {
        let args = MockCommand::parse_from([
            "test",
            "--reporting.version",
            "v1.2.3",
            "--reporting.interval",
            "10",
            "--health.interval",
            "5",
        ])
        .reporting;
        assert_eq!(args.version(), "v1.2.3");
        assert_eq!(args.reporting_interval(), Duration::from_secs(10));
        assert_eq!(args.health_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_reporting_args_reject_zero_interval() {
        assert!(MockCommand::try_parse_from(["test", "--reporting.interval", "0"]).is_err());
        assert!(MockCommand::try_parse_from(["test", "--health.interval", "0"]).is_err());
    }
}
