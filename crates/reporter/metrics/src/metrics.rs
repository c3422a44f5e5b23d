//! Metric names emitted by the version reporter.

/// Container for metrics.
#[derive(Debug, Clone)]
pub struct Metrics;

impl Metrics {
    /// Identifier for the counter of version reports. Labels: `version`.
    pub const VERSION_REPORTED: &'static str = "version_reporter_reported";

    /// Identifier for the build information gauge. Labels: `version`, `build_timestamp`,
    /// `cargo_features`, `target_triple`, `build_profile`.
    pub const BUILD_INFO: &'static str = "version_reporter_build_info";

    /// Label carrying the reported version.
    pub const VERSION_LABEL: &'static str = "version";

    /// Initializes metrics for the version reporter.
    ///
    /// Only describes the metrics: the counter is labelled by a version that is not known until
    /// a reporter is constructed, so there is nothing to zero here.
    pub fn init() {
        Self::describe();
    }

    /// Describes metrics used by the version reporter.
    pub fn describe() {
        metrics::describe_counter!(
            Self::VERSION_REPORTED,
            metrics::Unit::Count,
            "Number of times the running version has been reported"
        );
        metrics::describe_gauge!(
            Self::BUILD_INFO,
            "Build information of the running binary, always set to 1"
        );
    }
}
