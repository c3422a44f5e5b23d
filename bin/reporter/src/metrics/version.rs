//! [`VersionInfo`] metrics

use reporter_metrics::{Label, Metrics, TelemetrySink};

/// Contains version information for the application and allows for exposing the contained
/// information as a metric.
#[derive(Debug, Clone)]
pub struct VersionInfo {
    /// The version of the application.
    pub version: &'static str,
    /// The build timestamp of the application.
    pub build_timestamp: &'static str,
    /// The cargo features enabled for the build.
    pub cargo_features: &'static str,
    /// The target triple for the build.
    pub target_triple: &'static str,
    /// The build profile (e.g., debug or release).
    pub build_profile: &'static str,
}

impl VersionInfo {
    /// Creates a new instance of [`VersionInfo`] from the constants defined in [`crate::version`]
    /// at compile time.
    pub const fn from_build() -> Self {
        Self {
            version: crate::version::CARGO_PKG_VERSION,
            build_timestamp: crate::version::VERGEN_BUILD_TIMESTAMP,
            cargo_features: crate::version::VERGEN_CARGO_FEATURES,
            target_triple: crate::version::VERGEN_CARGO_TARGET_TRIPLE,
            build_profile: crate::version::BUILD_PROFILE_NAME,
        }
    }

    /// Sets the build information gauge on `sink`.
    pub fn register_version_metrics<S: TelemetrySink>(&self, sink: &S) {
        // An empty label value would hide the feature set, report "none" instead.
        let features = if self.cargo_features.is_empty() { "none" } else { self.cargo_features };

        let labels = [
            Label::new(Metrics::VERSION_LABEL, self.version),
            Label::new("build_timestamp", self.build_timestamp),
            Label::new("cargo_features", features),
            Label::new("target_triple", self.target_triple),
            Label::new("build_profile", self.build_profile),
        ];

        sink.set_gauge(Metrics::BUILD_INFO, 1.0, &labels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Sink {}

        impl TelemetrySink for Sink {
            fn increment_counter(&self, key: &'static str, labels: &[Label]);
            fn set_gauge(&self, key: &'static str, value: f64, labels: &[Label]);
        }
    }

    fn info(cargo_features: &'static str) -> VersionInfo {
        VersionInfo {
            version: "1.2.3",
            build_timestamp: "2024-01-01T00:00:00Z",
            cargo_features,
            target_triple: "x86_64-unknown-linux-gnu",
            build_profile: "release",
        }
    }

    fn label<'a>(labels: &'a [Label], key: &str) -> Option<&'a str> {
        labels.iter().find(|label| label.key() == key).map(Label::value)
    }

    #[test]
    fn test_register_version_metrics_sets_build_info() {
        let mut sink = MockSink::new();
        sink.expect_set_gauge()
            .withf(|_, value, labels| {
                *value == 1.0 &&
                    labels.len() == 5 &&
                    label(labels, "version") == Some("1.2.3") &&
                    label(labels, "cargo_features") == Some("metrics") &&
                    label(labels, "build_profile") == Some("release")
            })
            .times(1)
            .return_const(());
        sink.expect_increment_counter().times(0);

        info("metrics").register_version_metrics(&sink);
    }

    #[test]
    fn test_register_version_metrics_reports_no_features() {
        let mut sink = MockSink::new();
        sink.expect_set_gauge()
            .withf(|_, _, labels| label(labels, "cargo_features") == Some("none"))
            .times(1)
            .return_const(());

        info("").register_version_metrics(&sink);
    }

    #[test]
    fn test_from_build_uses_package_version() {
        assert_eq!(VersionInfo::from_build().version, env!("CARGO_PKG_VERSION"));
    }
}
