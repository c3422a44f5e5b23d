use reporter_metrics::{Label, Metrics, TelemetrySink};
use tracing::{Span, info};

/// Emits version reports to a [`TelemetrySink`], logging each one to the supplied span.
#[derive(Debug)]
pub struct VersionMetrics<S> {
    logger: Span,
    sink: S,
}

impl<S: TelemetrySink> VersionMetrics<S> {
    /// Creates a new [`VersionMetrics`] logging to `logger` and reporting to `sink`.
    pub const fn new(logger: Span, sink: S) -> Self {
        Self { logger, sink }
    }

    /// Returns the sink reports are sent to.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Reports `version` as a single counter increment labelled with the version.
    pub fn report_version(&self, version: &str) {
        self.logger.in_scope(|| {
            info!(target: "reporting", version, "Reporting running version");
        });
        self.sink.increment_counter(
            Metrics::VERSION_REPORTED,
            &[Label::new(Metrics::VERSION_LABEL, version.to_owned())],
        );
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

    #[test]
    fn test_report_version_issues_one_labelled_update() {
        let mut sink = MockSink::new();
        sink.expect_increment_counter()
            .withf(|_, labels| {
                labels.len() == 1 &&
                    labels[0].key() == Metrics::VERSION_LABEL &&
                    labels[0].value() == "v1.2.3"
            })
            .times(1)
            .return_const(());
        sink.expect_set_gauge().times(0);

        let metrics = VersionMetrics::new(Span::none(), sink);
        metrics.report_version("v1.2.3");
    }

    #[test]
    fn test_report_version_repeats_per_call() {
        let mut sink = MockSink::new();
        sink.expect_increment_counter().times(3).return_const(());

        let metrics = VersionMetrics::new(Span::none(), sink);
        for _ in 0..3 {
            metrics.report_version("v0.0.1");
        }
    }
}
