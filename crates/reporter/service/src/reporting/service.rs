use super::VersionMetrics;
use crate::{Service, ServiceError};
use reporter_metrics::TelemetrySink;
use std::{sync::Arc, time::Duration};
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, Span, info};

/// The interval at which the version is reported unless overridden at construction.
pub const DEFAULT_REPORTING_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// A service that periodically reports the running version.
///
/// On [`Service::start`] the version is reported once right away, then once per reporting
/// interval from a background task until the start token is cancelled.
///
/// The service is single-use. Starting it twice runs two independent reporting loops.
#[derive(Debug)]
pub struct ReportingService<S> {
    /// Span every log line of the service is emitted in.
    logger: Span,
    /// The version being reported.
    version: Arc<str>,
    /// The interval at which the version is reported.
    reporting_interval: Duration,
    /// Emits the version reports.
    metrics: Arc<VersionMetrics<S>>,
}

impl<S: TelemetrySink> ReportingService<S> {
    /// Creates a new [`ReportingService`] reporting `version` to `sink` every
    /// [`DEFAULT_REPORTING_INTERVAL`].
    ///
    /// Nothing is reported and no task is spawned until the service is started.
    pub fn new(logger: Span, sink: S, version: impl Into<String>) -> Self {
        let version: String = version.into();
        let metrics = Arc::new(VersionMetrics::new(logger.clone(), sink));
        Self {
            logger,
            version: Arc::from(version),
            reporting_interval: DEFAULT_REPORTING_INTERVAL,
            metrics,
        }
    }

    /// Overrides the reporting interval.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn with_reporting_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "reporting interval must be non-zero");
        self.reporting_interval = interval;
        self
    }

    /// Returns the version being reported.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the interval at which the version is reported.
    pub const fn reporting_interval(&self) -> Duration {
        self.reporting_interval
    }
}

impl<S> Service for ReportingService<S>
where
    S: TelemetrySink + 'static,
{
    fn name(&self) -> &'static str {
        "reporting"
    }

    /// Reports the version, then spawns the periodic reporting task.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    fn start(&self, cancel: CancellationToken) -> Result<(), ServiceError> {
        self.metrics.report_version(&self.version);

        let metrics = Arc::clone(&self.metrics);
        let version = Arc::clone(&self.version);
        let period = self.reporting_interval;
        let first_tick = Instant::now() + period;

        self.logger.in_scope(|| {
            info!(target: "reporting", interval = ?period, "Starting version reporting");
        });

        tokio::spawn(
            async move {
                let mut ticker = interval_at(first_tick, period);
                loop {
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => {
                            info!(target: "reporting", "Version reporting stopped");
                            break;
                        }
                        _ = ticker.tick() => metrics.report_version(&version),
                    }
                }
            }
            .instrument(self.logger.clone()),
        );

        Ok(())
    }

    fn status(&self) -> Result<(), ServiceError> {
        Ok(())
    }
}
