//! Contains the version reporter CLI.

use crate::{flags::ReportingArgs, metrics::VersionInfo};
use anyhow::Result;
use clap::Parser;
use reporter_cli::{LogArgs, LogConfig, MetricsArgs};
use reporter_metrics::{Metrics, RecorderSink};
use reporter_service::{ReportingService, ServiceRegistry};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn};

/// CLI for the version reporter.
#[derive(Parser, Debug)]
#[command(
    name = "version-reporter",
    version = crate::version::CARGO_PKG_VERSION,
    about = "Periodically reports the running version to a metrics backend"
)]
pub struct Cli {
    /// Global args
    #[command(flatten)]
    pub global: LogArgs,

    /// Prometheus metrics args
    #[command(flatten)]
    pub metrics: MetricsArgs,

    /// Reporting args
    #[command(flatten)]
    pub reporting: ReportingArgs,
}

impl Cli {
    /// Runs the CLI.
    pub fn run(self) -> Result<()> {
        self.init_logs(&self.global)?;

        self.metrics.init_metrics()?;
        Metrics::init();
        // Register build metrics
        VersionInfo::from_build().register_version_metrics(&RecorderSink);

        Self::run_until_ctrl_c(async move {
            let cancel = CancellationToken::new();
            let registry = self.registry()?;
            registry.start_all(&cancel)?;

            let mut health = tokio::time::interval(self.reporting.health_interval());
            // The first tick completes immediately.
            health.tick().await;

            loop {
                tokio::select! {
                    res = tokio::signal::ctrl_c() => {
                        res?;
                        info!(target: "reporter", "Ctrl+C received, initiating shutdown...");
                        break;
                    }
                    _ = health.tick() => Self::log_statuses(&registry),
                }
            }

            cancel.cancel();
            info!(target: "reporter", "Version reporter shut down gracefully.");
            Ok(())
        })
    }

    /// Builds the registry holding the services of the process.
    fn registry(&self) -> Result<ServiceRegistry> {
        let version = self.reporting.version();
        info!(target: "reporter", version, "Reporting version");

        let reporting = ReportingService::new(
            info_span!(target: "reporter", "reporting", version),
            RecorderSink,
            version,
        )
        .with_reporting_interval(self.reporting.reporting_interval());

        let mut registry = ServiceRegistry::new();
        registry.register(reporting)?;
        Ok(registry)
    }

    fn log_statuses(registry: &ServiceRegistry) {
        for (name, status) in registry.statuses() {
            match status {
                Ok(()) => debug!(target: "reporter", name, "Service healthy"),
                Err(err) => warn!(target: "reporter", name, %err, "Service unhealthy"),
            }
        }
    }

    /// Run until ctrl-c is pressed.
    pub fn run_until_ctrl_c<F>(fut: F) -> Result<()>
    where
        F: std::future::Future<Output = Result<()>>,
    {
        let rt = Self::tokio_runtime().map_err(|e| anyhow::anyhow!(e))?;
        rt.block_on(fut)
    }

    /// Creates a new default tokio multi-thread [`Runtime`](tokio::runtime::Runtime) with all
    /// features enabled
    pub fn tokio_runtime() -> Result<tokio::runtime::Runtime, std::io::Error> {
        tokio::runtime::Builder::new_multi_thread().enable_all().build()
    }

    /// Initializes the tracing subscriber from the log flags.
    pub fn init_logs(&self, args: &LogArgs) -> anyhow::Result<()> {
        let filter = tracing_subscriber::EnvFilter::from_default_env();

        LogConfig::new(args.clone()).init_tracing_subscriber(Some(filter))?;
        Ok(())
    }
}
