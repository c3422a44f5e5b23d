//! Prometheus metrics CLI args
//!
//! Specifies the available flags for prometheus metric configuration inside CLI

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::{IpAddr, SocketAddr};

/// Flags configuring the Prometheus metrics exporter.
#[derive(Debug, Clone, clap::Parser)]
pub struct MetricsArgs {
    /// Serves Prometheus metrics over HTTP when set.
    #[arg(
        long = "metrics.enabled",
        global = true,
        default_value_t = false,
        env = "METRICS_ENABLED"
    )]
    pub enabled: bool,
    /// IP address the metrics endpoint listens on.
    #[arg(long = "metrics.addr", global = true, default_value = "0.0.0.0", env = "METRICS_ADDR")]
    pub addr: IpAddr,
    /// Port the metrics endpoint listens on.
    #[arg(long = "metrics.port", global = true, default_value_t = 9090, env = "METRICS_PORT")]
    pub port: u16,
}

/// An error installing the Prometheus exporter.
#[derive(Debug, thiserror::Error)]
pub enum MetricsInitError {
    /// The exporter or its HTTP listener could not be set up.
    #[error("failed to install prometheus exporter: {0}")]
    Install(#[from] BuildError),
}

impl MetricsArgs {
    /// Returns the socket address the metrics endpoint listens on.
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }

    /// Installs the Prometheus exporter as the global metrics recorder if metrics are enabled.
    ///
    /// When disabled nothing is installed and metric updates are dropped.
    pub fn init_metrics(&self) -> Result<(), MetricsInitError> {
        if self.enabled {
            PrometheusBuilder::new().with_http_listener(self.socket_addr()).install()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// A mock command that uses the MetricsArgs.
    #[derive(Parser, Debug, Clone)]
    #[command(about = "Mock command")]
    struct MockCommand {
        /// Metrics CLI Flags
        #[clap(flatten)]
        pub metrics: MetricsArgs,
    }

    #[test]
    fn test_metrics_args_enabled() {
        let args = MockCommand::parse_from(["test", "--metrics.enabled"]);
        assert!(args.metrics.enabled);

        let args = MockCommand::parse_from(["test"]);
        assert!(!args.metrics.enabled);
    }

    #[test]
    fn test_metrics_args_socket_addr() {
        let args = MockCommand::parse_from([
            "test",
            "--metrics.addr",
            "127.0.0.1",
            "--metrics.port",
            "1234",
        ]);
        let expected: SocketAddr = "127.0.0.1:1234".parse().unwrap();
        assert_eq!(args.metrics.socket_addr(), expected);
    }

    #[test]
    fn test_metrics_args_defaults() {
        let args = MockCommand::parse_from(["test"]);
        assert_eq!(args.metrics.socket_addr(), "0.0.0.0:9090".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_disabled_metrics_installs_nothing() {
        let args = MockCommand::parse_from(["test"]);
        args.metrics.init_metrics().unwrap();
    }
}
