//! Periodic reporting of the running version.

mod metrics;
pub use metrics::VersionMetrics;

mod service;
pub use service::{DEFAULT_REPORTING_INTERVAL, ReportingService};
