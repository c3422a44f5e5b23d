#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod log;
pub use log::{FileLogConfig, LogArgs, LogConfig, LogRotation, StdoutLogConfig};

mod tracing;
pub use tracing::{LogFormat, init_test_tracing};

mod metrics;
pub use metrics::{MetricsArgs, MetricsInitError};
