#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod traits;
pub use traits::{Service, ServiceError};

mod reporting;
pub use reporting::{DEFAULT_REPORTING_INTERVAL, ReportingService, VersionMetrics};

mod registry;
pub use registry::{RegistryError, ServiceRegistry};
