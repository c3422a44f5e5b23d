#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod sink;
pub use sink::{RecorderSink, TelemetrySink};

mod metrics;
pub use crate::metrics::Metrics;

pub use ::metrics::Label;
