//! CLI flags of the version reporter.

mod reporting;
pub use reporting::ReportingArgs;
