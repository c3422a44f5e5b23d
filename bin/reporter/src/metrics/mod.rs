//! Global metrics for `version-reporter`

mod version;
pub use version::VersionInfo;
