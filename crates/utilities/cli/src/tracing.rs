//! [tracing_subscriber] utilities.

use serde::{Deserialize, Serialize};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::MakeWriter,
    prelude::__tracing_subscriber_SubscriberExt,
    registry::LookupSpan,
    util::{SubscriberInitExt, TryInitError},
};

use crate::{LogConfig, LogRotation};

/// Name of the rolling log file, suffixed with the rotation period by the appender.
const LOG_FILE_NAME: &str = "version-reporter.log";

/// The format of the logs.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lowercase")]
pub enum LogFormat {
    /// Full format (default).
    #[default]
    Full,
    /// JSON format.
    Json,
    /// Pretty format.
    Pretty,
    /// Compact format.
    Compact,
}

impl LogFormat {
    /// Builds a boxed fmt layer writing to `writer` in this format.
    fn layer<S, W>(self, writer: W) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: ::tracing::Subscriber + for<'a> LookupSpan<'a> + 'static,
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let layer = tracing_subscriber::fmt::layer().with_writer(writer);
        match self {
            Self::Full => layer.boxed(),
            Self::Json => layer.json().boxed(),
            Self::Pretty => layer.pretty().boxed(),
            Self::Compact => layer.compact().boxed(),
        }
    }
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Minutely => Self::MINUTELY,
            LogRotation::Hourly => Self::HOURLY,
            LogRotation::Daily => Self::DAILY,
            LogRotation::Never => Self::NEVER,
        }
    }
}

impl LogConfig {
    /// Initializes the tracing subscriber
    ///
    /// # Arguments
    /// * `env_filter` - Optional environment filter for the subscriber. Defaults to the filter
    ///   read from `RUST_LOG`.
    ///
    /// # Returns
    /// * `Result<()>` - Ok if successful, Err if a global subscriber is already set.
    pub fn init_tracing_subscriber(
        &self,
        env_filter: Option<EnvFilter>,
    ) -> Result<(), TryInitError> {
        let file_layer = self.file_logs.as_ref().map(|file_logs| {
            let appender = RollingFileAppender::new(
                file_logs.rotation.into(),
                &file_logs.directory_path,
                LOG_FILE_NAME,
            );
            file_logs.format.layer(appender)
        });

        let stdout_layer =
            self.stdout_logs.as_ref().map(|stdout_logs| stdout_logs.format.layer(std::io::stdout));

        let env_filter = env_filter
            .unwrap_or_else(EnvFilter::from_default_env)
            .add_directive(self.global_level.into());

        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .with(stdout_layer)
            .try_init()?;

        Ok(())
    }
}

/// Initializes tracing with the default [`LogConfig`] for tests.
///
/// Safe to call from every test: only the first call installs a subscriber.
pub fn init_test_tracing() {
    let _ = LogConfig::default().init_tracing_subscriber(None::<EnvFilter>);
}
