use metrics::Label;

/// Defines a contract for types that accept telemetry updates.
///
/// Updates are fire-and-forget: an implementation that fails to deliver an update drops it
/// without telling the caller.
pub trait TelemetrySink: Send + Sync {
    /// Increments the counter identified by `key` and `labels` by one.
    fn increment_counter(&self, key: &'static str, labels: &[Label]);

    /// Sets the gauge identified by `key` and `labels` to `value`.
    fn set_gauge(&self, key: &'static str, value: f64, labels: &[Label]);
}

/// A [`TelemetrySink`] that forwards every update to the process-wide [`metrics`] recorder.
///
/// When no recorder has been installed the updates land in the no-op recorder and are lost.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecorderSink;

impl TelemetrySink for RecorderSink {
    fn increment_counter(&self, key: &'static str, labels: &[Label]) {
        metrics::counter!(key, labels.to_vec()).increment(1);
    }

    fn set_gauge(&self, key: &'static str, value: f64, labels: &[Label]) {
        metrics::gauge!(key, labels.to_vec()).set(value);
    }
}
