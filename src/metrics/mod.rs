//! Request metrics collection.
//!
//! Every completed request updates two series keyed by the
//! `(url, method, status)` label triple:
//!
//! - `pbly_requests` - monotonically increasing request counter
//! - `pbly_request_duration` - last-observed duration gauge, in
//!   microseconds
//!
//! The collector owns a private [`Registry`] rather than installing a
//! process-global one, so it is constructed once in [`crate::server`],
//! injected through [`crate::state::AppState`], and each test gets an
//! isolated instance. Current state is exposed in Prometheus text format
//! at `/metrics`.

use prometheus::{Encoder, GaugeVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Label names shared by both request series.
const LABELS: [&str; 3] = ["url", "method", "status"];

/// Collector for the per-request counter and duration gauge.
///
/// Updates are atomic per call and safe under concurrent requests; there
/// are no cross-call transactions. Cloning shares the underlying series.
#[derive(Clone)]
pub struct RequestMetrics {
    registry: Registry,
    requests: IntCounterVec,
    duration: GaugeVec,
}

impl RequestMetrics {
    /// Creates a collector with its own registry.
    ///
    /// # Errors
    ///
    /// Returns an error if metric registration fails.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("pbly_requests", "The total number of requests"),
            &LABELS,
        )?;

        let duration = GaugeVec::new(
            Opts::new(
                "pbly_request_duration",
                "The duration of each request in microseconds (µs)",
            ),
            &LABELS,
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(duration.clone()))?;

        Ok(Self {
            registry,
            requests,
            duration,
        })
    }

    /// Records one completed request.
    ///
    /// Increments the counter and sets the gauge for the request's label
    /// triple. The gauge is last-write-wins: it holds the most recent
    /// observation for that triple, not an aggregate.
    ///
    /// # Errors
    ///
    /// Returns an error if the label values cannot be materialized; the
    /// caller logs and drops the failure so a metrics problem never
    /// affects the response.
    pub fn record(
        &self,
        url: &str,
        method: &str,
        status: u16,
        duration_us: f64,
    ) -> Result<(), prometheus::Error> {
        let status = status.to_string();
        let labels = [url, method, status.as_str()];

        self.requests.get_metric_with_label_values(&labels)?.inc();
        self.duration
            .get_metric_with_label_values(&labels)?
            .set(duration_us);

        Ok(())
    }

    /// Renders the current counter/gauge state in Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let families = self.registry.gather();

        let mut buffer = Vec::new();
        TextEncoder::new().encode(&families, &mut buffer)?;

        String::from_utf8(buffer)
            .map_err(|e| prometheus::Error::Msg(format!("metrics output was not UTF-8: {e}")))
    }
}
