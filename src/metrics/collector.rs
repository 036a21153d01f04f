//! Metrics collection and registry.

use crate::session::SessionStats;
use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// Prometheus metrics registry for camera session monitoring.
pub struct MetricsRegistry {
    registry: Registry,

    // Lifecycle metrics
    opens_total: IntCounter,
    open_failures_total: IntCounter,
    releases_total: IntCounter,
    acquired_cameras: IntGauge,

    // Configuration metrics
    configure_failures_total: IntCounter,
    orientation_changes_total: IntCounter,
    adjusted_orientation: IntGauge,
}

impl MetricsRegistry {
    /// Creates a new metrics registry with all session metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let opens_total = IntCounter::new(
            "scan_camera_opens_total",
            "Total number of successful camera opens",
        )?;
        let open_failures_total = IntCounter::new(
            "scan_camera_open_failures_total",
            "Total number of failed camera opens",
        )?;
        let releases_total = IntCounter::new(
            "scan_camera_releases_total",
            "Total number of camera handles released",
        )?;
        let acquired_cameras = IntGauge::new(
            "scan_camera_acquired",
            "Number of slots currently holding an open camera",
        )?;

        let configure_failures_total = IntCounter::new(
            "scan_camera_configure_failures_total",
            "Total number of parameter pushes refused by the camera",
        )?;
        let orientation_changes_total = IntCounter::new(
            "scan_camera_orientation_changes_total",
            "Total number of device orientation changes",
        )?;
        let adjusted_orientation = IntGauge::new(
            "scan_camera_adjusted_orientation_degrees",
            "Rotation computed by the most recent preview layout",
        )?;

        registry.register(Box::new(opens_total.clone()))?;
        registry.register(Box::new(open_failures_total.clone()))?;
        registry.register(Box::new(releases_total.clone()))?;
        registry.register(Box::new(acquired_cameras.clone()))?;
        registry.register(Box::new(configure_failures_total.clone()))?;
        registry.register(Box::new(orientation_changes_total.clone()))?;
        registry.register(Box::new(adjusted_orientation.clone()))?;

        Ok(Self {
            registry,
            opens_total,
            open_failures_total,
            releases_total,
            acquired_cameras,
            configure_failures_total,
            orientation_changes_total,
            adjusted_orientation,
        })
    }

    /// Updates all metrics from a session snapshot.
    pub fn update(&self, stats: &SessionStats) {
        // Counters only move forward, so add the difference
        advance(&self.opens_total, stats.opens);
        advance(&self.open_failures_total, stats.open_failures);
        advance(&self.releases_total, stats.releases);
        advance(&self.configure_failures_total, stats.configure_failures);
        advance(&self.orientation_changes_total, stats.orientation_changes);

        self.acquired_cameras.set(i64::from(stats.acquired));
        self.adjusted_orientation
            .set(i64::from(stats.adjusted_orientation));
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn advance(counter: &IntCounter, total: u64) {
    let current = counter.get();
    if total > current {
        counter.inc_by(total - current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = MetricsRegistry::new();
        assert!(registry.is_ok());
    }

    #[test]
    fn test_metrics_update() {
        let registry = MetricsRegistry::new().unwrap();

        let stats = SessionStats {
            opens: 3,
            open_failures: 1,
            releases: 2,
            configure_failures: 0,
            orientation_changes: 4,
            adjusted_orientation: 90,
            acquired: 1,
        };

        registry.update(&stats);
        // Re-applying the same snapshot must not double count.
        registry.update(&stats);

        let output = registry.encode().unwrap();
        assert!(output.contains("scan_camera_opens_total 3"));
        assert!(output.contains("scan_camera_open_failures_total 1"));
        assert!(output.contains("scan_camera_acquired 1"));
        assert!(output.contains("scan_camera_adjusted_orientation_degrees 90"));
    }

    #[test]
    fn test_metrics_encode() {
        let registry = MetricsRegistry::new().unwrap();
        let output = registry.encode().unwrap();

        assert!(output.contains("scan_camera_opens_total"));
        assert!(output.contains("scan_camera_configure_failures_total"));
        assert!(output.contains("scan_camera_orientation_changes_total"));
    }
}
