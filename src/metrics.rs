use axum::{routing::get, Router};
use metrics::describe_counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Initialize the Prometheus recorder and register the series the
    /// handlers increment, so they show up on /metrics from the start.
    pub fn init() -> Self {
        // Use default buckets to avoid API differences across crate versions.
        let builder = PrometheusBuilder::new();

        let handle = builder
            .install_recorder()
            .expect("prometheus: install recorder");

        describe_counter!("feed_requests_total", "Feed reads served.");
        describe_counter!("sort_changes_total", "Sort preference changes.");
        describe_counter!("hydrate_rows_total", "Rows loaded into the boot snapshot.");
        describe_counter!(
            "hydrate_errors_total",
            "Hydration fetches that fell back to an empty collection."
        );
        describe_counter!(
            "admin_delete_total",
            "Delete endpoint requests, labeled by outcome."
        );

        Self { handle }
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
