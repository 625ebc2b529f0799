use console_core::observability::metrics::gather_metrics;

pub async fn metrics() -> String {
    gather_metrics()
}
