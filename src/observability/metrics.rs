use prometheus::{Encoder, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub match_requests_total: IntCounterVec,
    pub match_latency_seconds: HistogramVec,
    pub booking_actions_total: IntCounterVec,
    pub active_bookings: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let match_requests_total = IntCounterVec::new(
            Opts::new("match_requests_total", "Total match requests by outcome"),
            &["outcome"],
        )
        .expect("valid match_requests_total metric");

        let match_latency_seconds = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "match_latency_seconds",
                "Latency of match ranking in seconds",
            ),
            &["outcome"],
        )
        .expect("valid match_latency_seconds metric");

        let booking_actions_total = IntCounterVec::new(
            Opts::new(
                "booking_actions_total",
                "Total booking actions by action and outcome",
            ),
            &["action", "outcome"],
        )
        .expect("valid booking_actions_total metric");

        let active_bookings = IntGauge::new(
            "active_bookings",
            "Current number of bookings in a non-terminal state",
        )
        .expect("valid active_bookings metric");

        registry
            .register(Box::new(match_requests_total.clone()))
            .expect("register match_requests_total");
        registry
            .register(Box::new(match_latency_seconds.clone()))
            .expect("register match_latency_seconds");
        registry
            .register(Box::new(booking_actions_total.clone()))
            .expect("register booking_actions_total");
        registry
            .register(Box::new(active_bookings.clone()))
            .expect("register active_bookings");

        Self {
            registry,
            match_requests_total,
            match_latency_seconds,
            booking_actions_total,
            active_bookings,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}
