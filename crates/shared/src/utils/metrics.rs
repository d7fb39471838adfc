use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

const BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

fn histogram() -> Histogram {
    Histogram::new(BUCKETS.into_iter())
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

impl Status {
    pub fn of<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        }
    }
}

/// Dependencies whose latency is tracked separately from request handling.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Resource {
    Customer,
    Product,
    Database,
    Cache,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct ExternalLabels {
    pub resource: Resource,
    pub operation: String,
    pub status: Status,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct HttpLabels {
    pub method: String,
    pub route: String,
    pub status: u16,
}

/// Prometheus families shared by a service. Clones share the same series.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
    pub external_duration: Family<ExternalLabels, Histogram>,
    pub http_requests: Family<HttpLabels, Counter>,
    pub http_duration: Family<HttpLabels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(histogram),
            external_duration: Family::new_with_constructor(histogram),
            http_requests: Family::default(),
            http_duration: Family::new_with_constructor(histogram),
        }
    }

    pub fn register(&self, prefix: &str, registry: &mut Registry) {
        registry.register(
            format!("{prefix}_request_counter"),
            format!("Total number of operations handled by the {prefix}"),
            self.request_counter.clone(),
        );
        registry.register(
            format!("{prefix}_request_duration"),
            format!("Histogram of operation durations for the {prefix}"),
            self.request_duration.clone(),
        );
        registry.register(
            format!("{prefix}_external_duration"),
            "Histogram of external call durations by resource",
            self.external_duration.clone(),
        );
        registry.register(
            format!("{prefix}_http_requests"),
            "Total number of HTTP requests by route and status code",
            self.http_requests.clone(),
        );
        registry.register(
            format!("{prefix}_http_duration"),
            "Histogram of HTTP request durations by route and status code",
            self.http_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    pub fn record_external(
        &self,
        resource: Resource,
        operation: &str,
        status: Status,
        duration_secs: f64,
    ) {
        let labels = ExternalLabels {
            resource,
            operation: operation.to_string(),
            status,
        };
        self.external_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    pub fn record_http(&self, method: &str, route: &str, status: u16, duration_secs: f64) {
        let labels = HttpLabels {
            method: method.to_string(),
            route: route.to_string(),
            status,
        };
        self.http_requests.get_or_create(&labels).inc();
        self.http_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}
