use crate::utils::metrics::{Method, Metrics, Status};
use anyhow::{Context as _, Result};
use opentelemetry::{
    Context, KeyValue, global,
    trace::{Span, SpanKind, Status as SpanStatus, TraceContextExt, Tracer},
};
use opentelemetry_otlp::{LogExporter, MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    Resource, logs::SdkLoggerProvider, metrics::SdkMeterProvider,
    propagation::TraceContextPropagator, trace::SdkTracerProvider,
};
use tokio::time::Instant;
use tracing::{error, info};

/// OTLP exporters for one service. Keeps the providers it installs so they
/// can be flushed on shutdown.
pub struct Telemetry {
    resource: Resource,
    otel_endpoint: String,
    tracer: Option<SdkTracerProvider>,
    meter: Option<SdkMeterProvider>,
    logger: Option<SdkLoggerProvider>,
}

impl Telemetry {
    pub fn new(service_name: impl Into<String>, otel_endpoint: impl Into<String>) -> Self {
        Self {
            resource: Resource::builder()
                .with_service_name(service_name.into())
                .build(),
            otel_endpoint: otel_endpoint.into(),
            tracer: None,
            meter: None,
            logger: None,
        }
    }

    pub fn init_tracer(&mut self) -> Result<SdkTracerProvider> {
        let exporter = SpanExporter::builder()
            .with_tonic()
            .with_endpoint(self.otel_endpoint.clone())
            .build()
            .context("Failed to create span exporter")?;

        let provider = SdkTracerProvider::builder()
            .with_resource(self.resource.clone())
            .with_batch_exporter(exporter)
            .build();

        global::set_text_map_propagator(TraceContextPropagator::new());
        global::set_tracer_provider(provider.clone());
        self.tracer = Some(provider.clone());

        Ok(provider)
    }

    pub fn init_meter(&mut self) -> Result<SdkMeterProvider> {
        let exporter = MetricExporter::builder()
            .with_tonic()
            .with_endpoint(self.otel_endpoint.clone())
            .build()
            .context("Failed to create metric exporter")?;

        let provider = SdkMeterProvider::builder()
            .with_resource(self.resource.clone())
            .with_periodic_exporter(exporter)
            .build();

        global::set_meter_provider(provider.clone());
        self.meter = Some(provider.clone());

        Ok(provider)
    }

    pub fn init_logger(&mut self) -> Result<SdkLoggerProvider> {
        let exporter = LogExporter::builder()
            .with_tonic()
            .with_endpoint(self.otel_endpoint.clone())
            .build()
            .context("Failed to create log exporter")?;

        let provider = SdkLoggerProvider::builder()
            .with_resource(self.resource.clone())
            .with_batch_exporter(exporter)
            .build();

        self.logger = Some(provider.clone());

        Ok(provider)
    }

    pub async fn shutdown(self) -> Result<()> {
        let mut errors = Vec::new();

        if let Some(tracer) = self.tracer
            && let Err(e) = tracer.shutdown()
        {
            errors.push(format!("tracer provider: {e}"));
        }
        if let Some(meter) = self.meter
            && let Err(e) = meter.shutdown()
        {
            errors.push(format!("meter provider: {e}"));
        }
        if let Some(logger) = self.logger
            && let Err(e) = logger.shutdown()
        {
            errors.push(format!("logger provider: {e}"));
        }

        if !errors.is_empty() {
            anyhow::bail!("Failed to shutdown providers:\n{}", errors.join("\n"));
        }

        Ok(())
    }
}

/// Span and timer for one service operation.
pub struct TracingContext {
    pub cx: Context,
    pub start_time: Instant,
    operation: String,
}

impl TracingContext {
    pub fn start(tracer_name: &'static str, operation: &str, attributes: Vec<KeyValue>) -> Self {
        let start_time = Instant::now();
        let tracer = global::tracer(tracer_name);
        let mut span = tracer
            .span_builder(operation.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation.to_string())],
        );

        Self {
            cx: Context::current_with_span(span),
            start_time,
            operation: operation.to_string(),
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Ends the span and records the outcome on `metrics`.
    pub fn finish(&self, metrics: &Metrics, method: Method, status: Status, message: &str) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let span = self.cx.span();

        span.add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", format!("{status:?}")),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        match status {
            Status::Success => {
                span.set_status(SpanStatus::Ok);
                info!("✅ {} completed: {message}", self.operation);
            }
            Status::Error => {
                span.set_status(SpanStatus::error(message.to_string()));
                error!("❌ {} failed: {message}", self.operation);
            }
        }

        metrics.record(method, status, elapsed);
        span.end();
    }
}
