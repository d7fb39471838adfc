mod context;
mod gracefullshutdown;
mod id;
mod logs;
mod metadata;
mod metrics;
mod otel;
mod validation;

pub use self::context::{CancelHandle, RequestContext};
pub use self::gracefullshutdown::shutdown_signal;
pub use self::id::Identifier;
pub use self::logs::init_logger;
pub use self::metadata::{HeaderInjector, TRACE_ID_HEADER, inject_trace_context};
pub use self::metrics::{Method, Metrics, Resource, Status};
pub use self::otel::{Telemetry, TracingContext};
pub use self::validation::validation_messages;
