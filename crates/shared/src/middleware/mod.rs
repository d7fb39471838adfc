mod context;
mod json;
mod metrics;

pub use self::context::RequestTimeout;
pub use self::json::JsonBody;
pub use self::metrics::{metrics_handler, track_metrics};
