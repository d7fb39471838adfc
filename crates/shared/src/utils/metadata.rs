use crate::utils::RequestContext;
use opentelemetry::{global, propagation::Injector};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

pub const TRACE_ID_HEADER: &str = "x-trace-id";

pub struct HeaderInjector<'a>(pub &'a mut HeaderMap);

impl<'a> Injector for HeaderInjector<'a> {
    fn set(&mut self, key: &str, value: String) {
        if let Ok(name) = HeaderName::from_bytes(key.as_bytes())
            && let Ok(value) = HeaderValue::from_str(&value)
        {
            self.0.insert(name, value);
        }
    }
}

/// Headers for an outbound call: the request trace id plus the W3C trace
/// context of the request's current span.
pub fn inject_trace_context(ctx: &RequestContext) -> HeaderMap {
    let mut headers = HeaderMap::new();

    if let Ok(value) = HeaderValue::from_str(ctx.trace_id()) {
        headers.insert(HeaderName::from_static(TRACE_ID_HEADER), value);
    }

    global::get_text_map_propagator(|propagator| {
        propagator.inject_context(ctx.span_context(), &mut HeaderInjector(&mut headers))
    });

    headers
}
