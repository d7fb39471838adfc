use crate::utils::{Identifier, RequestContext, TRACE_ID_HEADER};
use axum::{extract::FromRequestParts, http::request::Parts};
use std::{convert::Infallible, time::Duration};

/// Deadline applied to every request context built on a router. Install
/// with `.layer(Extension(RequestTimeout(..)))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeout(pub Duration);

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let trace_id = parts
            .headers
            .get(TRACE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Identifier::generate().to_string());

        let ctx = RequestContext::new(trace_id);

        Ok(match parts.extensions.get::<RequestTimeout>() {
            Some(RequestTimeout(timeout)) => ctx.with_timeout(*timeout),
            None => ctx,
        })
    }
}
