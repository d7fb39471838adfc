use crate::errors::ServiceError;
use opentelemetry::Context;
use std::{
    future::{Future, pending},
    time::Duration,
};
use tokio::{
    sync::watch,
    time::{Instant, sleep_until},
};

/// Per-request context carried through every remote and store call.
///
/// Holds the trace id and span context propagated to collaborators, an
/// optional deadline and a cancellation signal. Work run through [`RequestContext::run`] is
/// dropped as soon as either fires.
#[derive(Debug, Clone)]
pub struct RequestContext {
    trace_id: String,
    started: Instant,
    deadline: Option<Instant>,
    cancelled: watch::Receiver<bool>,
    span_context: Context,
}

/// Fires the cancellation signal of the contexts created alongside it.
#[derive(Debug)]
pub struct CancelHandle(watch::Sender<bool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.send_replace(true);
    }
}

impl RequestContext {
    pub fn new(trace_id: impl Into<String>) -> Self {
        let (_tx, rx) = watch::channel(false);
        Self {
            trace_id: trace_id.into(),
            started: Instant::now(),
            deadline: None,
            cancelled: rx,
            span_context: Context::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(self.started + timeout);
        self
    }

    pub fn with_cancellation(mut self) -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        self.cancelled = rx;
        (self, CancelHandle(tx))
    }

    /// Same request, with outbound calls parented under `cx`.
    pub fn with_span_context(&self, cx: Context) -> Self {
        Self {
            span_context: cx,
            ..self.clone()
        }
    }

    pub fn span_context(&self) -> &Context {
        &self.span_context
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Fails with `Cancelled` once the context is no longer live.
    pub fn ensure_active(&self) -> Result<(), ServiceError> {
        if self.is_cancelled() {
            return Err(ServiceError::Cancelled("request cancelled".into()));
        }
        if self.is_expired() {
            return Err(ServiceError::Cancelled("request deadline exceeded".into()));
        }
        Ok(())
    }

    /// Runs `fut` unless the context is cancelled or its deadline passes
    /// first, in which case `fut` is dropped.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, ServiceError>>,
    {
        self.ensure_active()?;

        let deadline = async {
            match self.deadline {
                Some(at) => sleep_until(at).await,
                None => pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(ServiceError::Cancelled("request cancelled".into())),
            _ = deadline => Err(ServiceError::Cancelled("request deadline exceeded".into())),
            result = fut => result,
        }
    }

    async fn cancelled(&self) {
        let mut rx = self.cancelled.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            // sender gone without cancelling: never fires
            if rx.changed().await.is_err() {
                pending::<()>().await;
            }
        }
    }
}
