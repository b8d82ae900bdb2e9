//! Centralized error funnel.
//!
//! # Responsibility
//! - Report failures at error severity, tagged with the failing operation.
//! - Optionally route a simplified message through the user-notification path.
//! - Adapt fallible operations into ones that never propagate a failure.
//!
//! # Invariants
//! - `handle_error` emits exactly one error entry, plus exactly one warn entry
//!   when the user is notified.
//! - Wrapped operations return `None` on failure; they never panic outward.

use crate::diagnostics::{Diagnostics, Severity};
use futures::FutureExt;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::thread;

const FALLBACK_NOTIFICATION: &str = "An error occurred";

/// Failure raised as a panic inside a guarded operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicError {
    pub payload: String,
}

impl Display for PanicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "operation panicked: {}", self.payload)
    }
}

impl Error for PanicError {}

/// Error funnel bound to one diagnostics facade.
#[derive(Debug, Clone)]
pub struct ErrorHandler {
    diagnostics: Diagnostics,
}

impl ErrorHandler {
    pub fn new(diagnostics: Diagnostics) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Logs `error` for `context` and, when asked, notifies the user.
    pub fn handle_error(&self, error: &(dyn Error + '_), context: &str, notify_user: bool) {
        let detail = error.to_string();
        self.diagnostics.log(
            Severity::Error,
            &format!("Error in {context}"),
            Some(detail.as_str()),
        );

        if notify_user {
            let message = if detail.is_empty() {
                FALLBACK_NOTIFICATION
            } else {
                detail.as_str()
            };
            self.notify_user(message);
        }
    }

    /// User-facing notification path.
    ///
    /// There is no toast/banner surface in core yet, so the notice is logged.
    pub fn notify_user(&self, message: &str) {
        self.diagnostics
            .log(Severity::Warn, "User notification:", Some(message));
    }

    /// Runs `operation` now; failures and panics are reported and become `None`.
    pub fn run<T, E, F>(&self, context: &str, operation: F) -> Option<T>
    where
        E: Error,
        F: FnOnce() -> Result<T, E>,
    {
        self.settle(context, panic::catch_unwind(AssertUnwindSafe(operation)))
    }

    /// Adapts a one-argument fallible function into one returning `Option`.
    pub fn wrap<'a, A, T, E, F>(
        &'a self,
        context: &'a str,
        mut operation: F,
    ) -> impl FnMut(A) -> Option<T> + 'a
    where
        E: Error,
        F: FnMut(A) -> Result<T, E> + 'a,
    {
        move |arg| self.run(context, || operation(arg))
    }

    /// Awaits `future`; failures and panics are reported and become `None`.
    ///
    /// The future resolves exactly once.
    pub async fn run_async<T, E, Fut>(&self, context: &str, future: Fut) -> Option<T>
    where
        E: Error,
        Fut: Future<Output = Result<T, E>>,
    {
        let outcome = AssertUnwindSafe(future).catch_unwind().await;
        self.settle(context, outcome)
    }

    /// Adapts a one-argument async fallible function into one resolving to `Option`.
    pub fn wrap_async<'a, A, T, E, F, Fut>(
        &'a self,
        context: &'a str,
        mut operation: F,
    ) -> impl FnMut(A) -> Pin<Box<dyn Future<Output = Option<T>> + 'a>> + 'a
    where
        A: 'a,
        T: 'a,
        E: Error + 'a,
        F: FnMut(A) -> Fut + 'a,
        Fut: Future<Output = Result<T, E>> + 'a,
    {
        move |arg| {
            let future = operation(arg);
            Box::pin(self.run_async(context, future))
        }
    }

    fn settle<T, E: Error>(
        &self,
        context: &str,
        outcome: thread::Result<Result<T, E>>,
    ) -> Option<T> {
        match outcome {
            Ok(Ok(value)) => Some(value),
            Ok(Err(err)) => {
                self.handle_error(&err, context, false);
                None
            }
            Err(payload) => {
                let err = PanicError {
                    payload: panic_payload_text(payload.as_ref()),
                };
                self.handle_error(&err, context, false);
                None
            }
        }
    }
}

pub(crate) fn panic_payload_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
