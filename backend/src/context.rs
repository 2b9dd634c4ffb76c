//! Per-call cancellation and deadline handling.
//!
//! Reads run inside [`RequestContext::run`]. When the deadline passes or the
//! caller cancels, the in-flight store future is dropped and the call fails.
//!
//! Writes run inside [`RequestContext::run_to_completion`]: the context is
//! checked before the write starts and ignored afterwards. A write that
//! committed is always reported as committed, never as `DeadlineExceeded`.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::error::{LedgerError, LedgerResult};

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Sender half returned by [`RequestContext::cancellable`]
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

impl RequestContext {
    /// A context that never expires and cannot be cancelled
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().deadline_at(Instant::now() + timeout)
    }

    pub fn deadline_at(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Attach a fresh cancellation signal, returning the handle that fires it
    pub fn cancellable(mut self) -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        self.cancel = Some(receiver);
        (self, CancelHandle { sender })
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().map(|rx| *rx.borrow()).unwrap_or(false)
    }

    pub fn is_expired(&self) -> bool {
        self.deadline
            .map(|deadline| Instant::now() >= deadline)
            .unwrap_or(false)
    }

    /// Drive `operation` to completion unless the context fires first
    pub async fn run<T, F>(&self, operation: F) -> LedgerResult<T>
    where
        F: Future<Output = LedgerResult<T>>,
    {
        if self.is_cancelled() {
            return Err(LedgerError::Cancelled);
        }
        if self.is_expired() {
            return Err(LedgerError::DeadlineExceeded);
        }

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(LedgerError::Cancelled),
            _ = self.expired() => Err(LedgerError::DeadlineExceeded),
            result = operation => result,
        }
    }

    /// Check the context once, then await `operation` to the end
    ///
    /// Use for writes: once started they either commit and return `Ok`, or
    /// roll back and return the store error.
    pub async fn run_to_completion<T, F>(&self, operation: F) -> LedgerResult<T>
    where
        F: Future<Output = LedgerResult<T>>,
    {
        if self.is_cancelled() {
            return Err(LedgerError::Cancelled);
        }
        if self.is_expired() {
            return Err(LedgerError::DeadlineExceeded);
        }
        operation.await
    }

    async fn cancelled(&self) {
        let Some(receiver) = &self.cancel else {
            return std::future::pending().await;
        };
        let mut receiver = receiver.clone();
        // A dropped handle can never cancel.
        let closed = receiver.wait_for(|cancelled| *cancelled).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }

    async fn expired(&self) {
        match self.deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}
