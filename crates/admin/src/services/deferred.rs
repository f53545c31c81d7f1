//! Simulated network latency.
//!
//! A deferred completion is a spawned task that sleeps for a fixed delay and
//! then runs its work. Dropping the [`Deferred`] handle detaches the task; it
//! still runs to completion.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::AppError;

/// Handle to a spawned completion.
pub struct Deferred<T> {
    handle: JoinHandle<Result<T, AppError>>,
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("finished", &self.handle.is_finished())
            .finish()
    }
}

/// Run `work` on the runtime after `delay`.
///
/// Must be called from within a Tokio runtime.
pub fn defer<F, T>(delay: Duration, work: F) -> Deferred<T>
where
    F: Future<Output = Result<T, AppError>> + Send + 'static,
    T: Send + 'static,
{
    let handle = tokio::spawn(async move {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        work.await
    });
    Deferred { handle }
}

impl<T> Deferred<T> {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the completion and return its outcome.
    ///
    /// # Errors
    ///
    /// The work's own error, or `AppError::Internal` if the task panicked.
    pub async fn wait(self) -> Result<T, AppError> {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => Err(AppError::Internal(format!("deferred task failed: {e}"))),
        }
    }
}
