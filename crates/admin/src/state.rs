//! Application state shared across routes.
//!
//! One portal session lives behind a single async mutex. Routes take the
//! lock, run to completion and release it; deferred completions take the same
//! lock once their delay has elapsed. The lock is never held across a delay.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

use crate::config::PortalConfig;
use crate::error::AppError;
use crate::navigation::Navigator;
use crate::services::auth::AuthGate;
use crate::store::DomainStore;
use crate::views::Snapshot;

/// Kinds of delayed submissions. At most one of each may be in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Submission {
    SendCode,
    VerifyCode,
    CreateRetailer,
    CreateStaff,
    CreateVisit,
}

impl Submission {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SendCode => "send code",
            Self::VerifyCode => "verify code",
            Self::CreateRetailer => "create retailer",
            Self::CreateStaff => "create staff",
            Self::CreateVisit => "create visit",
        }
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one user sees and changes.
#[derive(Debug, Default)]
pub struct Session {
    pub(crate) store: DomainStore,
    pub(crate) navigator: Navigator,
    pub(crate) auth: AuthGate,
    pending: BTreeSet<Submission>,
    notice_epoch: u64,
    login: u64,
}

impl Session {
    #[must_use]
    pub fn new(store: DomainStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn store(&self) -> &DomainStore {
        &self.store
    }

    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub const fn auth(&self) -> &AuthGate {
        &self.auth
    }

    /// Whether a submission of this kind is waiting for its delay.
    #[must_use]
    pub fn is_pending(&self, submission: Submission) -> bool {
        self.pending.contains(&submission)
    }

    /// Submissions waiting for their delay, in a fixed order.
    pub fn pending(&self) -> impl Iterator<Item = Submission> + '_ {
        self.pending.iter().copied()
    }

    pub(crate) fn require_auth(&self) -> Result<(), AppError> {
        if self.auth.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::Unauthorized(format!(
                "sign in first (currently at the {} step)",
                self.auth.step()
            )))
        }
    }

    /// Register a delayed submission.
    pub(crate) fn begin(&mut self, submission: Submission) -> Result<(), AppError> {
        if self.pending.insert(submission) {
            Ok(())
        } else {
            Err(AppError::SubmissionPending(submission))
        }
    }

    pub(crate) fn finish(&mut self, submission: Submission) {
        self.pending.remove(&submission);
    }

    /// Counter bumped on every logout. Delayed submissions capture it when
    /// they start.
    pub(crate) const fn login(&self) -> u64 {
        self.login
    }

    /// End the current login: every in-flight submission belongs to it and
    /// is forgotten.
    pub(crate) fn end_login(&mut self) {
        self.login += 1;
        self.pending.clear();
    }

    /// Settle a delayed submission started under `login`. Returns `false`,
    /// leaving the pending set alone, when that login has since ended.
    pub(crate) fn settle(&mut self, submission: Submission, login: u64) -> bool {
        if self.login != login {
            return false;
        }
        self.finish(submission);
        true
    }

    /// Show a success message. Returns the token a timed dismissal must
    /// present to clear it.
    pub(crate) fn post_notice(&mut self, message: impl Into<String>) -> u64 {
        self.store.show_success_message(message);
        self.notice_epoch += 1;
        self.notice_epoch
    }

    /// Clear the message if it is still the one `epoch` was issued for.
    pub(crate) fn expire_notice(&mut self, epoch: u64) -> bool {
        if self.notice_epoch != epoch || self.store.success_message().is_none() {
            return false;
        }
        self.store.clear_success_message();
        true
    }

    pub(crate) fn dismiss_notice(&mut self) {
        self.store.clear_success_message();
        self.notice_epoch += 1;
    }
}

/// Application state shared across all routes and deferred tasks.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: PortalConfig,
    session: Mutex<Session>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Start a signed-out session, seeded with the sample data when the
    /// configuration asks for it.
    #[must_use]
    pub fn new(config: PortalConfig) -> Self {
        let store = if config.seed_sample_data {
            DomainStore::with_sample_data()
        } else {
            DomainStore::new()
        };
        Self::with_store(config, store)
    }

    /// Start a signed-out session over an existing store.
    #[must_use]
    pub fn with_store(config: PortalConfig, store: DomainStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                session: Mutex::new(Session::new(store)),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.inner.config
    }

    /// Read from the session under the lock.
    pub async fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        let session = self.inner.session.lock().await;
        f(&session)
    }

    /// Serializable copy of the whole session.
    pub async fn snapshot(&self) -> Snapshot {
        self.read(Snapshot::capture).await
    }

    pub(crate) async fn session(&self) -> MutexGuard<'_, Session> {
        self.inner.session.lock().await
    }
}
