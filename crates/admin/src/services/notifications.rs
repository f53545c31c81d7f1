//! Success banner with timed dismissal.

use tracing::debug;

use crate::state::{AppState, Session};

/// Show `message` and start its dismissal timer, if one is configured.
///
/// A newer message invalidates the older timer, so every message stays up
/// for the full configured time.
pub(crate) fn notify(state: &AppState, session: &mut Session, message: impl Into<String>) {
    let epoch = session.post_notice(message);
    let Some(ttl) = state.config().notification_ttl else {
        return;
    };
    let state = state.clone();

    tokio::spawn(async move {
        tokio::time::sleep(ttl).await;
        if state.session().await.expire_notice(epoch) {
            debug!(epoch, "Success message expired");
        }
    });
}
