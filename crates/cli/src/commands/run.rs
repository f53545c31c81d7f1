//! Replay a scripted session.
//!
//! A script is a YAML list of user actions, each tagged by `action`:
//!
//! ```yaml
//! - action: submit_phone
//!   phone: 123-456-7890
//! - action: submit_code
//!   code: "123456"
//! - action: open
//!   view: CREATE_VISIT
//! - action: create_visit
//!   staffId: s1
//!   retailerId: "2"
//!   date: 2030-01-15
//! ```
//!
//! Delayed actions are awaited before the next one runs. Rejected actions
//! are logged and skipped unless `--fail-fast` is given. The final session
//! snapshot is printed to stdout as JSON.

use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use dealer_portal_admin::models::{RetailerForm, StaffForm, VisitForm};
use dealer_portal_admin::navigation::{View, ViewAs};
use dealer_portal_admin::routes::{auth, dashboard, header, retailers, staff, visits};
use dealer_portal_admin::{AppError, AppState, ConfigError, PortalConfig};
use dealer_portal_core::{RetailerId, StaffId, VisitId, VisitStatus};

/// Errors that stop a script run.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Script file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Script is not a list of known actions.
    #[error("Invalid script: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Portal settings are invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An action was rejected under `--fail-fast`.
    #[error("Step {step} ({action}) rejected: {source}")]
    Rejected {
        step: usize,
        action: &'static str,
        #[source]
        source: AppError,
    },

    /// Snapshot could not be serialized.
    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

/// One scripted user action.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    SubmitPhone { phone: String },
    SubmitCode { code: String },
    Back,
    Logout,
    Open { view: View },
    CreateRetailer(RetailerForm),
    CreateStaff(StaffForm),
    CreateVisit(VisitForm),
    EditStaff { id: StaffId },
    SaveStaff(StaffForm),
    EditRetailer { id: RetailerId },
    SaveRetailer(RetailerForm),
    CancelEdit,
    /// Omit `staff` to switch back to dealer mode.
    ViewAs {
        #[serde(default)]
        staff: Option<StaffId>,
    },
    UpdateVisitStatus { id: VisitId, status: VisitStatus },
    Dismiss,
}

impl Action {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SubmitPhone { .. } => "submit_phone",
            Self::SubmitCode { .. } => "submit_code",
            Self::Back => "back",
            Self::Logout => "logout",
            Self::Open { .. } => "open",
            Self::CreateRetailer(_) => "create_retailer",
            Self::CreateStaff(_) => "create_staff",
            Self::CreateVisit(_) => "create_visit",
            Self::EditStaff { .. } => "edit_staff",
            Self::SaveStaff(_) => "save_staff",
            Self::EditRetailer { .. } => "edit_retailer",
            Self::SaveRetailer(_) => "save_retailer",
            Self::CancelEdit => "cancel_edit",
            Self::ViewAs { .. } => "view_as",
            Self::UpdateVisitStatus { .. } => "update_visit_status",
            Self::Dismiss => "dismiss",
        }
    }
}

/// Parse a script.
///
/// # Errors
///
/// Returns an error for malformed YAML or unknown actions.
pub fn parse_script(content: &str) -> Result<Vec<Action>, ScriptError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Run one action to completion, waiting out any simulated delay.
///
/// # Errors
///
/// Returns the route's error when the action is rejected.
pub async fn apply(state: &AppState, action: Action, today: NaiveDate) -> Result<(), AppError> {
    match action {
        Action::SubmitPhone { phone } => {
            auth::set_phone(state, &phone).await;
            auth::submit_phone(state).await?.wait().await?;
        }
        Action::SubmitCode { code } => {
            auth::set_code(state, &code).await;
            auth::submit_code(state).await?.wait().await?;
        }
        Action::Back => auth::back(state).await?,
        Action::Logout => auth::logout(state).await,
        Action::Open { view } => dashboard::open(state, view).await?,
        Action::CreateRetailer(form) => {
            retailers::create(state, form).await?.wait().await?;
        }
        Action::CreateStaff(form) => {
            staff::create(state, form).await?.wait().await?;
        }
        Action::CreateVisit(form) => {
            visits::create(state, form, today).await?.wait().await?;
        }
        Action::EditStaff { id } => {
            staff::edit(state, &id).await?;
        }
        Action::SaveStaff(form) => {
            staff::save(state, form).await?;
        }
        Action::EditRetailer { id } => {
            retailers::edit(state, &id).await?;
        }
        Action::SaveRetailer(form) => {
            retailers::save(state, form).await?;
        }
        Action::CancelEdit => {
            dashboard::cancel_edit(state).await?;
        }
        Action::ViewAs { staff } => {
            let selection = staff.map_or(ViewAs::Dealer, ViewAs::Staff);
            header::view_as(state, selection).await?;
        }
        Action::UpdateVisitStatus { id, status } => {
            visits::update_status(state, &id, status).await?;
        }
        Action::Dismiss => dashboard::dismiss(state).await?,
    }
    Ok(())
}

/// Replay the actions in order against `state`. Returns how many were
/// rejected and skipped.
///
/// # Errors
///
/// Returns `ScriptError::Rejected` for the first rejected action when
/// `fail_fast` is set.
pub async fn replay(
    state: &AppState,
    actions: Vec<Action>,
    today: NaiveDate,
    fail_fast: bool,
) -> Result<usize, ScriptError> {
    let mut rejected = 0;
    for (index, action) in actions.into_iter().enumerate() {
        let step = index + 1;
        let name = action.name();
        match apply(state, action, today).await {
            Ok(()) => debug!(step, action = name, "Action applied"),
            Err(source) if fail_fast => {
                return Err(ScriptError::Rejected {
                    step,
                    action: name,
                    source,
                });
            }
            Err(e) => {
                rejected += 1;
                warn!(step, action = name, error = %e, "Action rejected; skipping");
            }
        }
    }
    Ok(rejected)
}

/// Load a script, replay it against a fresh session and print the result.
///
/// # Errors
///
/// Returns an error if the script cannot be read or parsed, the
/// configuration is invalid, or an action is rejected under `fail_fast`.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn run(path: &Path, fail_fast: bool) -> Result<(), ScriptError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ScriptError::Read {
            path: path.display().to_string(),
            source,
        })?;
    let actions = parse_script(&content)?;
    info!(actions = actions.len(), "Loaded script");

    let config = PortalConfig::from_env()?;
    debug!(?config, "Loaded configuration");
    let state = AppState::new(config);

    let rejected = replay(&state, actions, Local::now().date_naive(), fail_fast).await?;
    info!(rejected, "Script finished");

    let json = serde_json::to_string_pretty(&state.snapshot().await)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"
- action: submit_phone
  phone: 123-456-7890
- action: submit_code
  code: "123456"
- action: open
  view: CREATE_RETAILER
- action: create_retailer
  name: Pat Lee
  businessName: Lee Hardware
  phone: 555-010-2000
  email: pat@leehardware.com
  address: 1 Elm St
- action: view_as
  staff: s2
- action: update_visit_status
  id: v3
  status: Completed
- action: view_as
"#;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
    }

    fn state() -> AppState {
        AppState::new(PortalConfig::default().without_latency())
    }

    #[test]
    fn test_parse_script() {
        let actions = parse_script(SCRIPT).unwrap();
        let names: Vec<_> = actions.iter().map(Action::name).collect();
        assert_eq!(
            names,
            [
                "submit_phone",
                "submit_code",
                "open",
                "create_retailer",
                "view_as",
                "update_visit_status",
                "view_as"
            ]
        );
        assert!(matches!(&actions[6], Action::ViewAs { staff: None }));
    }

    #[test]
    fn test_unknown_action_is_a_parse_error() {
        let err = parse_script("- action: delete_everything\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[tokio::test]
    async fn test_replay_script() {
        let state = state();
        let rejected = replay(&state, parse_script(SCRIPT).unwrap(), today(), true)
            .await
            .unwrap();
        assert_eq!(rejected, 0);

        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.view, View::Dashboard);
        assert_eq!(snapshot.retailers[0].business_name, "Lee Hardware");
        let v3 = snapshot.visits.iter().find(|v| v.id.as_str() == "v3").unwrap();
        assert_eq!(v3.status, VisitStatus::Completed);
    }

    #[tokio::test]
    async fn test_rejected_actions_are_skipped() {
        let state = state();
        let actions = parse_script("- action: open\n  view: VIEW_STAFF\n- action: logout\n").unwrap();
        assert_eq!(replay(&state, actions, today(), false).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_fail_fast_reports_step() {
        let state = state();
        let actions = parse_script("- action: logout\n- action: open\n  view: VIEW_STAFF\n").unwrap();
        let err = replay(&state, actions, today(), true).await.unwrap_err();
        assert!(matches!(
            err,
            ScriptError::Rejected {
                step: 2,
                action: "open",
                source: AppError::Unauthorized(_)
            }
        ));
    }
}
