//! Portal configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `PORTAL_OTP_CODE` - Reference one-time code for the login gate (default: 123456)
//! - `PORTAL_AUTH_LATENCY_MS` - Simulated delay for sending/verifying a code (default: 1200)
//! - `PORTAL_SUBMIT_LATENCY_MS` - Simulated delay for create forms (default: 1500)
//! - `PORTAL_NOTIFICATION_TTL_SECS` - Success message lifetime, 0 disables auto-dismiss (default: 5)
//! - `PORTAL_SEED_SAMPLE_DATA` - Start with the sample retailers, staff and visits (default: true)

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use dealer_portal_core::OtpCode;

const DEFAULT_OTP_CODE: &str = "123456";
const DEFAULT_AUTH_LATENCY_MS: u64 = 1200;
const DEFAULT_SUBMIT_LATENCY_MS: u64 = 1500;
const DEFAULT_NOTIFICATION_TTL_SECS: u64 = 5;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Portal configuration.
///
/// Implements `Debug` manually to redact the reference code.
#[derive(Clone)]
pub struct PortalConfig {
    /// Reference one-time code compared verbatim at the OTP step
    pub otp_code: SecretString,
    /// Delay before a code is "sent" and before a code is "verified"
    pub auth_latency: Duration,
    /// Delay before a create form's submission completes
    pub submit_latency: Duration,
    /// How long a success message stays up; `None` keeps it until dismissed
    pub notification_ttl: Option<Duration>,
    /// Whether a fresh session starts with the sample data
    pub seed_sample_data: bool,
}

impl std::fmt::Debug for PortalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalConfig")
            .field("otp_code", &"[REDACTED]")
            .field("auth_latency", &self.auth_latency)
            .field("submit_latency", &self.submit_latency)
            .field("notification_ttl", &self.notification_ttl)
            .field("seed_sample_data", &self.seed_sample_data)
            .finish()
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            otp_code: SecretString::from(DEFAULT_OTP_CODE),
            auth_latency: Duration::from_millis(DEFAULT_AUTH_LATENCY_MS),
            submit_latency: Duration::from_millis(DEFAULT_SUBMIT_LATENCY_MS),
            notification_ttl: Some(Duration::from_secs(DEFAULT_NOTIFICATION_TTL_SECS)),
            seed_sample_data: true,
        }
    }
}

impl PortalConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value or
    /// the reference code is not six digits.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`PortalConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let otp_code = get_env_or_default(&lookup, "PORTAL_OTP_CODE", DEFAULT_OTP_CODE);
        OtpCode::parse(&otp_code)
            .map_err(|e| ConfigError::InvalidEnvVar("PORTAL_OTP_CODE".to_string(), e.to_string()))?;

        let auth_latency = Duration::from_millis(get_u64(
            &lookup,
            "PORTAL_AUTH_LATENCY_MS",
            DEFAULT_AUTH_LATENCY_MS,
        )?);
        let submit_latency = Duration::from_millis(get_u64(
            &lookup,
            "PORTAL_SUBMIT_LATENCY_MS",
            DEFAULT_SUBMIT_LATENCY_MS,
        )?);
        let notification_ttl = match get_u64(
            &lookup,
            "PORTAL_NOTIFICATION_TTL_SECS",
            DEFAULT_NOTIFICATION_TTL_SECS,
        )? {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        let seed_sample_data = get_bool(&lookup, "PORTAL_SEED_SAMPLE_DATA", true)?;

        Ok(Self {
            otp_code: SecretString::from(otp_code),
            auth_latency,
            submit_latency,
            notification_ttl,
            seed_sample_data,
        })
    }

    /// Configuration with every simulated delay removed.
    #[must_use]
    pub fn without_latency(mut self) -> Self {
        self.auth_latency = Duration::ZERO;
        self.submit_latency = Duration::ZERO;
        self
    }

    /// Verbatim check of a submitted code against the reference code.
    #[must_use]
    pub fn otp_matches(&self, code: &OtpCode) -> bool {
        code.matches(self.otp_code.expose_secret())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_env_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Get a variable parsed as `u64`, falling back to `default` when unset.
fn get_u64(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> Result<u64, ConfigError> {
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Get a boolean flag. Accepts true/false, 1/0, yes/no, on/off.
fn get_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = PortalConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.otp_code.expose_secret(), "123456");
        assert_eq!(config.auth_latency, Duration::from_millis(1200));
        assert_eq!(config.submit_latency, Duration::from_millis(1500));
        assert_eq!(config.notification_ttl, Some(Duration::from_secs(5)));
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_overrides() {
        let config = PortalConfig::from_lookup(lookup_from(&[
            ("PORTAL_OTP_CODE", "654321"),
            ("PORTAL_SUBMIT_LATENCY_MS", "0"),
            ("PORTAL_NOTIFICATION_TTL_SECS", "0"),
            ("PORTAL_SEED_SAMPLE_DATA", "no"),
        ]))
        .unwrap();
        assert_eq!(config.otp_code.expose_secret(), "654321");
        assert_eq!(config.submit_latency, Duration::ZERO);
        assert_eq!(config.notification_ttl, None);
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_rejects_bad_otp_code() {
        let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_OTP_CODE", "12ab56")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "PORTAL_OTP_CODE"));
    }

    #[test]
    fn test_rejects_bad_numbers_and_flags() {
        assert!(
            PortalConfig::from_lookup(lookup_from(&[("PORTAL_AUTH_LATENCY_MS", "soon")])).is_err()
        );
        assert!(
            PortalConfig::from_lookup(lookup_from(&[("PORTAL_SEED_SAMPLE_DATA", "maybe")])).is_err()
        );
    }

    #[test]
    fn test_debug_redacts_code() {
        let debug = format!("{:?}", PortalConfig::default());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("123456"));
    }

    #[test]
    fn test_otp_matches() {
        let config = PortalConfig::default();
        assert!(config.otp_matches(&OtpCode::parse("123456").unwrap()));
        assert!(!config.otp_matches(&OtpCode::parse("000000").unwrap()));
    }
}
