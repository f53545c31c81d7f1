//! Business logic services for the portal.
//!
//! # Services
//!
//! - `auth` - Phone + one-time-code login gate
//! - `deferred` - Spawned completions for simulated latency
//! - `notifications` - Success banner with timed dismissal

pub mod auth;
pub mod deferred;
pub mod notifications;

pub use auth::{AuthError, AuthGate, AuthStep};
pub use deferred::{Deferred, defer};
