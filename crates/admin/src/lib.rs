//! Dealer Portal library.
//!
//! The in-memory core of the dealer portal, usable without any front end:
//!
//! - [`store`] - Retailers, staff and visits, plus the success banner text
//! - [`navigation`] - Which screen is showing and what it has selected
//! - [`services`] - Login gate, simulated latency, banner timers
//! - [`routes`] - One handler per user action
//! - [`views`] - Read models and the session snapshot
//!
//! A session is created with [`AppState::new`] and driven entirely through
//! [`routes`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod views;

pub use config::{ConfigError, PortalConfig};
pub use error::AppError;
pub use state::{AppState, Session, Submission};
