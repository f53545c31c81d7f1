//! Dealer Portal Core - Shared types library.
//!
//! This crate provides common types used across all dealer portal components:
//! - `admin` - In-memory portal core (store, navigation, authentication gate)
//! - `cli` - Command-line driver for sample data and scripted sessions
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no timers,
//! no shared state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, phone numbers,
//!   one-time codes, staff roles and visit statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
