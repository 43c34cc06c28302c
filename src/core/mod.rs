//! Core library components.
//!
//! This module contains the reusable logic for resolving secrets, writing
//! the secrets file and wiring both into the host's lifecycle.

pub mod client;
pub mod config;
pub mod constants;
pub mod host;
pub mod lifecycle;
pub mod params;
pub mod secrets;
pub mod store;
pub mod types;
