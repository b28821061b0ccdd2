//! Core domain + application logic for the Telegram notes bot.
//!
//! This crate is framework-agnostic. Telegram lives behind the messaging port
//! implemented in the adapter crate.

pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod persistence;
pub mod service;
pub mod store;

pub use errors::{Error, Result};
