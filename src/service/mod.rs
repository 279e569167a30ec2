//! Credentials for the external services the bot talks to.
//!
//! This module contains:
//! - Environment sources (the process environment, or any fixed mapping)
//! - The per-service API key mapping resolved from those sources
//!
//! The environment source is a trait so the lookup can be swapped out in tests.

pub mod env;
pub mod keys;
