//! Core components, types, and utilities for interview-ace.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Settings handling and environment overrides.
//! - The default system directive for the interview coach.
//! - Common types and result handling.

pub mod config;
pub mod prompts;
pub mod types;
