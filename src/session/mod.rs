//! Inputs a new bot session is bootstrapped from.
//!
//! This module provides:
//! - The conversation seed handed to the conversation engine
//! - The per-service option payload handed to the session bootstrapper

pub mod bot_config;
pub mod conversation;
