//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs for frontends.
//! - Keep CLI/UI layers decoupled from persistence details.

pub mod state_service;
