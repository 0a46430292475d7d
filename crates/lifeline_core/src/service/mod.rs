//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep CLI/frontend layers decoupled from storage details.

pub mod timeline_service;
