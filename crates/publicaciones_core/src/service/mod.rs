//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the registry's façade API.
//! - Keep embedding hosts decoupled from storage details.

pub mod publication_service;
