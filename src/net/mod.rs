//! Clients for the external identity and document services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` wraps the hosted auth provider (credentials, sessions, change
//! notifications), `profile` wraps the per-user document store, and `types`
//! defines the DTOs shared by both.

pub mod identity;
pub mod profile;
pub mod types;
