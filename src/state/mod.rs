//! Process-scoped reactive state shared across pages.
//!
//! ARCHITECTURE
//! ============
//! State structs are plain data with a single writer each: `session` owns
//! the auth cell, `notify` owns the toast queue. Pages and components read
//! them through `RwSignal` context providers and never mutate auth state
//! directly.

pub mod auth;
pub mod notify;
pub mod session;
