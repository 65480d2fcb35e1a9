//! Route-level page components.

pub mod achievements;
pub mod auth;
pub mod event_detail;
pub mod events;
pub mod home;
pub mod not_found;
pub mod profile;
pub mod who_we_are;
