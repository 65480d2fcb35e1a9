//! Reusable view components shared across pages.

pub mod event_card;
pub mod header;
pub mod layout;
pub mod toast;
