//! Pure helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gate` decides render-vs-redirect for route access; `validators` holds
//! the credential and required-field predicates. Both are side-effect-free
//! so pages stay thin and the policies stay testable. `nav` wraps the one
//! place pages touch the browser location directly.

pub mod gate;
pub mod nav;
pub mod validators;
