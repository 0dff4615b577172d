//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models: `session` is app-wide, `listing` is page-scoped.

pub mod listing;
pub mod session;
