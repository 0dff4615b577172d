//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Access control is not a page
//! concern: the route guard has already redirected before a page renders.

pub mod chat;
pub mod chats;
pub mod login;
