//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `tickets`) so individual components
//! can depend on small focused models. Transitions are plain methods on
//! plain structs; signals only wrap them, which keeps every rule natively
//! testable without a browser.

pub mod session;
pub mod tickets;
