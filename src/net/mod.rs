//! Network layer: REST calls to the helpdesk backend.

pub mod api;
