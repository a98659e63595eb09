//! Presentation components. Pure rendering over the shared state; all
//! actions are delegated to callers via `Callback` props.

pub mod layout;
pub mod stat_card;
pub mod ticket_card;
pub mod ticket_dialog;
