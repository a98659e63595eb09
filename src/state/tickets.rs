#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;

use serde::{Deserialize, Serialize};

use crate::net::api::ApiError;

/// Ticket priority, spelled the way the server serializes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

/// Ticket category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Bug,
    Feature,
    #[default]
    Support,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Bug, Self::Feature, Self::Support];

    pub fn label(self) -> &'static str {
        match self {
            Self::Bug => "Bug",
            Self::Feature => "Feature",
            Self::Support => "Support",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Ticket lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Open,
    Closed,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

/// A support ticket as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    pub category: Category,
    pub status: Status,
}

/// Transient ticket-creation form state.
///
/// Exists only while the creation dialog is open; reset to defaults on
/// successful submission or cancel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTicketDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: Category,
}

impl Default for NewTicketDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            category: Category::Support,
        }
    }
}

impl NewTicketDraft {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Summary counts derived from the ticket snapshot.
///
/// Recomputed from the snapshot on every render rather than stored, so the
/// tiles can never disagree with the list below them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
}

impl TicketStats {
    pub fn of(tickets: &[Ticket]) -> Self {
        let open = tickets.iter().filter(|t| t.status == Status::Open).count();
        Self {
            total: tickets.len(),
            open,
            closed: tickets.len() - open,
        }
    }
}

/// A mutating action issued from a ticket card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicketAction {
    Close,
    Delete,
}

impl TicketAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Delete => "delete",
        }
    }
}

/// Dashboard state: the last successful server snapshot plus fetch
/// bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketsState {
    /// Last successful server response, in server order. Never patched
    /// locally; every mutation is followed by a full refetch.
    pub items: Vec<Ticket>,
    pub loading: bool,
    /// Sequence number of the most recently started fetch.
    pub fetch_seq: u64,
    /// Set when the server rejects the bearer token (401/422). Stays up
    /// until the user logs out or a later fetch succeeds with a fresh
    /// credential; the stale snapshot remains visible meanwhile.
    pub session_expired: bool,
    /// Message from the last failed create/close/delete, shown as a
    /// dismissable notice.
    pub action_error: Option<String>,
}

impl TicketsState {
    /// Start a new fetch and return its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// Apply a finished fetch.
    ///
    /// A response is applied only while its sequence number is still the
    /// latest, so a slow older fetch cannot overwrite a newer snapshot.
    /// A rejected credential raises the session-expired notice; a success
    /// lowers it again, so a rejection from before a re-login cannot
    /// outlive the credential it was about. Any other failure leaves the
    /// previous snapshot in place.
    pub fn apply_fetch(&mut self, seq: u64, outcome: Result<Vec<Ticket>, ApiError>) {
        if seq != self.fetch_seq {
            return;
        }
        self.loading = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                self.session_expired = false;
            }
            Err(ApiError::SessionExpired) => self.session_expired = true,
            Err(_) => {}
        }
    }

    /// Record the outcome of a close/delete action against a ticket.
    /// The caller refetches afterward regardless of the outcome.
    pub fn apply_action_outcome(
        &mut self,
        id: i64,
        action: TicketAction,
        outcome: &Result<(), ApiError>,
    ) {
        match outcome {
            Ok(()) => self.action_error = None,
            Err(err) => {
                self.action_error =
                    Some(format!("Could not {} ticket #{id}: {err}", action.label()));
            }
        }
    }
}
