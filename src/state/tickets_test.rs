use super::*;

fn ticket(id: i64, status: Status) -> Ticket {
    Ticket {
        id,
        title: format!("Ticket {id}"),
        description: String::new(),
        priority: Priority::Medium,
        category: Category::Support,
        status,
    }
}

// =============================================================
// Wire types
// =============================================================

#[test]
fn enums_serialize_with_server_spellings() {
    assert_eq!(serde_json::to_value(Priority::High).unwrap(), "High");
    assert_eq!(serde_json::to_value(Category::Bug).unwrap(), "Bug");
    assert_eq!(serde_json::to_value(Status::Closed).unwrap(), "Closed");
}

#[test]
fn ticket_deserializes_from_server_shape() {
    let t: Ticket = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Printer broken",
        "description": "It beeps",
        "priority": "High",
        "category": "Bug",
        "status": "Open"
    }))
    .expect("ticket");
    assert_eq!(t.id, 1);
    assert_eq!(t.priority, Priority::High);
    assert_eq!(t.status, Status::Open);
}

#[test]
fn ticket_description_defaults_when_missing() {
    let t: Ticket = serde_json::from_value(serde_json::json!({
        "id": 2,
        "title": "No body",
        "priority": "Low",
        "category": "Feature",
        "status": "Closed"
    }))
    .expect("ticket");
    assert_eq!(t.description, "");
}

#[test]
fn labels_round_trip_through_from_label() {
    assert_eq!(Priority::from_label("High"), Some(Priority::High));
    assert_eq!(Priority::from_label("bogus"), None);
    assert_eq!(Category::from_label("Feature"), Some(Category::Feature));
    assert_eq!(Category::from_label(""), None);
}

// =============================================================
// NewTicketDraft
// =============================================================

#[test]
fn draft_defaults_to_medium_support() {
    let d = NewTicketDraft::default();
    assert_eq!(d.title, "");
    assert_eq!(d.description, "");
    assert_eq!(d.priority, Priority::Medium);
    assert_eq!(d.category, Category::Support);
}

#[test]
fn draft_reset_returns_to_defaults() {
    let mut d = NewTicketDraft {
        title: "VPN down".to_owned(),
        description: "since monday".to_owned(),
        priority: Priority::High,
        category: Category::Bug,
    };
    d.reset();
    assert_eq!(d, NewTicketDraft::default());
}

#[test]
fn draft_serializes_all_form_fields() {
    let d = NewTicketDraft::default();
    let v = serde_json::to_value(&d).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "title": "",
            "description": "",
            "priority": "Medium",
            "category": "Support"
        })
    );
}

// =============================================================
// TicketStats
// =============================================================

#[test]
fn stats_of_empty_snapshot_are_zero() {
    let stats = TicketStats::of(&[]);
    assert_eq!(stats, TicketStats { total: 0, open: 0, closed: 0 });
}

#[test]
fn stats_count_open_and_closed() {
    let snapshot = vec![
        ticket(1, Status::Open),
        ticket(2, Status::Closed),
        ticket(3, Status::Open),
    ];
    let stats = TicketStats::of(&snapshot);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.open, 2);
    assert_eq!(stats.closed, 1);
}

#[test]
fn single_open_ticket_shows_one_pending() {
    // Login -> fetch returns one open ticket -> the "Pending" tile binds
    // stats.open.
    let snapshot = vec![ticket(1, Status::Open)];
    assert_eq!(TicketStats::of(&snapshot).open, 1);
}

// =============================================================
// TicketsState fetch lifecycle
// =============================================================

#[test]
fn tickets_state_default_is_empty_and_quiet() {
    let t = TicketsState::default();
    assert!(t.items.is_empty());
    assert!(!t.loading);
    assert!(!t.session_expired);
    assert!(t.action_error.is_none());
    assert_eq!(t.fetch_seq, 0);
}

#[test]
fn begin_fetch_increments_sequence_and_sets_loading() {
    let mut t = TicketsState::default();
    let first = t.begin_fetch();
    let second = t.begin_fetch();
    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert!(t.loading);
}

#[test]
fn apply_fetch_replaces_snapshot_on_success() {
    let mut t = TicketsState::default();
    let seq = t.begin_fetch();
    t.apply_fetch(seq, Ok(vec![ticket(1, Status::Open)]));
    assert_eq!(t.items.len(), 1);
    assert!(!t.loading);
}

#[test]
fn apply_fetch_drops_stale_response() {
    let mut t = TicketsState::default();
    let old = t.begin_fetch();
    let newer = t.begin_fetch();
    t.apply_fetch(newer, Ok(vec![ticket(1, Status::Open), ticket(2, Status::Open)]));
    // The slow older fetch must not overwrite the newer snapshot.
    t.apply_fetch(old, Ok(vec![ticket(9, Status::Closed)]));
    assert_eq!(t.items.len(), 2);
    assert_eq!(t.items[0].id, 1);
}

#[test]
fn rejected_credential_raises_banner_and_keeps_snapshot() {
    let mut t = TicketsState::default();
    let seq = t.begin_fetch();
    t.apply_fetch(seq, Ok(vec![ticket(1, Status::Open)]));

    let seq = t.begin_fetch();
    t.apply_fetch(seq, Err(ApiError::SessionExpired));
    assert!(t.session_expired);
    assert_eq!(t.items.len(), 1, "previous snapshot must stay visible");
}

#[test]
fn banner_comes_down_once_a_fetch_succeeds() {
    // A rejected fetch (say, from before a re-login) must not leave the
    // banner up once the next fetch succeeds with a fresh credential.
    let mut t = TicketsState::default();
    let seq = t.begin_fetch();
    t.apply_fetch(seq, Err(ApiError::SessionExpired));
    assert!(t.session_expired);

    let seq = t.begin_fetch();
    t.apply_fetch(seq, Ok(vec![ticket(1, Status::Open)]));
    assert!(!t.session_expired, "banner must clear on a successful fetch");
    assert_eq!(TicketStats::of(&t.items).open, 1);
}

#[test]
fn other_fetch_failures_keep_snapshot_silently() {
    let mut t = TicketsState::default();
    let seq = t.begin_fetch();
    t.apply_fetch(seq, Ok(vec![ticket(1, Status::Open)]));

    let seq = t.begin_fetch();
    t.apply_fetch(seq, Err(ApiError::Http(500)));
    assert!(!t.session_expired);
    assert_eq!(t.items.len(), 1);
    assert!(!t.loading);
}

// =============================================================
// Action outcomes
// =============================================================

#[test]
fn action_labels() {
    assert_eq!(TicketAction::Close.label(), "close");
    assert_eq!(TicketAction::Delete.label(), "delete");
}

#[test]
fn failed_action_surfaces_a_notice() {
    let mut t = TicketsState::default();
    t.apply_action_outcome(5, TicketAction::Delete, &Err(ApiError::Http(403)));
    let msg = t.action_error.expect("notice");
    assert!(msg.contains("delete"));
    assert!(msg.contains("#5"));
}

#[test]
fn successful_action_clears_previous_notice() {
    let mut t = TicketsState {
        action_error: Some("Could not close ticket #1".to_owned()),
        ..TicketsState::default()
    };
    t.apply_action_outcome(1, TicketAction::Close, &Ok(()));
    assert!(t.action_error.is_none());
}
