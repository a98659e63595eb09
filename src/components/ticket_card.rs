//! Card rendering a single ticket with its actions.

use leptos::prelude::*;

use crate::state::tickets::{Priority, Status, Ticket, TicketAction};

/// One ticket card: category and priority chips, title, description,
/// status chip, and the close/delete actions. Close is offered only while
/// the ticket is open.
#[component]
pub fn TicketCard(ticket: Ticket, on_action: Callback<(i64, TicketAction)>) -> impl IntoView {
    let id = ticket.id;
    let is_open = ticket.status == Status::Open;

    let priority_class = match ticket.priority {
        Priority::High => "chip chip--priority-high",
        Priority::Medium => "chip chip--priority-medium",
        Priority::Low => "chip chip--priority-low",
    };
    let status_class = if is_open {
        "chip chip--open"
    } else {
        "chip chip--closed"
    };

    view! {
        <div class="ticket-card">
            <div class="ticket-card__chips">
                <span class="chip chip--category">{ticket.category.label()}</span>
                <span class=priority_class>{ticket.priority.label()}</span>
            </div>
            <h3 class="ticket-card__title">{ticket.title}</h3>
            <p class="ticket-card__description">{ticket.description}</p>
            <div class="ticket-card__footer">
                <span class=status_class>{ticket.status.label()}</span>
                <div class="ticket-card__actions">
                    <Show when=move || is_open>
                        <button
                            class="ticket-card__action ticket-card__action--close"
                            title="Close ticket"
                            on:click=move |_| on_action.run((id, TicketAction::Close))
                        >
                            "\u{2713}"
                        </button>
                    </Show>
                    <button
                        class="ticket-card__action ticket-card__action--delete"
                        title="Delete ticket"
                        on:click=move |_| on_action.run((id, TicketAction::Delete))
                    >
                        "\u{2715}"
                    </button>
                </div>
            </div>
        </div>
    }
}
