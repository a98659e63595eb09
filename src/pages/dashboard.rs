//! Ticket dashboard: stat tiles, ticket grid, and the creation dialog.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::AppShell;
use crate::components::stat_card::StatCard;
use crate::components::ticket_card::TicketCard;
use crate::components::ticket_dialog::CreateTicketDialog;
use crate::state::session::SessionState;
use crate::state::tickets::{NewTicketDraft, TicketAction, TicketStats, TicketsState};

/// Kick off a ticket snapshot fetch.
///
/// The result is applied through `TicketsState::apply_fetch`, which drops
/// stale responses and maps a rejected credential to the session-expired
/// notice. Failures other than that leave the snapshot untouched and are
/// only logged.
pub fn refresh_tickets(tickets: RwSignal<TicketsState>) {
    #[cfg(feature = "hydrate")]
    {
        let mut seq = 0;
        tickets.update(|t| seq = t.begin_fetch());
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_tickets().await;
            if let Err(err) = &outcome {
                leptos::logging::warn!("ticket fetch failed: {err}");
            }
            tickets.update(|t| t.apply_fetch(seq, outcome));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tickets;
    }
}

/// Ticket dashboard page.
///
/// Fetches the snapshot on mount and after every mutation. Redirects to
/// `/login` when no session token is held.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let tickets = expect_context::<RwSignal<TicketsState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Initial snapshot; every mutation path below refetches via the same
    // helper. Unauthenticated visits take the redirect above instead of
    // issuing a tokenless fetch the server would reject.
    if session.get_untracked().is_authenticated() {
        refresh_tickets(tickets);
    }

    let show_create = RwSignal::new(false);
    let draft = RwSignal::new(NewTicketDraft::default());
    let create_error = RwSignal::new(Option::<String>::None);

    let open_dialog = move |_| {
        draft.update(NewTicketDraft::reset);
        create_error.set(None);
        show_create.set(true);
    };

    let on_cancel = Callback::new(move |()| {
        draft.update(NewTicketDraft::reset);
        create_error.set(None);
        show_create.set(false);
    });

    let submit_create = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let draft_value = draft.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_ticket(&draft_value).await {
                    Ok(()) => {
                        show_create.set(false);
                        draft.update(NewTicketDraft::reset);
                        create_error.set(None);
                        refresh_tickets(tickets);
                    }
                    Err(err) => {
                        // Dialog stays open so the draft is not lost.
                        create_error.set(Some(format!("Could not create ticket: {err}")));
                    }
                }
            });
        }
    });

    let run_action = Callback::new(move |(id, action): (i64, TicketAction)| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let outcome = match action {
                    TicketAction::Close => crate::net::api::close_ticket(id).await,
                    TicketAction::Delete => crate::net::api::delete_ticket(id).await,
                };
                if let Err(err) = &outcome {
                    leptos::logging::warn!("{} failed for ticket {id}: {err}", action.label());
                }
                tickets.update(|t| t.apply_action_outcome(id, action, &outcome));
                // Refetch regardless of the outcome; a failed action comes
                // back as an unchanged list.
                refresh_tickets(tickets);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, action);
        }
    });

    let on_logout = Callback::new(move |()| {
        crate::util::token_store::clear();
        tickets.set(TicketsState::default());
        // Clearing the token triggers the redirect effect above.
        session.update(SessionState::logout);
    });

    view! {
        <AppShell on_logout=on_logout>
            <div class="dashboard">
                <Show when=move || tickets.get().session_expired>
                    <div class="alert alert--error dashboard__banner">
                        <span>"Session expired. Please logout and login again."</span>
                        <button class="btn btn--small" on:click=move |_| on_logout.run(())>
                            "Logout"
                        </button>
                    </div>
                </Show>

                {move || {
                    tickets
                        .get()
                        .action_error
                        .map(|msg| {
                            view! {
                                <div class="alert alert--error dashboard__banner">
                                    <span>{msg}</span>
                                    <button
                                        class="btn btn--small"
                                        on:click=move |_| tickets.update(|t| t.action_error = None)
                                    >
                                        "Dismiss"
                                    </button>
                                </div>
                            }
                        })
                }}

                <header class="dashboard__header">
                    <div>
                        <h1>"Dashboard"</h1>
                        <p class="dashboard__subtitle">"Overview of your tickets"</p>
                    </div>
                    <button class="btn btn--primary" on:click=open_dialog>
                        "+ New Ticket"
                    </button>
                </header>

                <div class="dashboard__stats">
                    {move || {
                        let stats = TicketStats::of(&tickets.get().items);
                        view! {
                            <StatCard label="Total" value=stats.total kind="total"/>
                            <StatCard label="Pending" value=stats.open kind="open"/>
                            <StatCard label="Closed" value=stats.closed kind="closed"/>
                        }
                    }}
                </div>

                <div class="dashboard__grid">
                    {move || {
                        tickets
                            .get()
                            .items
                            .into_iter()
                            .map(|t| view! { <TicketCard ticket=t on_action=run_action/> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || show_create.get()>
                    <CreateTicketDialog
                        draft=draft
                        error=create_error
                        on_cancel=on_cancel
                        on_submit=submit_create
                    />
                </Show>
            </div>
        </AppShell>
    }
}
