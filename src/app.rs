//! Root application component with routing and shared state contexts.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::SessionState;
use crate::state::tickets::TicketsState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// This repo ships no backend; the shell is consumed by an external
/// cargo-leptos host serving the app.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and ticket state contexts and sets up client-side
/// routing. The session token is read back from localStorage so a page
/// reload keeps the user logged in.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore(crate::util::token_store::read()));
    let tickets = RwSignal::new(TicketsState::default());

    provide_context(session);
    provide_context(tickets);

    view! {
        <Stylesheet id="leptos" href="/pkg/helpy-client.css"/>
        <Title text="Helpy"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
