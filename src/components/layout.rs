//! Application chrome: branded header with the logout action.

use leptos::prelude::*;

/// Static shell around the main view: fixed header with the brand and a
/// logout button, content area below.
#[component]
pub fn AppShell(on_logout: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <header class="shell__bar">
                <span class="shell__brand">"Helpy."</span>
                <button class="shell__logout" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </header>
            <main class="shell__main">{children()}</main>
        </div>
    }
}
