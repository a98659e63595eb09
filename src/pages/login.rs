//! Auth screen with a login/register mode toggle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{AuthMode, SessionState};

/// Auth screen — collects username/password and submits to `/login` or
/// `/register` depending on mode. Values are sent as-is; the server is the
/// validator. Redirects to the dashboard once a token is held.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // A session acquired here (or restored from storage) goes straight to
    // the dashboard.
    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    let mode = RwSignal::new(AuthMode::Login);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Guards a fast double-invocation before the disabled attribute of
        // the submit button commits.
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        error.set(None);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let user = username.get_untracked();
            let pass = password.get_untracked();
            leptos::task::spawn_local(async move {
                match mode.get_untracked() {
                    AuthMode::Login => match crate::net::api::login(&user, &pass).await {
                        Ok(token) => {
                            crate::util::token_store::write(&token);
                            session.update(|s| s.login(token));
                        }
                        Err(msg) => error.set(Some(msg)),
                    },
                    AuthMode::Register => match crate::net::api::register(&user, &pass).await {
                        Ok(()) => {
                            // No auto-login after registration.
                            mode.set(AuthMode::Login);
                            notice.set(Some("Account created! Please login.".to_owned()));
                        }
                        Err(msg) => error.set(Some(msg)),
                    },
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            submitting.set(false);
        }
    };

    let headline = move || match mode.get() {
        AuthMode::Login => "Welcome Back",
        AuthMode::Register => "Join Us",
    };
    let submit_label = move || {
        if submitting.get() {
            "Please wait..."
        } else {
            match mode.get() {
                AuthMode::Login => "Login",
                AuthMode::Register => "Register",
            }
        }
    };
    let toggle_label = move || match mode.get() {
        AuthMode::Login => "Need an account? Sign Up",
        AuthMode::Register => "Have an account? Login",
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__headline">{headline}</h1>

                {move || error.get().map(|msg| view! { <p class="alert alert--error">{msg}</p> })}
                {move || notice.get().map(|msg| view! { <p class="alert alert--info">{msg}</p> })}

                <form on:submit=on_submit>
                    <label class="auth-card__label">
                        "Username"
                        <input
                            class="auth-card__input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-card__label">
                        "Password"
                        <input
                            class="auth-card__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="btn btn--primary auth-card__submit"
                        type="submit"
                        disabled=move || submitting.get()
                    >
                        {submit_label}
                    </button>
                </form>

                <button class="auth-card__toggle" on:click=move |_| mode.update(|m| *m = m.toggled())>
                    {toggle_label}
                </button>
            </div>
        </div>
    }
}
