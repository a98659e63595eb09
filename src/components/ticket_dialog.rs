//! Modal dialog for creating a new ticket.

use leptos::prelude::*;

use crate::state::tickets::{Category, NewTicketDraft, Priority};

/// Creation dialog bound to the shared draft signal.
///
/// Submit is delegated to the caller, which closes the dialog only on
/// success; a failed create keeps the dialog (and the draft) on screen
/// with the error shown inline.
#[component]
pub fn CreateTicketDialog(
    draft: RwSignal<NewTicketDraft>,
    error: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Ticket"</h2>

                {move || error.get().map(|msg| view! { <p class="alert alert--error">{msg}</p> })}

                <label class="dialog__label">
                    "Subject"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().title
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </label>

                <div class="dialog__row">
                    <label class="dialog__label">
                        "Priority"
                        <select
                            class="dialog__input"
                            prop:value=move || draft.get().priority.label().to_owned()
                            on:change=move |ev| {
                                if let Some(p) = Priority::from_label(&event_target_value(&ev)) {
                                    draft.update(|d| d.priority = p);
                                }
                            }
                        >
                            {Priority::ALL
                                .into_iter()
                                .map(|p| view! { <option value=p.label()>{p.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Category"
                        <select
                            class="dialog__input"
                            prop:value=move || draft.get().category.label().to_owned()
                            on:change=move |ev| {
                                if let Some(c) = Category::from_label(&event_target_value(&ev)) {
                                    draft.update(|d| d.category = c);
                                }
                            }
                        >
                            {Category::ALL
                                .into_iter()
                                .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        rows="4"
                        prop:value=move || draft.get().description
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
