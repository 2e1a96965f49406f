//! Delete Confirm Button Component

use leptos::prelude::*;

/// Two-step delete: the first click arms the button, the second confirms.
///
/// `subject` names the row in the prompt, e.g. "Delete X1?".
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] subject: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let prompt = format!("Delete {}?", subject);

    view! {
        <Show
            when=move || armed.get()
            fallback=move || view! {
                <button class="delete-btn" title="Delete" on:click=move |_| set_armed.set(true)>
                    "🗑️"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_armed.set(false)>"✗"</button>
            </span>
        </Show>
    }
}
