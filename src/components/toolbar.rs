//! Toolbar Component
//!
//! Category picker, search box and the page-level actions.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::browser;
use crate::context::use_app_context;
use crate::error::AppError;
use crate::models::Category;
use crate::store::AppStateStoreFields;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let config = ctx.config();
    let dark_mode_key = config.dark_mode_key.clone();
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let category_options = config
        .categories()
        .into_iter()
        .map(|category| {
            let value = category.name().to_string();
            view! { <option value=value>{category.display_name()}</option> }
        })
        .collect_view();

    let on_category_change = move |ev: web_sys::Event| {
        let category = Category::new(event_target_value(&ev));
        spawn_local(async move {
            let api = ctx.api_for(&category);
            ctx.report("CATEGORY", actions::switch_category(&api, &ctx.store, category).await);
        });
    };

    let toggle_buy_prices = move |_| {
        if store.session().read_untracked().buy_prices_visible {
            actions::lock(&ctx.store);
            return;
        }
        let Some(password) = browser::prompt("Enter password to view buy prices:") else {
            return;
        };
        spawn_local(async move {
            let api = ctx.api();
            ctx.report("UNLOCK", actions::unlock(&api, &ctx.store, &password).await);
        });
    };

    let toggle_dark_mode = move |_| {
        let mut enabled = false;
        store.session().update(|s| enabled = s.toggle_dark_mode());
        browser::store_dark_mode(&dark_mode_key, enabled);
    };

    let open_import = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_selected = move |_| {
        let Some(input) = file_input.get() else {
            return;
        };
        spawn_local(async move {
            let text = match browser::read_selected_file(&input).await {
                Ok(Some(text)) => text,
                Ok(None) => return,
                Err(e) => {
                    ctx.report::<()>("IMPORT", Err(AppError::Validation(e)));
                    input.set_value("");
                    return;
                }
            };
            let api = ctx.api();
            let currency = ctx.currency();
            let result = actions::import_csv(&api, &ctx.store, &text, &currency).await;
            if let Some(summary) = ctx.report("IMPORT", result) {
                log::info!(
                    "[IMPORT] added={} duplicates={} errors={}",
                    summary.added,
                    summary.duplicates(),
                    summary.errors
                );
                browser::alert(&summary.message());
            }
            input.set_value("");
        });
    };

    view! {
        <div class="toolbar">
            <select
                id="category-select"
                prop:value=move || store.session().read().category.name().to_string()
                on:change=on_category_change
            >
                {category_options}
            </select>
            <input
                id="search-input"
                type="text"
                placeholder="Search manufacturer or model..."
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />
            <button id="add-btn" on:click=move |_| store.modal().update(|m| m.open_add())>
                {move || format!("➕ Add {}", store.session().read().category.display_name())}
            </button>
            <button id="toggle-buy-price-btn" on:click=toggle_buy_prices>
                {move || store.session().read().buy_price_toggle_label()}
            </button>
            <button id="dark-mode-btn" on:click=toggle_dark_mode>
                {move || store.session().read().dark_mode_label()}
            </button>
            <button id="import-csv-btn" on:click=open_import>"📥 Import CSV"</button>
            <input
                node_ref=file_input
                id="csv-file-input"
                type="file"
                accept=".csv"
                style="display: none;"
                on:change=on_file_selected
            />
        </div>
    }
}
