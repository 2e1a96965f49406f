//! Item Modal Component
//!
//! Add/edit dialog. Closes on the × control or a click on the backdrop.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::form::FormFields;
use crate::store::{AppStateStoreFields, AppStore};

#[component]
pub fn ItemModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let is_open = move || store.modal().read().is_open();
    let title = move || {
        let category = store.session().read().category.clone();
        store.modal().read().title(&category)
    };
    let submit_label = move || {
        let category = store.session().read().category.clone();
        store.modal().read().submit_label(&category)
    };
    let buy_price_visible = move || store.session().read().buy_prices_visible;

    let close = move || store.modal().update(|m| m.close());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let api = ctx.api();
            ctx.report("FORM", actions::submit_form(&api, &ctx.store).await);
        });
    };

    view! {
        <div
            id="lcd-modal"
            class="modal"
            style:display=move || if is_open() { "block" } else { "none" }
            on:click=move |ev| {
                if ev.target() == ev.current_target() {
                    close();
                }
            }
        >
            <div class="modal-content">
                <span id="modal-close" class="close" on:click=move |_| close()>"×"</span>
                <h2 id="modal-title">{title}</h2>
                <form id="lcd-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="manufacturer-input">"Manufacturer"</label>
                        {form_input(store, "manufacturer-input", "text", None, |f| f.manufacturer.clone(), |f, v| f.manufacturer = v)}
                    </div>
                    <div class="form-group">
                        <label for="model-input">"Model"</label>
                        {form_input(store, "model-input", "text", None, |f| f.model.clone(), |f, v| f.model = v)}
                    </div>
                    <div class="form-group" style:display=move || if buy_price_visible() { "" } else { "none" }>
                        <label for="buy-price-input">"Buy Price"</label>
                        {form_input(store, "buy-price-input", "number", Some("0.01"), |f| f.buy_price.clone(), |f, v| f.buy_price = v)}
                    </div>
                    <div class="form-group">
                        <label for="sell-price-input">"Sell Price"</label>
                        {form_input(store, "sell-price-input", "number", Some("0.01"), |f| f.sell_price.clone(), |f, v| f.sell_price = v)}
                    </div>
                    <div class="form-group">
                        <label for="qty-input">"Quantity"</label>
                        {form_input(store, "qty-input", "number", Some("1"), |f| f.quantity.clone(), |f, v| f.quantity = v)}
                    </div>
                    <button id="form-submit-btn" type="submit">{submit_label}</button>
                </form>
            </div>
        </div>
    }
}

/// Input bound to one `FormFields` field
fn form_input(
    store: AppStore,
    id: &'static str,
    input_type: &'static str,
    step: Option<&'static str>,
    get: fn(&FormFields) -> String,
    set: fn(&mut FormFields, String),
) -> impl IntoView {
    view! {
        <input
            id=id
            type=input_type
            step=step
            prop:value=move || get(&store.modal().read().fields)
            on:input=move |ev| {
                let value = event_target_value(&ev);
                store.modal().update(|m| set(&mut m.fields, value));
            }
        />
    }
}
