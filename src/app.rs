//! Inventory Frontend App
//!
//! Root component: state, context, initial load and page layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::browser;
use crate::components::{InventoryTable, ItemModal, OutOfStockTable, Toolbar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::session::{DARK_MODE_CLASS, SHOW_BUY_PRICE_CLASS};
use crate::store::{inventory_memo, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let dark_mode = browser::load_dark_mode(&config.dark_mode_key);
    let store = Store::new(AppState::new(config.initial_category(), dark_mode));
    let currency = config.currency.clone();

    let ctx = AppContext::new(store, config);
    provide_context(store);
    provide_context(ctx);

    // Body classes follow the session flags
    Effect::new(move |_| {
        browser::set_body_class(SHOW_BUY_PRICE_CLASS, store.session().read().buy_prices_visible);
    });
    Effect::new(move |_| {
        browser::set_body_class(DARK_MODE_CLASS, store.session().read().dark_mode);
    });

    let inventory = inventory_memo(store, currency);

    spawn_local(async move {
        let api = ctx.api();
        ctx.report("LOAD", actions::load(&api, &ctx.store).await);
    });

    view! {
        <div class="container">
            <h1>{move || format!("{} Inventory", store.session().read().category.display_name())}</h1>
            <Toolbar />
            <InventoryTable inventory=inventory />
            <OutOfStockTable inventory=inventory />
            <ItemModal />
        </div>
    }
}
