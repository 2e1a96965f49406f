//! Sortable Column Header

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::table::SortColumn;

/// `<th>` that sorts both tables by `column` when clicked
#[component]
pub fn SortHeader(column: SortColumn, #[prop(into)] label: String, #[prop(optional)] buy_price: bool) -> impl IntoView {
    let store = use_app_store();

    let class = move || {
        let indicator = store.sort().read().indicator(column);
        let base = if buy_price { "sortable buy-price-column" } else { "sortable" };
        if indicator.is_empty() {
            base.to_string()
        } else {
            format!("{} {}", base, indicator)
        }
    };

    view! {
        <th class=class data-sort=column.attr() on:click=move |_| store.sort().update(|s| s.click(column))>
            {label}
        </th>
    }
}
