//! Inventory Table Component
//!
//! Main table: search-filtered, sorted rows with quantity and edit actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{DeleteConfirmButton, SortHeader};
use crate::context::use_app_context;
use crate::table::SortColumn;
use crate::view_model::{InventoryView, TableRow};

#[component]
pub fn InventoryTable(inventory: Memo<InventoryView>) -> impl IntoView {
    view! {
        <table id="lcd-table" class="inventory-table">
            <thead>
                <tr>
                    <SortHeader column=SortColumn::Id label="ID" />
                    <SortHeader column=SortColumn::Manufacturer label="Manufacturer" />
                    <SortHeader column=SortColumn::Model label="Model" />
                    <SortHeader column=SortColumn::BuyPrice label="Buy Price" buy_price=true />
                    <SortHeader column=SortColumn::SellPrice label="Sell Price" />
                    <SortHeader column=SortColumn::Quantity label="Qty" />
                    <th class="actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || inventory.get().in_stock
                    key=|row| row.clone()
                    children=move |row| view! { <InventoryRow row=row /> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn InventoryRow(row: TableRow) -> impl IntoView {
    let ctx = use_app_context();
    let id = row.id;
    let subject = row.model.clone();

    let increment = move |_| {
        spawn_local(async move {
            let api = ctx.api();
            ctx.report("INCREMENT", actions::increment(&api, &ctx.store, id).await);
        });
    };

    let decrement = move |_| {
        spawn_local(async move {
            let api = ctx.api();
            ctx.report("DECREMENT", actions::decrement(&api, &ctx.store, id).await);
        });
    };

    let edit = move |_| {
        ctx.report("EDIT", actions::open_edit(&ctx.store, id));
    };

    let delete = move |_: ()| {
        spawn_local(async move {
            let api = ctx.api();
            ctx.report("DELETE", actions::delete_item(&api, &ctx.store, id).await);
        });
    };

    view! {
        <tr>
            <td>{row.id}</td>
            <td>{row.manufacturer}</td>
            <td>{row.model}</td>
            <td class="buy-price-column">{row.buy_price}</td>
            <td class="sell-price-column">{row.sell_price}</td>
            <td>{row.quantity}</td>
            <td class="actions" style="text-align: center;">
                <button title="Increment" on:click=increment>"➕"</button>
                <button title="Decrement" on:click=decrement>"➖"</button>
                <button title="Edit" on:click=edit>"✏️"</button>
                <DeleteConfirmButton subject=subject on_confirm=delete />
            </td>
        </tr>
    }
}
