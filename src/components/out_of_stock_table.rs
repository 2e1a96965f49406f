//! Out-of-Stock Table Component
//!
//! Items with quantity 0 from the unfiltered collection, plus CSV export.

use leptos::prelude::*;

use crate::browser;
use crate::components::SortHeader;
use crate::context::use_app_context;
use crate::error::AppError;
use crate::export::out_of_stock_csv;
use crate::table::SortColumn;
use crate::view_model::InventoryView;

#[component]
pub fn OutOfStockTable(inventory: Memo<InventoryView>) -> impl IntoView {
    let ctx = use_app_context();

    let export = move |_| {
        let (visible, category) = {
            let state = ctx.store.read_untracked();
            (state.session.buy_prices_visible, state.session.category.clone())
        };
        let rows = inventory.get_untracked().out_of_stock;
        let result = out_of_stock_csv(&rows, visible).and_then(|csv| {
            browser::download_text(&category.export_file_name(), &csv, "text/csv").map_err(AppError::Validation)
        });
        if ctx.report("EXPORT", result).is_some() {
            log::info!("[EXPORT] Exported {} out-of-stock rows", rows.len());
        }
    };

    view! {
        <section class="out-of-stock">
            <div class="section-header">
                <h2>"Out of Stock"</h2>
                <button id="export-outofstock-btn" on:click=export>"⬇️ Export CSV"</button>
            </div>
            <table id="out-of-stock-table" class="inventory-table">
                <thead>
                    <tr>
                        <SortHeader column=SortColumn::Id label="ID" />
                        <SortHeader column=SortColumn::Manufacturer label="Manufacturer" />
                        <SortHeader column=SortColumn::Model label="Model" />
                        <SortHeader column=SortColumn::BuyPrice label="Buy Price" buy_price=true />
                        <SortHeader column=SortColumn::SellPrice label="Sell Price" />
                        <SortHeader column=SortColumn::Quantity label="Qty" />
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || inventory.get().out_of_stock
                        key=|row| row.clone()
                        children=move |row| view! {
                            <tr>
                                <td>{row.id}</td>
                                <td>{row.manufacturer}</td>
                                <td>{row.model}</td>
                                <td class="buy-price-column">{row.buy_price}</td>
                                <td class="sell-price-column">{row.sell_price}</td>
                                <td>{row.quantity}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
