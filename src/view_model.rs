//! Table View Model
//!
//! Projects the loaded collection into display rows for the in-stock and
//! out-of-stock tables. The export path reads the same rows.

use std::collections::{HashMap, HashSet};

use crate::models::Item;
use crate::table::{filter_items, SortState};

/// Last known buy price per item id.
///
/// Locked list responses omit `buy_price`; this table keeps the column
/// populated after a lock. Entries for ids missing from a committed
/// collection are pruned and the whole table is cleared on category switch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuyPriceCache {
    prices: HashMap<u32, f64>,
}

impl BuyPriceCache {
    /// Record buy prices carried by a freshly committed collection
    pub fn observe(&mut self, items: &[Item]) {
        let live: HashSet<u32> = items.iter().map(|i| i.id).collect();
        self.prices.retain(|id, _| live.contains(id));
        for item in items {
            if let Some(price) = item.buy_price {
                self.prices.insert(item.id, price);
            }
        }
    }

    pub fn get(&self, id: u32) -> Option<f64> {
        self.prices.get(&id).copied()
    }

    /// Explicit buy price when present, otherwise the last known value
    pub fn resolve(&self, item: &Item) -> Option<f64> {
        item.buy_price.or_else(|| self.get(item.id))
    }

    pub fn clear(&mut self) {
        self.prices.clear();
    }
}

/// Two decimals with the currency suffix, or a dash when there is no value
pub fn format_price(value: Option<f64>, currency: &str) -> String {
    match value {
        Some(v) => format!("{:.2} {}", v, currency),
        None => "-".to_string(),
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRow {
    pub id: u32,
    pub manufacturer: String,
    pub model: String,
    pub buy_price: String,
    pub sell_price: String,
    pub quantity: u32,
}

impl TableRow {
    pub fn from_item(item: &Item, cache: &BuyPriceCache, currency: &str) -> Self {
        Self {
            id: item.id,
            manufacturer: item.manufacturer.clone(),
            model: item.model.clone(),
            buy_price: format_price(cache.resolve(item), currency),
            sell_price: format_price(item.sell_price, currency),
            quantity: item.quantity,
        }
    }
}

/// Both tables, ready to render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryView {
    /// Search-filtered and sorted rows
    pub in_stock: Vec<TableRow>,
    /// Rows with quantity 0 from the unfiltered collection, sorted
    pub out_of_stock: Vec<TableRow>,
}

/// Build both tables from the full collection.
///
/// The search query narrows the main table only; the sort applies to both.
pub fn project(
    items: &[Item],
    query: &str,
    sort: &SortState,
    cache: &BuyPriceCache,
    currency: &str,
) -> InventoryView {
    let sorted = sort.apply(items);
    let in_stock = filter_items(&sorted, query)
        .iter()
        .map(|item| TableRow::from_item(item, cache, currency))
        .collect();
    let out_of_stock = sorted
        .iter()
        .filter(|item| item.is_out_of_stock())
        .map(|item| TableRow::from_item(item, cache, currency))
        .collect();
    InventoryView { in_stock, out_of_stock }
}
