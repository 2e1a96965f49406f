//! Table Utilities
//!
//! Search filtering and column sorting for the item tables.

use std::cmp::Ordering;

use crate::models::Item;

/// Keep items whose manufacturer, model, or "manufacturer model" contains
/// the query, case-insensitively. A blank query keeps everything.
pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| matches_query(item, &needle))
        .cloned()
        .collect()
}

fn matches_query(item: &Item, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let manufacturer = item.manufacturer.to_lowercase();
    let model = item.model.to_lowercase();
    model.contains(needle)
        || manufacturer.contains(needle)
        || format!("{} {}", manufacturer, model).contains(needle)
}

/// Sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Manufacturer,
    Model,
    BuyPrice,
    SellPrice,
    Quantity,
}

impl SortColumn {
    /// Value of the header's `data-sort` attribute
    pub fn attr(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Manufacturer => "manufacturer",
            Self::Model => "model",
            Self::BuyPrice => "buy_price",
            Self::SellPrice => "sell_price",
            Self::Quantity => "qty",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Manufacturer | Self::Model)
    }

    /// Numeric value, missing prices count as 0
    fn number(&self, item: &Item) -> f64 {
        match self {
            Self::Id => f64::from(item.id),
            Self::BuyPrice => item.buy_price.unwrap_or(0.0),
            Self::SellPrice => item.sell_price.unwrap_or(0.0),
            Self::Quantity => f64::from(item.quantity),
            Self::Manufacturer | Self::Model => 0.0,
        }
    }

    fn text(&self, item: &Item) -> String {
        match self {
            Self::Manufacturer => item.manufacturer.to_lowercase(),
            Self::Model => item.model.to_lowercase(),
            _ => String::new(),
        }
    }

    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        if self.is_numeric() {
            self.number(a).partial_cmp(&self.number(b)).unwrap_or(Ordering::Equal)
        } else {
            self.text(a).cmp(&self.text(b))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header indicator class
    pub fn class(&self) -> &'static str {
        match self {
            Self::Ascending => "sorted-asc",
            Self::Descending => "sorted-desc",
        }
    }
}

/// Stable sort by one column. Ties keep their original relative order.
pub fn sort_items(items: &[Item], column: SortColumn, direction: SortDirection) -> Vec<Item> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ord = column.compare(a, b);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    sorted
}

/// Active sort selection; no column means server order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    /// Same column flips direction, a new column starts ascending
    pub fn click(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.direction = self.direction.toggled();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        match self.column {
            Some(column) => sort_items(items, column, self.direction),
            None => items.to_vec(),
        }
    }

    /// Indicator class for a header, empty when the column is not active
    pub fn indicator(&self, column: SortColumn) -> &'static str {
        if self.column == Some(column) {
            self.direction.class()
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, manufacturer: &str, model: &str, sell: Option<f64>, quantity: u32) -> Item {
        Item {
            id,
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
            buy_price: None,
            sell_price: sell,
            quantity,
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item(1, "Samsung", "A50", Some(120.0), 3),
            make_item(2, "apple", "iPhone X", None, 0),
            make_item(3, "Huawei", "P30", Some(95.5), 7),
            make_item(4, "Samsung", "a10", Some(80.0), 0),
        ]
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_filter_empty_query_keeps_all() {
        assert_eq!(filter_items(&sample(), "   ").len(), 4);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        assert_eq!(ids(&filter_items(&sample(), "SAMSUNG")), vec![1, 4]);
        assert_eq!(ids(&filter_items(&sample(), "iphone")), vec![2]);
    }

    #[test]
    fn test_filter_spans_manufacturer_and_model() {
        assert_eq!(ids(&filter_items(&sample(), "samsung a5")), vec![1]);
        assert_eq!(ids(&filter_items(&sample(), "apple iphone")), vec![2]);
    }

    #[test]
    fn test_filter_result_is_subset_matching_query() {
        let items = sample();
        for query in ["a", "sam", "p3", "x", "zzz"] {
            let result = filter_items(&items, query);
            for item in &result {
                assert!(items.contains(item));
                let combined = format!("{} {}", item.manufacturer, item.model).to_lowercase();
                assert!(combined.contains(query));
            }
        }
    }

    #[test]
    fn test_sort_numeric_treats_missing_as_zero() {
        let sorted = sort_items(&sample(), SortColumn::SellPrice, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec![2, 4, 3, 1]);
        let sorted = sort_items(&sample(), SortColumn::SellPrice, SortDirection::Descending);
        assert_eq!(ids(&sorted), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_sort_text_is_case_insensitive() {
        let sorted = sort_items(&sample(), SortColumn::Manufacturer, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec![2, 3, 1, 4]);
        let sorted = sort_items(&sample(), SortColumn::Model, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_sort_ties_keep_original_order() {
        let sorted = sort_items(&sample(), SortColumn::Quantity, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec![2, 4, 1, 3]);
        let sorted = sort_items(&sample(), SortColumn::Quantity, SortDirection::Descending);
        assert_eq!(ids(&sorted), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_sort_is_ordered_permutation() {
        let items = sample();
        for column in [SortColumn::Id, SortColumn::SellPrice, SortColumn::Quantity] {
            let sorted = sort_items(&items, column, SortDirection::Descending);
            assert_eq!(sorted.len(), items.len());
            assert!(items.iter().all(|i| sorted.contains(i)));
            assert!(sorted.windows(2).all(|w| column.number(&w[0]) >= column.number(&w[1])));
        }
    }

    #[test]
    fn test_click_toggles_and_resets() {
        let mut state = SortState::default();
        state.click(SortColumn::Quantity);
        assert_eq!(state.direction, SortDirection::Ascending);
        let ascending = state.apply(&sample());

        state.click(SortColumn::Quantity);
        assert_eq!(state.direction, SortDirection::Descending);
        assert_eq!(state.indicator(SortColumn::Quantity), "sorted-desc");

        state.click(SortColumn::Quantity);
        assert_eq!(state.apply(&sample()), ascending);

        state.click(SortColumn::Model);
        assert_eq!(state.column, Some(SortColumn::Model));
        assert_eq!(state.direction, SortDirection::Ascending);
        assert_eq!(state.indicator(SortColumn::Quantity), "");
    }
}
