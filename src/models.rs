//! Frontend Models
//!
//! Data structures matching the inventory REST resources.

use serde::{Deserialize, Deserializer, Serialize};

/// Stocked item as returned by `GET /api/{category}s`.
///
/// `buy_price` is only present in unlocked responses; the server may
/// also send `null` for either price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub manufacturer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<f64>,
    #[serde(default)]
    pub sell_price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: u32,
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Item {
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    /// Full-replacement body for this item with a new quantity.
    ///
    /// `known_buy_price` fills in the buy price when the snapshot came from
    /// a locked response, so the stored value is not overwritten.
    pub fn to_draft(&self, quantity: u32, known_buy_price: Option<f64>) -> ItemDraft {
        ItemDraft {
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            buy_price: self.buy_price.or(known_buy_price),
            sell_price: self.sell_price,
            quantity,
        }
    }
}

/// Request body for create (POST) and update (PUT)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub manufacturer: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<f64>,
    pub quantity: u32,
}

/// Named item collection, each backed by its own REST resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Resource path, e.g. `lcd` -> `/api/lcds`
    pub fn endpoint(&self) -> String {
        format!("/api/{}s", self.0)
    }

    /// Name with its first letter upper-cased, used in modal copy
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn export_file_name(&self) -> String {
        format!("{}_out_of_stock.csv", self.0)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
