//! Item Form State
//!
//! Add/edit dialog state and submission validation.

use crate::error::{AppError, AppResult};
use crate::models::{Category, Item, ItemDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    Closed,
    Add,
    Edit(u32),
}

/// Raw input values, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub manufacturer: String,
    pub model: String,
    pub buy_price: String,
    pub sell_price: String,
    pub quantity: String,
}

impl FormFields {
    /// Pre-populate from an item; `known_buy_price` covers locked snapshots
    pub fn from_item(item: &Item, known_buy_price: Option<f64>) -> Self {
        Self {
            manufacturer: item.manufacturer.clone(),
            model: item.model.clone(),
            buy_price: item.buy_price.or(known_buy_price).map(|v| v.to_string()).unwrap_or_default(),
            sell_price: item.sell_price.map(|v| v.to_string()).unwrap_or_default(),
            quantity: item.quantity.to_string(),
        }
    }

    /// Coerce the inputs and enforce `sell_price > buy_price`.
    ///
    /// Blank numeric inputs count as 0, so a hidden buy price submits as 0.
    pub fn to_draft(&self) -> AppResult<ItemDraft> {
        let buy_price = parse_number(&self.buy_price, "Buy price")?;
        let sell_price = parse_number(&self.sell_price, "Sell price")?;
        let quantity = parse_quantity(&self.quantity)?;
        if sell_price <= buy_price {
            return Err(AppError::Validation("Sell price must be greater than buy price.".to_string()));
        }
        Ok(ItemDraft {
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            buy_price: Some(buy_price),
            sell_price: Some(sell_price),
            quantity,
        })
    }
}

fn parse_number(raw: &str, label: &str) -> AppResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| AppError::Validation(format!("{} must be a non-negative number.", label)))
}

fn parse_quantity(raw: &str) -> AppResult<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>()
        .map_err(|_| AppError::Validation("Quantity must be a whole number.".to_string()))
}

/// Dialog state owned by the app store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub mode: ModalMode,
    pub fields: FormFields,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.mode != ModalMode::Closed
    }

    pub fn open_add(&mut self) {
        self.mode = ModalMode::Add;
        self.fields = FormFields::default();
    }

    pub fn open_edit(&mut self, item: &Item, known_buy_price: Option<f64>) {
        self.mode = ModalMode::Edit(item.id);
        self.fields = FormFields::from_item(item, known_buy_price);
    }

    pub fn close(&mut self) {
        self.mode = ModalMode::Closed;
    }

    pub fn title(&self, category: &Category) -> String {
        match self.mode {
            ModalMode::Edit(_) => format!("Edit {}", category.display_name()),
            _ => format!("Add {}", category.display_name()),
        }
    }

    pub fn submit_label(&self, category: &Category) -> String {
        match self.mode {
            ModalMode::Edit(_) => "Save".to_string(),
            _ => format!("Add {}", category.display_name()),
        }
    }
}
