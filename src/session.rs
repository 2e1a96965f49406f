//! Session Preferences
//!
//! Active category, the buy-price display gate and dark mode.
//! The buy-price gate only controls what is shown; it is not access control.

use crate::models::Category;

/// Body class that reveals the buy-price column
pub const SHOW_BUY_PRICE_CLASS: &str = "show-buy-price";
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub category: Category,
    pub buy_prices_visible: bool,
    pub dark_mode: bool,
}

impl Session {
    pub fn new(category: Category, dark_mode: bool) -> Self {
        Self {
            category,
            buy_prices_visible: false,
            dark_mode,
        }
    }

    pub fn buy_price_toggle_label(&self) -> &'static str {
        if self.buy_prices_visible {
            "🙈 Hide Buy Prices"
        } else {
            "👁️ Show Buy Prices"
        }
    }

    pub fn dark_mode_label(&self) -> &'static str {
        if self.dark_mode {
            "☀️ Light Mode"
        } else {
            "🌙 Dark Mode"
        }
    }

    /// Flip dark mode and return the new value
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}
