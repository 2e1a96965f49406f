//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Transitions are
//! plain methods on `AppState` so they can be exercised without a runtime.

use std::cell::RefCell;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::ModalState;
use crate::models::{Category, Item};
use crate::session::Session;
use crate::table::SortState;
use crate::view_model::{project, BuyPriceCache, InventoryView};

/// Ticket for one in-flight load. Only the most recently issued ticket may
/// commit, so a slow stale response never overwrites a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Last committed collection for the active category
    pub items: Vec<Item>,
    /// Last known buy price per item id
    pub buy_prices: BuyPriceCache,
    pub session: Session,
    pub search: String,
    pub sort: SortState,
    pub modal: ModalState,
    /// Most recently issued load ticket
    pub latest_load: u64,
}

impl AppState {
    pub fn new(category: Category, dark_mode: bool) -> Self {
        Self {
            items: Vec::new(),
            buy_prices: BuyPriceCache::default(),
            session: Session::new(category, dark_mode),
            search: String::new(),
            sort: SortState::default(),
            modal: ModalState::default(),
            latest_load: 0,
        }
    }

    pub fn begin_load(&mut self) -> LoadToken {
        self.latest_load += 1;
        LoadToken(self.latest_load)
    }

    /// Replace the collection if `token` is still the latest; returns whether it did
    pub fn commit_load(&mut self, token: LoadToken, items: Vec<Item>) -> bool {
        if token.0 != self.latest_load {
            log::debug!("[STORE] Dropping stale load #{} (latest #{})", token.0, self.latest_load);
            return false;
        }
        self.buy_prices.observe(&items);
        self.items = items;
        true
    }

    /// Swap the active category, dropping everything tied to the old one
    pub fn switch_category(&mut self, category: Category) {
        self.session.category = category;
        self.items.clear();
        self.buy_prices.clear();
        self.modal.close();
        // invalidate loads still in flight for the previous category
        self.latest_load += 1;
    }

    pub fn set_buy_prices_visible(&mut self, visible: bool) {
        self.session.buy_prices_visible = visible;
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Same projection the app memo builds from the store fields
    #[cfg(test)]
    pub fn view(&self, currency: &str) -> InventoryView {
        project(&self.items, &self.search, &self.sort, &self.buy_prices, currency)
    }
}

/// Synchronous access to the application state from async controller code
pub trait StateCell {
    fn with_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R;
}

impl StateCell for Store<AppState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut guard = self.write();
        f(&mut guard)
    }
}

impl StateCell for RefCell<AppState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Both tables, rebuilt only when items, search, sort or buy prices change
pub fn inventory_memo(store: AppStore, currency: String) -> Memo<InventoryView> {
    projection_memo(store, currency, || log::trace!("[VIEW] Rebuilding tables"))
}

fn projection_memo(
    store: AppStore,
    currency: String,
    on_rebuild: impl Fn() + Send + Sync + 'static,
) -> Memo<InventoryView> {
    // Field reads, so modal and session writes do not invalidate the projection
    Memo::new(move |_| {
        on_rebuild();
        project(
            &store.items().read(),
            &store.search().read(),
            &store.sort().read(),
            &store.buy_prices().read(),
            &currency,
        )
    })
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, buy: Option<f64>) -> Item {
        Item {
            id,
            manufacturer: "Acme".to_string(),
            model: format!("M{}", id),
            buy_price: buy,
            sell_price: Some(10.0),
            quantity: 1,
        }
    }

    #[test]
    fn test_projection_ignores_modal_edits() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let store = Store::new(AppState::new(Category::new("lcd"), false));
        let rebuilds = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&rebuilds);
        let memo = projection_memo(store, "DT".to_string(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(memo.get_untracked().in_stock.is_empty());
        let after_first = rebuilds.load(Ordering::SeqCst);

        store.modal().update(|m| {
            m.open_add();
            m.fields.model = "X1".to_string();
        });
        memo.get_untracked();
        assert_eq!(rebuilds.load(Ordering::SeqCst), after_first);

        store.items().update(|items| items.push(item(1, Some(4.0))));
        assert_eq!(memo.get_untracked().in_stock.len(), 1);
        assert!(rebuilds.load(Ordering::SeqCst) > after_first);
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut state = AppState::new(Category::new("lcd"), false);
        let slow = state.begin_load();
        let fast = state.begin_load();
        assert!(state.commit_load(fast, vec![item(1, None), item(2, None)]));
        assert!(!state.commit_load(slow, vec![item(9, None)]));
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_switch_category_invalidates_in_flight_load() {
        let mut state = AppState::new(Category::new("lcd"), false);
        let token = state.begin_load();
        state.commit_load(token, vec![item(1, Some(5.0))]);
        let pending = state.begin_load();
        state.modal.open_add();

        state.switch_category(Category::new("battery"));
        assert!(state.items.is_empty());
        assert_eq!(state.buy_prices.get(1), None);
        assert!(!state.modal.is_open());
        assert!(!state.commit_load(pending, vec![item(1, Some(5.0))]));
    }

    #[test]
    fn test_commit_records_buy_prices() {
        let mut state = AppState::new(Category::new("lcd"), false);
        let token = state.begin_load();
        state.commit_load(token, vec![item(3, Some(7.5))]);
        let token = state.begin_load();
        state.commit_load(token, vec![item(3, None)]);
        assert_eq!(state.view("DT").in_stock[0].buy_price, "7.50 DT");
    }
}
