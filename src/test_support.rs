//! In-memory InventoryStore used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use async_trait::async_trait;

use crate::commands::InventoryStore;
use crate::error::{AppError, AppResult};
use crate::models::{Item, ItemDraft};

#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<Vec<Item>>,
    next_id: Cell<u32>,
    password: RefCell<String>,
    created: RefCell<Vec<ItemDraft>>,
    updated: RefCell<Vec<(u32, ItemDraft)>>,
    removed: RefCell<Vec<u32>>,
    rejected_models: RefCell<HashSet<String>>,
    failing_models: RefCell<HashSet<String>>,
    offline: Cell<bool>,
    requests: Cell<usize>,
}

impl MemoryStore {
    pub fn with_items(items: Vec<Item>) -> Self {
        let store = Self::default();
        store.next_id.set(items.iter().map(|i| i.id).max().unwrap_or(0));
        *store.items.borrow_mut() = items;
        store
    }

    pub fn set_password(&self, password: &str) {
        *self.password.borrow_mut() = password.to_string();
    }

    /// Answer creates of this model with a uniqueness error
    pub fn reject_model(&self, model: &str) {
        self.rejected_models.borrow_mut().insert(model.to_string());
    }

    /// Answer creates of this model with a transport failure
    pub fn fail_model(&self, model: &str) {
        self.failing_models.borrow_mut().insert(model.to_string());
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    pub fn created(&self) -> Vec<ItemDraft> {
        self.created.borrow().clone()
    }

    pub fn updated(&self) -> Vec<(u32, ItemDraft)> {
        self.updated.borrow().clone()
    }

    pub fn removed(&self) -> Vec<u32> {
        self.removed.borrow().clone()
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    fn begin(&self) -> AppResult<()> {
        self.requests.set(self.requests.get() + 1);
        if self.offline.get() {
            return Err(AppError::Network("offline".to_string()));
        }
        Ok(())
    }

    /// What a locked list response looks like
    fn redacted(&self) -> Vec<Item> {
        self.items
            .borrow()
            .iter()
            .cloned()
            .map(|mut item| {
                item.buy_price = None;
                item
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl InventoryStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Item>> {
        self.begin()?;
        Ok(self.redacted())
    }

    async fn create(&self, draft: &ItemDraft) -> AppResult<()> {
        self.begin()?;
        if self.failing_models.borrow().contains(&draft.model) {
            return Err(AppError::Network("connection reset".to_string()));
        }
        let exists = self.items.borrow().iter().any(|i| i.model == draft.model);
        if exists || self.rejected_models.borrow().contains(&draft.model) {
            return Err(AppError::Conflict("UNIQUE constraint failed: model".to_string()));
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.items.borrow_mut().push(Item {
            id,
            manufacturer: draft.manufacturer.clone(),
            model: draft.model.clone(),
            buy_price: draft.buy_price,
            sell_price: draft.sell_price,
            quantity: draft.quantity,
        });
        self.created.borrow_mut().push(draft.clone());
        Ok(())
    }

    async fn update(&self, id: u32, draft: &ItemDraft) -> AppResult<()> {
        self.begin()?;
        let mut items = self.items.borrow_mut();
        let Some(item) = items.iter_mut().find(|i| i.id == id) else {
            return Err(AppError::Http { status: 404, message: "Not found".to_string() });
        };
        item.manufacturer = draft.manufacturer.clone();
        item.model = draft.model.clone();
        item.buy_price = draft.buy_price;
        item.sell_price = draft.sell_price;
        item.quantity = draft.quantity;
        self.updated.borrow_mut().push((id, draft.clone()));
        Ok(())
    }

    async fn remove(&self, id: u32) -> AppResult<()> {
        self.begin()?;
        self.items.borrow_mut().retain(|i| i.id != id);
        self.removed.borrow_mut().push(id);
        Ok(())
    }

    async fn unlock(&self, password: &str) -> AppResult<Vec<Item>> {
        self.begin()?;
        if *self.password.borrow() != password {
            return Err(AppError::Unauthorized);
        }
        Ok(self.items.borrow().clone())
    }
}
