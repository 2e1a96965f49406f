//! Inventory Commands
//!
//! REST bindings for one category's item resource.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{Category, Item, ItemDraft};

/// Remote item collection for the active category.
///
/// Futures are `?Send` because the browser fetch API is single-threaded.
#[async_trait(?Send)]
pub trait InventoryStore {
    /// `GET /api/{category}s`
    async fn list(&self) -> AppResult<Vec<Item>>;

    /// `POST /api/{category}s`
    async fn create(&self, draft: &ItemDraft) -> AppResult<()>;

    /// `PUT /api/{category}s/{id}`
    async fn update(&self, id: u32, draft: &ItemDraft) -> AppResult<()>;

    /// `DELETE /api/{category}s/{id}`
    async fn remove(&self, id: u32) -> AppResult<()>;

    /// `POST /api/{category}s/secure`, returns the collection with buy prices
    async fn unlock(&self, password: &str) -> AppResult<Vec<Item>>;
}

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct UnlockArgs<'a> {
    password: &'a str,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

// ========================
// HTTP Implementation
// ========================

#[derive(Clone)]
pub struct HttpInventory {
    client: Client,
    base_url: String,
}

impl HttpInventory {
    pub fn new(origin: &str, category: &Category) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("{}{}", origin.trim_end_matches('/'), category.endpoint()),
        }
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Turn a non-success response into an error, reading the optional `{error}` body
async fn check_status(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body: ErrorBody = response.json().await.unwrap_or_default();
    Err(classify_failure(status, body.error))
}

fn classify_failure(status: StatusCode, error: Option<String>) -> AppError {
    match error {
        Some(msg) if msg.to_lowercase().contains("unique") => AppError::Conflict(msg),
        Some(msg) => AppError::Http { status: status.as_u16(), message: msg },
        None => AppError::Http { status: status.as_u16(), message: String::new() },
    }
}

#[async_trait(?Send)]
impl InventoryStore for HttpInventory {
    async fn list(&self) -> AppResult<Vec<Item>> {
        let response = self.client.get(&self.base_url).send().await?;
        let items = check_status(response).await?.json::<Vec<Item>>().await?;
        Ok(items)
    }

    async fn create(&self, draft: &ItemDraft) -> AppResult<()> {
        let response = self.client.post(&self.base_url).json(draft).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn update(&self, id: u32, draft: &ItemDraft) -> AppResult<()> {
        let response = self.client.put(self.item_url(id)).json(draft).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn remove(&self, id: u32) -> AppResult<()> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn unlock(&self, password: &str) -> AppResult<Vec<Item>> {
        let url = format!("{}/secure", self.base_url);
        let response = self.client.post(url).json(&UnlockArgs { password }).send().await?;
        if !response.status().is_success() {
            log::warn!("[API] Unlock refused with status {}", response.status());
            return Err(AppError::Unauthorized);
        }
        let items = response.json::<Vec<Item>>().await?;
        Ok(items)
    }
}
