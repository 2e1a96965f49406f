//! Controller Actions
//!
//! Every user-triggered operation: call the remote store, then reload.
//! Each returns `AppResult` so the caller can surface failures uniformly.

use crate::commands::InventoryStore;
use crate::error::{AppError, AppResult};
use crate::form::ModalMode;
use crate::import::{plan_import, run_import, ImportSummary};
use crate::models::Category;
use crate::store::StateCell;

/// Fetch the active collection; returns false when a newer load superseded it
pub async fn load<S, C>(store: &S, state: &C) -> AppResult<bool>
where
    S: InventoryStore + ?Sized,
    C: StateCell,
{
    let token = state.with_state(|s| s.begin_load());
    let items = store.list().await?;
    let count = items.len();
    let committed = state.with_state(|s| s.commit_load(token, items));
    if committed {
        log::info!("[LOAD] Loaded {} items", count);
    }
    Ok(committed)
}

/// Validate the open form and create or update accordingly.
///
/// Validation failures return before any request is sent and leave the
/// dialog open, as do server rejections.
pub async fn submit_form<S, C>(store: &S, state: &C) -> AppResult<()>
where
    S: InventoryStore + ?Sized,
    C: StateCell,
{
    let (mode, fields) = state.with_state(|s| (s.modal.mode, s.modal.fields.clone()));
    let draft = fields.to_draft()?;
    match mode {
        ModalMode::Add => {
            store.create(&draft).await?;
            log::info!("[FORM] Created {}", draft.model);
        }
        ModalMode::Edit(id) => {
            store.update(id, &draft).await?;
            log::info!("[FORM] Updated #{}", id);
        }
        ModalMode::Closed => {
            return Err(AppError::Validation("No form is open.".to_string()));
        }
    }
    state.with_state(|s| s.modal.close());
    load(store, state).await?;
    Ok(())
}

/// Open the edit dialog for a loaded item
pub fn open_edit<C: StateCell>(state: &C, id: u32) -> AppResult<()> {
    state.with_state(|s| {
        let item = s.item(id).cloned().ok_or_else(|| missing_item(id))?;
        let known = s.buy_prices.get(id);
        s.modal.open_edit(&item, known);
        Ok(())
    })
}

fn missing_item(id: u32) -> AppError {
    AppError::Validation(format!("Item #{} is no longer loaded.", id))
}

/// Add `delta` to an item's quantity (floored at zero) with a full replacement
/// built from the in-memory snapshot
pub async fn adjust_quantity<S, C>(store: &S, state: &C, id: u32, delta: i64) -> AppResult<()>
where
    S: InventoryStore + ?Sized,
    C: StateCell,
{
    let draft = state.with_state(|s| {
        let item = s.item(id).ok_or_else(|| missing_item(id))?;
        let quantity = (i64::from(item.quantity) + delta).clamp(0, i64::from(u32::MAX)) as u32;
        Ok::<_, AppError>(item.to_draft(quantity, s.buy_prices.get(id)))
    })?;
    store.update(id, &draft).await?;
    load(store, state).await?;
    Ok(())
}

pub async fn increment<S, C>(store: &S, state: &C, id: u32) -> AppResult<()>
where
    S: InventoryStore + ?Sized,
    C: StateCell,
{
    adjust_quantity(store, state, id, 1).await
}

pub async fn decrement<S, C>(store: &S, state: &C, id: u32) -> AppResult<()>
where
    S: InventoryStore + ?Sized,
    C: StateCell,
{
    adjust_quantity(store, state, id, -1).await
}

/// Delete an item; confirmation happens in the UI before this is called
pub async fn delete_item<S, C>(store: &S, state: &C, id: u32) -> AppResult<()>
where
    S: InventoryStore + ?Sized,
    C: StateCell,
{
    store.remove(id).await?;
    log::info!("[DELETE] Removed #{}", id);
    load(store, state).await?;
    Ok(())
}

/// Reveal buy prices. On any failure the gate stays closed.
pub async fn unlock<S, C>(store: &S, state: &C, password: &str) -> AppResult<()>
where
    S: InventoryStore + ?Sized,
    C: StateCell,
{
    let items = store.unlock(password).await?;
    // Ticket is taken once the collection is in hand so a refused unlock
    // never invalidates a load already in flight
    state.with_state(|s| {
        let token = s.begin_load();
        if s.commit_load(token, items) {
            s.set_buy_prices_visible(true);
        }
    });
    log::info!("[UNLOCK] Buy prices visible");
    Ok(())
}

/// Hide buy prices again; no confirmation needed
pub fn lock<C: StateCell>(state: &C) {
    state.with_state(|s| s.set_buy_prices_visible(false));
}

pub async fn switch_category<S, C>(store: &S, state: &C, category: Category) -> AppResult<()>
where
    S: InventoryStore + ?Sized,
    C: StateCell,
{
    log::info!("[CATEGORY] Switching to {}", category);
    state.with_state(|s| s.switch_category(category));
    load(store, state).await?;
    Ok(())
}

/// Import a sheet, then reload once after every row has settled
pub async fn import_csv<S, C>(store: &S, state: &C, text: &str, currency: &str) -> AppResult<ImportSummary>
where
    S: InventoryStore + ?Sized,
    C: StateCell,
{
    let existing = state.with_state(|s| s.items.clone());
    let plan = plan_import(text, &existing, currency)?;
    log::info!(
        "[IMPORT] Submitting {} rows ({} duplicates, {} errors found locally)",
        plan.drafts.len(),
        plan.duplicate_models.len(),
        plan.errors
    );
    let summary = run_import(store, plan).await;
    if let Err(e) = load(store, state).await {
        log::error!("[IMPORT] Reload after import failed: {}", e);
    }
    Ok(summary)
}
