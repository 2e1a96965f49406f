//! CSV Import Pipeline
//!
//! Validates a sheet against the loaded collection, submits the valid rows
//! concurrently and folds the outcomes into one summary.

use std::collections::HashSet;

use futures::future::join_all;

use crate::commands::InventoryStore;
use crate::csv_codec::{parse_row, read_records, HeaderMap};
use crate::error::{AppError, AppResult};
use crate::models::{Item, ItemDraft};

/// Rows ready to submit plus the rows already rejected locally
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportPlan {
    pub drafts: Vec<ItemDraft>,
    pub duplicate_models: Vec<String>,
    pub errors: usize,
}

/// Validate a sheet without touching the network.
///
/// A model is a duplicate when it already exists in `existing` or appears
/// on an earlier accepted row of the same sheet (both case-insensitive).
pub fn plan_import(text: &str, existing: &[Item], currency: &str) -> AppResult<ImportPlan> {
    let records = read_records(text)?;
    if records.len() < 2 {
        return Err(AppError::Validation("CSV file is empty or missing data.".to_string()));
    }
    let header = HeaderMap::from_cells(records[0].iter().map(String::as_str))?;

    let mut seen: HashSet<String> = existing.iter().map(|i| i.model.to_lowercase()).collect();
    let mut plan = ImportPlan::default();
    for (line, row) in records.iter().enumerate().skip(1) {
        let model = header.model_of(row);
        if row.len() >= header.width() && !model.is_empty() && seen.contains(&model.to_lowercase()) {
            plan.duplicate_models.push(model.to_string());
            continue;
        }
        match parse_row(row, &header, currency) {
            Ok(draft) => {
                seen.insert(draft.model.to_lowercase());
                plan.drafts.push(draft);
            }
            Err(e) => {
                log::warn!("[IMPORT] Skipping record {}: {}", line + 1, e);
                plan.errors += 1;
            }
        }
    }
    Ok(plan)
}

/// Aggregate outcome shown after every submission has settled
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportSummary {
    pub added: usize,
    pub duplicate_models: Vec<String>,
    pub errors: usize,
}

impl ImportSummary {
    pub fn duplicates(&self) -> usize {
        self.duplicate_models.len()
    }

    pub fn message(&self) -> String {
        let mut lines = Vec::new();
        if self.added > 0 {
            lines.push(format!("Successfully added {} items.", self.added));
        }
        if self.duplicates() > 0 {
            lines.push(format!(
                "Skipped {} duplicate items: {}.",
                self.duplicates(),
                self.duplicate_models.join(", ")
            ));
        }
        if self.errors > 0 {
            lines.push(format!("Encountered {} errors.", self.errors));
        }
        if lines.is_empty() {
            return "No items imported.".to_string();
        }
        lines.join("\n")
    }
}

/// Submit every planned draft at once and wait for all of them.
///
/// A server-side rejection counts as a duplicate; a transport failure
/// counts as an error.
pub async fn run_import<S: InventoryStore + ?Sized>(store: &S, plan: ImportPlan) -> ImportSummary {
    let mut summary = ImportSummary {
        added: 0,
        duplicate_models: plan.duplicate_models,
        errors: plan.errors,
    };
    let outcomes = join_all(plan.drafts.iter().map(|draft| store.create(draft))).await;
    for (draft, outcome) in plan.drafts.iter().zip(outcomes) {
        match outcome {
            Ok(()) => summary.added += 1,
            Err(AppError::Network(e)) | Err(AppError::Decode(e)) => {
                log::error!("[IMPORT] Failed to submit {}: {}", draft.model, e);
                summary.errors += 1;
            }
            Err(e) => {
                log::warn!("[IMPORT] Server rejected {}: {}", draft.model, e);
                summary.duplicate_models.push(draft.model.clone());
            }
        }
    }
    log::info!(
        "[IMPORT] Done: {} added, {} duplicates, {} errors",
        summary.added,
        summary.duplicates(),
        summary.errors
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;
    use futures::executor::block_on;

    fn existing(model: &str) -> Item {
        Item {
            id: 1,
            manufacturer: "Acme".to_string(),
            model: model.to_string(),
            buy_price: None,
            sell_price: Some(10.0),
            quantity: 1,
        }
    }

    #[test]
    fn test_duplicate_within_same_file() {
        let text = "Manufacturer,Model,Buy Price,Sell Price,Qty\nAcme,X2,50,80,3\nAcme,X2,55,85,2";
        let plan = plan_import(text, &[], "DT").unwrap();
        assert_eq!(plan.drafts.len(), 1);
        assert_eq!(plan.duplicate_models, vec!["X2"]);

        let store = MemoryStore::default();
        let summary = block_on(run_import(&store, plan));
        let message = summary.message();
        assert!(message.contains("Successfully added 1 items"));
        assert!(message.contains("Skipped 1 duplicate items: X2"));
        assert_eq!(store.created().len(), 1);
        assert_eq!(store.created()[0].buy_price, Some(50.0));
    }

    #[test]
    fn test_duplicate_of_existing_is_case_insensitive() {
        let text = "model\tmanufacturer\tbuy_price\tsell_price\tquantity\nx9\tAcme\t1\t2\t1\nY1\tAcme\t1\t2\t1";
        let plan = plan_import(text, &[existing("X9")], "DT").unwrap();
        assert_eq!(plan.duplicate_models, vec!["x9"]);
        assert_eq!(plan.drafts.len(), 1);
        assert_eq!(plan.drafts[0].model, "Y1");
    }

    #[test]
    fn test_invalid_rows_are_counted_as_errors() {
        let text = "Manufacturer,Model,Buy Price,Sell Price,Qty\n\
                    Acme,A1,abc,10,1\n\
                    Acme,A2,5,10\n\
                    ,A3,5,10,1\n\
                    Acme,A4,5,10,1.5\n\
                    Acme,A5,20,10,1\n\
                    Acme,A6,5 DT,10 DT,4";
        let plan = plan_import(text, &[], "DT").unwrap();
        assert_eq!(plan.errors, 5);
        assert_eq!(plan.drafts.len(), 1);
        assert_eq!(plan.drafts[0].model, "A6");
    }

    #[test]
    fn test_header_mismatch_aborts() {
        let err = plan_import("Manufacturer,Model,Qty\nAcme,X,1", &[], "DT").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.starts_with("CSV header missing")));
    }

    #[test]
    fn test_empty_sheet_aborts() {
        let err = plan_import("Manufacturer,Model,Buy Price,Sell Price,Qty\n\n", &[], "DT").unwrap_err();
        assert_eq!(err, AppError::Validation("CSV file is empty or missing data.".to_string()));
    }

    #[test]
    fn test_server_rejection_counts_as_duplicate() {
        let text = "Manufacturer,Model,Buy Price,Sell Price,Qty\nAcme,B1,1,2,1\nAcme,B2,1,2,1\nAcme,B3,1,2,1";
        let plan = plan_import(text, &[], "DT").unwrap();
        let store = MemoryStore::default();
        store.reject_model("B2");
        store.fail_model("B3");
        let summary = block_on(run_import(&store, plan));
        assert_eq!(summary.added, 1);
        assert_eq!(summary.duplicate_models, vec!["B2"]);
        assert_eq!(summary.errors, 1);
        assert_eq!(
            summary.message(),
            "Successfully added 1 items.\nSkipped 1 duplicate items: B2.\nEncountered 1 errors."
        );
    }

    #[test]
    fn test_empty_summary_message() {
        assert_eq!(ImportSummary::default().message(), "No items imported.");
    }
}
