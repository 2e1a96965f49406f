//! Out-of-Stock Export
//!
//! Serializes the out-of-stock table rows. Buy prices are written as "0"
//! while they are hidden, whatever the cached value.

use crate::csv_codec::write_quoted;
use crate::error::AppResult;
use crate::view_model::TableRow;

pub const EXPORT_HEADER: [&str; 6] = ["ID", "Manufacturer", "Model", "Buy Price", "Sell Price", "Qty"];

pub fn out_of_stock_csv(rows: &[TableRow], buy_prices_visible: bool) -> AppResult<String> {
    let header = EXPORT_HEADER.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    let body = rows.iter().map(|row| {
        vec![
            row.id.to_string(),
            row.manufacturer.clone(),
            row.model.clone(),
            if buy_prices_visible { row.buy_price.clone() } else { "0".to_string() },
            row.sell_price.clone(),
            row.quantity.to_string(),
        ]
    });
    write_quoted(std::iter::once(header).chain(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::plan_import;

    fn row(id: u32, model: &str) -> TableRow {
        TableRow {
            id,
            manufacturer: "Acme \"Labs\"".to_string(),
            model: model.to_string(),
            buy_price: "40.00 DT".to_string(),
            sell_price: "55.50 DT".to_string(),
            quantity: 0,
        }
    }

    #[test]
    fn test_hidden_buy_price_is_redacted() {
        let csv = out_of_stock_csv(&[row(4, "X4")], false).unwrap();
        assert_eq!(
            csv,
            "\"ID\",\"Manufacturer\",\"Model\",\"Buy Price\",\"Sell Price\",\"Qty\"\n\
             \"4\",\"Acme \"\"Labs\"\"\",\"X4\",\"0\",\"55.50 DT\",\"0\""
        );
    }

    #[test]
    fn test_visible_buy_price_is_kept() {
        let csv = out_of_stock_csv(&[row(4, "X4")], true).unwrap();
        assert!(csv.contains("\"40.00 DT\""));
    }

    #[test]
    fn test_export_reimports() {
        let csv = out_of_stock_csv(&[row(4, "X4"), row(5, "X5")], true).unwrap();
        let plan = plan_import(&csv, &[], "DT").unwrap();
        assert_eq!(plan.errors, 0);
        assert_eq!(plan.drafts.len(), 2);
        assert_eq!(plan.drafts[0].manufacturer, "Acme \"Labs\"");
        assert_eq!(plan.drafts[0].model, "X4");
        assert_eq!(plan.drafts[0].sell_price, Some(55.5));
        assert_eq!(plan.drafts[0].buy_price, Some(40.0));
        assert_eq!(plan.drafts[1].quantity, 0);
    }
}
