//! CSV Codec
//!
//! Parses pasted or uploaded inventory sheets and writes the out-of-stock
//! report. Import accepts tab- or comma-separated text with a header row.

use crate::error::{AppError, AppResult};
use crate::models::ItemDraft;

/// Canonical import columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Manufacturer,
    Model,
    BuyPrice,
    SellPrice,
    Quantity,
}

impl Column {
    const ALL: [Column; 5] = [
        Column::Manufacturer,
        Column::Model,
        Column::BuyPrice,
        Column::SellPrice,
        Column::Quantity,
    ];

    /// Match a header cell ignoring case, whitespace, underscores and quotes
    pub fn from_header(cell: &str) -> Option<Self> {
        let key: String = cell
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '"')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "manufacturer" => Some(Column::Manufacturer),
            "model" => Some(Column::Model),
            "buyprice" => Some(Column::BuyPrice),
            "sellprice" => Some(Column::SellPrice),
            "qty" | "quantity" => Some(Column::Quantity),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Column::Manufacturer => "manufacturer",
            Column::Model => "model",
            Column::BuyPrice => "buy_price",
            Column::SellPrice => "sell_price",
            Column::Quantity => "quantity",
        }
    }
}

/// Position of each canonical column in the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMap {
    manufacturer: usize,
    model: usize,
    buy_price: usize,
    sell_price: usize,
    quantity: usize,
    width: usize,
}

impl HeaderMap {
    /// Map header cells to columns; any missing column rejects the whole sheet
    pub fn from_cells<'a>(cells: impl IntoIterator<Item = &'a str>) -> AppResult<Self> {
        let mut found: [Option<usize>; 5] = [None; 5];
        let mut width = 0;
        for (idx, cell) in cells.into_iter().enumerate() {
            width = idx + 1;
            if let Some(column) = Column::from_header(cell) {
                let slot = &mut found[column as usize];
                if slot.is_none() {
                    *slot = Some(idx);
                }
            }
        }
        let missing: Vec<&str> = Column::ALL
            .iter()
            .filter(|c| found[**c as usize].is_none())
            .map(Column::name)
            .collect();
        match found {
            [Some(manufacturer), Some(model), Some(buy_price), Some(sell_price), Some(quantity)] => Ok(Self {
                manufacturer,
                model,
                buy_price,
                sell_price,
                quantity,
                width,
            }),
            _ => Err(AppError::Validation(format!(
                "CSV header missing required columns: {}.",
                missing.join(", ")
            ))),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Trimmed model cell, empty when the row is too short
    pub fn model_of<'a>(&self, row: &'a [String]) -> &'a str {
        row.get(self.model).map(|s| s.trim()).unwrap_or("")
    }
}

/// Tab when the text contains one, otherwise comma
pub fn detect_delimiter(text: &str) -> u8 {
    if text.contains('\t') {
        b'\t'
    } else {
        b','
    }
}

/// Split text into trimmed records, skipping blank lines
pub fn read_records(text: &str) -> AppResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(text))
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(records)
}

/// Why a data row was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    /// Fewer cells than the header
    Short { cells: usize },
    MissingManufacturer,
    MissingModel,
    BadPrice { column: &'static str, value: String },
    BadQuantity(String),
    /// sell price is not above buy price
    PriceInversion { model: String },
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowError::Short { cells } => write!(f, "row has only {} cells", cells),
            RowError::MissingManufacturer => write!(f, "manufacturer is empty"),
            RowError::MissingModel => write!(f, "model is empty"),
            RowError::BadPrice { column, value } => write!(f, "{} '{}' is not a number", column, value),
            RowError::BadQuantity(value) => write!(f, "quantity '{}' is not a whole number", value),
            RowError::PriceInversion { model } => write!(f, "{}: sell price must exceed buy price", model),
        }
    }
}

/// Strip the currency token and whitespace, then parse
pub fn parse_price(cell: &str, currency: &str) -> Option<f64> {
    let cleaned: String = if currency.is_empty() {
        cell.to_string()
    } else {
        cell.replace(currency, "")
    };
    let cleaned: String = cleaned.chars().filter(|c| !c.is_whitespace()).collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

/// Turn one data row into a draft
pub fn parse_row(row: &[String], header: &HeaderMap, currency: &str) -> Result<ItemDraft, RowError> {
    if row.len() < header.width {
        return Err(RowError::Short { cells: row.len() });
    }
    let manufacturer = row[header.manufacturer].trim();
    let model = row[header.model].trim();
    if manufacturer.is_empty() {
        return Err(RowError::MissingManufacturer);
    }
    if model.is_empty() {
        return Err(RowError::MissingModel);
    }
    let buy_cell = &row[header.buy_price];
    let buy_price = parse_price(buy_cell, currency).ok_or_else(|| RowError::BadPrice {
        column: "buy_price",
        value: buy_cell.clone(),
    })?;
    let sell_cell = &row[header.sell_price];
    let sell_price = parse_price(sell_cell, currency).ok_or_else(|| RowError::BadPrice {
        column: "sell_price",
        value: sell_cell.clone(),
    })?;
    let qty_cell = row[header.quantity].trim();
    let quantity = qty_cell
        .parse::<u32>()
        .map_err(|_| RowError::BadQuantity(qty_cell.to_string()))?;
    if sell_price <= buy_price {
        return Err(RowError::PriceInversion { model: model.to_string() });
    }
    Ok(ItemDraft {
        manufacturer: manufacturer.to_string(),
        model: model.to_string(),
        buy_price: Some(buy_price),
        sell_price: Some(sell_price),
        quantity,
    })
}

/// Write rows as CSV with every cell quoted and rows joined by `\n`
pub fn write_quoted<I, R>(rows: I) -> AppResult<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Validation(format!("CSV write failed: {}", e)))?;
    let text = String::from_utf8(bytes).map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(text.trim_end_matches('\n').to_string())
}
