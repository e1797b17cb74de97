//! Batch mode: many scenarios from one CSV file.
//!
//! ## Input columns
//!
//! Headers are matched by name, so column order does not matter. Every
//! column may be omitted or left empty. Numbers must be finite; `inf` and
//! `NaN` are rejected with the row and column.
//!
//! | Column | Type | Empty means |
//! |-------------------|--------|------------------|
//! | `primary_price` | number | 0 |
//! | `secondary_price` | number | 0 |
//! | `primary_qty` | number | 0 |
//! | `secondary_qty` | number | 0 |
//! | `food_price` | number | 0 |
//! | `station_cost` | number | 0 |
//! | `crafting_price` | number | 0 |
//! | `focus` | `true`/`false` | false |
//! | `bonus` | bonus label | `Бонус` |
//! | `resource` | resource label | `Ресурс` |
//! | `town` | town label | `Город` |
//! | `tax` | tax label | `Налог` |
//!
//! ## Output columns
//!
//! `row, return_rate, crafted_quantity, total_cost, net_profit`, with the
//! last three formatted exactly as the interactive outputs.
//!
//! ```csv
//! secondary_price,secondary_qty,crafting_price,resource,town,tax
//! 10,100,50,Ресурс,Город,Налог
//! ```

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use recraft_core::{
    BonusOption, CalculationInput, Resource, SelectOption, TaxOption, Town, UnknownOptionError,
    calculate,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::utils::{ParseNumberError, parse_number};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("cannot open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A label column holds a value outside its option list. `row` is
    /// 1-based, not counting the header.
    #[error("row {row}: {source}")]
    InvalidOption {
        row: usize,
        #[source]
        source: UnknownOptionError,
    },

    /// A number column holds text that is not a finite number.
    #[error("row {row}, column {column}: {source}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        #[source]
        source: ParseNumberError,
    },

    #[error("cannot write results: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    primary_price: Option<String>,
    #[serde(default)]
    secondary_price: Option<String>,
    #[serde(default)]
    primary_qty: Option<String>,
    #[serde(default)]
    secondary_qty: Option<String>,
    #[serde(default)]
    food_price: Option<String>,
    #[serde(default)]
    station_cost: Option<String>,
    #[serde(default)]
    crafting_price: Option<String>,
    #[serde(default)]
    focus: Option<bool>,
    #[serde(default)]
    bonus: Option<String>,
    #[serde(default)]
    resource: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    tax: Option<String>,
}

#[derive(Debug, Serialize)]
struct ResultRow {
    row: usize,
    return_rate: f64,
    crafted_quantity: String,
    total_cost: String,
    net_profit: String,
}

fn label_or_default(
    label: Option<String>,
    default: &'static str,
) -> String {
    label
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn strict_option<T: SelectOption + Default>(
    label: Option<&str>,
    row: usize,
) -> Result<T, BatchError> {
    match label.filter(|l| !l.is_empty()) {
        Some(label) => {
            T::parse_strict(label).map_err(|source| BatchError::InvalidOption { row, source })
        }
        None => Ok(T::default()),
    }
}

fn number_cell(
    cell: Option<&str>,
    column: &'static str,
    row: usize,
) -> Result<f64, BatchError> {
    match cell.filter(|c| !c.is_empty()) {
        Some(text) => {
            parse_number(text).map_err(|source| BatchError::InvalidNumber { row, column, source })
        }
        None => Ok(0.0),
    }
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<CalculationInput, BatchError> {
    let bonus: BonusOption = strict_option(row.bonus.as_deref(), row_number)?;
    let tax: TaxOption = strict_option(row.tax.as_deref(), row_number)?;

    let number = |cell: &Option<String>, column| number_cell(cell.as_deref(), column, row_number);

    Ok(CalculationInput {
        primary_price: number(&row.primary_price, "primary_price")?,
        secondary_price: number(&row.secondary_price, "secondary_price")?,
        primary_qty: number(&row.primary_qty, "primary_qty")?,
        secondary_qty: number(&row.secondary_qty, "secondary_qty")?,
        food_price: number(&row.food_price, "food_price")?,
        station_cost_per_unit: number(&row.station_cost, "station_cost")?,
        crafting_price: number(&row.crafting_price, "crafting_price")?,
        focus_enabled: row.focus.unwrap_or_default(),
        has_bonus: bonus.has_bonus(),
        resource: label_or_default(row.resource, Resource::Unselected.label()),
        town: label_or_default(row.town, Town::Unselected.label()),
        tax_rate: tax.rate(),
    })
}

/// Reads scenarios from CSV data, in file order.
///
/// # Errors
///
/// * [`BatchError::Csv`] if the data is not valid CSV or `focus` is not
///   `true`/`false`.
/// * [`BatchError::InvalidNumber`] if a number cell is not a finite number,
///   including `inf` and `NaN`.
/// * [`BatchError::InvalidOption`] if a bonus or tax label is unknown.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<CalculationInput>, BatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut inputs = Vec::new();
    for (index, record) in reader.deserialize::<CsvRow>().enumerate() {
        inputs.push(convert_row(record?, index + 1)?);
    }
    debug!(rows = inputs.len(), "loaded batch scenarios");
    Ok(inputs)
}

pub fn load_from_str(input: &str) -> Result<Vec<CalculationInput>, BatchError> {
    load_from_reader(input.as_bytes())
}

pub fn load_from_file(path: &Path) -> Result<Vec<CalculationInput>, BatchError> {
    let file = File::open(path).map_err(|source| BatchError::Open {
        path: path.display().to_string(),
        source,
    })?;
    load_from_reader(file)
}

/// Calculates every scenario and writes one CSV result row each. Returns
/// the number of rows written.
pub fn write_results<W: Write>(
    inputs: &[CalculationInput],
    out: W,
) -> Result<usize, BatchError> {
    let mut writer = csv::Writer::from_writer(out);

    for (index, input) in inputs.iter().enumerate() {
        let result = calculate(input);
        let shown = result.display();
        writer.serialize(ResultRow {
            row: index + 1,
            return_rate: result.return_rate,
            crafted_quantity: shown.crafted_quantity,
            total_cost: shown.total_cost,
            net_profit: shown.net_profit,
        })?;
    }

    writer.flush()?;
    Ok(inputs.len())
}
