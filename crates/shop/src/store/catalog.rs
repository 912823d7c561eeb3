//! Catalog source: products from a CSV file.
//!
//! The file carries a header row (`Product,Price,Units`) followed by
//! `name,price,units` rows. Rows are kept in file order; duplicate names
//! are kept as separate entries. The catalog is loaded once per session.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Product;

/// Errors that can occur while loading the product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing file does not exist. Fatal at the entry point.
    #[error("product catalog not found at {}", .0.display())]
    NotFound(PathBuf),

    /// The backing file could not be read.
    #[error("product catalog I/O error: {0}")]
    Io(#[from] io::Error),

    /// The CSV structure itself is broken.
    #[error("malformed product catalog: {0}")]
    Csv(#[from] csv::Error),

    /// A row is missing one of the name, price, units columns.
    #[error("product catalog line {line}: expected name,price,units columns")]
    MissingColumn {
        /// 1-based line number in the file, counting the header.
        line: usize,
    },

    /// A price field is not numeric.
    #[error("product catalog line {line}: invalid price {value:?}")]
    InvalidPrice {
        /// 1-based line number in the file, counting the header.
        line: usize,
        /// The offending field.
        value: String,
    },

    /// A units field is not a whole number.
    #[error("product catalog line {line}: invalid unit count {value:?}")]
    InvalidUnits {
        /// 1-based line number in the file, counting the header.
        line: usize,
        /// The offending field.
        value: String,
    },
}

/// Load the product catalog from a CSV file.
///
/// # Errors
///
/// Returns `CatalogError::NotFound` for a missing file, `MissingColumn`
/// for rows without all three columns, and `InvalidPrice`/`InvalidUnits`
/// for non-numeric fields.
pub fn load_products(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let file = std::fs::File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            CatalogError::NotFound(path.to_path_buf())
        } else {
            CatalogError::Io(e)
        }
    })?;
    let products = parse_products(file)?;
    tracing::debug!(count = products.len(), "loaded product catalog");
    Ok(products)
}

fn parse_products<R: Read>(reader: R) -> Result<Vec<Product>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut products = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        // Header is line 1.
        let line = index + 2;
        let record = result?;

        let name = field(&record, 0, line)?;
        let price_field = field(&record, 1, line)?;
        let units_field = field(&record, 2, line)?;

        let price = Decimal::from_str(price_field).map_err(|_| CatalogError::InvalidPrice {
            line,
            value: price_field.to_owned(),
        })?;
        let units = units_field
            .parse::<u64>()
            .map_err(|_| CatalogError::InvalidUnits {
                line,
                value: units_field.to_owned(),
            })?;

        products.push(Product::new(name.to_owned(), price, units));
    }
    Ok(products)
}

fn field<'r>(
    record: &'r csv::StringRecord,
    column: usize,
    line: usize,
) -> Result<&'r str, CatalogError> {
    record
        .get(column)
        .ok_or(CatalogError::MissingColumn { line })
}
