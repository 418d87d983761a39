// SkinConsult - core/catalog.rs
//
// In-memory product catalog and its CSV reader.
// Core layer: reads from any `Read`; the file system is handled by
// platform::fs and the one-per-process cache by app::catalog_store.
//
// Each entry carries its step category, computed once when the catalog is
// built. A catalog is immutable after construction, so the classification
// can never go stale.

use crate::core::classify::classify;
use crate::core::model::{Product, StepCategory};
use crate::util::constants;
use crate::util::error::CatalogError;
use std::io::Read;
use std::path::Path;

/// A product together with its derived routine step and source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// 0-based index of the data row in the source table (header excluded).
    pub row: usize,

    pub product: Product,

    /// Step category derived from `product.name`.
    pub step: StepCategory,
}

/// Read-only product table in source row order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from products already in memory. Rows are numbered
    /// in iteration order.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let entries = products
            .into_iter()
            .enumerate()
            .map(|(row, product)| CatalogEntry::new(row, product))
            .collect();
        Self { entries }
    }

    /// All entries in source row order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries per step category, in routine order.
    pub fn step_counts(&self) -> Vec<(StepCategory, usize)> {
        StepCategory::all()
            .iter()
            .map(|step| {
                let n = self.entries.iter().filter(|e| e.step == *step).count();
                (*step, n)
            })
            .collect()
    }
}

impl CatalogEntry {
    fn new(row: usize, product: Product) -> Self {
        let step = classify(&product.name);
        Self { row, product, step }
    }
}

/// Header positions of the required columns.
struct ColumnMap {
    product: usize,
    skin_type: usize,
    concern: usize,
    product_pic: usize,
    product_url: usize,
}

impl ColumnMap {
    /// Locate the required columns. Header names are compared after trimming
    /// surrounding whitespace; the first occurrence of a name wins.
    fn from_headers(headers: &[String], origin: &Path) -> Result<Self, CatalogError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| CatalogError::MissingColumn {
                    path: origin.to_path_buf(),
                    column,
                    found: headers.to_vec(),
                })
        };
        Ok(Self {
            product: find(constants::COLUMN_PRODUCT)?,
            skin_type: find(constants::COLUMN_SKIN_TYPE)?,
            concern: find(constants::COLUMN_CONCERN)?,
            product_pic: find(constants::COLUMN_PRODUCT_PIC)?,
            product_url: find(constants::COLUMN_PRODUCT_URL)?,
        })
    }
}

/// Parse a CSV catalog using the default row limit.
///
/// Returns the catalog and a list of non-fatal warnings (skipped rows).
/// `origin` is used only for error and warning context.
pub fn parse_catalog<R: Read>(
    reader: R,
    origin: &Path,
) -> Result<(Catalog, Vec<String>), CatalogError> {
    parse_catalog_with_limit(reader, origin, constants::MAX_CATALOG_ROWS)
}

/// Parse a CSV catalog, rejecting tables with more than `max_rows` data rows.
///
/// Cells are decoded lossily and kept verbatim; only header names are
/// trimmed. Short rows read missing cells as empty. Rows whose product name
/// is blank are skipped with a warning.
pub fn parse_catalog_with_limit<R: Read>(
    reader: R,
    origin: &Path,
    max_rows: usize,
) -> Result<(Catalog, Vec<String>), CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let csv_err = |source: csv::Error| CatalogError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let headers: Vec<String> = csv_reader
        .byte_headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| String::from_utf8_lossy(h).trim().to_string())
        .collect();
    let columns = ColumnMap::from_headers(&headers, origin)?;

    tracing::debug!(
        path = %origin.display(),
        columns = headers.len(),
        "Catalog header parsed"
    );

    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for (row, record) in csv_reader.byte_records().enumerate() {
        if row >= max_rows {
            return Err(CatalogError::TooManyRows {
                path: origin.to_path_buf(),
                max: max_rows,
            });
        }
        let record = record.map_err(csv_err)?;
        let cell = |idx: usize| {
            record
                .get(idx)
                .map(|raw| String::from_utf8_lossy(raw).into_owned())
                .unwrap_or_default()
        };

        let name = cell(columns.product);
        if name.trim().is_empty() {
            tracing::debug!(path = %origin.display(), row, "Skipping row without product name");
            // Report the spreadsheet-style line: header is line 1.
            warnings.push(format!(
                "'{}' line {}: row has no product name and was skipped",
                origin.display(),
                row + 2
            ));
            continue;
        }

        let product = Product {
            name,
            skin_types: cell(columns.skin_type),
            concerns: cell(columns.concern),
            image_ref: cell(columns.product_pic),
            detail_url: cell(columns.product_url),
        };
        entries.push(CatalogEntry::new(row, product));
    }

    tracing::info!(
        path = %origin.display(),
        products = entries.len(),
        skipped = warnings.len(),
        "Catalog parsed"
    );

    Ok((Catalog { entries }, warnings))
}
