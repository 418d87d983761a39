// SkinConsult - core/export.rs
//
// CSV and JSON export of a routine outcome.
// Core layer: writes to any Write trait object.

use crate::core::model::Product;
use crate::core::routine::{RoutineOutcome, RoutineSlot};
use crate::util::error::ExportError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Serialised shape of a routine outcome.
#[derive(Debug, Serialize)]
struct RoutineDocument<'a, 'c> {
    /// "plan" or "no_match".
    status: &'static str,
    generated_at: DateTime<Utc>,
    skin_type: &'a str,
    concern: &'a str,
    exclusion: Option<&'a str>,
    candidates: usize,
    slots: &'a [RoutineSlot<'c>],
}

/// Export a routine outcome as a pretty-printed JSON object.
///
/// A no-match outcome is written with `status = "no_match"` and no slots.
pub fn export_json<W: Write>(
    outcome: &RoutineOutcome<'_>,
    generated_at: DateTime<Utc>,
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let request = outcome.request();
    let (status, candidates) = match outcome.plan() {
        Some(routine) => ("plan", routine.candidates),
        None => ("no_match", 0),
    };
    let doc = RoutineDocument {
        status,
        generated_at,
        skin_type: &request.skin_type,
        concern: &request.concern,
        exclusion: request.active_exclusion(),
        candidates,
        slots: outcome.slots(),
    };

    serde_json::to_writer_pretty(&mut writer, &doc).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    writeln!(writer).map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(doc.slots.len())
}

/// Export a routine outcome as CSV, one row per slot.
///
/// Writes: phase, step, status, product, concern, image, url
pub fn export_csv<W: Write>(
    outcome: &RoutineOutcome<'_>,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    csv_writer
        .write_record(["phase", "step", "status", "product", "concern", "image", "url"])
        .map_err(csv_err)?;

    let mut count = 0;
    for slot in outcome.slots() {
        let (status, product) = match slot.product {
            Some(p) => ("found", p),
            None => ("not_found", &EMPTY_PRODUCT),
        };
        csv_writer
            .write_record([
                slot.phase.label(),
                slot.step.label(),
                status,
                product.name.as_str(),
                product.concerns.as_str(),
                product.image_ref.as_str(),
                product.detail_url.as_str(),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

static EMPTY_PRODUCT: Product = Product {
    name: String::new(),
    skin_types: String::new(),
    concerns: String::new(),
    image_ref: String::new(),
    detail_url: String::new(),
};
