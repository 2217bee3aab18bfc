//! WASM bindings for browser-based file downloads.
//!
//! This module exposes the download entry points to JavaScript via
//! wasm-bindgen. Structured inputs (the request, the column schema, the rows)
//! cross the boundary as JSON strings and are validated on this side.

use wasm_bindgen::prelude::*;

use crate::export::{Column, CsvExportOptions, ExportRequest, Row, TextExport};
use crate::{trigger_csv_download, trigger_download, trigger_text_download};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Download a file described by a JSON export request.
///
/// Takes the tagged request shape
/// (`{"format":"csv"|"txt","fileName":...,...}`) and returns whether the
/// download was dispatched.
#[wasm_bindgen]
pub fn download_file(request: &str) -> Result<bool, JsValue> {
    let request =
        ExportRequest::from_json(request).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(trigger_download(&request))
}

/// Download a CSV file from JSON-encoded rows and columns.
///
/// `rows` is a JSON array of objects; `columns` is a JSON array of
/// `{"key":...,"header":...}` pairs.
#[wasm_bindgen]
pub fn download_csv_file(
    rows: &str,
    file_name: &str,
    columns: &str,
    include_bom: Option<bool>,
) -> Result<bool, JsValue> {
    let rows: Vec<Row> =
        serde_json::from_str(rows).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let columns: Vec<Column> =
        serde_json::from_str(columns).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(trigger_csv_download(
        rows,
        CsvExportOptions {
            file_name: file_name.to_string(),
            columns,
            include_bom,
        },
    ))
}

/// Download a plain-text file with verbatim content.
#[wasm_bindgen]
pub fn download_text_file(file_name: &str, content: &str, include_bom: Option<bool>) -> bool {
    trigger_text_download(TextExport {
        file_name: file_name.to_string(),
        content: content.to_string(),
        include_bom,
    })
}
