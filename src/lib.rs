//! # websave
//!
//! A small library for offering files to the user as client-initiated
//! downloads from browser-resident applications.
//!
//! ## Features
//!
//! - CSV table export with RFC 4180-style escaping (quote doubling, quoting
//!   of cells containing separators or line breaks)
//! - Plain-text export with verbatim content
//! - Optional UTF-8 byte-order-mark prefix, on by default for CSV so
//!   spreadsheet tools detect the encoding, off by default for text
//! - Host capability behind a trait: the browser implementation lives behind
//!   the `wasm` feature, everything else is pure and testable anywhere
//!
//! ## Quick Start
//!
//! ```
//! use websave::{Column, CsvExportOptions, Row, trigger_csv_download};
//!
//! let mut row = Row::new();
//! row.insert("name".to_string(), "Alice".into());
//!
//! // Returns true once the download has been dispatched; false when no
//! // browser-like host is available (e.g. during server-side rendering).
//! let started = trigger_csv_download(
//!     vec![row],
//!     CsvExportOptions {
//!         file_name: "report.csv".to_string(),
//!         columns: vec![Column::new("name", "Name")],
//!         include_bom: None,
//!     },
//! );
//! # assert!(!started); // no browser host in doctests
//! ```
//!
//! ## Serialization without a browser
//!
//! The serializer is independent of the download machinery:
//!
//! ```
//! use websave::{Column, build_csv};
//!
//! let csv = build_csv(&[], &[Column::new("id", "ID")]);
//! assert_eq!(csv, "ID");
//! ```

pub mod download;
pub mod error;
pub mod export;
pub mod host;

#[cfg(feature = "wasm")]
pub mod wasm;
#[cfg(feature = "wasm")]
pub mod web;

pub use download::{
    trigger_csv_download, trigger_download, trigger_download_with, trigger_text_download,
};
pub use error::{Error, Result};
pub use export::{
    CSV_MIME_TYPE, Column, CsvExportOptions, ExportRequest, RenderedFile, Row, TEXT_MIME_TYPE,
    TableExport, TextExport, build_csv, build_file_data, escape_cell, stringify_value,
};
pub use host::{DownloadHost, NullHost};
