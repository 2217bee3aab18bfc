//! Export requests and content assembly.
//!
//! An [`ExportRequest`] selects the output format and carries the data to
//! serialize; [`build_file_data`] turns it into a [`RenderedFile`] (content
//! string plus MIME type) ready to hand to a download host. This path is
//! pure: no environment access, no error branches.

pub mod csv;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
pub use csv::{Column, Row, build_csv, escape_cell, stringify_value};

/// MIME type for CSV exports.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// MIME type for plain-text exports.
pub const TEXT_MIME_TYPE: &str = "text/plain;charset=utf-8;";

/// UTF-8 byte-order mark, encoded as `EF BB BF` when prefixed to content.
const BOM: char = '\u{FEFF}';

/// A file export request.
///
/// The JSON wire shape is internally tagged on `format` (`"csv"` or `"txt"`)
/// with camelCase field names, e.g.
/// `{"format":"csv","fileName":"report.csv","columns":[...],"rows":[...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format")]
pub enum ExportRequest {
    /// CSV table export.
    #[serde(rename = "csv")]
    Csv(TableExport),
    /// Plain-text export.
    #[serde(rename = "txt")]
    Text(TextExport),
}

/// A CSV table export: a column schema plus the rows to serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableExport {
    /// Suggested file name for the download. Must be non-empty.
    pub file_name: String,
    /// Ordered column schema. Keys are expected to be unique. May be empty,
    /// which produces header-only output.
    pub columns: Vec<Column>,
    /// Ordered rows. May be empty, which produces the header line alone.
    pub rows: Vec<Row>,
    /// BOM prefix control. Defaults to **on** when unset: spreadsheet tools
    /// need the BOM to detect UTF-8 in CSV files.
    pub include_bom: Option<bool>,
}

/// A plain-text export with verbatim content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextExport {
    /// Suggested file name for the download. Must be non-empty.
    pub file_name: String,
    /// Content written verbatim.
    pub content: String,
    /// BOM prefix control. Defaults to **off** when unset, unlike CSV.
    pub include_bom: Option<bool>,
}

/// Options for [`trigger_csv_download`](crate::trigger_csv_download), which
/// takes the rows as a separate argument.
#[derive(Debug, Clone)]
pub struct CsvExportOptions {
    /// Suggested file name for the download.
    pub file_name: String,
    /// Ordered column schema.
    pub columns: Vec<Column>,
    /// BOM prefix control, default on.
    pub include_bom: Option<bool>,
}

/// Rendered file content plus its MIME type.
///
/// Produced by [`build_file_data`], consumed once by the download trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Full file content, BOM included when enabled.
    pub content: String,
    /// MIME type with UTF-8 charset.
    pub mime_type: &'static str,
}

impl ExportRequest {
    /// The suggested file name, whichever variant this is.
    pub fn file_name(&self) -> &str {
        match self {
            ExportRequest::Csv(table) => &table.file_name,
            ExportRequest::Text(text) => &text.file_name,
        }
    }

    /// Parse a request from its JSON wire shape.
    ///
    /// Rejects requests with an empty `fileName`; everything else is left to
    /// the serializer, which accepts any input.
    pub fn from_json(json: &str) -> Result<Self> {
        let request: ExportRequest = serde_json::from_str(json)?;
        if request.file_name().is_empty() {
            return Err(Error::EmptyFileName);
        }
        Ok(request)
    }
}

/// Build file content and MIME type for a request.
///
/// CSV exports are serialized with [`build_csv`] and prefixed with the UTF-8
/// BOM unless `include_bom` is explicitly `false`. Text exports use their
/// content verbatim and get the BOM only when `include_bom` is explicitly
/// `true`. The asymmetric default is deliberate: spreadsheet tools need the
/// BOM to detect UTF-8, plain text does not.
pub fn build_file_data(request: &ExportRequest) -> RenderedFile {
    match request {
        ExportRequest::Csv(table) => {
            let csv = build_csv(&table.rows, &table.columns);
            let content = if table.include_bom == Some(false) {
                csv
            } else {
                format!("{BOM}{csv}")
            };
            RenderedFile {
                content,
                mime_type: CSV_MIME_TYPE,
            }
        }
        ExportRequest::Text(text) => {
            let content = if text.include_bom == Some(true) {
                format!("{BOM}{}", text.content)
            } else {
                text.content.clone()
            };
            RenderedFile {
                content,
                mime_type: TEXT_MIME_TYPE,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BOM_BYTES: [u8; 3] = [0xEF, 0xBB, 0xBF];

    fn table_request(include_bom: Option<bool>) -> ExportRequest {
        ExportRequest::Csv(TableExport {
            file_name: "report.csv".to_string(),
            columns: vec![Column::new("name", "Name")],
            rows: vec![[("name".to_string(), json!("Alice"))].into_iter().collect()],
            include_bom,
        })
    }

    fn text_request(include_bom: Option<bool>) -> ExportRequest {
        ExportRequest::Text(TextExport {
            file_name: "note.txt".to_string(),
            content: "hello".to_string(),
            include_bom,
        })
    }

    #[test]
    fn test_csv_bom_default_on() {
        let file = build_file_data(&table_request(None));
        assert!(file.content.as_bytes().starts_with(&BOM_BYTES));
        assert_eq!(&file.content[3..], "Name\nAlice");
        assert_eq!(file.mime_type, CSV_MIME_TYPE);
    }

    #[test]
    fn test_csv_bom_explicit_off() {
        let file = build_file_data(&table_request(Some(false)));
        assert_eq!(file.content, "Name\nAlice");
    }

    #[test]
    fn test_text_bom_default_off() {
        let file = build_file_data(&text_request(None));
        assert_eq!(file.content, "hello");
        assert_eq!(file.mime_type, TEXT_MIME_TYPE);
    }

    #[test]
    fn test_text_bom_explicit_on() {
        let file = build_file_data(&text_request(Some(true)));
        assert!(file.content.as_bytes().starts_with(&BOM_BYTES));
        assert_eq!(&file.content[3..], "hello");
    }

    #[test]
    fn test_text_content_verbatim() {
        let request = ExportRequest::Text(TextExport {
            file_name: "raw.txt".to_string(),
            content: "a,b\n\"c\"".to_string(),
            include_bom: None,
        });
        // No CSV escaping applies to text exports
        assert_eq!(build_file_data(&request).content, "a,b\n\"c\"");
    }

    #[test]
    fn test_from_json_csv_wire_shape() {
        let request = ExportRequest::from_json(
            r#"{
                "format": "csv",
                "fileName": "report.csv",
                "columns": [{"key": "name", "header": "Name"}],
                "rows": [{"name": "Alice"}]
            }"#,
        )
        .unwrap();
        match &request {
            ExportRequest::Csv(table) => {
                assert_eq!(table.file_name, "report.csv");
                assert_eq!(table.columns, vec![Column::new("name", "Name")]);
                assert_eq!(table.include_bom, None);
            }
            other => panic!("expected csv request, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_txt_wire_shape() {
        let request = ExportRequest::from_json(
            r#"{"format": "txt", "fileName": "note.txt", "content": "hello", "includeBom": true}"#,
        )
        .unwrap();
        assert_eq!(
            request,
            ExportRequest::Text(TextExport {
                file_name: "note.txt".to_string(),
                content: "hello".to_string(),
                include_bom: Some(true),
            })
        );
    }

    #[test]
    fn test_from_json_rejects_empty_file_name() {
        let err = ExportRequest::from_json(r#"{"format": "txt", "fileName": "", "content": "x"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::EmptyFileName));
    }

    #[test]
    fn test_from_json_rejects_unknown_format() {
        assert!(ExportRequest::from_json(r#"{"format": "xlsx", "fileName": "x"}"#).is_err());
    }

    #[test]
    fn test_wire_shape_round_trips() {
        let request = table_request(Some(false));
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"format\":\"csv\""));
        assert!(json.contains("\"fileName\":\"report.csv\""));
        assert_eq!(ExportRequest::from_json(&json).unwrap(), request);
    }
}
