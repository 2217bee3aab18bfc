//! CSV serialization: value stringification, cell escaping, row assembly.
//!
//! Output follows RFC 4180 conventions: comma separators, double-quote as
//! both quote and escape character (escaped by doubling), `\n` as the sole
//! line terminator with no trailing terminator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A row of export data: a JSON object mapping column keys to values.
pub type Row = serde_json::Map<String, Value>;

/// A column in a CSV export: which row key to read, and the header to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Key looked up in each row.
    pub key: String,
    /// Header cell text. May be any string; it is escaped like a data cell.
    pub header: String,
}

impl Column {
    /// Create a column from a row key and a header label.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
        }
    }
}

/// Convert an arbitrary JSON value to cell text.
///
/// The fallback chain is explicit and total:
/// 1. Strings pass through unchanged (no re-quoting).
/// 2. `Null` renders as the empty string. Missing row keys are looked up as
///    `Null`, so an absent value yields an empty cell rather than a literal
///    `null` token.
/// 3. Everything else takes its canonical JSON encoding, degrading to the
///    value's `Display` form in the (unreachable for `Value` input) case
///    where encoding fails.
///
/// This function never panics.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use websave::stringify_value;
///
/// assert_eq!(stringify_value(&json!("plain")), "plain");
/// assert_eq!(stringify_value(&json!(null)), "");
/// assert_eq!(stringify_value(&json!(42)), "42");
/// assert_eq!(stringify_value(&json!([1, 2])), "[1,2]");
/// ```
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Escape one CSV cell.
///
/// Doubles every embedded quote first, then wraps the result in quotes if it
/// contains a quote, comma, newline, or carriage return. Cells that need no
/// quoting are returned unchanged, so escaping a plain cell is idempotent.
///
/// # Examples
///
/// ```
/// use websave::escape_cell;
///
/// assert_eq!(escape_cell("plain"), "plain");
/// assert_eq!(escape_cell("a,b"), "\"a,b\"");
/// assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
pub fn escape_cell(value: &str) -> String {
    let escaped = value.replace('"', "\"\"");
    if needs_quoting(escaped.as_bytes()) {
        format!("\"{escaped}\"")
    } else {
        escaped
    }
}

/// Whether a cell contains a character that forces quoting.
///
/// All four trigger characters are ASCII, so a byte scan is exact even for
/// multi-byte UTF-8 content.
fn needs_quoting(bytes: &[u8]) -> bool {
    memchr::memchr3(b'"', b',', b'\n', bytes).is_some() || memchr::memchr(b'\r', bytes).is_some()
}

/// Build CSV text from rows and a column schema.
///
/// The header line comes first, built from the escaped column headers in
/// column order. Each row then contributes one line: for every column, the
/// row's value at the column key (missing keys read as `Null`, which renders
/// empty) is stringified, escaped, and comma-joined. Lines are joined with a
/// single `\n` and there is no trailing terminator.
///
/// Row order and column order are preserved exactly; callers depend on this.
pub fn build_csv(rows: &[Row], columns: &[Column]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);

    let header = columns
        .iter()
        .map(|column| escape_cell(&column.header))
        .collect::<Vec<_>>()
        .join(",");
    lines.push(header);

    for row in rows {
        let line = columns
            .iter()
            .map(|column| {
                let value = row.get(&column.key).unwrap_or(&Value::Null);
                escape_cell(&stringify_value(value))
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    lines.join("\n")
}
