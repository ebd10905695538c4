use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Row – one record of the source table
// ---------------------------------------------------------------------------

/// A single record: column_name → raw cell text.
pub type Row = BTreeMap<String, String>;

/// Interpret a cell as a number. Surrounding whitespace is ignored and a
/// single `_` between two digits is accepted as grouping (`1_000`).
pub fn as_f64(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if !cell.contains('_') {
        return cell.parse::<f64>().ok();
    }

    let bytes = cell.as_bytes();
    let grouped_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !grouped_ok {
        return None;
    }
    cell.replace('_', "").parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// RowStore – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowStore {
    /// Column names in file order; defines display order.
    pub headers: Vec<String>,
    /// All records, in file order.
    pub rows: Vec<Row>,
}

impl RowStore {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        RowStore { headers, rows }
    }

    /// Build a row from a header slice and matching cells. Extra cells are
    /// dropped, missing trailing cells leave their column absent.
    pub fn row_from_cells<'a, I>(headers: &[String], cells: I) -> Row
    where
        I: IntoIterator<Item = &'a str>,
    {
        headers
            .iter()
            .zip(cells)
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
