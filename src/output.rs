//! Console rendering of query results.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::condition::AggregateFunction;
use crate::data::model::Row;

pub const NO_DATA: &str = "Нет данных для отображения.";

const SIGNIFICANT_DIGITS: usize = 4;

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Render rows as a bordered grid, columns in `headers` order. Absent cells
/// render empty.
pub fn render_table(headers: &[String], rows: &[&Row]) -> Result<String> {
    let schema = Schema::new(
        headers
            .iter()
            .map(|h| Field::new(h.as_str(), DataType::Utf8, true))
            .collect::<Vec<_>>(),
    );

    let columns: Vec<ArrayRef> = headers
        .iter()
        .map(|h| {
            let cells: Vec<Option<&str>> =
                rows.iter().map(|row| row.get(h).map(String::as_str)).collect();
            Arc::new(StringArray::from(cells)) as ArrayRef
        })
        .collect();

    let batch = RecordBatch::try_new(Arc::new(schema), columns).context("building result table")?;
    let table = pretty_format_batches(&[batch]).context("formatting result table")?;
    Ok(table.to_string())
}

/// Print a table, or the "no data" line when there are no rows.
pub fn display_table<W: Write>(out: &mut W, headers: &[String], rows: &[&Row]) -> Result<()> {
    if rows.is_empty() {
        writeln!(out, "{NO_DATA}")?;
        return Ok(());
    }
    writeln!(out, "{}", render_table(headers, rows)?)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

pub fn display_aggregate<W: Write>(
    out: &mut W,
    column: &str,
    function: AggregateFunction,
    value: f64,
) -> Result<()> {
    writeln!(
        out,
        "{} по столбцу '{column}': {}",
        function.as_str().to_uppercase(),
        format_number(value)
    )?;
    Ok(())
}

/// Format a result the way `%.4g` does, except that whole numbers are printed
/// in full without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }

    // The exponent is taken after rounding, so 9999.7 becomes 1e+04.
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..SIGNIFICANT_DIGITS as i32).contains(&exp) {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn captured(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn table_contains_headers_and_cells() {
        let rows = [
            row(&[("name", "Apple"), ("price", "100")]),
            row(&[("name", "Banana"), ("price", "50")]),
        ];
        let refs: Vec<&Row> = rows.iter().collect();
        let out = captured(|buf| display_table(buf, &headers(&["name", "price"]), &refs));

        for item in ["name", "price", "Apple", "Banana", "100", "50"] {
            assert!(out.contains(item), "missing {item} in\n{out}");
        }
        assert!(out.starts_with('+'));
        assert!(!out.contains(NO_DATA));
    }

    #[test]
    fn table_keeps_header_order() {
        let rows = [row(&[("a", "1"), ("b", "2")])];
        let refs: Vec<&Row> = rows.iter().collect();
        let table = render_table(&headers(&["b", "a"]), &refs).unwrap();
        let header_line = table.lines().nth(1).unwrap();
        assert!(header_line.find('b').unwrap() < header_line.find('a').unwrap());
    }

    #[test]
    fn absent_cells_render_empty() {
        let rows = [row(&[("name", "Pear")])];
        let refs: Vec<&Row> = rows.iter().collect();
        let table = render_table(&headers(&["name", "price"]), &refs).unwrap();
        assert!(table.contains("Pear"));
        assert_eq!(table.lines().count(), 5);
    }

    #[test]
    fn empty_rows_print_no_data() {
        let out = captured(|buf| display_table(buf, &headers(&["col1", "col2"]), &[]));
        assert_eq!(out.trim_end(), NO_DATA);
        assert!(!out.contains('+'));
    }

    #[test]
    fn aggregate_line() {
        let cases = [
            ("price", AggregateFunction::Avg, 75.0, "AVG по столбцу 'price': 75"),
            ("quantity", AggregateFunction::Min, 5.0, "MIN по столбцу 'quantity': 5"),
            ("price", AggregateFunction::Max, 1234.5678, "MAX по столбцу 'price': 1235"),
            ("price", AggregateFunction::Avg, 12.3456, "AVG по столбцу 'price': 12.35"),
        ];
        for (column, function, value, expected) in cases {
            let out = captured(|buf| display_aggregate(buf, column, function, value));
            assert_eq!(out.trim_end(), expected);
        }
    }

    #[test]
    fn number_formatting() {
        let cases = [
            (123.0, "123"),
            (100.0, "100"),
            (123.456, "123.5"),
            (0.0001234, "0.0001234"),
            (0.5, "0.5"),
            (-2.25, "-2.25"),
            (9.99951, "10"),
            (12345.6, "1.235e+04"),
            (0.0000152, "1.52e-05"),
            (1e20, "100000000000000000000"),
            (-0.0, "0"),
        ];
        for (value, expected) in cases {
            assert_eq!(format_number(value), expected, "formatting {value}");
        }
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }
}
