use std::cmp::Ordering;

use log::debug;

use super::model::{as_f64, Row};
use crate::condition::{SortCondition, SortDirection};

// ---------------------------------------------------------------------------
// SortKey – best-effort numeric ordering with a text fallback
// ---------------------------------------------------------------------------

/// Ordering key for one cell. Numbers sort before text; numbers compare by
/// value (`total_cmp`), text compares bytewise.
#[derive(Debug, Clone)]
pub enum SortKey<'a> {
    Numeric(f64),
    Text(&'a str),
}

impl<'a> SortKey<'a> {
    /// An absent cell sorts as empty text.
    pub fn of(cell: Option<&'a str>) -> Self {
        let cell = cell.unwrap_or("");
        match as_f64(cell) {
            Some(v) => SortKey::Numeric(v),
            None => SortKey::Text(cell),
        }
    }
}

impl PartialEq for SortKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey<'_> {}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        use SortKey::*;
        match (self, other) {
            (Numeric(a), Numeric(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (Numeric(_), Text(_)) => Ordering::Less,
            (Text(_), Numeric(_)) => Ordering::Greater,
        }
    }
}

/// Reorder all rows by the condition's column.
///
/// Stable ascending sort; `desc` reverses the ascending result, so rows with
/// equal keys come out in reverse file order.
pub fn apply<'a>(rows: &'a [Row], condition: &SortCondition) -> Vec<&'a Row> {
    let mut keyed: Vec<(SortKey<'a>, &'a Row)> = rows
        .iter()
        .map(|row| (SortKey::of(row.get(&condition.column).map(String::as_str)), row))
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    if condition.direction == SortDirection::Desc {
        keyed.reverse();
    }

    debug!(
        "sort by {} {:?}: {} rows",
        condition.column,
        condition.direction,
        keyed.len()
    );
    keyed.into_iter().map(|(_, row)| row).collect()
}
