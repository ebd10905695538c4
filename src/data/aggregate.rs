use log::debug;

use super::model::{as_f64, Row};
use crate::condition::{AggregateCondition, AggregateFunction};
use crate::error::QueryError;

/// Numeric values of `column`, skipping rows where it is absent or not a number.
fn numeric_values(rows: &[Row], column: &str) -> Vec<f64> {
    rows.iter()
        .filter_map(|row| row.get(column))
        .filter_map(|cell| as_f64(cell))
        .collect()
}

/// Reduce a column to a single number.
///
/// Non-numeric cells are ignored. A column with no numeric cells at all
/// (including a column that does not exist) is an error.
pub fn apply(rows: &[Row], condition: &AggregateCondition) -> Result<f64, QueryError> {
    let values = numeric_values(rows, &condition.column);
    debug!(
        "aggregate {}({}): {} numeric of {} rows",
        condition.function,
        condition.column,
        values.len(),
        rows.len()
    );

    let no_data = || QueryError::NoNumericData {
        column: condition.column.clone(),
    };

    match condition.function {
        AggregateFunction::Avg => {
            if values.is_empty() {
                return Err(no_data());
            }
            Ok(values.iter().sum::<f64>() / values.len() as f64)
        }
        AggregateFunction::Min => values.into_iter().min_by(f64::total_cmp).ok_or_else(no_data),
        AggregateFunction::Max => values.into_iter().max_by(f64::total_cmp).ok_or_else(no_data),
    }
}
