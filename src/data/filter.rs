use log::debug;

use super::model::{as_f64, Row};
use crate::condition::{FilterCondition, FilterOperator};

/// Does a single cell satisfy the condition?
///
/// * `=` compares the raw text exactly.
/// * `>` / `<` compare numerically; a side that is not a number fails.
fn matches(cell: &str, condition: &FilterCondition) -> bool {
    match condition.operator {
        FilterOperator::Equal => cell == condition.value,
        FilterOperator::Greater | FilterOperator::Less => {
            let (Some(lhs), Some(rhs)) = (as_f64(cell), as_f64(&condition.value)) else {
                return false;
            };
            if condition.operator == FilterOperator::Greater {
                lhs > rhs
            } else {
                lhs < rhs
            }
        }
    }
}

/// Return the rows that pass the condition, in their original order.
///
/// Rows without the column are skipped. Never fails: a row whose cell cannot
/// be compared simply does not pass.
pub fn apply<'a>(rows: &'a [Row], condition: &FilterCondition) -> Vec<&'a Row> {
    let kept: Vec<&Row> = rows
        .iter()
        .filter(|row| {
            row.get(&condition.column)
                .is_some_and(|cell| matches(cell, condition))
        })
        .collect();

    debug!("filter {condition}: kept {} of {} rows", kept.len(), rows.len());
    kept
}
