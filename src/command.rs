use std::io::Write;
use std::path::Path;

use anyhow::Result;
use log::debug;

use crate::cli::Cli;
use crate::condition::{
    parse_aggregate, parse_filter, parse_sort, AggregateCondition, FilterCondition, SortCondition,
};
use crate::data::model::{Row, RowStore};
use crate::data::{aggregate, filter, loader, sort};
use crate::error::QueryError;
use crate::output::{display_aggregate, display_table};

// ---------------------------------------------------------------------------
// Command – the single operation requested on the command line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// No operation flag: print the whole table.
    Display,
    Filter(FilterCondition),
    Aggregate(AggregateCondition),
    Sort(SortCondition),
}

impl TryFrom<&Cli> for Command {
    type Error = QueryError;

    /// Parse the condition string of whichever flag was given. Clap already
    /// guarantees at most one of them is set.
    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if let Some(cond) = &cli.filter {
            return Ok(Command::Filter(parse_filter(cond)?));
        }
        if let Some(cond) = &cli.aggregate {
            return Ok(Command::Aggregate(parse_aggregate(cond)?));
        }
        if let Some(cond) = &cli.order_by {
            return Ok(Command::Sort(parse_sort(cond)?));
        }
        Ok(Command::Display)
    }
}

fn require_column(store: &RowStore, column: &str) -> Result<(), QueryError> {
    if store.has_column(column) {
        Ok(())
    } else {
        Err(QueryError::MissingColumn {
            column: column.to_string(),
        })
    }
}

/// Load `path`, run `command` against it and write the result to `out`.
pub fn execute<W: Write>(path: &Path, command: &Command, out: &mut W) -> Result<()> {
    let store = loader::load_file(path)?;
    debug!("executing {command:?}");

    match command {
        Command::Display => {
            let rows: Vec<&Row> = store.rows.iter().collect();
            display_table(out, &store.headers, &rows)
        }
        Command::Filter(cond) => {
            require_column(&store, &cond.column)?;
            let rows = filter::apply(&store.rows, cond);
            display_table(out, &store.headers, &rows)
        }
        Command::Aggregate(cond) => {
            let value = aggregate::apply(&store.rows, cond)?;
            display_aggregate(out, &cond.column, cond.function, value)
        }
        Command::Sort(cond) => {
            require_column(&store, &cond.column)?;
            let rows = sort::apply(&store.rows, cond);
            display_table(out, &store.headers, &rows)
        }
    }
}
