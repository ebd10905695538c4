//! Condition mini-language shared by `--where`, `--aggregate` and `--order-by`.
//!
//! Each flag has its own grammar:
//!
//! ```text
//!   --where      column (= | > | <) value      value is free text
//!   --aggregate  column = avg|min|max          case-insensitive
//!   --order-by   column = asc|desc             case-insensitive
//! ```
//!
//! Column names are identifiers (`[A-Za-z_][A-Za-z0-9_]*`). Compound
//! operators such as `>=`, `<=`, `!=` and `<>` are rejected outright rather
//! than being read as `>` / `<` followed by a value.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ConditionKind, QueryError};

// The regex crate has no lookahead, so the filter pattern forbids a second
// comparison character by requiring the remainder to start with anything else.
static FILTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*([=<>])([^=<>].*)$").expect("filter pattern")
});

static AGGREGATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*=\s*([A-Za-z]+)$").expect("aggregate pattern")
});

static SORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*=\s*((?i:asc|desc))$").expect("sort pattern")
});

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Equal,
    Greater,
    Less,
}

impl FilterOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            FilterOperator::Equal => "=",
            FilterOperator::Greater => ">",
            FilterOperator::Less => "<",
        }
    }

    fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "=" => Some(FilterOperator::Equal),
            ">" => Some(FilterOperator::Greater),
            "<" => Some(FilterOperator::Less),
            _ => None,
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub column: String,
    pub operator: FilterOperator,
    /// Right-hand side, trimmed. May contain inner spaces.
    pub value: String,
}

impl fmt::Display for FilterCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, self.operator, self.value)
    }
}

/// Parse `column=value`, `column>value` or `column<value`.
pub fn parse_filter(input: &str) -> Result<FilterCondition, QueryError> {
    let invalid = || QueryError::format(ConditionKind::Filter, input);

    let caps = FILTER_RE.captures(input.trim()).ok_or_else(invalid)?;
    let operator = FilterOperator::from_symbol(&caps[2]).ok_or_else(invalid)?;
    let value = caps[3].trim();
    if value.is_empty() {
        return Err(invalid());
    }

    Ok(FilterCondition {
        column: caps[1].to_string(),
        operator,
        value: value.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Aggregate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Avg,
    Min,
    Max,
}

impl AggregateFunction {
    pub const ALL: [AggregateFunction; 3] = [
        AggregateFunction::Avg,
        AggregateFunction::Min,
        AggregateFunction::Max,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            AggregateFunction::Avg => "avg",
            AggregateFunction::Min => "min",
            AggregateFunction::Max => "max",
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregateFunction {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|func| func.as_str() == lowered)
            .ok_or_else(|| QueryError::UnsupportedFunction {
                function: s.to_string(),
                supported: Self::ALL.map(AggregateFunction::as_str).join(", "),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateCondition {
    pub column: String,
    pub function: AggregateFunction,
}

/// Parse `column=function`.
pub fn parse_aggregate(input: &str) -> Result<AggregateCondition, QueryError> {
    let caps = AGGREGATE_RE
        .captures(input.trim())
        .ok_or_else(|| QueryError::format(ConditionKind::Aggregate, input))?;

    Ok(AggregateCondition {
        column: caps[1].to_string(),
        function: caps[2].parse()?,
    })
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCondition {
    pub column: String,
    pub direction: SortDirection,
}

/// Parse `column=asc` or `column=desc`.
pub fn parse_sort(input: &str) -> Result<SortCondition, QueryError> {
    let caps = SORT_RE
        .captures(input.trim())
        .ok_or_else(|| QueryError::format(ConditionKind::Sort, input))?;

    let direction = if caps[2].eq_ignore_ascii_case("asc") {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    };

    Ok(SortCondition {
        column: caps[1].to_string(),
        direction,
    })
}
