//! CLI argument definitions using clap
//!
//! ```text
//! csvq <FILE>                        print the whole table
//! csvq <FILE> --where "price>500"    filter rows
//! csvq <FILE> --aggregate price=avg  reduce a column to one number
//! csvq <FILE> --order-by price=desc  sort rows
//! ```

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

const EXAMPLES: &str = "\
Примеры использования:
  csvq data.csv --where \"price>500\"
  csvq data.csv --where \"name=Apple\"
  csvq data.csv --aggregate \"price=avg\"
  csvq data.csv --aggregate \"quantity=min\"
  csvq data.csv --order-by \"price=desc\"";

/// Filter, aggregate or sort a CSV file and print the result
#[derive(Parser, Debug)]
#[command(name = "csvq")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
#[command(group(
    ArgGroup::new("operation")
        .args(["filter", "aggregate", "order_by"])
        .multiple(false)
))]
pub struct Cli {
    /// Path to the CSV file to process
    pub filename: PathBuf,

    /// Filter condition: "column=value", "column>value" or "column<value"
    #[arg(long = "where", value_name = "COND")]
    pub filter: Option<String>,

    /// Aggregate condition: "column=avg", "column=min" or "column=max"
    #[arg(long, value_name = "COND")]
    pub aggregate: Option<String>,

    /// Sort condition: "column=asc" or "column=desc"
    #[arg(long = "order-by", value_name = "COND")]
    pub order_by: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn filter_arguments() {
        let cli = Cli::try_parse_from(["csvq", "data.csv", "--where", "price>100"]).unwrap();
        assert_eq!(cli.filename, PathBuf::from("data.csv"));
        assert_eq!(cli.filter.as_deref(), Some("price>100"));
        assert!(cli.aggregate.is_none());
        assert!(cli.order_by.is_none());
    }

    #[test]
    fn aggregate_and_order_by_arguments() {
        let cli = Cli::try_parse_from(["csvq", "sales.csv", "--aggregate", "revenue=avg"]).unwrap();
        assert_eq!(cli.aggregate.as_deref(), Some("revenue=avg"));

        let cli = Cli::try_parse_from(["csvq", "sales.csv", "--order-by", "revenue=desc"]).unwrap();
        assert_eq!(cli.order_by.as_deref(), Some("revenue=desc"));
        assert!(cli.filter.is_none());
    }

    #[test]
    fn filename_only() {
        let cli = Cli::try_parse_from(["csvq", "/path/to/data-file_2023.csv"]).unwrap();
        assert_eq!(cli.filename, PathBuf::from("/path/to/data-file_2023.csv"));
        assert!(cli.filter.is_none() && cli.aggregate.is_none() && cli.order_by.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn missing_filename_is_usage_error() {
        let err = Cli::try_parse_from(["csvq", "--where", "price>100"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn operations_are_mutually_exclusive() {
        let err = Cli::try_parse_from([
            "csvq",
            "data.csv",
            "--where",
            "price>100",
            "--aggregate",
            "price=avg",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = Cli::try_parse_from([
            "csvq",
            "data.csv",
            "--aggregate",
            "price=avg",
            "--order-by",
            "price=asc",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn help_mentions_every_flag() {
        let help = Cli::command().render_help().to_string();
        for flag in ["--where", "--aggregate", "--order-by", "<FILENAME>"] {
            assert!(help.contains(flag), "help is missing {flag}");
        }
    }

    #[test]
    fn help_ends_with_usage_examples() {
        let help = Cli::command().render_help().to_string();
        let examples = help
            .find("Примеры использования:")
            .expect("examples section in help");
        assert!(help.find("--order-by").unwrap() < examples);
        for line in [
            "csvq data.csv --where \"price>500\"",
            "csvq data.csv --aggregate \"price=avg\"",
            "csvq data.csv --order-by \"price=desc\"",
        ] {
            assert!(help[examples..].contains(line), "help is missing example {line}");
        }
    }
}
