use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// ConditionKind – which grammar rejected the input
// ---------------------------------------------------------------------------

/// The three condition grammars, used to phrase format errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    Filter,
    Aggregate,
    Sort,
}

impl ConditionKind {
    /// Expected shape of the input, quoted for the error message.
    pub fn expected(self) -> &'static str {
        match self {
            ConditionKind::Filter => "'column=value', 'column>value' или 'column<value'",
            ConditionKind::Aggregate => "'column=function'",
            ConditionKind::Sort => "'column=asc' или 'column=desc'",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = match self {
            ConditionKind::Filter => "фильтрации",
            ConditionKind::Aggregate => "агрегации",
            ConditionKind::Sort => "сортировки",
        };
        f.write_str(noun)
    }
}

// ---------------------------------------------------------------------------
// QueryError – everything the tool reports to the user
// ---------------------------------------------------------------------------

/// Domain errors. `Display` is the one-line message shown to the user.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    /// Condition string did not match its grammar.
    #[error("Некорректный формат условия {kind}: '{input}'. Ожидается формат {}", .kind.expected())]
    Format { kind: ConditionKind, input: String },

    #[error("Неподдерживаемая функция агрегации: '{function}'. Поддерживаются: {supported}")]
    UnsupportedFunction { function: String, supported: String },

    #[error("файл '{}' не найден", .path.display())]
    FileNotFound { path: PathBuf },

    /// Zero-byte file, or a file without a header row.
    #[error("файл '{}' пуст или не содержит заголовков", .path.display())]
    EmptyData { path: PathBuf },

    #[error("Нет числовых значений в столбце '{column}' для агрегации")]
    NoNumericData { column: String },

    #[error("столбец '{column}' не найден в данных")]
    MissingColumn { column: String },
}

impl QueryError {
    pub fn format(kind: ConditionKind, input: &str) -> Self {
        QueryError::Format {
            kind,
            input: input.to_string(),
        }
    }
}
