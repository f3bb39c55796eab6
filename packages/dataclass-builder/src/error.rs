//! Error types for dataclass-builder

use std::fmt;
use thiserror::Error;

/// Builder error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Assignment to a field the record does not declare
    UndefinedField,
    /// Build attempted with required fields unset
    MissingField,
    /// Read of a name that is neither a field nor a stored private attribute
    NoSuchAttribute,
    /// Value does not decode into the field's declared type
    InvalidValue,
    /// Preset loading errors (YAML/JSON)
    Config,
    /// I/O errors
    IO,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UndefinedField => "undefined_field",
            ErrorKind::MissingField => "missing_field",
            ErrorKind::NoSuchAttribute => "no_such_attribute",
            ErrorKind::InvalidValue => "invalid_value",
            ErrorKind::Config => "config",
            ErrorKind::IO => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builder error type
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Field not declared on the record type
    #[error("dataclass '{record}' does not define field '{field}'{}", suggestion_suffix(.suggestion))]
    UndefinedField {
        record: &'static str,
        field: String,
        suggestion: Option<String>,
    },

    /// Required fields never assigned; lists every missing field
    #[error("{}", missing_message(.record, .fields))]
    MissingField {
        record: &'static str,
        fields: Vec<String>,
    },

    /// Unknown attribute read
    #[error("builder for dataclass '{record}' has no attribute '{name}'")]
    NoSuchAttribute { record: &'static str, name: String },

    /// Value of the wrong shape for the field type
    #[error("invalid value for field '{field}' of dataclass '{record}': {source}")]
    InvalidValue {
        record: &'static str,
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// Preset document is not a mapping of field names to values
    #[error("invalid builder presets: {0}")]
    InvalidPresets(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BuilderError>;

impl BuilderError {
    /// Create an undefined field error, suggesting the closest declared name
    pub fn undefined_field(record: &'static str, field: impl Into<String>, declared: &[&str]) -> Self {
        let field = field.into();
        let suggestion = find_closest_match(&field, declared);
        Self::UndefinedField {
            record,
            field,
            suggestion,
        }
    }

    pub fn missing_fields<S: Into<String>>(
        record: &'static str,
        fields: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::MissingField {
            record,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn no_such_attribute(record: &'static str, name: impl Into<String>) -> Self {
        Self::NoSuchAttribute {
            record,
            name: name.into(),
        }
    }

    pub fn invalid_value(
        record: &'static str,
        field: impl Into<String>,
        source: serde_json::Error,
    ) -> Self {
        Self::InvalidValue {
            record,
            field: field.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedField { .. } => ErrorKind::UndefinedField,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::NoSuchAttribute { .. } => ErrorKind::NoSuchAttribute,
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
            Self::InvalidPresets(_) | Self::Yaml(_) | Self::Json(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::IO,
        }
    }

    /// Name of the record type the error refers to, when there is one
    pub fn record(&self) -> Option<&'static str> {
        match self {
            Self::UndefinedField { record, .. }
            | Self::MissingField { record, .. }
            | Self::NoSuchAttribute { record, .. }
            | Self::InvalidValue { record, .. } => Some(record),
            _ => None,
        }
    }
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(". Did you mean '{}'?", name),
        None => String::new(),
    }
}

fn missing_message(record: &str, fields: &[String]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| format!("'{}'", f)).collect();
    if quoted.len() == 1 {
        format!("field {} of dataclass '{}' is not optional", quoted[0], record)
    } else {
        format!(
            "fields {} of dataclass '{}' are not optional",
            quoted.join(", "),
            record
        )
    }
}

/// Closest declared name within edit distance 2, shorter than the typo itself
fn find_closest_match(target: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (levenshtein_distance(target, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2 && *distance < target.chars().count())
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}

/// Simple Levenshtein distance implementation
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut matrix = vec![vec![0; b.len() + 1]; a.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        matrix[0][j] = j;
    }

    for (i, c1) in a.iter().enumerate() {
        for (j, c2) in b.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            matrix[i + 1][j + 1] = (matrix[i][j + 1] + 1) // deletion
                .min(matrix[i + 1][j] + 1) // insertion
                .min(matrix[i][j] + cost); // substitution
        }
    }

    matrix[a.len()][b.len()]
}
