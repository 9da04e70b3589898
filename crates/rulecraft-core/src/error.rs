//! Error types for rulecraft-core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Type error: expected {expected}, got {got}")]
    TypeError { expected: String, got: String },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Value {value} out of range for {target}")]
    OutOfRange { value: i64, target: &'static str },

    #[error("Invalid discriminant {value} for {target}")]
    InvalidDiscriminant { value: i64, target: &'static str },

    #[error("In field '{key}': {source}")]
    Field {
        key: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a type error from the expected kind and the offending value's kind
    pub fn type_error(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Error::TypeError {
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Wrap this error with the key of the field it occurred in
    pub fn in_field(self, key: impl Into<String>) -> Self {
        Error::Field {
            key: key.into(),
            source: Box::new(self),
        }
    }

    /// Dotted path of field keys leading to the innermost error
    pub fn field_path(&self) -> String {
        let mut path = Vec::new();
        let mut current = self;
        while let Error::Field { key, source } = current {
            path.push(key.as_str());
            current = source;
        }
        path.join(".")
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path() {
        let err = Error::MissingField("tu".into())
            .in_field("stats")
            .in_field("units");
        assert_eq!(err.field_path(), "units.stats");
        assert_eq!(
            err.to_string(),
            "In field 'units': In field 'stats': Missing required field: tu"
        );
    }

    #[test]
    fn test_field_path_empty_for_leaf() {
        assert_eq!(Error::type_error("int", "string").field_path(), "");
    }
}
