//! Error types for rulecraft-script

use thiserror::Error;

/// Ruleset loading error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("RON serialize error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Invalid rule data: {0}")]
    Core(#[from] rulecraft_core::Error),

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Master mod not found: {0}")]
    MasterNotFound(String),

    #[error("Mod is not a master: {0}")]
    NotAMaster(String),

    #[error("Duplicate mod: {0}")]
    DuplicateMod(String),

    #[error("Document '{name}' failed to load: {source}")]
    Document {
        name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Mod '{id}' failed to load: {source}")]
    Mod {
        id: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the id of the mod this error occurred in
    pub fn in_mod(self, id: impl Into<String>) -> Self {
        Error::Mod {
            id: id.into(),
            source: Box::new(self),
        }
    }
}

impl Error {
    /// Attach the name of the rule document this error occurred in
    pub fn in_document(self, name: impl Into<String>) -> Self {
        Error::Document {
            name: name.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
