//! Reading mod directories into in-memory sources

use crate::config::AssemblyConfig;
use crate::error::{Error, Result};
use crate::manifest::ModInfo;
use std::fs;
use std::path::Path;

/// One rule data file of a mod
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDocument {
    /// File name or other label used in diagnostics
    pub name: String,
    /// RON text of the document
    pub content: String,
}

impl RuleDocument {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A mod's metadata plus its rule documents, in application order
#[derive(Debug, Clone)]
pub struct ModSource {
    pub info: ModInfo,
    pub documents: Vec<RuleDocument>,
}

impl ModSource {
    pub fn new(info: ModInfo, documents: Vec<RuleDocument>) -> Self {
        Self { info, documents }
    }

    /// Read a mod directory
    ///
    /// The manifest named by the config is loaded if present; without one the
    /// mod keeps the placeholders derived from its directory name. Every other
    /// `.ron` file directly inside the directory is a rule document, applied
    /// in file-name order.
    pub fn from_dir(path: impl AsRef<Path>, config: &AssemblyConfig) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {:?}", path),
            )));
        }

        let mut info = ModInfo::new(path);
        let manifest = path.join(config.manifest_file());
        if manifest.is_file() {
            info.load(&manifest)?;
        } else {
            tracing::debug!(path = %path.display(), "no manifest, using placeholder metadata");
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(path)? {
            let file_path = entry?.path();
            let is_ron = file_path.extension().map(|e| e == "ron").unwrap_or(false);
            if is_ron && file_path.is_file() && file_path != manifest {
                files.push(file_path);
            }
        }
        files.sort();

        let mut documents = Vec::with_capacity(files.len());
        for file_path in files {
            let name = file_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let content = fs::read_to_string(&file_path)?;
            documents.push(RuleDocument::new(name, content));
        }

        tracing::debug!(
            mod_id = %info.id(),
            documents = documents.len(),
            "read mod directory"
        );
        Ok(Self::new(info, documents))
    }
}
