//! Mod metadata loaded from a mod's manifest file

use crate::error::Result;
use rulecraft_core::{ModId, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Descriptor of one mod: identity, display metadata and master binding
///
/// Built with placeholders derived from the mod's directory, then overlaid by
/// its manifest. Manifest keys that are absent keep the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModInfo {
    path: PathBuf,
    name: String,
    description: String,
    version: String,
    author: String,
    url: String,
    id: ModId,
    master: String,
    is_master: bool,
    external_resource_dirs: Vec<String>,
}

impl ModInfo {
    /// Create default metadata for a mod at the specified path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            id: ModId::new(name.clone()),
            name,
            path,
            description: "No description.".to_string(),
            version: "1.0".to_string(),
            author: "unknown author".to_string(),
            url: String::new(),
            master: String::new(),
            is_master: false,
            external_resource_dirs: Vec::new(),
        }
    }

    /// Load the manifest at `filename`
    ///
    /// The whole file is read and parsed before any field changes, so on
    /// error this metadata is left exactly as it was.
    pub fn load(&mut self, filename: impl AsRef<Path>) -> Result<()> {
        let filename = filename.as_ref();
        let content = fs::read_to_string(filename)?;
        self.load_str(&content)?;
        tracing::debug!(mod_id = %self.id, path = %filename.display(), "loaded mod manifest");
        Ok(())
    }

    /// Load a manifest from a RON string
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        let node: Value = ron::from_str(content)?;
        self.apply(&node)
    }

    /// Overlay an already-parsed manifest node
    pub fn apply(&mut self, node: &Value) -> Result<()> {
        let map = node.expect_map_or_empty()?;
        let mut staged = self.clone();

        let string = |key: &str| -> Result<Option<String>> {
            map.get(key)
                .map(|v| v.to_string_value().map_err(|e| e.in_field(key)))
                .transpose()
                .map_err(Into::into)
        };

        if let Some(id) = string("id")? {
            staged.id = ModId::new(id);
        }
        if let Some(name) = string("name")? {
            staged.name = name;
        }
        if let Some(description) = string("description")? {
            staged.description = description;
        }
        if let Some(version) = string("version")? {
            staged.version = version;
        }
        if let Some(author) = string("author")? {
            staged.author = author;
        }
        if let Some(url) = string("url")? {
            staged.url = url;
        }
        if let Some(is_master) = map.get("isMaster") {
            staged.is_master = is_master.to_bool().map_err(|e| e.in_field("isMaster"))?;
        }
        // A master is never bound to another master unless it says so itself.
        if staged.is_master {
            staged.master.clear();
        }
        if let Some(master) = string("master")? {
            staged.master = if master == "*" { String::new() } else { master };
        }
        if let Some(dirs) = map.get("loadResources") {
            staged.external_resource_dirs = dirs
                .to_string_list()
                .map_err(|e| e.in_field("loadResources"))?;
        }

        *self = staged;
        Ok(())
    }

    /// Path where this mod resides on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn id(&self) -> &ModId {
        &self.id
    }

    /// Master this mod can load under
    ///
    /// Empty if it loads under any master, or is a master itself.
    pub fn master(&self) -> &str {
        &self.master
    }

    /// Whether this mod is a master (a base game or total conversion)
    pub fn is_master(&self) -> bool {
        self.is_master
    }

    /// Extra resource directories this mod contributes, in search order
    pub fn external_resource_dirs(&self) -> &[String] {
        &self.external_resource_dirs
    }

    /// Whether this mod may load while `active_master` is the active master
    pub fn can_activate(&self, active_master: &str) -> bool {
        self.is_master || self.master.is_empty() || self.master == active_master
    }
}
