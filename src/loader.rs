use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::DiscoveryError;
use crate::config::DEFAULT_MANIFEST_FILE;
use crate::manifest::PackageManifest;

const DEFAULT_ENTRY_FILE: &str = "index.json";

/// A command exported by a plugin.
///
/// Only `name` participates in aggregation; every other field rides along
/// untouched for the host dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// On-disk export shape: a single command or a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PluginExports {
    Single(CommandDescriptor),
    Many(Vec<CommandDescriptor>),
}

impl PluginExports {
    fn into_commands(self) -> Vec<CommandDescriptor> {
        match self {
            PluginExports::Single(command) => vec![command],
            PluginExports::Many(commands) => commands,
        }
    }
}

/// Turns a resolved module path into command descriptors.
///
/// The default implementation reads from disk; hosts with richer module
/// systems substitute their own.
pub trait ModuleLoader {
    fn load(&self, module_path: &Path) -> Result<Vec<CommandDescriptor>, DiscoveryError>;
}

/// Filesystem loader.
///
/// A package directory resolves to its entry file through the package
/// manifest's `main` field, falling back to `index.json`; a path that is
/// already a file is parsed directly. The entry exports one descriptor or an
/// array, normalized to a list here.
#[derive(Debug, Clone)]
pub struct FsModuleLoader {
    manifest_file: String,
}

impl FsModuleLoader {
    pub fn new(manifest_file: impl Into<String>) -> Self {
        Self {
            manifest_file: manifest_file.into(),
        }
    }

    fn entry_file(&self, package_dir: &Path) -> Result<PathBuf, DiscoveryError> {
        let manifest = PackageManifest::read(package_dir, &self.manifest_file)?;
        let entry = manifest
            .and_then(|m| m.main)
            .unwrap_or_else(|| DEFAULT_ENTRY_FILE.to_string());
        Ok(package_dir.join(entry))
    }
}

impl Default for FsModuleLoader {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST_FILE)
    }
}

impl ModuleLoader for FsModuleLoader {
    fn load(&self, module_path: &Path) -> Result<Vec<CommandDescriptor>, DiscoveryError> {
        let entry = if module_path.is_file() {
            module_path.to_path_buf()
        } else {
            self.entry_file(module_path)?
        };

        let content =
            std::fs::read_to_string(&entry).map_err(|e| DiscoveryError::ModuleLoad {
                path: entry.clone(),
                reason: e.to_string(),
            })?;

        let exports: PluginExports =
            serde_json::from_str(&content).map_err(|e| DiscoveryError::ModuleLoad {
                path: entry,
                reason: e.to_string(),
            })?;

        Ok(exports.into_commands())
    }
}
