use std::path::{Path, PathBuf};

pub const DEFAULT_MANIFEST_FILE: &str = "package.json";
pub const DEFAULT_MODULES_DIR: &str = "node_modules";

/// Inputs for one discovery pass.
///
/// Both roots are explicit so callers (and tests) control the local/global
/// decision instead of relying on ambient process state. `app_root` is the
/// application the host tool is operating on, usually its working directory;
/// `tool_root` is the host tool's own installed source location.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    pub(crate) app_root: PathBuf,
    pub(crate) tool_root: PathBuf,
    pub(crate) plugin_prefix: String,
    pub(crate) manifest_file: String,
    pub(crate) modules_dir: String,
}

impl DiscoveryConfig {
    pub fn new(
        app_root: impl Into<PathBuf>,
        tool_root: impl Into<PathBuf>,
        plugin_prefix: impl Into<String>,
    ) -> Self {
        Self {
            app_root: app_root.into(),
            tool_root: tool_root.into(),
            plugin_prefix: plugin_prefix.into(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            modules_dir: DEFAULT_MODULES_DIR.to_string(),
        }
    }

    /// Derives the `<tool>-plugin-` naming convention from the tool name.
    pub fn for_tool(
        tool_name: &str,
        app_root: impl Into<PathBuf>,
        tool_root: impl Into<PathBuf>,
    ) -> Self {
        Self::new(app_root, tool_root, format!("{tool_name}-plugin-"))
    }

    pub fn with_manifest_file(mut self, manifest_file: impl Into<String>) -> Self {
        self.manifest_file = manifest_file.into();
        self
    }

    pub fn with_modules_dir(mut self, modules_dir: impl Into<String>) -> Self {
        self.modules_dir = modules_dir.into();
        self
    }

    pub fn app_root(&self) -> &Path {
        &self.app_root
    }

    pub fn tool_root(&self) -> &Path {
        &self.tool_root
    }

    pub fn plugin_prefix(&self) -> &str {
        &self.plugin_prefix
    }

    pub fn manifest_file(&self) -> &str {
        &self.manifest_file
    }

    pub fn modules_dir(&self) -> &str {
        &self.modules_dir
    }
}
