use std::collections::HashSet;

use crate::DiscoveryError;
use crate::config::DiscoveryConfig;
use crate::filter;
use crate::loader::{CommandDescriptor, FsModuleLoader, ModuleLoader};
use crate::locate;
use crate::sources::{self, SearchContext};

/// One-shot command discovery over the resolved search contexts.
///
/// Every call re-reads manifests and re-resolves packages, so the result
/// reflects the on-disk state at call time.
pub struct CommandDiscovery<L = FsModuleLoader> {
    config: DiscoveryConfig,
    loader: L,
}

impl CommandDiscovery<FsModuleLoader> {
    pub fn new(config: DiscoveryConfig) -> Self {
        let loader = FsModuleLoader::new(config.manifest_file.clone());
        Self { config, loader }
    }
}

impl<L: ModuleLoader> CommandDiscovery<L> {
    pub fn with_loader(config: DiscoveryConfig, loader: L) -> Self {
        Self { config, loader }
    }

    /// Aggregated command list, deduplicated by name.
    ///
    /// Contexts merge application-first and candidates merge in declaration
    /// order, so on a name collision the earlier-discovered command wins.
    /// Unresolvable or broken plugins are skipped with a warning; the only
    /// hard failure is an undeterminable tool installation root.
    pub fn commands(&self) -> Result<Vec<CommandDescriptor>, DiscoveryError> {
        let contexts = sources::resolve_contexts(&self.config)?;

        let mut commands = Vec::new();
        for context in &contexts {
            self.collect(context, &mut commands);
        }

        Ok(dedup_by_name(commands))
    }

    fn collect(&self, context: &SearchContext, out: &mut Vec<CommandDescriptor>) {
        let candidates = filter::plugin_candidates(
            context.manifest.dependency_names(),
            &self.config.plugin_prefix,
        );

        for name in candidates {
            let Some(package_dir) =
                locate::locate_package(&name, &context.base_dir, &self.config.modules_dir)
            else {
                tracing::warn!(
                    plugin = %name,
                    base = %context.base_dir.display(),
                    "plugin package not resolvable, skipping"
                );
                continue;
            };

            match self.loader.load(&package_dir) {
                Ok(loaded) => {
                    tracing::debug!(
                        plugin = %name,
                        commands = loaded.len(),
                        "loaded plugin commands"
                    );
                    out.extend(loaded);
                }
                Err(err) => {
                    tracing::warn!(plugin = %name, error = %err, "failed to load plugin, skipping");
                }
            }
        }
    }
}

/// Convenience wrapper for hosts that discover once at startup.
pub fn discover_commands(
    config: DiscoveryConfig,
) -> Result<Vec<CommandDescriptor>, DiscoveryError> {
    CommandDiscovery::new(config).commands()
}

fn dedup_by_name(commands: Vec<CommandDescriptor>) -> Vec<CommandDescriptor> {
    let mut seen = HashSet::new();
    commands
        .into_iter()
        .filter(|command| seen.insert(command.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn command(name: &str) -> CommandDescriptor {
        CommandDescriptor {
            name: name.into(),
            description: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_dedup_first_wins() {
        let mut first = command("shared");
        first.description = Some("first".into());
        let mut second = command("shared");
        second.description = Some("second".into());

        let result = dedup_by_name(vec![first, command("other"), second]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "shared");
        assert_eq!(result[0].description.as_deref(), Some("first"));
        assert_eq!(result[1].name, "other");
    }

    #[test]
    fn test_dedup_preserves_order() {
        let result = dedup_by_name(vec![command("c"), command("a"), command("b")]);
        let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    struct FailingLoader;

    impl ModuleLoader for FailingLoader {
        fn load(&self, module_path: &Path) -> Result<Vec<CommandDescriptor>, DiscoveryError> {
            Err(DiscoveryError::ModuleLoad {
                path: module_path.to_path_buf(),
                reason: "boom".into(),
            })
        }
    }

    #[test]
    fn test_loader_failure_never_aborts_discovery() {
        let root = tempfile::tempdir().unwrap();
        let app = root.path().join("app");
        let tool = app.join("node_modules/rnpm");
        std::fs::create_dir_all(app.join("node_modules/rnpm-plugin-broken")).unwrap();
        std::fs::create_dir_all(&tool).unwrap();
        std::fs::write(
            app.join("package.json"),
            r#"{"dependencies":{"rnpm-plugin-broken":"*"}}"#,
        )
        .unwrap();
        std::fs::write(tool.join("package.json"), "{}").unwrap();

        let config = DiscoveryConfig::for_tool("rnpm", &app, tool.join("src"));
        let commands = CommandDiscovery::with_loader(config, FailingLoader)
            .commands()
            .unwrap();
        assert!(commands.is_empty());
    }
}
