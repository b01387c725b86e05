use std::path::{Path, PathBuf};

use crate::DiscoveryError;
use crate::config::DiscoveryConfig;
use crate::manifest::PackageManifest;

/// One place to look for plugins: a base directory for package resolution
/// plus the manifest declaring candidates.
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub base_dir: PathBuf,
    pub manifest: PackageManifest,
}

/// Determines the ordered contexts for one discovery pass.
///
/// The application context always comes first, so its commands win name
/// collisions. The tool's own context is added only for global installs: a
/// tool nested in the application's dependency tree shares that tree, and its
/// plugins are declared in the application manifest. A tool whose manifest
/// resolves to the application root itself (development checkout) contributes
/// one context, not the same one twice.
pub fn resolve_contexts(config: &DiscoveryConfig) -> Result<Vec<SearchContext>, DiscoveryError> {
    let tool_dir = find_manifest_dir(&config.tool_root, &config.manifest_file).ok_or_else(
        || DiscoveryError::ToolRootNotFound {
            path: config.tool_root.clone(),
        },
    )?;

    let mut contexts = vec![read_context(&config.app_root, config)];

    if !is_local_install(&tool_dir, config) && tool_dir != config.app_root {
        contexts.push(read_context(&tool_dir, config));
    }

    tracing::debug!(
        tool_dir = %tool_dir.display(),
        contexts = contexts.len(),
        "resolved search contexts"
    );

    Ok(contexts)
}

/// Nearest ancestor of `start` (inclusive) containing the manifest file.
fn find_manifest_dir(start: &Path, manifest_file: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(manifest_file).is_file())
        .map(Path::to_path_buf)
}

/// Local install = the tool's package sits inside the application's own
/// dependency directory. The check is lexical and component-wise; callers
/// that need symlink-transparent detection pass canonicalized roots.
fn is_local_install(tool_dir: &Path, config: &DiscoveryConfig) -> bool {
    tool_dir.starts_with(config.app_root.join(&config.modules_dir))
}

fn read_context(dir: &Path, config: &DiscoveryConfig) -> SearchContext {
    let manifest = match PackageManifest::read(dir, &config.manifest_file) {
        Ok(Some(manifest)) => manifest,
        Ok(None) => PackageManifest::default(),
        Err(err) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %err,
                "unreadable manifest, treating as empty"
            );
            PackageManifest::default()
        }
    };
    SearchContext {
        base_dir: dir.to_path_buf(),
        manifest,
    }
}
