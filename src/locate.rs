use std::path::{Path, PathBuf};

/// Resolves a plugin package directory the way nested dependency resolution
/// does: probe `<dir>/<modules_dir>/<name>` for the base directory and each
/// of its ancestors, first hit wins.
///
/// Returns `None` when the walk is exhausted; the caller skips the plugin.
pub fn locate_package(name: &str, base: &Path, modules_dir: &str) -> Option<PathBuf> {
    base.ancestors()
        .map(|dir| dir.join(modules_dir).join(name))
        .find(|candidate| candidate.is_dir())
}
