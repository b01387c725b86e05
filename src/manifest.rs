use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::DiscoveryError;

/// A `package.json`-shaped manifest.
///
/// Dependency values are version constraints, opaque to discovery; only the
/// presence of a name matters. Key order follows the file, so candidate
/// iteration matches declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Entry file exporting the package's commands, relative to the package
    /// root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub dependencies: Map<String, Value>,
    #[serde(
        default,
        rename = "devDependencies",
        skip_serializing_if = "Map::is_empty"
    )]
    pub dev_dependencies: Map<String, Value>,
}

impl PackageManifest {
    /// Reads the manifest in `dir`. A missing file is `Ok(None)`, not an
    /// error; discovery treats it as an empty dependency set.
    pub fn read(dir: &Path, manifest_file: &str) -> Result<Option<Self>, DiscoveryError> {
        let path = dir.join(manifest_file);
        if !path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| DiscoveryError::InvalidManifest {
                path,
                reason: e.to_string(),
            })
    }

    /// Declared dependency names, `dependencies` first, then
    /// `devDependencies`, each in declaration order.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MANIFEST_FILE;
    use tempfile::tempdir;

    #[test]
    fn test_read_manifest() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_MANIFEST_FILE),
            r#"{"name":"my-app","version":"1.0.0","dependencies":{"left-pad":"^1.0"}}"#,
        )
        .unwrap();

        let manifest = PackageManifest::read(dir.path(), DEFAULT_MANIFEST_FILE)
            .unwrap()
            .unwrap();
        assert_eq!(manifest.name.as_deref(), Some("my-app"));
        assert_eq!(manifest.version.as_deref(), Some("1.0.0"));
        assert!(manifest.dependencies.contains_key("left-pad"));
    }

    #[test]
    fn test_read_missing_manifest() {
        let dir = tempdir().unwrap();
        let manifest = PackageManifest::read(dir.path(), DEFAULT_MANIFEST_FILE).unwrap();
        assert!(manifest.is_none());
    }

    #[test]
    fn test_read_invalid_manifest() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_MANIFEST_FILE), "not json").unwrap();

        let err = PackageManifest::read(dir.path(), DEFAULT_MANIFEST_FILE).unwrap_err();
        assert!(matches!(err, DiscoveryError::InvalidManifest { .. }));
    }

    #[test]
    fn test_dependency_names_declaration_order() {
        let manifest: PackageManifest = serde_json::from_str(
            r#"{
                "dependencies": {"zeta": "*", "alpha": "*", "mid": "*"},
                "devDependencies": {"beta": "*"}
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = manifest.dependency_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid", "beta"]);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let manifest: PackageManifest = serde_json::from_str(
            r#"{"name":"x","scripts":{"test":"mocha"},"private":true}"#,
        )
        .unwrap();
        assert_eq!(manifest.name.as_deref(), Some("x"));
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn test_empty_manifest_object() {
        let manifest: PackageManifest = serde_json::from_str("{}").unwrap();
        assert!(manifest.name.is_none());
        assert_eq!(manifest.dependency_names().count(), 0);
    }
}
