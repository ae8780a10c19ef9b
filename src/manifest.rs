use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;

use crate::error::{NextSemverError, Result};

/// Manifest formats recognized when searching a package root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    PackageJson,
    CargoToml,
}

/// A loaded package manifest.
///
/// Holds the parsed document so the declared version can be read and,
/// in the write-back variant, replaced and saved. Whether write-back
/// happens is decided by the caller, never here.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    format: ManifestFormat,
    json: Option<serde_json::Value>,
    toml: Option<toml::Table>,
}

impl Manifest {
    /// Locates and loads the manifest under a package directory.
    ///
    /// Checks for `package.json` first, then `Cargo.toml`, matching the
    /// original automation's preference when both exist.
    ///
    /// # Arguments
    /// * `dir` - Directory to search (workspace root joined with package_root)
    ///
    /// # Returns
    /// * `Ok(Manifest)` - Loaded manifest
    /// * `Err(MissingManifest)` - If no recognized manifest file exists
    pub fn locate(dir: &Path) -> Result<Self> {
        let package_json = dir.join("package.json");
        if package_json.exists() {
            return Manifest::load(&package_json, ManifestFormat::PackageJson);
        }

        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists() {
            return Manifest::load(&cargo_toml, ManifestFormat::CargoToml);
        }

        Err(NextSemverError::missing_manifest(format!(
            "No package.json or Cargo.toml under '{}'",
            dir.display()
        )))
    }

    /// Loads a manifest from an explicit path.
    pub fn load(path: &Path, format: ManifestFormat) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        let (json, toml) = match format {
            ManifestFormat::PackageJson => {
                let value: serde_json::Value = serde_json::from_str(&contents).map_err(|e| {
                    NextSemverError::missing_manifest(format!(
                        "Cannot parse '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                (Some(value), None)
            }
            ManifestFormat::CargoToml => {
                let table: toml::Table = contents.parse().map_err(|e| {
                    NextSemverError::missing_manifest(format!(
                        "Cannot parse '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                (None, Some(table))
            }
        };

        Ok(Manifest {
            path: path.to_path_buf(),
            format,
            json,
            toml,
        })
    }

    /// Path of the underlying manifest file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format of the underlying manifest file
    pub fn format(&self) -> ManifestFormat {
        self.format
    }

    /// Returns the declared version string.
    ///
    /// # Returns
    /// * `Ok(&str)` - The raw version field, unvalidated
    /// * `Err(MissingManifest)` - If the manifest has no version field
    pub fn version(&self) -> Result<&str> {
        let version = match self.format {
            ManifestFormat::PackageJson => self
                .json
                .as_ref()
                .and_then(|v| v.get("version"))
                .and_then(|v| v.as_str()),
            ManifestFormat::CargoToml => self
                .toml
                .as_ref()
                .and_then(|t| t.get("package"))
                .and_then(|p| p.get("version"))
                .and_then(|v| v.as_str()),
        };

        version.ok_or_else(|| {
            NextSemverError::missing_manifest(format!(
                "'{}' has no version field",
                self.path.display()
            ))
        })
    }

    /// Replaces the declared version in the in-memory document.
    pub fn set_version(&mut self, version: &Version) {
        let rendered = version.to_string();
        match self.format {
            ManifestFormat::PackageJson => {
                if let Some(serde_json::Value::Object(map)) = self.json.as_mut() {
                    map.insert(
                        "version".to_string(),
                        serde_json::Value::String(rendered),
                    );
                }
            }
            ManifestFormat::CargoToml => {
                if let Some(toml::Value::Table(package)) =
                    self.toml.as_mut().and_then(|t| t.get_mut("package"))
                {
                    package.insert("version".to_string(), toml::Value::String(rendered));
                }
            }
        }
    }

    /// Writes the document back to its file.
    pub fn save(&self) -> Result<()> {
        let contents = match self.format {
            ManifestFormat::PackageJson => {
                let value = self.json.as_ref().ok_or_else(|| {
                    NextSemverError::missing_manifest("manifest document not loaded")
                })?;
                let mut rendered = serde_json::to_string_pretty(value).map_err(|e| {
                    NextSemverError::missing_manifest(format!("Cannot serialize manifest: {}", e))
                })?;
                rendered.push('\n');
                rendered
            }
            ManifestFormat::CargoToml => {
                let table = self.toml.as_ref().ok_or_else(|| {
                    NextSemverError::missing_manifest("manifest document not loaded")
                })?;
                toml::to_string(table).map_err(|e| {
                    NextSemverError::missing_manifest(format!("Cannot serialize manifest: {}", e))
                })?
            }
        };

        fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::clean;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_locate_package_json() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "package.json", r#"{"name": "app", "version": "1.2.3"}"#);

        let manifest = Manifest::locate(dir.path()).unwrap();
        assert_eq!(manifest.format(), ManifestFormat::PackageJson);
        assert_eq!(manifest.version().unwrap(), "1.2.3");
    }

    #[test]
    fn test_locate_cargo_toml() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "Cargo.toml",
            "[package]\nname = \"app\"\nversion = \"0.4.0\"\n",
        );

        let manifest = Manifest::locate(dir.path()).unwrap();
        assert_eq!(manifest.format(), ManifestFormat::CargoToml);
        assert_eq!(manifest.version().unwrap(), "0.4.0");
    }

    #[test]
    fn test_locate_prefers_package_json() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "package.json", r#"{"version": "1.0.0"}"#);
        write_file(&dir, "Cargo.toml", "[package]\nversion = \"2.0.0\"\n");

        let manifest = Manifest::locate(dir.path()).unwrap();
        assert_eq!(manifest.format(), ManifestFormat::PackageJson);
        assert_eq!(manifest.version().unwrap(), "1.0.0");
    }

    #[test]
    fn test_locate_missing() {
        let dir = TempDir::new().unwrap();
        let err = Manifest::locate(dir.path()).unwrap_err();
        assert!(matches!(err, NextSemverError::MissingManifest(_)));
    }

    #[test]
    fn test_version_field_missing() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "package.json", r#"{"name": "app"}"#);

        let manifest = Manifest::locate(dir.path()).unwrap();
        let err = manifest.version().unwrap_err();
        assert!(err.to_string().contains("no version field"));
    }

    #[test]
    fn test_unparseable_manifest() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "package.json", "{ not json");

        let err = Manifest::locate(dir.path()).unwrap_err();
        assert!(matches!(err, NextSemverError::MissingManifest(_)));
    }

    #[test]
    fn test_write_back_package_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "package.json", r#"{"name": "app", "version": "1.0.0"}"#);

        let mut manifest = Manifest::locate(dir.path()).unwrap();
        manifest.set_version(&clean("1.0.1").unwrap());
        manifest.save().unwrap();

        let reloaded = Manifest::load(&path, ManifestFormat::PackageJson).unwrap();
        assert_eq!(reloaded.version().unwrap(), "1.0.1");
    }

    #[test]
    fn test_write_back_cargo_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "Cargo.toml",
            "[package]\nname = \"app\"\nversion = \"1.0.0\"\nedition = \"2021\"\n",
        );

        let mut manifest = Manifest::locate(dir.path()).unwrap();
        manifest.set_version(&clean("2.0.0").unwrap());
        manifest.save().unwrap();

        let reloaded = Manifest::load(&path, ManifestFormat::CargoToml).unwrap();
        assert_eq!(reloaded.version().unwrap(), "2.0.0");
        // Other fields survive the round trip
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("edition"));
    }

    #[test]
    fn test_write_back_preserves_other_json_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "package.json",
            r#"{"name": "app", "version": "1.0.0", "private": true}"#,
        );

        let mut manifest = Manifest::locate(dir.path()).unwrap();
        manifest.set_version(&clean("1.0.1").unwrap());
        manifest.save().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["name"], "app");
        assert_eq!(value["private"], true);
        assert_eq!(value["version"], "1.0.1");
    }
}
