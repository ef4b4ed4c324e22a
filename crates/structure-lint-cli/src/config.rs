//! CLI configuration loaded from `structure-lint.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for this schema.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// The `[analyzer]` table of `structure-lint.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Directory to analyze, relative to the project path unless absolute.
    pub root: PathBuf,
    /// Substring patterns excluded from discovery.
    pub exclude: Vec<String>,
    /// Marker folder separating the source root from project content.
    pub source_marker: String,
    /// Respect `.gitignore` files during discovery.
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude: vec![
                "node_modules".to_owned(),
                "dist".to_owned(),
                "build".to_owned(),
            ],
            source_marker: "src".to_owned(),
            respect_gitignore: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    analyzer: AnalyzerConfig,
}

/// Default configuration file name.
pub const CONFIG_FILE: &str = "structure-lint.toml";

impl AnalyzerConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(file.analyzer)
    }

    /// Resolves configuration for a project.
    ///
    /// An explicit `--config` path must load successfully; otherwise
    /// `structure-lint.toml` in the project directory is used when present,
    /// and built-in defaults when not.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an existing config file fails to load.
    pub fn resolve(project: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let local = project.join(CONFIG_FILE);
        if local.exists() {
            tracing::debug!("using config {}", local.display());
            return Self::from_file(&local);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnalyzerConfig::resolve(dir.path(), None).unwrap();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.source_marker, "src");
        assert!(config.respect_gitignore);
    }

    #[test]
    fn loads_analyzer_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[analyzer]\nroot = \"packages/app\"\nexclude = [\"generated\"]\nsource_marker = \"app\"\nrespect_gitignore = false\n"
        )
        .unwrap();

        let config = AnalyzerConfig::resolve(dir.path(), None).unwrap();
        assert_eq!(config.root, PathBuf::from("packages/app"));
        assert_eq!(config.exclude, vec!["generated"]);
        assert_eq!(config.source_marker, "app");
        assert!(!config.respect_gitignore);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = AnalyzerConfig::resolve(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn unknown_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[analyzer]\nbogus = 1\n").unwrap();
        let err = AnalyzerConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
