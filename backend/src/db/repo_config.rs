//! Repository configuration file support.
//!
//! Reads `repository.toml`:
//!
//! ```toml
//! [repository]
//! type = "local"
//!
//! [local]
//! seed_path = "data/seed.json"
//!
//! [remote]
//! base_url = "https://hub.example.com"
//! timeout_secs = 15
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub local: LocalSettings,
    #[serde(default)]
    pub remote: RemoteSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// In-memory repository settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalSettings {
    /// Seed JSON to load at startup. Relative paths resolve against the
    /// config file's directory.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

/// Upstream API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSettings {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    15
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// A relative `local.seed_path` is rewritten relative to the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let mut config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        if let (Some(seed), Some(dir)) = (config.local.seed_path.as_mut(), path.parent()) {
            if seed.is_relative() {
                *seed = dir.join(&*seed);
            }
        }

        Ok(config)
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = [
            PathBuf::from("repository.toml"),
            PathBuf::from("backend/repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using repository config {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No repository.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// Remote connection settings, if this is a remote configuration.
    #[cfg(feature = "remote-repo")]
    pub fn to_remote_config(
        &self,
    ) -> Result<Option<crate::db::repositories::RemoteConfig>, RepositoryError> {
        let repo_type = self.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        if repo_type != RepositoryType::Remote {
            return Ok(None);
        }

        if self.remote.base_url.trim().is_empty() {
            return Err(RepositoryError::configuration(
                "Remote repository requires 'remote.base_url' setting",
            ));
        }

        Ok(Some(
            crate::db::repositories::RemoteConfig::new(self.remote.base_url.trim())
                .with_timeout(self.remote.timeout_secs),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_local_config() {
        let toml = r#"
[repository]
type = "local"
"#;

        let config: RepositoryConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.repository.repo_type, "local");
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
        assert!(config.local.seed_path.is_none());
        assert_eq!(config.remote.timeout_secs, 15);
    }

    #[test]
    fn test_unknown_type_is_reported() {
        let config: RepositoryConfig = toml::from_str("[repository]\ntype = \"mongo\"\n").unwrap();
        assert!(config.repository_type().is_err());
    }

    #[test]
    fn test_seed_path_resolves_against_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repository.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[repository]\ntype = \"local\"\n\n[local]\nseed_path = \"data/seed.json\""
        )
        .unwrap();

        let config = RepositoryConfig::from_file(&path).unwrap();
        assert_eq!(
            config.local.seed_path.unwrap(),
            dir.path().join("data/seed.json")
        );
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = RepositoryConfig::from_file("/nonexistent/repository.toml").unwrap_err();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }

    #[cfg(feature = "remote-repo")]
    #[test]
    fn test_parse_remote_config() {
        let toml = r#"
[repository]
type = "remote"

[remote]
base_url = "https://hub.example.com/"
timeout_secs = 5
"#;

        let config: RepositoryConfig = toml::from_str(toml).unwrap();
        let remote = config.to_remote_config().unwrap().unwrap();
        assert_eq!(remote.base_url, "https://hub.example.com");
        assert_eq!(remote.timeout_secs, 5);
    }

    #[cfg(feature = "remote-repo")]
    #[test]
    fn test_remote_requires_base_url() {
        let config: RepositoryConfig =
            toml::from_str("[repository]\ntype = \"remote\"\n").unwrap();
        assert!(config.to_remote_config().is_err());
    }
}
