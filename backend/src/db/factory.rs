//! Repository factory for dependency injection.
//!
//! Builds the repository the server runs against from an explicit type, the
//! environment, or `repository.toml`.

use log::warn;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
#[cfg(feature = "remote-repo")]
use super::repositories::{RemoteConfig, RemoteRepository};
use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::models::load_seed_file;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
    /// REST client for the upstream API
    Remote,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("local", "remote", "rest").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            "remote" | "rest" => Ok(Self::Remote),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Repository type from the environment, rejecting unknown values.
    ///
    /// Reads `REPOSITORY_TYPE`. Without it, defaults to Remote when
    /// `POOL_HUB_API_URL` is set, otherwise Local.
    pub fn try_from_env() -> Result<Self, String> {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse();
        }

        if std::env::var("POOL_HUB_API_URL").is_ok() {
            Ok(Self::Remote)
        } else {
            Ok(Self::Local)
        }
    }

    /// Like [`try_from_env`](Self::try_from_env), falling back to Local with a
    /// warning when `REPOSITORY_TYPE` is not recognised.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|e| {
            warn!("{}; falling back to the local repository", e);
            Self::Local
        })
    }
}

/// Repository factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a local repository loaded from a seed JSON file.
    pub fn create_local_from_seed<P: AsRef<Path>>(
        seed_path: P,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let seed_path = seed_path.as_ref();
        let seed = load_seed_file(seed_path).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to load seed {}: {:#}",
                seed_path.display(),
                e
            ))
        })?;
        Ok(Arc::new(LocalRepository::from_seed(seed)))
    }

    /// Create a REST-backed repository.
    #[cfg(feature = "remote-repo")]
    pub fn create_remote(config: &RemoteConfig) -> RepositoryResult<Arc<dyn FullRepository>> {
        Ok(Arc::new(RemoteRepository::new(config.clone())?))
    }

    /// Create repository from environment configuration.
    ///
    /// Local repositories load `POOL_HUB_SEED` when it is set; remote ones
    /// read `POOL_HUB_API_URL`. An unrecognised `REPOSITORY_TYPE` is a
    /// configuration error, as it is in `repository.toml`.
    pub fn from_env() -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo_type = RepositoryType::try_from_env().map_err(|e| {
            RepositoryError::configuration(format!("Invalid REPOSITORY_TYPE: {}", e))
        })?;
        match repo_type {
            RepositoryType::Local => match std::env::var("POOL_HUB_SEED") {
                Ok(path) if !path.trim().is_empty() => Self::create_local_from_seed(path.trim()),
                _ => Ok(Self::create_local()),
            },
            RepositoryType::Remote => {
                #[cfg(feature = "remote-repo")]
                {
                    let config = RemoteConfig::from_env().map_err(RepositoryError::configuration)?;
                    Self::create_remote(&config)
                }
                #[cfg(not(feature = "remote-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "Remote repository feature not enabled",
                    ))
                }
            }
        }
    }

    /// Create repository from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config)
    }

    /// Create repository from the default configuration file location.
    pub fn from_default_config() -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = RepositoryConfig::from_default_location()?;
        Self::from_repository_config(&config)
    }

    /// Create repository from a RepositoryConfig instance.
    pub fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        match repo_type {
            RepositoryType::Local => match &config.local.seed_path {
                Some(path) => Self::create_local_from_seed(path),
                None => Ok(Self::create_local()),
            },
            RepositoryType::Remote => {
                #[cfg(feature = "remote-repo")]
                {
                    let remote = config.to_remote_config()?.ok_or_else(|| {
                        RepositoryError::configuration(
                            "Remote repository requires [remote] settings",
                        )
                    })?;
                    Self::create_remote(&remote)
                }
                #[cfg(not(feature = "remote-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "Remote repository feature not enabled",
                    ))
                }
            }
        }
    }

    /// Resolve the repository the server should use: `repository.toml` when
    /// present, otherwise the environment.
    pub fn from_default_config_or_env() -> RepositoryResult<Arc<dyn FullRepository>> {
        match RepositoryConfig::from_default_location() {
            Ok(config) => Self::from_repository_config(&config),
            Err(_) => Self::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::ScheduleRepository;

    #[test]
    fn test_repository_type_from_str() {
        assert_eq!("local".parse::<RepositoryType>(), Ok(RepositoryType::Local));
        assert_eq!(" REMOTE ".parse::<RepositoryType>(), Ok(RepositoryType::Remote));
        assert_eq!("rest".parse::<RepositoryType>(), Ok(RepositoryType::Remote));
        assert!("postgres".parse::<RepositoryType>().is_err());
    }

    #[tokio::test]
    async fn test_create_local_is_empty() {
        let repo = RepositoryFactory::create_local();
        assert!(repo.health_check().await.unwrap());
        assert!(repo.list_work_orders().await.unwrap().is_empty());
    }

    #[test]
    fn test_missing_seed_is_configuration_error() {
        let err = RepositoryFactory::create_local_from_seed("/nonexistent/seed.json")
            .err()
            .unwrap();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }

    #[cfg(not(feature = "remote-repo"))]
    #[test]
    fn test_remote_requires_feature() {
        let config: RepositoryConfig =
            toml::from_str("[repository]\ntype = \"remote\"\n").unwrap();
        assert!(RepositoryFactory::from_repository_config(&config).is_err());
    }
}
