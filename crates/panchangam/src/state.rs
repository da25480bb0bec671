//! Application state with repository-based storage.
//!
//! Handlers receive a clone of [`AppState`]. Storage sits behind repository
//! trait objects; which backend fills them is chosen by Cargo feature.

use std::sync::Arc;

use panchangam_core::storage::{AlmanacRepository, SubscriptionRepository};

use crate::config::Config;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "postgrest"))]
compile_error!("Cannot enable both 'sqlite' and 'postgrest' storage features");

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(all(feature = "postgrest", feature = "inmemory"))]
compile_error!("Cannot enable both 'postgrest' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite", feature = "postgrest")))]
compile_error!("Must enable exactly one storage feature: 'inmemory', 'sqlite', or 'postgrest'");

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Daily almanac rows.
    pub almanac_repo: Arc<dyn AlmanacRepository>,
    /// Subscriptions and their preferences.
    pub subscription_repo: Arc<dyn SubscriptionRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    fn build<R>(repo: Arc<R>, config: Config) -> Self
    where
        R: AlmanacRepository + SubscriptionRepository + 'static,
    {
        Self {
            almanac_repo: repo.clone(),
            subscription_repo: repo,
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Factory functions for each storage backend
// ============================================================================

#[cfg(any(feature = "inmemory", test))]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState backed by an empty in-memory repository.
        pub fn in_memory(config: Config) -> Self {
            Self::build(Arc::new(InMemoryRepository::new()), config)
        }

        #[cfg(feature = "inmemory")]
        pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage");
            Ok(Self::in_memory(config))
        }
    }

    impl Default for AppState {
        fn default() -> Self {
            Self::in_memory(Config::default())
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
            let repo = SqliteRepository::new(&config.sqlite_path).await?;
            tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
            Ok(Self::build(Arc::new(repo), config))
        }
    }
}

#[cfg(feature = "postgrest")]
mod postgrest {
    use super::*;
    use crate::storage::PostgrestRepository;

    impl AppState {
        /// Creates AppState backed by the PostgREST row API.
        pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
            let url = config
                .postgrest_url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("POSTGREST_URL must be set"))?;
            let api_key = config
                .postgrest_api_key
                .clone()
                .ok_or_else(|| anyhow::anyhow!("POSTGREST_API_KEY must be set"))?;
            let repo = PostgrestRepository::new(&url, &api_key)?;
            tracing::info!(%url, "Using PostgREST storage");
            Ok(Self::build(Arc::new(repo), config))
        }
    }
}
