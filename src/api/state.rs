use std::sync::Arc;

use crate::{
    config::{Config, StorageBackend},
    db::{
        self,
        seed::{demo_movies, demo_shows},
        ContentCatalog, InMemoryCatalog, InMemoryListStore, ListStore, PgCatalog, PgListStore,
        ResultCache,
    },
    services::MyListService,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub my_list: Arc<MyListService>,
}

impl AppState {
    pub fn new(my_list: MyListService) -> Self {
        Self {
            my_list: Arc::new(my_list),
        }
    }

    /// Builds the storage backends named by the configuration and wires the service
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let cache = ResultCache::new(config.cache_max_entries, config.cache_ttl());

        let (store, catalog): (Arc<dyn ListStore>, Arc<dyn ContentCatalog>) =
            match config.storage_backend {
                StorageBackend::Postgres => {
                    let pool =
                        db::create_pool(&config.database_url, config.db_max_connections).await?;
                    db::run_migrations(&pool).await?;

                    let catalog = PgCatalog::new(pool.clone());
                    if config.seed_catalog {
                        catalog.seed(&demo_movies(), &demo_shows()).await?;
                    }

                    (Arc::new(PgListStore::new(pool)), Arc::new(catalog))
                }
                StorageBackend::Memory => {
                    tracing::warn!("Using in-memory storage; list data is lost on restart");
                    (
                        Arc::new(InMemoryListStore::new()),
                        Arc::new(InMemoryCatalog::with_content(demo_movies(), demo_shows())),
                    )
                }
            };

        tracing::info!(
            backend = ?config.storage_backend,
            cache_ttl_secs = config.cache_ttl_secs,
            cache_max_entries = config.cache_max_entries,
            "Application state initialized"
        );

        Ok(Self::new(MyListService::new(store, catalog, cache)))
    }
}
