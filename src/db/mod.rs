pub mod cache;
pub mod catalog;
pub mod list_store;
pub mod memory;
pub mod postgres;
pub mod seed;

mod macros;

pub use cache::{PageKey, ResultCache};
pub use catalog::{ContentCatalog, PgCatalog};
pub use list_store::{ListStore, PgListStore};
pub use memory::{InMemoryCatalog, InMemoryListStore};
pub use postgres::{create_pool, run_migrations};
