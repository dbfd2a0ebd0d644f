//! Generic persistence contract and its storage backends.
//!
//! Handlers never touch a backend directly: the service receives an
//! `Arc<dyn Repository<..>>` at startup and goes through it for every call.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryRepository;
pub use postgres::PgEmployeeRepository;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage lock poisoned")]
    Poisoned,
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

pub type RepoResult<T> = Result<T, RepoError>;

/// A persisted row whose integer identity is assigned by storage.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Option<i64>;
    fn with_id(self, id: i64) -> Self;
}

/// CRUD over entities of type `T` keyed by `K`.
///
/// Every call is atomic with respect to other calls on the same repository.
#[async_trait]
pub trait Repository<T, K>: Send + Sync
where
    T: Send + Sync + 'static,
    K: Send + 'static,
{
    /// Inserts when `entity` has no identity, otherwise overwrites the row
    /// with that identity. Returns the stored entity with its identity set.
    /// Overwriting an identity that no longer exists is `NotFound`.
    async fn save(&self, entity: T) -> RepoResult<T>;

    async fn find_by_id(&self, id: K) -> RepoResult<Option<T>>;

    /// All rows in identity order.
    async fn find_all(&self) -> RepoResult<Vec<T>>;

    /// Removes the row matching the entity's identity. `false` when nothing
    /// was removed.
    async fn delete(&self, entity: &T) -> RepoResult<bool>;

    async fn count(&self) -> RepoResult<u64>;
}
