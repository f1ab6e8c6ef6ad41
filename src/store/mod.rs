mod sqlite;
mod types;

pub use sqlite::SqliteResultStore;
pub use types::ResultRecord;

use crate::Result;
use async_trait::async_trait;

/// Durable append-only log of classification results.
///
/// Records are never updated or deleted; `list_all` returns them in insertion
/// order. Every durability failure surfaces as a `Persistence` error rather
/// than being swallowed, so a failed save never looks like a success.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Creates the underlying storage structures if absent. Idempotent and
    /// safe to call on every startup.
    async fn ensure_schema(&self) -> Result<()>;

    /// Appends a record and returns it with its assigned identifier.
    async fn save(&self, record: ResultRecord) -> Result<ResultRecord>;

    /// Returns every persisted record in insertion order; an empty store
    /// yields an empty vec, not an error.
    async fn list_all(&self) -> Result<Vec<ResultRecord>>;
}
