use super::{ResultRecord, ResultStore};
use crate::{Error, Result};
use async_trait::async_trait;
use libsql::{Builder, Database};
use tracing::{debug, info};

/// libSQL-backed result store. Each call acquires its own connection, so a
/// save is one independent transaction scoped to its request.
pub struct SqliteResultStore {
    db: Database,
}

impl SqliteResultStore {
    pub async fn new(db_path: &str) -> Result<Self> {
        let db = Builder::new_local(db_path).build().await?;
        info!("Opened result database: {}", db_path);
        Ok(Self { db })
    }
}

#[async_trait]
impl ResultStore for SqliteResultStore {
    async fn ensure_schema(&self) -> Result<()> {
        let conn = self.db.connect()?;
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS results (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                message TEXT NOT NULL,
                sentiment TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )
            "#,
            (),
        )
        .await?;
        Ok(())
    }

    async fn save(&self, record: ResultRecord) -> Result<ResultRecord> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO results (message, sentiment, created_at) VALUES (?, ?, ?)",
            (
                record.message.as_str(),
                record.sentiment.as_str(),
                record.created_at.to_rfc3339(),
            ),
        )
        .await?;

        let id = conn.last_insert_rowid();
        debug!("Saved result {} with sentiment '{}'", id, record.sentiment);

        Ok(ResultRecord {
            id: Some(id),
            ..record
        })
    }

    async fn list_all(&self) -> Result<Vec<ResultRecord>> {
        let conn = self.db.connect()?;
        let mut rows = conn
            .query(
                "SELECT id, message, sentiment, created_at FROM results ORDER BY id ASC",
                (),
            )
            .await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            let created_at_str: String = row.get(3)?;
            let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
                .map_err(|e| Error::internal(format!("Failed to parse timestamp: {e}")))?
                .with_timezone(&chrono::Utc);

            records.push(ResultRecord {
                id: Some(row.get(0)?),
                message: row.get(1)?,
                sentiment: row.get(2)?,
                created_at,
            });
        }

        debug!("Retrieved {} results", records.len());
        Ok(records)
    }
}
