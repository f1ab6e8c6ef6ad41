use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted outcome of one completed classification. The message is the
/// original raw input as received, not its normalized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: Option<i64>,
    pub message: String,
    pub sentiment: String,
    pub created_at: DateTime<Utc>,
}

impl ResultRecord {
    pub fn new(message: String, sentiment: String) -> Self {
        Self {
            id: None,
            message,
            sentiment,
            created_at: Utc::now(),
        }
    }
}
