use async_trait::async_trait;
use sentiment_rust::{
    classifier::{Classifier, Prediction},
    store::{ResultRecord, ResultStore},
    Error, Result,
};
use std::sync::{Arc, Mutex};

/// Stub classifier returning a fixed label, recording every input it sees.
pub struct StubClassifier {
    label: String,
    labels: Vec<String>,
    pub inputs: Arc<Mutex<Vec<String>>>,
}

impl StubClassifier {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            labels: vec![label.clone()],
            label,
            inputs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn seen_inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

impl Classifier for StubClassifier {
    fn predict(&self, normalized: &str) -> Result<Prediction> {
        self.inputs.lock().unwrap().push(normalized.to_string());
        Ok(Prediction {
            sentiment: self.label.clone(),
            confidence: 0.9,
        })
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Classifier whose every prediction faults.
pub struct FailingClassifier {
    labels: Vec<String>,
}

impl FailingClassifier {
    pub fn new() -> Self {
        Self {
            labels: vec!["positive".to_string()],
        }
    }
}

impl Classifier for FailingClassifier {
    fn predict(&self, _normalized: &str) -> Result<Prediction> {
        Err(Error::inference("model fault"))
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// In-memory result store for tests.
pub struct MemoryStore {
    records: Mutex<Vec<ResultRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn save(&self, record: ResultRecord) -> Result<ResultRecord> {
        let mut records = self.records.lock().unwrap();
        let stored = ResultRecord {
            id: Some(records.len() as i64 + 1),
            ..record
        };
        records.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<ResultRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }
}

/// Store whose every operation reports a durability failure.
pub struct FailingStore;

#[async_trait]
impl ResultStore for FailingStore {
    async fn ensure_schema(&self) -> Result<()> {
        Err(Error::persistence("connection lost"))
    }

    async fn save(&self, _record: ResultRecord) -> Result<ResultRecord> {
        Err(Error::persistence("connection lost"))
    }

    async fn list_all(&self) -> Result<Vec<ResultRecord>> {
        Err(Error::persistence("connection lost"))
    }
}
