use crate::{
    classifier::{Classifier, Prediction},
    preprocessor::Preprocessor,
    store::{ResultRecord, ResultStore},
    Error, Result,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Per-request orchestration: preprocess → classify → persist → respond.
///
/// All three components are shared read-only; the store is the only shared
/// mutable resource and each save is its own transaction. A result is
/// persisted only after a successful prediction, and the persisted message is
/// always the raw input as received, so the stored log reflects what callers
/// actually sent.
pub struct ClassificationPipeline {
    preprocessor: Arc<Preprocessor>,
    classifier: Arc<dyn Classifier>,
    store: Arc<dyn ResultStore>,
}

impl ClassificationPipeline {
    pub fn new(
        preprocessor: Arc<Preprocessor>,
        classifier: Arc<dyn Classifier>,
        store: Arc<dyn ResultStore>,
    ) -> Self {
        Self {
            preprocessor,
            classifier,
            store,
        }
    }

    /// Runs one classification request to completion or failure. The error
    /// variant tags which stage failed; a failed request appends nothing to
    /// the store.
    pub async fn classify(&self, raw_message: &str) -> Result<Prediction> {
        let normalized = self.preprocessor.normalize(raw_message);
        debug!("Normalized {} chars to {} chars", raw_message.len(), normalized.len());

        let prediction = self
            .classifier
            .predict(&normalized)
            .map_err(into_inference)?;

        let record = ResultRecord::new(raw_message.to_string(), prediction.sentiment.clone());
        let stored = self.store.save(record).await.map_err(into_persistence)?;

        info!(
            "Classified message as '{}' (result id {:?})",
            prediction.sentiment, stored.id
        );
        Ok(prediction)
    }

    /// Read path: returns every persisted result. Bypasses preprocessing and
    /// inference entirely.
    pub async fn results(&self) -> Result<Vec<ResultRecord>> {
        self.store.list_all().await.map_err(into_persistence)
    }
}

fn into_inference(e: Error) -> Error {
    match e {
        Error::Inference(_) => e,
        other => Error::inference(other.to_string()),
    }
}

fn into_persistence(e: Error) -> Error {
    match e {
        Error::Persistence(_) => e,
        other => Error::persistence(other.to_string()),
    }
}
