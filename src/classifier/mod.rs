mod lexicon;

pub use lexicon::LexiconClassifier;

use crate::Result;
use serde::{Deserialize, Serialize};

/// Output of a single inference call. The sentiment label is always a member
/// of the label set declared by the loaded model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub sentiment: String,
    pub confidence: f32,
}

/// Inference seam. Implementations hold no mutable state and are shared
/// read-only across concurrent requests.
pub trait Classifier: Send + Sync {
    fn predict(&self, normalized: &str) -> Result<Prediction>;

    /// Label set the model can output, as declared by its artifact.
    fn labels(&self) -> &[String];
}
