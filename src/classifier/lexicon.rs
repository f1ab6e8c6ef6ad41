use super::{Classifier, Prediction};
use crate::{Error, Result};
use aho_corasick::AhoCorasick;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Metadata file shipped alongside the lexicons in the model directory.
#[derive(Debug, Deserialize)]
struct ModelManifest {
    name: String,
    labels: Vec<String>,
}

/// Lexicon-based sentiment classifier loaded from a model directory.
///
/// The artifact layout is `model.json` (name + label set) plus `positive.txt`
/// and `negative.txt` with one term per line. Matching is case-insensitive
/// substring search over prebuilt automata, so `predict` is lock-free and
/// safe for concurrent use.
pub struct LexiconClassifier {
    name: String,
    labels: Vec<String>,
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl LexiconClassifier {
    /// Loads the model artifact at `dir`. Any missing, unreadable, or
    /// incompatible file is a startup-fatal `ModelLoad` error.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::model_load(format!(
                "Model directory does not exist: {}",
                dir.display()
            )));
        }

        let manifest_path = dir.join("model.json");
        let manifest_str = std::fs::read_to_string(&manifest_path).map_err(|e| {
            Error::model_load(format!("Failed to read {}: {}", manifest_path.display(), e))
        })?;
        let manifest: ModelManifest = serde_json::from_str(&manifest_str).map_err(|e| {
            Error::model_load(format!("Invalid model manifest {}: {}", manifest_path.display(), e))
        })?;
        if manifest.labels.is_empty() {
            return Err(Error::model_load("Model manifest declares no labels"));
        }

        let positive = Self::build_matcher(&dir.join("positive.txt"))?;
        let negative = Self::build_matcher(&dir.join("negative.txt"))?;

        info!(
            "Loaded model '{}' with {} labels from {}",
            manifest.name,
            manifest.labels.len(),
            dir.display()
        );

        Ok(Self {
            name: manifest.name,
            labels: manifest.labels,
            positive,
            negative,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn build_matcher(path: &Path) -> Result<AhoCorasick> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::model_load(format!("Failed to read {}: {}", path.display(), e)))?;

        let terms: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        if terms.is_empty() {
            return Err(Error::model_load(format!(
                "Lexicon is empty: {}",
                path.display()
            )));
        }

        AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&terms)
            .map_err(|e| {
                Error::model_load(format!("Failed to build matcher from {}: {}", path.display(), e))
            })
    }

    fn label_or_first(&self, wanted: &str) -> String {
        if self.labels.iter().any(|l| l == wanted) {
            wanted.to_string()
        } else {
            self.labels[0].clone()
        }
    }
}

impl Classifier for LexiconClassifier {
    fn predict(&self, normalized: &str) -> Result<Prediction> {
        let positive_hits = self.positive.find_iter(normalized).count() as f32;
        let negative_hits = self.negative.find_iter(normalized).count() as f32;
        let total = positive_hits + negative_hits;

        let prediction = if total == 0.0 {
            Prediction {
                sentiment: self.label_or_first("neutral"),
                confidence: 0.5,
            }
        } else {
            let score = positive_hits / total;
            let sentiment = if score >= 0.5 {
                self.label_or_first("positive")
            } else {
                self.label_or_first("negative")
            };
            Prediction {
                sentiment,
                confidence: score.max(1.0 - score),
            }
        };

        debug!(
            "Predicted '{}' ({:.2}) from {} positive / {} negative hits",
            prediction.sentiment, prediction.confidence, positive_hits, negative_hits
        );

        Ok(prediction)
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }
}
