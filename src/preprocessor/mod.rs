use crate::{config::PreprocessorSettings, Error, Result};
use std::collections::HashSet;

/// Text normalizer applied before inference. Stateless after construction and
/// shared read-only across all concurrent requests.
///
/// Settings are validated once here; `normalize` itself never fails and
/// returns a defined output for any input, including empty and non-ASCII text.
pub struct Preprocessor {
    settings: PreprocessorSettings,
    stopwords: HashSet<String>,
}

impl Preprocessor {
    pub fn new(settings: PreprocessorSettings) -> Result<Self> {
        let mut stopwords = HashSet::new();
        for word in &settings.stopwords {
            let word = word.trim();
            if word.is_empty() {
                return Err(Error::config("Stopword entries must not be empty"));
            }
            if word.chars().any(char::is_whitespace) {
                return Err(Error::config(format!(
                    "Stopword must be a single token: '{}'",
                    word
                )));
            }
            stopwords.insert(word.to_lowercase());
        }

        Ok(Self {
            settings,
            stopwords,
        })
    }

    pub fn normalize(&self, raw: &str) -> String {
        let mut text: String = if self.settings.lowercase {
            raw.to_lowercase()
        } else {
            raw.to_string()
        };

        if self.settings.strip_punctuation {
            text = text
                .chars()
                .map(|c| {
                    if c.is_alphanumeric() || c.is_whitespace() {
                        c
                    } else {
                        ' '
                    }
                })
                .collect();
        }

        if !self.stopwords.is_empty() {
            text = text
                .split_whitespace()
                .filter(|token| !self.stopwords.contains(&token.to_lowercase()))
                .collect::<Vec<_>>()
                .join(" ");
        } else if self.settings.collapse_whitespace {
            text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        }

        text
    }
}
