use sentiment_rust::config::{
    Config, LogsConfig, ModelConfig, PreprocessorSettings, ServerConfig,
};
use std::path::Path;
use tempfile::TempDir;

/// Create a test configuration with sensible defaults
pub fn create_test_config(model_dir: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8001,
            database_path: ":memory:".to_string(),
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        model: ModelConfig {
            dir: model_dir.to_string(),
        },
        preprocessing: PreprocessorSettings::default(),
    }
}

/// Write a small but complete model artifact into `dir`
pub fn write_test_model(dir: &Path) {
    std::fs::write(
        dir.join("model.json"),
        r#"{"name": "test-lexicon", "labels": ["negative", "neutral", "positive"]}"#,
    )
    .unwrap();
    std::fs::write(dir.join("positive.txt"), "love\ngreat\nexcellent\n").unwrap();
    std::fs::write(dir.join("negative.txt"), "hate\nterrible\nawful\n").unwrap();
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}
