/*!
 * Common test utilities for the langlearn test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Routes library logging to the test harness; set RUST_LOG to see it
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Config with German and Korean only, Korean on the neural engine
pub fn create_test_config(dir: &Path) -> Result<PathBuf> {
    let content = r#"{
  "default_language": "deu",
  "log_level": "warn",
  "languages": [
    {
      "code": "de",
      "tts": { "voice_id": "Vicki", "language_code": "de-DE" },
      "template_dir": "cards/german"
    },
    {
      "code": "kor",
      "tts": { "voice_id": "Seoyeon", "language_code": "ko-KR", "engine": "neural" }
    }
  ]
}"#;
    create_test_file(dir, "conf.json", content)
}

/// Owned CSV row from string literals
pub fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|field| field.to_string()).collect()
}

pub fn german_noun_row() -> Vec<&'static str> {
    vec!["Haus", "das", "house", "Häuser", "Das Haus ist groß.", ""]
}

pub fn korean_noun_row() -> Vec<&'static str> {
    vec![
        "사과",
        "sagwa",
        "apple",
        "개",
        "food",
        "사과를 먹어요.",
        "I eat an apple.",
        "",
        "",
    ]
}

pub fn russian_noun_row() -> Vec<&'static str> {
    vec![
        "брат",
        "brother",
        "masculine",
        "брата",
        "Мой брат дома.",
        "",
        "animate",
    ]
}
