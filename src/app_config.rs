use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};

use crate::language_utils;

/// Application configuration module
/// This module handles loading, validating and saving the per-language settings
/// (text-to-speech voice and card template location) the registry is built from.

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Language used when no language is given on the command line
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Per-language settings
    #[serde(default = "default_languages")]
    pub languages: Vec<LanguageSettings>,
}

/// Settings for one registered language
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LanguageSettings {
    /// ISO language code
    pub code: String,

    /// Speech synthesis settings
    pub tts: TtsSettings,

    /// Directory holding this language's card templates
    #[serde(default)]
    pub template_dir: Option<PathBuf>,
}

impl LanguageSettings {
    pub fn new(code: &str, voice_id: &str, language_code: &str) -> Self {
        Self {
            code: code.to_string(),
            tts: TtsSettings {
                voice_id: voice_id.to_string(),
                language_code: language_code.to_string(),
                engine: default_engine(),
            },
            template_dir: None,
        }
    }

    /// Configured template directory, or `templates/<code>`
    pub fn template_dir_or_default(&self) -> PathBuf {
        self.template_dir
            .clone()
            .unwrap_or_else(|| default_template_dir(&self.code))
    }
}

/// Speech synthesis voice configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TtsSettings {
    pub voice_id: String,

    /// Locale the voice speaks, e.g. "de-DE"
    pub language_code: String,

    #[serde(default = "default_engine")]
    pub engine: String,
}

/// Supported log levels
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(anyhow!("Invalid log level: {}", s)),
        }
    }
}

/// Speech engines the TTS collaborator accepts
pub const TTS_ENGINES: &[&str] = &["standard", "neural"];

fn default_language() -> String {
    "de".to_string()
}

fn default_engine() -> String {
    "standard".to_string()
}

fn default_template_dir(code: &str) -> PathBuf {
    Path::new("templates").join(code)
}

fn default_languages() -> Vec<LanguageSettings> {
    vec![
        LanguageSettings::new("de", "Marlene", "de-DE"),
        LanguageSettings::new("ru", "Tatyana", "ru-RU"),
        LanguageSettings::new("ko", "Seoyeon", "ko-KR"),
    ]
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let default_code = language_utils::normalize_to_part1(&self.default_language)?;

        for settings in &self.languages {
            language_utils::validate_language_code(&settings.code)?;
            if settings.tts.voice_id.trim().is_empty() {
                return Err(anyhow!("TTS voice id is required for language '{}'", settings.code));
            }
            if !TTS_ENGINES.iter().any(|engine| *engine == settings.tts.engine) {
                return Err(anyhow!(
                    "Invalid TTS engine '{}' for language '{}', must be one of: {}",
                    settings.tts.engine,
                    settings.code,
                    TTS_ENGINES.join(", ")
                ));
            }
        }

        if self.settings_for(&default_code).is_none() {
            return Err(anyhow!(
                "Default language '{}' has no language settings",
                self.default_language
            ));
        }

        Ok(())
    }

    /// Settings for a language, matching codes in any ISO format
    pub fn settings_for(&self, code: &str) -> Option<&LanguageSettings> {
        self.languages
            .iter()
            .find(|settings| language_utils::language_codes_match(&settings.code, code))
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            default_language: default_language(),
            log_level: LogLevel::default(),
            languages: default_languages(),
        }
    }
}
