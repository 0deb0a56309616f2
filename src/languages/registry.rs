/*!
 * Explicit language-code to bundle lookup.
 *
 * The registry is a plain value: build it once at startup (from defaults or
 * configuration) and pass it by reference to whatever needs a language.
 */

use std::collections::BTreeMap;

use log::{info, warn};

use crate::app_config::{Config, LanguageSettings};
use crate::errors::RegistryError;
use crate::language_utils::normalize_to_part1;
use crate::languages::Language;
use crate::languages::german::GermanLanguage;
use crate::languages::korean::KoreanLanguage;
use crate::languages::russian::RussianLanguage;

#[derive(Debug, Default)]
pub struct LanguageRegistry {
    languages: BTreeMap<String, Box<dyn Language>>,
}

impl LanguageRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// German, Russian and Korean with built-in settings
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for language in [
            Box::new(GermanLanguage::new()) as Box<dyn Language>,
            Box::new(RussianLanguage::new()),
            Box::new(KoreanLanguage::new()),
        ] {
            registry.insert(language);
        }
        registry
    }

    /// One bundle per configured language that has an implementation
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for settings in &config.languages {
            match Self::bundle_for(settings)? {
                Some(language) => registry.register(language)?,
                None => warn!(
                    "No implementation for configured language '{}', skipping",
                    settings.code
                ),
            }
        }
        info!(
            "Language registry ready: {}",
            registry.list_available().join(", ")
        );
        Ok(registry)
    }

    fn bundle_for(settings: &LanguageSettings) -> Result<Option<Box<dyn Language>>, RegistryError> {
        let code = normalize_code(&settings.code)?;
        let language: Box<dyn Language> = match code.as_str() {
            "de" => Box::new(GermanLanguage::with_settings(settings)),
            "ru" => Box::new(RussianLanguage::with_settings(settings)),
            "ko" => Box::new(KoreanLanguage::with_settings(settings)),
            _ => return Ok(None),
        };
        Ok(Some(language))
    }

    /// Add a bundle under its own code, replacing any previous one
    pub fn register(&mut self, language: Box<dyn Language>) -> Result<(), RegistryError> {
        normalize_code(language.code())?;
        self.insert(language);
        Ok(())
    }

    fn insert(&mut self, language: Box<dyn Language>) {
        let code = normalize_code(language.code()).unwrap_or_else(|_| language.code().to_string());
        if self.languages.insert(code.clone(), language).is_some() {
            warn!("Replaced registered language '{}'", code);
        }
    }

    /// Bundle for a code in any ISO 639 spelling
    pub fn get(&self, code: &str) -> Result<&dyn Language, RegistryError> {
        let key = normalize_code(code)?;
        self.languages
            .get(&key)
            .map(|language| language.as_ref())
            .ok_or_else(|| RegistryError::LanguageNotRegistered {
                code: code.to_string(),
                available: self.list_available().into_iter().map(str::to_string).collect(),
            })
    }

    /// Registered codes in sorted order
    pub fn list_available(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }

    pub fn is_registered(&self, code: &str) -> bool {
        self.get(code).is_ok()
    }

    pub fn clear(&mut self) {
        self.languages.clear();
    }
}

fn normalize_code(code: &str) -> Result<String, RegistryError> {
    normalize_to_part1(code).map_err(|_| RegistryError::InvalidLanguageCode(code.to_string()))
}
