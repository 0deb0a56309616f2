/*!
 * Korean language bundle.
 */

use crate::app_config::LanguageSettings;
use crate::domain::LanguageDomainModel;
use crate::errors::ValidationError;
use crate::languages::{Language, LanguageProfile, TtsConfig, unsupported};
use crate::records::{Record, RecordFactory, boxed_parser};

pub mod hangul;
pub mod model;
pub mod record;

pub use model::{KoreanNoun, KoreanNounFields};
pub use record::KoreanNounRecord;

#[derive(Debug, Clone)]
pub struct KoreanLanguage {
    profile: LanguageProfile,
}

impl KoreanLanguage {
    pub fn new() -> Self {
        let factory = RecordFactory::new("ko").register("noun", boxed_parser::<KoreanNounRecord>);
        Self {
            profile: LanguageProfile::new(
                "ko",
                "Korean",
                TtsConfig::new("Seoyeon", "ko-KR"),
                factory,
            ),
        }
    }

    pub fn with_settings(settings: &LanguageSettings) -> Self {
        let language = Self::new();
        Self {
            profile: language.profile.apply_settings(settings),
        }
    }
}

impl Default for KoreanLanguage {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for KoreanLanguage {
    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn create_domain_model(
        &self,
        record: &dyn Record,
    ) -> Result<Box<dyn LanguageDomainModel>, ValidationError> {
        match record.as_any().downcast_ref::<KoreanNounRecord>() {
            Some(noun) => Ok(Box::new(KoreanNoun::from_record(noun)?)),
            None => Err(unsupported(self.code(), record)),
        }
    }

    fn csv_to_record_type_mapping(&self) -> Vec<(&'static str, &'static str)> {
        vec![("nouns", "noun")]
    }
}
