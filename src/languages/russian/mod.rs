/*!
 * Russian language bundle.
 */

use crate::app_config::LanguageSettings;
use crate::domain::LanguageDomainModel;
use crate::errors::ValidationError;
use crate::languages::{Language, LanguageProfile, TtsConfig, unsupported};
use crate::records::{Record, RecordFactory, boxed_parser};

pub mod grammar;
pub mod model;
pub mod record;

pub use grammar::{Animacy, Gender};
pub use model::{RussianNoun, RussianNounFields};
pub use record::RussianNounRecord;

#[derive(Debug, Clone)]
pub struct RussianLanguage {
    profile: LanguageProfile,
}

impl RussianLanguage {
    pub fn new() -> Self {
        let factory = RecordFactory::new("ru").register("noun", boxed_parser::<RussianNounRecord>);
        Self {
            profile: LanguageProfile::new(
                "ru",
                "Russian",
                TtsConfig::new("Tatyana", "ru-RU"),
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

impl Default for RussianLanguage {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for RussianLanguage {
    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn create_domain_model(
        &self,
        record: &dyn Record,
    ) -> Result<Box<dyn LanguageDomainModel>, ValidationError> {
        match record.as_any().downcast_ref::<RussianNounRecord>() {
            Some(noun) => Ok(Box::new(RussianNoun::from_record(noun)?)),
            None => Err(unsupported(self.code(), record)),
        }
    }

    fn csv_to_record_type_mapping(&self) -> Vec<(&'static str, &'static str)> {
        vec![("nouns", "noun")]
    }
}
