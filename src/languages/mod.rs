/*!
 * Language capability bundles.
 *
 * Each supported language provides a [`Language`] implementation tying
 * together its record factory, the mapping from records to domain models,
 * speech synthesis settings and card template locations. Bundles are
 * collected in an explicitly constructed [`LanguageRegistry`].
 *
 * - `german`: nouns, verbs, adjectives, adverbs, negations, phrases,
 *   prepositions and the article family
 * - `korean`: nouns with particle and counter derivation
 * - `russian`: nouns with case declensions
 */

use std::fmt::{self, Debug};
use std::path::{Path, PathBuf};

use log::debug;

use crate::app_config::LanguageSettings;
use crate::domain::LanguageDomainModel;
use crate::errors::{ProcessingError, ValidationError};
use crate::records::{Record, RecordFactory};

pub mod german;
pub mod korean;
pub mod registry;
pub mod russian;

pub use registry::LanguageRegistry;

/// Speech synthesis settings handed to the TTS collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsConfig {
    pub voice_id: String,
    pub language_code: String,
    pub engine: String,
}

impl TtsConfig {
    /// Config using the "standard" engine
    pub fn new(voice_id: &str, language_code: &str) -> Self {
        Self {
            voice_id: voice_id.to_string(),
            language_code: language_code.to_string(),
            engine: "standard".to_string(),
        }
    }

    pub fn with_engine(mut self, engine: &str) -> Self {
        self.engine = engine.to_string();
        self
    }
}

/// Which face of a card a template renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSide {
    Front,
    Back,
}

impl CardSide {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

impl fmt::Display for CardSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of parsing a batch of rows
#[derive(Debug, Default)]
pub struct IngestReport {
    pub records: Vec<Box<dyn Record>>,
    pub errors: Vec<ProcessingError>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Settings shared by every language bundle
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub code: &'static str,
    pub name: &'static str,
    pub tts: TtsConfig,
    pub template_dir: PathBuf,
    pub factory: RecordFactory,
}

impl LanguageProfile {
    pub fn new(
        code: &'static str,
        name: &'static str,
        tts: TtsConfig,
        factory: RecordFactory,
    ) -> Self {
        Self {
            code,
            name,
            tts,
            template_dir: Path::new("templates").join(code),
            factory,
        }
    }

    /// Override TTS and template settings from configuration
    pub fn apply_settings(mut self, settings: &LanguageSettings) -> Self {
        self.tts = TtsConfig::new(&settings.tts.voice_id, &settings.tts.language_code)
            .with_engine(&settings.tts.engine);
        self.template_dir = settings.template_dir_or_default();
        self
    }
}

/// Everything the card pipeline needs to know about one language
pub trait Language: Debug + Send + Sync {
    fn profile(&self) -> &LanguageProfile;

    /// Build the domain model for a record this language produced
    fn create_domain_model(
        &self,
        record: &dyn Record,
    ) -> Result<Box<dyn LanguageDomainModel>, ValidationError>;

    /// CSV file stem to record tag, e.g. `nouns` to `noun`
    fn csv_to_record_type_mapping(&self) -> Vec<(&'static str, &'static str)>;

    /// ISO 639-1 code
    fn code(&self) -> &str {
        self.profile().code
    }

    /// English name
    fn name(&self) -> &str {
        self.profile().name
    }

    fn supported_record_types(&self) -> Vec<&'static str> {
        self.profile().factory.supported_types()
    }

    fn create_record(
        &self,
        record_type: &str,
        fields: &[&str],
    ) -> Result<Box<dyn Record>, ValidationError> {
        self.profile().factory.create(record_type, fields)
    }

    fn tts_config(&self) -> &TtsConfig {
        &self.profile().tts
    }

    fn template_directory(&self) -> &Path {
        &self.profile().template_dir
    }

    /// e.g. `noun_front.html`
    fn template_filename(&self, card_type: &str, side: CardSide) -> String {
        format!("{}_{}.html", card_type, side)
    }

    fn template_path(&self, record_type: &str, side: CardSide) -> PathBuf {
        self.template_directory()
            .join(self.template_filename(record_type, side))
    }

    /// Parse many rows of one record type, collecting failures per row
    fn ingest(&self, record_type: &str, rows: &[Vec<String>]) -> IngestReport {
        let mut report = IngestReport::default();
        for (index, row) in rows.iter().enumerate() {
            let fields: Vec<&str> = row.iter().map(String::as_str).collect();
            match self.create_record(record_type, &fields) {
                Ok(record) => report.records.push(record),
                Err(err) => {
                    let key = format!(
                        "{}:{}",
                        record_type,
                        fields.first().map(|f| f.trim()).unwrap_or_default()
                    );
                    report.errors.push(
                        ProcessingError::new(key, err).with_context(format!("row {}", index + 1)),
                    );
                }
            }
        }
        debug!(
            "Ingested {} {} rows for {}: {} ok, {} failed",
            rows.len(),
            record_type,
            self.code(),
            report.records.len(),
            report.errors.len()
        );
        report
    }
}

/// Error for a record kind that has no domain model in `language`
pub(crate) fn unsupported(language: &str, record: &dyn Record) -> ValidationError {
    ValidationError::UnsupportedDomainModel {
        language: language.to_string(),
        record_type: record.record_type().as_str().to_string(),
    }
}
