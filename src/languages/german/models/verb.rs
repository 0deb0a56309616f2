/*!
 * German verb domain model.
 *
 * A verb is either a regular principal-parts entry or an imperative-only
 * entry built from a [`VerbImperativeRecord`]. Imperative entries carry
 * [`IMPERATIVE_PLACEHOLDER`] in the conjugation slots they do not have and
 * read out a shorter audio text.
 */

use crate::domain::{
    AudioSegments, ImageSearchStrategy, LanguageDomainModel, push_segment, require_fields,
};
use crate::errors::ValidationError;
use crate::languages::german::grammar::VerbActionType;
use crate::languages::german::records::{VerbImperativeRecord, VerbRecord};
use crate::providers::ImageQueryGenerator;
use crate::records::fields::ensure_allowed;

const MODEL: &str = "Verb";
const AUXILIARIES: &[&str] = &["haben", "sein"];
const SECTION_BREAK: &str = "<break strength='strong'/>";

/// Marks conjugation slots that an imperative-only entry does not fill
pub const IMPERATIVE_PLACEHOLDER: &str = "[imperative]";

/// Inputs for [`Verb::new`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbFields {
    pub verb: String,
    pub english: String,
    pub classification: String,
    pub present_ich: String,
    pub present_du: String,
    pub present_er: String,
    pub praeteritum: String,
    pub auxiliary: String,
    pub perfect: String,
    pub example: String,
    pub separable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    pub verb: String,
    pub english: String,
    pub classification: String,
    pub present_ich: String,
    pub present_du: String,
    pub present_er: String,
    pub praeteritum: String,
    pub auxiliary: String,
    pub perfect: String,
    pub example: String,
    pub separable: bool,
}

impl Verb {
    pub fn new(fields: VerbFields) -> Result<Self, ValidationError> {
        require_fields(
            MODEL,
            &[
                ("verb", fields.verb.as_str()),
                ("english", fields.english.as_str()),
                ("present_ich", fields.present_ich.as_str()),
                ("present_du", fields.present_du.as_str()),
                ("present_er", fields.present_er.as_str()),
                ("perfect", fields.perfect.as_str()),
                ("example", fields.example.as_str()),
            ],
        )?;
        if !fields.auxiliary.is_empty() {
            ensure_allowed(MODEL, "auxiliary", &fields.auxiliary, AUXILIARIES)?;
        }

        Ok(Self {
            verb: fields.verb,
            english: fields.english,
            classification: fields.classification,
            present_ich: fields.present_ich,
            present_du: fields.present_du,
            present_er: fields.present_er,
            praeteritum: fields.praeteritum,
            auxiliary: fields.auxiliary,
            perfect: fields.perfect,
            example: fields.example,
            separable: fields.separable,
        })
    }

    pub fn from_record(record: &VerbRecord) -> Result<Self, ValidationError> {
        Self::new(VerbFields {
            verb: record.verb.clone(),
            english: record.english.clone(),
            classification: record.classification.clone(),
            present_ich: record.present_ich.clone(),
            present_du: record.present_du.clone(),
            present_er: record.present_er.clone(),
            praeteritum: record.praeteritum.clone(),
            auxiliary: record.auxiliary.clone(),
            perfect: record.perfect.clone(),
            example: record.example.clone(),
            separable: record.separable,
        })
    }

    /// Imperative-only entry; the example falls back to the du form
    pub fn from_imperative(record: &VerbImperativeRecord) -> Result<Self, ValidationError> {
        let example = record.first_example().unwrap_or(&record.du).to_string();
        Self::new(VerbFields {
            verb: record.infinitive.clone(),
            english: record.english.clone(),
            present_ich: IMPERATIVE_PLACEHOLDER.to_string(),
            present_du: record.du.clone(),
            present_er: IMPERATIVE_PLACEHOLDER.to_string(),
            perfect: IMPERATIVE_PLACEHOLDER.to_string(),
            example,
            ..VerbFields::default()
        })
    }

    pub fn is_imperative(&self) -> bool {
        self.present_ich == IMPERATIVE_PLACEHOLDER || self.perfect == IMPERATIVE_PLACEHOLDER
    }

    pub fn action_type(&self) -> VerbActionType {
        VerbActionType::classify(&self.english)
    }

    fn build_search_context(&self) -> String {
        let separability = if self.separable {
            "separable"
        } else {
            "non-separable"
        };
        let classification = if self.classification.is_empty() {
            "standard verb"
        } else {
            self.classification.as_str()
        };
        let conjugations = if self.auxiliary.is_empty() {
            "basic forms".to_string()
        } else {
            format!("present tense, preterite, perfect, auxiliary: {}", self.auxiliary)
        };

        [
            format!("German verb: {} ({}, {})", self.verb, separability, classification),
            format!("English: {}", self.english),
            format!("Example usage: {}", self.example),
            format!("Conjugations available: {}", conjugations),
            "Challenge: Verbs are actions, so the image has to show something happening."
                .to_string(),
            format!("Visual strategy: {}", self.action_type().visual_strategy()),
            "Generate search terms for a photo that shows this action being performed."
                .to_string(),
        ]
        .join("\n")
    }
}

impl LanguageDomainModel for Verb {
    fn combined_audio_text(&self) -> String {
        if self.is_imperative() {
            return [
                self.verb.clone(),
                format!("{}Imperativ", SECTION_BREAK),
                format!("du {}", self.present_du),
            ]
            .join(", ");
        }

        let mut parts = vec![
            self.verb.clone(),
            format!("{}Präsens", SECTION_BREAK),
            format!("ich {}", self.present_ich),
            format!("du {}", self.present_du),
            format!("er sie es {}", self.present_er),
        ];
        if !self.praeteritum.is_empty() {
            parts.push(format!("{}Präteritum", SECTION_BREAK));
            parts.push(format!("er sie es {}", self.praeteritum));
        }
        parts.push(format!("{}Perfekt", SECTION_BREAK));
        parts.push(format!("er sie es {}", self.perfect));
        parts.join(", ")
    }

    fn audio_segments(&self) -> AudioSegments {
        let mut segments = AudioSegments::new();
        push_segment(&mut segments, "word_audio", &self.combined_audio_text());
        push_segment(&mut segments, "example_audio", &self.example);
        if !self.present_du.is_empty() {
            push_segment(
                &mut segments,
                "du_audio",
                &format!("du {}", self.present_du),
            );
        }
        segments
    }

    fn primary_word(&self) -> String {
        self.verb.clone()
    }

    fn image_search_strategy<'a>(
        &self,
        service: &'a dyn ImageQueryGenerator,
    ) -> ImageSearchStrategy<'a> {
        ImageSearchStrategy::new("verb", &self.verb, self.build_search_context(), service)
    }
}
