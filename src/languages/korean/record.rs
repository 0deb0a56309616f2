/*!
 * Korean noun rows.
 *
 * CSV order: `hangul, romanization, english, primary_counter,
 * semantic_category, example, example_english, honorific_form, usage_notes`.
 * Particle forms and the counter example are derived while parsing.
 */

use std::any::Any;

use log::warn;
use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::languages::korean::hangul::{
    ParticleForms, SEMANTIC_CATEGORIES, counter_example, is_common_counter,
};
use crate::records::{
    FieldArity, FieldReader, MediaFields, Record, RecordSchema, RecordType, into_dict,
};

const RECORD: &str = "KoreanNounRecord";

#[derive(Debug, Clone, PartialEq)]
pub struct KoreanNounRecord {
    pub hangul: String,
    pub romanization: String,
    pub english: String,
    pub primary_counter: String,
    pub semantic_category: String,
    pub example: String,
    pub example_english: String,
    pub honorific_form: Option<String>,
    pub usage_notes: Option<String>,
    pub particles: ParticleForms,
    pub counter_example: String,
    media: MediaFields,
}

impl RecordSchema for KoreanNounRecord {
    const FIELD_NAMES: &'static [&'static str] = &[
        "hangul",
        "romanization",
        "english",
        "primary_counter",
        "semantic_category",
        "example",
        "example_english",
        "honorific_form",
        "usage_notes",
    ];
    const ARITY: FieldArity = FieldArity::Exact(9);
    const MEDIA_SLOTS: &'static [&'static str] = &["image", "word_audio", "example_audio"];

    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError> {
        let row = FieldReader::new(RECORD, Self::ARITY, fields)?;
        let hangul = row.required(0, "hangul")?;
        let primary_counter = row.text(3);
        let semantic_category =
            row.one_of(4, "semantic_category", SEMANTIC_CATEGORIES)?;

        if !primary_counter.is_empty() && !is_common_counter(&primary_counter) {
            warn!(
                "Uncommon Korean counter '{}' for '{}'",
                primary_counter, hangul
            );
        }

        let counter_example = if primary_counter.is_empty() {
            String::new()
        } else {
            counter_example(&hangul, &primary_counter, &semantic_category)
        };

        Ok(Self {
            particles: ParticleForms::derive(&hangul),
            romanization: row.text(1),
            english: row.text(2),
            example: row.text(5),
            example_english: row.text(6),
            honorific_form: row.optional(7),
            usage_notes: row.optional(8),
            hangul,
            primary_counter,
            semantic_category,
            counter_example,
            media: MediaFields::new(RECORD, Self::MEDIA_SLOTS),
        })
    }
}

impl Record for KoreanNounRecord {
    fn record_type(&self) -> RecordType {
        RecordType::KoreanNoun
    }

    fn field_names(&self) -> &'static [&'static str] {
        Self::FIELD_NAMES
    }

    fn identifier(&self) -> String {
        self.hangul.clone()
    }

    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = into_dict(json!({
            "hangul": self.hangul,
            "romanization": self.romanization,
            "english": self.english,
            "primary_counter": self.primary_counter,
            "semantic_category": self.semantic_category,
            "example": self.example,
            "example_english": self.example_english,
            "honorific_form": self.honorific_form,
            "usage_notes": self.usage_notes,
            "topic_particle": self.particles.topic,
            "subject_particle": self.particles.subject,
            "object_particle": self.particles.object,
            "possessive_form": self.particles.possessive,
            "counter_example": self.counter_example,
        }));
        self.media.write_into(&mut dict);
        dict
    }

    fn media(&self) -> &MediaFields {
        &self.media
    }

    fn media_mut(&mut self) -> &mut MediaFields {
        &mut self.media
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
