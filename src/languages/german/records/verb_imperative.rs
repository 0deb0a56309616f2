use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::languages::german::records::impl_record;
use crate::records::{FieldArity, FieldReader, MediaFields, RecordSchema, RecordType, into_dict};

const RECORD: &str = "VerbImperativeRecord";

/// Imperative forms for du, ihr, Sie and wir with per-form examples.
///
/// Rows may carry two trailing columns with an existing word audio file and
/// image, which pre-populate the media slots.
#[derive(Debug, Clone, PartialEq)]
pub struct VerbImperativeRecord {
    pub infinitive: String,
    pub english: String,
    pub du: String,
    pub ihr: String,
    pub sie: String,
    pub wir: String,
    pub example_du: String,
    pub example_ihr: String,
    pub example_sie: String,
    media: MediaFields,
}

impl VerbImperativeRecord {
    /// First non-empty example, preferring the du form
    pub fn first_example(&self) -> Option<&str> {
        [&self.example_du, &self.example_ihr, &self.example_sie]
            .into_iter()
            .map(String::as_str)
            .find(|example| !example.is_empty())
    }

    fn declared_fields(&self) -> Map<String, Value> {
        into_dict(json!({
            "infinitive": self.infinitive,
            "english": self.english,
            "du": self.du,
            "ihr": self.ihr,
            "sie": self.sie,
            "wir": self.wir,
            "example_du": self.example_du,
            "example_ihr": self.example_ihr,
            "example_sie": self.example_sie,
        }))
    }
}

impl RecordSchema for VerbImperativeRecord {
    const FIELD_NAMES: &'static [&'static str] = &[
        "infinitive",
        "english",
        "du",
        "ihr",
        "sie",
        "wir",
        "example_du",
        "example_ihr",
        "example_sie",
    ];
    const ARITY: FieldArity = FieldArity::AtLeast(7);
    const MEDIA_SLOTS: &'static [&'static str] = &["word_audio", "image"];

    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError> {
        let row = FieldReader::new(RECORD, Self::ARITY, fields)?;
        let mut media = MediaFields::new(RECORD, Self::MEDIA_SLOTS);
        if let Some(word_audio) = row.optional(9) {
            media.set("word_audio", word_audio)?;
        }
        if let Some(image) = row.optional(10) {
            media.set("image", image)?;
        }

        Ok(Self {
            infinitive: row.text(0),
            english: row.text(1),
            du: row.required(2, "du")?,
            ihr: row.required(3, "ihr")?,
            sie: row.required(4, "sie")?,
            wir: row.required(5, "wir")?,
            example_du: row.text(6),
            example_ihr: row.text(7),
            example_sie: row.text(8),
            media,
        })
    }
}

impl_record!(VerbImperativeRecord, RecordType::VerbImperative, infinitive);
