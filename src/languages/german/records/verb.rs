use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::languages::german::records::impl_record;
use crate::records::{FieldArity, FieldReader, MediaFields, RecordSchema, RecordType, into_dict};

const RECORD: &str = "VerbRecord";

/// Principal parts of a verb, one row per infinitive
#[derive(Debug, Clone, PartialEq)]
pub struct VerbRecord {
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
    media: MediaFields,
}

impl VerbRecord {
    fn declared_fields(&self) -> Map<String, Value> {
        into_dict(json!({
            "verb": self.verb,
            "english": self.english,
            "classification": self.classification,
            "present_ich": self.present_ich,
            "present_du": self.present_du,
            "present_er": self.present_er,
            "präteritum": self.praeteritum,
            "auxiliary": self.auxiliary,
            "perfect": self.perfect,
            "example": self.example,
            "separable": self.separable,
        }))
    }
}

impl RecordSchema for VerbRecord {
    const FIELD_NAMES: &'static [&'static str] = &[
        "verb",
        "english",
        "classification",
        "present_ich",
        "present_du",
        "present_er",
        "präteritum",
        "auxiliary",
        "perfect",
        "example",
        "separable",
    ];
    const ARITY: FieldArity = FieldArity::Exact(11);
    const MEDIA_SLOTS: &'static [&'static str] = &["word_audio", "example_audio", "image"];

    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError> {
        let row = FieldReader::new(RECORD, Self::ARITY, fields)?;
        Ok(Self {
            verb: row.text(0),
            english: row.text(1),
            classification: row.text(2),
            present_ich: row.text(3),
            present_du: row.text(4),
            present_er: row.text(5),
            praeteritum: row.text(6),
            auxiliary: row.text(7),
            perfect: row.text(8),
            example: row.text(9),
            separable: row.flag(10),
            media: MediaFields::new(RECORD, Self::MEDIA_SLOTS),
        })
    }
}

impl_record!(VerbRecord, RecordType::Verb, verb);
