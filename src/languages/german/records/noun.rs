use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::languages::german::records::impl_record;
use crate::records::{FieldArity, FieldReader, MediaFields, RecordSchema, RecordType, into_dict};

const RECORD: &str = "NounRecord";

/// `noun, article, english, plural, example, related`
#[derive(Debug, Clone, PartialEq)]
pub struct NounRecord {
    pub noun: String,
    pub article: String,
    pub english: String,
    pub plural: String,
    pub example: String,
    pub related: String,
    media: MediaFields,
}

impl NounRecord {
    fn declared_fields(&self) -> Map<String, Value> {
        into_dict(json!({
            "noun": self.noun,
            "article": self.article,
            "english": self.english,
            "plural": self.plural,
            "example": self.example,
            "related": self.related,
        }))
    }
}

impl RecordSchema for NounRecord {
    const FIELD_NAMES: &'static [&'static str] =
        &["noun", "article", "english", "plural", "example", "related"];
    const ARITY: FieldArity = FieldArity::AtLeast(6);
    const MEDIA_SLOTS: &'static [&'static str] = &["image", "word_audio", "example_audio"];

    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError> {
        let row = FieldReader::new(RECORD, Self::ARITY, fields)?;
        Ok(Self {
            noun: row.text(0),
            article: row.text(1),
            english: row.text(2),
            plural: row.text(3),
            example: row.text(4),
            related: row.text(5),
            media: MediaFields::new(RECORD, Self::MEDIA_SLOTS),
        })
    }
}

impl_record!(NounRecord, RecordType::Noun, noun);
