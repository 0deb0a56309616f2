use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::languages::german::records::impl_record;
use crate::records::{FieldArity, FieldReader, MediaFields, RecordSchema, RecordType, into_dict};

const RECORD: &str = "AdverbRecord";

/// `word, english, type, example`; the type label is resolved by the model
#[derive(Debug, Clone, PartialEq)]
pub struct AdverbRecord {
    pub word: String,
    pub english: String,
    pub adverb_type: String,
    pub example: String,
    media: MediaFields,
}

impl AdverbRecord {
    fn declared_fields(&self) -> Map<String, Value> {
        into_dict(json!({
            "word": self.word,
            "english": self.english,
            "type": self.adverb_type,
            "example": self.example,
        }))
    }
}

impl RecordSchema for AdverbRecord {
    const FIELD_NAMES: &'static [&'static str] = &["word", "english", "type", "example"];
    const ARITY: FieldArity = FieldArity::AtLeast(4);
    const MEDIA_SLOTS: &'static [&'static str] = &["image", "word_audio", "example_audio"];

    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError> {
        let row = FieldReader::new(RECORD, Self::ARITY, fields)?;
        Ok(Self {
            word: row.text(0),
            english: row.text(1),
            adverb_type: row.text(2),
            example: row.text(3),
            media: MediaFields::new(RECORD, Self::MEDIA_SLOTS),
        })
    }
}

impl_record!(AdverbRecord, RecordType::Adverb, word);
