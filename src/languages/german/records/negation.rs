use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::languages::german::models::negation::NegationType;
use crate::languages::german::records::impl_record;
use crate::records::{FieldArity, FieldReader, MediaFields, RecordSchema, RecordType, into_dict};

const RECORD: &str = "NegationRecord";

/// `word, english, type, example` with `type` one of the negation kinds
#[derive(Debug, Clone, PartialEq)]
pub struct NegationRecord {
    pub word: String,
    pub english: String,
    pub negation_type: NegationType,
    pub example: String,
    media: MediaFields,
}

impl NegationRecord {
    fn declared_fields(&self) -> Map<String, Value> {
        into_dict(json!({
            "word": self.word,
            "english": self.english,
            "type": self.negation_type.as_str(),
            "example": self.example,
        }))
    }
}

impl RecordSchema for NegationRecord {
    const FIELD_NAMES: &'static [&'static str] = &["word", "english", "type", "example"];
    const ARITY: FieldArity = FieldArity::AtLeast(4);
    const MEDIA_SLOTS: &'static [&'static str] = &["image", "word_audio", "example_audio"];

    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError> {
        let row = FieldReader::new(RECORD, Self::ARITY, fields)?;
        Ok(Self {
            word: row.text(0),
            english: row.text(1),
            negation_type: NegationType::parse(RECORD, &row.text(2))?,
            example: row.text(3),
            media: MediaFields::new(RECORD, Self::MEDIA_SLOTS),
        })
    }
}

impl_record!(NegationRecord, RecordType::Negation, word);
