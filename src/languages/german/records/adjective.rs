use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::languages::german::records::impl_record;
use crate::records::{FieldArity, FieldReader, MediaFields, RecordSchema, RecordType, into_dict};

const RECORD: &str = "AdjectiveRecord";

/// `word, english, example, comparative[, superlative]`
#[derive(Debug, Clone, PartialEq)]
pub struct AdjectiveRecord {
    pub word: String,
    pub english: String,
    pub example: String,
    pub comparative: String,
    pub superlative: String,
    media: MediaFields,
}

impl AdjectiveRecord {
    fn declared_fields(&self) -> Map<String, Value> {
        into_dict(json!({
            "word": self.word,
            "english": self.english,
            "example": self.example,
            "comparative": self.comparative,
            "superlative": self.superlative,
        }))
    }
}

impl RecordSchema for AdjectiveRecord {
    const FIELD_NAMES: &'static [&'static str] =
        &["word", "english", "example", "comparative", "superlative"];
    const ARITY: FieldArity = FieldArity::AtLeast(4);
    const MEDIA_SLOTS: &'static [&'static str] = &["image", "word_audio", "example_audio"];

    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError> {
        let row = FieldReader::new(RECORD, Self::ARITY, fields)?;
        Ok(Self {
            word: row.text(0),
            english: row.text(1),
            example: row.text(2),
            comparative: row.text(3),
            superlative: row.text(4),
            media: MediaFields::new(RECORD, Self::MEDIA_SLOTS),
        })
    }
}

impl_record!(AdjectiveRecord, RecordType::Adjective, word);
