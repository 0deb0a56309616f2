use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::languages::german::records::impl_record;
use crate::records::{FieldArity, FieldReader, MediaFields, RecordSchema, RecordType, into_dict};

const RECORD: &str = "PhraseRecord";

/// `phrase, english, context, related`
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseRecord {
    pub phrase: String,
    pub english: String,
    pub context: String,
    pub related: String,
    media: MediaFields,
}

impl PhraseRecord {
    fn declared_fields(&self) -> Map<String, Value> {
        into_dict(json!({
            "phrase": self.phrase,
            "english": self.english,
            "context": self.context,
            "related": self.related,
        }))
    }
}

impl RecordSchema for PhraseRecord {
    const FIELD_NAMES: &'static [&'static str] = &["phrase", "english", "context", "related"];
    const ARITY: FieldArity = FieldArity::Exact(4);
    const MEDIA_SLOTS: &'static [&'static str] = &["phrase_audio", "image"];

    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError> {
        let row = FieldReader::new(RECORD, Self::ARITY, fields)?;
        Ok(Self {
            phrase: row.text(0),
            english: row.text(1),
            context: row.text(2),
            related: row.text(3),
            media: MediaFields::new(RECORD, Self::MEDIA_SLOTS),
        })
    }
}

impl_record!(PhraseRecord, RecordType::Phrase, phrase);
