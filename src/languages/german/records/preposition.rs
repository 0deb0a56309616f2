use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::languages::german::records::impl_record;
use crate::records::{FieldArity, FieldReader, MediaFields, RecordSchema, RecordType, into_dict};

const RECORD: &str = "PrepositionRecord";

/// `preposition, english, case, example1, example2`
#[derive(Debug, Clone, PartialEq)]
pub struct PrepositionRecord {
    pub preposition: String,
    pub english: String,
    pub case: String,
    pub example1: String,
    pub example2: String,
    media: MediaFields,
}

impl PrepositionRecord {
    fn declared_fields(&self) -> Map<String, Value> {
        into_dict(json!({
            "preposition": self.preposition,
            "english": self.english,
            "case": self.case,
            "example1": self.example1,
            "example2": self.example2,
        }))
    }
}

impl RecordSchema for PrepositionRecord {
    const FIELD_NAMES: &'static [&'static str] =
        &["preposition", "english", "case", "example1", "example2"];
    const ARITY: FieldArity = FieldArity::Exact(5);
    const MEDIA_SLOTS: &'static [&'static str] =
        &["word_audio", "example1_audio", "example2_audio", "image"];

    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError> {
        let row = FieldReader::new(RECORD, Self::ARITY, fields)?;
        Ok(Self {
            preposition: row.text(0),
            english: row.text(1),
            case: row.text(2),
            example1: row.text(3),
            example2: row.text(4),
            media: MediaFields::new(RECORD, Self::MEDIA_SLOTS),
        })
    }
}

impl_record!(PrepositionRecord, RecordType::Preposition, preposition);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Record;

    #[test]
    fn test_media_slots_shouldAcceptBothExampleAudios() {
        let mut record = PrepositionRecord::from_csv_fields(&[
            "mit",
            "with",
            "Dativ",
            "Ich fahre mit dem Bus.",
            "Er spricht mit mir.",
        ])
        .unwrap();
        record.media_mut().set("example1_audio", "mit_1.mp3").unwrap();
        record.media_mut().set("example2_audio", "mit_2.mp3").unwrap();
        assert_eq!(record.to_dict().len(), 7);
    }
}
