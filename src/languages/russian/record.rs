/*!
 * Russian noun rows with their case declensions.
 *
 * Only `noun, english, gender` are mandatory; the remaining nine columns
 * (`genitive, example, related, animacy, instrumental, prepositional, dative,
 * plural_nominative, plural_genitive`) default to empty.
 */

use std::any::Any;
use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::languages::russian::grammar::{Animacy, Gender, derive_accusative};
use crate::records::{
    FieldArity, FieldReader, MediaFields, Record, RecordSchema, RecordType, into_dict,
};

const RECORD: &str = "RussianNounRecord";

#[derive(Debug, Clone, PartialEq)]
pub struct RussianNounRecord {
    pub noun: String,
    pub english: String,
    pub gender: Gender,
    pub genitive: String,
    pub example: String,
    pub related: String,
    pub animacy: Animacy,
    pub instrumental: String,
    pub prepositional: String,
    pub dative: String,
    pub plural_nominative: String,
    pub plural_genitive: String,
    pub nominative: String,
    pub accusative: String,
    media: MediaFields,
}

impl RussianNounRecord {
    /// Singular case forms keyed by English case name
    pub fn display_cases(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("Nominative", self.nominative.clone()),
            ("Genitive", self.genitive.clone()),
            ("Accusative", self.accusative.clone()),
            ("Instrumental", self.instrumental.clone()),
            ("Prepositional", self.prepositional.clone()),
            ("Dative", self.dative.clone()),
        ])
    }

    /// Plural forms that are present
    pub fn plural_forms(&self) -> BTreeMap<&'static str, String> {
        [
            ("Plural Nominative", &self.plural_nominative),
            ("Plural Genitive", &self.plural_genitive),
        ]
        .into_iter()
        .filter(|(_, form)| !form.is_empty())
        .map(|(label, form)| (label, form.clone()))
        .collect()
    }
}

impl RecordSchema for RussianNounRecord {
    const FIELD_NAMES: &'static [&'static str] = &[
        "noun",
        "english",
        "gender",
        "genitive",
        "example",
        "related",
        "animacy",
        "instrumental",
        "prepositional",
        "dative",
        "plural_nominative",
        "plural_genitive",
    ];
    const ARITY: FieldArity = FieldArity::AtLeast(3);
    const MEDIA_SLOTS: &'static [&'static str] = &["image", "word_audio", "example_audio"];

    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError> {
        let row = FieldReader::new(RECORD, Self::ARITY, fields)?;
        let noun = row.required(0, "noun")?;
        let english = row.required(1, "english")?;
        let gender = Gender::parse(RECORD, &row.text(2))?;
        let animacy = Animacy::parse(RECORD, &row.text(6))?;
        let genitive = row.text(3);
        let nominative = noun.clone();
        let accusative = derive_accusative(animacy, &noun, &nominative, &genitive);

        Ok(Self {
            noun,
            english,
            gender,
            genitive,
            example: row.text(4),
            related: row.text(5),
            animacy,
            instrumental: row.text(7),
            prepositional: row.text(8),
            dative: row.text(9),
            plural_nominative: row.text(10),
            plural_genitive: row.text(11),
            nominative,
            accusative,
            media: MediaFields::new(RECORD, Self::MEDIA_SLOTS),
        })
    }
}

impl Record for RussianNounRecord {
    fn record_type(&self) -> RecordType {
        RecordType::Noun
    }

    fn field_names(&self) -> &'static [&'static str] {
        Self::FIELD_NAMES
    }

    fn identifier(&self) -> String {
        self.noun.clone()
    }

    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = into_dict(json!({
            "noun": self.noun,
            "english": self.english,
            "gender": self.gender.as_str(),
            "genitive": self.genitive,
            "example": self.example,
            "related": self.related,
            "animacy": self.animacy.as_str(),
            "instrumental": self.instrumental,
            "prepositional": self.prepositional,
            "dative": self.dative,
            "plural_nominative": self.plural_nominative,
            "plural_genitive": self.plural_genitive,
            "nominative": self.nominative,
            "accusative": self.accusative,
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
