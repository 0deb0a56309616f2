use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::languages::german::records::impl_record;
use crate::records::{FieldArity, FieldReader, MediaFields, RecordSchema, RecordType, into_dict};

const RECORD: &str = "UnifiedArticleRecord";

pub const ARTIKEL_TYPEN: &[&str] = &["bestimmt", "unbestimmt", "verneinend"];
pub const GESCHLECHTER: &[&str] = &["maskulin", "feminin", "neutral", "plural"];

/// Article declension row in German terminology, covering every article family
#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedArticleRecord {
    pub artikel_typ: String,
    pub geschlecht: String,
    pub nominativ: String,
    pub akkusativ: String,
    pub dativ: String,
    pub genitiv: String,
    pub beispiel_nom: String,
    pub beispiel_akk: String,
    pub beispiel_dat: String,
    pub beispiel_gen: String,
    media: MediaFields,
}

impl UnifiedArticleRecord {
    fn declared_fields(&self) -> Map<String, Value> {
        into_dict(json!({
            "artikel_typ": self.artikel_typ,
            "geschlecht": self.geschlecht,
            "nominativ": self.nominativ,
            "akkusativ": self.akkusativ,
            "dativ": self.dativ,
            "genitiv": self.genitiv,
            "beispiel_nom": self.beispiel_nom,
            "beispiel_akk": self.beispiel_akk,
            "beispiel_dat": self.beispiel_dat,
            "beispiel_gen": self.beispiel_gen,
        }))
    }
}

impl RecordSchema for UnifiedArticleRecord {
    const FIELD_NAMES: &'static [&'static str] = &[
        "artikel_typ",
        "geschlecht",
        "nominativ",
        "akkusativ",
        "dativ",
        "genitiv",
        "beispiel_nom",
        "beispiel_akk",
        "beispiel_dat",
        "beispiel_gen",
    ];
    const ARITY: FieldArity = FieldArity::Exact(10);
    const MEDIA_SLOTS: &'static [&'static str] = &["article_audio", "example_audio", "image"];

    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError> {
        let row = FieldReader::new(RECORD, Self::ARITY, fields)?;
        Ok(Self {
            artikel_typ: row.one_of(0, "artikel_typ", ARTIKEL_TYPEN)?,
            geschlecht: row.one_of(1, "geschlecht", GESCHLECHTER)?,
            nominativ: row.text(2),
            akkusativ: row.text(3),
            dativ: row.text(4),
            genitiv: row.text(5),
            beispiel_nom: row.text(6),
            beispiel_akk: row.text(7),
            beispiel_dat: row.text(8),
            beispiel_gen: row.text(9),
            media: MediaFields::new(RECORD, Self::MEDIA_SLOTS),
        })
    }
}

impl_record!(UnifiedArticleRecord, RecordType::UnifiedArticle, nominativ);
