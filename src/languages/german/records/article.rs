/*!
 * Article declension rows in English terminology.
 *
 * Definite, indefinite and negative articles share one layout:
 * `gender, nominative, accusative, dative, genitive, example_nom,
 * example_acc, example_dat, example_gen`. Indefinite articles have no plural.
 */

use std::any::Any;

use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::records::{
    FieldArity, FieldReader, MediaFields, Record, RecordSchema, RecordType, into_dict,
};

const GENDERS: &[&str] = &["masculine", "feminine", "neuter", "plural"];
const SINGULAR_GENDERS: &[&str] = &["masculine", "feminine", "neuter"];

/// Which article family a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleKind {
    Definite,
    Indefinite,
    Negative,
}

impl ArticleKind {
    pub fn record_type(self) -> RecordType {
        match self {
            Self::Definite => RecordType::Article,
            Self::Indefinite => RecordType::IndefiniteArticle,
            Self::Negative => RecordType::NegativeArticle,
        }
    }

    /// Name used in validation messages
    pub fn record_name(self) -> &'static str {
        match self {
            Self::Definite => "ArticleRecord",
            Self::Indefinite => "IndefiniteArticleRecord",
            Self::Negative => "NegativeArticleRecord",
        }
    }

    /// German `artikel_typ` label
    pub fn artikel_typ(self) -> &'static str {
        match self {
            Self::Definite => "bestimmt",
            Self::Indefinite => "unbestimmt",
            Self::Negative => "verneinend",
        }
    }

    pub fn allowed_genders(self) -> &'static [&'static str] {
        match self {
            Self::Indefinite => SINGULAR_GENDERS,
            Self::Definite | Self::Negative => GENDERS,
        }
    }
}

/// English gender label to its German `geschlecht` equivalent
pub fn german_gender(gender: &str) -> &str {
    match gender {
        "masculine" => "maskulin",
        "feminine" => "feminin",
        "neuter" => "neutral",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRecord {
    pub kind: ArticleKind,
    pub gender: String,
    pub nominative: String,
    pub accusative: String,
    pub dative: String,
    pub genitive: String,
    pub example_nom: String,
    pub example_acc: String,
    pub example_dat: String,
    pub example_gen: String,
    media: MediaFields,
}

impl ArticleRecord {
    /// Parse a row for any article family
    pub fn parse<S: AsRef<str>>(kind: ArticleKind, fields: &[S]) -> Result<Self, ValidationError> {
        let record = kind.record_name();
        let row = FieldReader::new(record, Self::ARITY, fields)?;
        Ok(Self {
            kind,
            gender: row.one_of(0, "gender", kind.allowed_genders())?,
            nominative: row.text(1),
            accusative: row.text(2),
            dative: row.text(3),
            genitive: row.text(4),
            example_nom: row.text(5),
            example_acc: row.text(6),
            example_dat: row.text(7),
            example_gen: row.text(8),
            media: MediaFields::new(record, Self::MEDIA_SLOTS),
        })
    }
}

impl RecordSchema for ArticleRecord {
    const FIELD_NAMES: &'static [&'static str] = &[
        "gender",
        "nominative",
        "accusative",
        "dative",
        "genitive",
        "example_nom",
        "example_acc",
        "example_dat",
        "example_gen",
    ];
    const ARITY: FieldArity = FieldArity::Exact(9);
    const MEDIA_SLOTS: &'static [&'static str] = &["article_audio", "example_audio"];

    /// Definite article row
    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError> {
        Self::parse(ArticleKind::Definite, fields)
    }
}

impl Record for ArticleRecord {
    fn record_type(&self) -> RecordType {
        self.kind.record_type()
    }

    fn field_names(&self) -> &'static [&'static str] {
        Self::FIELD_NAMES
    }

    fn identifier(&self) -> String {
        format!("{} ({})", self.nominative, self.gender)
    }

    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = into_dict(json!({
            "gender": self.gender,
            "nominative": self.nominative,
            "accusative": self.accusative,
            "dative": self.dative,
            "genitive": self.genitive,
            "example_nom": self.example_nom,
            "example_acc": self.example_acc,
            "example_dat": self.example_dat,
            "example_gen": self.example_gen,
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
