/*!
 * Closed enumeration of record kinds and their deck-facing names.
 */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Every record kind the library knows how to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    Noun,
    Adjective,
    Adverb,
    Negation,
    Phrase,
    VerbConjugation,
    UnifiedArticle,
    Preposition,
    Verb,
    VerbImperative,
    Article,
    IndefiniteArticle,
    NegativeArticle,
    KoreanNoun,
}

impl RecordType {
    pub const ALL: [RecordType; 14] = [
        Self::Noun,
        Self::Adjective,
        Self::Adverb,
        Self::Negation,
        Self::Phrase,
        Self::VerbConjugation,
        Self::UnifiedArticle,
        Self::Preposition,
        Self::Verb,
        Self::VerbImperative,
        Self::Article,
        Self::IndefiniteArticle,
        Self::NegativeArticle,
        Self::KoreanNoun,
    ];

    /// Snake-case tag used in CSV mappings and factories
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Negation => "negation",
            Self::Phrase => "phrase",
            Self::VerbConjugation => "verb_conjugation",
            Self::UnifiedArticle => "unified_article",
            Self::Preposition => "preposition",
            Self::Verb => "verb",
            Self::VerbImperative => "verb_imperative",
            Self::Article => "article",
            Self::IndefiniteArticle => "indefinite_article",
            Self::NegativeArticle => "negative_article",
            Self::KoreanNoun => "korean_noun",
        }
    }

    /// Deck section the card lands in, e.g. "Verbs"
    pub fn subdeck_name(self) -> &'static str {
        match self {
            Self::Noun | Self::KoreanNoun => "Nouns",
            Self::Verb | Self::VerbConjugation | Self::VerbImperative => "Verbs",
            Self::Adjective => "Adjectives",
            Self::Adverb => "Adverbs",
            Self::Preposition => "Prepositions",
            Self::Phrase => "Phrases",
            Self::Negation => "Negations",
            Self::Article | Self::IndefiniteArticle | Self::NegativeArticle | Self::UnifiedArticle => {
                "Articles"
            }
        }
    }

    /// Lowercase key for aggregating results per section
    pub fn result_key(self) -> &'static str {
        match self {
            Self::Noun | Self::KoreanNoun => "nouns",
            Self::Verb | Self::VerbConjugation | Self::VerbImperative => "verbs",
            Self::Adjective => "adjectives",
            Self::Adverb => "adverbs",
            Self::Preposition => "prepositions",
            Self::Phrase => "phrases",
            Self::Negation => "negations",
            Self::Article | Self::IndefiniteArticle | Self::NegativeArticle | Self::UnifiedArticle => {
                "articles"
            }
        }
    }

    /// Human label, e.g. "Verb Conjugation"
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Noun | Self::KoreanNoun => "Noun",
            Self::Verb => "Verb",
            Self::VerbConjugation => "Verb Conjugation",
            Self::VerbImperative => "Verb Imperative",
            Self::Adjective => "Adjective",
            Self::Adverb => "Adverb",
            Self::Preposition => "Preposition",
            Self::Phrase => "Phrase",
            Self::Negation => "Negation",
            Self::UnifiedArticle => "Unified Article",
            Self::Article => "Article",
            Self::IndefiniteArticle => "Indefinite Article",
            Self::NegativeArticle => "Negative Article",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ValidationError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|record_type| record_type.as_str() == tag)
            .ok_or_else(|| ValidationError::UnknownRecordType {
                tag: tag.to_string(),
                supported: Self::ALL.iter().map(|t| t.as_str().to_string()).collect(),
            })
    }
}
