/*!
 * German language bundle.
 *
 * German has the richest record catalogue: nouns, adjectives, adverbs,
 * negations, phrases, prepositions, three verb layouts and four article
 * layouts. Most records map one-to-one onto a domain model; imperative rows
 * become a [`Verb`] in placeholder mode and every article layout becomes an
 * [`Article`]. Conjugation tables are rendered straight from their record and
 * have no domain model.
 */

use std::sync::LazyLock;

use crate::app_config::LanguageSettings;
use crate::domain::LanguageDomainModel;
use crate::errors::ValidationError;
use crate::languages::{Language, LanguageProfile, TtsConfig, unsupported};
use crate::records::{Record, RecordFactory, boxed_parser};

pub mod grammar;
pub mod models;
pub mod records;

pub use models::{
    Adjective, Adverb, AdverbType, Article, ArticleFields, Negation, NegationType, Noun, Phrase,
    Preposition, Verb, VerbFields,
};
pub use records::{
    AdjectiveRecord, AdverbRecord, ArticleKind, ArticleRecord, NegationRecord, NounRecord,
    PhraseRecord, PrepositionRecord, UnifiedArticleRecord, VerbConjugationRecord,
    VerbImperativeRecord, VerbRecord,
};

fn indefinite_article(fields: &[&str]) -> Result<Box<dyn Record>, ValidationError> {
    ArticleRecord::parse(ArticleKind::Indefinite, fields)
        .map(|record| Box::new(record) as Box<dyn Record>)
}

fn negative_article(fields: &[&str]) -> Result<Box<dyn Record>, ValidationError> {
    ArticleRecord::parse(ArticleKind::Negative, fields)
        .map(|record| Box::new(record) as Box<dyn Record>)
}

fn german_factory() -> RecordFactory {
    RecordFactory::new("de")
        .register("noun", boxed_parser::<NounRecord>)
        .register("adjective", boxed_parser::<AdjectiveRecord>)
        .register("adverb", boxed_parser::<AdverbRecord>)
        .register("negation", boxed_parser::<NegationRecord>)
        .register("verb", boxed_parser::<VerbRecord>)
        .register("phrase", boxed_parser::<PhraseRecord>)
        .register("preposition", boxed_parser::<PrepositionRecord>)
        .register("verb_conjugation", boxed_parser::<VerbConjugationRecord>)
        .register("verb_imperative", boxed_parser::<VerbImperativeRecord>)
        .register("article", boxed_parser::<ArticleRecord>)
        .register("indefinite_article", indefinite_article)
        .register("negative_article", negative_article)
        .register("unified_article", boxed_parser::<UnifiedArticleRecord>)
}

static GERMAN_RECORDS: LazyLock<RecordFactory> = LazyLock::new(german_factory);

/// Process-wide German record factory for callers without a registry
pub struct GermanRecordFactory;

impl GermanRecordFactory {
    pub fn create(record_type: &str, fields: &[&str]) -> Result<Box<dyn Record>, ValidationError> {
        GERMAN_RECORDS.create(record_type, fields)
    }

    pub fn supported_types() -> Vec<&'static str> {
        GERMAN_RECORDS.supported_types()
    }

    pub fn is_supported_type(record_type: &str) -> bool {
        GERMAN_RECORDS.is_supported(record_type)
    }
}

#[derive(Debug, Clone)]
pub struct GermanLanguage {
    profile: LanguageProfile,
}

impl GermanLanguage {
    pub fn new() -> Self {
        Self {
            profile: LanguageProfile::new(
                "de",
                "German",
                TtsConfig::new("Marlene", "de-DE"),
                german_factory(),
            ),
        }
    }

    pub fn with_settings(settings: &LanguageSettings) -> Self {
        let language = Self::new();
        Self {
            profile: language.profile.apply_settings(settings),
        }
    }
}

impl Default for GermanLanguage {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for GermanLanguage {
    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn create_domain_model(
        &self,
        record: &dyn Record,
    ) -> Result<Box<dyn LanguageDomainModel>, ValidationError> {
        let any = record.as_any();
        if let Some(noun) = any.downcast_ref::<NounRecord>() {
            return Ok(Box::new(Noun::from_record(noun)?));
        }
        if let Some(adjective) = any.downcast_ref::<AdjectiveRecord>() {
            return Ok(Box::new(Adjective::from_record(adjective)?));
        }
        if let Some(adverb) = any.downcast_ref::<AdverbRecord>() {
            return Ok(Box::new(Adverb::from_record(adverb)?));
        }
        if let Some(negation) = any.downcast_ref::<NegationRecord>() {
            return Ok(Box::new(Negation::from_record(negation)?));
        }
        if let Some(phrase) = any.downcast_ref::<PhraseRecord>() {
            return Ok(Box::new(Phrase::from_record(phrase)?));
        }
        if let Some(preposition) = any.downcast_ref::<PrepositionRecord>() {
            return Ok(Box::new(Preposition::from_record(preposition)?));
        }
        if let Some(verb) = any.downcast_ref::<VerbRecord>() {
            return Ok(Box::new(Verb::from_record(verb)?));
        }
        if let Some(imperative) = any.downcast_ref::<VerbImperativeRecord>() {
            return Ok(Box::new(Verb::from_imperative(imperative)?));
        }
        if let Some(article) = any.downcast_ref::<ArticleRecord>() {
            return Ok(Box::new(Article::from_record(article)?));
        }
        if let Some(article) = any.downcast_ref::<UnifiedArticleRecord>() {
            return Ok(Box::new(Article::from_unified(article)?));
        }
        Err(unsupported(self.code(), record))
    }

    fn csv_to_record_type_mapping(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("nouns", "noun"),
            ("adjectives", "adjective"),
            ("adverbs", "adverb"),
            ("negations", "negation"),
            ("verbs", "verb"),
            ("phrases", "phrase"),
            ("prepositions", "preposition"),
            ("verbs_unified", "verb_conjugation"),
            ("verb_imperatives", "verb_imperative"),
            ("articles", "article"),
            ("indefinite_articles", "indefinite_article"),
            ("negative_articles", "negative_article"),
            ("articles_unified", "unified_article"),
        ]
    }
}
