use crate::domain::{
    AudioSegments, ImageSearchStrategy, LanguageDomainModel, push_segment, require_fields,
};
use crate::errors::ValidationError;
use crate::languages::german::grammar::{PhraseCategory, is_farewell, is_greeting};
use crate::languages::german::records::PhraseRecord;
use crate::providers::ImageQueryGenerator;

const MODEL: &str = "Phrase";

/// Fixed expression with the situation it is used in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub phrase: String,
    pub english: String,
    pub context: String,
    pub related: String,
}

impl Phrase {
    pub fn new(
        phrase: impl Into<String>,
        english: impl Into<String>,
        context: impl Into<String>,
        related: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let phrase = Self {
            phrase: phrase.into(),
            english: english.into(),
            context: context.into(),
            related: related.into(),
        };
        require_fields(
            MODEL,
            &[
                ("phrase", phrase.phrase.as_str()),
                ("english", phrase.english.as_str()),
                ("context", phrase.context.as_str()),
                ("related", phrase.related.as_str()),
            ],
        )?;
        Ok(phrase)
    }

    pub fn from_record(record: &PhraseRecord) -> Result<Self, ValidationError> {
        Self::new(
            &record.phrase,
            &record.english,
            &record.context,
            &record.related,
        )
    }

    pub fn is_greeting(&self) -> bool {
        is_greeting(&self.phrase, &self.context)
    }

    pub fn is_farewell(&self) -> bool {
        is_farewell(&self.phrase, &self.context)
    }

    pub fn phrase_category(&self) -> PhraseCategory {
        PhraseCategory::classify(&self.phrase, &self.context)
    }

    fn build_search_context(&self) -> String {
        let category = self.phrase_category();
        [
            format!("German phrase: {}", self.phrase),
            format!("English: {}", self.english),
            format!("Category: {}", category),
            format!("Context: {}", self.context),
            format!("Related phrases: {}", self.related),
            "Challenge: A phrase describes a social situation rather than an object.".to_string(),
            format!("Visual strategy: {}", category.visual_strategy()),
            "Generate search terms for a photo of people in this situation.".to_string(),
        ]
        .join("\n")
    }
}

impl LanguageDomainModel for Phrase {
    fn combined_audio_text(&self) -> String {
        self.phrase.clone()
    }

    fn audio_segments(&self) -> AudioSegments {
        let mut segments = AudioSegments::new();
        push_segment(&mut segments, "phrase_audio", &self.phrase);
        segments
    }

    fn primary_word(&self) -> String {
        self.phrase
            .split_whitespace()
            .next()
            .unwrap_or("phrase")
            .to_string()
    }

    fn image_search_strategy<'a>(
        &self,
        service: &'a dyn ImageQueryGenerator,
    ) -> ImageSearchStrategy<'a> {
        ImageSearchStrategy::new("phrase", &self.phrase, self.build_search_context(), service)
    }
}
