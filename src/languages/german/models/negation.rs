use std::fmt;

use crate::domain::{
    AudioSegments, ImageSearchStrategy, LanguageDomainModel, push_segment, require_fields,
};
use crate::errors::ValidationError;
use crate::languages::german::grammar::is_valid_negation_position;
use crate::languages::german::records::NegationRecord;
use crate::providers::ImageQueryGenerator;

const MODEL: &str = "Negation";

/// Grammatical role of a negation word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NegationType {
    General,
    Article,
    Pronoun,
    Temporal,
    Spatial,
    Correlative,
    Intensifier,
}

impl NegationType {
    pub const ALL: [NegationType; 7] = [
        NegationType::General,
        NegationType::Article,
        NegationType::Pronoun,
        NegationType::Temporal,
        NegationType::Spatial,
        NegationType::Correlative,
        NegationType::Intensifier,
    ];

    pub const LABELS: [&'static str; 7] = [
        "general",
        "article",
        "pronoun",
        "temporal",
        "spatial",
        "correlative",
        "intensifier",
    ];

    pub fn as_str(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    /// Case-insensitive lookup by label
    pub fn parse(owner: &'static str, value: &str) -> Result<Self, ValidationError> {
        let normalized = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ValidationError::InvalidValue {
                record: owner,
                field: "type",
                value: value.trim().to_string(),
                allowed: Self::LABELS.to_vec(),
            })
    }

    pub fn visual_strategy(self) -> &'static str {
        match self {
            Self::General => {
                "Use prohibition symbols like stop signs, red X marks, or crossed-out imagery. \
                 Show actions or states being negated."
            }
            Self::Article => {
                "Show absence or lack of objects. Use empty spaces, zero symbols, or 'no entry' \
                 signs with objects."
            }
            Self::Pronoun => {
                "Represent emptiness or void. Show silhouettes, empty chairs, or spaces where \
                 people/things should be but aren't."
            }
            Self::Temporal => {
                "Use time-related imagery with prohibition. Show clocks with X marks, calendars \
                 crossed out, or 'never' symbols."
            }
            Self::Spatial => {
                "Show empty locations or 'nowhere' concepts. Use void spaces, maps with no \
                 destinations, or empty landscapes."
            }
            Self::Correlative => {
                "Represent choice rejection. Show two options both being refused, either/or \
                 scenarios with both crossed out."
            }
            Self::Intensifier => {
                "Emphasize prohibition strongly. Use bold red symbols, multiple X marks, or \
                 intensified 'forbidden' imagery."
            }
        }
    }
}

impl fmt::Display for NegationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negation {
    pub word: String,
    pub english: String,
    pub negation_type: NegationType,
    pub example: String,
}

impl Negation {
    pub fn new(
        word: impl Into<String>,
        english: impl Into<String>,
        negation_type: NegationType,
        example: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let negation = Self {
            word: word.into(),
            english: english.into(),
            negation_type,
            example: example.into(),
        };
        require_fields(
            MODEL,
            &[
                ("word", negation.word.as_str()),
                ("english", negation.english.as_str()),
                ("example", negation.example.as_str()),
            ],
        )?;
        Ok(negation)
    }

    pub fn from_record(record: &NegationRecord) -> Result<Self, ValidationError> {
        Self::new(
            &record.word,
            &record.english,
            record.negation_type,
            &record.example,
        )
    }

    /// The example must use the negation, read as a sentence and place it correctly
    pub fn validate_example(&self) -> bool {
        let example = self.example.trim();
        let lowered = example.to_lowercase();
        let uses_word = self
            .word
            .split_whitespace()
            .any(|part| lowered.contains(&part.to_lowercase()));
        let punctuated = example.ends_with(['.', '!', '?']);
        let capitalised = example.chars().next().is_some_and(char::is_uppercase);

        uses_word && punctuated && capitalised && self.validate_position()
    }

    pub fn validate_position(&self) -> bool {
        is_valid_negation_position(&self.word, self.negation_type, &self.example)
    }

    fn build_search_context(&self) -> String {
        [
            format!("German negation: {} (English: {})", self.word, self.english),
            format!("Type: {} negation", self.negation_type),
            format!("Example usage: {}", self.example),
            "Challenge: Negations express absence or refusal, which has no direct visual form."
                .to_string(),
            format!("Visual strategy: {}", self.negation_type.visual_strategy()),
            "Generate search terms that can find images representing this concept visually."
                .to_string(),
        ]
        .join("\n")
    }
}

impl LanguageDomainModel for Negation {
    fn combined_audio_text(&self) -> String {
        format!("{}. {}", self.word, self.example)
    }

    fn audio_segments(&self) -> AudioSegments {
        let mut segments = AudioSegments::new();
        push_segment(&mut segments, "word_audio", &self.combined_audio_text());
        push_segment(&mut segments, "example_audio", &self.example);
        segments
    }

    fn primary_word(&self) -> String {
        self.word.clone()
    }

    fn image_search_strategy<'a>(
        &self,
        service: &'a dyn ImageQueryGenerator,
    ) -> ImageSearchStrategy<'a> {
        ImageSearchStrategy::new("negation", &self.word, self.build_search_context(), service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::MockImageQueryService;

    fn negation(word: &str, kind: NegationType, example: &str) -> Negation {
        Negation::new(word, "x", kind, example).unwrap()
    }

    #[test]
    fn test_parse_shouldIgnoreCase() {
        assert_eq!(
            NegationType::parse(MODEL, " Temporal ").unwrap(),
            NegationType::Temporal
        );
    }

    #[test]
    fn test_parse_withUnknownType_shouldListLabels() {
        let err = NegationType::parse(MODEL, "double").unwrap_err();
        assert!(err.to_string().contains("general, article, pronoun"));
    }

    #[test]
    fn test_validate_example_withWellFormedSentence_shouldPass() {
        assert!(negation("nicht", NegationType::General, "Ich komme nicht.").validate_example());
        assert!(negation("kein", NegationType::Article, "Ich habe kein Auto.").validate_example());
    }

    #[test]
    fn test_validate_example_withoutPunctuation_shouldFail() {
        assert!(!negation("nicht", NegationType::General, "Ich komme nicht").validate_example());
    }

    #[test]
    fn test_validate_example_withLowercaseStart_shouldFail() {
        assert!(!negation("nicht", NegationType::General, "ich komme nicht.").validate_example());
    }

    #[test]
    fn test_validate_position_generalAtSentenceStart_shouldFail() {
        assert!(!negation("nicht", NegationType::General, "Nicht heute.").validate_position());
    }

    #[test]
    fn test_validate_position_correlative_shouldNeedRoomAfter() {
        let correlative = negation(
            "weder",
            NegationType::Correlative,
            "Ich trinke weder Kaffee noch Tee.",
        );
        assert!(correlative.validate_position());
        assert!(!negation("weder", NegationType::Correlative, "Ich weder.").validate_position());
    }

    #[test]
    fn test_search_context_shouldUseTypeStrategy() {
        let service = MockImageQueryService::working();
        let model = negation("nie", NegationType::Temporal, "Ich rauche nie.");
        let strategy = model.image_search_strategy(&service);
        assert!(strategy.context().contains("Type: temporal negation"));
        assert!(strategy.context().contains("calendars"));
    }
}
