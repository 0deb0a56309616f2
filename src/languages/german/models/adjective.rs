use crate::domain::{
    AudioSegments, ImageSearchStrategy, LanguageDomainModel, push_segment, require_fields,
};
use crate::errors::ValidationError;
use crate::languages::german::grammar::{
    is_concrete_quality, is_valid_comparative, is_valid_superlative,
};
use crate::languages::german::records::AdjectiveRecord;
use crate::providers::ImageQueryGenerator;

const MODEL: &str = "Adjective";

/// German adjective with its comparison forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjective {
    pub word: String,
    pub english: String,
    pub example: String,
    pub comparative: String,
    pub superlative: String,
}

/// Outcome of checking both comparison forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjectiveValidation {
    pub comparative: bool,
    pub superlative: bool,
}

impl AdjectiveValidation {
    pub fn is_valid(self) -> bool {
        self.comparative && self.superlative
    }
}

impl Adjective {
    pub fn new(
        word: impl Into<String>,
        english: impl Into<String>,
        example: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let adjective = Self {
            word: word.into(),
            english: english.into(),
            example: example.into(),
            comparative: String::new(),
            superlative: String::new(),
        };
        require_fields(
            MODEL,
            &[
                ("word", adjective.word.as_str()),
                ("english", adjective.english.as_str()),
                ("example", adjective.example.as_str()),
            ],
        )?;
        Ok(adjective)
    }

    pub fn with_comparison(
        mut self,
        comparative: impl Into<String>,
        superlative: impl Into<String>,
    ) -> Self {
        self.comparative = comparative.into();
        self.superlative = superlative.into();
        self
    }

    pub fn from_record(record: &AdjectiveRecord) -> Result<Self, ValidationError> {
        Self::new(&record.word, &record.english, &record.example)
            .map(|adjective| adjective.with_comparison(&record.comparative, &record.superlative))
    }

    pub fn validate_comparative(&self) -> bool {
        is_valid_comparative(&self.word, &self.comparative)
    }

    /// An empty superlative is valid
    pub fn validate_superlative(&self) -> bool {
        is_valid_superlative(&self.word, &self.superlative)
    }

    pub fn validate(&self) -> AdjectiveValidation {
        AdjectiveValidation {
            comparative: self.validate_comparative(),
            superlative: self.validate_superlative(),
        }
    }

    pub fn is_concrete(&self) -> bool {
        is_concrete_quality(&self.english)
    }

    fn build_search_context(&self) -> String {
        let mut forms = format!("Forms: {}", self.word);
        for form in [&self.comparative, &self.superlative] {
            if !form.is_empty() {
                forms.push_str(" → ");
                forms.push_str(form);
            }
        }

        let (quality, strategy) = if self.is_concrete() {
            (
                "Concrete/Physical",
                "Focus on direct visual representation of the quality. Show objects, people, \
                 or scenes that clearly demonstrate this adjective through obvious visual \
                 characteristics.",
            )
        } else {
            (
                "Abstract/Conceptual",
                "Use symbolic imagery, behavioral representations, or metaphorical scenes. \
                 Abstract qualities need creative interpretation through actions, \
                 expressions, symbols, or representative scenarios.",
            )
        };

        [
            format!("German adjective: {} (English: {})", self.word, self.english),
            format!("Comparison: {}", forms),
            format!("Example usage: {}", self.example),
            format!("Quality type: {}", quality),
            "Challenge: Generate search terms for images representing this adjective quality."
                .to_string(),
            format!("Visual strategy: {}", strategy),
            "Generate search terms that photographers would use to tag images showing this \
             quality or characteristic."
                .to_string(),
        ]
        .join("\n")
    }
}

impl LanguageDomainModel for Adjective {
    /// "schön, schöner, am schönsten", skipping missing forms
    fn combined_audio_text(&self) -> String {
        [&self.word, &self.comparative, &self.superlative]
            .into_iter()
            .filter(|form| !form.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
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
        ImageSearchStrategy::new("adjective", &self.word, self.build_search_context(), service)
    }
}
