use crate::domain::{
    AudioSegments, ImageSearchStrategy, LanguageDomainModel, push_segment, require_fields,
};
use crate::errors::ValidationError;
use crate::languages::german::grammar::is_concrete_noun;
use crate::languages::german::records::NounRecord;
use crate::providers::ImageQueryGenerator;
use crate::records::fields::ensure_allowed;

const MODEL: &str = "Noun";
const ARTICLES: &[&str] = &["der", "die", "das"];

/// German noun with its gender-marking article and plural
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Noun {
    pub noun: String,
    pub article: String,
    pub english: String,
    pub plural: String,
    pub example: String,
    pub related: String,
}

impl Noun {
    pub fn new(
        noun: impl Into<String>,
        article: impl Into<String>,
        english: impl Into<String>,
        plural: impl Into<String>,
        example: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let noun = Self {
            noun: noun.into(),
            article: article.into(),
            english: english.into(),
            plural: plural.into(),
            example: example.into(),
            related: String::new(),
        };
        require_fields(
            MODEL,
            &[
                ("noun", noun.noun.as_str()),
                ("article", noun.article.as_str()),
                ("english", noun.english.as_str()),
                ("example", noun.example.as_str()),
            ],
        )?;
        ensure_allowed(MODEL, "article", &noun.article, ARTICLES)?;
        Ok(noun)
    }

    pub fn with_related(mut self, related: impl Into<String>) -> Self {
        self.related = related.into();
        self
    }

    pub fn from_record(record: &NounRecord) -> Result<Self, ValidationError> {
        Self::new(
            &record.noun,
            &record.article,
            &record.english,
            &record.plural,
            &record.example,
        )
        .map(|noun| noun.with_related(&record.related))
    }

    /// False for abstract concepts that cannot be photographed directly
    pub fn is_concrete(&self) -> bool {
        is_concrete_noun(&self.noun)
    }

    fn build_search_context(&self) -> String {
        let (kind, strategy) = if self.is_concrete() {
            (
                "Concrete",
                "Show the object itself, clearly visible and recognisable",
            )
        } else {
            (
                "Abstract",
                "Use symbolic imagery or a scene that evokes the concept",
            )
        };
        [
            format!("German word: {} means {}.", self.noun, self.english),
            format!("Gender: {} {}", self.article, self.noun),
            format!("Example usage: {}", self.example),
            format!("Noun type: {}", kind),
            format!("Visual strategy: {}", strategy),
            "Generate a simple search term.".to_string(),
        ]
        .join("\n")
    }
}

impl LanguageDomainModel for Noun {
    /// "die Katze, die Katzen"
    fn combined_audio_text(&self) -> String {
        if self.plural.is_empty() {
            return format!("{} {}", self.article, self.noun);
        }
        if ["der ", "die ", "das "]
            .iter()
            .any(|article| self.plural.starts_with(article))
        {
            format!("{} {}, {}", self.article, self.noun, self.plural)
        } else {
            format!("{} {}, die {}", self.article, self.noun, self.plural)
        }
    }

    fn audio_segments(&self) -> AudioSegments {
        let mut segments = AudioSegments::new();
        push_segment(&mut segments, "word_audio", &self.combined_audio_text());
        push_segment(&mut segments, "example_audio", &self.example);
        segments
    }

    fn primary_word(&self) -> String {
        self.noun.clone()
    }

    fn image_search_strategy<'a>(
        &self,
        service: &'a dyn ImageQueryGenerator,
    ) -> ImageSearchStrategy<'a> {
        ImageSearchStrategy::new("noun", &self.noun, self.build_search_context(), service)
    }
}
