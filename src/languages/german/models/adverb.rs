use std::fmt;

use crate::domain::{
    AudioSegments, ImageSearchStrategy, LanguageDomainModel, push_segment, require_fields,
};
use crate::errors::ValidationError;
use crate::languages::german::records::AdverbRecord;
use crate::providers::ImageQueryGenerator;

const MODEL: &str = "Adverb";

/// Semantic class of a German adverb, stored by its German grammar label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdverbType {
    Location,
    Time,
    Frequency,
    Manner,
    Intensity,
    Addition,
    Limitation,
    Attitude,
    Probability,
}

/// Alternative spellings found in older vocabulary files
const ALIASES: &[(&str, AdverbType)] = &[
    ("Lokaladverb", AdverbType::Location),
    ("Temporaladverb", AdverbType::Time),
    ("Artadverb", AdverbType::Manner),
    ("Kausaladverb", AdverbType::Manner),
    ("time", AdverbType::Time),
    ("place", AdverbType::Location),
    ("location", AdverbType::Location),
    ("manner", AdverbType::Manner),
    ("intensity", AdverbType::Intensity),
];

impl AdverbType {
    pub const ALL: [AdverbType; 9] = [
        AdverbType::Location,
        AdverbType::Time,
        AdverbType::Frequency,
        AdverbType::Manner,
        AdverbType::Intensity,
        AdverbType::Addition,
        AdverbType::Limitation,
        AdverbType::Attitude,
        AdverbType::Probability,
    ];

    pub const LABELS: [&'static str; 9] = [
        "Ortsadverb",
        "Zeitadverb",
        "Häufigkeitsadverb",
        "Modaladverb",
        "Gradadverb",
        "Modaladverb (Addition)",
        "Modaladverb (Limitation)",
        "Kommentaradverb",
        "Modaladverb (Probability)",
    ];

    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Location => "LOCATION",
            Self::Time => "TIME",
            Self::Frequency => "FREQUENCY",
            Self::Manner => "MANNER",
            Self::Intensity => "INTENSITY",
            Self::Addition => "ADDITION",
            Self::Limitation => "LIMITATION",
            Self::Attitude => "ATTITUDE",
            Self::Probability => "PROBABILITY",
        }
    }

    /// Accepts canonical labels and the legacy aliases
    pub fn parse(owner: &'static str, value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == value)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == value)
                    .map(|(_, kind)| *kind)
            })
            .ok_or_else(|| ValidationError::InvalidValue {
                record: owner,
                field: "type",
                value: value.to_string(),
                allowed: Self::LABELS.to_vec(),
            })
    }

    pub fn visual_guidance(self) -> &'static str {
        match self {
            Self::Location => {
                "Consider spatial relationships, directional arrows, or environmental contexts"
            }
            Self::Time => "Use temporal symbols like clocks, calendars, or sequential imagery",
            Self::Frequency => "Show repetition patterns, cycles, or counting symbols",
            Self::Manner => "Focus on how actions are performed, style, or method indicators",
            Self::Intensity => "Use visual emphasis, gradients, or scale representations",
            Self::Addition => "Show addition, plus symbols, or accumulation",
            Self::Limitation => "Use restriction symbols, boundaries, or exclusion imagery",
            Self::Attitude => {
                "Express emotional tone or perspective through facial expressions or mood"
            }
            Self::Probability => "Show uncertainty, question marks, or probability indicators",
        }
    }
}

impl fmt::Display for AdverbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adverb {
    pub word: String,
    pub english: String,
    pub adverb_type: AdverbType,
    pub example: String,
}

impl Adverb {
    pub fn new(
        word: impl Into<String>,
        english: impl Into<String>,
        adverb_type: AdverbType,
        example: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let adverb = Self {
            word: word.into(),
            english: english.into(),
            adverb_type,
            example: example.into(),
        };
        require_fields(
            MODEL,
            &[
                ("word", adverb.word.as_str()),
                ("english", adverb.english.as_str()),
                ("example", adverb.example.as_str()),
            ],
        )?;
        Ok(adverb)
    }

    pub fn from_record(record: &AdverbRecord) -> Result<Self, ValidationError> {
        let adverb_type = AdverbType::parse(MODEL, &record.adverb_type)?;
        Self::new(&record.word, &record.english, adverb_type, &record.example)
    }

    fn build_search_context(&self) -> String {
        [
            format!("German adverb: {} (English: {})", self.word, self.english),
            format!("Type: {} ({})", self.adverb_type.label(), self.adverb_type.name()),
            format!("Example usage: {}", self.example),
            "Challenge: Adverbs are abstract concepts that modify actions or qualities."
                .to_string(),
            format!("Visual strategy: {}", self.adverb_type.visual_guidance()),
            "Generate search terms that can find images representing this concept visually."
                .to_string(),
        ]
        .join("\n")
    }
}

impl LanguageDomainModel for Adverb {
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
        ImageSearchStrategy::new("adverb", &self.word, self.build_search_context(), service)
    }
}
