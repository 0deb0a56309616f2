use crate::domain::{
    AudioSegments, ImageSearchStrategy, LanguageDomainModel, push_segment, require_fields,
};
use crate::errors::ValidationError;
use crate::languages::german::records::PrepositionRecord;
use crate::providers::ImageQueryGenerator;

const MODEL: &str = "Preposition";

/// Case names accepted in the `case` column, English or German
const CASE_NAMES: &[&str] = &[
    "Accusative",
    "Dative",
    "Genitive",
    "Akkusativ",
    "Dativ",
    "Genitiv",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preposition {
    pub preposition: String,
    pub english: String,
    pub case: String,
    pub example1: String,
    pub example2: String,
}

impl Preposition {
    pub fn new(
        preposition: impl Into<String>,
        english: impl Into<String>,
        case: impl Into<String>,
        example1: impl Into<String>,
        example2: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let preposition = Self {
            preposition: preposition.into(),
            english: english.into(),
            case: case.into(),
            example1: example1.into(),
            example2: example2.into(),
        };
        require_fields(
            MODEL,
            &[
                ("preposition", preposition.preposition.as_str()),
                ("english", preposition.english.as_str()),
            ],
        )?;

        let case = preposition.case.trim();
        if !case.is_empty()
            && !case
                .split(|c: char| c == '/' || c.is_whitespace())
                .any(|part| CASE_NAMES.contains(&part))
        {
            return Err(ValidationError::InvalidValue {
                record: MODEL,
                field: "case",
                value: case.to_string(),
                allowed: CASE_NAMES.to_vec(),
            });
        }
        Ok(preposition)
    }

    pub fn from_record(record: &PrepositionRecord) -> Result<Self, ValidationError> {
        Self::new(
            &record.preposition,
            &record.english,
            &record.case,
            &record.example1,
            &record.example2,
        )
    }

    fn normalized_case(&self) -> String {
        self.case
            .split('/')
            .map(|part| match part.trim().to_lowercase().as_str() {
                "akkusativ" => "accusative".to_string(),
                "dativ" => "dative".to_string(),
                "genitiv" => "genitive".to_string(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Learner-facing explanation of the governed case
    pub fn case_description(&self) -> String {
        match self.normalized_case().as_str() {
            "accusative" => "takes accusative case (direct object)".to_string(),
            "dative" => "takes dative case (indirect object)".to_string(),
            "genitive" => "takes genitive case (possession)".to_string(),
            "accusative/dative" | "dative/accusative" => {
                "takes accusative (motion) or dative (location)".to_string()
            }
            _ => format!("takes {} case", self.case),
        }
    }

    /// Wechselpräposition: accusative for motion, dative for location
    pub fn is_two_way(&self) -> bool {
        let case = self.normalized_case();
        case.contains('/') && case.contains("accusative") && case.contains("dative")
    }

    fn build_search_context(&self) -> String {
        let two_way = if self.is_two_way() {
            " (two-way preposition)"
        } else {
            ""
        };
        [
            format!("German preposition: {}", self.preposition),
            format!("English: {}", self.english),
            format!("Grammar: {}{}", self.case_description(), two_way),
            format!("Example 1: {}", self.example1),
            format!("Example 2: {}", self.example2),
            "Challenge: Prepositions describe spatial or abstract relationships between things."
                .to_string(),
            "Generate search terms for an image showing this relationship clearly.".to_string(),
        ]
        .join("\n")
    }
}

impl LanguageDomainModel for Preposition {
    fn combined_audio_text(&self) -> String {
        [&self.preposition, &self.example1, &self.example2]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(". ")
    }

    fn audio_segments(&self) -> AudioSegments {
        let mut segments = AudioSegments::new();
        push_segment(&mut segments, "word_audio", &self.combined_audio_text());
        push_segment(&mut segments, "example1_audio", &self.example1);
        push_segment(&mut segments, "example2_audio", &self.example2);
        segments
    }

    fn primary_word(&self) -> String {
        self.preposition.clone()
    }

    fn image_search_strategy<'a>(
        &self,
        service: &'a dyn ImageQueryGenerator,
    ) -> ImageSearchStrategy<'a> {
        ImageSearchStrategy::new(
            "preposition",
            &self.preposition,
            self.build_search_context(),
            service,
        )
    }
}
