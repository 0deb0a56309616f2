/*!
 * Korean noun domain model.
 *
 * Learners from English mostly trip over particle allomorphs and counters,
 * so the model keeps both front and centre: particle forms are derived from
 * the final syllable when not supplied and the counter phrase is synthesised
 * from the semantic category.
 */

use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::domain::{
    AudioSegments, ImageSearchStrategy, LanguageDomainModel, push_segment, require_fields,
};
use crate::errors::ValidationError;
use crate::languages::korean::hangul::{
    GENERAL_COUNTER, Particle, ParticleForms, SEMANTIC_CATEGORIES, counter_example,
    has_final_consonant,
};
use crate::languages::korean::record::KoreanNounRecord;
use crate::providers::ImageQueryGenerator;
use crate::records::fields::ensure_allowed;

const MODEL: &str = "KoreanNoun";

/// Inputs for [`KoreanNoun::new`]; empty derived fields are filled in
#[derive(Debug, Clone, PartialEq)]
pub struct KoreanNounFields {
    pub hangul: String,
    pub romanization: String,
    pub english: String,
    pub particles: ParticleForms,
    pub primary_counter: String,
    pub counter_example: String,
    pub honorific_form: Option<String>,
    pub semantic_category: String,
    pub example: String,
    pub example_english: String,
    pub usage_notes: Option<String>,
}

impl Default for KoreanNounFields {
    fn default() -> Self {
        Self {
            hangul: String::new(),
            romanization: String::new(),
            english: String::new(),
            particles: ParticleForms::default(),
            primary_counter: GENERAL_COUNTER.to_string(),
            counter_example: String::new(),
            honorific_form: None,
            semantic_category: "object".to_string(),
            example: String::new(),
            example_english: String::new(),
            usage_notes: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KoreanNoun {
    pub hangul: String,
    pub romanization: String,
    pub english: String,
    pub particles: ParticleForms,
    pub primary_counter: String,
    pub counter_example: String,
    pub honorific_form: Option<String>,
    pub semantic_category: String,
    pub example: String,
    pub example_english: String,
    pub usage_notes: Option<String>,
}

impl KoreanNoun {
    pub fn new(fields: KoreanNounFields) -> Result<Self, ValidationError> {
        require_fields(
            MODEL,
            &[
                ("hangul", fields.hangul.as_str()),
                ("english", fields.english.as_str()),
            ],
        )?;
        ensure_allowed(
            MODEL,
            "semantic_category",
            &fields.semantic_category,
            SEMANTIC_CATEGORIES,
        )?;

        let particles = fields.particles.fill_missing(&fields.hangul);
        let counter_example =
            if fields.counter_example.is_empty() && !fields.primary_counter.is_empty() {
                counter_example(
                    &fields.hangul,
                    &fields.primary_counter,
                    &fields.semantic_category,
                )
            } else {
                fields.counter_example
            };

        Ok(Self {
            hangul: fields.hangul,
            romanization: fields.romanization,
            english: fields.english,
            particles,
            primary_counter: fields.primary_counter,
            counter_example,
            honorific_form: fields.honorific_form,
            semantic_category: fields.semantic_category,
            example: fields.example,
            example_english: fields.example_english,
            usage_notes: fields.usage_notes,
        })
    }

    pub fn from_record(record: &KoreanNounRecord) -> Result<Self, ValidationError> {
        Self::new(KoreanNounFields {
            hangul: record.hangul.clone(),
            romanization: record.romanization.clone(),
            english: record.english.clone(),
            particles: record.particles.clone(),
            primary_counter: record.primary_counter.clone(),
            counter_example: record.counter_example.clone(),
            honorific_form: record.honorific_form.clone(),
            semantic_category: record.semantic_category.clone(),
            example: record.example.clone(),
            example_english: record.example_english.clone(),
            usage_notes: record.usage_notes.clone(),
        })
    }

    pub fn has_final_consonant(&self) -> bool {
        has_final_consonant(&self.hangul)
    }

    /// "은/는: 책은 | 이/가: 책이 | 을/를: 책을"
    pub fn particle_pattern_text(&self) -> String {
        [
            (Particle::Topic, &self.particles.topic),
            (Particle::Subject, &self.particles.subject),
            (Particle::Object, &self.particles.object),
        ]
        .iter()
        .map(|(particle, form)| format!("{}: {}", particle.label(), form))
        .collect::<Vec<_>>()
        .join(" | ")
    }

    pub fn counter_information(&self) -> String {
        if self.counter_example.is_empty() {
            format!("Counter: {}", self.primary_counter)
        } else {
            format!("Counter: {} (ex: {})", self.primary_counter, self.counter_example)
        }
    }

    pub fn grammatical_info(&self) -> Value {
        json!({
            "semantic_category": self.semantic_category,
            "primary_counter": self.primary_counter,
            "has_honorific": self.honorific_form.is_some(),
            "particle_patterns": {
                "topic": self.particles.topic,
                "subject": self.particles.subject,
                "object": self.particles.object,
                "possessive": self.particles.possessive,
            },
            "phonological_info": {
                "has_final_consonant": self.has_final_consonant(),
                "romanization": self.romanization,
            },
        })
    }

    /// Labelled forms for the card back
    pub fn display_forms(&self) -> BTreeMap<&'static str, String> {
        let mut forms = BTreeMap::from([
            ("Hangul", self.hangul.clone()),
            ("Romanization", self.romanization.clone()),
            ("English", self.english.clone()),
            ("Topic", self.particles.topic.clone()),
            ("Subject", self.particles.subject.clone()),
            ("Object", self.particles.object.clone()),
        ]);
        let counter = if self.counter_example.is_empty() {
            self.primary_counter.clone()
        } else {
            format!("{} ({})", self.primary_counter, self.counter_example)
        };
        forms.insert("Counter", counter);
        if let Some(honorific) = self.honorific_form.as_ref().filter(|h| !h.is_empty()) {
            forms.insert("Honorific", honorific.clone());
        }
        if !self.example.is_empty() {
            forms.insert("Example", self.example.clone());
            if !self.example_english.is_empty() {
                forms.insert("Example (EN)", self.example_english.clone());
            }
        }
        forms
    }

    fn visual_strategy(&self) -> &'static str {
        match self.semantic_category.as_str() {
            "person" => "Show a person clearly in this role, with context that identifies it",
            "place" => "Show a recognisable view of the location",
            "abstract" => "Use symbolic imagery or a scene that evokes the concept",
            "animal" => "Show the animal itself in a natural pose",
            "food" => "Show the dish or ingredient, plated and well lit",
            _ => "Show the object itself, isolated and clearly visible",
        }
    }

    fn build_search_context(&self) -> String {
        let mut headline = format!("Korean noun: {} ({})", self.hangul, self.english);
        if self.semantic_category != "object" {
            headline.push_str(&format!(", Category: {}", self.semantic_category));
        }
        if let Some(notes) = self.usage_notes.as_ref().filter(|n| !n.is_empty()) {
            headline.push_str(&format!(", Usage: {}", notes));
        }

        let mut lines = vec![headline];
        if !self.example.is_empty() {
            let mut example = format!("Example usage: {}", self.example);
            if !self.example_english.is_empty() {
                example.push_str(&format!(" ({})", self.example_english));
            }
            lines.push(example);
        }
        lines.push(String::new());
        lines.push(format!("Visual strategy: {}", self.visual_strategy()));
        lines.push(String::new());
        lines.push(
            "Generate English image search terms that find a clear photo of this noun."
                .to_string(),
        );
        lines.join("\n")
    }
}

impl LanguageDomainModel for KoreanNoun {
    fn combined_audio_text(&self) -> String {
        let particles = self.particles.spoken();
        if self.example.is_empty() {
            format!("{}. {}", self.hangul, particles)
        } else {
            format!("{}. {}. {}", self.hangul, particles, self.example)
        }
    }

    fn audio_segments(&self) -> AudioSegments {
        let mut segments = AudioSegments::new();
        push_segment(&mut segments, "word_audio", &self.hangul);
        push_segment(&mut segments, "particles_audio", &self.particles.spoken());
        push_segment(&mut segments, "counter_audio", &self.counter_example);
        push_segment(&mut segments, "example_audio", &self.example);
        segments
    }

    fn primary_word(&self) -> String {
        self.hangul.clone()
    }

    fn image_search_strategy<'a>(
        &self,
        service: &'a dyn ImageQueryGenerator,
    ) -> ImageSearchStrategy<'a> {
        ImageSearchStrategy::new("noun", &self.hangul, self.build_search_context(), service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::MockImageQueryService;

    fn book() -> KoreanNoun {
        KoreanNoun::new(KoreanNounFields {
            hangul: "책".to_string(),
            romanization: "chaek".to_string(),
            english: "book".to_string(),
            primary_counter: "권".to_string(),
            example: "책을 읽어요.".to_string(),
            ..KoreanNounFields::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_shouldDeriveParticlesAndCounter() {
        let noun = book();
        assert_eq!(noun.particles.topic, "책은");
        assert_eq!(noun.particles.possessive, "책의");
        assert_eq!(noun.counter_example, "책 세 권");
    }

    #[test]
    fn test_grammatical_info_shouldDescribeParticlesAndPhonology() {
        let info = book().grammatical_info();
        assert_eq!(info["primary_counter"], "권");
        assert_eq!(info["has_honorific"], false);
        assert_eq!(info["particle_patterns"]["object"], "책을");
        assert_eq!(info["phonological_info"]["has_final_consonant"], true);
        assert_eq!(info["phonological_info"]["romanization"], "chaek");
    }

    #[test]
    fn test_new_withEmptyEnglish_shouldFail() {
        let result = KoreanNoun::new(KoreanNounFields {
            hangul: "책".to_string(),
            ..KoreanNounFields::default()
        });
        assert!(matches!(
            result,
            Err(ValidationError::EmptyField { field: "english", .. })
        ));
    }

    #[test]
    fn test_combined_audio_text_shouldListParticles() {
        assert_eq!(
            book().combined_audio_text(),
            "책. 책은, 책이, 책을. 책을 읽어요."
        );
    }

    #[test]
    fn test_particle_pattern_text_shouldLabelEachParticle() {
        assert_eq!(
            book().particle_pattern_text(),
            "은/는: 책은 | 이/가: 책이 | 을/를: 책을"
        );
    }

    #[test]
    fn test_counter_information_shouldIncludeExample() {
        assert_eq!(book().counter_information(), "Counter: 권 (ex: 책 세 권)");
    }

    #[test]
    fn test_audio_segments_shouldIncludeCounter() {
        let segments = book().audio_segments();
        assert_eq!(segments["counter_audio"], "책 세 권");
        assert_eq!(segments["particles_audio"], "책은, 책이, 책을");
    }

    #[test]
    fn test_search_context_shouldStartWithHeadline() {
        let service = MockImageQueryService::working();
        let strategy = book().image_search_strategy(&service);
        assert!(strategy.context().starts_with("Korean noun: 책 (book)\n"));
        assert!(strategy.context().contains("Example usage: 책을 읽어요."));
    }
}
