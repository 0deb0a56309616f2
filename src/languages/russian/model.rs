/*!
 * Russian noun domain model.
 *
 * Family and relationship words get their own visualization guidance: a
 * photo of a single person says nothing about "daughter" or "grandfather".
 */

use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::domain::{
    AudioSegments, ImageSearchStrategy, LanguageDomainModel, push_segment, require_fields,
};
use crate::errors::ValidationError;
use crate::languages::russian::grammar::{Animacy, Gender, derive_accusative};
use crate::languages::russian::record::RussianNounRecord;
use crate::providers::ImageQueryGenerator;

const MODEL: &str = "RussianNoun";

/// Relationship words and what an image must show for them
const FAMILY_WORDS: &[(&str, &str)] = &[
    ("мама", "mother with child or baby, showing maternal relationship"),
    ("папа", "father with child, showing paternal relationship"),
    ("дочь", "daughter with parent, showing family relationship"),
    ("сын", "son with parent, showing family relationship"),
    ("бабушка", "grandmother with grandchild, showing generational relationship"),
    ("дедушка", "grandfather with grandchild, showing generational relationship"),
    ("семья", "family group together, multiple generations"),
    ("родители", "parents with their children, family context"),
];

/// Inputs for [`RussianNoun::new`]; empty nominative/accusative are derived
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RussianNounFields {
    pub noun: String,
    pub english: String,
    pub example: String,
    pub related: String,
    pub gender: Gender,
    pub animacy: Animacy,
    pub nominative: String,
    pub genitive: String,
    pub accusative: String,
    pub instrumental: String,
    pub prepositional: String,
    pub dative: String,
    pub plural_nominative: String,
    pub plural_genitive: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RussianNoun {
    pub noun: String,
    pub english: String,
    pub example: String,
    pub related: String,
    pub gender: Gender,
    pub animacy: Animacy,
    pub nominative: String,
    pub genitive: String,
    pub accusative: String,
    pub instrumental: String,
    pub prepositional: String,
    pub dative: String,
    pub plural_nominative: String,
    pub plural_genitive: String,
}

impl RussianNoun {
    pub fn new(fields: RussianNounFields) -> Result<Self, ValidationError> {
        require_fields(
            MODEL,
            &[
                ("noun", fields.noun.as_str()),
                ("english", fields.english.as_str()),
            ],
        )?;

        let nominative = if fields.nominative.is_empty() {
            fields.noun.clone()
        } else {
            fields.nominative
        };
        let accusative = if fields.accusative.is_empty() {
            derive_accusative(fields.animacy, &fields.noun, &nominative, &fields.genitive)
        } else {
            fields.accusative
        };

        Ok(Self {
            noun: fields.noun,
            english: fields.english,
            example: fields.example,
            related: fields.related,
            gender: fields.gender,
            animacy: fields.animacy,
            nominative,
            genitive: fields.genitive,
            accusative,
            instrumental: fields.instrumental,
            prepositional: fields.prepositional,
            dative: fields.dative,
            plural_nominative: fields.plural_nominative,
            plural_genitive: fields.plural_genitive,
        })
    }

    pub fn from_record(record: &RussianNounRecord) -> Result<Self, ValidationError> {
        Self::new(RussianNounFields {
            noun: record.noun.clone(),
            english: record.english.clone(),
            example: record.example.clone(),
            related: record.related.clone(),
            gender: record.gender,
            animacy: record.animacy,
            nominative: record.nominative.clone(),
            genitive: record.genitive.clone(),
            accusative: record.accusative.clone(),
            instrumental: record.instrumental.clone(),
            prepositional: record.prepositional.clone(),
            dative: record.dative.clone(),
            plural_nominative: record.plural_nominative.clone(),
            plural_genitive: record.plural_genitive.clone(),
        })
    }

    /// Spoken case drill; the accusative is only named when it differs
    pub fn case_pattern_text(&self) -> String {
        let mut cases = Vec::new();
        if !self.nominative.is_empty() {
            cases.push(format!("именительный {}", self.nominative));
        }
        if !self.genitive.is_empty() {
            cases.push(format!("родительный {}", self.genitive));
        }
        if !self.accusative.is_empty() && self.accusative != self.nominative {
            cases.push(format!("винительный {}", self.accusative));
        }
        if cases.is_empty() {
            self.noun.clone()
        } else {
            cases.join(", ")
        }
    }

    /// True when any case besides the nominative has its own form
    pub fn has_case_forms(&self) -> bool {
        let oblique = [&self.genitive, &self.dative, &self.instrumental, &self.prepositional];
        oblique.iter().any(|form| !form.is_empty())
            || (!self.accusative.is_empty() && self.accusative != self.nominative)
    }

    pub fn grammatical_info(&self) -> Value {
        json!({
            "gender": self.gender.as_str(),
            "animacy": self.animacy.as_str(),
            "base_form": self.noun,
            "primary_cases": {
                "nominative": self.nominative,
                "genitive": self.genitive,
                "accusative": self.accusative,
            },
        })
    }

    pub fn display_cases(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("Nominative", self.nominative.clone()),
            ("Genitive", self.genitive.clone()),
            ("Accusative", self.accusative.clone()),
            ("Instrumental", self.instrumental.clone()),
            ("Prepositional", self.prepositional.clone()),
            ("Dative", self.dative.clone()),
        ])
    }

    pub fn plural_forms(&self) -> BTreeMap<&'static str, String> {
        let mut forms = BTreeMap::new();
        if !self.plural_nominative.is_empty() {
            forms.insert("Plural Nominative", self.plural_nominative.clone());
        }
        if !self.plural_genitive.is_empty() {
            forms.insert("Plural Genitive", self.plural_genitive.clone());
        }
        forms
    }

    /// Labelled forms for the card back, skipping empty cases
    pub fn display_forms(&self) -> BTreeMap<&'static str, String> {
        let mut forms = BTreeMap::from([
            ("Base", self.noun.clone()),
            ("English", self.english.clone()),
        ]);
        let optional = [
            ("Genitive", &self.genitive),
            ("Instrumental", &self.instrumental),
            ("Prepositional", &self.prepositional),
            ("Dative", &self.dative),
            ("Plural", &self.plural_nominative),
        ];
        for (label, form) in optional {
            if !form.is_empty() {
                forms.insert(label, form.clone());
            }
        }
        if !self.accusative.is_empty() && self.accusative != self.nominative {
            forms.insert("Accusative", self.accusative.clone());
        }
        forms
    }

    fn visual_strategy(&self) -> String {
        match FAMILY_WORDS.iter().find(|(word, _)| *word == self.noun) {
            Some((_, scene)) => format!(
                "IMPORTANT: Show {}. The image must clearly demonstrate the family \
                 relationship, not just a single person.",
                scene
            ),
            None => "Focus on clear visual representation of the concept. \
                     Show the actual object, person, or situation in context."
                .to_string(),
        }
    }

    fn build_search_context(&self) -> String {
        let example = if self.example.is_empty() {
            "No example available"
        } else {
            self.example.as_str()
        };
        format!(
            "Russian Noun Learning Card Generation:\n\
             \n\
             WORD DETAILS:\n\
             - Russian: {noun}\n\
             - English: {english}\n\
             - Gender: {gender}\n\
             - Animacy: {animacy}\n\
             \n\
             VISUALIZATION STRATEGY:\n\
             {strategy}\n\
             \n\
             EXAMPLE USAGE:\n\
             {example}\n\
             \n\
             SEARCH TERM GENERATION INSTRUCTIONS:\n\
             Generate 2-4 word search terms that capture the essence of \"{english}\" \
             with the visualization strategy above. Focus on terms that photographers \
             would use to tag images of this concept.\n",
            noun = self.noun,
            english = self.english,
            gender = self.gender,
            animacy = self.animacy,
            strategy = self.visual_strategy(),
            example = example,
        )
    }
}

impl LanguageDomainModel for RussianNoun {
    fn combined_audio_text(&self) -> String {
        self.noun.clone()
    }

    fn audio_segments(&self) -> AudioSegments {
        let mut segments = AudioSegments::new();
        push_segment(&mut segments, "word_audio", &self.noun);
        push_segment(&mut segments, "example_audio", &self.example);
        if self.has_case_forms() {
            push_segment(&mut segments, "cases_audio", &self.case_pattern_text());
        }
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
