/*!
 * One tense of a verb, conjugated across all six persons.
 *
 * The `sie` column does double duty: it carries the third person plural for
 * finite tenses, and the auxiliary compound (e.g. "haben gespielt") for the
 * perfect, which is why the perfect only requires that one column.
 */

use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::languages::german::records::impl_record;
use crate::records::{FieldArity, FieldReader, MediaFields, RecordSchema, RecordType, into_dict};

const RECORD: &str = "VerbConjugationRecord";

pub const CLASSIFICATIONS: &[&str] = &["regelmäßig", "unregelmäßig", "gemischt", "modal"];
pub const AUXILIARIES: &[&str] = &["haben", "sein"];
pub const TENSES: &[&str] = &[
    "present",
    "preterite",
    "perfect",
    "future",
    "subjunctive",
    "imperative",
];

/// Weather verbs only conjugate in the third person
pub const IMPERSONAL_VERBS: &[&str] = &["regnen", "schneien", "hageln", "donnern", "blitzen"];

#[derive(Debug, Clone, PartialEq)]
pub struct VerbConjugationRecord {
    pub infinitive: String,
    pub english: String,
    pub classification: String,
    pub separable: bool,
    pub auxiliary: String,
    pub tense: String,
    pub ich: String,
    pub du: String,
    pub er: String,
    pub wir: String,
    pub ihr: String,
    pub sie: String,
    pub example: String,
    media: MediaFields,
}

impl VerbConjugationRecord {
    /// Person forms in `ich, du, er, wir, ihr, sie` order
    pub fn persons(&self) -> [(&'static str, &str); 6] {
        [
            ("ich", self.ich.as_str()),
            ("du", self.du.as_str()),
            ("er", self.er.as_str()),
            ("wir", self.wir.as_str()),
            ("ihr", self.ihr.as_str()),
            ("sie", self.sie.as_str()),
        ]
    }

    pub fn is_impersonal(&self) -> bool {
        IMPERSONAL_VERBS.contains(&self.infinitive.as_str())
    }

    fn check_completeness(&self) -> Result<(), ValidationError> {
        let incomplete = |reason: String| ValidationError::Incomplete {
            record: RECORD,
            reason,
        };

        match self.tense.as_str() {
            "present" | "preterite" | "subjunctive" if self.is_impersonal() => {
                if self.sie.is_empty() {
                    return Err(incomplete(format!(
                        "Impersonal verb {} requires 'sie' form",
                        self.infinitive
                    )));
                }
            }
            "present" | "preterite" | "subjunctive" => {
                let missing: Vec<&str> = self
                    .persons()
                    .iter()
                    .filter(|(_, form)| form.is_empty())
                    .map(|(person, _)| *person)
                    .collect();
                if !missing.is_empty() {
                    return Err(incomplete(format!(
                        "{} tense requires all persons: missing {}",
                        self.tense,
                        missing.join(", ")
                    )));
                }
            }
            "imperative" => {
                for (person, form) in [("du", self.du.as_str()), ("ihr", self.ihr.as_str())] {
                    if form.is_empty() {
                        return Err(incomplete(format!(
                            "Imperative tense requires '{}' form",
                            person
                        )));
                    }
                }
            }
            "perfect" if self.sie.is_empty() => {
                return Err(incomplete(
                    "Perfect tense requires auxiliary form in 'sie' field".to_string(),
                ));
            }
            _ => {}
        }
        Ok(())
    }

    fn declared_fields(&self) -> Map<String, Value> {
        into_dict(json!({
            "infinitive": self.infinitive,
            "english": self.english,
            "classification": self.classification,
            "separable": self.separable,
            "auxiliary": self.auxiliary,
            "tense": self.tense,
            "ich": self.ich,
            "du": self.du,
            "er": self.er,
            "wir": self.wir,
            "ihr": self.ihr,
            "sie": self.sie,
            "example": self.example,
        }))
    }
}

impl RecordSchema for VerbConjugationRecord {
    const FIELD_NAMES: &'static [&'static str] = &[
        "infinitive",
        "english",
        "classification",
        "separable",
        "auxiliary",
        "tense",
        "ich",
        "du",
        "er",
        "wir",
        "ihr",
        "sie",
        "example",
    ];
    const ARITY: FieldArity = FieldArity::AtLeast(12);
    const MEDIA_SLOTS: &'static [&'static str] = &["word_audio", "example_audio", "image"];

    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError> {
        let row = FieldReader::new(RECORD, Self::ARITY, fields)?;
        let record = Self {
            infinitive: row.text(0),
            english: row.text(1),
            classification: row.one_of(2, "classification", CLASSIFICATIONS)?,
            separable: row.truthy(3),
            auxiliary: row.one_of(4, "auxiliary", AUXILIARIES)?,
            tense: row.one_of(5, "tense", TENSES)?,
            ich: row.text(6),
            du: row.text(7),
            er: row.text(8),
            wir: row.text(9),
            ihr: row.text(10),
            sie: row.text(11),
            example: row.text(12),
            media: MediaFields::new(RECORD, Self::MEDIA_SLOTS),
        };
        record.check_completeness()?;
        Ok(record)
    }
}

impl_record!(VerbConjugationRecord, RecordType::VerbConjugation, infinitive);

#[cfg(test)]
mod tests {
    use super::*;

    fn row(infinitive: &'static str, tense: &'static str) -> Vec<&'static str> {
        vec![
            infinitive,
            "to play",
            "regelmäßig",
            "false",
            "haben",
            tense,
            "spiele",
            "spielst",
            "spielt",
            "spielen",
            "spielt",
            "spielen",
            "Wir spielen Fußball.",
        ]
    }

    #[test]
    fn test_from_csv_fields_withFullPresent_shouldParse() {
        let record = VerbConjugationRecord::from_csv_fields(&row("spielen", "present")).unwrap();
        assert_eq!(record.wir, "spielen");
        assert!(!record.separable);
        assert_eq!(record.example, "Wir spielen Fußball.");
    }

    #[test]
    fn test_from_csv_fields_withoutExample_shouldDefaultEmpty() {
        let fields = row("spielen", "present");
        let record = VerbConjugationRecord::from_csv_fields(&fields[..12]).unwrap();
        assert_eq!(record.example, "");
    }

    #[test]
    fn test_separable_shouldAcceptOneAndYes() {
        let mut fields = row("spielen", "present");
        fields[3] = "1";
        assert!(VerbConjugationRecord::from_csv_fields(&fields).unwrap().separable);
        fields[3] = "Yes";
        assert!(VerbConjugationRecord::from_csv_fields(&fields).unwrap().separable);
    }

    #[test]
    fn test_present_withMissingPersons_shouldNameThem() {
        let mut fields = row("spielen", "present");
        fields[7] = "";
        fields[9] = " ";
        let err = VerbConjugationRecord::from_csv_fields(&fields).unwrap_err();
        assert_eq!(
            err.to_string(),
            "VerbConjugationRecord is incomplete: present tense requires all persons: missing du, wir"
        );
    }

    #[test]
    fn test_impersonal_verb_shouldOnlyNeedSie() {
        let mut fields = row("regnen", "present");
        for index in 6..11 {
            fields[index] = "";
        }
        fields[11] = "regnet";
        assert!(VerbConjugationRecord::from_csv_fields(&fields).is_ok());

        fields[11] = "";
        let err = VerbConjugationRecord::from_csv_fields(&fields).unwrap_err();
        assert!(err.to_string().contains("Impersonal verb regnen requires 'sie' form"));
    }

    #[test]
    fn test_imperative_shouldRequireDuAndIhr() {
        let mut fields = row("spielen", "imperative");
        fields[6] = "";
        fields[8] = "";
        assert!(VerbConjugationRecord::from_csv_fields(&fields).is_ok());

        fields[10] = "";
        let err = VerbConjugationRecord::from_csv_fields(&fields).unwrap_err();
        assert!(err.to_string().contains("'ihr'"));
    }

    #[test]
    fn test_perfect_shouldRequireSieCompound() {
        let mut fields = row("spielen", "perfect");
        for index in 6..11 {
            fields[index] = "";
        }
        fields[11] = "haben gespielt";
        assert!(VerbConjugationRecord::from_csv_fields(&fields).is_ok());

        fields[11] = "";
        assert!(matches!(
            VerbConjugationRecord::from_csv_fields(&fields),
            Err(ValidationError::Incomplete { .. })
        ));
    }

    #[test]
    fn test_future_shouldHaveNoCompletenessRule() {
        let mut fields = row("spielen", "future");
        for index in 6..12 {
            fields[index] = "";
        }
        assert!(VerbConjugationRecord::from_csv_fields(&fields).is_ok());
    }

    #[test]
    fn test_invalid_enumerations_shouldFail() {
        let mut fields = row("spielen", "pluperfect");
        assert!(matches!(
            VerbConjugationRecord::from_csv_fields(&fields),
            Err(ValidationError::InvalidValue { field: "tense", .. })
        ));
        fields[5] = "present";
        fields[4] = "werden";
        assert!(matches!(
            VerbConjugationRecord::from_csv_fields(&fields),
            Err(ValidationError::InvalidValue { field: "auxiliary", .. })
        ));
        fields[4] = "haben";
        fields[2] = "stark";
        assert!(matches!(
            VerbConjugationRecord::from_csv_fields(&fields),
            Err(ValidationError::InvalidValue { field: "classification", .. })
        ));
    }
}
