/*!
 * Tests for German record parsing through the public factory
 */

use langlearn::ValidationError;
use langlearn::languages::german::{
    GermanRecordFactory, NounRecord, VerbConjugationRecord, VerbRecord,
};
use langlearn::records::{RecordSchema, RecordType};

use crate::common::german_noun_row;

/// Every registered tag with a row that parses
pub fn valid_rows() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("noun", german_noun_row()),
        ("adjective", vec!["schön", "beautiful", "Das Bild ist schön.", "schöner", "am schönsten"]),
        ("adverb", vec!["hier", "here", "Ortsadverb", "Ich wohne hier."]),
        ("negation", vec!["nicht", "not", "general", "Ich komme nicht."]),
        (
            "verb",
            vec![
                "arbeiten", "to work", "regelmäßig", "arbeite", "arbeitest", "arbeitet",
                "arbeitete", "haben", "hat gearbeitet", "Ich arbeite heute.", "false",
            ],
        ),
        ("phrase", vec!["Guten Morgen", "Good morning", "Morning greeting", "Guten Tag"]),
        ("preposition", vec!["mit", "with", "Dative", "Ich fahre mit dem Bus.", ""]),
        (
            "verb_conjugation",
            vec![
                "spielen", "to play", "regelmäßig", "false", "haben", "present", "spiele",
                "spielst", "spielt", "spielen", "spielt", "spielen", "Wir spielen.",
            ],
        ),
        (
            "verb_imperative",
            vec![
                "warten", "to wait", "warte", "wartet", "warten Sie", "warten wir", "Warte!", "", "",
            ],
        ),
        ("article", vec!["masculine", "der", "den", "dem", "des", "Der Tag.", "", "", ""]),
        (
            "indefinite_article",
            vec!["neuter", "ein", "ein", "einem", "eines", "Ein Kind.", "", "", ""],
        ),
        (
            "negative_article",
            vec!["plural", "keine", "keine", "keinen", "keiner", "Keine Zeit.", "", "", ""],
        ),
        (
            "unified_article",
            vec![
                "unbestimmt", "feminin", "eine", "eine", "einer", "einer", "Eine Frau.", "", "", "",
            ],
        ),
    ]
}

#[test]
fn test_factory_withEveryRegisteredType_shouldParseItsRow() {
    for (tag, fields) in valid_rows() {
        let record = GermanRecordFactory::create(tag, &fields)
            .unwrap_or_else(|err| panic!("{} failed: {}", tag, err));
        assert_eq!(record.record_type().as_str(), tag);
    }
}

#[test]
fn test_factory_withTooFewFields_shouldFailForEveryType() {
    for (tag, _) in valid_rows() {
        let result = GermanRecordFactory::create(tag, &["only", "two"]);
        assert!(
            matches!(
                result,
                Err(ValidationError::FieldCount { .. } | ValidationError::TooFewFields { .. })
            ),
            "{} accepted a two-field row",
            tag
        );
    }
}

#[test]
fn test_factory_withUnknownType_shouldListSupportedTypes() {
    let err = GermanRecordFactory::create("unknown_type", &["x"]).unwrap_err();
    match err {
        ValidationError::UnknownRecordType { tag, supported } => {
            assert_eq!(tag, "unknown_type");
            assert_eq!(supported.len(), 13);
            assert!(supported.contains(&"verb_conjugation".to_string()));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_noun_scenario_shouldKeepEmptyRelated() {
    let record = NounRecord::from_csv_fields(&german_noun_row()).unwrap();
    assert_eq!(record.noun, "Haus");
    assert_eq!(record.article, "das");
    assert_eq!(record.plural, "Häuser");
    assert_eq!(record.related, "");
    assert_eq!(NounRecord::expected_field_count(), 6);
}

#[test]
fn test_verb_separable_shouldOnlyAcceptTrue() {
    let mut fields = vec![
        "anfangen", "to begin", "unregelmäßig", "fange an", "fängst an", "fängt an",
        "fing an", "haben", "hat angefangen", "Wir fangen an.", "TRUE",
    ];
    assert!(VerbRecord::from_csv_fields(&fields).unwrap().separable);
    for raw in ["yes", "1", "", "wahr"] {
        fields[10] = raw;
        assert!(!VerbRecord::from_csv_fields(&fields).unwrap().separable, "{raw}");
    }
}

#[test]
fn test_verb_conjugation_perfectWithoutSie_shouldBeIncomplete() {
    let err = VerbConjugationRecord::from_csv_fields(&[
        "gehen", "to go", "unregelmäßig", "false", "sein", "perfect", "bin gegangen",
        "bist gegangen", "ist gegangen", "sind gegangen", "seid gegangen", "", "Ich bin gegangen.",
    ])
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "VerbConjugationRecord is incomplete: Perfect tense requires auxiliary form in 'sie' field"
    );
}

#[test]
fn test_media_mut_shouldRejectUndeclaredSlot() {
    let mut record = GermanRecordFactory::create(
        "phrase",
        &["Danke", "Thanks", "Gratitude", "Bitte"],
    )
    .unwrap();
    assert_eq!(record.record_type(), RecordType::Phrase);
    assert!(record.media_mut().set("phrase_audio", "[sound:danke.mp3]").is_ok());
    assert!(matches!(
        record.media_mut().set("word_audio", "x.mp3"),
        Err(ValidationError::UnknownMediaField { .. })
    ));
    assert_eq!(record.to_dict()["phrase_audio"], "[sound:danke.mp3]");
}
