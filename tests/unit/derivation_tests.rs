/*!
 * Tests for derived forms: Korean particles and counters, Russian accusative
 */

use langlearn::languages::korean::hangul::{ParticleForms, has_final_consonant};
use langlearn::languages::korean::{KoreanLanguage, KoreanNounRecord};
use langlearn::languages::russian::{Animacy, RussianLanguage, RussianNounRecord};
use langlearn::records::RecordSchema;
use langlearn::{Language, ValidationError};

use crate::common::{korean_noun_row, russian_noun_row};

#[test]
fn test_particles_withoutFinalConsonant_shouldUseVowelForms() {
    for word in ["사과", "의자", "나무", "커피"] {
        assert!(!has_final_consonant(word), "{word}");
        let forms = ParticleForms::derive(word);
        assert!(forms.topic.ends_with('는'), "{word}");
        assert!(forms.subject.ends_with('가'), "{word}");
        assert!(forms.object.ends_with('를'), "{word}");
    }
}

#[test]
fn test_particles_withFinalConsonant_shouldUseConsonantForms() {
    for word in ["책", "물", "사람", "선생님"] {
        assert!(has_final_consonant(word), "{word}");
        let forms = ParticleForms::derive(word);
        assert!(forms.topic.ends_with('은'), "{word}");
        assert!(forms.subject.ends_with('이'), "{word}");
        assert!(forms.object.ends_with('을'), "{word}");
    }
}

#[test]
fn test_korean_record_shouldExposeDerivedFieldsInDict() {
    let record = KoreanNounRecord::from_csv_fields(&korean_noun_row()).unwrap();
    let dict = langlearn::Record::to_dict(&record);
    assert_eq!(dict["topic_particle"], "사과는");
    assert_eq!(dict["possessive_form"], "사과의");
    assert_eq!(dict["counter_example"], "사과 다섯 개");
    assert!(dict["honorific_form"].is_null());
}

#[test]
fn test_korean_record_withUnknownCategory_shouldListCategories() {
    let mut fields = korean_noun_row();
    fields[4] = "vehicle";
    let err = KoreanNounRecord::from_csv_fields(&fields).unwrap_err();
    assert!(err
        .to_string()
        .contains("person, object, place, abstract, animal, food"));
}

#[test]
fn test_korean_domain_model_shouldSpeakParticles() {
    let language = KoreanLanguage::new();
    let record = language.create_record("noun", &korean_noun_row()).unwrap();
    let model = language.create_domain_model(record.as_ref()).unwrap();
    assert_eq!(
        model.combined_audio_text(),
        "사과. 사과는, 사과가, 사과를. 사과를 먹어요."
    );
    assert_eq!(model.audio_segments()["counter_audio"], "사과 다섯 개");
}

#[test]
fn test_russian_animate_shouldTakeGenitiveAsAccusative() {
    let record = RussianNounRecord::from_csv_fields(&russian_noun_row()).unwrap();
    assert_eq!(record.animacy, Animacy::Animate);
    assert_eq!(record.nominative, "брат");
    assert_eq!(record.accusative, "брата");
}

#[test]
fn test_russian_inanimate_shouldTakeNominativeAsAccusative() {
    let record =
        RussianNounRecord::from_csv_fields(&["стол", "table", "masculine", "стола"]).unwrap();
    assert_eq!(record.animacy, Animacy::Inanimate);
    assert_eq!(record.accusative, "стол");
}

#[test]
fn test_russian_withTwoFields_shouldFail() {
    assert!(matches!(
        RussianNounRecord::from_csv_fields(&["стол", "table"]),
        Err(ValidationError::TooFewFields { minimum: 3, .. })
    ));
}

#[test]
fn test_russian_withUnknownAnimacy_shouldFail() {
    let mut fields = russian_noun_row();
    fields[6] = "alive";
    assert!(matches!(
        RussianNounRecord::from_csv_fields(&fields),
        Err(ValidationError::InvalidValue { field: "animacy", .. })
    ));
}

#[test]
fn test_russian_family_word_shouldAskForRelationshipImage() {
    let language = RussianLanguage::new();
    let record = language
        .create_record(
            "noun",
            &["мама", "mother", "feminine", "мамы", "Моя мама дома.", "", "animate"],
        )
        .unwrap();
    let model = language.create_domain_model(record.as_ref()).unwrap();
    assert_eq!(model.combined_audio_text(), "мама");

    let service = langlearn::providers::mock::MockImageQueryService::working();
    let strategy = model.image_search_strategy(&service);
    assert!(strategy.context().contains("maternal relationship"));
}
