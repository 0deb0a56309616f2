/*!
 * Tests for the deferred image search strategy across languages
 */

use langlearn::languages::german::{Adverb, AdverbType, Noun, Phrase};
use langlearn::providers::mock::{MockBehavior, MockImageQueryService};
use langlearn::{LanguageDomainModel, MediaGenerationError};

use crate::common::init_test_logging;

fn noun() -> Noun {
    Noun::new("Apfel", "der", "apple", "Äpfel", "Der Apfel ist rot.").unwrap()
}

#[test]
fn test_strategy_creation_shouldNotContactService() {
    let service = MockImageQueryService::working();
    let strategy = noun().image_search_strategy(&service);
    assert_eq!(service.request_count(), 0);
    assert_eq!(strategy.kind(), "noun");
    assert_eq!(strategy.word(), "Apfel");
}

#[test]
fn test_execute_shouldCallServiceOnceWithContext() {
    let service = MockImageQueryService::working();
    let strategy = noun().image_search_strategy(&service);
    let context = strategy.context().to_string();

    let terms = strategy.execute().unwrap();
    assert_eq!(terms, "photo of Apfel means apple.");
    assert_eq!(service.request_count(), 1);
    assert_eq!(service.received_contexts(), vec![context]);
}

#[test]
fn test_execute_withFixedResponse_shouldTrim() {
    let service = MockImageQueryService::fixed("  red apple on table \n");
    assert_eq!(
        noun().image_search_strategy(&service).execute().unwrap(),
        "red apple on table"
    );
}

#[test]
fn test_execute_withEmptyResponse_shouldNameOriginatingWord() {
    init_test_logging();
    let service = MockImageQueryService::empty();
    let phrase =
        Phrase::new("Guten Abend", "Good evening", "Evening greeting", "Guten Tag").unwrap();
    let err = phrase.image_search_strategy(&service).execute().unwrap_err();
    assert_eq!(err.word(), "Guten Abend");
    assert_eq!(
        err.to_string(),
        "AI service returned empty image search query for phrase 'Guten Abend'"
    );
}

#[test]
fn test_execute_withFailingService_shouldWrapCause() {
    init_test_logging();
    let service = MockImageQueryService::failing();
    let adverb = Adverb::new("oft", "often", AdverbType::Frequency, "Ich lese oft.").unwrap();
    let err = adverb.image_search_strategy(&service).execute().unwrap_err();
    match &err {
        MediaGenerationError::ServiceFailure { kind, word, message } => {
            assert_eq!(*kind, "adverb");
            assert_eq!(word, "oft");
            assert!(message.contains("Mock service configured to fail"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("Failed to generate image search for adverb 'oft'"));
}

#[test]
fn test_execute_withUpstreamMediaError_shouldPassItThrough() {
    let service = MockImageQueryService::new(MockBehavior::MediaFailure);
    let err = noun().image_search_strategy(&service).execute().unwrap_err();
    assert_eq!(err.word(), "mock");
}

#[test]
fn test_execute_withIntermittentService_shouldFailOnlyEveryNth() {
    let service = MockImageQueryService::intermittent(2);
    assert!(noun().image_search_strategy(&service).execute().is_ok());
    assert!(noun().image_search_strategy(&service).execute().is_err());
    assert!(noun().image_search_strategy(&service).execute().is_ok());
    assert_eq!(service.request_count(), 3);
}

#[test]
fn test_echo_service_shouldReturnWholeContext() {
    let service = MockImageQueryService::echo();
    let strategy = noun().image_search_strategy(&service);
    let context = strategy.context().to_string();
    assert_eq!(strategy.execute().unwrap(), context.trim());
}

#[test]
fn test_models_asTraitObjects_shouldShareOneInterface() {
    let models: Vec<Box<dyn LanguageDomainModel>> = vec![
        Box::new(noun()),
        Box::new(Adverb::new("hier", "here", AdverbType::Location, "Ich bin hier.").unwrap()),
        Box::new(Phrase::new("Danke", "Thanks", "Gratitude", "Bitte").unwrap()),
    ];
    let words: Vec<String> = models.iter().map(|model| model.primary_word()).collect();
    assert_eq!(words, vec!["Apfel", "hier", "Danke"]);
    for model in &models {
        assert!(!model.audio_segments().is_empty());
        assert!(!model.combined_audio_text().is_empty());
    }
}
