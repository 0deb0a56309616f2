/*!
 * End-to-end card preparation: rows to records, records to domain models,
 * domain models to audio text and image search terms
 */

use std::sync::Arc;
use std::thread;

use anyhow::Result;
use langlearn::errors::{AppError, ValidationError};
use langlearn::providers::mock::MockImageQueryService;
use langlearn::{Language, LanguageDomainModel, LanguageRegistry};

use crate::common::{german_noun_row, korean_noun_row, row, russian_noun_row};

#[test]
fn test_ingest_withMixedRows_shouldCollectErrorsPerRow() -> Result<()> {
    let registry = LanguageRegistry::with_defaults();
    let german = registry.get("de")?;

    let rows = vec![
        row(&german_noun_row()),
        row(&["Tisch", "der"]),
        row(&[" Katze ", "die", "cat"]),
        row(&["Buch", "das", "book", "Bücher", "Ich lese ein Buch.", "lesen"]),
    ];
    let report = german.ingest("noun", &rows);

    assert!(!report.is_clean());
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.errors.len(), 2);

    let first = &report.errors[0];
    assert_eq!(first.record, "noun:Tisch");
    assert_eq!(first.context.as_deref(), Some("row 2"));
    assert!(matches!(
        first.error,
        AppError::Validation(ValidationError::TooFewFields { .. })
    ));

    let second = &report.errors[1];
    assert_eq!(second.record, "noun:Katze");
    assert!(second.to_string().ends_with("(row 3)"));
    Ok(())
}

#[test]
fn test_ingest_withUnknownType_shouldFailEveryRow() -> Result<()> {
    let registry = LanguageRegistry::with_defaults();
    let report = registry.get("ko")?.ingest("verb", &[row(&korean_noun_row())]);
    assert!(report.records.is_empty());
    assert!(report.errors[0].to_string().contains("Unknown record type: verb"));
    Ok(())
}

#[test]
fn test_pipeline_shouldTurnRowsIntoAudioAndSearchTerms() -> Result<()> {
    let registry = LanguageRegistry::with_defaults();
    let service = MockImageQueryService::working();

    let german = registry.get("de")?;
    let record = german.create_record("noun", &german_noun_row())?;
    let model = german.create_domain_model(record.as_ref())?;

    assert_eq!(model.combined_audio_text(), "das Haus, die Häuser");
    let segments = model.audio_segments();
    assert_eq!(
        segments.keys().copied().collect::<Vec<_>>(),
        vec!["example_audio", "word_audio"]
    );

    let strategy = model.image_search_strategy(&service);
    assert_eq!(service.request_count(), 0);
    let terms = strategy.execute()?;
    assert!(terms.starts_with("photo of "));
    assert_eq!(service.request_count(), 1);
    Ok(())
}

#[test]
fn test_generated_media_shouldAppearInDict() -> Result<()> {
    let registry = LanguageRegistry::with_defaults();
    let german = registry.get("de")?;
    let mut record = german.create_record("noun", &german_noun_row())?;

    let before = record.to_dict();
    assert!(!before.contains_key("image"));

    let model = german.create_domain_model(record.as_ref())?;
    let filename = format!("{}.jpg", model.primary_word().to_lowercase());
    record.media_mut().set("image", format!("<img src=\"{}\">", filename))?;
    record.media_mut().set("word_audio", "[sound:haus.mp3]")?;

    let after = record.to_dict();
    assert_eq!(after["image"], "<img src=\"haus.jpg\">");
    assert_eq!(after["word_audio"], "[sound:haus.mp3]");
    assert!(!after.contains_key("example_audio"));
    assert_eq!(record.identifier(), "Haus");
    Ok(())
}

#[test]
fn test_models_fromEveryLanguage_shouldShareOneService() -> Result<()> {
    let registry = LanguageRegistry::with_defaults();
    let rows: [(&str, Vec<&str>); 3] = [
        ("de", german_noun_row()),
        ("ko", korean_noun_row()),
        ("ru", russian_noun_row()),
    ];

    let mut models: Vec<Box<dyn LanguageDomainModel>> = Vec::new();
    for (code, fields) in &rows {
        let language = registry.get(code)?;
        let record = language.create_record("noun", fields)?;
        models.push(language.create_domain_model(record.as_ref())?);
    }

    let words: Vec<String> = models.iter().map(|model| model.primary_word()).collect();
    assert_eq!(words, vec!["Haus", "사과", "брат"]);

    let service = MockImageQueryService::echo();
    for model in &models {
        let strategy = model.image_search_strategy(&service);
        let context = strategy.context().to_string();
        assert!(context.contains(&model.primary_word()));
        assert_eq!(strategy.execute()?, context.trim());
    }
    assert_eq!(service.request_count(), 3);
    Ok(())
}

#[test]
fn test_strategies_executedFromThreads_shouldCountEveryRequest() -> Result<()> {
    let registry = LanguageRegistry::with_defaults();
    let german = registry.get("de")?;
    let service = Arc::new(MockImageQueryService::working());

    let nouns = [
        ["Haus", "das", "house", "Häuser", "Das Haus ist groß.", ""],
        ["Baum", "der", "tree", "Bäume", "Der Baum ist alt.", ""],
        ["Tür", "die", "door", "Türen", "Die Tür ist offen.", ""],
        ["Kind", "das", "child", "Kinder", "Das Kind spielt.", ""],
    ];
    let models = nouns
        .iter()
        .map(|fields| {
            let record = german.create_record("noun", fields)?;
            Ok(german.create_domain_model(record.as_ref())?)
        })
        .collect::<Result<Vec<_>>>()?;

    let results: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = models
            .iter()
            .map(|model| {
                let service = Arc::clone(&service);
                scope.spawn(move || model.image_search_strategy(service.as_ref()).execute())
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker panicked"))
            .collect::<Result<Vec<_>, _>>()
    })?;

    assert_eq!(results.len(), 4);
    assert_eq!(service.request_count(), 4);
    assert_eq!(service.received_contexts().len(), 4);
    assert!(results.iter().any(|terms| terms.contains("Baum")));
    Ok(())
}

#[test]
fn test_russian_record_dict_shouldCarryAccusative() -> Result<()> {
    let registry = LanguageRegistry::with_defaults();
    let record = registry.get("rus")?.create_record("noun", &russian_noun_row())?;
    let dict = record.to_dict();
    assert_eq!(dict["accusative"], "брата");
    assert_eq!(dict["nominative"], "брат");
    Ok(())
}
