/*!
 * Tests for error types and conversions
 */

use langlearn::errors::{
    AppError, MediaGenerationError, ProcessingError, RegistryError, ServiceError, ValidationError,
};

#[test]
fn test_validationError_fieldCount_shouldDisplayBothCounts() {
    let error = ValidationError::FieldCount {
        record: "NounRecord",
        expected: 6,
        actual: 4,
    };
    assert_eq!(error.to_string(), "NounRecord expects 6 fields, got 4");
}

#[test]
fn test_validationError_unknownRecordType_shouldListAvailable() {
    let error = ValidationError::UnknownRecordType {
        tag: "idiom".to_string(),
        supported: vec!["noun".to_string(), "verb".to_string()],
    };
    assert_eq!(error.to_string(), "Unknown record type: idiom. Available: noun, verb");
}

#[test]
fn test_serviceError_media_shouldBeTransparent() {
    let inner = MediaGenerationError::EmptyResult {
        kind: "noun",
        word: "Haus".to_string(),
    };
    let error = ServiceError::from(inner.clone());
    assert_eq!(error.to_string(), inner.to_string());
}

#[test]
fn test_registryError_notRegistered_shouldListAvailable() {
    let error = RegistryError::LanguageNotRegistered {
        code: "fr".to_string(),
        available: vec!["de".to_string(), "ko".to_string()],
    };
    assert_eq!(error.to_string(), "Language 'fr' not registered. Available: de, ko");
}

#[test]
fn test_appError_fromConversions_shouldWrapCorrectly() {
    let app_error: AppError = ValidationError::EmptyField {
        record: "VerbRecord",
        field: "verb",
    }
    .into();
    assert!(matches!(app_error, AppError::Validation(_)));
    assert!(app_error.to_string().starts_with("Validation error:"));

    let app_error: AppError = ServiceError::RateLimited("slow down".to_string()).into();
    assert!(matches!(app_error, AppError::Service(_)));

    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));

    let app_error: AppError = anyhow::anyhow!("odd").into();
    assert_eq!(app_error.to_string(), "Unknown error: odd");
}

#[test]
fn test_processingError_shouldExposeSource() {
    use std::error::Error;

    let error = ProcessingError::new(
        "adverb:oft",
        MediaGenerationError::ServiceFailure {
            kind: "adverb",
            word: "oft".to_string(),
            message: "timeout".to_string(),
        },
    )
    .with_context("image search");

    assert!(error.source().is_some());
    assert_eq!(
        error.to_string(),
        "Processing failed for adverb:oft: Media generation error: Failed to generate image search for adverb 'oft': timeout (image search)"
    );
}
