/*!
 * # langlearn
 *
 * Validated vocabulary records and language-aware domain models for
 * generating multi-language flashcards.
 *
 * ## Features
 *
 * - Parse CSV vocabulary rows into typed, validated records
 * - German nouns, verbs, adjectives, adverbs, negations, phrases,
 *   prepositions and the article family
 * - Korean nouns with particle and counter derivation
 * - Russian nouns with case declensions and animacy-driven accusative
 * - Audio text and image search contexts for every domain model
 * - ISO 639-1 and ISO 639-2 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `records`: record traits, field parsing helpers and the record factory
 * - `domain`: the domain model capability and the deferred image search
 * - `languages`: per-language bundles and the explicit language registry:
 *   - `languages::german`: German records, models and grammar rules
 *   - `languages::korean`: Korean noun records and Hangul helpers
 *   - `languages::russian`: Russian noun records and declension rules
 * - `providers`: image query service interface and its mock
 * - `app_config`: Configuration management
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod domain;
pub mod errors;
pub mod language_utils;
pub mod languages;
pub mod providers;
pub mod records;

// Re-export main types for easier usage
pub use app_config::Config;
pub use domain::{AudioSegments, ImageSearchStrategy, LanguageDomainModel, MediaGenerationCapable};
pub use errors::{
    AppError, MediaGenerationError, ProcessingError, RegistryError, ServiceError, ValidationError,
};
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part1};
pub use languages::{CardSide, Language, LanguageRegistry, TtsConfig};
pub use providers::ImageQueryGenerator;
pub use records::{Record, RecordFactory, RecordSchema, RecordType};
