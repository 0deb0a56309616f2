/*!
 * Error types for the langlearn library.
 *
 * Validation failures come out of record parsing and domain model construction,
 * media generation failures only out of executing an image search strategy.
 * The thiserror crate keeps the definitions declarative.
 */

use std::fmt;

use thiserror::Error;

/// Errors raised while validating raw record fields or building domain models
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Row has the wrong number of fields for a fixed-arity record
    #[error("{record} expects {expected} fields, got {actual}")]
    FieldCount {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Row has fewer fields than the record needs
    #[error("{record} requires at least {minimum} fields, got {actual}")]
    TooFewFields {
        record: &'static str,
        minimum: usize,
        actual: usize,
    },

    /// A required field is empty after trimming
    #[error("{record}: required field '{field}' cannot be empty")]
    EmptyField {
        record: &'static str,
        field: &'static str,
    },

    /// An enumerated field holds a value outside its allowed set
    #[error("{record}: invalid {field} '{value}', must be one of: {}", .allowed.join(", "))]
    InvalidValue {
        record: &'static str,
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// A record fails a cross-field completeness rule
    #[error("{record} is incomplete: {reason}")]
    Incomplete {
        record: &'static str,
        reason: String,
    },

    /// Factory lookup with a tag nobody registered
    #[error("Unknown record type: {tag}. Available: {}", .supported.join(", "))]
    UnknownRecordType { tag: String, supported: Vec<String> },

    /// Media slot that the record does not declare
    #[error("{record} has no media field '{field}'")]
    UnknownMediaField { record: &'static str, field: String },

    /// Record kind that has no domain model in the given language
    #[error("No domain model for {record_type} records in language '{language}'")]
    UnsupportedDomainModel {
        language: String,
        record_type: String,
    },
}

/// Errors reported by an image query service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The request reached the service but failed
    #[error("Image query request failed: {0}")]
    RequestFailed(String),

    /// The service could not be reached at all
    #[error("Image query service unavailable: {0}")]
    Unavailable(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// The service already produced a media generation failure
    #[error(transparent)]
    Media(#[from] MediaGenerationError),
}

/// Errors raised when an image search strategy is executed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediaGenerationError {
    /// The service answered with nothing usable
    #[error("AI service returned empty image search query for {kind} '{word}'")]
    EmptyResult { kind: &'static str, word: String },

    /// The service call itself failed
    #[error("Failed to generate image search for {kind} '{word}': {message}")]
    ServiceFailure {
        kind: &'static str,
        word: String,
        message: String,
    },
}

impl MediaGenerationError {
    /// Word the failed search was generated for
    pub fn word(&self) -> &str {
        match self {
            Self::EmptyResult { word, .. } | Self::ServiceFailure { word, .. } => word,
        }
    }
}

/// Errors from the language registry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Language '{code}' not registered. Available: {}", .available.join(", "))]
    LanguageNotRegistered { code: String, available: Vec<String> },

    #[error("Invalid language code: {0}")]
    InvalidLanguageCode(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Media generation error: {0}")]
    Media(#[from] MediaGenerationError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Error from loading or validating configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

/// A failure tied to one record during batch ingestion
#[derive(Debug)]
pub struct ProcessingError {
    /// Identifying key of the record, e.g. `noun:Haus`
    pub record: String,
    pub error: AppError,
    /// Where in the batch it happened
    pub context: Option<String>,
}

impl ProcessingError {
    pub fn new(record: impl Into<String>, error: impl Into<AppError>) -> Self {
        Self {
            record: record.into(),
            error: error.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Processing failed for {}: {}", self.record, self.error)?;
        if let Some(context) = &self.context {
            write!(f, " ({})", context)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
