/*!
 * Tag-to-parser dispatch used by every language.
 */

use log::debug;

use crate::errors::ValidationError;
use crate::records::{Record, RecordSchema};

/// Parse function stored in a factory
pub type RecordParser = fn(&[&str]) -> Result<Box<dyn Record>, ValidationError>;

/// Adapt a concrete record parser to [`RecordParser`]
pub fn boxed_parser<R: RecordSchema + 'static>(
    fields: &[&str],
) -> Result<Box<dyn Record>, ValidationError> {
    R::from_csv_fields(fields).map(|record| Box::new(record) as Box<dyn Record>)
}

/// Registry of record parsers for one language, in registration order
#[derive(Debug, Clone)]
pub struct RecordFactory {
    language: &'static str,
    parsers: Vec<(&'static str, RecordParser)>,
}

impl RecordFactory {
    pub fn new(language: &'static str) -> Self {
        Self {
            language,
            parsers: Vec::new(),
        }
    }

    /// Add or replace the parser for `tag`
    pub fn register(mut self, tag: &'static str, parser: RecordParser) -> Self {
        match self.parsers.iter_mut().find(|(existing, _)| *existing == tag) {
            Some(entry) => entry.1 = parser,
            None => self.parsers.push((tag, parser)),
        }
        self
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Registered tags in registration order
    pub fn supported_types(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|(tag, _)| *tag).collect()
    }

    pub fn is_supported(&self, tag: &str) -> bool {
        self.parsers.iter().any(|(existing, _)| *existing == tag)
    }

    /// Parse `fields` with the parser registered for `tag`
    pub fn create(&self, tag: &str, fields: &[&str]) -> Result<Box<dyn Record>, ValidationError> {
        let Some((_, parser)) = self.parsers.iter().find(|(existing, _)| *existing == tag) else {
            return Err(ValidationError::UnknownRecordType {
                tag: tag.to_string(),
                supported: self
                    .supported_types()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            });
        };
        parser(fields).inspect_err(|err| {
            debug!("{} record '{}' rejected: {}", self.language, tag, err);
        })
    }
}
