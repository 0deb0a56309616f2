/*!
 * Deferred image search request.
 *
 * The context string is assembled when the strategy is created; the external
 * service is only contacted by [`ImageSearchStrategy::execute`], which consumes
 * the strategy so a request can run at most once.
 */

use log::{debug, error, info};

use crate::errors::{MediaGenerationError, ServiceError};
use crate::providers::ImageQueryGenerator;

/// Pending image search for one vocabulary item
#[derive(Debug)]
#[must_use = "an image search strategy does nothing until executed"]
pub struct ImageSearchStrategy<'a> {
    kind: &'static str,
    word: String,
    context: String,
    service: &'a dyn ImageQueryGenerator,
}

impl<'a> ImageSearchStrategy<'a> {
    pub fn new(
        kind: &'static str,
        word: impl Into<String>,
        context: impl Into<String>,
        service: &'a dyn ImageQueryGenerator,
    ) -> Self {
        Self {
            kind,
            word: word.into(),
            context: context.into(),
            service,
        }
    }

    /// Part of speech label used in messages, e.g. "noun"
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Prompt that will be sent to the service
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Call the service and return trimmed, non-empty search terms
    pub fn execute(self) -> Result<String, MediaGenerationError> {
        info!(
            "Generating image search terms for {} '{}'",
            self.kind, self.word
        );
        debug!("Search context for '{}': {}", self.word, self.context);

        match self.service.generate_image_query(&self.context) {
            Ok(response) => {
                let terms = response.trim();
                if terms.is_empty() {
                    error!(
                        "Empty image search query for {} '{}'",
                        self.kind, self.word
                    );
                    return Err(MediaGenerationError::EmptyResult {
                        kind: self.kind,
                        word: self.word,
                    });
                }
                info!("Image search terms for '{}': {}", self.word, terms);
                Ok(terms.to_string())
            }
            Err(ServiceError::Media(err)) => {
                error!("Image search for '{}' failed: {}", self.word, err);
                Err(err)
            }
            Err(err) => {
                error!("Image search for '{}' failed: {}", self.word, err);
                Err(MediaGenerationError::ServiceFailure {
                    kind: self.kind,
                    word: self.word,
                    message: err.to_string(),
                })
            }
        }
    }
}
