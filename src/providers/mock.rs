/*!
 * Mock image query service for tests and offline previews.
 *
 * - `MockImageQueryService::working()` - Answers with terms derived from the context
 * - `MockImageQueryService::echo()` - Answers with the context itself
 * - `MockImageQueryService::empty()` - Answers with whitespace only
 * - `MockImageQueryService::failing()` - Always fails with a service error
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::errors::{MediaGenerationError, ServiceError};
use crate::providers::ImageQueryGenerator;

/// Behavior mode for the mock service
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Answers with search terms built from the first context line
    Working,
    /// Answers with a fixed string
    Fixed(String),
    /// Answers with the context unchanged
    Echo,
    /// Answers with a blank string
    Empty,
    /// Always fails with a request error
    Failing,
    /// Fails every Nth request
    Intermittent { fail_every: usize },
    /// Fails with a media generation error of its own
    MediaFailure,
}

/// In-process [`ImageQueryGenerator`] with scripted behavior
#[derive(Debug)]
pub struct MockImageQueryService {
    behavior: MockBehavior,
    request_count: Arc<AtomicUsize>,
    contexts: Mutex<Vec<String>>,
    custom_response: Option<fn(&str) -> String>,
}

impl MockImageQueryService {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            contexts: Mutex::new(Vec::new()),
            custom_response: None,
        }
    }

    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    pub fn fixed(response: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fixed(response.into()))
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Set a custom response generator used by `Working`
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Contexts received so far, oldest first
    pub fn received_contexts(&self) -> Vec<String> {
        self.contexts.lock().clone()
    }

    fn search_terms(context: &str) -> String {
        let headline = context.lines().next().unwrap_or_default();
        let subject = headline
            .split_once(':')
            .map_or(headline, |(_, rest)| rest)
            .trim();
        format!("photo of {}", subject)
    }
}

impl ImageQueryGenerator for MockImageQueryService {
    fn generate_image_query(&self, context: &str) -> Result<String, ServiceError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.contexts.lock().push(context.to_string());

        match &self.behavior {
            MockBehavior::Working => Ok(match self.custom_response {
                Some(generator) => generator(context),
                None => Self::search_terms(context),
            }),
            MockBehavior::Fixed(response) => Ok(response.clone()),
            MockBehavior::Echo => Ok(context.to_string()),
            MockBehavior::Empty => Ok("   ".to_string()),
            MockBehavior::Failing => Err(ServiceError::RequestFailed(
                "Mock service configured to fail".to_string(),
            )),
            MockBehavior::Intermittent { fail_every } => {
                if *fail_every > 0 && count % fail_every == 0 {
                    Err(ServiceError::Unavailable(format!(
                        "Mock intermittent failure on request {}",
                        count
                    )))
                } else {
                    Ok(Self::search_terms(context))
                }
            }
            MockBehavior::MediaFailure => Err(ServiceError::Media(
                MediaGenerationError::ServiceFailure {
                    kind: "mock",
                    word: "mock".to_string(),
                    message: "upstream media failure".to_string(),
                },
            )),
        }
    }
}
