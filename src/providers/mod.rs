/*!
 * Collaborator interfaces for the services domain models call out to.
 *
 * The only external dependency of the domain layer is a text-generation
 * service that turns a search context into image search terms. Real clients
 * live outside this crate; `mock` provides a configurable in-process stand-in.
 */

use std::fmt::Debug;

use crate::errors::ServiceError;

/// Service that turns a search context into image search terms
///
/// Implementations must be shareable across threads so that callers can
/// execute strategies of independent domain models concurrently.
pub trait ImageQueryGenerator: Send + Sync + Debug {
    /// Generate image search terms for the given context
    ///
    /// # Arguments
    /// * `context` - Prompt describing the vocabulary item and how to visualize it
    ///
    /// # Returns
    /// * `Result<String, ServiceError>` - Raw search terms, possibly empty
    fn generate_image_query(&self, context: &str) -> Result<String, ServiceError>;
}

pub mod mock;
