/*!
 * Domain-model capability shared by every language and part of speech.
 *
 * A domain model wraps a validated record (or is built directly) and owns the
 * linguistic behavior around it: composing audio scripts, naming audio
 * segments, and preparing the image search request for the media pipeline.
 * The card renderer only ever talks to [`LanguageDomainModel`], so any model
 * implementing its four operations can stand in for any other.
 */

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::errors::ValidationError;
use crate::providers::ImageQueryGenerator;
use crate::records::fields::ensure_not_empty;

pub mod strategy;

pub use strategy::ImageSearchStrategy;

/// Audio segment name to spoken text, ordered by name
pub type AudioSegments = BTreeMap<&'static str, String>;

/// Capabilities the card-generation pipeline needs from a vocabulary item
pub trait LanguageDomainModel: Debug + Send + Sync {
    /// Full text to synthesize as the card's main audio
    fn combined_audio_text(&self) -> String;

    /// Named pieces of audio to synthesize separately
    fn audio_segments(&self) -> AudioSegments;

    /// Word used to name media files and identify the item
    fn primary_word(&self) -> String;

    /// Deferred image search request; the context is built now, the service is
    /// only called when the strategy is executed
    fn image_search_strategy<'a>(
        &self,
        service: &'a dyn ImageQueryGenerator,
    ) -> ImageSearchStrategy<'a>;
}

pub use LanguageDomainModel as MediaGenerationCapable;

/// Check that each `(field, value)` pair is non-empty after trimming
pub(crate) fn require_fields(
    model: &'static str,
    fields: &[(&'static str, &str)],
) -> Result<(), ValidationError> {
    fields
        .iter()
        .try_for_each(|&(field, value)| ensure_not_empty(model, field, value))
}

/// Insert a segment when its text is non-empty
pub(crate) fn push_segment(segments: &mut AudioSegments, name: &'static str, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        segments.insert(name, text.to_string());
    }
}
