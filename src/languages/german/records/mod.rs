/*!
 * German record types.
 *
 * One record per CSV layout. The article family shares [`ArticleRecord`],
 * distinguished by [`ArticleKind`].
 */

/// Implements [`crate::records::Record`] for a record with a `media` field
/// and an inherent `declared_fields()` returning its dictionary.
macro_rules! impl_record {
    ($record:ty, $kind:expr, $identifier:ident) => {
        impl $crate::records::Record for $record {
            fn record_type(&self) -> $crate::records::RecordType {
                $kind
            }

            fn field_names(&self) -> &'static [&'static str] {
                <Self as $crate::records::RecordSchema>::FIELD_NAMES
            }

            fn identifier(&self) -> String {
                self.$identifier.clone()
            }

            fn to_dict(&self) -> serde_json::Map<String, serde_json::Value> {
                let mut dict = self.declared_fields();
                self.media.write_into(&mut dict);
                dict
            }

            fn media(&self) -> &$crate::records::MediaFields {
                &self.media
            }

            fn media_mut(&mut self) -> &mut $crate::records::MediaFields {
                &mut self.media
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    };
}

pub(crate) use impl_record;

pub mod adjective;
pub mod adverb;
pub mod article;
pub mod negation;
pub mod noun;
pub mod phrase;
pub mod preposition;
pub mod unified_article;
pub mod verb;
pub mod verb_conjugation;
pub mod verb_imperative;

pub use adjective::AdjectiveRecord;
pub use adverb::AdverbRecord;
pub use article::{ArticleKind, ArticleRecord};
pub use negation::NegationRecord;
pub use noun::NounRecord;
pub use phrase::PhraseRecord;
pub use preposition::PrepositionRecord;
pub use unified_article::UnifiedArticleRecord;
pub use verb::VerbRecord;
pub use verb_conjugation::VerbConjugationRecord;
pub use verb_imperative::VerbImperativeRecord;
