/*!
 * German domain models.
 *
 * Each model validates its required fields on construction and implements
 * [`crate::domain::LanguageDomainModel`]. Search contexts lean on the
 * classifiers in [`crate::languages::german::grammar`] to pick a visual
 * strategy.
 */

pub mod adjective;
pub mod adverb;
pub mod article;
pub mod negation;
pub mod noun;
pub mod phrase;
pub mod preposition;
pub mod verb;

pub use adjective::Adjective;
pub use adverb::{Adverb, AdverbType};
pub use article::{Article, ArticleFields};
pub use negation::{Negation, NegationType};
pub use noun::Noun;
pub use phrase::Phrase;
pub use preposition::Preposition;
pub use verb::{IMPERATIVE_PLACEHOLDER, Verb, VerbFields};
