/*!
 * Record layer: validated, immutable views of one raw vocabulary row.
 *
 * A record is built from a positional list of string fields. Parsing checks
 * arity, trims values and validates enumerated fields, so a record that exists
 * is always well-formed. Media slots start empty and are filled later by the
 * media pipeline through [`MediaFields::set`].
 *
 * Language-specific records live under `crate::languages`; this module only
 * holds the shared vocabulary:
 * - [`Record`]: object-safe view used by factories and the registry
 * - [`RecordSchema`]: static description plus the parse entry point
 * - [`RecordType`]: closed enumeration of record kinds
 * - [`RecordFactory`]: tag to parser registry, one per language
 */

use std::any::Any;
use std::fmt::Debug;

use serde_json::{Map, Value};

use crate::errors::ValidationError;

pub mod factory;
pub mod fields;
pub mod media;
pub mod record_type;

pub use factory::{RecordFactory, RecordParser, boxed_parser};
pub use fields::{FieldArity, FieldReader};
pub use media::MediaFields;
pub use record_type::RecordType;

/// Object-safe view of a parsed record
pub trait Record: Debug + Send + Sync + Any {
    /// Kind of record this is
    fn record_type(&self) -> RecordType;

    /// Declared positional field names, in CSV order
    fn field_names(&self) -> &'static [&'static str];

    /// Short human key, usually the headword
    fn identifier(&self) -> String;

    /// Declared fields, derived fields and populated media slots
    fn to_dict(&self) -> Map<String, Value>;

    fn media(&self) -> &MediaFields;

    fn media_mut(&mut self) -> &mut MediaFields;

    fn as_any(&self) -> &dyn Any;
}

/// Static schema of a record type plus its parser
pub trait RecordSchema: Record + Sized {
    /// Positional field names in CSV order
    const FIELD_NAMES: &'static [&'static str];

    /// How many fields a row must carry
    const ARITY: FieldArity;

    /// Media slots the record accepts
    const MEDIA_SLOTS: &'static [&'static str];

    /// Parse and validate a positional row
    fn from_csv_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, ValidationError>;

    /// Number of fields in a complete row
    fn expected_field_count() -> usize {
        Self::FIELD_NAMES.len()
    }
}

/// Turn a `json!` object literal into a map
pub(crate) fn into_dict(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
