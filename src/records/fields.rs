/*!
 * Positional field access shared by all record parsers.
 */

use crate::errors::ValidationError;

/// How many fields a row must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldArity {
    /// Exactly this many fields
    Exact(usize),
    /// At least this many; trailing fields are optional or ignored
    AtLeast(usize),
}

impl FieldArity {
    /// Check a row length against this arity
    pub fn check(self, record: &'static str, actual: usize) -> Result<(), ValidationError> {
        match self {
            Self::Exact(expected) if actual != expected => Err(ValidationError::FieldCount {
                record,
                expected,
                actual,
            }),
            Self::AtLeast(minimum) if actual < minimum => Err(ValidationError::TooFewFields {
                record,
                minimum,
                actual,
            }),
            _ => Ok(()),
        }
    }

    pub fn minimum(self) -> usize {
        match self {
            Self::Exact(n) | Self::AtLeast(n) => n,
        }
    }
}

/// Arity-checked reader over one raw row
#[derive(Debug)]
pub struct FieldReader<'a, S> {
    record: &'static str,
    fields: &'a [S],
}

impl<'a, S: AsRef<str>> FieldReader<'a, S> {
    pub fn new(
        record: &'static str,
        arity: FieldArity,
        fields: &'a [S],
    ) -> Result<Self, ValidationError> {
        arity.check(record, fields.len())?;
        Ok(Self { record, fields })
    }

    /// Trimmed value at `index`, empty when the row is shorter
    pub fn text(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(|field| field.as_ref().trim().to_string())
            .unwrap_or_default()
    }

    /// Trimmed value that must not be empty
    pub fn required(&self, index: usize, field: &'static str) -> Result<String, ValidationError> {
        let value = self.text(index);
        ensure_not_empty(self.record, field, &value)?;
        Ok(value)
    }

    /// Trimmed value, `None` when missing or blank
    pub fn optional(&self, index: usize) -> Option<String> {
        Some(self.text(index)).filter(|value| !value.is_empty())
    }

    /// Strict boolean flag at `index`
    pub fn flag(&self, index: usize) -> bool {
        self.fields
            .get(index)
            .is_some_and(|field| parse_flag(field.as_ref()))
    }

    /// Lenient boolean at `index`, see [`parse_truthy`]
    pub fn truthy(&self, index: usize) -> bool {
        self.fields
            .get(index)
            .is_some_and(|field| parse_truthy(field.as_ref()))
    }

    /// Value that must be one of `allowed`
    pub fn one_of(
        &self,
        index: usize,
        field: &'static str,
        allowed: &[&'static str],
    ) -> Result<String, ValidationError> {
        let value = self.text(index);
        ensure_allowed(self.record, field, &value, allowed)?;
        Ok(value)
    }
}

/// Only a case-insensitive "true" is true
pub fn parse_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

/// "true", "1" or "yes" in any case
pub fn parse_truthy(raw: &str) -> bool {
    let raw = raw.trim();
    ["true", "1", "yes"]
        .iter()
        .any(|accepted| raw.eq_ignore_ascii_case(accepted))
}

pub fn ensure_not_empty(
    record: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { record, field });
    }
    Ok(())
}

pub fn ensure_allowed(
    record: &'static str,
    field: &'static str,
    value: &str,
    allowed: &[&'static str],
) -> Result<(), ValidationError> {
    if allowed.iter().any(|candidate| *candidate == value) {
        return Ok(());
    }
    Err(ValidationError::InvalidValue {
        record,
        field,
        value: value.to_string(),
        allowed: allowed.to_vec(),
    })
}
