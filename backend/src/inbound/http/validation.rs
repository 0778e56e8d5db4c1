//! Shared validation helpers for inbound HTTP adapters.
//!
//! Query-parameter checks live here; body validation is the domain's
//! concern via `CarDraft::validate`.

use serde_json::json;

use crate::domain::Error;
use crate::domain::car::MIN_PRODUCTION_YEAR;

/// Newtype for wire field names to keep error builders honest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn missing_param_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required query parameter: {field}")).with_details(
        json!({
            "field": field,
            "code": "missing_field",
        }),
    )
}

fn year_too_early_error(field: FieldName, value: i64) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!(
        "{field} must be {MIN_PRODUCTION_YEAR} or later; got {value}"
    ))
    .with_details(json!({
        "field": field,
        "value": value,
        "code": "year_too_early",
    }))
}

/// Require a year bound to be present and no earlier than the minimum
/// production year. This check is stricter than the filter's own bound-order
/// tolerance and runs before any filtering.
pub(crate) fn require_year_bound(value: Option<i64>, field: FieldName) -> Result<i64, Error> {
    let year = value.ok_or_else(|| missing_param_error(field))?;
    if year < MIN_PRODUCTION_YEAR {
        return Err(year_too_early_error(field, year));
    }
    Ok(year)
}
