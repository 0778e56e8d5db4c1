//! Car data model and validation.
//!
//! The entity lives behind accessor methods so invariants established by
//! [`CarDraft::validate`] cannot be broken after construction. Wire
//! serialisation is the inbound adapter's concern.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Minimum accepted brand length, in characters.
pub const MIN_BRAND_LEN: usize = 2;
/// Minimum accepted model length, in characters.
pub const MIN_MODEL_LEN: usize = 1;
/// Earliest accepted production year.
pub const MIN_PRODUCTION_YEAR: i64 = 1900;

/// Stable car identifier assigned by the record store on insert.
///
/// Equality on the key alone is the record's identity; two cars with the
/// same id refer to the same record regardless of field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CarId(i64);

impl CarId {
    /// Wrap a raw identifier, e.g. one received in a request path.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw numeric value for serialisation and store keys.
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of recognised car colours.
///
/// The wire form is the upper-case token and must match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
}

impl Color {
    /// Wire token for this colour.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "BLACK",
            Self::Red => "RED",
            Self::Green => "GREEN",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a colour token is not part of the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised colour: {value}")]
pub struct ParseColorError {
    pub value: String,
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BLACK" => Ok(Self::Black),
            "RED" => Ok(Self::Red),
            "GREEN" => Ok(Self::Green),
            other => Err(ParseColorError {
                value: other.to_owned(),
            }),
        }
    }
}

/// A persisted car record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    id: CarId,
    brand: String,
    model: String,
    color: Color,
    production_year: i64,
}

impl Car {
    /// Assemble a record from a store-assigned identity and validated input.
    #[must_use]
    pub fn new(id: CarId, input: CarInput) -> Self {
        Self {
            id,
            brand: input.brand,
            model: input.model,
            color: input.color,
            production_year: input.production_year,
        }
    }

    /// Overwrite every mutable field in place, preserving identity.
    pub fn apply(&mut self, input: CarInput) {
        self.brand = input.brand;
        self.model = input.model;
        self.color = input.color;
        self.production_year = input.production_year;
    }

    #[must_use]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn production_year(&self) -> i64 {
        self.production_year
    }
}

/// Raw, unvalidated car payload as received by inbound adapters.
///
/// Fields are optional so missing values surface as field-level violations
/// rather than opaque deserialisation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarDraft {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub production_year: Option<i64>,
}

/// Validated create/update payload; only obtainable via [`CarDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarInput {
    brand: String,
    model: String,
    color: Color,
    production_year: i64,
}

impl CarInput {
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn production_year(&self) -> i64 {
        self.production_year
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarValidationError {
    #[error("brand must be provided")]
    BrandMissing,
    #[error("brand must be at least 2 characters")]
    BrandTooShort,
    #[error("model must be provided")]
    ModelMissing,
    #[error("model must be at least 1 character")]
    ModelTooShort,
    #[error("color must be provided")]
    ColorMissing,
    #[error("color must be one of BLACK, RED, GREEN; got {value}")]
    ColorUnknown { value: String },
    #[error("production year must be provided")]
    YearMissing,
    #[error("production year must be 1900 or later; got {value}")]
    YearTooEarly { value: i64 },
}

impl CarValidationError {
    /// Wire name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::BrandMissing | Self::BrandTooShort => "brand",
            Self::ModelMissing | Self::ModelTooShort => "model",
            Self::ColorMissing | Self::ColorUnknown { .. } => "color",
            Self::YearMissing | Self::YearTooEarly { .. } => "productionYear",
        }
    }

    /// Stable machine-readable rule code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::BrandMissing | Self::ModelMissing | Self::ColorMissing | Self::YearMissing => {
                "missing_field"
            }
            Self::BrandTooShort | Self::ModelTooShort => "too_short",
            Self::ColorUnknown { .. } => "unknown_color",
            Self::YearTooEarly { .. } => "year_too_early",
        }
    }
}

impl CarDraft {
    /// Validate the draft, collecting every field violation rather than
    /// stopping at the first.
    pub fn validate(self) -> Result<CarInput, Vec<CarValidationError>> {
        let mut violations = Vec::new();

        let brand = match self.brand {
            None => {
                violations.push(CarValidationError::BrandMissing);
                None
            }
            Some(brand) if brand.chars().count() < MIN_BRAND_LEN => {
                violations.push(CarValidationError::BrandTooShort);
                None
            }
            Some(brand) => Some(brand),
        };

        let model = match self.model {
            None => {
                violations.push(CarValidationError::ModelMissing);
                None
            }
            Some(model) if model.chars().count() < MIN_MODEL_LEN => {
                violations.push(CarValidationError::ModelTooShort);
                None
            }
            Some(model) => Some(model),
        };

        let color = match self.color {
            None => {
                violations.push(CarValidationError::ColorMissing);
                None
            }
            Some(token) => match Color::from_str(&token) {
                Ok(color) => Some(color),
                Err(err) => {
                    violations.push(CarValidationError::ColorUnknown { value: err.value });
                    None
                }
            },
        };

        let production_year = match self.production_year {
            None => {
                violations.push(CarValidationError::YearMissing);
                None
            }
            Some(year) if year < MIN_PRODUCTION_YEAR => {
                violations.push(CarValidationError::YearTooEarly { value: year });
                None
            }
            Some(year) => Some(year),
        };

        match (brand, model, color, production_year) {
            (Some(brand), Some(model), Some(color), Some(production_year))
                if violations.is_empty() =>
            {
                Ok(CarInput {
                    brand,
                    model,
                    color,
                    production_year,
                })
            }
            _ => Err(violations),
        }
    }
}

/// Return the cars whose production year lies in the inclusive range spanned
/// by `from` and `to`, in their original relative order.
///
/// The bounds may arrive in either order; the range is normalised to
/// `min(from, to) ..= max(from, to)` before filtering. `from == to` selects
/// exactly that year, and an empty input yields an empty output.
#[must_use]
pub fn filter_by_year(cars: Vec<Car>, from: i64, to: i64) -> Vec<Car> {
    let (min, max) = if from <= to { (from, to) } else { (to, from) };
    cars.into_iter()
        .filter(|car| (min..=max).contains(&car.production_year))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn car(id: i64, year: i64) -> Car {
        Car {
            id: CarId::new(id),
            brand: "Audi".to_owned(),
            model: "A4".to_owned(),
            color: Color::Black,
            production_year: year,
        }
    }

    fn years(cars: &[Car]) -> Vec<i64> {
        cars.iter().map(Car::production_year).collect()
    }

    #[rstest]
    #[case(2014, 2019)]
    #[case(2019, 2014)]
    fn filter_is_symmetric_under_bound_swap(#[case] from: i64, #[case] to: i64) {
        let fleet = vec![car(1, 2010), car(2, 2015), car(3, 2016), car(4, 2020)];

        let matched = filter_by_year(fleet, from, to);

        assert_eq!(years(&matched), vec![2015, 2016]);
    }

    #[test]
    fn filter_preserves_original_relative_order() {
        let fleet = vec![car(9, 2016), car(3, 2015), car(5, 2018)];

        let matched = filter_by_year(fleet, 2015, 2018);

        assert_eq!(years(&matched), vec![2016, 2015, 2018]);
    }

    #[test]
    fn filter_with_equal_bounds_selects_exactly_that_year() {
        let fleet = vec![car(1, 2015), car(2, 2016), car(3, 2016), car(4, 2017)];

        let matched = filter_by_year(fleet, 2016, 2016);

        assert_eq!(years(&matched), vec![2016, 2016]);
    }

    #[test]
    fn filter_of_empty_input_is_empty() {
        assert!(filter_by_year(Vec::new(), 1900, 3000).is_empty());
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let fleet = vec![car(1, 2010), car(2, 2020)];

        assert!(filter_by_year(fleet, 2011, 2019).is_empty());
    }

    #[test]
    fn validate_accepts_a_complete_draft() {
        let draft = CarDraft {
            brand: Some("Fiat".to_owned()),
            model: Some("Punto".to_owned()),
            color: Some("RED".to_owned()),
            production_year: Some(2016),
        };

        let input = draft.validate().expect("draft should validate");
        assert_eq!(input.brand(), "Fiat");
        assert_eq!(input.model(), "Punto");
        assert_eq!(input.color(), Color::Red);
        assert_eq!(input.production_year(), 2016);
    }

    #[rstest]
    #[case(CarDraft { brand: None, ..complete_draft() }, "brand", "missing_field")]
    #[case(CarDraft { brand: Some(String::new()), ..complete_draft() }, "brand", "too_short")]
    #[case(CarDraft { brand: Some("A".to_owned()), ..complete_draft() }, "brand", "too_short")]
    #[case(CarDraft { model: None, ..complete_draft() }, "model", "missing_field")]
    #[case(CarDraft { model: Some(String::new()), ..complete_draft() }, "model", "too_short")]
    #[case(CarDraft { color: None, ..complete_draft() }, "color", "missing_field")]
    #[case(
        CarDraft { color: Some("MAUVE".to_owned()), ..complete_draft() },
        "color",
        "unknown_color"
    )]
    #[case(CarDraft { production_year: None, ..complete_draft() }, "productionYear", "missing_field")]
    #[case(
        CarDraft { production_year: Some(1899), ..complete_draft() },
        "productionYear",
        "year_too_early"
    )]
    fn validate_rejects_each_rule_breach(
        #[case] draft: CarDraft,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let violations = draft.validate().expect_err("draft should be rejected");

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field(), field);
        assert_eq!(violations[0].code(), code);
    }

    fn complete_draft() -> CarDraft {
        CarDraft {
            brand: Some("Fiat".to_owned()),
            model: Some("Punto".to_owned()),
            color: Some("RED".to_owned()),
            production_year: Some(2016),
        }
    }

    #[test]
    fn validate_collects_every_violation() {
        let draft = CarDraft {
            brand: Some("A".to_owned()),
            model: None,
            color: Some("MAUVE".to_owned()),
            production_year: Some(1850),
        };

        let violations = draft.validate().expect_err("draft should be rejected");
        let fields: Vec<_> = violations.iter().map(CarValidationError::field).collect();

        assert_eq!(fields, vec!["brand", "model", "color", "productionYear"]);
    }

    #[test]
    fn colour_tokens_are_case_sensitive() {
        assert_eq!(Color::from_str("BLACK"), Ok(Color::Black));
        assert!(Color::from_str("black").is_err());
        assert!(Color::from_str("Black").is_err());
    }

    #[test]
    fn colour_round_trips_through_its_token() {
        for color in [Color::Black, Color::Red, Color::Green] {
            assert_eq!(Color::from_str(color.as_str()), Ok(color));
        }
    }

    #[test]
    fn apply_overwrites_fields_but_keeps_identity() {
        let mut subject = car(7, 2020);
        let input = CarDraft {
            brand: Some("Skoda".to_owned()),
            model: Some("Fabia".to_owned()),
            color: Some("GREEN".to_owned()),
            production_year: Some(2022),
        }
        .validate()
        .expect("valid draft");

        subject.apply(input);

        assert_eq!(subject.id(), CarId::new(7));
        assert_eq!(subject.brand(), "Skoda");
        assert_eq!(subject.model(), "Fabia");
        assert_eq!(subject.color(), Color::Green);
        assert_eq!(subject.production_year(), 2022);
    }
}
