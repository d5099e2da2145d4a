//! Stock predicates and the validated values built from them.
//!
//! Each alias is an instantiation of [`ValidatedValue`], not a new wrapper type:
//!
//! | Alias            | Raw      | Rule                          |
//! |------------------|----------|-------------------------------|
//! | `NonNegativeInt` | `i64`    | `value >= 0`                  |
//! | `Age`            | `i64`    | `0 <= value <= 120`           |
//! | `Email`          | `String` | `local@domain.tld` shape      |
//! | `Salary`         | `i64`    | minor currency units, `>= 0`  |
//! | `PersonName`     | `String` | not blank                     |

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Predicate, ValidatedValue, ValidationError};

/// Integer that is zero or positive.
#[derive(Debug, Clone, Copy)]
pub struct NonNegative;

impl Predicate<i64> for NonNegative {
    const FIELD: &'static str = "value";

    fn check(raw: &i64) -> Result<(), ValidationError> {
        if *raw < 0 {
            return Err(ValidationError::below_minimum(Self::FIELD, 0, *raw));
        }
        Ok(())
    }
}

/// Human age in whole years.
#[derive(Debug, Clone, Copy)]
pub struct AgeRange;

impl AgeRange {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 120;
}

impl Predicate<i64> for AgeRange {
    const FIELD: &'static str = "age";

    fn check(raw: &i64) -> Result<(), ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(raw) {
            return Err(ValidationError::out_of_range(
                Self::FIELD,
                Self::MIN,
                Self::MAX,
                *raw,
            ));
        }
        Ok(())
    }
}

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("valid regex")
});

/// Address of the form `local@domain.tld`.
///
/// Deliberately permissive: this is a shape check, not RFC 5322.
#[derive(Debug, Clone, Copy)]
pub struct EmailShape;

impl Predicate<String> for EmailShape {
    const FIELD: &'static str = "email";

    fn check(raw: &String) -> Result<(), ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::empty_field(Self::FIELD));
        }
        if !raw.contains('@') {
            return Err(ValidationError::invalid_format(
                Self::FIELD,
                "missing @ symbol",
            ));
        }
        if !EMAIL_SHAPE.is_match(raw) {
            return Err(ValidationError::invalid_format(
                Self::FIELD,
                format!("expected local@domain.tld, got '{}'", raw),
            ));
        }
        Ok(())
    }
}

/// Monetary amount in minor currency units (e.g. cents).
#[derive(Debug, Clone, Copy)]
pub struct MonetaryAmount;

impl Predicate<i64> for MonetaryAmount {
    const FIELD: &'static str = "amount";

    fn check(raw: &i64) -> Result<(), ValidationError> {
        if *raw < 0 {
            return Err(ValidationError::below_minimum(Self::FIELD, 0, *raw));
        }
        Ok(())
    }
}

/// Text with at least one non-whitespace character.
#[derive(Debug, Clone, Copy)]
pub struct NonBlank;

impl Predicate<String> for NonBlank {
    const FIELD: &'static str = "name";

    fn check(raw: &String) -> Result<(), ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::empty_field(Self::FIELD));
        }
        Ok(())
    }
}

pub type NonNegativeInt = ValidatedValue<i64, NonNegative>;
pub type Age = ValidatedValue<i64, AgeRange>;
pub type Email = ValidatedValue<String, EmailShape>;
pub type Salary = ValidatedValue<i64, MonetaryAmount>;
pub type PersonName = ValidatedValue<String, NonBlank>;
