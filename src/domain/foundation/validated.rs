//! Smart-constructed value wrapper.
//!
//! A [`ValidatedValue`] can only be obtained through [`ValidatedValue::try_create`],
//! so every live instance satisfies its [`Predicate`]. The raw value is never
//! handed out mutably, which keeps the invariant for the lifetime of the value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::ValidationError;

/// Acceptance rule for raw values of type `T`.
///
/// Implementors are usually zero-sized marker types; the rule lives in the
/// type so that `ValidatedValue<i64, AgeRange>` and `ValidatedValue<i64, NonNegative>`
/// cannot be mixed up.
pub trait Predicate<T: ?Sized> {
    /// Field name reported in validation errors.
    const FIELD: &'static str;

    /// Checks the raw value, describing the violation on failure.
    fn check(raw: &T) -> Result<(), ValidationError>;

    /// Returns true if the raw value is acceptable.
    fn holds(raw: &T) -> bool {
        Self::check(raw).is_ok()
    }
}

/// A value of type `T` proven to satisfy predicate `P`.
pub struct ValidatedValue<T, P> {
    raw: T,
    _predicate: PhantomData<fn() -> P>,
}

impl<T, P: Predicate<T>> ValidatedValue<T, P> {
    /// Validates `raw` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the predicate's `ValidationError` if `raw` is rejected.
    pub fn try_create(raw: T) -> Result<Self, ValidationError> {
        if let Err(err) = P::check(&raw) {
            tracing::debug!(field = P::FIELD, error = %err, "Rejected raw value");
            return Err(err);
        }
        Ok(Self {
            raw,
            _predicate: PhantomData,
        })
    }
}

impl<T, P> ValidatedValue<T, P> {
    /// Returns a reference to the wrapped value.
    pub fn get(&self) -> &T {
        &self.raw
    }

    /// Consumes the wrapper and returns the wrapped value.
    pub fn into_inner(self) -> T {
        self.raw
    }
}

impl<T, P> AsRef<T> for ValidatedValue<T, P> {
    fn as_ref(&self) -> &T {
        &self.raw
    }
}

impl<T: Clone, P> Clone for ValidatedValue<T, P> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            _predicate: PhantomData,
        }
    }
}

impl<T: Copy, P> Copy for ValidatedValue<T, P> {}

impl<T: PartialEq, P> PartialEq for ValidatedValue<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T: Eq, P> Eq for ValidatedValue<T, P> {}

impl<T: PartialOrd, P> PartialOrd for ValidatedValue<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.raw.partial_cmp(&other.raw)
    }
}

impl<T: Ord, P> Ord for ValidatedValue<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<T: Hash, P> Hash for ValidatedValue<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T: fmt::Debug, P> fmt::Debug for ValidatedValue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.raw, f)
    }
}

impl<T: fmt::Display, P> fmt::Display for ValidatedValue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

impl<T: Serialize, P> Serialize for ValidatedValue<T, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for ValidatedValue<T, P>
where
    T: Deserialize<'de>,
    P: Predicate<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = T::deserialize(deserializer)?;
        Self::try_create(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl Predicate<u32> for Even {
        const FIELD: &'static str = "even";

        fn check(raw: &u32) -> Result<(), ValidationError> {
            if raw % 2 == 0 {
                Ok(())
            } else {
                Err(ValidationError::invalid_format(Self::FIELD, "must be even"))
            }
        }
    }

    type EvenNumber = ValidatedValue<u32, Even>;

    #[test]
    fn try_create_accepts_values_satisfying_predicate() {
        let value = EvenNumber::try_create(4).unwrap();
        assert_eq!(*value.get(), 4);
        assert_eq!(value.into_inner(), 4);
    }

    #[test]
    fn try_create_rejects_values_violating_predicate() {
        let result = EvenNumber::try_create(3);
        assert_eq!(
            result,
            Err(ValidationError::invalid_format("even", "must be even"))
        );
    }

    #[test]
    fn holds_matches_check() {
        assert!(Even::holds(&10));
        assert!(!Even::holds(&11));
    }

    #[test]
    fn equality_and_ordering_delegate_to_raw_value() {
        let two = EvenNumber::try_create(2).unwrap();
        let four = EvenNumber::try_create(4).unwrap();
        assert_eq!(two, EvenNumber::try_create(2).unwrap());
        assert_ne!(two, four);
        assert!(two < four);
        assert_eq!(two.cmp(&four), Ordering::Less);
    }

    #[test]
    fn debug_and_display_show_raw_value() {
        let value = EvenNumber::try_create(8).unwrap();
        assert_eq!(format!("{:?}", value), "8");
        assert_eq!(format!("{}", value), "8");
    }

    #[test]
    fn serializes_as_raw_value() {
        let value = EvenNumber::try_create(6).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), "6");
    }

    #[test]
    fn deserialization_runs_predicate() {
        let value: EvenNumber = serde_json::from_str("12").unwrap();
        assert_eq!(*value.get(), 12);

        let err = serde_json::from_str::<EvenNumber>("13").unwrap_err();
        assert!(err.to_string().contains("must be even"));
    }
}
