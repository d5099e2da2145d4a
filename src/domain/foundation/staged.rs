//! Staged (typestate) builder.
//!
//! A [`StagedBuilder<R, S>`] accumulates the fields of record `R`. The slot
//! tuple `S` records, in the type, which required fields are set, so:
//!
//! - `build()` only exists once every slot is `Set` (rejected at compile time otherwise)
//! - `try_build()` exists in every state and reports all missing fields at runtime
//!
//! Builders are persistent: setters borrow the receiver and return a new
//! builder, leaving the original usable for branching construction.
//!
//! Record-specific setters live next to each record and are written against
//! this type, e.g. `impl<N, A> StagedBuilder<Person, (N, A)>`. Crates that
//! cannot add inherent impls here move between states with the public
//! [`StagedBuilder::with_slots`] and [`StagedBuilder::with_optional`].

use std::fmt;
use std::marker::PhantomData;

use super::{Filled, FieldMask, IncompleteBuilderError, SlotList};

/// A record assembled by a [`StagedBuilder`].
pub trait StagedRecord: Sized {
    /// Record name used in error messages.
    const NAME: &'static str;

    /// Required field names, in slot order.
    const REQUIRED: &'static [&'static str];

    /// Tuple of required field values, in slot order.
    type Required;

    /// Slot tuple of a fresh builder.
    type Empty: SlotList<Values = Self::Required> + Default;

    /// Bundle of optional fields; its `Default` is used for unset optionals.
    type Optional: Default;

    /// Assembles the finished record.
    fn assemble(required: Self::Required, optional: Self::Optional) -> Self;
}

/// Persistent builder for `R` in slot state `S`.
pub struct StagedBuilder<R: StagedRecord, S> {
    slots: S,
    optional: R::Optional,
    _record: PhantomData<fn() -> R>,
}

impl<R, S> StagedBuilder<R, S>
where
    R: StagedRecord<Empty = S>,
    S: Default,
{
    /// Creates a builder with no required fields set and optionals defaulted.
    pub fn empty() -> Self {
        Self::from_parts(S::default(), R::Optional::default())
    }
}

impl<R: StagedRecord, S> StagedBuilder<R, S> {
    pub(crate) fn from_parts(slots: S, optional: R::Optional) -> Self {
        Self {
            slots,
            optional,
            _record: PhantomData,
        }
    }

    /// Returns the slot tuple.
    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Returns the optional field bundle.
    pub fn optional(&self) -> &R::Optional {
        &self.optional
    }

    /// New builder with replaced slots and the same optionals.
    ///
    /// This is the state transition behind every `with_<field>` setter:
    ///
    /// ```ignore
    /// let (_, age) = builder.slots().clone();
    /// builder.with_slots((Set::new(name), age))
    /// ```
    pub fn with_slots<T>(&self, slots: T) -> StagedBuilder<R, T>
    where
        R::Optional: Clone,
    {
        StagedBuilder::from_parts(slots, self.optional.clone())
    }

    /// New builder in the same state with updated optionals.
    pub fn with_optional(&self, update: impl FnOnce(&mut R::Optional)) -> Self
    where
        S: Clone,
        R::Optional: Clone,
    {
        let mut optional = self.optional.clone();
        update(&mut optional);
        Self::from_parts(self.slots.clone(), optional)
    }
}

impl<R, S> StagedBuilder<R, S>
where
    R: StagedRecord,
    S: SlotList<Values = R::Required>,
{
    /// Which required fields are set.
    pub fn mask(&self) -> FieldMask {
        self.slots.mask()
    }

    /// Returns true if every required field is set.
    pub fn is_complete(&self) -> bool {
        self.mask().is_superset_of(FieldMask::full(S::LEN))
    }

    /// Names of required fields not yet set, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing_names::<R, S>(self.mask())
    }

    /// Builds the record if every required field is set.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteBuilderError` naming every unset required field.
    pub fn try_build(self) -> Result<R, IncompleteBuilderError> {
        match self.slots.try_into_values() {
            Ok(required) => {
                tracing::debug!(record = R::NAME, "Built record");
                Ok(R::assemble(required, self.optional))
            }
            Err(mask) => {
                let missing = missing_names::<R, S>(mask);
                tracing::debug!(record = R::NAME, ?missing, "Refused to build incomplete record");
                Err(IncompleteBuilderError::new(R::NAME, missing))
            }
        }
    }
}

impl<R, S> StagedBuilder<R, S>
where
    R: StagedRecord,
    S: Filled<Values = R::Required>,
{
    /// Builds the record. Only available once every required field is set.
    pub fn build(self) -> R {
        tracing::debug!(record = R::NAME, "Built record");
        R::assemble(self.slots.into_values(), self.optional)
    }
}

fn missing_names<R: StagedRecord, S: SlotList>(mask: FieldMask) -> Vec<&'static str> {
    debug_assert_eq!(
        R::REQUIRED.len(),
        S::LEN,
        "{} names {} required fields but has {} slots",
        R::NAME,
        R::REQUIRED.len(),
        S::LEN
    );
    mask.missing(R::REQUIRED.len())
        .map(|index| R::REQUIRED[index])
        .collect()
}

impl<R, S> Default for StagedBuilder<R, S>
where
    R: StagedRecord<Empty = S>,
    S: Default,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<R, S> Clone for StagedBuilder<R, S>
where
    R: StagedRecord,
    R::Optional: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self::from_parts(self.slots.clone(), self.optional.clone())
    }
}

impl<R, S> PartialEq for StagedBuilder<R, S>
where
    R: StagedRecord,
    R::Optional: PartialEq,
    S: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots && self.optional == other.optional
    }
}

impl<R, S> Eq for StagedBuilder<R, S>
where
    R: StagedRecord,
    R::Optional: Eq,
    S: Eq,
{
}

impl<R, S> fmt::Debug for StagedBuilder<R, S>
where
    R: StagedRecord,
    R::Optional: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagedBuilder")
            .field("record", &R::NAME)
            .field("slots", &self.slots)
            .field("optional", &self.optional)
            .finish()
    }
}
