//! Field slots for staged builders.
//!
//! A slot records whether a required field has been assigned:
//!
//! - [`Unset<T>`] - statically known to be empty
//! - [`Set<T>`] - statically known to hold a value
//! - [`Maybe<T>`] - only known at runtime (e.g. fields from untrusted input)
//!
//! A builder's slot state is a tuple of slots, one per required field, in
//! declaration order. [`SlotList`] reads the tuple as a [`FieldMask`];
//! [`Filled`] is only implemented for tuples made entirely of `Set` slots,
//! which is what gates `build()` at compile time.

use std::fmt;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// A single required-field slot.
pub trait Slot: sealed::Sealed {
    /// Type of the value the slot holds once set.
    type Value;

    /// Returns true if the slot holds a value.
    fn is_set(&self) -> bool;

    /// Returns the held value, if any.
    fn value(&self) -> Option<&Self::Value>;

    /// Consumes the slot, returning the held value, if any.
    fn into_value(self) -> Option<Self::Value>;
}

/// A required field that has not been assigned.
pub struct Unset<T>(PhantomData<fn() -> T>);

impl<T> Unset<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Unset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Unset<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Unset<T> {}

impl<T> PartialEq for Unset<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Unset<T> {}

impl<T> fmt::Debug for Unset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unset")
    }
}

impl<T> sealed::Sealed for Unset<T> {}

impl<T> Slot for Unset<T> {
    type Value = T;

    fn is_set(&self) -> bool {
        false
    }

    fn value(&self) -> Option<&T> {
        None
    }

    fn into_value(self) -> Option<T> {
        None
    }
}

/// A required field that holds a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Set<T>(T);

impl<T> Set<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn get(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> sealed::Sealed for Set<T> {}

impl<T> Slot for Set<T> {
    type Value = T;

    fn is_set(&self) -> bool {
        true
    }

    fn value(&self) -> Option<&T> {
        Some(&self.0)
    }

    fn into_value(self) -> Option<T> {
        Some(self.0)
    }
}

/// A required field whose presence is only known at runtime.
///
/// Builders holding a `Maybe` slot can only finish through `try_build()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
    pub fn new(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> sealed::Sealed for Maybe<T> {}

impl<T> Slot for Maybe<T> {
    type Value = T;

    fn is_set(&self) -> bool {
        self.0.is_some()
    }

    fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    fn into_value(self) -> Option<T> {
        self.0
    }
}

/// Bitset of assigned required fields; bit `i` is field `i`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldMask(u64);

impl FieldMask {
    /// No fields set.
    pub const EMPTY: Self = Self(0);

    /// Mask with the first `len` fields set.
    pub fn full(len: usize) -> Self {
        if len >= 64 {
            Self(u64::MAX)
        } else {
            Self((1u64 << len) - 1)
        }
    }

    /// Returns this mask with field `index` added.
    ///
    /// Indices of 64 and above cannot be represented; the mask is returned unchanged.
    pub fn with(self, index: usize) -> Self {
        match bit(index) {
            Some(bit) => Self(self.0 | bit),
            None => self,
        }
    }

    /// Returns true if field `index` is set. Always false for indices of 64 and above.
    pub fn contains(&self, index: usize) -> bool {
        bit(index).map_or(false, |bit| self.0 & bit != 0)
    }

    /// Returns true if every field in `other` is also in `self`.
    pub fn is_superset_of(&self, other: FieldMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of fields set.
    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    /// Indices below `len` that are not set.
    pub fn missing(&self, len: usize) -> impl Iterator<Item = usize> + '_ {
        (0..len).filter(move |i| !self.contains(*i))
    }
}

fn bit(index: usize) -> Option<u64> {
    u32::try_from(index).ok().and_then(|shift| 1u64.checked_shl(shift))
}

/// A tuple of slots, one per required field.
pub trait SlotList: sealed::Sealed {
    /// Tuple of the slot value types.
    type Values;

    /// Number of required fields.
    const LEN: usize;

    /// Which slots currently hold a value.
    fn mask(&self) -> FieldMask;

    /// Extracts every value, or returns the mask if any slot is empty.
    fn try_into_values(self) -> Result<Self::Values, FieldMask>;
}

/// A slot tuple in which every slot is statically `Set`.
pub trait Filled: SlotList {
    fn into_values(self) -> Self::Values;
}

macro_rules! impl_slot_list {
    ($len:expr; $($slot:ident $var:ident $idx:tt),+) => {
        impl<$($slot: Slot),+> sealed::Sealed for ($($slot,)+) {}

        impl<$($slot: Slot),+> SlotList for ($($slot,)+) {
            type Values = ($($slot::Value,)+);

            const LEN: usize = $len;

            fn mask(&self) -> FieldMask {
                let mut mask = FieldMask::EMPTY;
                $(
                    if self.$idx.is_set() {
                        mask = mask.with($idx);
                    }
                )+
                mask
            }

            fn try_into_values(self) -> Result<Self::Values, FieldMask> {
                let mask = self.mask();
                let ($($var,)+) = self;
                match ($($var.into_value(),)+) {
                    ($(Some($var),)+) => Ok(($($var,)+)),
                    _ => Err(mask),
                }
            }
        }

        impl<$($slot),+> Filled for ($(Set<$slot>,)+) {
            fn into_values(self) -> Self::Values {
                let ($($var,)+) = self;
                ($($var.into_inner(),)+)
            }
        }
    };
}

impl_slot_list!(1; A a 0);
impl_slot_list!(2; A a 0, B b 1);
impl_slot_list!(3; A a 0, B b 1, C c 2);
impl_slot_list!(4; A a 0, B b 1, C c 2, D d 3);
impl_slot_list!(5; A a 0, B b 1, C c 2, D d 3, E e 4);
impl_slot_list!(6; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5);
impl_slot_list!(7; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6);
impl_slot_list!(8; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7);
