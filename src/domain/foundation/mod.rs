//! Foundation module - Shared construction primitives.
//!
//! Contains the validated value wrapper and its stock predicates, the slot
//! machinery and staged builder, identifiers, and the error taxonomy that
//! the record modules are built from.

mod errors;
mod ids;
mod predicates;
mod slots;
mod staged;
mod validated;

pub use errors::{ConstructionError, ErrorCode, IncompleteBuilderError, ValidationError};
pub use ids::EmployeeId;
pub use predicates::{
    Age, AgeRange, Email, EmailShape, MonetaryAmount, NonBlank, NonNegative, NonNegativeInt,
    PersonName, Salary,
};
pub use slots::{FieldMask, Filled, Maybe, Set, Slot, SlotList, Unset};
pub use staged::{StagedBuilder, StagedRecord};
pub use validated::{Predicate, ValidatedValue};
