//! Typed Construct - validated values and staged builders.
//!
//! Two pieces work together:
//!
//! - [`ValidatedValue`](domain::foundation::ValidatedValue): a smart-constructed
//!   wrapper whose only constructor checks a predicate, so every instance is valid.
//! - [`StagedBuilder`](domain::foundation::StagedBuilder): a persistent builder
//!   whose type tracks which required fields are set and only offers `build()`
//!   once all of them are.
//!
//! ```
//! use typed_construct::domain::foundation::NonNegativeInt;
//! use typed_construct::domain::people::Person;
//!
//! let age = NonNegativeInt::try_create(32).unwrap();
//! let person = Person::builder().with_name("John Smith").with_age(age).build();
//! assert_eq!(person.name(), "John Smith");
//! assert!(person.addresses().is_empty());
//! ```
//!
//! Calling `build()` before every required field is set does not compile:
//!
//! ```compile_fail
//! use typed_construct::domain::people::Person;
//!
//! let person = Person::builder().with_name("John Smith").build();
//! ```

pub mod config;
pub mod domain;
pub mod telemetry;
