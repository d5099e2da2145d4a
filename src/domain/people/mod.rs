//! People records - the call sites the foundation primitives are built for.
//!
//! - `person` - `Person` and `Address`, required `{name, age}`
//! - `employee` - `Employee`, required `{name, email, age, salary}`
//! - `draft` - raw, untrusted person input checked at runtime

mod draft;
mod employee;
mod person;

pub use draft::PersonDraft;
pub use employee::{Employee, EmployeeBuilder, EmployeeOptions};
pub use person::{Address, Person, PersonBuilder, PersonOptions};
