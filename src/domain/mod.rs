//! Domain layer containing construction primitives and the records built with them.
//!
//! # Module Organization
//!
//! - `foundation` - Validated values, predicates, slots, staged builders, errors
//! - `people` - Person and employee records assembled through staged builders

pub mod foundation;
pub mod people;
