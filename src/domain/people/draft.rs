//! Untrusted person input.
//!
//! Fields arriving from outside (JSON, forms) may be absent or invalid. A
//! draft validates each present value and then finishes through the
//! runtime-checked `try_build()`, so callers get one structured error that
//! tells validation failures apart from missing fields.

use serde::{Deserialize, Serialize};

use super::{Address, Person, PersonBuilder, PersonOptions};
use crate::domain::foundation::{
    ConstructionError, Maybe, NonNegativeInt, PersonName, StagedBuilder,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

impl PersonDraft {
    /// Validates the draft and builds a [`Person`].
    ///
    /// # Errors
    ///
    /// - `ConstructionError::Validation` if a present value is invalid
    /// - `ConstructionError::Incomplete` naming every absent required field
    pub fn into_person(self) -> Result<Person, ConstructionError> {
        Ok(self.into_builder()?.try_build()?)
    }

    /// Validates present values, leaving presence to be checked at build time.
    pub fn into_builder(
        self,
    ) -> Result<PersonBuilder<Maybe<String>, Maybe<NonNegativeInt>>, ConstructionError> {
        let name = self
            .name
            .map(|raw| PersonName::try_create(raw).map(PersonName::into_inner))
            .transpose()?;
        let age = self.age.map(NonNegativeInt::try_create).transpose()?;
        Ok(StagedBuilder::from_parts(
            (Maybe::new(name), Maybe::new(age)),
            PersonOptions {
                addresses: self.addresses,
            },
        ))
    }
}
