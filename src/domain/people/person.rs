//! Person record and its staged builder.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{NonNegativeInt, Set, Slot, StagedBuilder, StagedRecord, Unset};

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }
}

/// A person with a name, an age, and any number of addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: String,
    age: NonNegativeInt,
    addresses: Vec<Address>,
}

impl Person {
    /// Starts a builder with nothing set.
    pub fn builder() -> PersonBuilder {
        StagedBuilder::empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> NonNegativeInt {
        self.age
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }
}

/// Optional person fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonOptions {
    pub addresses: Vec<Address>,
}

impl StagedRecord for Person {
    const NAME: &'static str = "Person";
    const REQUIRED: &'static [&'static str] = &["name", "age"];
    type Required = (String, NonNegativeInt);
    type Empty = (Unset<String>, Unset<NonNegativeInt>);
    type Optional = PersonOptions;

    fn assemble((name, age): Self::Required, optional: PersonOptions) -> Self {
        Self {
            name,
            age,
            addresses: optional.addresses,
        }
    }
}

/// Builder for [`Person`]; the parameters are the `name` and `age` slots.
pub type PersonBuilder<N = Unset<String>, A = Unset<NonNegativeInt>> =
    StagedBuilder<Person, (N, A)>;

impl<N, A> StagedBuilder<Person, (N, A)>
where
    N: Slot<Value = String> + Clone,
    A: Slot<Value = NonNegativeInt> + Clone,
{
    pub fn with_name(&self, name: impl Into<String>) -> PersonBuilder<Set<String>, A> {
        self.with_slots((Set::new(name.into()), self.slots().1.clone()))
    }

    pub fn with_age(&self, age: NonNegativeInt) -> PersonBuilder<N, Set<NonNegativeInt>> {
        self.with_slots((self.slots().0.clone(), Set::new(age)))
    }

    /// Appends an address.
    pub fn with_address(&self, address: Address) -> Self {
        self.with_optional(|o| o.addresses.push(address))
    }

    /// Replaces all addresses.
    pub fn with_addresses(&self, addresses: Vec<Address>) -> Self {
        self.with_optional(|o| o.addresses = addresses)
    }
}
