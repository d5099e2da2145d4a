//! Employee record and its staged builder.
//!
//! Every required field is a validated value, so a finished `Employee` is
//! valid by construction: there is no `validate()` to forget to call.

use serde::Serialize;

use crate::domain::foundation::{
    Age, Email, EmployeeId, PersonName, Salary, Set, Slot, StagedBuilder, StagedRecord, Unset,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    name: PersonName,
    email: Email,
    age: Age,
    salary: Salary,
    manager: Option<EmployeeId>,
}

impl Employee {
    /// Starts a builder with nothing set.
    pub fn builder() -> EmployeeBuilder {
        StagedBuilder::empty()
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn salary(&self) -> Salary {
        self.salary
    }

    pub fn manager(&self) -> Option<EmployeeId> {
        self.manager
    }

    /// Returns true if this employee reports to `manager`.
    pub fn reports_to(&self, manager: &Employee) -> bool {
        self.manager == Some(manager.id)
    }
}

/// Optional employee fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeOptions {
    /// Fixed id; a fresh one is generated at build time when absent.
    pub id: Option<EmployeeId>,
    pub manager: Option<EmployeeId>,
}

impl StagedRecord for Employee {
    const NAME: &'static str = "Employee";
    const REQUIRED: &'static [&'static str] = &["name", "email", "age", "salary"];
    type Required = (PersonName, Email, Age, Salary);
    type Empty = (
        Unset<PersonName>,
        Unset<Email>,
        Unset<Age>,
        Unset<Salary>,
    );
    type Optional = EmployeeOptions;

    fn assemble((name, email, age, salary): Self::Required, optional: EmployeeOptions) -> Self {
        Self {
            id: optional.id.unwrap_or_default(),
            name,
            email,
            age,
            salary,
            manager: optional.manager,
        }
    }
}

/// Builder for [`Employee`]; parameters are the `name`, `email`, `age` and `salary` slots.
pub type EmployeeBuilder<
    N = Unset<PersonName>,
    E = Unset<Email>,
    A = Unset<Age>,
    S = Unset<Salary>,
> = StagedBuilder<Employee, (N, E, A, S)>;

impl<N, E, A, S> StagedBuilder<Employee, (N, E, A, S)>
where
    N: Slot<Value = PersonName> + Clone,
    E: Slot<Value = Email> + Clone,
    A: Slot<Value = Age> + Clone,
    S: Slot<Value = Salary> + Clone,
{
    pub fn with_name(&self, name: PersonName) -> EmployeeBuilder<Set<PersonName>, E, A, S> {
        let (_, email, age, salary) = self.slots().clone();
        self.with_slots((Set::new(name), email, age, salary))
    }

    pub fn with_email(&self, email: Email) -> EmployeeBuilder<N, Set<Email>, A, S> {
        let (name, _, age, salary) = self.slots().clone();
        self.with_slots((name, Set::new(email), age, salary))
    }

    pub fn with_age(&self, age: Age) -> EmployeeBuilder<N, E, Set<Age>, S> {
        let (name, email, _, salary) = self.slots().clone();
        self.with_slots((name, email, Set::new(age), salary))
    }

    pub fn with_salary(&self, salary: Salary) -> EmployeeBuilder<N, E, A, Set<Salary>> {
        let (name, email, age, _) = self.slots().clone();
        self.with_slots((name, email, age, Set::new(salary)))
    }

    pub fn with_id(&self, id: EmployeeId) -> Self {
        self.with_optional(|o| o.id = Some(id))
    }

    pub fn with_manager(&self, manager: EmployeeId) -> Self {
        self.with_optional(|o| o.manager = Some(manager))
    }
}
