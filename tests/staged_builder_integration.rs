//! Integration tests for defining new records outside this crate.
//!
//! A consuming crate cannot add inherent methods to `StagedBuilder`, so it:
//! 1. Implements `StagedRecord` for its own record
//! 2. Writes setters in a local extension trait on top of `with_slots` / `with_optional`
//! 3. Finishes with `build()` or `try_build()` like the bundled records

use typed_construct::domain::foundation::{
    ConstructionError, FieldMask, IncompleteBuilderError, Maybe, NonNegativeInt, Set, Slot,
    StagedBuilder, StagedRecord, Unset, ValidationError,
};

// =============================================================================
// A record defined downstream
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct Reading {
    sensor: String,
    value: NonNegativeInt,
    unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ReadingOptions {
    unit: Option<String>,
}

impl StagedRecord for Reading {
    const NAME: &'static str = "Reading";
    const REQUIRED: &'static [&'static str] = &["sensor", "value"];
    type Required = (String, NonNegativeInt);
    type Empty = (Unset<String>, Unset<NonNegativeInt>);
    type Optional = ReadingOptions;

    fn assemble((sensor, value): Self::Required, optional: ReadingOptions) -> Self {
        Reading {
            sensor,
            value,
            unit: optional.unit,
        }
    }
}

trait ReadingSetters {
    type Sensor;
    type Value;

    fn with_sensor(&self, sensor: &str) -> StagedBuilder<Reading, (Set<String>, Self::Value)>;
    fn with_value(
        &self,
        value: NonNegativeInt,
    ) -> StagedBuilder<Reading, (Self::Sensor, Set<NonNegativeInt>)>;
    fn with_unit(&self, unit: &str) -> Self;
}

impl<S, V> ReadingSetters for StagedBuilder<Reading, (S, V)>
where
    S: Slot<Value = String> + Clone,
    V: Slot<Value = NonNegativeInt> + Clone,
{
    type Sensor = S;
    type Value = V;

    fn with_sensor(&self, sensor: &str) -> StagedBuilder<Reading, (Set<String>, V)> {
        self.with_slots((Set::new(sensor.to_string()), self.slots().1.clone()))
    }

    fn with_value(
        &self,
        value: NonNegativeInt,
    ) -> StagedBuilder<Reading, (S, Set<NonNegativeInt>)> {
        self.with_slots((self.slots().0.clone(), Set::new(value)))
    }

    fn with_unit(&self, unit: &str) -> Self {
        self.with_optional(|o| o.unit = Some(unit.to_string()))
    }
}

type ReadingBuilder = StagedBuilder<Reading, (Unset<String>, Unset<NonNegativeInt>)>;

fn value(raw: i64) -> NonNegativeInt {
    NonNegativeInt::try_create(raw).unwrap()
}

// =============================================================================
// Static construction
// =============================================================================

#[test]
fn downstream_record_builds_through_public_setters() {
    let reading = ReadingBuilder::empty()
        .with_sensor("thermo-1")
        .with_value(value(21))
        .with_unit("C")
        .build();

    assert_eq!(
        reading,
        Reading {
            sensor: "thermo-1".to_string(),
            value: value(21),
            unit: Some("C".to_string()),
        }
    );
}

#[test]
fn downstream_record_builds_directly_from_slots() {
    let reading = StagedBuilder::<Reading, _>::empty()
        .with_slots((Set::new("raw".to_string()), Set::new(value(0))))
        .build();

    assert_eq!(reading.sensor, "raw");
    assert_eq!(reading.unit, None);
}

#[test]
fn downstream_builders_are_persistent() {
    let base = ReadingBuilder::empty().with_sensor("hall");
    let low = base.with_value(value(1)).build();
    let high = base.with_value(value(99)).build();

    assert_eq!(*low.value.get(), 1);
    assert_eq!(*high.value.get(), 99);
    assert_eq!(base.mask(), FieldMask::EMPTY.with(0));
    assert_eq!(base.missing_fields(), vec!["value"]);
}

#[test]
fn optionals_survive_slot_transitions() {
    let reading = ReadingBuilder::empty()
        .with_unit("K")
        .with_value(value(300))
        .with_sensor("kiln")
        .build();

    assert_eq!(reading.unit.as_deref(), Some("K"));
}

// =============================================================================
// Runtime construction
// =============================================================================

#[test]
fn downstream_try_build_names_every_missing_field() {
    let err = ReadingBuilder::empty().with_unit("C").try_build().unwrap_err();
    assert_eq!(err, IncompleteBuilderError::new("Reading", vec!["sensor", "value"]));
}

#[test]
fn downstream_runtime_slots_finish_with_try_build() {
    let parse = |sensor: Option<&str>, raw: Option<i64>| -> Result<Reading, ConstructionError> {
        let value = raw.map(NonNegativeInt::try_create).transpose()?;
        let builder = ReadingBuilder::empty()
            .with_slots((Maybe::new(sensor.map(str::to_string)), Maybe::new(value)));
        Ok(builder.try_build()?)
    };

    assert_eq!(parse(Some("a"), Some(4)).unwrap().sensor, "a");
    assert_eq!(
        parse(None, Some(4)).unwrap_err(),
        ConstructionError::Incomplete(IncompleteBuilderError::new("Reading", vec!["sensor"]))
    );
    assert_eq!(
        parse(Some("a"), Some(-4)).unwrap_err(),
        ConstructionError::Validation(ValidationError::below_minimum("value", 0, -4))
    );
}
