//! `typed-construct` - builds people from JSON drafts.
//!
//! Reads a JSON array of person drafts on stdin and writes one JSON line per
//! draft to stdout: `{"ok": <person>}` or `{"error": {"code", "message"}}`.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use serde::Serialize;
use thiserror::Error;
use typed_construct::config::{AppConfig, ConfigError};
use typed_construct::domain::foundation::ConstructionError;
use typed_construct::domain::people::{Person, PersonDraft};
use typed_construct::telemetry;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to install tracing subscriber: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid input JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Outcome {
    Ok(Person),
    Error(ErrorReport),
}

#[derive(Serialize)]
struct ErrorReport {
    code: String,
    message: String,
}

impl From<Result<Person, ConstructionError>> for Outcome {
    fn from(result: Result<Person, ConstructionError>) -> Self {
        match result {
            Ok(person) => Outcome::Ok(person),
            Err(err) => Outcome::Error(ErrorReport {
                code: err.code().to_string(),
                message: err.to_string(),
            }),
        }
    }
}

fn run() -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    telemetry::init(&config.logging)?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let drafts: Vec<PersonDraft> = serde_json::from_str(&input)?;
    tracing::info!(count = drafts.len(), "Processing person drafts");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;
    for draft in drafts {
        let outcome = Outcome::from(draft.into_person());
        if matches!(outcome, Outcome::Error(_)) {
            failures += 1;
        }
        serde_json::to_writer(&mut out, &outcome)?;
        writeln!(out)?;
    }

    tracing::info!(failures, "Finished processing drafts");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("typed-construct: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use typed_construct::domain::foundation::{
        IncompleteBuilderError, NonNegativeInt, ValidationError,
    };

    fn render(result: Result<Person, ConstructionError>) -> serde_json::Value {
        serde_json::to_value(Outcome::from(result)).unwrap()
    }

    #[test]
    fn built_person_is_reported_under_ok() {
        let person = Person::builder()
            .with_name("John Smith")
            .with_age(NonNegativeInt::try_create(32).unwrap())
            .build();

        assert_eq!(
            render(Ok(person)),
            json!({"ok": {"name": "John Smith", "age": 32, "addresses": []}})
        );
    }

    #[test]
    fn validation_failure_is_reported_with_code_and_message() {
        let err: ConstructionError = ValidationError::below_minimum("value", 0, -5).into();

        assert_eq!(
            render(Err(err)),
            json!({"error": {
                "code": "BELOW_MINIMUM",
                "message": "Field 'value' must be at least 0, got -5"
            }})
        );
    }

    #[test]
    fn incomplete_draft_is_reported_with_every_missing_field() {
        let err: ConstructionError =
            IncompleteBuilderError::new("Person", vec!["name", "age"]).into();

        assert_eq!(
            render(Err(err)),
            json!({"error": {
                "code": "INCOMPLETE_BUILDER",
                "message": "Cannot build Person: missing required fields [name, age]"
            }})
        );
    }

    #[test]
    fn drafts_render_one_outcome_each() {
        let drafts: Vec<PersonDraft> = serde_json::from_str(
            r#"[{"name": "Ada", "age": 36}, {"name": "   ", "age": 3}, {}]"#,
        )
        .unwrap();

        let codes: Vec<_> = drafts
            .into_iter()
            .map(|draft| render(draft.into_person()))
            .map(|line| line["error"]["code"].as_str().map(str::to_string))
            .collect();

        assert_eq!(
            codes,
            vec![
                None,
                Some("EMPTY_FIELD".to_string()),
                Some("INCOMPLETE_BUILDER".to_string())
            ]
        );
    }
}
