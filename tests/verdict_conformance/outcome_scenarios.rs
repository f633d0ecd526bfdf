//! End-to-end scenarios over `Outcome`.

use crate::common::{init_tracing, parse_number};
use std::collections::HashSet;
use verdict::{ContractError, Maybe, Outcome, OutcomeError, Severity, Status};

#[test]
fn test_parse_number_success() {
    init_tracing();
    let outcome = parse_number("42");
    assert!(outcome.is_success());
    assert_eq!(outcome.status(), Status::Success);
    assert!(outcome.errors().is_empty());
    assert_eq!(outcome.unwrap(), 42);
}

#[test]
fn test_parse_number_failure() {
    let outcome = parse_number("abc");
    assert_eq!(outcome.status(), Status::Failure);
    assert_eq!(outcome.errors().len(), 1);
    assert_eq!(outcome.errors()[0].code(), "PARSE_ERROR");
    assert!(outcome.value().is_none());
}

#[test]
fn test_pipeline_stops_at_first_failure() {
    let halve = |n: i32| {
        if n % 2 == 0 {
            Outcome::success(n / 2)
        } else {
            Outcome::validation_with(OutcomeError::new("ODD", format!("{} is odd", n)))
        }
    };

    assert_eq!(parse_number("8").bind(halve).bind(halve).unwrap(), 2);

    let failed = parse_number("6").bind(halve).bind(halve);
    assert_eq!(failed.status(), Status::Validation);
    assert_eq!(failed.first_error().map(OutcomeError::code), Some("ODD"));
}

#[test]
fn test_failed_status_requires_errors() {
    for status in Status::FAILED {
        let err = Outcome::<i32>::with_errors(status, Vec::new()).unwrap_err();
        assert!(err.is_invalid_argument(), "{} accepted no errors", status);

        let ok = Outcome::<i32>::with_errors(status, vec![OutcomeError::new("E", "m")]).unwrap();
        assert_eq!(ok.status(), status);
        assert_eq!(ok.errors(), &[OutcomeError::new("E", "m")]);
    }
}

#[test]
fn test_multiple_errors_keep_order() {
    let errors = vec![
        OutcomeError::new("NAME", "name is required"),
        OutcomeError::new("AGE", "age must be positive").with_severity(Severity::Warning),
    ];
    let outcome = Outcome::<()>::validation(errors.clone()).unwrap();
    assert_eq!(outcome.errors(), errors.as_slice());
    assert_eq!(
        outcome.to_string(),
        "Validation[NAME: name is required; AGE: age must be positive]"
    );
}

#[test]
fn test_strict_equality_across_statuses() {
    assert_eq!(Outcome::success(1), Outcome::success(1));
    assert_ne!(Outcome::success(1), Outcome::created(1));
    assert_ne!(
        Outcome::<i32>::not_found_with(OutcomeError::new("E", "m")),
        Outcome::conflict_with(OutcomeError::new("E", "m"))
    );

    let set: HashSet<Outcome<i32>> = [
        Outcome::success(1),
        Outcome::success(1),
        Outcome::created(1),
        Outcome::failure_with(OutcomeError::new("E", "m")),
        Outcome::failure_with(OutcomeError::new("E", "m").with_identifier("id-1")),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn test_combine_collects_values_or_errors() {
    let all = Outcome::combine(["1", "2", "3"].iter().map(|s| parse_number(s)));
    assert_eq!(all.unwrap(), vec![1, 2, 3]);

    let mixed = Outcome::combine(["1", "x", "y"].iter().map(|s| parse_number(s)));
    assert_eq!(mixed.status(), Status::Failure);
    assert_eq!(mixed.errors().len(), 2);
}

#[test]
fn test_unit_outcome_from_maybe() {
    let found = Maybe::some("alice").to_outcome(OutcomeError::new("NOT_FOUND", "no user"));
    assert_eq!(found.discard_value(), Outcome::success(()));

    let missing = Maybe::<&str>::none().to_outcome(OutcomeError::new("NOT_FOUND", "no user"));
    assert_eq!(missing.status(), Status::NotFound);
}

#[test]
fn test_try_unwrap_reports_status_and_errors() {
    let err = parse_number("zz").try_unwrap().unwrap_err();
    match err {
        ContractError::NotSuccessful { status, detail } => {
            assert_eq!(status, Status::Failure);
            assert!(detail.starts_with("PARSE_ERROR: "));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_json_round_trip() {
    let outcome = Outcome::<Vec<String>>::conflict(vec![
        OutcomeError::new("STALE", "version moved").with_identifier("doc-7"),
    ])
    .unwrap();
    let json = serde_json::to_string(&outcome).unwrap();
    let back: Outcome<Vec<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);
    assert_eq!(back.errors()[0].identifier(), Some("doc-7"));

    let created = Outcome::created(vec!["a".to_string()]);
    let json = serde_json::to_string(&created).unwrap();
    assert_eq!(serde_json::from_str::<Outcome<Vec<String>>>(&json).unwrap(), created);
}

#[test]
fn test_json_rejects_inconsistent_parts() {
    let bad = r#"{"status":"Success","value":1,"errors":[{"code":"E","message":"m"}]}"#;
    assert!(serde_json::from_str::<Outcome<i32>>(bad).is_err());

    let bad = r#"{"status":"NotFound","value":1,"errors":[{"code":"E","message":"m"}]}"#;
    assert!(serde_json::from_str::<Outcome<i32>>(bad).is_err());
}
