//! Guard checks feeding `Outcome` construction.

use verdict::guard;
use verdict::{ContractError, ContractResult, Outcome, OutcomeError, Status};

#[derive(Debug, PartialEq)]
struct Account {
    handle: String,
    age: u32,
}

fn new_account(handle: &str, age: u32) -> ContractResult<Account> {
    let handle = guard::against_blank(handle, "handle")?;
    let handle = guard::against_too_long(handle, 16, "handle")?;
    let handle = guard::against_pattern_mismatch(handle, "[a-z][a-z0-9_]*", "handle")?;
    let age = guard::against_out_of_range(age, 13, 130, "age")?;
    Ok(Account {
        handle: handle.to_string(),
        age,
    })
}

fn register(handle: &str, age: u32) -> Outcome<Account> {
    match new_account(handle, age) {
        Ok(account) => Outcome::created(account),
        Err(ContractError::InvalidArgument { parameter, reason }) => Outcome::validation_with(
            OutcomeError::new("INVALID_ARGUMENT", reason).with_identifier(parameter),
        ),
        Err(other) => Outcome::critical_error_with(OutcomeError::new("UNEXPECTED", other.to_string())),
    }
}

#[test]
fn test_valid_account() {
    let outcome = register("ada_99", 36);
    assert_eq!(outcome.status(), Status::Created);
    assert_eq!(outcome.value().map(|a| a.age), Some(36));
}

#[test]
fn test_each_guard_names_its_parameter() {
    let cases = [("  ", 20, "handle"), ("9lives", 20, "handle"), ("ada", 5, "age")];
    for (handle, age, parameter) in cases {
        let outcome = register(handle, age);
        assert_eq!(outcome.status(), Status::Validation);
        assert_eq!(outcome.errors()[0].identifier(), Some(parameter));
    }
}

#[test]
fn test_against_undefined_with_status_tags() {
    let status: Status = guard::against_undefined(11u8, "status").unwrap();
    assert_eq!(status, Status::Unavailable);
    assert!(guard::against_undefined::<Status, u8>(12, "status").is_err());
}
