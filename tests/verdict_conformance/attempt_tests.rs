//! `Attempt` behavior seen from outside the crate.

use std::cmp::Ordering;
use std::fmt;
use verdict::{Attempt, AttemptError, Fluent, Maybe, Status};

#[derive(Debug)]
struct DiskFull {
    free: u64,
}

impl fmt::Display for DiskFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk full ({} bytes free)", self.free)
    }
}

impl std::error::Error for DiskFull {}

fn save(size: u64, free: u64) -> Attempt<u64> {
    if size > free {
        Attempt::from_error(DiskFull { free })
    } else {
        Attempt::created(free - size)
    }
}

#[test]
fn test_error_object_survives_the_chain() {
    let attempt = save(100, 10).map(|left| left * 2).bind(|left| Attempt::success(left + 1));
    assert_eq!(attempt.status(), Status::Failure);

    let error = attempt.error().unwrap();
    assert_eq!(error.message(), "disk full (10 bytes free)");
    assert_eq!(error.downcast_ref::<DiskFull>().map(|d| d.free), Some(10));
}

#[test]
fn test_success_keeps_status_through_map() {
    let attempt = save(10, 100).map(|left| left / 2);
    assert_eq!(attempt, Attempt::created(45));
}

#[test]
fn test_identity_of_propagated_error() {
    let error = AttemptError::new("lost connection");
    let out = Attempt::<u8>::unavailable(error.clone())
        .map(u32::from)
        .bind(|n| Attempt::success(n.to_string()));
    assert!(out.error().unwrap().ptr_eq(&error));
    assert_eq!(out.status(), Status::Unavailable);
}

#[test]
fn test_unit_attempt() {
    let done: Attempt = Attempt::no_content(());
    assert!(done.is_success());
    let denied: Attempt = Attempt::forbidden("read only");
    assert_eq!(denied.to_string(), "Forbidden[read only]");
}

#[test]
fn test_ok_or_bridges_from_maybe() {
    let found = Maybe::some(5).ok_or("missing");
    assert_eq!(found.unwrap(), 5);

    let missing = Maybe::<i32>::none().ok_or("missing");
    assert_eq!(missing.status(), Status::NotFound);
    assert_eq!(missing.error().map(AttemptError::message), Some("missing"));
}

#[test]
fn test_sorting_with_compare_to() {
    let mut attempts = vec![
        Attempt::success(3),
        Attempt::<i32>::failure("a"),
        Attempt::success(1),
        Attempt::<i32>::conflict("b"),
    ];
    attempts.sort_by(|a, b| a.compare_to(b));

    assert!(attempts[0].is_failure());
    assert!(attempts[1].is_failure());
    assert_eq!(attempts[2].value(), Some(&1));
    assert_eq!(attempts[3].value(), Some(&3));
    assert_eq!(attempts[0].compare_to(&attempts[1]), Ordering::Equal);
}

#[test]
fn test_also_on_attempt_chain() {
    let mut seen = Vec::new();
    let out = save(1, 2)
        .also(|a| seen.push(a.status()))
        .map(|left| left + 1);
    assert_eq!(out.unwrap(), 2);
    assert_eq!(seen, vec![Status::Created]);
}

#[test]
fn test_serialized_shape() {
    let json = serde_json::to_value(save(100, 10)).unwrap();
    assert_eq!(json["status"], "Failure");
    assert_eq!(json["error"], "disk full (10 bytes free)");
    assert!(json.get("value").is_none());
}
