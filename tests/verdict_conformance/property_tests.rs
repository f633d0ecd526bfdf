//! Property-based checks of the wrapper laws.

use proptest::prelude::*;
use verdict::{Attempt, AttemptError, Maybe, OneOf2, Outcome, OutcomeError, Status};

fn failed_status() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::FAILED.to_vec())
}

fn outcome_error() -> impl Strategy<Value = OutcomeError> {
    ("[A-Z_]{1,12}", "[a-z ]{0,24}").prop_map(|(code, message)| OutcomeError::new(code, message))
}

proptest! {
    #[test]
    fn prop_failed_outcome_keeps_status_and_errors(
        status in failed_status(),
        errors in prop::collection::vec(outcome_error(), 1..5),
    ) {
        let outcome = Outcome::<i64>::with_errors(status, errors.clone()).unwrap();
        prop_assert_eq!(outcome.status(), status);
        prop_assert_eq!(outcome.errors(), errors.as_slice());
        prop_assert!(outcome.value().is_none());
    }

    #[test]
    fn prop_failed_outcome_rejects_no_errors(status in failed_status()) {
        prop_assert!(Outcome::<i64>::with_errors(status, Vec::new()).is_err());
    }

    #[test]
    fn prop_outcome_map_then_unwrap(x in any::<i32>()) {
        let f = |v: i32| i64::from(v) * 3;
        prop_assert_eq!(Outcome::success(x).map(f).unwrap(), f(x));
    }

    #[test]
    fn prop_outcome_error_text_round_trip(code in any::<String>(), message in any::<String>()) {
        let error = OutcomeError::new(code, message);
        let parsed: OutcomeError = error.to_string().parse().unwrap();
        prop_assert_eq!(parsed.code(), error.code());
        prop_assert_eq!(parsed.message(), error.message());
    }

    #[test]
    fn prop_outcome_json_round_trip(
        status in failed_status(),
        errors in prop::collection::vec(outcome_error(), 1..4),
    ) {
        let outcome = Outcome::<String>::with_errors(status, errors).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: Outcome<String> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, outcome);
    }

    #[test]
    fn prop_maybe_map_law(x in any::<i16>()) {
        let f = |v: i16| i32::from(v) - 1;
        prop_assert_eq!(Maybe::some(x).map(f).unwrap(), f(x));
        prop_assert_eq!(Maybe::<i16>::none().map(f), Maybe::none());
    }

    #[test]
    fn prop_attempt_map_preserves_error(message in "[a-z]{1,16}", x in any::<u8>()) {
        let error = AttemptError::new(message);
        let failed = Attempt::<u8>::failure(error.clone()).map(u16::from);
        prop_assert!(failed.error().unwrap().ptr_eq(&error));

        prop_assert_eq!(Attempt::success(x).map(u16::from).unwrap(), u16::from(x));
    }

    #[test]
    fn prop_one_of2_dispatch(left in any::<bool>(), n in any::<i32>()) {
        let value: OneOf2<i32, String> = if left {
            OneOf2::from_t1(n)
        } else {
            OneOf2::from_t2(n.to_string())
        };
        prop_assert_eq!(value.is_t1(), left);
        prop_assert_eq!(value.is_t2(), !left);
        let slot = value.match_with(|_| 1usize, |_| 2usize);
        prop_assert_eq!(slot, if left { 1 } else { 2 });
    }
}
