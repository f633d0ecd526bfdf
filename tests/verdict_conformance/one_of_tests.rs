//! `OneOfN` unions used as closed return types.

use verdict::{ContractError, OneOf3, OneOf4};

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
struct NotFound;

#[derive(Debug, Clone, PartialEq)]
struct Forbidden {
    reason: String,
}

type Lookup = OneOf3<User, NotFound, Forbidden>;

fn lookup(id: u32) -> Lookup {
    match id {
        0 => OneOf3::T3(Forbidden {
            reason: "root".into(),
        }),
        1 => OneOf3::from_t1(User {
            name: "ada".into(),
        }),
        _ => OneOf3::from_t2(NotFound),
    }
}

fn describe(result: Lookup) -> String {
    result.match_with(
        |user| format!("user {}", user.name),
        |_| "no such user".to_string(),
        |f| format!("forbidden: {}", f.reason),
    )
}

#[test]
fn test_match_with_covers_every_slot() {
    assert_eq!(describe(lookup(1)), "user ada");
    assert_eq!(describe(lookup(2)), "no such user");
    assert_eq!(describe(lookup(0)), "forbidden: root");
}

#[test]
fn test_slot_accessors() {
    let found = lookup(1);
    assert!(found.is_t1());
    assert!(!found.is_t2());
    assert_eq!(found.as_t1().name, "ada");
    assert_eq!(found.index(), 1);

    let missing = lookup(9);
    assert_eq!(
        missing.try_as_t1().unwrap_err(),
        ContractError::WrongVariant {
            union: "OneOf3",
            expected: 1,
            actual: 2,
        }
    );
}

#[test]
#[should_panic(expected = "Wrong variant of OneOf3: expected T3, found T1")]
fn test_wrong_slot_panics() {
    lookup(1).as_t3();
}

#[test]
fn test_into_recovers_union() {
    let denied = lookup(0);
    let back = denied.into_t1().unwrap_err();
    assert_eq!(back.into_t3().map(|f| f.reason), Ok("root".to_string()));
}

#[test]
fn test_ordering_is_slot_then_value() {
    let mut values: Vec<OneOf4<u8, u8, u8, u8>> = vec![
        OneOf4::T4(0),
        OneOf4::T2(9),
        OneOf4::T2(1),
        OneOf4::T1(200),
    ];
    values.sort();
    assert_eq!(
        values,
        vec![OneOf4::T1(200), OneOf4::T2(1), OneOf4::T2(9), OneOf4::T4(0)]
    );
}
