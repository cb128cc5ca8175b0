//! Unit tests for the Maybe<T> type.
//!
//! Maybe is eliminated only through handlers, so most tests check which
//! handler ran and with what.

#![cfg(feature = "control")]

use adtkit::control::{Either, Maybe};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case(Maybe::some(0))]
#[case(Maybe::some(-1))]
#[case(Maybe::some(i32::MAX))]
fn some_is_some_for_any_value(#[case] value: Maybe<i32>) {
    assert!(value.is_some());
    assert!(!value.is_none());
}

#[rstest]
fn none_is_none() {
    let value: Maybe<String> = Maybe::none();
    assert!(value.is_none());
    assert_eq!(value, Maybe::None);
}

#[rstest]
fn from_nullable_keeps_falsy_present_values() {
    assert_eq!(Maybe::from_nullable(Some("")), Maybe::some(""));
    assert_eq!(Maybe::from_nullable(Some(false)), Maybe::some(false));
    assert_eq!(Maybe::<u8>::from_nullable(None), Maybe::none());
}

// =============================================================================
// Elimination
// =============================================================================

#[rstest]
fn match_with_calls_exactly_one_handler() {
    let none_calls = Cell::new(0);
    let some_calls = Cell::new(0);
    let eliminate = |maybe: Maybe<i32>| {
        maybe.match_with(
            || none_calls.set(none_calls.get() + 1),
            |_| some_calls.set(some_calls.get() + 1),
        );
    };

    eliminate(Maybe::some(1));
    eliminate(Maybe::none());
    eliminate(Maybe::some(2));

    assert_eq!(none_calls.get(), 1);
    assert_eq!(some_calls.get(), 2);
}

#[rstest]
#[case(Maybe::some(20), "num is 20")]
#[case(Maybe::none(), "no value")]
fn fold_renders_both_cases(#[case] value: Maybe<i32>, #[case] expected: &str) {
    let rendered = value.fold(|| "no value".to_string(), |n| format!("num is {n}"));
    assert_eq!(rendered, expected);
}

#[rstest]
fn get_or_else_fallback_is_lazy() {
    let fallback_calls = Cell::new(0);
    let value = Maybe::some(3).get_or_else(|| {
        fallback_calls.set(fallback_calls.get() + 1);
        0
    });
    assert_eq!(value, 3);
    assert_eq!(fallback_calls.get(), 0);
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_on_none_never_calls_function() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::none().map(|n| {
        calls.set(calls.get() + 1);
        n * 2
    });
    assert!(result.is_none());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn chain_follows_nested_nullable_fields() {
    struct Address {
        street: Option<Street>,
    }
    struct Street {
        name: Option<String>,
    }
    struct User {
        address: Option<Address>,
    }

    let street_name = |user: User| {
        Maybe::from_nullable(user.address)
            .chain(|address| Maybe::from_nullable(address.street))
            .chain(|street| Maybe::from_nullable(street.name))
            .fold(|| "no street".to_string(), |name| name)
    };

    let full = User {
        address: Some(Address {
            street: Some(Street {
                name: Some("Elm".to_string()),
            }),
        }),
    };
    let missing_name = User {
        address: Some(Address {
            street: Some(Street { name: None }),
        }),
    };
    let missing_address = User { address: None };

    assert_eq!(street_name(full), "Elm");
    assert_eq!(street_name(missing_name), "no street");
    assert_eq!(street_name(missing_address), "no street");
}

#[rstest]
fn to_either_uses_message_only_for_none() {
    assert_eq!(Maybe::some(1).to_either(|| "missing"), Either::right(1));
    assert_eq!(Maybe::<i32>::none().to_either(|| "missing"), Either::left("missing"));
}

#[rstest]
fn flatten_removes_one_level() {
    assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
    assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::none());
    assert_eq!(Maybe::<Maybe<i32>>::none().flatten(), Maybe::none());
}

#[rstest]
fn default_is_none() {
    assert_eq!(Maybe::<i32>::default(), Maybe::none());
}
