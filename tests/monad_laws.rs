//! Property-based tests for the Monad laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

#![cfg(feature = "control")]

use adtkit::control::{Boxed, Either, Maybe};
use adtkit::typeclass::{Applicative, Monad};
use proptest::prelude::*;

fn halve_even(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
}

fn nonnegative(n: i32) -> Maybe<i32> {
    if n >= 0 { Maybe::some(n) } else { Maybe::none() }
}

fn checked_double(n: i32) -> Either<String, i32> {
    n.checked_mul(2).map_or_else(|| Either::left(format!("{n} overflows")), Either::right)
}

fn checked_increment(n: i32) -> Either<String, i32> {
    n.checked_add(1).map_or_else(|| Either::left(format!("{n} overflows")), Either::right)
}

proptest! {
    // =========================================================================
    // Maybe
    // =========================================================================

    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Maybe<i32>>::pure(value).flat_map(halve_even), halve_even(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in any::<Option<i32>>()) {
        let maybe = Maybe::from(value);
        prop_assert_eq!(maybe.flat_map(Maybe::some), maybe);
    }

    #[test]
    fn prop_maybe_associativity(value in any::<Option<i32>>()) {
        let maybe = Maybe::from(value);
        let left = maybe.flat_map(halve_even).flat_map(nonnegative);
        let right = maybe.flat_map(|x| halve_even(x).flat_map(nonnegative));
        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // Either
    // =========================================================================

    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Either<String, i32>>::pure(value).flat_map(checked_double), checked_double(value));
    }

    #[test]
    fn prop_either_right_identity(value in any::<Result<i32, String>>()) {
        let either = Either::from(value);
        prop_assert_eq!(either.clone().flat_map(Either::right), either);
    }

    #[test]
    fn prop_either_associativity(value in any::<i32>()) {
        let either: Either<String, i32> = Either::right(value);
        let left = either.clone().flat_map(checked_double).flat_map(checked_increment);
        let right = either.flat_map(|x| checked_double(x).flat_map(checked_increment));
        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // Boxed
    // =========================================================================

    #[test]
    fn prop_boxed_associativity(value in any::<i64>()) {
        let f = |n: i64| Boxed::new(n.wrapping_sub(7));
        let g = |n: i64| Boxed::new(n.to_string());
        let left = Boxed::new(value).flat_map(f).flat_map(g);
        let right = Boxed::new(value).flat_map(|x| f(x).flat_map(g));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_boxed_map2_matches_zip(first in any::<i32>(), second in any::<i32>()) {
        let combined = Applicative::map2(Boxed::new(first), Boxed::new(second), i32::wrapping_add);
        let zipped = Boxed::new(first).zip(Boxed::new(second)).map(|(a, b)| a.wrapping_add(b));
        prop_assert_eq!(combined, zipped);
    }
}
