//! Reusable pattern-matching combinators.
//!
//! Each combinator takes one handler per variant of an algebraic data type
//! and returns a function that eliminates values of that type. The returned
//! function can be stored and applied any number of times.
//!
//! | Type        | Homogeneous     | Heterogeneous (`Either<B, C>`) |
//! |-------------|-----------------|--------------------------------|
//! | [`Maybe`]   | [`match_maybe`] | [`match_maybe_w`]              |
//! | [`Either`]  | [`match_either`]| [`match_either_w`]             |
//! | [`List`]    | [`match_list`]  | [`match_list_w`]               |
//!
//! The combinators only look at the discriminant; everything else happens in
//! the handlers.
//!
//! # Totality
//!
//! Every handler is a required argument, so forgetting a case does not
//! compile:
//!
//! ```compile_fail
//! use adtkit::control::Maybe;
//! use adtkit::matching::match_maybe;
//!
//! let render = match_maybe(|value: i32| format!("num is {value}"));
//! render(Maybe::some(20));
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::Maybe;
//! use adtkit::matching::match_maybe;
//!
//! let render = match_maybe(|| "no value".to_string(), |value: i32| format!("num is {value}"));
//! assert_eq!(render(Maybe::some(20)), "num is 20");
//! assert_eq!(render(Maybe::none()), "no value");
//! ```
//!
//! When the two handlers produce different types, the `_w` variants keep
//! both by returning an [`Either`]:
//!
//! ```rust
//! use adtkit::control::Either;
//! use adtkit::matching::match_either_w;
//!
//! let classify = match_either_w(|error: String| error.len(), |value: f64| value > 0.0);
//! assert_eq!(classify(Either::left("bad input".to_string())), Either::left(9));
//! assert_eq!(classify(Either::right(2.5)), Either::right(true));
//! ```

use crate::control::{Either, Maybe};
use crate::persistent::List;

/// Builds an eliminator for [`Maybe`].
///
/// `on_none` runs for `None`, `on_some` receives the value of `Some`.
pub fn match_maybe<T, R, N, S>(on_none: N, on_some: S) -> impl Fn(Maybe<T>) -> R
where
    N: Fn() -> R,
    S: Fn(T) -> R,
{
    move |maybe| maybe.match_with(&on_none, &on_some)
}

/// Like [`match_maybe`], but the handlers may return different types.
///
/// The `None` result is placed in `Left`, the `Some` result in `Right`.
pub fn match_maybe_w<T, B, C, N, S>(on_none: N, on_some: S) -> impl Fn(Maybe<T>) -> Either<B, C>
where
    N: Fn() -> B,
    S: Fn(T) -> C,
{
    move |maybe| {
        maybe.match_with(
            || Either::Left(on_none()),
            |value| Either::Right(on_some(value)),
        )
    }
}

/// Builds an eliminator for [`Either`].
///
/// # Examples
///
/// ```rust
/// use adtkit::control::Either;
/// use adtkit::matching::match_either;
///
/// let report = match_either(|error: &str| format!("error: {error}"), |value: i32| format!("ok: {value}"));
/// assert_eq!(report(Either::left("boom")), "error: boom");
/// assert_eq!(report(Either::right(3)), "ok: 3");
/// ```
pub fn match_either<L, R, T, F, G>(on_left: F, on_right: G) -> impl Fn(Either<L, R>) -> T
where
    F: Fn(L) -> T,
    G: Fn(R) -> T,
{
    move |either| either.fold(&on_left, &on_right)
}

/// Like [`match_either`], but the handlers may return different types.
pub fn match_either_w<L, R, B, C, F, G>(on_left: F, on_right: G) -> impl Fn(Either<L, R>) -> Either<B, C>
where
    F: Fn(L) -> B,
    G: Fn(R) -> C,
{
    move |either| either.bimap(&on_left, &on_right)
}

/// Builds an eliminator for [`List`].
///
/// `on_cons` receives the head and the shared tail. The returned function
/// borrows the list it eliminates.
///
/// # Examples
///
/// ```rust
/// use adtkit::matching::match_list;
/// use adtkit::persistent::List;
///
/// let first = match_list(|| "empty".to_string(), |head: &i32, _| head.to_string());
/// assert_eq!(first(&List::cons(7, List::nil())), "7");
/// assert_eq!(first(&List::nil()), "empty");
/// ```
pub fn match_list<T, R, N, C>(on_nil: N, on_cons: C) -> impl Fn(&List<T>) -> R
where
    N: Fn() -> R,
    C: Fn(&T, List<T>) -> R,
{
    move |list: &List<T>| list.match_with(&on_nil, &on_cons)
}

/// Like [`match_list`], but the handlers may return different types.
pub fn match_list_w<T, B, C, N, K>(on_nil: N, on_cons: K) -> impl Fn(&List<T>) -> Either<B, C>
where
    N: Fn() -> B,
    K: Fn(&T, List<T>) -> C,
{
    move |list: &List<T>| {
        list.match_with(
            || Either::Left(on_nil()),
            |head, tail| Either::Right(on_cons(head, tail)),
        )
    }
}
