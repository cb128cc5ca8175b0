//! Maybe type - presence or absence of a value.
//!
//! `Maybe<T>` is a closed sum type with two variants, `None` and `Some(T)`.
//! It replaces "null checks" with a value that must be eliminated through
//! [`match_with`](Maybe::match_with) or [`fold`](Maybe::fold), supplying a
//! handler for both cases.
//!
//! The name avoids a clash with `std::option::Option`, which the standard
//! prelude already owns. Values coming from code that uses `Option` enter
//! through [`Maybe::from_nullable`], the single place where absence is
//! decided.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::Maybe;
//!
//! fn divide_two(divisor: f64) -> Maybe<f64> {
//!     if divisor == 0.0 { Maybe::none() } else { Maybe::some(2.0 / divisor) }
//! }
//!
//! let render = |divisor| {
//!     divide_two(divisor)
//!         .map(|quotient| quotient + 1.0)
//!         .match_with(|| "no value".to_string(), |value| format!("value is {value}"))
//! };
//!
//! assert_eq!(render(8.0), "value is 1.25");
//! assert_eq!(render(0.0), "no value");
//! ```

use std::fmt;

use super::either::Either;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// An optional value: either `Some(value)` or `None`.
///
/// Construction never inspects the wrapped value, so `Maybe::some(0)`,
/// `Maybe::some(false)` and `Maybe::some("")` are all `Some`.
///
/// # Laws
///
/// - **Identity**: `maybe.map(|x| x) == maybe`
/// - **Composition**: `maybe.map(f).map(g) == maybe.map(|x| g(f(x)))`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

impl<T> Maybe<T> {
    /// Returns the empty instance.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Wraps `value` without inspecting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Maybe;
    ///
    /// assert!(Maybe::some(false).is_some());
    /// assert!(Maybe::some(0).is_some());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Decides between `None` and `Some` from a possibly absent source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Maybe;
    ///
    /// let street: Option<&str> = None;
    /// assert_eq!(Maybe::from_nullable(street), Maybe::none());
    /// assert_eq!(Maybe::from_nullable(Some(5)), Maybe::some(5));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Returns `true` for `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` for `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::None => Maybe::None,
            Self::Some(value) => Maybe::Some(value),
        }
    }

    /// Applies `function` to a present value; `None` stays `None`.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::None => Maybe::None,
            Self::Some(value) => Maybe::Some(function(value)),
        }
    }

    /// Sequences a computation that may itself produce no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Maybe;
    ///
    /// struct Address { street: Option<String> }
    ///
    /// let address = Address { street: None };
    /// let street = Maybe::some(address)
    ///     .chain(|address| Maybe::from_nullable(address.street))
    ///     .fold(|| "no street".to_string(), |name| name);
    /// assert_eq!(street, "no street");
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::None => Maybe::None,
            Self::Some(value) => function(value),
        }
    }

    /// Keeps a present value only when `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Eliminates the value by applying exactly one of two handlers.
    ///
    /// `on_none` takes no argument; `on_some` receives the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Maybe;
    ///
    /// let render = |maybe: Maybe<i32>| maybe.match_with(|| "no value".to_string(), |n| format!("num is {n}"));
    /// assert_eq!(render(Maybe::some(20)), "num is 20");
    /// assert_eq!(render(Maybe::none()), "no value");
    /// ```
    #[inline]
    pub fn match_with<R, N, S>(self, on_none: N, on_some: S) -> R
    where
        N: FnOnce() -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Self::None => on_none(),
            Self::Some(value) => on_some(value),
        }
    }

    /// Alias for [`match_with`](Self::match_with).
    #[inline]
    pub fn fold<R, N, S>(self, on_none: N, on_some: S) -> R
    where
        N: FnOnce() -> R,
        S: FnOnce(T) -> R,
    {
        self.match_with(on_none, on_some)
    }

    /// Returns the value, or the result of `fallback` when absent.
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.match_with(fallback, |value| value)
    }

    /// Returns `self` when present, otherwise the alternative.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::None => alternative(),
            present @ Self::Some(_) => present,
        }
    }

    /// Turns absence into a `Left` error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::{Either, Maybe};
    ///
    /// let missing: Maybe<i32> = Maybe::none();
    /// assert_eq!(missing.to_either(|| "Property name not found"), Either::left("Property name not found"));
    /// ```
    #[inline]
    pub fn to_either<L, F>(self, on_none: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::None => Either::Left(on_none()),
            Self::Some(value) => Either::Right(value),
        }
    }

    /// Converts into a standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.match_with(|| None, Some)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.chain(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(formatter, "None"),
            Self::Some(value) => write!(formatter, "Some({value})"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Some(first), Maybe::Some(second)) => Maybe::Some(function(first, second)),
            _ => Maybe::None,
        }
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.chain(function)
    }
}
