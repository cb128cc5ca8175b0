//! Either type - a computation that failed with `L` or succeeded with `R`.
//!
//! `Either<L, R>` is right-biased: [`map`](Either::map) and
//! [`chain`](Either::chain) act on the `Right` payload and pass a `Left`
//! through untouched. A pipeline therefore stops doing work at the first
//! failure and carries that failure, as inert data, to the final
//! [`fold`](Either::fold).
//!
//! Foreign failures enter the pipeline at exactly two points:
//!
//! - [`Either::try_catch`] for functions reporting errors through `Result`
//! - [`Either::catch_unwind`] for functions that may panic
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::Either;
//!
//! fn divide_two_if_even(number: i32) -> Either<String, i32> {
//!     if number == 0 {
//!         Either::left("cannot divide by zero".to_string())
//!     } else if number % 2 != 0 {
//!         Either::left("number is not even".to_string())
//!     } else {
//!         Either::right(2 / number)
//!     }
//! }
//!
//! let describe = |number| {
//!     divide_two_if_even(number)
//!         .map(|quotient| quotient + 1)
//!         .fold(|error| format!("failed: {error}"), |value| format!("ok: {value}"))
//! };
//!
//! assert_eq!(describe(2), "ok: 2");
//! assert_eq!(describe(0), "failed: cannot divide by zero");
//! assert_eq!(describe(3), "failed: number is not even");
//! ```

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::error::PanicError;
use super::maybe::Maybe;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either a failure `Left(L)` or a success `Right(R)`.
///
/// Once constructed, the variant and its payload never change; every
/// combinator returns a new `Either`.
///
/// # Type Parameters
///
/// * `L` - The error type
/// * `R` - The success type
///
/// # Laws
///
/// - **Identity**: `either.map(|x| x) == either`
/// - **Composition**: `either.map(f).map(g) == either.map(|x| g(f(x)))`
/// - **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a `Left` holding `error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Either;
    ///
    /// let failure: Either<&str, i32> = Either::left("missing");
    /// assert!(failure.is_left());
    /// ```
    #[inline]
    pub const fn left(error: L) -> Self {
        Self::Left(error)
    }

    /// Creates a `Right` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Either;
    ///
    /// let success: Either<&str, i32> = Either::right(42);
    /// assert!(success.is_right());
    /// ```
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Runs a fallible computation and captures its outcome.
    ///
    /// `Ok(value)` becomes `Right(value)` and `Err(error)` becomes
    /// `Left(error)`. The computation runs immediately, exactly once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Either;
    ///
    /// let parsed = Either::try_catch(|| "42".parse::<i32>());
    /// assert_eq!(parsed, Either::right(42));
    ///
    /// let message = Either::try_catch(|| "forty-two".parse::<i32>())
    ///     .fold(|_| "parse failed", |_| "parsed");
    /// assert_eq!(message, "parse failed");
    /// ```
    #[inline]
    pub fn try_catch<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<R, L>,
    {
        computation().into()
    }

    /// Builds an `Either` from a possibly absent value.
    ///
    /// A present value becomes `Right`; absence becomes `Left(on_none())`.
    /// `on_none` is only called for an absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Either;
    ///
    /// let user: Option<&str> = None;
    /// let page = Either::from_nullable(user, || "login")
    ///     .fold(|login| login.to_string(), |name| format!("welcome {name}"));
    /// assert_eq!(page, "login");
    /// ```
    #[inline]
    pub fn from_nullable<F>(value: Option<R>, on_none: F) -> Self
    where
        F: FnOnce() -> L,
    {
        match value {
            Some(value) => Self::Right(value),
            None => Self::Left(on_none()),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the left value, if any, consuming the either.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, if any, consuming the either.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts `&Either<L, R>` into `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Converts into a `Maybe`, discarding the error.
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::None,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a `Right` payload.
    ///
    /// A `Left` is returned unchanged and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Either;
    ///
    /// let success: Either<String, i32> = Either::right(20);
    /// assert_eq!(success.map(|n| n + 1), Either::right(21));
    ///
    /// let failure: Either<String, i32> = Either::left("bad".to_string());
    /// assert_eq!(failure.map(|n| n + 1), Either::left("bad".to_string()));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies `function` to a `Left` payload, leaving a `Right` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::left(404);
    /// assert_eq!(failure.map_left(|code| format!("status {code}")), Either::left("status 404".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(function(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on the variant, keeping the
    /// variant.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(error) => Either::Left(left_function(error)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Sequences a dependent computation that may itself fail.
    ///
    /// On `Right(value)` returns `function(value)` as is; on `Left` returns
    /// the same `Left` without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Either;
    ///
    /// fn non_empty(text: &str) -> Either<&'static str, &str> {
    ///     if text.is_empty() { Either::left("empty") } else { Either::right(text) }
    /// }
    ///
    /// let result = Either::<&str, &str>::right("abc").chain(non_empty).map(str::len);
    /// assert_eq!(result, Either::right(3));
    ///
    /// let result = Either::<&str, &str>::right("").chain(non_empty).map(str::len);
    /// assert_eq!(result, Either::left("empty"));
    /// ```
    #[inline]
    pub fn chain<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the either by applying exactly one of two handlers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::left(42);
    /// assert_eq!(failure.fold(|code| code.to_string(), |text| text), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => on_right(value),
        }
    }

    /// Alias for [`fold`](Self::fold), reading as pattern matching.
    #[inline]
    pub fn match_with<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.fold(on_left, on_right)
    }

    /// Returns the right value, or computes a fallback from the left one.
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(error) => fallback(error),
            Self::Right(value) => value,
        }
    }

    /// Swaps the variants: `Left(x)` becomes `Right(x)` and vice versa.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(error) => Either::Right(error),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<R> Either<PanicError, R> {
    /// Runs a computation that may panic and captures the panic as a `Left`.
    ///
    /// This is the bridge for failures that do not go through `Result`.
    /// The computation runs immediately, exactly once. The panic hook still
    /// runs, so the panic message is printed as usual.
    ///
    /// Unwind safety is asserted on behalf of the caller: if the computation
    /// mutates shared state before panicking, that state is left as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::{Either, PanicError};
    ///
    /// let outcome: Either<PanicError, i32> = Either::catch_unwind(|| 21 * 2);
    /// assert_eq!(outcome, Either::right(42));
    /// ```
    pub fn catch_unwind<F>(computation: F) -> Self
    where
        F: FnOnce() -> R,
    {
        match panic::catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Either::Right(value),
            Err(payload) => Either::Left(PanicError::from_payload(payload.as_ref())),
        }
    }
}

impl<T> Either<T, T> {
    /// Extracts the payload when both sides share a type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Either;
    ///
    /// let failure: Either<&str, &str> = Either::left("no street");
    /// assert_eq!(failure.into_inner(), "no street");
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.chain(|inner| inner)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => write!(formatter, "Left({error})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
            (Self::Right(first), Either::Right(second)) => Either::Right(function(first, second)),
        }
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.chain(function)
    }
}
