//! Monad type class - sequencing dependent computations.
//!
//! `flat_map` runs a function that itself returns a wrapped value and
//! flattens one level of wrapping. For `Either` this is the short-circuiting
//! `chain`: once a `Left` appears no later step runs.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::Either;
//! use adtkit::typeclass::Monad;
//!
//! fn halve(n: i32) -> Either<String, i32> {
//!     if n % 2 == 0 {
//!         Either::right(n / 2)
//!     } else {
//!         Either::left(format!("{n} is odd"))
//!     }
//! }
//!
//! assert_eq!(Either::right(8).flat_map(halve).flat_map(halve), Either::right(2));
//! assert_eq!(
//!     Either::right(6).flat_map(halve).flat_map(halve),
//!     Either::left("3 is odd".to_string())
//! );
//! ```

use super::applicative::Applicative;

/// A type class for sequencing computations where each step depends on the
/// result of the previous one.
pub trait Monad: Applicative {
    /// Applies a function returning a wrapped value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
