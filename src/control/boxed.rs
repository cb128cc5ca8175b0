//! Boxed - the eager identity container.
//!
//! `Boxed<T>` wraps a single value so that a sequence of transformations can be
//! written as one linear expression instead of a series of named temporaries.
//! Every [`map`](Boxed::map) runs its function immediately; [`fold`](Boxed::fold)
//! applies a last function and hands back the raw result.
//!
//! Compare with [`LazyBox`](super::LazyBox), which defers every step until it
//! is folded.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::Boxed;
//!
//! fn money_to_float(text: &str) -> Boxed<f64> {
//!     Boxed::new(text)
//!         .map(|text| text.replace('$', ""))
//!         .map(|text| text.parse::<f64>().unwrap_or(0.0))
//! }
//!
//! fn percent_to_float(text: &str) -> Boxed<f64> {
//!     Boxed::new(text)
//!         .map(|text| text.replace('%', ""))
//!         .map(|text| text.parse::<f64>().unwrap_or(0.0))
//!         .map(|number| number * 0.01)
//! }
//!
//! // Both values in scope without nesting one fold inside another.
//! let discounted = money_to_float("$100")
//!     .map2(percent_to_float("25%"), |cost, discount| cost - cost * discount)
//!     .fold(|total| total);
//! assert_eq!(discounted, 75.0);
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// An eager container around a single value.
///
/// # Laws
///
/// - **Identity**: `boxed.map(|x| x).fold(f) == boxed.fold(f)`
/// - **Composition**: `boxed.map(f).map(g) == boxed.map(|x| g(f(x)))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Boxed<T>(T);

impl<T> Boxed<T> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Alias for [`new`](Self::new).
    #[inline]
    pub const fn of(value: T) -> Self {
        Self(value)
    }

    /// Applies `function` now and wraps the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Boxed;
    ///
    /// let result = Boxed::new(5).map(|x| x * 2).map(|x| x + 3).fold(|x| x);
    /// assert_eq!(result, 13);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Boxed<U>
    where
        F: FnOnce(T) -> U,
    {
        Boxed(function(self.0))
    }

    /// Applies `function` to the value and returns its raw result.
    #[inline]
    pub fn fold<U, F>(self, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        function(self.0)
    }

    /// Continues with another box computed from the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Boxed;
    ///
    /// let cost = Boxed::new(100.0_f64);
    /// let total = cost
    ///     .chain(|cost| Boxed::new(0.25_f64).map(move |discount| cost - cost * discount))
    ///     .into_inner();
    /// assert_eq!(total, 75.0);
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Boxed<U>
    where
        F: FnOnce(T) -> Boxed<U>,
    {
        function(self.0)
    }

    /// Pairs this value with the value of another box.
    #[inline]
    pub fn zip<U>(self, other: Boxed<U>) -> Boxed<(T, U)> {
        Boxed((self.0, other.0))
    }

    /// Combines this value with the value of another box.
    #[inline]
    pub fn map2<U, V, F>(self, other: Boxed<U>, function: F) -> Boxed<V>
    where
        F: FnOnce(T, U) -> V,
    {
        Boxed(function(self.0, other.0))
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Returns a reference to the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for Boxed<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Boxed({})", self.0)
    }
}

impl<T> From<T> for Boxed<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Boxed<T> {
    type Inner = T;
    type WithType<B> = Boxed<B>;
}

impl<T> Functor for Boxed<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Boxed<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Boxed<B>
    where
        F: FnOnce(&T) -> B,
    {
        Boxed(function(&self.0))
    }
}

impl<T> Applicative for Boxed<T> {
    #[inline]
    fn pure<B>(value: B) -> Boxed<B> {
        Boxed(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Boxed<B>, function: F) -> Boxed<C>
    where
        F: FnOnce(T, B) -> C,
    {
        Boxed(function(self.0, other.0))
    }
}

impl<T> Monad for Boxed<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Boxed<B>
    where
        F: FnOnce(T) -> Boxed<B>,
    {
        self.chain(function)
    }
}
