//! Applicative type class - lifting values and combining independent contexts.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value, and
//! `map2`, which combines two containers that do not depend on each other.
//! `map2` is how two independent `Boxed` pipelines meet without nesting one
//! `fold` inside another.
//!
//! # Laws
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))
//! fa.map2(pure(()), |a, _| a) == fa
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::Boxed;
//! use adtkit::typeclass::Applicative;
//!
//! let cost = Boxed::new(100.0_f64);
//! let discount = Boxed::new(0.25_f64);
//! let total = Applicative::map2(cost, discount, |cost, discount| cost - cost * discount);
//! assert_eq!(total.into_inner(), 75.0);
//! ```

use super::functor::Functor;

/// A type class for functors that can lift values and combine two contexts.
pub trait Applicative: Functor {
    /// Lifts a value into the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Maybe;
    /// use adtkit::typeclass::Applicative;
    ///
    /// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(lifted, Maybe::some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    ///
    /// Short-circuiting contexts (`Maybe::None`, `Either::Left`) never call
    /// `function`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the values of two contexts.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}
