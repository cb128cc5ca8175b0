//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape: a `Maybe::None` stays `None`, a `Left` stays `Left`, a list keeps its
//! length.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::Maybe;
//! use adtkit::typeclass::Functor;
//!
//! let present = Maybe::some(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Maybe::some("5".to_string()));
//!
//! let absent: Maybe<i32> = Maybe::none();
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::none());
//! ```

use super::higher::TypeConstructor;

/// A type class for containers holding at most one value.
///
/// The mapping function is `FnOnce` because it runs at most once. Containers
/// with many elements implement [`FunctorMut`] instead.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Either;
    /// use adtkit::typeclass::Functor;
    ///
    /// let parsed: Either<String, i32> = Either::right(20);
    /// assert_eq!(parsed.fmap(|n| n + 1), Either::right(21));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the original untouched.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Maybe;
    /// use adtkit::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::some(1).replace("x"), Maybe::some("x"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

/// A functor over containers with any number of elements.
///
/// # Examples
///
/// ```rust
/// use adtkit::persistent::List;
/// use adtkit::typeclass::FunctorMut;
///
/// let numbers: List<i32> = (1..=3).collect();
/// let doubled = numbers.fmap_mut(|n| n * 2);
/// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies a mutable function to each element.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a mutable function to references of each element.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}
