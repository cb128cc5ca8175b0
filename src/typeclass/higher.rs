//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] works around this with a generic associated type, which
//! is what lets [`Functor`](super::Functor) and [`Monad`](super::Monad) talk
//! about "the same container holding a different type".
//!
//! # Example
//!
//! ```rust
//! use adtkit::control::Maybe;
//! use adtkit::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Maybe<i32> = Maybe::some(42);
//! let absent: Maybe<String> = empty_like(&present);
//! assert!(absent.is_none());
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a type constructor applied to some type `A`,
/// for example `Maybe<A>` or `Either<L, A>`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Either<L, A>` this is `Either<L, B>`: the error side is fixed.
    type WithType<B>: TypeConstructor<Inner = B>;
}
