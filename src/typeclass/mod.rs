//! Type class traits shared by every container in the crate.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: mapping over a container holding at most one value
//! - [`FunctorMut`]: mapping over a container with many elements
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations
//! - [`Foldable`]: collapsing a structure to a summary value
//!
//! The inherent methods on each type (`map`, `chain`, `fold`) are the primary
//! API. The traits state the functor and monad laws once for every type.
//!
//! `LazyBox` has no instances: its steps are `Fn + 'static` closures re-run on
//! every fold, while the signatures below take `FnOnce`.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::{Either, Maybe};
//! use adtkit::typeclass::{Functor, Monad};
//!
//! fn increment_all<F: Functor<Inner = i32>>(container: F) -> F::WithType<i32> {
//!     container.fmap(|n| n + 1)
//! }
//!
//! assert_eq!(increment_all(Maybe::some(1)), Maybe::some(2));
//! assert_eq!(increment_all(Either::<String, i32>::right(1)), Either::right(2));
//!
//! let chained = Maybe::some(10).flat_map(|n| if n > 5 { Maybe::some(n) } else { Maybe::none() });
//! assert_eq!(chained, Maybe::some(10));
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::Monad;
