//! # adtkit
//!
//! Algebraic data types with uniform pattern matching.
//!
//! ## Overview
//!
//! - **Sum types**: [`Maybe`](control::Maybe), [`Either`](control::Either)
//!   and the persistent cons-list [`List`](persistent::List), each
//!   eliminated by supplying one handler per variant
//! - **Match combinators**: reusable eliminators built from handlers
//! - **Containers**: the eager [`Boxed`](control::Boxed) and the deferred
//!   [`LazyBox`](control::LazyBox)
//! - **Type Classes**: Functor, Applicative, Monad, Foldable over the types above
//! - **Function Composition**: `compose!`, `pipe!`, `curry2!`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `compose`: Function composition utilities
//! - `control`: `Maybe`, `Either`, `Boxed`, `LazyBox`
//! - `persistent`: `List`
//! - `matching`: Match combinators
//! - `serde`: Serialization support
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use adtkit::prelude::*;
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
//! let report = match_either(|error: String| error, |value: i32| format!("result is {value}"));
//! assert_eq!(report(divide_two_if_even(2)), "result is 1");
//! assert_eq!(report(divide_two_if_even(3)), "number is not even");
//! assert_eq!(report(divide_two_if_even(0)), "cannot divide by zero");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the types, traits and combinators of every enabled feature.
///
/// # Usage
///
/// ```rust
/// use adtkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "matching")]
    pub use crate::matching::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "matching")]
pub mod matching;
