//! Value containers and the sum types built on them.
//!
//! - [`Maybe`]: presence or absence of a value
//! - [`Either`]: failure (`Left`) or success (`Right`)
//! - [`Boxed`]: eager identity container, every `map` runs immediately
//! - [`LazyBox`]: deferred pipeline, nothing runs until `fold`
//! - [`PanicError`]: a panic captured by [`Either::catch_unwind`]
//!
//! # Examples
//!
//! ## Short-circuiting failure
//!
//! ```rust
//! use adtkit::control::Either;
//!
//! let total = Either::try_catch(|| "12".parse::<i32>())
//!     .map(|n| n * 2)
//!     .chain(|n| if n > 100 { Either::right(n) } else { Either::right(n + 1) })
//!     .fold(|_| -1, |n| n);
//! assert_eq!(total, 25);
//! ```
//!
//! ## Eager vs lazy
//!
//! ```rust
//! use adtkit::control::{Boxed, LazyBox};
//!
//! let eager = Boxed::new(" 64 ").map(str::trim).map(str::len).fold(|n| n);
//! let lazy = LazyBox::new(|| " 64 ").map(str::trim).map(str::len);
//! assert_eq!(eager, lazy.fold(|n| n));
//! ```

mod boxed;
mod either;
mod error;
mod lazy_box;
mod maybe;

pub use boxed::Boxed;
pub use either::Either;
pub use error::PanicError;
pub use lazy_box::LazyBox;
pub use maybe::Maybe;
