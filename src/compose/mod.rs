//! Function composition helpers.
//!
//! Small building blocks for writing the pipelines that feed [`Boxed`],
//! [`LazyBox`], [`Maybe`] and [`Either`] without naming every intermediate
//! step.
//!
//! - [`compose!`]: right-to-left composition, `compose!(f, g)(x) == f(g(x))`
//! - [`pipe!`]: left-to-right application, `pipe!(x, f, g) == g(f(x))`
//! - [`curry2!`]: turns `f(a, b)` into `f(a)(b)`
//! - [`identity`], [`constant`], [`flip`]
//!
//! [`Boxed`]: crate::control::Boxed
//! [`LazyBox`]: crate::control::LazyBox
//! [`Maybe`]: crate::control::Maybe
//! [`Either`]: crate::control::Either
//!
//! # Examples
//!
//! ```
//! use adtkit::{compose, curry2, pipe};
//!
//! fn strip_currency(text: &str) -> String { text.replace('$', "") }
//! fn parse_amount(text: String) -> f64 { text.parse().unwrap_or(0.0) }
//! fn discount(rate: f64, amount: f64) -> f64 { amount - amount * rate }
//!
//! let money_to_float = compose!(parse_amount, strip_currency);
//! assert_eq!(money_to_float("$100"), 100.0);
//!
//! let quarter_off = curry2!(discount)(0.25);
//! assert_eq!(pipe!("$100", money_to_float, quarter_off), 75.0);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Flip**: `flip(flip(f)) == f`

mod compose_macro;
mod curry_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity};

pub use crate::compose;
pub use crate::curry2;
pub use crate::pipe;
