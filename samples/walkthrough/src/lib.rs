//! # adtkit walkthrough
//!
//! Small business examples rewritten on top of `adtkit`.
//!
//! ## Module Structure
//!
//! - `pricing`: money and percent parsing with `Boxed`
//! - `account`: nested optional user fields with `Maybe` and `Either`
//! - `json`: property lookup in untrusted JSON with `Either::try_catch`
//! - `division`: branching arithmetic with `Either`
//! - `temperatures`: chart coordinates from city records with `List`
//! - `trimming`: a deferred text pipeline with `LazyBox`
//! - `scenario`: the runner used by the `walkthrough` binary

#![forbid(unsafe_code)]

pub mod account;
pub mod division;
pub mod error;
pub mod json;
pub mod pricing;
pub mod scenario;
pub mod temperatures;
pub mod trimming;

pub use error::WalkthroughError;
pub use scenario::{Scenario, WalkthroughConfig, run};
