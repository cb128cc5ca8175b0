//! Errors raised by the walkthrough examples.

use thiserror::Error;

/// Every way a walkthrough example can fail.
///
/// Values of this type travel in the `Left` side of an
/// [`Either`](adtkit::control::Either) until an example folds them into text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WalkthroughError {
    /// Division by zero was requested.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// An odd number was offered where an even one is required.
    #[error("number is not even")]
    NotEven(i32),

    /// A JSON document did not parse.
    #[error("invalid json: {0}")]
    InvalidJson(String),

    /// A JSON object lacked the requested property.
    #[error("property {0} not found")]
    MissingProperty(String),

    /// A money or percent string did not hold a number.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    /// A city came without any temperature readings.
    #[error("{city} has no temperature readings")]
    NoReadings {
        /// Name of the city.
        city: String,
    },
}
