//! Money and percent parsing with `Boxed` pipelines.

use adtkit::control::{Boxed, Either};

use crate::error::WalkthroughError;

/// Parses `"$100"` style text. Unparseable text becomes `0.0`.
pub fn money_to_float(text: &str) -> Boxed<f64> {
    Boxed::new(text)
        .map(|text| text.replace('$', ""))
        .map(|text| text.trim().parse::<f64>().unwrap_or(0.0))
}

/// Parses `"25%"` style text into a fraction. Unparseable text becomes `0.0`.
pub fn percent_to_float(text: &str) -> Boxed<f64> {
    Boxed::new(text)
        .map(|text| text.replace('%', ""))
        .map(|text| text.trim().parse::<f64>().unwrap_or(0.0))
        .map(|number| number * 0.01)
}

/// Applies a percent discount to a price, combining both boxes with `map2`.
///
/// ```
/// use adtkit_walkthrough::pricing::apply_discount;
///
/// assert_eq!(apply_discount("$100", "25%"), 75.0);
/// ```
pub fn apply_discount(price: &str, discount: &str) -> f64 {
    money_to_float(price)
        .map2(percent_to_float(discount), |cost, rate| cost - cost * rate)
        .fold(|total| total)
}

/// Same result as [`apply_discount`], sequencing the boxes with `chain`.
pub fn apply_discount_chained(price: &str, discount: &str) -> f64 {
    money_to_float(price)
        .chain(|cost| percent_to_float(discount).map(move |rate| cost - cost * rate))
        .into_inner()
}

/// Strict variant: rejects text that is not a number instead of using `0.0`.
pub fn parse_money(text: &str) -> Either<WalkthroughError, f64> {
    let digits = text.trim().trim_start_matches('$');
    Either::try_catch(|| digits.parse::<f64>())
        .map_left(|_| WalkthroughError::InvalidAmount(text.to_string()))
}
