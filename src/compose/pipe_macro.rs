//! Left-to-right function application.

/// Threads a value through functions from left to right.
///
/// `pipe!(x, f, g)` evaluates to `g(f(x))` and is the applied form of
/// `compose!(g, f)(x)`. Each function is called once, so `FnOnce` closures
/// are accepted.
///
/// # Examples
///
/// ```
/// use adtkit::pipe;
/// use adtkit::control::Boxed;
///
/// fn percent_to_float(text: &str) -> f64 {
///     text.replace('%', "").parse::<f64>().unwrap_or(0.0) * 0.01
/// }
///
/// let rate = pipe!("25%", percent_to_float, Boxed::new);
/// assert_eq!(rate, Boxed::new(0.25));
/// ```
///
/// ```
/// use adtkit::{compose, pipe};
///
/// let inc = |n: i32| n + 1;
/// let square = |n: i32| n * n;
/// assert_eq!(pipe!(3, inc, square), compose!(square, inc)(3));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $next:expr $(,)?) => {
        $next($value)
    };

    ($value:expr, $next:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!($next($value), $($rest),+)
    };
}
