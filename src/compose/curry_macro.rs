//! Currying for two-argument functions.

/// Converts `f(a, b)` into `f(a)(b)`.
///
/// The function is shared through `Rc`, and the first argument is cloned on
/// every call of the inner closure, so both the curried function and each
/// partial application can be called repeatedly. The first argument type must
/// be `Clone`.
///
/// # Examples
///
/// ```
/// use adtkit::curry2;
/// use adtkit::control::Boxed;
///
/// fn apply_discount(rate: f64, cost: f64) -> f64 { cost - cost * rate }
///
/// let discount = curry2!(apply_discount);
/// let quarter_off = discount(0.25);
/// let half_off = discount(0.5);
///
/// assert_eq!(Boxed::new(100.0).map(&quarter_off).into_inner(), 75.0);
/// assert_eq!(half_off(100.0), 50.0);
/// assert_eq!(quarter_off(40.0), 30.0);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}
