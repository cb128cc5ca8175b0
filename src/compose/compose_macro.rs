//! Right-to-left function composition.

/// Composes functions right to left into a single closure.
///
/// `compose!(f, g, h)` builds `move |x| f(g(h(x)))`. The rightmost function
/// sees the input first. A single argument is returned unchanged.
///
/// Every function is moved into the resulting closure, which is `Fn` as long
/// as each component is.
///
/// # Examples
///
/// ```
/// use adtkit::compose;
/// use adtkit::control::Maybe;
///
/// fn trim(text: &str) -> &str { text.trim() }
/// fn non_empty(text: &str) -> Maybe<&str> {
///     if text.is_empty() { Maybe::none() } else { Maybe::some(text) }
/// }
///
/// let street_name = compose!(non_empty, trim);
/// assert_eq!(street_name("  Elm Street "), Maybe::some("Elm Street"));
/// assert_eq!(street_name("   "), Maybe::none());
/// ```
///
/// Nested compositions agree regardless of grouping:
///
/// ```
/// use adtkit::compose;
///
/// let celsius_to_fahrenheit = |c: f64| c * 9.0 / 5.0;
/// let offset = |f: f64| f + 32.0;
/// let round = |f: f64| f.round();
///
/// let grouped_left = compose!(compose!(round, offset), celsius_to_fahrenheit);
/// let grouped_right = compose!(round, compose!(offset, celsius_to_fahrenheit));
/// assert_eq!(grouped_left(21.5), grouped_right(21.5));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($last:expr, $($earlier:expr),+ $(,)?) => {{
        let last = $last;
        let earlier = $crate::compose!($($earlier),+);
        move |input| last(earlier(input))
    }};
}
