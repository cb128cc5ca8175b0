//! Elementary combinators.

/// Returns its argument unchanged.
///
/// Handy as the "keep the value" handler of a fold:
///
/// ```
/// use adtkit::compose::identity;
/// use adtkit::control::Either;
///
/// let value: Either<String, i32> = Either::right(5);
/// assert_eq!(value.fold(|_| 0, identity), 5);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that ignores its argument and returns a clone of `value`.
///
/// ```
/// use adtkit::compose::constant;
/// use adtkit::control::Maybe;
///
/// let fallback = constant::<_, ()>("no value");
/// assert_eq!(Maybe::<&str>::none().get_or_else(|| fallback(())), "no value");
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the parameters of a binary function.
///
/// ```
/// use adtkit::compose::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
