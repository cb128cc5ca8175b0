//! Branching arithmetic with `Either`.

use adtkit::control::Either;

use crate::error::WalkthroughError;

/// Divides two by `number`, which has to be even and non-zero.
pub fn divide_two_if_even(number: i32) -> Either<WalkthroughError, i32> {
    if number == 0 {
        Either::left(WalkthroughError::DivisionByZero)
    } else if number % 2 != 0 {
        Either::left(WalkthroughError::NotEven(number))
    } else {
        Either::right(2 / number)
    }
}

/// Renders the outcome of [`divide_two_if_even`].
pub fn describe_division(number: i32) -> String {
    divide_two_if_even(number).fold(|error| error.to_string(), |quotient| format!("result is {quotient}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(2, "result is 1")]
    #[case(-2, "result is -1")]
    #[case(4, "result is 0")]
    #[case(3, "number is not even")]
    #[case(0, "cannot divide by zero")]
    fn describes_each_branch(#[case] number: i32, #[case] expected: &str) {
        assert_eq!(describe_division(number), expected);
    }

    proptest! {
        #[test]
        fn prop_odd_numbers_are_rejected(half in -1000_i32..1000) {
            let odd = half * 2 + 1;
            prop_assert_eq!(divide_two_if_even(odd), Either::left(WalkthroughError::NotEven(odd)));
        }
    }
}
