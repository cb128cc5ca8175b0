//! Foldable type class - collapsing a structure into a summary value.
//!
//! `fold_left` is left-associative, `fold_right` is right-associative:
//!
//! ```text
//! [a, b, c].fold_left(z, f)  == f(f(f(z, a), b), c)
//! [a, b, c].fold_right(z, f) == f(a, f(b, f(c, z)))
//! ```
//!
//! Implementations in this crate never recurse on the size of the structure.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::persistent::List;
//! use adtkit::typeclass::Foldable;
//!
//! fn render<'a, F: Foldable<Inner = &'a i32>>(digits: F) -> String {
//!     digits.fold_right(String::new(), |digit, rest| format!("{digit}{rest}"))
//! }
//!
//! let digits: List<i32> = vec![1, 2, 3].into_iter().collect();
//! assert_eq!(render(&digits), "123");
//! assert_eq!(digits.len(), 3);
//! ```

use super::higher::TypeConstructor;

/// A type class for structures that can be folded to a single value.
pub trait Foldable: TypeConstructor {
    /// Folds from the left with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if the structure holds no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Counts the elements of the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }
}
