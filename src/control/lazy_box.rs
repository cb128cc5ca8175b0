//! LazyBox - a deferred computation pipeline.
//!
//! `LazyBox<T>` holds a zero-argument producer instead of a value.
//! [`map`](LazyBox::map) composes a new producer around the old one without
//! calling either, so building a pipeline has no effect at all.
//! [`fold`](LazyBox::fold) is the only operation that runs anything.
//!
//! # Evaluation
//!
//! - Each `fold` runs the whole chain, innermost producer first, exactly once.
//! - Nothing is memoized. Folding the same `LazyBox` twice runs every step
//!   twice, including any side effects in the original producer.
//! - Clones share the same producer chain; folding a clone runs it again.
//!
//! For a memoized lazy value, cache the folded result yourself.
//!
//! # Stack Depth
//!
//! Every [`map`](LazyBox::map) wraps the previous producer in a new closure.
//! Folding calls through each layer in turn, and dropping the last handle
//! releases the layers one inside the other, so both use stack in
//! proportion to the number of steps. Pipelines of a few thousand steps are
//! fine; hundreds of thousands of steps overflow the default thread stack.
//! For long sequences, fold a persistent `List` or an
//! iterator instead of chaining `map` in a loop.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::LazyBox;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&runs);
//!
//! let pipeline = LazyBox::new(move || {
//!     counter.set(counter.get() + 1);
//!     "  64  ".to_string()
//! })
//! .map(|text| text.trim().to_string())
//! .map(|text| text.parse::<i32>().unwrap_or(0))
//! .map(|number| number * 2);
//!
//! assert_eq!(runs.get(), 0);
//! assert_eq!(pipeline.fold(|number| number), 128);
//! assert_eq!(runs.get(), 1);
//! assert_eq!(pipeline.fold(|number| number + 1), 129);
//! assert_eq!(runs.get(), 2);
//! ```

use std::fmt;
use std::rc::Rc;

/// A lazy container whose steps run only when folded.
///
/// `LazyBox` is single-threaded: the producer chain is shared through `Rc`,
/// so the type is neither `Send` nor `Sync`.
///
/// # Laws
///
/// Checked through `fold`, since the producer itself cannot be compared:
///
/// - **Identity**: `lazy.map(|x| x).fold(f) == lazy.fold(f)`
/// - **Composition**: `lazy.map(f).map(g).fold(h) == lazy.map(|x| g(f(x))).fold(h)`
pub struct LazyBox<T> {
    producer: Rc<dyn Fn() -> T>,
}

impl<T: 'static> LazyBox<T> {
    /// Stores `producer` without calling it.
    #[inline]
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Self {
            producer: Rc::new(producer),
        }
    }

    /// Lifts an already known value; each fold receives a fresh clone.
    #[inline]
    pub fn of(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Composes `function` after the current chain without running anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::LazyBox;
    ///
    /// let lazy = LazyBox::new(|| 21).map(|n| n * 2);
    /// assert_eq!(lazy.fold(|n| n), 42);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> LazyBox<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let producer = self.producer;
        LazyBox::new(move || function(producer()))
    }

    /// Composes a step that produces another `LazyBox`, flattening it.
    ///
    /// The inner box is built and folded each time the outer one is folded.
    #[inline]
    pub fn chain<U, F>(self, function: F) -> LazyBox<U>
    where
        U: 'static,
        F: Fn(T) -> LazyBox<U> + 'static,
    {
        let producer = self.producer;
        LazyBox::new(move || function(producer()).fold(|value| value))
    }

    /// Pairs the results of two lazy boxes, deferring both.
    ///
    /// When folded, `self` runs before `other`.
    #[inline]
    pub fn zip<U: 'static>(self, other: LazyBox<U>) -> LazyBox<(T, U)> {
        self.map2(other, |first, second| (first, second))
    }

    /// Combines the results of two lazy boxes, deferring both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::LazyBox;
    ///
    /// let cost = LazyBox::new(|| 100.0_f64);
    /// let discount = LazyBox::new(|| 0.25_f64);
    /// let total = cost.map2(discount, |cost, discount| cost - cost * discount);
    /// assert_eq!(total.fold(|total| total), 75.0);
    /// ```
    #[inline]
    pub fn map2<U, V, F>(self, other: LazyBox<U>, function: F) -> LazyBox<V>
    where
        U: 'static,
        V: 'static,
        F: Fn(T, U) -> V + 'static,
    {
        let first = self.producer;
        let second = other.producer;
        LazyBox::new(move || {
            let first_value = first();
            function(first_value, second())
        })
    }
}

impl<T> LazyBox<T> {
    /// Runs the whole chain and applies `function` to its result.
    ///
    /// This is the only operation that evaluates anything. Every call runs
    /// every step again.
    #[inline]
    pub fn fold<U, F>(&self, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        function((self.producer)())
    }
}

impl<T> Clone for LazyBox<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
        }
    }
}

impl<T> fmt::Debug for LazyBox<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("LazyBox").field(&"<deferred>").finish()
    }
}

static_assertions::assert_not_impl_any!(LazyBox<i32>: Send, Sync);
