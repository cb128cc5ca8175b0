//! Persistent (immutable) singly linked list.
//!
//! [`List`] is a cons-list: either `Nil` or `Cons` of a head and a tail that
//! is itself a `List`. Tails are shared through `Rc`, so prepending never
//! copies or mutates an existing list.
//!
//! ```text
//! tail:               2 -> 3 -> Nil
//! cons(1, tail): 1 -> [2 -> 3 -> Nil]   // shares [2, 3] with tail
//! ```
//!
//! # Stack Safety
//!
//! Every traversal is an explicit loop, including `Drop`, so stack depth does
//! not grow with the length of the list. [`List::fold_right`] buffers one
//! reference per element in a `Vec` to walk the list backwards; its only bound
//! is heap memory.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::persistent::List;
//!
//! let numbers = List::cons(1, List::cons(2, List::cons(3, List::nil())));
//! assert_eq!(numbers.head(), Some(&1));
//! assert_eq!(numbers.to_string(), "1, 2, 3");
//!
//! let described = numbers.match_with(|| "list is empty".to_string(), |head, _| format!("list head is {head}"));
//! assert_eq!(described, "list head is 1");
//!
//! let total = numbers.fold_left(0, |sum, n| sum + n);
//! assert_eq!(total, 6);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::mem;
use std::rc::Rc;

use crate::typeclass::{Foldable, FunctorMut, TypeConstructor};

/// A non-empty cell of a [`List`].
pub struct Node<T> {
    head: T,
    tail: List<T>,
}

impl<T> Node<T> {
    /// Returns the element stored in this cell.
    #[inline]
    pub const fn head(&self) -> &T {
        &self.head
    }

    /// Returns the rest of the list.
    #[inline]
    pub const fn tail(&self) -> &List<T> {
        &self.tail
    }
}

impl<T> Drop for Node<T> {
    // Unlinks uniquely owned successors one at a time; the default drop
    // would recurse once per node.
    fn drop(&mut self) {
        let mut next = mem::replace(&mut self.tail, List::Nil);
        while let List::Cons(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = mem::replace(&mut node.tail, List::Nil),
                Err(_) => break,
            }
        }
    }
}

/// A persistent singly linked list.
///
/// # Time Complexity
///
/// | Operation     | Complexity |
/// |---------------|------------|
/// | `nil`         | O(1)       |
/// | `cons`        | O(1)       |
/// | `head`/`tail` | O(1)       |
/// | `len`         | O(n)       |
/// | `map`/`fold_*`| O(n)       |
/// | `append`      | O(n) in the left list, right list is shared |
///
/// # Laws
///
/// - **Identity**: `list.map(|x| x.clone()) == list`
/// - **Composition**: `list.map(f).map(g) == list.map(|x| g(&f(x)))`
/// - **Rebuild**: `list.fold_right(List::nil(), |x, acc| List::cons(x.clone(), acc)) == list`
pub enum List<T> {
    /// The empty list.
    Nil,
    /// A head element followed by a tail list.
    Cons(Rc<Node<T>>),
}

impl<T> List<T> {
    /// Returns the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::persistent::List;
    ///
    /// let empty: List<i32> = List::nil();
    /// assert!(empty.is_nil());
    /// ```
    #[inline]
    #[must_use]
    pub const fn nil() -> Self {
        Self::Nil
    }

    /// Prepends `head` to `tail` in O(1).
    ///
    /// `tail` is moved into the new cell, not copied. To keep using the
    /// original, pass a clone: cloning a list only bumps a reference count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::persistent::List;
    ///
    /// let tail = List::cons(2, List::nil());
    /// let list = List::cons(1, tail.clone());
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(tail.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(head: T, tail: Self) -> Self {
        Self::Cons(Rc::new(Node { head, tail }))
    }

    /// Prepends `head` to this list, leaving it untouched.
    #[inline]
    #[must_use]
    pub fn prepend(&self, head: T) -> Self {
        Self::cons(head, self.clone())
    }

    /// Creates a list holding a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::cons(element, Self::Nil)
    }

    /// Builds a list in the same order as `elements`.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let mut list = Self::Nil;
        while let Some(element) = elements.pop() {
            list = Self::cons(element, list);
        }
        list
    }

    /// Returns `true` for the empty list.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Alias for [`is_nil`](Self::is_nil).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.is_nil()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        match self {
            Self::Nil => None,
            Self::Cons(node) => Some(&node.head),
        }
    }

    /// Returns the list without its first element; `Nil` stays `Nil`.
    ///
    /// The result shares structure with `self`.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        match self {
            Self::Nil => Self::Nil,
            Self::Cons(node) => node.tail.clone(),
        }
    }

    /// Splits the list into its head and tail.
    #[inline]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        match self {
            Self::Nil => None,
            Self::Cons(node) => Some((&node.head, node.tail.clone())),
        }
    }

    /// Counts the elements by walking the list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter { current: self }
    }

    /// Eliminates the list by applying exactly one of two handlers.
    ///
    /// `on_nil` runs for the empty list; `on_cons` receives the head and the
    /// (shared) tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::persistent::List;
    ///
    /// let describe = |list: &List<i32>| list.match_with(|| 0, |head, tail| head * 10 + tail.len() as i32);
    /// assert_eq!(describe(&List::nil()), 0);
    /// assert_eq!(describe(&List::cons(4, List::cons(5, List::nil()))), 41);
    /// ```
    #[inline]
    pub fn match_with<R, N, C>(&self, on_nil: N, on_cons: C) -> R
    where
        N: FnOnce() -> R,
        C: FnOnce(&T, Self) -> R,
    {
        match self {
            Self::Nil => on_nil(),
            Self::Cons(node) => on_cons(&node.head, node.tail.clone()),
        }
    }

    /// Applies `function` to every element, producing a new list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::persistent::List;
    ///
    /// let list: List<i32> = (1..=3).collect();
    /// assert_eq!(list.map(|n| n * n).to_vec(), vec![1, 4, 9]);
    /// ```
    pub fn map<U, F>(&self, function: F) -> List<U>
    where
        F: FnMut(&T) -> U,
    {
        List::build_from_vec(self.iter().map(function).collect())
    }

    /// Folds from the left: `f(f(f(init, a), b), c)`.
    pub fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, function)
    }

    /// Folds from the right: `f(a, f(b, f(c, init)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::persistent::List;
    ///
    /// let list: List<&str> = vec!["a", "b", "c"].into_iter().collect();
    /// let nested = list.fold_right("z".to_string(), |x, acc| format!("f({x}, {acc})"));
    /// assert_eq!(nested, "f(a, f(b, f(c, z)))");
    /// ```
    pub fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    /// Returns `true` if any element satisfies `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }
}

impl<T: Clone> List<T> {
    /// Builds a list from a slice, preserving order.
    pub fn from_slice(slice: &[T]) -> Self {
        Self::build_from_vec(slice.to_vec())
    }

    /// Collects the elements into a `Vec`, front to back.
    ///
    /// This is the display-friendly sequence form of the list.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Maps every element to a list and concatenates the results.
    pub fn flat_map<U, F>(&self, mut function: F) -> List<U>
    where
        U: Clone,
        F: FnMut(&T) -> List<U>,
    {
        let mut elements = Vec::new();
        for element in self {
            elements.extend(function(element).iter().cloned());
        }
        List::build_from_vec(elements)
    }

    /// Keeps the elements satisfying `predicate`, in order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::build_from_vec(self.iter().filter(|element| predicate(element)).cloned().collect())
    }

    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.fold_left(Self::Nil, |reversed, element| {
            Self::cons(element.clone(), reversed)
        })
    }

    /// Concatenates two lists. `other` is shared, not copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::persistent::List;
    ///
    /// let front: List<i32> = (1..=2).collect();
    /// let back: List<i32> = (3..=4).collect();
    /// assert_eq!(front.append(&back).to_vec(), vec![1, 2, 3, 4]);
    /// assert_eq!(back.len(), 2);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        self.fold_right(other.clone(), |element, rest| {
            Self::cons(element.clone(), rest)
        })
    }

    /// Pairs elements of two lists, stopping at the shorter one.
    pub fn zip<U: Clone>(&self, other: &List<U>) -> List<(T, U)> {
        List::build_from_vec(
            self.iter()
                .zip(other.iter())
                .map(|(first, second)| (first.clone(), second.clone()))
                .collect(),
        )
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A borrowing iterator over a [`List`].
pub struct Iter<'a, T> {
    current: &'a List<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            List::Nil => None,
            List::Cons(node) => {
                self.current = &node.tail;
                Some(&node.head)
            }
        }
    }
}

/// An owning iterator over a [`List`], cloning each element out of the
/// shared cells.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = match &self.list {
            List::Nil => return None,
            List::Cons(node) => (node.head.clone(), node.tail.clone()),
        };
        self.list = tail;
        Some(head)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Nil => Self::Nil,
            Self::Cons(node) => Self::Cons(Rc::clone(node)),
        }
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::Nil
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements separated by `", "`; the empty list renders as `""`.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

impl<T: Clone> FunctorMut for List<T> {
    fn fmap_mut<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(T) -> B,
    {
        List::build_from_vec(self.into_iter().map(function).collect())
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> List<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<'a, T> TypeConstructor for &'a List<T> {
    type Inner = &'a T;
    type WithType<B> = List<B>;
}

/// Folding borrows the list, so `list.fold_left(..)` resolves to the inherent
/// method under any import and the list stays usable afterwards.
impl<'a, T> Foldable for &'a List<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, &'a T) -> B,
    {
        self.iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(&'a T, B) -> B,
    {
        let elements: Vec<&'a T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_nil()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct ListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(List::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for List<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::List;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    fn one_two_three() -> List<i32> {
        List::cons(1, List::cons(2, List::cons(3, List::nil())))
    }

    #[rstest]
    fn cons_shares_tail() {
        let tail = List::cons(2, List::nil());
        let list = List::cons(1, tail.clone());
        match (&list, &tail) {
            (List::Cons(node), List::Cons(shared)) => match node.tail() {
                List::Cons(inner) => assert!(Rc::ptr_eq(inner, shared)),
                List::Nil => panic!("tail lost"),
            },
            _ => panic!("expected two non-empty lists"),
        }
    }

    #[rstest]
    fn match_with_on_nil_never_calls_on_cons() {
        let cons_calls = Cell::new(0);
        let empty: List<i32> = List::nil();
        let result = empty.match_with(
            || "empty",
            |_, _| {
                cons_calls.set(cons_calls.get() + 1);
                "non-empty"
            },
        );
        assert_eq!(result, "empty");
        assert_eq!(cons_calls.get(), 0);
    }

    #[rstest]
    fn fold_right_is_right_associative() {
        let result = one_two_three().fold_right(String::from("z"), |n, acc| format!("({n} {acc})"));
        assert_eq!(result, "(1 (2 (3 z)))");
    }

    #[rstest]
    fn fold_left_is_left_associative() {
        let result = one_two_three().fold_left(String::from("z"), |acc, n| format!("({acc} {n})"));
        assert_eq!(result, "(((z 1) 2) 3)");
    }

    #[rstest]
    fn reverse_and_filter() {
        assert_eq!(one_two_three().reverse().to_vec(), vec![3, 2, 1]);
        assert_eq!(one_two_three().filter(|n| n % 2 == 1).to_vec(), vec![1, 3]);
    }

    #[rstest]
    fn flat_map_concatenates() {
        let result = one_two_three().flat_map(|n| List::cons(*n, List::cons(n * 10, List::nil())));
        assert_eq!(result.to_vec(), vec![1, 10, 2, 20, 3, 30]);
    }

    #[rstest]
    fn display_joins_with_commas() {
        assert_eq!(one_two_three().to_string(), "1, 2, 3");
        assert_eq!(List::<i32>::nil().to_string(), "");
    }

    #[rstest]
    fn long_list_drops_without_overflow() {
        let list: List<u32> = (0..1_000_000).collect();
        assert_eq!(list.len(), 1_000_000);
        drop(list);
    }

    #[rstest]
    fn shared_tail_survives_drop_of_prefix() {
        let tail: List<i32> = (2..=4).collect();
        let list = List::cons(1, tail.clone());
        drop(list);
        assert_eq!(tail.to_vec(), vec![2, 3, 4]);
    }
}
