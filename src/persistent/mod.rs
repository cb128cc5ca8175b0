//! Persistent (immutable) data structures.
//!
//! - [`List`]: singly linked cons-list with shared tails
//!
//! # Structural Sharing
//!
//! Prepending creates a new cell pointing at the existing list, so every
//! earlier version stays valid and unchanged.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::persistent::List;
//!
//! let list = List::cons(1, List::cons(2, List::cons(3, List::nil())));
//!
//! let extended = list.prepend(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//! assert_eq!(extended.tail(), list);
//! ```

mod list;

pub use list::{IntoIter, Iter, List, Node};
