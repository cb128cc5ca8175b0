//! A deferred text pipeline with `LazyBox`.

use std::cell::Cell;
use std::rc::Rc;

use adtkit::control::{LazyBox, Maybe};

/// Builds, without running, the pipeline `" 64 "` -> `64` -> `65` -> `'A'`.
///
/// Text that is not a number, or a number with no following character,
/// ends in `None`.
///
/// ```
/// use adtkit_walkthrough::trimming::next_letter;
///
/// let letter = next_letter("  64 ").fold(|letter| letter.map(|c| c.to_ascii_lowercase()));
/// assert_eq!(letter.into_option(), Some('a'));
/// ```
pub fn next_letter(text: &str) -> LazyBox<Maybe<char>> {
    LazyBox::of(text.to_string())
        .map(|text| text.trim().to_string())
        .map(|trimmed| Maybe::from_nullable(trimmed.parse::<u32>().ok()))
        .map(|number| {
            number.chain(|n| Maybe::from_nullable(n.checked_add(1).and_then(char::from_u32)))
        })
}

/// Like [`next_letter`], counting how often the source text is read.
pub fn counted_next_letter(text: &str, reads: Rc<Cell<usize>>) -> LazyBox<Maybe<char>> {
    let text = text.to_string();
    let source = LazyBox::new(move || {
        reads.set(reads.get() + 1);
        tracing::debug!(read = reads.get(), "reading source text");
        text.clone()
    });
    source
        .map(|text| text.trim().to_string())
        .map(|trimmed| Maybe::from_nullable(trimmed.parse::<u32>().ok()))
        .map(|number| {
            number.chain(|n| Maybe::from_nullable(n.checked_add(1).and_then(char::from_u32)))
        })
}
