//! Czech collation.
//!
//! [`key`] maps a string to a [`SortKey`] whose order is the order a Czech
//! reader expects: `ch` is a letter of its own between `h` and `i`, `č ř š ž`
//! follow their plain letters, and accents, case and punctuation only break
//! ties.
//!
//! ```
//! let words = czech_sort::sorted(["sídliště", "shoda", "schody"]);
//! assert_eq!(words, ["shoda", "schody", "sídliště"]);
//!
//! assert!(czech_sort::key("hrad") < czech_sort::key("chrám"));
//! assert!(czech_sort::bytes_key("hrad") < czech_sort::bytes_key("chrám"));
//! ```

pub mod collator;
pub mod context;
pub mod key;
pub mod normalization;
pub mod scanner;
pub mod tables;
pub mod token;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use collator::{CollateError, Collator, CollatorBuilder};
pub use context::{Context, KeyVariant, StrayMarks};
pub use key::{AlphabetEntry, DiacriticKey, SortKey};
pub use tables::{Diacritic, Position, PunctuationClass, Shape};

/// Sort key of `text` under [`Collator::CZECH`].
#[inline]
pub fn key(text: &str) -> SortKey {
    Collator::CZECH.key(text)
}

/// Sort key of raw bytes; fails unless they are UTF-8.
#[inline]
pub fn key_from_utf8(bytes: &[u8]) -> Result<SortKey, CollateError> {
    Collator::CZECH.key_from_utf8(bytes)
}

/// Order-preserving byte encoding of [`key`].
#[inline]
pub fn bytes_key(text: &str) -> Vec<u8> {
    Collator::CZECH.bytes_key(text)
}

/// Stable, in-place Czech sort.
#[inline]
pub fn sort<S: AsRef<str>>(items: &mut [S]) {
    Collator::CZECH.sort(items)
}

/// `strings` in Czech order.
#[inline]
pub fn sorted<S, I>(strings: I) -> Vec<S>
where
    S: AsRef<str>,
    I: IntoIterator<Item = S>,
{
    Collator::CZECH.sorted(strings)
}

/// Byte strings in Czech order; fails atomically on the first invalid one.
#[inline]
pub fn sorted_utf8<B, I>(items: I) -> Result<Vec<B>, CollateError>
where
    B: AsRef<[u8]>,
    I: IntoIterator<Item = B>,
{
    Collator::CZECH.sorted_utf8(items)
}
