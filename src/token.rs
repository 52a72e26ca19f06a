use crate::tables::{Diacritic, PunctuationClass};
use smallvec::SmallVec;

/// Lowercased base letter code: `a`, `cx` for `č`, `hx` for the `ch` digraph.
pub type Base = SmallVec<[char; 4]>;

/// Diacritics gathered for a single run, in scan order.
pub type Diacritics = SmallVec<[Diacritic; 4]>;

/// One run of input, as produced by the [`Scanner`](crate::scanner::Scanner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Letter {
        base: Base,
        diacritics: Diacritics,
        uppercase: bool,
    },
    Separator {
        paragraphs: u32,
        lines: u32,
        spaces: u32,
    },
    /// `floor(value * 100)`.
    Number { scaled: i64 },
    Punctuation { class: PunctuationClass },
    Symbol { class: PunctuationClass },
    /// Standalone marks with no letter left to attach to.
    StrayMarks { diacritics: Diacritics },
    Ignored,
}
