pub mod data;

use crate::unicode::Category;
use data::{
    CATEGORY_CORRECTIONS, COMBINING_DIACRITICS, DIACRITICS_BEFORE, IRREGULAR_DECOMPOSITIONS,
    NUMERIC_VALUES, PUNCTUATION_CLASSES,
};

/// Where a diacritic sits relative to its base letter.
///
/// Declaration order is collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Position {
    Above,
    Below,
    Behind,
    InFront,
    In,
    Unknown,
}

/// Visual shape of a diacritic. Declaration order is collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Shape {
    Dot,
    Acute,
    Macron,
    Vertical,
    Grave,
    Circumflex,
    Caron,
    Tilde,
    Breve,
    InvertedBreve,
    Hook,
    Ring,
    Unknown,
}

/// A single mark attached to a letter run.
///
/// Diacritics are never compared pairwise; a run's marks are reduced to a
/// [`DiacriticKey`](crate::key::DiacriticKey) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Diacritic {
    pub position: Position,
    pub shape: Shape,
}

impl Diacritic {
    /// Fallback for combining marks missing from the table.
    pub const UNKNOWN: Diacritic = Diacritic::new(Position::Unknown, Shape::Unknown);

    #[inline(always)]
    pub const fn new(position: Position, shape: Shape) -> Self {
        Self { position, shape }
    }
}

pub type DiacriticSet = &'static [Diacritic];

/// Letters Unicode does not decompose on its own (`ł`, `ø`).
#[derive(Clone, Copy, Debug)]
pub struct Decomposition {
    pub base: char,
    pub diacritics: DiacriticSet,
}

/// Punctuation-level weight.
///
/// The groups are deliberately coarse: they follow how a reader perceives the
/// marks, not codepoint order. Variant order is collation order, so the hyphen
/// sorts before anything that is not punctuation at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PunctuationClass {
    Hyphen,
    NotPunctuation,
    /// Quotation, bracket and sentence marks, by fixed enumeration index.
    Mark(u8),
    /// Currency, percent and similar, by fixed enumeration index.
    Symbol(u8),
    /// Any punctuation or symbol missing from the table.
    Unclassified,
    /// Graphic symbols keyed by visual similarity.
    Graphic {
        curves: bool,
        overlap: bool,
        strokes: u8,
    },
}

// ---------------------------------------------------------------------------
// Lookups. All tables are compile-time `phf` maps, read-only for the life of
// the process.
// ---------------------------------------------------------------------------

/// Diacritics contributed by `c` when it follows a letter.
#[inline]
pub fn combining_diacritics(c: char) -> Option<DiacriticSet> {
    COMBINING_DIACRITICS.get(&c).copied()
}

/// Diacritics contributed by a standalone mark to the next letter run.
#[inline]
pub fn diacritics_before(c: char) -> Option<DiacriticSet> {
    DIACRITICS_BEFORE.get(&c).copied()
}

#[inline]
pub fn irregular_decomposition(c: char) -> Option<Decomposition> {
    IRREGULAR_DECOMPOSITIONS.get(&c).copied()
}

#[inline]
pub fn punctuation_class(c: char) -> Option<PunctuationClass> {
    PUNCTUATION_CLASSES.get(&c).copied()
}

#[inline]
pub fn category_correction(c: char) -> Option<Category> {
    CATEGORY_CORRECTIONS.get(&c).copied()
}

/// Numeric values for letter/other numbers that survive NFKD.
#[inline]
pub fn tabulated_numeric_value(c: char) -> Option<f64> {
    NUMERIC_VALUES.get(&c).copied()
}
