//! Multi-level sort keys.
//!
//! A [`SortKey`] has six levels compared in order:
//!
//! | level        | per token                                             |
//! |--------------|-------------------------------------------------------|
//! | alphabet     | separator weight, base letter, or scaled number       |
//! | diacritics   | sorted positions + sorted shapes of a letter's marks  |
//! | case         | `true` for upper/titlecase letters                    |
//! | punctuation  | [`PunctuationClass`] of every token                   |
//! | normalized   | the prepared NFKD string                              |
//! | original     | the input itself                                      |
//!
//! The two string levels make the order total: keys of different inputs are
//! never equal.

pub mod bytes;

use crate::{
    context::{Context, KeyVariant},
    normalization::prepare,
    scanner::Scanner,
    tables::{Diacritic, Position, PunctuationClass, Shape},
    token::{Base, Token},
};
use smallvec::SmallVec;

/// One alphabet-level entry. Variant order is the rank: separators, then
/// letters, then numbers, then (extended variant only) punctuation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlphabetEntry {
    /// Counts are stored negated so that more separators of a stronger kind
    /// sort first.
    Separator {
        paragraphs: i64,
        lines: i64,
        spaces: i64,
    },
    Letter(Base),
    Number(i64),
    Punctuation(PunctuationClass),
}

/// Order-insensitive signature of a letter's diacritics.
///
/// Positions and shapes are sorted independently, not as pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiacriticKey {
    pub positions: SmallVec<[Position; 4]>,
    pub shapes: SmallVec<[Shape; 4]>,
}

impl DiacriticKey {
    pub fn new(diacritics: &[Diacritic]) -> Self {
        let mut positions: SmallVec<[Position; 4]> =
            diacritics.iter().map(|d| d.position).collect();
        let mut shapes: SmallVec<[Shape; 4]> = diacritics.iter().map(|d| d.shape).collect();
        positions.sort_unstable();
        shapes.sort_unstable();
        Self { positions, shapes }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Opaque, totally ordered collation key.
///
/// Field order is comparison order; `Ord` is derived.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    pub(crate) alphabet: Vec<AlphabetEntry>,
    pub(crate) diacritics: Vec<DiacriticKey>,
    pub(crate) case: Vec<bool>,
    pub(crate) punctuation: Vec<PunctuationClass>,
    pub(crate) normalized: String,
    pub(crate) original: String,
}

impl SortKey {
    pub fn alphabet(&self) -> &[AlphabetEntry] {
        &self.alphabet
    }

    pub fn diacritics(&self) -> &[DiacriticKey] {
        &self.diacritics
    }

    pub fn case(&self) -> &[bool] {
        &self.case
    }

    pub fn punctuation(&self) -> &[PunctuationClass] {
        &self.punctuation
    }

    /// The NFKD-normalized, trailing-trimmed input.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn original(&self) -> &str {
        &self.original
    }
}

/// Builds a [`SortKey`] for `text`.
pub fn build(text: &str, ctx: &Context) -> SortKey {
    let normalized = prepare(text);
    let mut assembler = Assembler::new(ctx);
    for token in Scanner::new(&normalized, ctx) {
        assembler.push(token);
    }
    assembler.finish(normalized, text.to_owned())
}

/// Accumulates the four token levels.
struct Assembler {
    variant: KeyVariant,
    alphabet: Vec<AlphabetEntry>,
    diacritics: Vec<DiacriticKey>,
    case: Vec<bool>,
    punctuation: Vec<PunctuationClass>,
}

impl Assembler {
    fn new(ctx: &Context) -> Self {
        Self {
            variant: ctx.variant,
            alphabet: Vec::new(),
            diacritics: Vec::new(),
            case: Vec::new(),
            punctuation: Vec::new(),
        }
    }

    fn push(&mut self, token: Token) {
        match token {
            Token::Letter {
                base,
                diacritics,
                uppercase,
            } => {
                self.alphabet.push(AlphabetEntry::Letter(base));
                self.diacritics.push(DiacriticKey::new(&diacritics));
                self.case.push(uppercase);
                self.punctuation.push(PunctuationClass::NotPunctuation);
            }
            Token::Separator {
                paragraphs,
                lines,
                spaces,
            } => {
                self.alphabet.push(AlphabetEntry::Separator {
                    paragraphs: -i64::from(paragraphs),
                    lines: -i64::from(lines),
                    spaces: -i64::from(spaces),
                });
                self.push_neutral();
            }
            Token::Number { scaled } => {
                self.alphabet.push(AlphabetEntry::Number(scaled));
                self.push_neutral();
            }
            Token::Punctuation { class } | Token::Symbol { class } => {
                if self.variant == KeyVariant::Extended {
                    self.alphabet.push(AlphabetEntry::Punctuation(class));
                }
                self.punctuation.push(class);
            }
            Token::StrayMarks { diacritics } => {
                self.diacritics.push(DiacriticKey::new(&diacritics));
            }
            Token::Ignored => {}
        }
    }

    /// Separators and numbers: empty diacritics, lowercase, not punctuation.
    fn push_neutral(&mut self) {
        self.diacritics.push(DiacriticKey::default());
        self.case.push(false);
        self.punctuation.push(PunctuationClass::NotPunctuation);
    }

    fn finish(self, normalized: String, original: String) -> SortKey {
        SortKey {
            alphabet: self.alphabet,
            diacritics: self.diacritics,
            case: self.case,
            punctuation: self.punctuation,
            normalized,
            original,
        }
    }
}
