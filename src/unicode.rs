//! Codepoint classification on top of the ICU4X property data.
//!
//! Everything here is pure and total: unassigned, private-use and surrogate
//! codepoints simply classify as [`Category::Other`].

use crate::tables::{category_correction, tabulated_numeric_value};
use icu_properties::{CodePointMapData, CodePointMapDataBorrowed, props::GeneralCategory};
use std::sync::LazyLock;

// ── ICU4X ──
static GENERAL_CATEGORY: LazyLock<CodePointMapDataBorrowed<'static, GeneralCategory>> =
    LazyLock::new(CodePointMapData::<GeneralCategory>::new);

pub const COMBINING_CARON: char = '\u{030C}';

/// Longest contiguous run of decimal digits in the UCD (mathematical digits).
const MAX_DIGIT_RUN: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterKind {
    Uppercase,
    Lowercase,
    Titlecase,
    Modifier,
    Other,
}

impl LetterKind {
    /// Upper- and titlecase letters set the case level.
    #[inline(always)]
    pub const fn is_capital(self) -> bool {
        matches!(self, LetterKind::Uppercase | LetterKind::Titlecase)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeparatorKind {
    Paragraph,
    Line,
    Space,
}

/// Coarse general category as used by the run scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Letter(LetterKind),
    Separator(SeparatorKind),
    Number,
    Punctuation,
    Symbol,
    Mark,
    /// Control, format, unassigned, private use, surrogate.
    Other,
}

/// Category of `c`, with local corrections applied first.
#[inline]
pub fn category(c: char) -> Category {
    if let Some(corrected) = category_correction(c) {
        return corrected;
    }
    from_general_category(GENERAL_CATEGORY.get(c))
}

#[inline]
fn from_general_category(gc: GeneralCategory) -> Category {
    use GeneralCategory as G;
    match gc {
        G::UppercaseLetter => Category::Letter(LetterKind::Uppercase),
        G::LowercaseLetter => Category::Letter(LetterKind::Lowercase),
        G::TitlecaseLetter => Category::Letter(LetterKind::Titlecase),
        G::ModifierLetter => Category::Letter(LetterKind::Modifier),
        G::OtherLetter => Category::Letter(LetterKind::Other),

        G::ParagraphSeparator => Category::Separator(SeparatorKind::Paragraph),
        G::LineSeparator => Category::Separator(SeparatorKind::Line),
        G::SpaceSeparator => Category::Separator(SeparatorKind::Space),

        G::DecimalNumber | G::LetterNumber | G::OtherNumber => Category::Number,

        G::ConnectorPunctuation
        | G::DashPunctuation
        | G::OpenPunctuation
        | G::ClosePunctuation
        | G::InitialPunctuation
        | G::FinalPunctuation
        | G::OtherPunctuation => Category::Punctuation,

        G::MathSymbol | G::CurrencySymbol | G::ModifierSymbol | G::OtherSymbol => {
            Category::Symbol
        }

        G::NonspacingMark | G::SpacingMark | G::EnclosingMark => Category::Mark,

        G::Control | G::Format | G::Unassigned | G::PrivateUse | G::Surrogate => Category::Other,

        #[allow(unreachable_patterns)]
        _ => Category::Other,
    }
}

/// Numeric value of a number codepoint, if the database knows one.
///
/// Decimal digits are laid out in contiguous, zero-first runs of ten, so the
/// value is the distance from the start of the run modulo ten.
pub fn numeric_value(c: char) -> Option<f64> {
    if let Some(d) = c.to_digit(10) {
        return Some(f64::from(d));
    }
    match GENERAL_CATEGORY.get(c) {
        GeneralCategory::DecimalNumber => {
            let cp = c as u32;
            let mut start = cp;
            while cp - start < MAX_DIGIT_RUN
                && start > 0
                && char::from_u32(start - 1)
                    .is_some_and(|p| GENERAL_CATEGORY.get(p) == GeneralCategory::DecimalNumber)
            {
                start -= 1;
            }
            Some(f64::from((cp - start) % 10))
        }
        GeneralCategory::LetterNumber | GeneralCategory::OtherNumber => {
            tabulated_numeric_value(c)
        }
        _ => None,
    }
}
