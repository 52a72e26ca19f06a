use crate::tables::{Decomposition, Diacritic, DiacriticSet, Position, PunctuationClass, Shape};
use crate::unicode::{Category, SeparatorKind};

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Diacritic sets (shared by the maps below)
/// ---------------------------------------------------------------------------
macro_rules! diacritic_sets {
    ($( $name:ident = [ $( ($pos:ident, $shape:ident) ),+ $(,)? ] ),* $(,)?) => {
        $(
            const $name: DiacriticSet = &[
                $( Diacritic::new(Position::$pos, Shape::$shape) ),+
            ];
        )*
    };
}

diacritic_sets! {
    ABOVE_DOT = [(Above, Dot)],
    ABOVE_ACUTE = [(Above, Acute)],
    ABOVE_MACRON = [(Above, Macron)],
    ABOVE_GRAVE = [(Above, Grave)],
    ABOVE_CIRCUMFLEX = [(Above, Circumflex)],
    ABOVE_CARON = [(Above, Caron)],
    ABOVE_TILDE = [(Above, Tilde)],
    ABOVE_BREVE = [(Above, Breve)],
    ABOVE_INVERTED_BREVE = [(Above, InvertedBreve)],
    ABOVE_HOOK = [(Above, Hook)],
    ABOVE_RING = [(Above, Ring)],
    ABOVE_DOUBLE_ACUTE = [(Above, Acute), (Above, Acute)],
    ABOVE_DOUBLE_GRAVE = [(Above, Grave), (Above, Grave)],
    ABOVE_DIAERESIS = [(Above, Dot), (Above, Dot)],

    BELOW_DOT = [(Below, Dot)],
    BELOW_DIAERESIS = [(Below, Dot), (Below, Dot)],
    BELOW_MACRON = [(Below, Macron)],
    BELOW_CIRCUMFLEX = [(Below, Circumflex)],
    BELOW_TILDE = [(Below, Tilde)],
    BELOW_BREVE = [(Below, Breve)],
    BELOW_HOOK = [(Below, Hook)],
    BELOW_RING = [(Below, Ring)],

    BEHIND_VERTICAL = [(Behind, Vertical)],
    BEHIND_HOOK = [(Behind, Hook)],

    IN_FRONT_VERTICAL = [(InFront, Vertical)],
    IN_FRONT_RING = [(InFront, Ring)],

    THROUGH_STROKE = [(In, Macron)],
    THROUGH_SLASH = [(In, Grave)],
}

// ---------------------------------------------------------------------------
//    Marks that follow a letter
//    Ogonek, cedilla and comma below share (Below, Hook) until there is a
//    reason to tell them apart.
// ---------------------------------------------------------------------------
pub static COMBINING_DIACRITICS: Map<char, DiacriticSet> = phf_map! {
    '\'' => BEHIND_VERTICAL,
    '\u{2032}' => BEHIND_VERTICAL, // prime

    '\u{0307}' => ABOVE_DOT,
    '\u{0301}' => ABOVE_ACUTE,
    '\u{0304}' => ABOVE_MACRON,
    '\u{0300}' => ABOVE_GRAVE,
    '\u{0302}' => ABOVE_CIRCUMFLEX,
    '\u{030C}' => ABOVE_CARON,
    '\u{0303}' => ABOVE_TILDE,
    '\u{0306}' => ABOVE_BREVE,
    '\u{0311}' => ABOVE_INVERTED_BREVE,
    '\u{0309}' => ABOVE_HOOK,
    '\u{030A}' => ABOVE_RING,
    '\u{030B}' => ABOVE_DOUBLE_ACUTE,
    '\u{030F}' => ABOVE_DOUBLE_GRAVE,
    '\u{0308}' => ABOVE_DIAERESIS,

    '\u{0328}' => BELOW_HOOK, // ogonek
    '\u{0327}' => BELOW_HOOK, // cedilla
    '\u{0326}' => BELOW_HOOK, // comma below
    '\u{0323}' => BELOW_DOT,
    '\u{0324}' => BELOW_DIAERESIS,
    '\u{0325}' => BELOW_RING,
    '\u{032D}' => BELOW_CIRCUMFLEX,
    '\u{032E}' => BELOW_BREVE,
    '\u{0330}' => BELOW_TILDE,
    '\u{0331}' => BELOW_MACRON,

    '\u{031B}' => BEHIND_HOOK, // horn

    '\u{0335}' => THROUGH_STROKE,
    '\u{0336}' => THROUGH_STROKE,
    '\u{0337}' => THROUGH_SLASH,
    '\u{0338}' => THROUGH_SLASH,
};

/// Standalone marks that modify the *next* letter.
pub static DIACRITICS_BEFORE: Map<char, DiacriticSet> = phf_map! {
    '\'' => IN_FRONT_VERTICAL,
    '\u{2032}' => IN_FRONT_VERTICAL,
    '\u{00B0}' => IN_FRONT_RING, // degree sign
};

/// Keyed by the lowercase letter.
pub static IRREGULAR_DECOMPOSITIONS: Map<char, Decomposition> = phf_map! {
    'ł' => Decomposition { base: 'l', diacritics: THROUGH_SLASH },
    'ø' => Decomposition { base: 'o', diacritics: THROUGH_SLASH },
};

// ---------------------------------------------------------------------------
//    Punctuation classes
//    Marks and symbols are numbered by a fixed reading order. Graphics are
//    keyed by (has curves, strokes overlap, stroke count).
// ---------------------------------------------------------------------------
pub static PUNCTUATION_CLASSES: Map<char, PunctuationClass> = phf_map! {
    '-' => PunctuationClass::Hyphen,

    '.' => PunctuationClass::Mark(0),
    ',' => PunctuationClass::Mark(1),
    ';' => PunctuationClass::Mark(2),
    '?' => PunctuationClass::Mark(3),
    '!' => PunctuationClass::Mark(4),
    ':' => PunctuationClass::Mark(5),
    '„' => PunctuationClass::Mark(6),
    '“' => PunctuationClass::Mark(7),
    '‘' => PunctuationClass::Mark(8),
    '’' => PunctuationClass::Mark(9),
    '”' => PunctuationClass::Mark(10),
    '«' => PunctuationClass::Mark(11),
    '»' => PunctuationClass::Mark(12),
    '"' => PunctuationClass::Mark(13),
    // Always taken as a diacritic first; listed to keep the numbering.
    '\'' => PunctuationClass::Mark(14),
    '`' => PunctuationClass::Mark(15),
    '「' => PunctuationClass::Mark(16),
    '」' => PunctuationClass::Mark(17),
    '—' => PunctuationClass::Mark(18),
    '–' => PunctuationClass::Mark(19),
    '|' => PunctuationClass::Mark(20),
    '\\' => PunctuationClass::Mark(21),
    '/' => PunctuationClass::Mark(22),
    '[' => PunctuationClass::Mark(23),
    ']' => PunctuationClass::Mark(24),
    '(' => PunctuationClass::Mark(25),
    ')' => PunctuationClass::Mark(26),
    '‹' => PunctuationClass::Mark(27),
    '›' => PunctuationClass::Mark(28),
    '{' => PunctuationClass::Mark(29),
    '}' => PunctuationClass::Mark(30),
    '<' => PunctuationClass::Mark(31),
    '>' => PunctuationClass::Mark(32),

    '@' => PunctuationClass::Symbol(0),
    '&' => PunctuationClass::Symbol(1),
    '€' => PunctuationClass::Symbol(2),
    '£' => PunctuationClass::Symbol(3),
    '§' => PunctuationClass::Symbol(4),
    '%' => PunctuationClass::Symbol(5),
    '‰' => PunctuationClass::Symbol(6),
    '$' => PunctuationClass::Symbol(7),

    '_' => PunctuationClass::Graphic { curves: false, overlap: false, strokes: 1 },
    '=' => PunctuationClass::Graphic { curves: false, overlap: false, strokes: 2 },
    '^' => PunctuationClass::Graphic { curves: false, overlap: false, strokes: 2 },
    '+' => PunctuationClass::Graphic { curves: false, overlap: true, strokes: 2 },
    '×' => PunctuationClass::Graphic { curves: false, overlap: true, strokes: 2 },
    '*' => PunctuationClass::Graphic { curves: false, overlap: true, strokes: 3 },
    '#' => PunctuationClass::Graphic { curves: false, overlap: true, strokes: 4 },
    '~' => PunctuationClass::Graphic { curves: true, overlap: false, strokes: 1 },
    '≈' => PunctuationClass::Graphic { curves: true, overlap: false, strokes: 2 },
};

/// Local overrides applied before the Unicode database is consulted.
pub static CATEGORY_CORRECTIONS: Map<char, Category> = phf_map! {
    '\n' => Category::Separator(SeparatorKind::Line),
};

// ---------------------------------------------------------------------------
//    Letter/other numbers without a compatibility decomposition
//    (decimal digits are computed, see `unicode::numeric_value`)
// ---------------------------------------------------------------------------
pub static NUMERIC_VALUES: Map<char, f64> = phf_map! {
    // Tibetan half numbers
    '\u{0F2A}' => 0.5,
    '\u{0F2B}' => 1.5,
    '\u{0F2C}' => 2.5,
    '\u{0F2D}' => 3.5,
    '\u{0F2E}' => 4.5,
    '\u{0F2F}' => 5.5,
    '\u{0F30}' => 6.5,
    '\u{0F31}' => 7.5,
    '\u{0F32}' => 8.5,
    '\u{0F33}' => -0.5,

    // Tamil
    '\u{0BF0}' => 10.0,
    '\u{0BF1}' => 100.0,
    '\u{0BF2}' => 1000.0,

    // Ethiopic
    '\u{1369}' => 1.0,
    '\u{136A}' => 2.0,
    '\u{136B}' => 3.0,
    '\u{136C}' => 4.0,
    '\u{136D}' => 5.0,
    '\u{136E}' => 6.0,
    '\u{136F}' => 7.0,
    '\u{1370}' => 8.0,
    '\u{1371}' => 9.0,
    '\u{1372}' => 10.0,
    '\u{1373}' => 20.0,
    '\u{1374}' => 30.0,
    '\u{1375}' => 40.0,
    '\u{1376}' => 50.0,
    '\u{1377}' => 60.0,
    '\u{1378}' => 70.0,
    '\u{1379}' => 80.0,
    '\u{137A}' => 90.0,
    '\u{137B}' => 100.0,
    '\u{137C}' => 10000.0,

    // Roman numerals
    '\u{2180}' => 1000.0,
    '\u{2181}' => 5000.0,
    '\u{2182}' => 10000.0,
    '\u{2185}' => 6.0,
    '\u{2186}' => 50.0,
    '\u{2187}' => 50000.0,
    '\u{2188}' => 100000.0,

    // Ideographic zero and Hangzhou numerals
    '\u{3007}' => 0.0,
    '\u{3021}' => 1.0,
    '\u{3022}' => 2.0,
    '\u{3023}' => 3.0,
    '\u{3024}' => 4.0,
    '\u{3025}' => 5.0,
    '\u{3026}' => 6.0,
    '\u{3027}' => 7.0,
    '\u{3028}' => 8.0,
    '\u{3029}' => 9.0,
    '\u{3038}' => 10.0,
    '\u{3039}' => 20.0,
    '\u{303A}' => 30.0,
};
