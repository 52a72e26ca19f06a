//! src/scanner.rs
//!
//! Single left-to-right pass over prepared (NFKD, trailing-trimmed) text,
//! grouping codepoints into runs and emitting one [`Token`] per run.
//!
//! A letter run is the letter itself plus everything the lookahead decides to
//! swallow: a caron turning `c r s z` into their Czech letters, the `h` of the
//! `ch` digraph, and any number of combining marks. That is what lets `ch` and
//! `č` act as single alphabet units although NFKD splits them in two.

use crate::{
    context::{Context, StrayMarks},
    tables::{
        Diacritic, DiacriticSet, Position, PunctuationClass, Shape, combining_diacritics,
        diacritics_before, irregular_decomposition, punctuation_class,
    },
    token::{Base, Diacritics, Token},
    unicode::{COMBINING_CARON, Category, LetterKind, SeparatorKind, category, numeric_value},
};
use smallvec::smallvec;
use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

/// Pull-based cursor over the codepoints of the prepared text.
struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Cursor<'a> {
    #[inline(always)]
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }

    #[inline(always)]
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    #[inline(always)]
    fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }
}

/// What the lookahead does with the codepoint after a letter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Continuation {
    /// `c r s z` + caron: consume, mark the base with `x`.
    Caron,
    /// `c` + `h`: consume, become `hx`, end the run.
    Digraph,
    /// Mapped combining mark: consume, add its diacritics.
    Diacritics(DiacriticSet),
    /// Unmapped combining mark: consume, add an unknown diacritic.
    UnknownMark,
    Stop,
}

/// Decision table keyed on (current base, next codepoint).
#[inline]
fn continuation(base: &[char], next: char) -> Continuation {
    match (base, next) {
        (['c' | 'r' | 's' | 'z'], COMBINING_CARON) => Continuation::Caron,
        (['c'], 'h' | 'H') => Continuation::Digraph,
        _ => match combining_diacritics(next) {
            Some(set) => Continuation::Diacritics(set),
            None if category(next) == Category::Mark => Continuation::UnknownMark,
            None => Continuation::Stop,
        },
    }
}

/// Lazy token stream over one prepared string.
///
/// Finite and not restartable: build a new scanner to scan again.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    ctx: Context,
    /// Standalone marks waiting for the next letter run.
    pending: Diacritics,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(prepared: &'a str, ctx: &Context) -> Self {
        Self {
            cursor: Cursor::new(prepared),
            ctx: *ctx,
            pending: Diacritics::new(),
            finished: false,
        }
    }

    fn letter_run(&mut self, first: char, kind: LetterKind) -> Token {
        let mut diacritics = std::mem::take(&mut self.pending);
        let mut base: Base = first.to_lowercase().collect();

        if let &[single] = base.as_slice()
            && let Some(decomposition) = irregular_decomposition(single)
        {
            base = smallvec![decomposition.base];
            diacritics.extend_from_slice(decomposition.diacritics);
        }

        while let Some(next) = self.cursor.peek() {
            match continuation(&base, next) {
                Continuation::Caron => {
                    self.cursor.advance();
                    base.push('x');
                }
                Continuation::Digraph => {
                    self.cursor.advance();
                    base = smallvec!['h', 'x'];
                    break;
                }
                Continuation::Diacritics(set) => {
                    self.cursor.advance();
                    diacritics.extend_from_slice(set);
                }
                Continuation::UnknownMark => {
                    log::trace!("unmapped combining mark U+{:04X}", next as u32);
                    self.cursor.advance();
                    diacritics.push(Diacritic::UNKNOWN);
                }
                Continuation::Stop => break,
            }
        }

        Token::Letter {
            base,
            diacritics,
            uppercase: kind.is_capital(),
        }
    }

    fn separator_run(&mut self, first: SeparatorKind) -> Token {
        let (mut paragraphs, mut lines, mut spaces) = (0, 0, 0);
        let mut count = |kind: SeparatorKind| match kind {
            SeparatorKind::Paragraph => paragraphs += 1,
            SeparatorKind::Line => lines += 1,
            SeparatorKind::Space => spaces += 1,
        };
        count(first);
        while let Some(next) = self.cursor.peek() {
            let Category::Separator(kind) = category(next) else {
                break;
            };
            self.cursor.advance();
            count(kind);
        }
        Token::Separator {
            paragraphs,
            lines,
            spaces,
        }
    }

    fn finish(&mut self) -> Option<Token> {
        self.finished = true;
        if self.pending.is_empty() {
            return None;
        }
        let diacritics = std::mem::take(&mut self.pending);
        match self.ctx.stray_marks {
            StrayMarks::Keep => Some(Token::StrayMarks { diacritics }),
            StrayMarks::Drop => {
                log::trace!("dropping {} stray mark(s)", diacritics.len());
                None
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        loop {
            let Some(c) = self.cursor.advance() else {
                return self.finish();
            };

            let cat = category(c);
            if let Category::Letter(kind) = cat {
                return Some(self.letter_run(c, kind));
            }
            if let Category::Separator(kind) = cat {
                return Some(self.separator_run(kind));
            }

            // Standalone marks produce no token of their own.
            if let Some(set) = diacritics_before(c).or_else(|| combining_diacritics(c)) {
                self.pending.extend_from_slice(set);
                continue;
            }

            if let Some(class) = punctuation_class(c) {
                return Some(match cat {
                    Category::Symbol => Token::Symbol { class },
                    _ => Token::Punctuation { class },
                });
            }

            return Some(match cat {
                Category::Number => {
                    let value = numeric_value(c).unwrap_or(0.0);
                    Token::Number {
                        scaled: (value * 100.0).floor() as i64,
                    }
                }
                // One shared bucket for both: ties fall through to the
                // normalized string.
                Category::Punctuation => {
                    log::trace!("unclassified punctuation U+{:04X}", c as u32);
                    Token::Punctuation {
                        class: PunctuationClass::Unclassified,
                    }
                }
                Category::Symbol => {
                    log::trace!("unclassified symbol U+{:04X}", c as u32);
                    Token::Symbol {
                        class: PunctuationClass::Unclassified,
                    }
                }
                Category::Mark => {
                    self.pending
                        .push(Diacritic::new(Position::InFront, Shape::Unknown));
                    continue;
                }
                Category::Other => Token::Ignored,
                Category::Letter(_) | Category::Separator(_) => {
                    unreachable!("letter and separator runs are handled above")
                }
            });
        }
    }
}

impl FusedIterator for Scanner<'_> {}
