//! Order-preserving byte encoding of [`SortKey`].
//!
//! For any two keys `a` and `b`, `a.to_bytes().cmp(&b.to_bytes()) == a.cmp(&b)`.
//! This makes keys usable wherever only bytewise comparison is available
//! (sorted indexes, key-value stores).
//!
//! Every component is self-delimiting so that concatenation preserves the
//! lexicographic order of the structured key:
//! - sequences: each element prefixed with `0x01`, terminated with `0x00`
//! - signed integers: big-endian with the sign bit flipped
//! - the normalized string: `0x00` escaped as `0x00 0xFF`, terminated with `0x00 0x01`
//! - the original string: raw UTF-8, last, so it needs no terminator

use crate::key::{AlphabetEntry, DiacriticKey, SortKey};
use crate::tables::PunctuationClass;

const ELEMENT: u8 = 0x01;
const END: u8 = 0x00;

impl SortKey {
    /// Order-preserving byte form of this key.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.normalized.len() + self.original.len() + 64);

        put_seq(&mut out, &self.alphabet, put_alphabet);
        put_seq(&mut out, &self.diacritics, put_diacritics);
        put_seq(&mut out, &self.case, |out, &upper| out.push(u8::from(upper)));
        put_seq(&mut out, &self.punctuation, |out, &class| {
            put_punctuation(out, class)
        });
        put_escaped(&mut out, self.normalized.as_bytes());
        out.extend_from_slice(self.original.as_bytes());
        out
    }
}

#[inline]
fn put_seq<T>(out: &mut Vec<u8>, items: &[T], mut put: impl FnMut(&mut Vec<u8>, &T)) {
    for item in items {
        out.push(ELEMENT);
        put(out, item);
    }
    out.push(END);
}

#[inline(always)]
fn put_i64(out: &mut Vec<u8>, value: i64) {
    out.extend_from_slice(&((value as u64) ^ (1 << 63)).to_be_bytes());
}

fn put_alphabet(out: &mut Vec<u8>, entry: &AlphabetEntry) {
    match entry {
        AlphabetEntry::Separator {
            paragraphs,
            lines,
            spaces,
        } => {
            out.push(0);
            put_i64(out, *paragraphs);
            put_i64(out, *lines);
            put_i64(out, *spaces);
        }
        AlphabetEntry::Letter(base) => {
            out.push(1);
            put_seq(out, base, |out, c| {
                out.extend_from_slice(&u32::from(*c).to_be_bytes())
            });
        }
        AlphabetEntry::Number(scaled) => {
            out.push(2);
            put_i64(out, *scaled);
        }
        AlphabetEntry::Punctuation(class) => {
            out.push(3);
            put_punctuation(out, *class);
        }
    }
}

fn put_diacritics(out: &mut Vec<u8>, key: &DiacriticKey) {
    put_seq(out, &key.positions, |out, p| out.push(*p as u8));
    put_seq(out, &key.shapes, |out, s| out.push(*s as u8));
}

/// Tag plus a fixed-width payload per tag.
fn put_punctuation(out: &mut Vec<u8>, class: PunctuationClass) {
    match class {
        PunctuationClass::Hyphen => out.push(0),
        PunctuationClass::NotPunctuation => out.push(1),
        PunctuationClass::Mark(i) => out.extend_from_slice(&[2, i]),
        PunctuationClass::Symbol(i) => out.extend_from_slice(&[3, i]),
        PunctuationClass::Unclassified => out.push(4),
        PunctuationClass::Graphic {
            curves,
            overlap,
            strokes,
        } => out.extend_from_slice(&[5, u8::from(curves), u8::from(overlap), strokes]),
    }
}

fn put_escaped(out: &mut Vec<u8>, bytes: &[u8]) {
    for &b in bytes {
        if b == 0x00 {
            out.extend_from_slice(&[0x00, 0xFF]);
        } else {
            out.push(b);
        }
    }
    out.extend_from_slice(&[0x00, 0x01]);
}
