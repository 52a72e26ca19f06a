use thiserror::Error;

use crate::{
    context::{Context, KeyVariant, StrayMarks},
    key::{self, SortKey},
};
#[cfg(feature = "simd")]
use simdutf8::basic::from_utf8;

#[derive(Debug, Error)]
pub enum CollateError {
    #[error("input #{index} is not valid UTF-8: {reason}")]
    InvalidUtf8 { index: usize, reason: String },
}

/// Czech collator.
///
/// Cheap to copy and safe to share: all lookup tables are static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Collator {
    ctx: Context,
}

impl Collator {
    /// Product defaults: simple key variant, stray marks kept.
    pub const CZECH: Collator = Collator {
        ctx: Context::CZECH,
    };

    pub fn builder() -> CollatorBuilder {
        CollatorBuilder::default()
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Sort key of `text`. Total over every string.
    #[inline]
    pub fn key(&self, text: &str) -> SortKey {
        key::build(text, &self.ctx)
    }

    /// Sort key of UTF-8 bytes; anything else is rejected, never coerced.
    pub fn key_from_utf8(&self, bytes: &[u8]) -> Result<SortKey, CollateError> {
        let text = validate(bytes, 0)?;
        Ok(self.key(text))
    }

    /// Order-preserving byte form of [`Collator::key`].
    #[inline]
    pub fn bytes_key(&self, text: &str) -> Vec<u8> {
        self.key(text).to_bytes()
    }

    /// Stable sort by key. Every key is computed exactly once.
    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        log::debug!("sorting {} string(s)", items.len());
        items.sort_by_cached_key(|s| self.key(s.as_ref()));
    }

    /// Returns `strings` in Czech order. Equal keys keep their input order.
    pub fn sorted<S, I>(&self, strings: I) -> Vec<S>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut items: Vec<S> = strings.into_iter().collect();
        self.sort(&mut items);
        items
    }

    /// Like [`Collator::sorted`] for raw byte strings.
    ///
    /// Every element is validated before anything is reordered; the first
    /// invalid element fails the whole call.
    pub fn sorted_utf8<B, I>(&self, items: I) -> Result<Vec<B>, CollateError>
    where
        B: AsRef<[u8]>,
        I: IntoIterator<Item = B>,
    {
        let mut keyed = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let key = self.key(validate(item.as_ref(), index)?);
                Ok((key, item))
            })
            .collect::<Result<Vec<_>, CollateError>>()?;
        log::debug!("sorting {} validated string(s)", keyed.len());
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(keyed.into_iter().map(|(_, item)| item).collect())
    }
}

fn validate(bytes: &[u8], index: usize) -> Result<&str, CollateError> {
    #[cfg(feature = "simd")]
    {
        from_utf8(bytes).map_err(|e| CollateError::InvalidUtf8 {
            index,
            reason: e.to_string(),
        })
    }
    #[cfg(not(feature = "simd"))]
    {
        std::str::from_utf8(bytes).map_err(|e| CollateError::InvalidUtf8 {
            index,
            reason: e.to_string(),
        })
    }
}

#[derive(Debug, Default)]
pub struct CollatorBuilder {
    variant: KeyVariant,
    stray_marks: StrayMarks,
}

impl CollatorBuilder {
    pub fn variant(mut self, variant: KeyVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn stray_marks(mut self, stray_marks: StrayMarks) -> Self {
        self.stray_marks = stray_marks;
        self
    }

    pub fn build(self) -> Collator {
        let ctx = Context::new(self.variant, self.stray_marks);
        Collator { ctx }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_czech() {
        assert_eq!(Collator::builder().build(), Collator::CZECH);
        assert_eq!(Collator::default(), Collator::CZECH);
    }

    #[test]
    fn builder_sets_options() {
        let c = Collator::builder()
            .variant(KeyVariant::Extended)
            .stray_marks(StrayMarks::Drop)
            .build();
        assert_eq!(c.context().variant, KeyVariant::Extended);
        assert_eq!(c.context().stray_marks, StrayMarks::Drop);
    }

    #[test]
    fn sorts_known_fixture() {
        let sorted = Collator::CZECH.sorted(["sídliště", "shoda", "schody"]);
        assert_eq!(sorted, ["shoda", "schody", "sídliště"]);
    }

    #[test]
    fn sort_in_place() {
        let mut words = vec!["Ž".to_string(), "3".into(), "8".into(), "A".into()];
        Collator::CZECH.sort(&mut words);
        assert_eq!(words, ["A", "Ž", "3", "8"]);
    }

    #[test]
    fn key_from_utf8_accepts_text() -> Result<(), CollateError> {
        let c = Collator::CZECH;
        assert_eq!(c.key_from_utf8("čáp".as_bytes())?, c.key("čáp"));
        Ok(())
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = Collator::CZECH
            .key_from_utf8(b"hello \xFF world")
            .unwrap_err();
        assert!(matches!(err, CollateError::InvalidUtf8 { index: 0, .. }));
    }

    #[test]
    fn sorted_utf8_is_atomic() {
        let input: Vec<&[u8]> = vec![b"b".as_slice(), b"a", b"\xC3\x28", b"c"];
        let err = Collator::CZECH.sorted_utf8(input.clone()).unwrap_err();
        assert!(matches!(err, CollateError::InvalidUtf8 { index: 2, .. }));
        // the caller's data is untouched
        assert_eq!(input, [b"b".as_slice(), b"a", b"\xC3\x28", b"c"]);
    }

    #[test]
    fn sorted_utf8_orders_bytes() -> Result<(), CollateError> {
        let words: Vec<Vec<u8>> = ["čáp", "cyp", "čupřina"]
            .iter()
            .map(|w| w.as_bytes().to_vec())
            .collect();
        let sorted = Collator::CZECH.sorted_utf8(words)?;
        let sorted: Vec<&str> = sorted
            .iter()
            .map(|b| std::str::from_utf8(b).unwrap())
            .collect();
        assert_eq!(sorted, ["cyp", "čáp", "čupřina"]);
        Ok(())
    }

    #[test]
    fn bytes_key_matches_key_order() {
        let c = Collator::CZECH;
        assert!(c.bytes_key("hrad") < c.bytes_key("chrám"));
        assert_eq!(c.bytes_key("x"), c.key("x").to_bytes());
    }

    #[test]
    fn error_message_names_the_element() {
        let err = Collator::CZECH
            .sorted_utf8([b"ok".as_slice(), b"\xFF"])
            .unwrap_err();
        assert!(err.to_string().starts_with("input #1 is not valid UTF-8"));
    }
}
