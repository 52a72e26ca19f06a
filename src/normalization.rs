//! Compatibility decomposition (NFKD) of collation input.

use icu_normalizer::DecomposingNormalizerBorrowed;
use std::{borrow::Cow, sync::LazyLock};

// ── ICU4X ──
static ICU4X_NFKD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfkd);

/// NFKD form of `text`. Borrows when the input is already decomposed.
#[inline]
pub fn nfkd(text: &str) -> Cow<'_, str> {
    ICU4X_NFKD.normalize(text)
}

/// The scanner's input: NFKD with trailing whitespace removed.
///
/// Whitespace here is Unicode `White_Space` plus the information separators
/// U+001C..=U+001F. This is also the first fallback level of every key.
pub fn prepare(text: &str) -> String {
    match nfkd(text) {
        Cow::Borrowed(s) => trim_trailing(s).to_owned(),
        Cow::Owned(mut s) => {
            let len = trim_trailing(&s).len();
            s.truncate(len);
            s
        }
    }
}

#[inline]
fn trim_trailing(s: &str) -> &str {
    s.trim_end_matches(|c: char| c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c))
}
