use crate::{Collator, SortKey};

/// Assert that a collator satisfies the key contracts on a set of samples.
///
/// ### The contracts:
/// 1. `keys_are_total` → exactly one of `<`, `==`, `>` holds for every pair
/// 2. `equal_keys_iff_equal_input` → the fallback levels make the order strict
/// 3. `byte_keys_agree` → `to_bytes()` orders exactly like the structured key
/// 4. `sort_is_idempotent` → sorting sorted output changes nothing
/// 5. `sort_is_stable` → duplicates keep their input order
///
/// Failure of any contract is a bug in the key, not in the caller.
#[macro_export]
macro_rules! assert_key_contract {
    ($collator:expr, $samples:expr) => {
        $crate::testing::key_contract::keys_are_total($collator, $samples);
        $crate::testing::key_contract::equal_keys_iff_equal_input($collator, $samples);
        $crate::testing::key_contract::byte_keys_agree($collator, $samples);
        $crate::testing::key_contract::sort_is_idempotent($collator, $samples);
        $crate::testing::key_contract::sort_is_stable($collator, $samples);
    };
}

fn keys(collator: Collator, samples: &[&str]) -> Vec<SortKey> {
    samples.iter().map(|s| collator.key(s)).collect()
}

pub fn keys_are_total(collator: Collator, samples: &[&str]) {
    let keys = keys(collator, samples);
    for (a, ka) in samples.iter().zip(&keys) {
        for (b, kb) in samples.iter().zip(&keys) {
            let holds = [ka < kb, ka == kb, ka > kb];
            assert_eq!(
                holds.iter().filter(|&&h| h).count(),
                1,
                "trichotomy violated for {a:?} vs {b:?}"
            );
            assert_eq!(ka.cmp(kb), kb.cmp(ka).reverse(), "asymmetric for {a:?} vs {b:?}");
        }
    }
}

pub fn equal_keys_iff_equal_input(collator: Collator, samples: &[&str]) {
    let keys = keys(collator, samples);
    for (a, ka) in samples.iter().zip(&keys) {
        for (b, kb) in samples.iter().zip(&keys) {
            assert_eq!(
                ka == kb,
                a == b,
                "key equality disagrees with input equality for {a:?} vs {b:?}"
            );
        }
    }
}

pub fn byte_keys_agree(collator: Collator, samples: &[&str]) {
    let keys = keys(collator, samples);
    let bytes: Vec<Vec<u8>> = keys.iter().map(SortKey::to_bytes).collect();
    for i in 0..samples.len() {
        for j in 0..samples.len() {
            assert_eq!(
                bytes[i].cmp(&bytes[j]),
                keys[i].cmp(&keys[j]),
                "byte key order disagrees for {:?} vs {:?}",
                samples[i],
                samples[j]
            );
        }
    }
}

pub fn sort_is_idempotent(collator: Collator, samples: &[&str]) {
    let once = collator.sorted(samples.iter().copied());
    let twice = collator.sorted(once.iter().copied());
    assert_eq!(once, twice, "sorting is not idempotent");
}

pub fn sort_is_stable(collator: Collator, samples: &[&str]) {
    // Tag each duplicate with its position; only the tag may differ.
    let tagged: Vec<(usize, &str)> = samples
        .iter()
        .chain(samples.iter())
        .copied()
        .enumerate()
        .collect();
    let mut sorted = tagged.clone();
    sorted.sort_by_cached_key(|(_, s)| collator.key(s));
    for pair in sorted.windows(2) {
        let ((i, a), (j, b)) = (pair[0], pair[1]);
        if a == b {
            assert!(i < j, "equal inputs {a:?} reordered");
        }
    }
    let strings: Vec<&str> = sorted.iter().map(|&(_, s)| s).collect();
    assert_eq!(
        strings,
        collator.sorted(tagged.iter().map(|&(_, s)| s)),
        "sorted() disagrees with a stable sort by key"
    );
}
