#[cfg(test)]
mod integration_tests {

    use crate::{Collator, KeyVariant, StrayMarks, sorted, sorted_utf8};
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    /// Lists already in Czech order, from the ÚJČ AV ČR handbook, the Czech
    /// Wikipedia article on alphabetical order, and assorted edge cases.
    fn fixtures() -> Vec<Vec<String>> {
        let words = |s: &str| s.split(' ').map(String::from).collect::<Vec<_>>();
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let mut wikipedia = list(&[" ", "-"]);
        wikipedia.extend(words(
            "A B C Č D E F G H Ch I J K L M N O P Q R Ř S Š T U V W X Y Z Ž",
        ));
        wikipedia.extend(words("0 1 2 3 4 5 6 7 8 9"));

        vec![
            wikipedia,
            words("a á b c č d ď e é ě f g h ch i í j k l m n ň o ó p q r ř s š t ť u ú ů v w x y ý z ž"),
            list(&[
                "padá", "sál", "sála", "sálá", "säla", "satira", "si lehá", "si nese", "sílí",
                "šála", "šat", "ta",
            ]),
            list(&["shoda", "schody", "sídliště"]),
            list(&["motýl noční", "motýlek"]),
            list(&["damašek", "Damašek"]),
            list(&["da capo", "ďábel", "dabing", "ucho", "úchop", "uchopit"]),
            list(&["kanon", "kanón", "kaňon", "kánon"]),
            words("á ď é ě í ň ó ť ú ů ý"),
            words("à â ä ç è ê ĺ ľ ł ô ö ŕ ü ż"),
            words("C Ç °C"),
            words("ZZ Z-2 Ž 3 3N 3no 5A 8"),
            "@&€£§%‰$".chars().map(String::from).collect(),
            list(&[
                "cyp", "Cyp", "CYP", "čáp", "Čáp", "ČÁP", "čupřina", "Čupřina", "ČUPŘINA",
            ]),
            list(&[
                "goa uld", "goa xyz", "goa-uld", "goauld", "goàuld", "goa'uld", "goa-xyz",
            ]),
            list(&["mac", "mác", "mah", "máh", "mach", "mách", "máchl", "moh"]),
            words("ȧ á ā à â ǎ ã ă ȃ å ä a\u{030B} ȁ ą a' °a"),
            list(&["", " ", "-", "'"]),
            list(&["è", "ê", "ề"]),
            list(&["a\n b", "a \nb", "a\nb", "a b", "ab"]),
            list(&["Ļ", "Ł", "M", "Ơ", "Ø", "P"]),
        ]
    }

    #[test]
    fn fixtures_sort_from_reversed_input() {
        for expected in fixtures() {
            let result = sorted(expected.iter().rev().cloned());
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn fixtures_sort_from_shuffled_input() {
        let mut rng = StdRng::seed_from_u64(0x0C5E);
        for expected in fixtures() {
            for _ in 0..8 {
                let mut shuffled = expected.clone();
                shuffled.shuffle(&mut rng);
                assert_eq!(sorted(shuffled), expected);
            }
        }
    }

    #[test]
    fn fixtures_satisfy_key_contract() {
        let all = fixtures().concat();
        let samples: Vec<&str> = all.iter().map(String::as_str).collect();
        crate::assert_key_contract!(Collator::CZECH, &samples);
    }

    #[test]
    fn key_contract_holds_for_every_configuration() {
        let samples = [
            "", " ", "-", "'", "a'", "'a", "°", "a", "A", "ch", "CH", "č", "3", "-3", "½", "3½",
            "a-b", "a b", "a\nb", "a\n\nb", "@", "#", "~", "¿", "§", "ł", "Ø", "ﬁ", "²", "Ⅻ",
            "\u{0301}", "a\u{0301}\u{030C}", "a\u{030C}\u{0301}", "a\0", "\u{0F33}",
        ];
        for variant in [KeyVariant::Simple, KeyVariant::Extended] {
            for stray_marks in [StrayMarks::Keep, StrayMarks::Drop] {
                let collator = Collator::builder()
                    .variant(variant)
                    .stray_marks(stray_marks)
                    .build();
                crate::assert_key_contract!(collator, &samples);
            }
        }
    }

    #[test]
    fn sorts_bytes_like_strings() {
        for expected in fixtures() {
            let reversed: Vec<&[u8]> = expected.iter().rev().map(|s| s.as_bytes()).collect();
            let result = sorted_utf8(reversed).unwrap();
            let expected: Vec<&[u8]> = expected.iter().map(|s| s.as_bytes()).collect();
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn extended_variant_keeps_letter_order() {
        let extended = Collator::builder().variant(KeyVariant::Extended).build();
        for expected in [
            vec!["shoda", "schody", "sídliště"],
            vec!["cyp", "Cyp", "čáp", "Čáp", "čupřina"],
            vec!["kanon", "kanón", "kaňon", "kánon"],
        ] {
            let reversed: Vec<&str> = expected.iter().rev().copied().collect();
            assert_eq!(extended.sorted(reversed), expected);
        }
    }

    #[test]
    fn compatibility_forms_sort_with_their_decomposition() {
        // ﬁ decomposes to "fi", ² to "2"
        assert_eq!(sorted(["fj", "ﬁ", "fh"]), ["fh", "ﬁ", "fj"]);
        assert_eq!(sorted(["3", "²", "1"]), ["1", "²", "3"]);
    }

    #[test]
    fn digits_compare_one_at_a_time() {
        assert_eq!(sorted(["10", "9", "2", "100"]), ["10", "100", "2", "9"]);
        // ½ decomposes to 1, fraction slash, 2
        assert_eq!(sorted(["2", "½", "1"]), ["1", "½", "2"]);
    }
}
