//! Property tests for the transliterator.

use proptest::prelude::*;
use roster_core::transliterate;

proptest! {
    #[test]
    fn total_over_arbitrary_unicode(s in any::<String>()) {
        // Must never panic, whatever the input.
        let _ = transliterate(&s);
    }

    #[test]
    fn a_second_pass_is_the_identity(s in any::<String>()) {
        let once = transliterate(&s);
        let twice = transliterate(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn ascii_input_passes_through_unchanged(s in "[ -~]*") {
        prop_assert_eq!(transliterate(&s), s);
    }

    #[test]
    fn output_never_contains_mapped_characters(s in "\\PC*") {
        let out = transliterate(&s);
        let mapped: Vec<char> = roster_core::diacritic_mappings().map(|(ch, _)| ch).collect();
        prop_assert!(out.chars().all(|ch| !mapped.contains(&ch)));
    }
}
