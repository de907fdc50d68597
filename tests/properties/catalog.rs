//! Property tests for catalog merging.

use std::collections::HashSet;

use proptest::prelude::*;

use paintrack::domain::entities::catalog::merge;
use paintrack::Paint;

fn paint() -> impl Strategy<Value = Paint> {
    // Small code space so collisions are common
    ("[0-9]{2}\\.[0-9]{1}", "[A-Za-z ]{1,12}").prop_map(|(code, name)| Paint::new(code, name, "#000000"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: no two merged paints share a code.
    #[test]
    fn property_merged_codes_are_unique(
        base in proptest::collection::vec(paint(), 0..20),
        custom in proptest::collection::vec(paint(), 0..20),
    ) {
        let merged = merge(&base, &custom);
        let codes: HashSet<&str> = merged.iter().map(|p| p.code.as_str()).collect();
        prop_assert_eq!(codes.len(), merged.len());
    }

    /// PROPERTY: every input code survives, and the first occurrence wins.
    #[test]
    fn property_first_occurrence_wins(
        base in proptest::collection::vec(paint(), 0..20),
        custom in proptest::collection::vec(paint(), 0..20),
    ) {
        let merged = merge(&base, &custom);
        for candidate in base.iter().chain(custom.iter()) {
            let first = base
                .iter()
                .chain(custom.iter())
                .find(|p| p.code == candidate.code)
                .unwrap();
            let kept = merged.iter().find(|p| p.code == candidate.code);
            prop_assert_eq!(kept, Some(first));
        }
    }

    /// PROPERTY: a base set without duplicates passes through untouched at the front.
    #[test]
    fn property_base_prefix_is_preserved(
        base in proptest::collection::vec(paint(), 0..20),
        custom in proptest::collection::vec(paint(), 0..20),
    ) {
        let mut seen = HashSet::new();
        let unique_base: Vec<Paint> = base.into_iter().filter(|p| seen.insert(p.code.clone())).collect();

        let merged = merge(&unique_base, &custom);
        prop_assert_eq!(&merged[..unique_base.len()], &unique_base[..]);
    }
}
