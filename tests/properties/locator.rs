//! Property tests for candidate discovery.

use std::collections::BTreeSet;
use std::fs;

use proptest::prelude::*;

use mortality_relay::domain::ports::FileLocator;
use mortality_relay::domain::value_objects::FilePattern;
use mortality_relay::infrastructure::FsLocator;

fn file_names() -> impl Strategy<Value = BTreeSet<String>> {
    let name = proptest::string::string_regex("[A-Z]{2}_[a-z]{1,8}\\.(csv|txt)").unwrap();
    proptest::collection::btree_set(name, 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: overlapping patterns and repeated roots never yield duplicates,
    /// and the result is sorted and repeatable.
    #[test]
    fn property_locate_is_unique_sorted_and_idempotent(names in file_names()) {
        let dir = tempfile::tempdir().unwrap();
        for name in &names {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let roots = vec![dir.path().to_path_buf(), dir.path().join(".")];
        let patterns = FilePattern::parse_all(&["*.csv", "*_*.csv", "??_*"]).unwrap();

        let first = FsLocator.locate(&roots, &patterns).unwrap();
        let second = FsLocator.locate(&roots, &patterns).unwrap();

        let paths: Vec<_> = first.candidates.iter().map(|c| c.path().to_path_buf()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(&paths, &sorted);
        prop_assert_eq!(paths.len(), names.len());
        prop_assert_eq!(first, second);
    }
}
