//! Property tests for jurisdiction resolution.

use proptest::prelude::*;

use mortality_relay::domain::services::{JurisdictionRegistry, JurisdictionResolver};

fn builtin_codes() -> Vec<String> {
    JurisdictionRegistry::builtin()
        .iter()
        .map(|record| record.code().to_string())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: resolving an arbitrary stem never panics.
    #[test]
    fn property_resolve_never_panics(stem in "(?s).{0,128}") {
        let resolver = JurisdictionResolver::new(JurisdictionRegistry::builtin());
        let _ = resolver.resolve_stem(&stem);
    }

    /// PROPERTY: a registered code before the first `_` always wins.
    #[test]
    fn property_prefix_code_wins(
        index in 0usize..58,
        rest in "[A-Za-z0-9_ ]{0,32}",
    ) {
        let codes = builtin_codes();
        let code = &codes[index % codes.len()];
        let resolver = JurisdictionResolver::new(JurisdictionRegistry::builtin());

        let resolved = resolver.resolve_stem(&format!("{}_{}", code, rest));

        prop_assert_eq!(resolved.code(), code.as_str());
    }

    /// PROPERTY: resolution is a pure function of the stem.
    #[test]
    fn property_resolve_is_deterministic(stem in "[A-Za-z_ ]{0,48}") {
        let resolver = JurisdictionResolver::new(JurisdictionRegistry::builtin());
        prop_assert_eq!(resolver.resolve_stem(&stem), resolver.resolve_stem(&stem));
    }
}
