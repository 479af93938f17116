//! Jurisdiction resolver
//!
//! Maps an export's file name to a jurisdiction. The scraper has used several
//! naming schemes over time (`FL_20251118_210521_us_recent_deaths.csv`,
//! `texas_deaths.csv`, ...), so resolution is an ordered list of strategies
//! where the first hit wins. New strategies are appended at the end.

use tracing::{debug, info};

use crate::domain::entities::{CandidateFile, Jurisdiction, JurisdictionRecord, ResolvedFile};

use super::registry::JurisdictionRegistry;

/// One filename heuristic.
pub trait ResolutionStrategy: Send + Sync {
    /// Name of this heuristic (for logging)
    fn name(&self) -> &'static str;

    /// Try to resolve a file stem. `None` passes to the next strategy.
    fn resolve(&self, stem: &str, registry: &JurisdictionRegistry) -> Option<JurisdictionRecord>;
}

/// Treats the first delimited segment of the stem as a jurisdiction code.
///
/// A stem without the delimiter is looked up whole.
#[derive(Debug, Clone, Copy)]
pub struct PrefixCodeStrategy {
    delimiter: char,
}

impl PrefixCodeStrategy {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Default for PrefixCodeStrategy {
    fn default() -> Self {
        Self::new('_')
    }
}

impl ResolutionStrategy for PrefixCodeStrategy {
    fn name(&self) -> &'static str {
        "prefix-code"
    }

    fn resolve(&self, stem: &str, registry: &JurisdictionRegistry) -> Option<JurisdictionRecord> {
        let code = stem.split(self.delimiter).next().unwrap_or(stem);
        registry.get(code).cloned()
    }
}

/// Looks for a jurisdiction's normalized name anywhere in the lower-cased stem.
///
/// The longest contained name wins, so `westvirginia` is West Virginia and
/// not Virginia, and `arkansas` is not Kansas.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringNameStrategy;

impl ResolutionStrategy for SubstringNameStrategy {
    fn name(&self) -> &'static str {
        "substring-name"
    }

    fn resolve(&self, stem: &str, registry: &JurisdictionRegistry) -> Option<JurisdictionRecord> {
        let haystack = stem.to_lowercase();
        registry
            .iter()
            .map(|record| (record.normalized_name(), record))
            .filter(|(name, _)| !name.is_empty() && haystack.contains(name.as_str()))
            .max_by_key(|(name, _)| name.len())
            .map(|(_, record)| record.clone())
    }
}

/// Ordered strategy list over an owned registry.
pub struct JurisdictionResolver {
    registry: JurisdictionRegistry,
    strategies: Vec<Box<dyn ResolutionStrategy>>,
}

impl JurisdictionResolver {
    /// Resolver with the standard strategies: prefix code, then substring name
    pub fn new(registry: JurisdictionRegistry) -> Self {
        Self::with_strategies(
            registry,
            vec![
                Box::new(PrefixCodeStrategy::default()),
                Box::new(SubstringNameStrategy),
            ],
        )
    }

    pub fn with_strategies(
        registry: JurisdictionRegistry,
        strategies: Vec<Box<dyn ResolutionStrategy>>,
    ) -> Self {
        Self {
            registry,
            strategies,
        }
    }

    /// Append a strategy after the existing ones
    pub fn push_strategy(&mut self, strategy: Box<dyn ResolutionStrategy>) {
        self.strategies.push(strategy);
    }

    pub fn registry(&self) -> &JurisdictionRegistry {
        &self.registry
    }

    /// Strategy names in evaluation order
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Resolve a bare file stem
    pub fn resolve_stem(&self, stem: &str) -> Jurisdiction {
        for strategy in &self.strategies {
            if let Some(record) = strategy.resolve(stem, &self.registry) {
                debug!(stem, strategy = strategy.name(), code = record.code(), "resolved jurisdiction");
                return Jurisdiction::Known(record);
            }
        }
        info!(stem, "no jurisdiction matched, classifying as Unknown");
        Jurisdiction::Unknown
    }

    pub fn resolve(&self, candidate: CandidateFile) -> ResolvedFile {
        let jurisdiction = self.resolve_stem(&candidate.stem());
        ResolvedFile::new(candidate, jurisdiction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> JurisdictionResolver {
        JurisdictionResolver::new(JurisdictionRegistry::builtin())
    }

    #[test]
    fn prefix_code_resolves_timestamped_export() {
        let resolved = resolver().resolve(CandidateFile::new(
            "/data/FL_20251118_210521_us_recent_deaths.csv",
            "*_us_recent_deaths.csv",
        ));
        assert_eq!(resolved.jurisdiction().label(), "Florida");
    }

    #[test]
    fn prefix_code_resolves_short_name() {
        assert_eq!(resolver().resolve_stem("TX_deaths").label(), "Texas");
    }

    #[test]
    fn stem_without_delimiter_is_used_whole() {
        assert_eq!(resolver().resolve_stem("NYC").label(), "New York City");
        assert_eq!(resolver().resolve_stem("mysteryexport"), Jurisdiction::Unknown);
    }

    #[test]
    fn unknown_prefix_falls_through_to_substring() {
        assert_eq!(resolver().resolve_stem("deaths_ohio").label(), "Ohio");
        assert_eq!(
            resolver().resolve_stem("us_recent_deaths_NewHampshire").label(),
            "New Hampshire"
        );
    }

    #[test]
    fn substring_prefers_longest_name() {
        assert_eq!(
            resolver().resolve_stem("westvirginia_deaths").label(),
            "West Virginia"
        );
        assert_eq!(resolver().resolve_stem("arkansas_mortality").label(), "Arkansas");
        assert_eq!(
            resolver().resolve_stem("mortality_newyorkcity").label(),
            "New York City"
        );
    }

    #[test]
    fn mystery_export_is_unknown() {
        let resolved = resolver().resolve(CandidateFile::new("/data/mystery_export.csv", "*.csv"));
        assert_eq!(resolved.jurisdiction(), &Jurisdiction::Unknown);
    }

    #[test]
    fn prefix_lookup_is_case_sensitive() {
        // "fl" is not a code, and the stem contains no jurisdiction name
        assert_eq!(resolver().resolve_stem("fl_20251118"), Jurisdiction::Unknown);
    }

    #[test]
    fn empty_stem_does_not_panic() {
        assert_eq!(resolver().resolve_stem(""), Jurisdiction::Unknown);
    }

    #[test]
    fn pushed_strategy_runs_last() {
        struct Always;
        impl ResolutionStrategy for Always {
            fn name(&self) -> &'static str {
                "always-guam"
            }
            fn resolve(&self, _: &str, registry: &JurisdictionRegistry) -> Option<JurisdictionRecord> {
                registry.get("GU").cloned()
            }
        }

        let mut resolver = resolver();
        resolver.push_strategy(Box::new(Always));

        assert_eq!(
            resolver.strategy_names(),
            vec!["prefix-code", "substring-name", "always-guam"]
        );
        assert_eq!(resolver.resolve_stem("TX_deaths").label(), "Texas");
        assert_eq!(resolver.resolve_stem("mystery_export").label(), "Guam");
    }

    #[test]
    fn custom_delimiter() {
        let strategy = PrefixCodeStrategy::new('-');
        let registry = JurisdictionRegistry::builtin();
        assert_eq!(
            strategy.resolve("CA-2025-deaths", &registry).map(|r| r.code().to_string()),
            Some("CA".to_string())
        );
    }
}
