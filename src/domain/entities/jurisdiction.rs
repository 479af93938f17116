//! Jurisdiction entity
//!
//! A state, territory or city that the scraper produces mortality exports for.

use std::fmt;

/// One row of the jurisdiction table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JurisdictionRecord {
    code: String,
    display_name: String,
    external_location_id: String,
}

impl JurisdictionRecord {
    pub fn new(
        code: impl Into<String>,
        display_name: impl Into<String>,
        external_location_id: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            external_location_id: external_location_id.into(),
        }
    }

    /// Short code, e.g. `FL` or `NYC`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Canonical name, e.g. `Florida`
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Location id used by the downstream recorder, e.g. `state_11`
    pub fn external_location_id(&self) -> &str {
        &self.external_location_id
    }

    /// Display name lower-cased with whitespace removed.
    ///
    /// `"New Hampshire"` becomes `"newhampshire"`, which is how the name
    /// shows up inside scraper filenames.
    pub fn normalized_name(&self) -> String {
        self.display_name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }
}

/// Jurisdiction attached to a resolved file.
///
/// Never absent: a file nobody recognises carries `Unknown`, which is still a
/// valid thing to dispatch and report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Jurisdiction {
    Known(JurisdictionRecord),
    #[default]
    Unknown,
}

impl Jurisdiction {
    pub fn is_known(&self) -> bool {
        matches!(self, Jurisdiction::Known(_))
    }

    pub fn record(&self) -> Option<&JurisdictionRecord> {
        match self {
            Jurisdiction::Known(record) => Some(record),
            Jurisdiction::Unknown => None,
        }
    }

    /// Name for reports: the display name, or `Unknown`
    pub fn label(&self) -> &str {
        match self {
            Jurisdiction::Known(record) => record.display_name(),
            Jurisdiction::Unknown => "Unknown",
        }
    }

    /// Code for reports: the short code, or `UNK`
    pub fn code(&self) -> &str {
        match self {
            Jurisdiction::Known(record) => record.code(),
            Jurisdiction::Unknown => "UNK",
        }
    }
}

impl From<Option<JurisdictionRecord>> for Jurisdiction {
    fn from(record: Option<JurisdictionRecord>) -> Self {
        record.map(Jurisdiction::Known).unwrap_or_default()
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jurisdiction::Known(record) => write!(f, "{} ({})", record.display_name(), record.code()),
            Jurisdiction::Unknown => f.write_str("Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_name_strips_spaces_and_lowercases() {
        let record = JurisdictionRecord::new("NH", "New Hampshire", "state_32");
        assert_eq!(record.normalized_name(), "newhampshire");
    }

    #[test]
    fn normalized_name_keeps_punctuation() {
        let record = JurisdictionRecord::new("VI", "Virgin Islands, U.S.", "country_273");
        assert_eq!(record.normalized_name(), "virginislands,u.s.");
    }

    #[test]
    fn unknown_has_stable_labels() {
        let unknown = Jurisdiction::Unknown;
        assert_eq!(unknown.label(), "Unknown");
        assert_eq!(unknown.code(), "UNK");
        assert!(unknown.record().is_none());
        assert_eq!(unknown.to_string(), "Unknown");
    }

    #[test]
    fn known_displays_name_and_code() {
        let known = Jurisdiction::Known(JurisdictionRecord::new("TX", "Texas", "state_46"));
        assert!(known.is_known());
        assert_eq!(known.to_string(), "Texas (TX)");
    }

    #[test]
    fn from_none_is_unknown() {
        assert_eq!(Jurisdiction::from(None), Jurisdiction::Unknown);
    }
}
