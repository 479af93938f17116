//! Jurisdiction registry
//!
//! The single authoritative table of jurisdictions the scraper covers. It is
//! built once at startup and handed to whoever needs it; nothing mutates it
//! afterwards.

use std::collections::BTreeMap;

use crate::domain::entities::{Jurisdiction, JurisdictionRecord};

/// (code, display name, external location id)
const JURISDICTIONS: &[(&str, &str, &str)] = &[
    ("AL", "Alabama", "state_3"),
    ("AK", "Alaska", "state_2"),
    ("AZ", "Arizona", "state_5"),
    ("AR", "Arkansas", "state_4"),
    ("CA", "California", "state_6"),
    ("CO", "Colorado", "state_7"),
    ("CT", "Connecticut", "state_8"),
    ("DE", "Delaware", "state_10"),
    ("DC", "District of Columbia", "state_9"),
    ("FL", "Florida", "state_11"),
    ("GA", "Georgia", "state_12"),
    ("HI", "Hawaii", "state_13"),
    ("ID", "Idaho", "state_15"),
    ("IL", "Illinois", "state_16"),
    ("IN", "Indiana", "state_17"),
    ("IA", "Iowa", "state_14"),
    ("KS", "Kansas", "state_18"),
    ("KY", "Kentucky", "state_19"),
    ("LA", "Louisiana", "state_20"),
    ("ME", "Maine", "state_22"),
    ("MD", "Maryland", "state_23"),
    ("MA", "Massachusetts", "state_21"),
    ("MI", "Michigan", "state_24"),
    ("MN", "Minnesota", "state_25"),
    ("MS", "Mississippi", "state_27"),
    ("MO", "Missouri", "state_26"),
    ("MT", "Montana", "state_28"),
    ("NE", "Nebraska", "state_31"),
    ("NV", "Nevada", "state_35"),
    ("NH", "New Hampshire", "state_32"),
    ("NJ", "New Jersey", "state_33"),
    ("NM", "New Mexico", "state_34"),
    ("NY", "New York", "state_36"),
    ("NC", "North Carolina", "state_29"),
    ("ND", "North Dakota", "state_30"),
    ("OH", "Ohio", "state_37"),
    ("OK", "Oklahoma", "state_38"),
    ("OR", "Oregon", "state_39"),
    ("PA", "Pennsylvania", "state_40"),
    ("PR", "Puerto Rico", "state_41"),
    ("RI", "Rhode Island", "state_42"),
    ("SC", "South Carolina", "state_43"),
    ("SD", "South Dakota", "state_44"),
    ("TN", "Tennessee", "state_45"),
    ("TX", "Texas", "state_46"),
    ("UT", "Utah", "state_47"),
    ("VT", "Vermont", "state_49"),
    ("VI", "Virgin Islands, U.S.", "country_273"),
    ("VA", "Virginia", "state_48"),
    ("WA", "Washington", "state_50"),
    ("WV", "West Virginia", "state_52"),
    ("WI", "Wisconsin", "state_51"),
    ("WY", "Wyoming", "state_53"),
    ("NYC", "New York City", "state_56"),
    ("AS", "American Samoa", "state_57"),
    ("GU", "Guam", "state_58"),
    ("MP", "Northern Mariana Islands", "state_59"),
    ("UM", "United States Minor Outlying Islands", "state_61"),
];

/// Immutable code → record table.
#[derive(Debug, Clone, Default)]
pub struct JurisdictionRegistry {
    by_code: BTreeMap<String, JurisdictionRecord>,
}

impl JurisdictionRegistry {
    /// Registry with the embedded table
    pub fn builtin() -> Self {
        Self::from_records(
            JURISDICTIONS
                .iter()
                .map(|(code, name, location)| JurisdictionRecord::new(*code, *name, *location)),
        )
    }

    /// Build from arbitrary records. The first record wins on a repeated code.
    pub fn from_records(records: impl IntoIterator<Item = JurisdictionRecord>) -> Self {
        let mut by_code = BTreeMap::new();
        for record in records {
            by_code
                .entry(record.code().to_string())
                .or_insert(record);
        }
        Self { by_code }
    }

    /// Case-sensitive exact lookup. A miss is `Unknown`, never an error.
    pub fn lookup(&self, code: &str) -> Jurisdiction {
        self.get(code).cloned().into()
    }

    pub fn get(&self, code: &str) -> Option<&JurisdictionRecord> {
        self.by_code.get(code)
    }

    /// Record whose normalized display name equals `normalized`
    pub fn lookup_by_name(&self, normalized: &str) -> Option<&JurisdictionRecord> {
        self.by_code
            .values()
            .find(|record| record.normalized_name() == normalized)
    }

    /// Records in code order
    pub fn iter(&self) -> impl Iterator<Item = &JurisdictionRecord> {
        self.by_code.values()
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
