/// Confidence of the default assessment when no rule matched.
pub const NO_MATCH_CONFIDENCE: f64 = 0.70;

/// Confidence of an assessment for a drug without rules.
pub const UNKNOWN_DRUG_CONFIDENCE: f64 = 0.0;

/// Placeholder for a gene, phenotype or diplotype that is not known.
pub const UNKNOWN: &str = "Unknown";

// reported for the primary gene of an unmatched drug when the profile has no entry
pub const PLACEHOLDER_PHENOTYPE: &str = "Normal Metabolizer";
pub const PLACEHOLDER_DIPLOTYPE: &str = "*1/*1";

pub const NO_MATCH_ACTION: &str =
    "No pharmacogenomic risk factors identified. Use standard prescribing information.";
pub const NO_MATCH_GUIDELINE: &str = "CPIC / DPWG guidelines consulted";
pub const UNKNOWN_DRUG_GUIDELINE: &str = "No CPIC/DPWG guideline available";
