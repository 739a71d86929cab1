/// Reference allele assumed for any chromosome copy without a detected variant.
pub const WILDTYPE_ALLELE: &str = "*1";

/// Allele contributed by a variant without a star-allele assignment.
pub const UNKNOWN_ALLELE: &str = "*?";

pub const DIPLOTYPE_SEPARATOR: char = '/';

/// Terminal phenotype when no table resolves a diplotype.
pub const INDETERMINATE: &str = "Indeterminate";

// presence model labels
pub const POSITIVE: &str = "Positive";
pub const NEGATIVE: &str = "Negative";
pub const WILDTYPE_DIPLOTYPE: &str = "Wildtype";

pub const DEFAULT_ACTIVITY_SCORE: f64 = 1.0;
