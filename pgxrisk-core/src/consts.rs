// panel gene symbols
pub const CYP2D6: &str = "CYP2D6";
pub const CYP2C19: &str = "CYP2C19";
pub const CYP2C9: &str = "CYP2C9";
pub const SLCO1B1: &str = "SLCO1B1";
pub const TPMT: &str = "TPMT";
pub const DPYD: &str = "DPYD";
pub const HLA_B: &str = "HLA-B";
pub const HLA_A: &str = "HLA-A";

/// Label stored for variants whose rsID has no star-allele assignment.
pub const UNKNOWN_STAR_ALLELE: &str = "unknown";

/// Sample identifier used when neither the header nor the file name provide one.
pub const UNKNOWN_SAMPLE_ID: &str = "PATIENT_UNKNOWN";

pub const CHROM_PREFIX: &str = "chr";
