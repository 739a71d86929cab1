/// Prefix of meta-information lines.
pub const META_PREFIX: &str = "##";

/// Prefix of the single column-header line.
pub const HEADER_PREFIX: &str = "#CHROM";

/// CHROM, POS, ID, REF, ALT, QUAL, FILTER, INFO
pub const MIN_DATA_FIELDS: usize = 8;

/// Column holding the sample name in the header line.
pub const SAMPLE_COLUMN: usize = 9;

pub const GENOTYPE_KEY: &str = "GT";
pub const MISSING_VALUE: &str = ".";
pub const INFO_GENE_KEYS: &[&str] = &["GENE", "gene"];
