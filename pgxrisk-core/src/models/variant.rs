use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::consts::UNKNOWN_STAR_ALLELE;

///
/// Zygosity of a single genotype call.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zygosity {
    HomozygousRef,
    Heterozygous,
    HomozygousAlt,
    Missing,
    Unknown,
}

impl Zygosity {
    ///
    /// Derive the zygosity from an unphased genotype such as `0/1`.
    ///
    /// Phased separators must already be normalized to `/`. Anything that is not exactly
    /// two alleles is `Unknown`; a `.` on either side is `Missing`.
    ///
    pub fn from_genotype(genotype: Option<&str>) -> Self {
        let Some(gt) = genotype.filter(|gt| !gt.is_empty()) else {
            return Zygosity::Unknown;
        };

        let alleles: Vec<&str> = gt.split('/').collect();
        let [first, second] = alleles.as_slice() else {
            return Zygosity::Unknown;
        };

        if *first == "." || *second == "." {
            Zygosity::Missing
        } else if *first == "0" && *second == "0" {
            Zygosity::HomozygousRef
        } else if first == second {
            Zygosity::HomozygousAlt
        } else {
            Zygosity::Heterozygous
        }
    }

    /// True for calls that carry at least one alternate allele.
    pub fn carries_alt(&self) -> bool {
        matches!(self, Zygosity::Heterozygous | Zygosity::HomozygousAlt)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zygosity::HomozygousRef => "homozygous_ref",
            Zygosity::Heterozygous => "heterozygous",
            Zygosity::HomozygousAlt => "homozygous_alt",
            Zygosity::Missing => "missing",
            Zygosity::Unknown => "unknown",
        }
    }
}

impl Display for Zygosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// Variant struct, one pharmacogenomic call retained from a variant file.
///
/// Created once by the extractor and never modified afterwards.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Normalized chromosome, always `chr`-prefixed.
    pub chrom: String,
    pub position: u64,
    /// Reference SNP identifier, `None` when the file had `.`.
    pub rsid: Option<String>,
    pub ref_allele: String,
    pub alt_allele: String,
    pub gene: String,
    /// Unphased genotype (`0/1`), `None` when the GT field is absent.
    pub genotype: Option<String>,
    pub zygosity: Zygosity,
    pub star_allele: Option<String>,
    pub quality: String,
    pub filter: String,
}

impl Variant {
    ///
    /// Star-allele label, or `unknown` when the rsID has no assignment.
    ///
    pub fn star_allele_label(&self) -> &str {
        self.star_allele.as_deref().unwrap_or(UNKNOWN_STAR_ALLELE)
    }

    ///
    /// Get a compact string for the variant, e.g. `chr22:42524947 rs3892097 C>T`
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}:{} {} {}>{}",
            self.chrom,
            self.position,
            self.rsid.as_deref().unwrap_or("."),
            self.ref_allele,
            self.alt_allele
        )
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn variant() -> Variant {
        Variant {
            chrom: "chr22".to_string(),
            position: 42524947,
            rsid: Some("rs3892097".to_string()),
            ref_allele: "C".to_string(),
            alt_allele: "T".to_string(),
            gene: "CYP2D6".to_string(),
            genotype: Some("1/1".to_string()),
            zygosity: Zygosity::HomozygousAlt,
            star_allele: Some("*4".to_string()),
            quality: "50".to_string(),
            filter: "PASS".to_string(),
        }
    }

    #[rstest]
    #[case("1/1", Zygosity::HomozygousAlt)]
    #[case("2/2", Zygosity::HomozygousAlt)]
    #[case("0/1", Zygosity::Heterozygous)]
    #[case("1/0", Zygosity::Heterozygous)]
    #[case("1/2", Zygosity::Heterozygous)]
    #[case("0/0", Zygosity::HomozygousRef)]
    #[case("./.", Zygosity::Missing)]
    #[case("./1", Zygosity::Missing)]
    #[case("1", Zygosity::Unknown)]
    #[case("0/1/1", Zygosity::Unknown)]
    #[case("", Zygosity::Unknown)]
    fn test_zygosity_from_genotype(#[case] gt: &str, #[case] expected: Zygosity) {
        assert_eq!(Zygosity::from_genotype(Some(gt)), expected);
    }

    #[rstest]
    fn test_zygosity_without_genotype() {
        assert_eq!(Zygosity::from_genotype(None), Zygosity::Unknown);
    }

    #[rstest]
    fn test_carries_alt() {
        assert!(Zygosity::Heterozygous.carries_alt());
        assert!(Zygosity::HomozygousAlt.carries_alt());
        assert!(!Zygosity::Missing.carries_alt());
        assert!(!Zygosity::HomozygousRef.carries_alt());
    }

    #[rstest]
    fn test_zygosity_serializes_snake_case() {
        let json = serde_json::to_string(&Zygosity::HomozygousAlt).unwrap();
        assert_eq!(json, "\"homozygous_alt\"");
    }

    #[rstest]
    fn test_variant_as_string(variant: Variant) {
        assert_eq!(variant.as_string(), "chr22:42524947 rs3892097 C>T");
    }

    #[rstest]
    fn test_star_allele_label(mut variant: Variant) {
        assert_eq!(variant.star_allele_label(), "*4");
        variant.star_allele = None;
        assert_eq!(variant.star_allele_label(), "unknown");
    }
}
