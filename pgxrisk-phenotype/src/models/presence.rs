use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use pgxrisk_core::{PhenotypeEntry, Variant};

use crate::consts::{NEGATIVE, POSITIVE, WILDTYPE_DIPLOTYPE};

///
/// PresenceModel struct, positive/negative calling from tag SNPs.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresenceModel {
    /// Tag sets, checked in order. The first set with a carried SNP decides the diplotype.
    pub tags: Vec<PresenceTag>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresenceTag {
    /// Diplotype label reported when the tag matches, e.g. `*57:01 Positive`.
    pub diplotype: String,
    pub rsids: Vec<String>,
}

impl PresenceModel {
    pub fn classify(&self, gene: &str, variants: &[Variant]) -> PhenotypeEntry {
        let carried: FxHashSet<&str> = variants
            .iter()
            .filter(|v| v.zygosity.carries_alt())
            .filter_map(|v| v.rsid.as_deref())
            .collect();

        let matched = self
            .tags
            .iter()
            .find(|tag| tag.rsids.iter().any(|rsid| carried.contains(rsid.as_str())));

        match matched {
            Some(tag) => PhenotypeEntry::new(gene, &tag.diplotype, POSITIVE, variants),
            None => PhenotypeEntry::new(gene, WILDTYPE_DIPLOTYPE, NEGATIVE, variants),
        }
    }

    ///
    /// Entry for a gene with no variant data at all.
    ///
    pub fn default_entry(&self, gene: &str) -> PhenotypeEntry {
        PhenotypeEntry::new(gene, WILDTYPE_DIPLOTYPE, NEGATIVE, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgxrisk_core::Zygosity;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn variant(rsid: &str, zygosity: Zygosity) -> Variant {
        Variant {
            chrom: "chr6".to_string(),
            position: 31464003,
            rsid: Some(rsid.to_string()),
            ref_allele: "T".to_string(),
            alt_allele: "G".to_string(),
            gene: "HLA-B".to_string(),
            genotype: None,
            zygosity,
            star_allele: None,
            quality: ".".to_string(),
            filter: "PASS".to_string(),
        }
    }

    #[fixture]
    fn model() -> PresenceModel {
        PresenceModel {
            tags: vec![
                PresenceTag {
                    diplotype: "*57:01 Positive".to_string(),
                    rsids: vec!["rs2395029".to_string(), "rs9264942".to_string()],
                },
                PresenceTag {
                    diplotype: "*15:02 Positive".to_string(),
                    rsids: vec!["rs3909184".to_string(), "rs2844682".to_string()],
                },
            ],
        }
    }

    #[rstest]
    #[case(&[("rs9264942", Zygosity::Heterozygous)], "*57:01 Positive", "Positive")]
    #[case(&[("rs2844682", Zygosity::HomozygousAlt)], "*15:02 Positive", "Positive")]
    #[case(&[("rs3909184", Zygosity::Heterozygous), ("rs2395029", Zygosity::Heterozygous)], "*57:01 Positive", "Positive")]
    #[case(&[("rs2395029", Zygosity::Missing)], "Wildtype", "Negative")]
    #[case(&[("rs1234", Zygosity::HomozygousAlt)], "Wildtype", "Negative")]
    #[case(&[], "Wildtype", "Negative")]
    fn test_classify(
        model: PresenceModel,
        #[case] calls: &[(&str, Zygosity)],
        #[case] diplotype: &str,
        #[case] phenotype: &str,
    ) {
        let variants: Vec<Variant> = calls
            .iter()
            .map(|(rsid, zygosity)| variant(rsid, *zygosity))
            .collect();
        let entry = model.classify("HLA-B", &variants);

        assert_eq!(entry.diplotype, diplotype);
        assert_eq!(entry.phenotype, phenotype);
        assert_eq!(entry.variants.len(), calls.len());
    }

    #[rstest]
    fn test_default_entry(model: PresenceModel) {
        let entry = model.default_entry("HLA-B");
        assert_eq!(entry, model.classify("HLA-B", &[]));
        assert_eq!(entry.secondary_risk, None);
    }
}
