use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use pgxrisk_core::{PhenotypeEntry, Variant, Zygosity};

///
/// TransporterModel struct, function calling from a single key SNP.
///
/// The key SNP's two-letter genotype selects a call from `genotypes`.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransporterModel {
    pub key_rsid: String,
    /// Upper-case two-letter genotype, e.g. `TC` -> call.
    pub genotypes: FxHashMap<String, TransporterCall>,
    /// Call used when the key SNP was not among the gene's variants.
    pub absent: TransporterCall,
    /// Call used when the key SNP's genotype is not in the table.
    pub unresolved: TransporterCall,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransporterCall {
    pub diplotype: String,
    pub phenotype: String,
    pub secondary_risk: String,
}

impl TransporterModel {
    pub fn classify(&self, gene: &str, variants: &[Variant]) -> PhenotypeEntry {
        let call = match variants
            .iter()
            .find(|v| v.rsid.as_deref() == Some(self.key_rsid.as_str()))
        {
            Some(variant) => self
                .genotypes
                .get(&genotype_key(variant))
                .unwrap_or(&self.unresolved),
            None => &self.absent,
        };

        PhenotypeEntry::new(gene, &call.diplotype, &call.phenotype, variants)
            .with_secondary_risk(&call.secondary_risk)
    }
}

///
/// Spell out the genotype from the alleles: alt+alt for homozygous alternate,
/// ref+alt for heterozygous, ref+ref otherwise.
///
fn genotype_key(variant: &Variant) -> String {
    let (first, second) = match variant.zygosity {
        Zygosity::HomozygousAlt => (&variant.alt_allele, &variant.alt_allele),
        Zygosity::Heterozygous => (&variant.ref_allele, &variant.alt_allele),
        _ => (&variant.ref_allele, &variant.ref_allele),
    };

    format!("{}{}", first, second).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn call(diplotype: &str, phenotype: &str, risk: &str) -> TransporterCall {
        TransporterCall {
            diplotype: diplotype.to_string(),
            phenotype: phenotype.to_string(),
            secondary_risk: risk.to_string(),
        }
    }

    fn variant(rsid: &str, ref_allele: &str, alt_allele: &str, zygosity: Zygosity) -> Variant {
        Variant {
            chrom: "chr12".to_string(),
            position: 21331549,
            rsid: Some(rsid.to_string()),
            ref_allele: ref_allele.to_string(),
            alt_allele: alt_allele.to_string(),
            gene: "SLCO1B1".to_string(),
            genotype: None,
            zygosity,
            star_allele: None,
            quality: ".".to_string(),
            filter: "PASS".to_string(),
        }
    }

    #[fixture]
    fn model() -> TransporterModel {
        let normal = call("*1a/*1a", "Normal Function", "Normal myopathy risk");
        let decreased = call("*1a/*5", "Decreased Function", "Intermediate myopathy risk");

        TransporterModel {
            key_rsid: "rs4149056".to_string(),
            genotypes: [
                ("TT", normal.clone()),
                ("TC", decreased.clone()),
                ("CT", decreased),
                ("CC", call("*5/*5", "Poor Function", "High myopathy risk")),
            ]
            .into_iter()
            .map(|(key, call)| (key.to_string(), call))
            .collect(),
            absent: normal,
            unresolved: call("*?/*?", "Indeterminate", "Unknown myopathy risk"),
        }
    }

    #[rstest]
    #[case("T", "C", Zygosity::Heterozygous, "*1a/*5", "Decreased Function")]
    #[case("t", "c", Zygosity::HomozygousAlt, "*5/*5", "Poor Function")]
    #[case("T", "C", Zygosity::Missing, "*1a/*1a", "Normal Function")]
    #[case("T", "G", Zygosity::Heterozygous, "*?/*?", "Indeterminate")]
    fn test_key_snp_genotypes(
        model: TransporterModel,
        #[case] ref_allele: &str,
        #[case] alt_allele: &str,
        #[case] zygosity: Zygosity,
        #[case] diplotype: &str,
        #[case] phenotype: &str,
    ) {
        let variants = vec![variant("rs4149056", ref_allele, alt_allele, zygosity)];
        let entry = model.classify("SLCO1B1", &variants);
        assert_eq!(entry.diplotype, diplotype);
        assert_eq!(entry.phenotype, phenotype);
    }

    #[rstest]
    fn test_absent_key_snp(model: TransporterModel) {
        let variants = vec![variant("rs2306283", "A", "G", Zygosity::Heterozygous)];
        let entry = model.classify("SLCO1B1", &variants);

        assert_eq!(entry.diplotype, "*1a/*1a");
        assert_eq!(entry.phenotype, "Normal Function");
        assert_eq!(entry.secondary_risk.as_deref(), Some("Normal myopathy risk"));
        assert_eq!(entry.detected_variants, vec!["rs2306283".to_string()]);
    }

    #[rstest]
    fn test_secondary_risk_is_matchable(model: TransporterModel) {
        let variants = vec![variant("rs4149056", "T", "C", Zygosity::HomozygousAlt)];
        let entry = model.classify("SLCO1B1", &variants);
        assert_eq!(entry.matchable_phenotype(), "Poor Function High myopathy risk");
    }
}
