use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

use crate::models::Variant;

///
/// PhenotypeEntry struct, the inferred diplotype and phenotype for one gene.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhenotypeEntry {
    pub gene: String,
    pub diplotype: String,
    pub phenotype: String,
    /// Secondary risk label, e.g. myopathy risk for the statin transporter.
    pub secondary_risk: Option<String>,
    /// rsIDs of the variants the call was made from.
    pub detected_variants: Vec<String>,
    pub variants: Vec<Variant>,
}

impl PhenotypeEntry {
    pub fn new(gene: &str, diplotype: &str, phenotype: &str, variants: &[Variant]) -> Self {
        PhenotypeEntry {
            gene: gene.to_string(),
            diplotype: diplotype.to_string(),
            phenotype: phenotype.to_string(),
            secondary_risk: None,
            detected_variants: variants.iter().filter_map(|v| v.rsid.clone()).collect(),
            variants: variants.to_vec(),
        }
    }

    pub fn with_secondary_risk(mut self, risk: &str) -> Self {
        self.secondary_risk = Some(risk.to_string());
        self
    }

    ///
    /// Phenotype text that drug rules are matched against: the phenotype,
    /// followed by the secondary risk label when there is one.
    ///
    pub fn matchable_phenotype(&self) -> String {
        match self.secondary_risk.as_deref() {
            Some(risk) => format!("{} {}", self.phenotype, risk).trim().to_string(),
            None => self.phenotype.trim().to_string(),
        }
    }
}

impl Display for PhenotypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.gene, self.diplotype, self.phenotype)
    }
}

///
/// PhenotypeProfile struct, one entry per gene for a single analysis run.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhenotypeProfile {
    pub entries: BTreeMap<String, PhenotypeEntry>,
}

impl PhenotypeProfile {
    pub fn get(&self, gene: &str) -> Option<&PhenotypeEntry> {
        self.entries.get(gene)
    }

    pub fn contains_gene(&self, gene: &str) -> bool {
        self.entries.contains_key(gene)
    }

    ///
    /// Add an entry, keyed by its gene. An existing entry for the gene is replaced.
    ///
    pub fn insert(&mut self, entry: PhenotypeEntry) {
        self.entries.insert(entry.gene.clone(), entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhenotypeEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<PhenotypeEntry> for PhenotypeProfile {
    fn from_iter<T: IntoIterator<Item = PhenotypeEntry>>(iter: T) -> Self {
        let mut profile = PhenotypeProfile::default();
        for entry in iter {
            profile.insert(entry);
        }
        profile
    }
}

impl Display for PhenotypeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhenotypeProfile with {} genes.", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Zygosity;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn variant(rsid: Option<&str>) -> Variant {
        Variant {
            chrom: "chr12".to_string(),
            position: 21331549,
            rsid: rsid.map(str::to_string),
            ref_allele: "T".to_string(),
            alt_allele: "C".to_string(),
            gene: "SLCO1B1".to_string(),
            genotype: Some("0/1".to_string()),
            zygosity: Zygosity::Heterozygous,
            star_allele: None,
            quality: ".".to_string(),
            filter: "PASS".to_string(),
        }
    }

    #[rstest]
    fn test_new_collects_detected_rsids() {
        let variants = vec![variant(Some("rs4149056")), variant(None)];
        let entry = PhenotypeEntry::new("SLCO1B1", "*1a/*5", "Decreased Function", &variants);

        assert_eq!(entry.detected_variants, vec!["rs4149056".to_string()]);
        assert_eq!(entry.variants.len(), 2);
        assert_eq!(entry.secondary_risk, None);
    }

    #[rstest]
    fn test_matchable_phenotype_joins_secondary_risk() {
        let entry = PhenotypeEntry::new("SLCO1B1", "*5/*5", "Poor Function", &[])
            .with_secondary_risk("High myopathy risk");
        assert_eq!(entry.matchable_phenotype(), "Poor Function High myopathy risk");

        let plain = PhenotypeEntry::new("TPMT", "*1/*1", "Normal Metabolizer", &[]);
        assert_eq!(plain.matchable_phenotype(), "Normal Metabolizer");
    }

    #[rstest]
    fn test_profile_from_iter_replaces_by_gene() {
        let profile: PhenotypeProfile = vec![
            PhenotypeEntry::new("TPMT", "*1/*1", "Normal Metabolizer", &[]),
            PhenotypeEntry::new("TPMT", "*3A/*3A", "Poor Metabolizer", &[]),
            PhenotypeEntry::new("DPYD", "*1/*1", "Normal Metabolizer", &[]),
        ]
        .into_iter()
        .collect();

        assert_eq!(profile.len(), 2);
        assert_eq!(profile.get("TPMT").unwrap().phenotype, "Poor Metabolizer");
        assert!(profile.get("CYP2D6").is_none());
    }
}
