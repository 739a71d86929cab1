//! Integration tests for phenotype inference on extracted variant files and on
//! substituted phenotype tables.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rstest::*;

use pgxrisk_core::{GenePanel, GeneVariantGroup, PhenotypeProfile};
use pgxrisk_phenotype::{PhenotypeTables, infer_phenotypes};
use pgxrisk_vcf::{extract, group_by_gene};

fn profile_for(path: &Path) -> PhenotypeProfile {
    let panel = GenePanel::builtin();
    let extraction = extract(path, panel).unwrap();
    let grouped = group_by_gene(&extraction.variants, panel);
    infer_phenotypes(&grouped, PhenotypeTables::builtin())
}

#[fixture]
fn path_to_patient_vcf() -> PathBuf {
    PathBuf::from("../tests/data/vcf/test_patient.vcf")
}

#[rstest]
#[case("CYP2D6", "*4/*4", "Poor Metabolizer")]
#[case("CYP2C19", "*1/*2", "Intermediate Metabolizer")]
#[case("CYP2C9", "*1/*?", "Normal Metabolizer")]
#[case("SLCO1B1", "*1a/*5", "Decreased Function")]
#[case("TPMT", "*1/*3C", "Intermediate Metabolizer")]
#[case("DPYD", "*?/*?", "Indeterminate")]
#[case("HLA-B", "*57:01 Positive", "Positive")]
#[case("HLA-A", "Wildtype", "Negative")]
fn test_patient_profile(
    path_to_patient_vcf: PathBuf,
    #[case] gene: &str,
    #[case] diplotype: &str,
    #[case] phenotype: &str,
) {
    let profile = profile_for(&path_to_patient_vcf);
    let entry = profile.get(gene).unwrap();

    assert_eq!(entry.diplotype, diplotype);
    assert_eq!(entry.phenotype, phenotype);
}

#[rstest]
fn test_patient_profile_covers_panel(path_to_patient_vcf: PathBuf) {
    let profile = profile_for(&path_to_patient_vcf);
    assert_eq!(profile.len(), GenePanel::builtin().genes.len());

    let slco1b1 = profile.get("SLCO1B1").unwrap();
    assert_eq!(
        slco1b1.secondary_risk.as_deref(),
        Some("Intermediate myopathy risk")
    );
    assert_eq!(slco1b1.detected_variants, vec!["rs4149056".to_string()]);
}

#[rstest]
fn test_no_variants_profile() {
    let profile = profile_for(Path::new("../tests/data/vcf/no_variants.vcf"));

    for gene in ["CYP2D6", "CYP2C19", "CYP2C9", "TPMT", "DPYD"] {
        let entry = profile.get(gene).unwrap();
        assert_eq!(entry.diplotype, "*1/*1");
        assert_eq!(entry.phenotype, "Normal Metabolizer");
    }
    assert_eq!(profile.get("HLA-B").unwrap().diplotype, "Wildtype");
}

#[rstest]
fn test_substituted_tables() {
    let tables =
        PhenotypeTables::try_from(Path::new("../tests/data/config/phenotype.toml")).unwrap();

    let grouped = GeneVariantGroup::with_genes(["CYP2D6", "TPMT"]);
    let profile = infer_phenotypes(&grouped, &tables);

    assert_eq!(profile.get("CYP2D6").unwrap().phenotype, "Normal Metabolizer");
    // no model for TPMT in the substituted tables
    assert_eq!(profile.get("TPMT").unwrap().phenotype, "Indeterminate");
    assert_eq!(profile.get("HLA-B").unwrap().phenotype, "Negative");
    assert!(profile.get("HLA-A").is_none());
}

#[rstest]
fn test_profile_is_serializable(path_to_patient_vcf: PathBuf) {
    let profile = profile_for(&path_to_patient_vcf);
    let json = serde_json::to_value(&profile).unwrap();

    assert_eq!(
        json["entries"]["CYP2D6"]["variants"][0]["zygosity"],
        "homozygous_alt"
    );
}
