//! Integration tests for the variant file front door: extraction from files on disk
//! (plain and gzipped) followed by gene grouping against the built-in panel.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rstest::*;

use pgxrisk_core::{GenePanel, Zygosity};
use pgxrisk_vcf::{VcfError, extract, group_by_gene};

#[fixture]
fn path_to_patient_vcf() -> PathBuf {
    PathBuf::from("../tests/data/vcf/test_patient.vcf")
}

#[fixture]
fn path_to_no_variants_vcf() -> PathBuf {
    PathBuf::from("../tests/data/vcf/no_variants.vcf")
}

#[rstest]
fn test_extract_patient_file(path_to_patient_vcf: PathBuf) {
    let extraction = extract(&path_to_patient_vcf, GenePanel::builtin()).unwrap();

    assert_eq!(extraction.sample_id, "PATIENT_001");
    assert_eq!(extraction.total_parsed, 10);
    assert_eq!(extraction.pgx_found, 7);
    assert_eq!(extraction.variants.len(), extraction.pgx_found);
    assert_eq!(
        extraction.errors,
        vec!["Line 18: fewer than 8 fields, skipped".to_string()]
    );
    assert!(!extraction.parsing_succeeded());

    let genes: Vec<&str> = extraction.variants.iter().map(|v| v.gene.as_str()).collect();
    assert_eq!(
        genes,
        vec!["CYP2D6", "CYP2C19", "SLCO1B1", "TPMT", "HLA-B", "DPYD", "CYP2C9"]
    );
}

#[rstest]
fn test_extract_patient_file_variant_details(path_to_patient_vcf: PathBuf) {
    let extraction = extract(&path_to_patient_vcf, GenePanel::builtin()).unwrap();

    let cyp2d6 = &extraction.variants[0];
    assert_eq!(cyp2d6.star_allele.as_deref(), Some("*4"));
    assert_eq!(cyp2d6.zygosity, Zygosity::HomozygousAlt);
    assert_eq!(cyp2d6.quality, "50");

    // bare chromosome names are normalized and DP is ignored
    let tpmt = &extraction.variants[3];
    assert_eq!(tpmt.chrom, "chr6");
    assert_eq!(tpmt.genotype.as_deref(), Some("0/1"));

    // assigned by coordinates, phased call unphased
    let dpyd = &extraction.variants[5];
    assert_eq!(dpyd.rsid, None);
    assert_eq!(dpyd.genotype.as_deref(), Some("1/1"));
    assert_eq!(dpyd.star_allele_label(), "unknown");

    let cyp2c9 = &extraction.variants[6];
    assert_eq!(cyp2c9.zygosity, Zygosity::Missing);
    assert_eq!(cyp2c9.filter, "LowQual");
}

#[rstest]
fn test_genes_with_variants_in_panel_order(path_to_patient_vcf: PathBuf) {
    let panel = GenePanel::builtin();
    let extraction = extract(&path_to_patient_vcf, panel).unwrap();

    assert_eq!(
        extraction.genes_with_variants(panel),
        vec!["CYP2D6", "CYP2C19", "CYP2C9", "SLCO1B1", "TPMT", "DPYD", "HLA-B"]
    );
}

#[rstest]
fn test_extract_without_sample_column(path_to_no_variants_vcf: PathBuf) {
    let extraction = extract(&path_to_no_variants_vcf, GenePanel::builtin()).unwrap();

    assert_eq!(extraction.sample_id, "NO_VARIANTS");
    assert_eq!(extraction.total_parsed, 2);
    assert_eq!(extraction.pgx_found, 0);
    assert!(extraction.parsing_succeeded());
}

#[rstest]
fn test_extract_missing_file() {
    let result = extract(Path::new("../tests/data/vcf/missing.vcf"), GenePanel::builtin());
    assert!(matches!(result, Err(VcfError::NotFound(_))));
}

#[rstest]
fn test_extract_corrupt_gzip_file() {
    let tempdir = tempfile::tempdir().unwrap();
    let gz_path = tempdir.path().join("corrupt.vcf.gz");
    std::fs::write(&gz_path, "this is not gzip data").unwrap();

    let result = extract(&gz_path, GenePanel::builtin());
    assert!(matches!(result, Err(VcfError::Io(_))));
}

#[rstest]
fn test_extract_directory() {
    let result = extract(Path::new("../tests/data/vcf"), GenePanel::builtin());
    assert!(result.is_err());
}

#[rstest]
fn test_extract_gzipped_matches_plain(path_to_patient_vcf: PathBuf) {
    let tempdir = tempfile::tempdir().unwrap();
    let gz_path = tempdir.path().join("patient_gz.vcf.gz");

    let contents = std::fs::read(&path_to_patient_vcf).unwrap();
    let mut encoder = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::default());
    encoder.write_all(&contents).unwrap();
    encoder.finish().unwrap();

    let plain = extract(&path_to_patient_vcf, GenePanel::builtin()).unwrap();
    let packed = extract(&gz_path, GenePanel::builtin()).unwrap();

    assert_eq!(packed, plain);
}

#[rstest]
fn test_extract_gzipped_sample_from_file_name() {
    let tempdir = tempfile::tempdir().unwrap();
    let gz_path = tempdir.path().join("visit_3.vcf.gz");

    let mut encoder = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::default());
    encoder
        .write_all(b"#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n")
        .unwrap();
    encoder.finish().unwrap();

    let extraction = extract(&gz_path, GenePanel::builtin()).unwrap();
    assert_eq!(extraction.sample_id, "VISIT_3");
    assert_eq!(extraction.total_parsed, 0);
}

#[rstest]
fn test_extract_then_group(path_to_patient_vcf: PathBuf) {
    let panel = GenePanel::builtin();
    let extraction = extract(&path_to_patient_vcf, panel).unwrap();
    let grouped = group_by_gene(&extraction.variants, panel);

    assert_eq!(grouped.len(), panel.genes.len());
    assert_eq!(grouped.variant_count(), extraction.pgx_found);
    assert!(grouped.get("HLA-A").is_empty());
    assert_eq!(grouped.get("CYP2D6").len(), 1);
    assert_eq!(grouped.get("CYP2C9").len(), 1);
}
