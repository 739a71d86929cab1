use std::fs::read_to_string;
use std::path::Path;

use fxhash::FxHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::consts::{CYP2C19, CYP2C9, CYP2D6, DPYD, HLA_A, HLA_B, SLCO1B1, TPMT};
use crate::errors::{ReferenceDataError, ReferenceDataResult};
use crate::models::GeneLocus;
use crate::utils::normalize_chrom;

// rsID -> (gene, star allele). An empty star allele means the SNP only tags the gene.
const PANEL_SNPS: &[(&str, &str, &str)] = &[
    ("rs3892097", CYP2D6, "*4"),
    ("rs5030655", CYP2D6, "*6"),
    ("rs16947", CYP2D6, "*2"),
    ("rs1065852", CYP2D6, "*10"),
    ("rs28371706", CYP2D6, "*41"),
    ("rs35742686", CYP2D6, "*3"),
    ("rs4244285", CYP2C19, "*2"),
    ("rs4986893", CYP2C19, "*3"),
    ("rs12248560", CYP2C19, "*17"),
    ("rs28399504", CYP2C19, "*4"),
    ("rs1799853", CYP2C9, "*2"),
    ("rs1057910", CYP2C9, "*3"),
    ("rs28371686", CYP2C9, "*5"),
    ("rs7900194", CYP2C9, "*6"),
    ("rs4149056", SLCO1B1, "*5"),
    ("rs2306283", SLCO1B1, "*1b"),
    ("rs1800460", TPMT, "*3B"),
    ("rs1142345", TPMT, "*3C"),
    ("rs1800584", TPMT, "*4"),
    ("rs1800462", TPMT, "*2"),
    ("rs3918290", DPYD, "*2A"),
    ("rs67376798", DPYD, "c.2846A>T"),
    ("rs55886062", DPYD, "*13"),
    ("rs75017182", DPYD, "HapB3"),
    ("rs2395029", HLA_B, ""),
    ("rs9264942", HLA_B, ""),
    ("rs3909184", HLA_B, ""),
    ("rs2844682", HLA_B, ""),
    ("rs1061235", HLA_A, ""),
];

// GRCh38 spans, inclusive
const PANEL_LOCI: &[(&str, &str, u64, u64)] = &[
    (CYP2D6, "chr22", 42522500, 42526882),
    (CYP2C19, "chr10", 94762681, 94855547),
    (CYP2C9, "chr10", 94938657, 94990529),
    (SLCO1B1, "chr12", 21281117, 21391780),
    (TPMT, "chr6", 18128541, 18155376),
    (DPYD, "chr1", 97543299, 98388615),
];

const PANEL_GENES: &[&str] = &[CYP2D6, CYP2C19, CYP2C9, SLCO1B1, TPMT, DPYD, HLA_B, HLA_A];

static BUILTIN_PANEL: Lazy<GenePanel> = Lazy::new(GenePanel::default_panel);

///
/// GenePanel struct, the fixed set of tracked genes and the tables used to
/// assign a variant to one of them.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenePanel {
    /// Panel genes, in reporting order.
    pub genes: Vec<String>,
    #[serde(default)]
    pub rsid_genes: FxHashMap<String, String>,
    #[serde(default)]
    pub star_alleles: FxHashMap<String, String>,
    #[serde(default)]
    pub loci: Vec<GeneLocus>,
}

impl GenePanel {
    ///
    /// The built-in pharmacogenomic panel, created on first use and shared by every caller.
    ///
    pub fn builtin() -> &'static GenePanel {
        &BUILTIN_PANEL
    }

    fn default_panel() -> GenePanel {
        let mut rsid_genes = FxHashMap::default();
        let mut star_alleles = FxHashMap::default();

        for (rsid, gene, star) in PANEL_SNPS {
            rsid_genes.insert(rsid.to_string(), gene.to_string());
            if !star.is_empty() {
                star_alleles.insert(rsid.to_string(), star.to_string());
            }
        }

        GenePanel {
            genes: PANEL_GENES.iter().map(|g| g.to_string()).collect(),
            rsid_genes,
            star_alleles,
            loci: PANEL_LOCI
                .iter()
                .map(|(gene, chr, start, end)| GeneLocus::new(gene, chr, *start, *end))
                .collect(),
        }
    }

    ///
    /// Parse a panel from a TOML document and check it for consistency.
    ///
    pub fn from_toml_str(toml_str: &str) -> ReferenceDataResult<Self> {
        let mut panel: GenePanel = toml::from_str(toml_str)?;
        for locus in panel.loci.iter_mut() {
            locus.chr = normalize_chrom(&locus.chr);
        }
        panel.validate()?;
        Ok(panel)
    }

    fn validate(&self) -> ReferenceDataResult<()> {
        if self.genes.is_empty() {
            return Err(ReferenceDataError::InvalidTable(
                "gene panel has no genes".to_string(),
            ));
        }

        for (rsid, gene) in &self.rsid_genes {
            if !self.contains(gene) {
                return Err(ReferenceDataError::InvalidTable(format!(
                    "{rsid} is assigned to {gene}, which is not a panel gene"
                )));
            }
        }

        for locus in &self.loci {
            if !self.contains(&locus.gene) {
                return Err(ReferenceDataError::InvalidTable(format!(
                    "locus {locus} belongs to a gene outside the panel"
                )));
            }
            if locus.start > locus.end {
                return Err(ReferenceDataError::InvalidTable(format!(
                    "locus {locus} starts after it ends"
                )));
            }
        }

        Ok(())
    }

    pub fn contains(&self, gene: &str) -> bool {
        self.genes.iter().any(|g| g == gene)
    }

    pub fn gene_for_rsid(&self, rsid: &str) -> Option<&str> {
        self.rsid_genes.get(rsid).map(String::as_str)
    }

    pub fn star_allele_for(&self, rsid: &str) -> Option<&str> {
        self.star_alleles.get(rsid).map(String::as_str)
    }

    ///
    /// Find the panel gene whose span contains a position.
    ///
    /// # Arguments
    /// - chrom: chromosome name, normalized before comparison
    /// - position: 1-based position
    ///
    pub fn gene_at(&self, chrom: &str, position: u64) -> Option<&str> {
        let chrom = normalize_chrom(chrom);
        self.loci
            .iter()
            .find(|locus| locus.contains(&chrom, position))
            .map(|locus| locus.gene.as_str())
    }
}

impl TryFrom<&Path> for GenePanel {
    type Error = ReferenceDataError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        GenePanel::from_toml_str(&toml_str)
    }
}
