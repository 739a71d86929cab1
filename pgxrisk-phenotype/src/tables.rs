use std::fs::read_to_string;
use std::path::Path;

use fxhash::FxHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use pgxrisk_core::consts::{CYP2C19, CYP2C9, CYP2D6, DPYD, HLA_A, HLA_B, SLCO1B1, TPMT};
use pgxrisk_core::{ReferenceDataError, ReferenceDataResult};

use crate::diplotype::Diplotype;
use crate::models::{
    ActivityBand, ActivityModel, GeneModel, MetabolizerModel, PresenceModel, PresenceTag,
    TransporterCall, TransporterModel,
};

const CYP2D6_DIPLOTYPES: &[(&str, &str)] = &[
    ("*1/*1", "Normal Metabolizer"),
    ("*1/*2", "Normal Metabolizer"),
    ("*2/*2", "Normal Metabolizer"),
    ("*1/*4", "Intermediate Metabolizer"),
    ("*1/*5", "Intermediate Metabolizer"),
    ("*1/*10", "Intermediate Metabolizer"),
    ("*1/*41", "Intermediate Metabolizer"),
    ("*4/*10", "Intermediate Metabolizer"),
    ("*10/*10", "Intermediate Metabolizer"),
    ("*41/*41", "Intermediate Metabolizer"),
    ("*4/*4", "Poor Metabolizer"),
    ("*4/*5", "Poor Metabolizer"),
    ("*3/*4", "Poor Metabolizer"),
    ("*5/*5", "Poor Metabolizer"),
    ("*3/*5", "Poor Metabolizer"),
    ("*6/*6", "Poor Metabolizer"),
    ("*1/*1xN", "Ultrarapid Metabolizer"),
    ("*2/*2xN", "Ultrarapid Metabolizer"),
    ("*1/*2xN", "Ultrarapid Metabolizer"),
];

const CYP2D6_ACTIVITY: &[(&str, f64)] = &[
    ("*1", 1.0),
    ("*2", 1.0),
    ("*10", 0.25),
    ("*17", 0.5),
    ("*29", 0.0),
    ("*41", 0.5),
    ("*3", 0.0),
    ("*4", 0.0),
    ("*5", 0.0),
    ("*6", 0.0),
    ("*7", 0.0),
    ("*8", 0.0),
    ("xN", 2.0),
];

// (upper bound, inclusive, phenotype), ascending
const CYP2D6_BANDS: &[(f64, bool, &str)] = &[
    (0.0, true, "Poor Metabolizer"),
    (1.0, false, "Intermediate Metabolizer"),
    (2.25, true, "Normal Metabolizer"),
];

const CYP2C19_DIPLOTYPES: &[(&str, &str)] = &[
    ("*1/*1", "Normal Metabolizer"),
    ("*1/*17", "Rapid Metabolizer"),
    ("*17/*17", "Ultrarapid Metabolizer"),
    ("*1/*2", "Intermediate Metabolizer"),
    ("*1/*3", "Intermediate Metabolizer"),
    ("*2/*17", "Intermediate Metabolizer"),
    ("*1/*4", "Intermediate Metabolizer"),
    ("*2/*2", "Poor Metabolizer"),
    ("*2/*3", "Poor Metabolizer"),
    ("*3/*3", "Poor Metabolizer"),
    ("*2/*4", "Poor Metabolizer"),
];

const CYP2C9_DIPLOTYPES: &[(&str, &str)] = &[
    ("*1/*1", "Normal Metabolizer"),
    ("*1/*2", "Intermediate Metabolizer"),
    ("*1/*3", "Intermediate Metabolizer"),
    ("*2/*2", "Intermediate Metabolizer"),
    ("*2/*3", "Poor Metabolizer"),
    ("*3/*3", "Poor Metabolizer"),
    ("*1/*5", "Intermediate Metabolizer"),
    ("*1/*6", "Intermediate Metabolizer"),
];

const CYP2C9_ACTIVITY: &[(&str, f64)] = &[
    ("*1", 1.0),
    ("*2", 0.5),
    ("*3", 0.0),
    ("*5", 0.0),
    ("*6", 0.0),
    ("*11", 0.5),
];

const CYP2C9_BANDS: &[(f64, bool, &str)] = &[
    (0.0, true, "Poor Metabolizer"),
    (1.5, false, "Intermediate Metabolizer"),
];

const TPMT_DIPLOTYPES: &[(&str, &str)] = &[
    ("*1/*1", "Normal Metabolizer"),
    ("*1/*2", "Intermediate Metabolizer"),
    ("*1/*3A", "Intermediate Metabolizer"),
    ("*1/*3B", "Intermediate Metabolizer"),
    ("*1/*3C", "Intermediate Metabolizer"),
    ("*1/*4", "Intermediate Metabolizer"),
    ("*2/*3A", "Poor Metabolizer"),
    ("*3A/*3A", "Poor Metabolizer"),
    ("*3B/*3C", "Poor Metabolizer"),
    ("*3C/*3C", "Poor Metabolizer"),
    ("*2/*2", "Poor Metabolizer"),
];

const DPYD_DIPLOTYPES: &[(&str, &str)] = &[
    ("*1/*1", "Normal Metabolizer"),
    ("*1/*2A", "Intermediate Metabolizer"),
    ("*1/*13", "Intermediate Metabolizer"),
    ("*2A/*2A", "Poor Metabolizer"),
    ("*2A/*13", "Poor Metabolizer"),
    ("*13/*13", "Poor Metabolizer"),
    ("*1/HapB3", "Intermediate Metabolizer"),
    ("HapB3/HapB3", "Intermediate Metabolizer"),
];

const SLCO1B1_KEY_RSID: &str = "rs4149056";

// genotype -> (diplotype, function, myopathy risk)
const SLCO1B1_GENOTYPES: &[(&str, (&str, &str, &str))] = &[
    ("TT", ("*1a/*1a", "Normal Function", "Normal myopathy risk")),
    ("TC", ("*1a/*5", "Decreased Function", "Intermediate myopathy risk")),
    ("CT", ("*1a/*5", "Decreased Function", "Intermediate myopathy risk")),
    ("CC", ("*5/*5", "Poor Function", "High myopathy risk")),
];
const SLCO1B1_ABSENT: (&str, &str, &str) = ("*1a/*1a", "Normal Function", "Normal myopathy risk");
const SLCO1B1_UNRESOLVED: (&str, &str, &str) = ("*?/*?", "Indeterminate", "Unknown myopathy risk");

const HLA_B_TAGS: &[(&str, &[&str])] = &[
    ("*57:01 Positive", &["rs2395029", "rs9264942"]),
    ("*15:02 Positive", &["rs3909184", "rs2844682"]),
];
const HLA_A_TAGS: &[(&str, &[&str])] = &[("*31:01 Positive", &["rs1061235"])];

static BUILTIN_TABLES: Lazy<PhenotypeTables> = Lazy::new(PhenotypeTables::default_tables);

///
/// PhenotypeTables struct, the classification model for each gene.
///
/// Genes without a model are classified as metabolizers with empty tables,
/// which resolves every diplotype to `Indeterminate`.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhenotypeTables {
    pub genes: FxHashMap<String, GeneModel>,
}

impl PhenotypeTables {
    ///
    /// The built-in tables, created on first use and shared by every caller.
    ///
    pub fn builtin() -> &'static PhenotypeTables {
        &BUILTIN_TABLES
    }

    fn default_tables() -> PhenotypeTables {
        let genes = [
            (
                CYP2D6,
                metabolizer(
                    CYP2D6_DIPLOTYPES,
                    Some(activity(
                        CYP2D6_ACTIVITY,
                        CYP2D6_BANDS,
                        "Ultrarapid Metabolizer",
                    )),
                ),
            ),
            (CYP2C19, metabolizer(CYP2C19_DIPLOTYPES, None)),
            (
                CYP2C9,
                metabolizer(
                    CYP2C9_DIPLOTYPES,
                    Some(activity(CYP2C9_ACTIVITY, CYP2C9_BANDS, "Normal Metabolizer")),
                ),
            ),
            (TPMT, metabolizer(TPMT_DIPLOTYPES, None)),
            (DPYD, metabolizer(DPYD_DIPLOTYPES, None)),
            (SLCO1B1, transporter()),
            (HLA_B, presence(HLA_B_TAGS)),
            (HLA_A, presence(HLA_A_TAGS)),
        ]
        .into_iter()
        .map(|(gene, model)| (gene.to_string(), model))
        .collect();

        PhenotypeTables { genes }
    }

    ///
    /// Parse tables from a TOML document and check them for consistency.
    ///
    /// Transporter genotype keys are upper-cased.
    ///
    pub fn from_toml_str(toml_str: &str) -> ReferenceDataResult<Self> {
        let mut tables: PhenotypeTables = toml::from_str(toml_str)?;

        for model in tables.genes.values_mut() {
            if let GeneModel::Transporter(transporter) = model {
                transporter.genotypes = transporter
                    .genotypes
                    .drain()
                    .map(|(key, call)| (key.to_uppercase(), call))
                    .collect();
            }
        }

        tables.validate()?;
        Ok(tables)
    }

    fn validate(&self) -> ReferenceDataResult<()> {
        if self.genes.is_empty() {
            return Err(invalid("phenotype tables have no genes".to_string()));
        }

        for (gene, model) in &self.genes {
            match model {
                GeneModel::Metabolizer(metabolizer) => {
                    if let Some(label) = metabolizer
                        .diplotypes
                        .keys()
                        .find(|label| Diplotype::parse(label).is_none())
                    {
                        return Err(invalid(format!("{gene}: malformed diplotype `{label}`")));
                    }
                    if let Some(activity) = &metabolizer.activity {
                        let ascending = activity
                            .bands
                            .windows(2)
                            .all(|pair| pair[0].max <= pair[1].max);
                        if !ascending || activity.bands.iter().any(|band| band.max.is_nan()) {
                            return Err(invalid(format!(
                                "{gene}: activity bands must be in ascending order"
                            )));
                        }
                    }
                }
                GeneModel::Transporter(transporter) => {
                    if transporter.key_rsid.trim().is_empty() {
                        return Err(invalid(format!("{gene}: transporter has no key SNP")));
                    }
                }
                GeneModel::Presence(presence) => {
                    if presence.tags.iter().any(|tag| tag.rsids.is_empty()) {
                        return Err(invalid(format!("{gene}: presence tag without SNPs")));
                    }
                }
            }
        }

        Ok(())
    }

    pub fn model_for(&self, gene: &str) -> Option<&GeneModel> {
        self.genes.get(gene)
    }

    ///
    /// Genes classified by presence, sorted by name. These always appear in an inferred profile.
    ///
    pub fn presence_genes(&self) -> Vec<(&str, &PresenceModel)> {
        let mut genes: Vec<(&str, &PresenceModel)> = self
            .genes
            .iter()
            .filter_map(|(gene, model)| match model {
                GeneModel::Presence(presence) => Some((gene.as_str(), presence)),
                _ => None,
            })
            .collect();
        genes.sort_unstable_by_key(|(gene, _)| *gene);
        genes
    }
}

impl TryFrom<&Path> for PhenotypeTables {
    type Error = ReferenceDataError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        PhenotypeTables::from_toml_str(&toml_str)
    }
}

fn invalid(message: String) -> ReferenceDataError {
    ReferenceDataError::InvalidTable(message)
}

fn metabolizer(diplotypes: &[(&str, &str)], activity: Option<ActivityModel>) -> GeneModel {
    GeneModel::Metabolizer(MetabolizerModel {
        diplotypes: diplotypes
            .iter()
            .map(|(diplotype, phenotype)| (diplotype.to_string(), phenotype.to_string()))
            .collect(),
        activity,
    })
}

fn activity(scores: &[(&str, f64)], bands: &[(f64, bool, &str)], above: &str) -> ActivityModel {
    ActivityModel {
        scores: scores
            .iter()
            .map(|(allele, score)| (allele.to_string(), *score))
            .collect(),
        default_score: crate::consts::DEFAULT_ACTIVITY_SCORE,
        bands: bands
            .iter()
            .map(|(max, inclusive, phenotype)| ActivityBand {
                max: *max,
                inclusive: *inclusive,
                phenotype: phenotype.to_string(),
            })
            .collect(),
        above: above.to_string(),
    }
}

fn transporter_call((diplotype, phenotype, risk): (&str, &str, &str)) -> TransporterCall {
    TransporterCall {
        diplotype: diplotype.to_string(),
        phenotype: phenotype.to_string(),
        secondary_risk: risk.to_string(),
    }
}

fn transporter() -> GeneModel {
    GeneModel::Transporter(TransporterModel {
        key_rsid: SLCO1B1_KEY_RSID.to_string(),
        genotypes: SLCO1B1_GENOTYPES
            .iter()
            .map(|(genotype, call)| (genotype.to_string(), transporter_call(*call)))
            .collect(),
        absent: transporter_call(SLCO1B1_ABSENT),
        unresolved: transporter_call(SLCO1B1_UNRESOLVED),
    })
}

fn presence(tags: &[(&str, &[&str])]) -> GeneModel {
    GeneModel::Presence(PresenceModel {
        tags: tags
            .iter()
            .map(|(diplotype, rsids)| PresenceTag {
                diplotype: diplotype.to_string(),
                rsids: rsids.iter().map(|rsid| rsid.to_string()).collect(),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::path::PathBuf;

    #[rstest]
    #[case("CYP2D6", "metabolizer")]
    #[case("CYP2C19", "metabolizer")]
    #[case("SLCO1B1", "transporter")]
    #[case("HLA-B", "presence")]
    #[case("HLA-A", "presence")]
    fn test_builtin_models(#[case] gene: &str, #[case] expected: &str) {
        let model = PhenotypeTables::builtin().model_for(gene).unwrap();
        assert_eq!(model.name(), expected);
    }

    #[rstest]
    fn test_builtin_presence_genes() {
        let genes: Vec<&str> = PhenotypeTables::builtin()
            .presence_genes()
            .into_iter()
            .map(|(gene, _)| gene)
            .collect();
        assert_eq!(genes, vec!["HLA-A", "HLA-B"]);
    }

    #[rstest]
    fn test_builtin_tables_are_valid() {
        assert!(PhenotypeTables::builtin().validate().is_ok());
    }

    #[rstest]
    fn test_every_builtin_diplotype_resolves_in_both_orders() {
        for (gene, model) in &PhenotypeTables::builtin().genes {
            let GeneModel::Metabolizer(metabolizer) = model else {
                continue;
            };
            for (label, phenotype) in &metabolizer.diplotypes {
                let diplotype = Diplotype::parse(label).unwrap();
                assert_eq!(&metabolizer.phenotype_for(&diplotype), phenotype, "{gene} {label}");
                assert_eq!(
                    &metabolizer.phenotype_for(&diplotype.reversed()),
                    phenotype,
                    "{gene} {label} reversed"
                );
            }
        }
    }

    #[rstest]
    fn test_from_toml_str() {
        let tables = PhenotypeTables::from_toml_str(
            r#"
            [genes.SLCO1B1]
            model = "transporter"
            key_rsid = "rs4149056"
            absent = { diplotype = "*1a/*1a", phenotype = "Normal Function", secondary_risk = "Normal myopathy risk" }
            unresolved = { diplotype = "*?/*?", phenotype = "Indeterminate", secondary_risk = "Unknown myopathy risk" }

            [genes.SLCO1B1.genotypes]
            cc = { diplotype = "*5/*5", phenotype = "Poor Function", secondary_risk = "High myopathy risk" }

            [genes.TPMT]
            model = "metabolizer"

            [genes.TPMT.diplotypes]
            "*1/*1" = "Normal Metabolizer"
            "*3A/*3A" = "Poor Metabolizer"
            "#,
        )
        .unwrap();

        let Some(GeneModel::Transporter(slco1b1)) = tables.model_for("SLCO1B1") else {
            panic!("SLCO1B1 should use the transporter model");
        };
        assert!(slco1b1.genotypes.contains_key("CC"));

        let Some(GeneModel::Metabolizer(tpmt)) = tables.model_for("TPMT") else {
            panic!("TPMT should use the metabolizer model");
        };
        assert_eq!(tpmt.activity, None);
        assert_eq!(tpmt.diplotypes.len(), 2);
    }

    #[rstest]
    #[case(
        r#"
        [genes.TPMT]
        model = "metabolizer"
        diplotypes = { "*1-*1" = "Normal Metabolizer" }
        "#
    )]
    #[case(
        r#"
        [genes.HLA-B]
        model = "presence"
        tags = [{ diplotype = "*57:01 Positive", rsids = [] }]
        "#
    )]
    #[case(
        r#"
        [genes.CYP2C9]
        model = "metabolizer"

        [genes.CYP2C9.activity]
        scores = { "*1" = 1.0 }
        bands = [{ max = 1.5, phenotype = "Intermediate Metabolizer" }, { max = 0.0, inclusive = true, phenotype = "Poor Metabolizer" }]
        above = "Normal Metabolizer"
        "#
    )]
    #[case("genes = {}")]
    fn test_from_toml_str_rejects_invalid_tables(#[case] toml_str: &str) {
        let result = PhenotypeTables::from_toml_str(toml_str);
        assert!(matches!(result, Err(ReferenceDataError::InvalidTable(_))));
    }

    #[rstest]
    fn test_from_toml_str_rejects_unknown_model() {
        let result = PhenotypeTables::from_toml_str(
            r#"
            [genes.TPMT]
            model = "enzyme"
            "#,
        );
        assert!(matches!(result, Err(ReferenceDataError::Toml(_))));
    }

    #[rstest]
    fn test_try_from_path() {
        let path = PathBuf::from("../tests/data/config/phenotype.toml");
        let tables = PhenotypeTables::try_from(path.as_path()).unwrap();

        assert_eq!(tables.genes.len(), 2);
        assert!(matches!(
            tables.model_for("CYP2D6"),
            Some(GeneModel::Metabolizer(_))
        ));
    }
}
