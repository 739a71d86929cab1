use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use pgxrisk_core::{PhenotypeEntry, Variant, Zygosity};

use crate::consts::{DEFAULT_ACTIVITY_SCORE, INDETERMINATE, UNKNOWN_ALLELE};
use crate::diplotype::Diplotype;

///
/// MetabolizerModel struct, star-allele diplotype calling with an explicit
/// diplotype table and an optional activity-score fallback.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetabolizerModel {
    /// `a/b` diplotype label -> phenotype. Either allele order may be stored.
    #[serde(default)]
    pub diplotypes: FxHashMap<String, String>,
    #[serde(default)]
    pub activity: Option<ActivityModel>,
}

///
/// ActivityModel struct, per-allele activity values summed over the diplotype
/// and classified by ascending bands.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityModel {
    pub scores: FxHashMap<String, f64>,
    #[serde(default = "default_activity_score")]
    pub default_score: f64,
    /// Bands in ascending order of `max`; the first band containing the total wins.
    pub bands: Vec<ActivityBand>,
    /// Phenotype for totals above every band.
    pub above: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityBand {
    pub max: f64,
    /// Whether a total equal to `max` falls inside the band.
    #[serde(default)]
    pub inclusive: bool,
    pub phenotype: String,
}

fn default_activity_score() -> f64 {
    DEFAULT_ACTIVITY_SCORE
}

impl ActivityBand {
    pub fn contains(&self, total: f64) -> bool {
        match self.inclusive {
            true => total <= self.max,
            false => total < self.max,
        }
    }
}

impl ActivityModel {
    pub fn score(&self, allele: &str) -> f64 {
        self.scores
            .get(allele)
            .copied()
            .unwrap_or(self.default_score)
    }

    pub fn total(&self, diplotype: &Diplotype) -> f64 {
        diplotype.alleles().iter().map(|allele| self.score(allele)).sum()
    }

    pub fn classify(&self, diplotype: &Diplotype) -> &str {
        let total = self.total(diplotype);
        self.bands
            .iter()
            .find(|band| band.contains(total))
            .map(|band| band.phenotype.as_str())
            .unwrap_or(self.above.as_str())
    }
}

type PhenotypeResolver = fn(&MetabolizerModel, &Diplotype) -> Option<String>;

/// Phenotype strategies, in precedence order.
const PHENOTYPE_RESOLVERS: [PhenotypeResolver; 2] = [
    MetabolizerModel::lookup_diplotype,
    MetabolizerModel::activity_phenotype,
];

impl MetabolizerModel {
    pub fn classify(&self, gene: &str, variants: &[Variant]) -> PhenotypeEntry {
        let diplotype = Diplotype::from_alleles(&alleles_of(variants));
        let phenotype = self.phenotype_for(&diplotype);

        PhenotypeEntry::new(gene, &diplotype.to_string(), &phenotype, variants)
    }

    ///
    /// Resolve a diplotype to a phenotype: table lookup in either allele order,
    /// then the activity score, then `Indeterminate`.
    ///
    pub fn phenotype_for(&self, diplotype: &Diplotype) -> String {
        PHENOTYPE_RESOLVERS
            .iter()
            .find_map(|resolver| resolver(self, diplotype))
            .unwrap_or_else(|| INDETERMINATE.to_string())
    }

    fn lookup_diplotype(&self, diplotype: &Diplotype) -> Option<String> {
        self.diplotypes
            .get(&diplotype.to_string())
            .or_else(|| self.diplotypes.get(&diplotype.reversed().to_string()))
            .cloned()
    }

    fn activity_phenotype(&self, diplotype: &Diplotype) -> Option<String> {
        self.activity
            .as_ref()
            .map(|activity| activity.classify(diplotype).to_string())
    }
}

///
/// Alleles carried by a gene's variants, in extraction order. Homozygous
/// alternate calls contribute their allele twice.
///
fn alleles_of(variants: &[Variant]) -> Vec<&str> {
    let mut alleles = Vec::with_capacity(variants.len() * 2);

    for variant in variants {
        let allele = variant
            .star_allele
            .as_deref()
            .filter(|star| !star.is_empty())
            .unwrap_or(UNKNOWN_ALLELE);

        alleles.push(allele);
        if variant.zygosity == Zygosity::HomozygousAlt {
            alleles.push(allele);
        }
    }

    alleles
}
