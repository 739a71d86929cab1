use log::debug;

use pgxrisk_core::{GeneVariantGroup, PhenotypeProfile};

use crate::models::{GeneModel, MetabolizerModel};
use crate::tables::PhenotypeTables;

///
/// Infer a diplotype and phenotype for every gene of a grouping.
///
/// Each gene is classified by its model in `tables`; genes without one fall back to
/// an empty metabolizer model. Every presence-model gene is guaranteed an entry,
/// `Wildtype`/`Negative` when the grouping has nothing for it.
///
/// # Arguments
/// - grouped: variants partitioned by gene
/// - tables: classification model per gene
///
pub fn infer_phenotypes(grouped: &GeneVariantGroup, tables: &PhenotypeTables) -> PhenotypeProfile {
    let fallback = GeneModel::Metabolizer(MetabolizerModel::default());

    let mut profile: PhenotypeProfile = grouped
        .iter()
        .map(|(gene, variants)| {
            let model = tables.model_for(gene).unwrap_or(&fallback);
            let entry = model.classify(gene, variants);
            debug!(
                "Gene {} ({} model) -> diplotype={} phenotype={}",
                gene,
                model.name(),
                entry.diplotype,
                entry.phenotype
            );
            entry
        })
        .collect();

    for (gene, presence) in tables.presence_genes() {
        if !profile.contains_gene(gene) {
            debug!("Gene {} has no variant data, defaulting to wildtype", gene);
            profile.insert(presence.default_entry(gene));
        }
    }

    profile
}
