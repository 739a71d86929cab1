use pgxrisk_core::{GenePanel, GeneVariantGroup, Variant};

///
/// Partition extracted variants by panel gene.
///
/// Every panel gene gets an entry, empty when no variant was assigned to it.
/// Variants keep their extraction order; variants on genes outside the panel are left out.
///
/// # Arguments
/// - variants: variants as returned by the extractor
/// - panel: the gene panel defining the entries
///
pub fn group_by_gene(variants: &[Variant], panel: &GenePanel) -> GeneVariantGroup {
    let mut grouped = GeneVariantGroup::with_genes(panel.genes.iter().cloned());

    for variant in variants {
        grouped.push(variant.clone());
    }

    grouped
}
