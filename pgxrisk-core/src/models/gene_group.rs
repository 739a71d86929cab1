use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

use crate::models::Variant;

///
/// GeneVariantGroup struct, the extracted variants partitioned by panel gene.
///
/// Every tracked gene has exactly one entry, possibly empty. Within a gene the
/// variants keep their extraction order.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneVariantGroup {
    pub groups: BTreeMap<String, Vec<Variant>>,
}

impl GeneVariantGroup {
    ///
    /// Create a grouping with an empty entry for each gene.
    ///
    pub fn with_genes<I, S>(genes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GeneVariantGroup {
            groups: genes
                .into_iter()
                .map(|gene| (gene.into(), Vec::new()))
                .collect(),
        }
    }

    ///
    /// Append a variant to its gene's entry.
    ///
    /// Returns `false` and drops the variant when its gene is not tracked.
    ///
    pub fn push(&mut self, variant: Variant) -> bool {
        match self.groups.get_mut(&variant.gene) {
            Some(variants) => {
                variants.push(variant);
                true
            }
            None => false,
        }
    }

    ///
    /// Variants assigned to a gene, empty for untracked genes.
    ///
    pub fn get(&self, gene: &str) -> &[Variant] {
        self.groups.get(gene).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_gene(&self, gene: &str) -> bool {
        self.groups.contains_key(gene)
    }

    pub fn genes(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Variant])> {
        self.groups
            .iter()
            .map(|(gene, variants)| (gene.as_str(), variants.as_slice()))
    }

    ///
    /// Total number of grouped variants
    ///
    pub fn variant_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Display for GeneVariantGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GeneVariantGroup with {} genes and {} variants.",
            self.len(),
            self.variant_count()
        )
    }
}
