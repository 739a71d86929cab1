pub mod gene_group;
pub mod locus;
pub mod phenotype;
pub mod variant;

// re-export for cleaner imports
pub use self::gene_group::GeneVariantGroup;
pub use self::locus::GeneLocus;
pub use self::phenotype::{PhenotypeEntry, PhenotypeProfile};
pub use self::variant::{Variant, Zygosity};
