//! # Core models and reference data for pharmacogenomic risk classification.
//!
//! This crate holds everything the pipeline stages share: the variant and phenotype
//! models that flow between stages, the fixed gene panel (rsID, star-allele and coordinate
//! tables) used by the extractor, and small file helpers.
//!
//! Reference tables are plain data. Each exposes a `builtin()` instance that is built once
//! per process and never mutated, and can be replaced by a TOML file for testing or
//! deployment-specific panels.
//!
//! ```rust
//! use pgxrisk_core::GenePanel;
//!
//! let panel = GenePanel::builtin();
//! assert_eq!(panel.gene_for_rsid("rs3892097"), Some("CYP2D6"));
//! assert_eq!(panel.gene_at("22", 42_524_947), Some("CYP2D6"));
//! ```
pub mod consts;
pub mod errors;
pub mod models;
pub mod panel;
pub mod utils;

// re-export for cleaner imports
pub use errors::{ReferenceDataError, ReferenceDataResult};
pub use models::{GeneLocus, GeneVariantGroup, PhenotypeEntry, PhenotypeProfile, Variant, Zygosity};
pub use panel::GenePanel;
