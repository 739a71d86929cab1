//! # Variant file extraction for pharmacogenomic analysis.
//!
//! This crate turns a flat variant file (VCF 4.x, plain or gzipped) into the [`Variant`]
//! records the rest of the pipeline works on, keeping only calls on the genes of a
//! [`GenePanel`]. Malformed lines never abort a run: they are collected as diagnostics on
//! the [`VcfExtraction`]. The only hard failures are a source that does not exist
//! and one that cannot be opened or read at all.
//!
//! ```no_run
//! use pgxrisk_core::GenePanel;
//! use pgxrisk_vcf::{extract, group_by_gene};
//!
//! let panel = GenePanel::builtin();
//! let extraction = extract("patient.vcf.gz", panel).unwrap();
//! let grouped = group_by_gene(&extraction.variants, panel);
//!
//! println!("{}: {} pharmacogenomic variants", extraction.sample_id, extraction.pgx_found);
//! ```
//!
//! [`Variant`]: pgxrisk_core::Variant
//! [`GenePanel`]: pgxrisk_core::GenePanel
pub mod consts;
pub mod error;
pub mod extract;
pub mod group;

// re-expose core functions
pub use error::*;
pub use extract::{VcfExtraction, extract, extract_from_reader};
pub use group::group_by_gene;
