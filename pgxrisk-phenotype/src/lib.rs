//! # Diplotype and phenotype inference for pharmacogenomic panel genes.
//!
//! Every gene is classified by one of three models, chosen per gene by the
//! [`PhenotypeTables`]:
//!
//! - **metabolizer**: star alleles are paired into a diplotype and looked up in a
//!   diplotype table, with an optional activity-score fallback;
//! - **transporter**: the genotype of a single key SNP selects a function call and a
//!   secondary risk label;
//! - **presence**: tag SNPs mark an allele as present (`Positive`) or absent (`Negative`).
//!
//! Presence genes always appear in an inferred profile, even without any variant data.
//!
//! ```rust
//! use pgxrisk_core::GeneVariantGroup;
//! use pgxrisk_phenotype::{PhenotypeTables, infer_phenotypes};
//!
//! let grouped = GeneVariantGroup::with_genes(["CYP2D6"]);
//! let profile = infer_phenotypes(&grouped, PhenotypeTables::builtin());
//!
//! assert_eq!(profile.get("CYP2D6").unwrap().diplotype, "*1/*1");
//! assert_eq!(profile.get("HLA-B").unwrap().phenotype, "Negative");
//! ```
pub mod consts;
pub mod diplotype;
pub mod infer;
pub mod models;
pub mod tables;

// re-export for cleaner imports
pub use diplotype::Diplotype;
pub use infer::infer_phenotypes;
pub use models::GeneModel;
pub use tables::PhenotypeTables;
