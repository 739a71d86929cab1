//! # pgxrisk: pharmacogenomic drug risk classification.
//!
//! The pipeline runs in three deterministic stages, each in its own crate:
//!
//! 1. [`vcf`]: extract the panel-gene variants of a patient's variant file and group them by gene;
//! 2. [`phenotype`]: infer a diplotype and phenotype per gene;
//! 3. [`rules`]: evaluate drug-specific rules against the phenotype profile.
//!
//! [`Pipeline`] chains the stages over a set of reference tables, the built-in ones or
//! tables loaded from TOML.
//!
//! ```no_run
//! use pgxrisk::Pipeline;
//!
//! let analysis = Pipeline::builtin()
//!     .analyze("patient.vcf.gz", &["codeine", "warfarin"])
//!     .unwrap();
//!
//! for result in &analysis.results {
//!     println!("{result}");
//! }
//! ```
#[doc(inline)]
pub use pgxrisk_core as core;

#[cfg(feature = "vcf")]
#[doc(inline)]
pub use pgxrisk_vcf as vcf;

#[cfg(feature = "phenotype")]
#[doc(inline)]
pub use pgxrisk_phenotype as phenotype;

#[cfg(feature = "rules")]
#[doc(inline)]
pub use pgxrisk_rules as rules;

#[cfg(feature = "pipeline")]
pub mod pipeline;

#[cfg(feature = "pipeline")]
pub use pipeline::{Analysis, Pipeline};
