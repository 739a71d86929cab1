//! # Drug risk rule engine for pharmacogenomic profiles.
//!
//! A [`RuleBook`] maps each drug to an ordered list of [`DrugRule`]s. [`assess_risk`]
//! walks a drug's rules in order and returns the first one whose gene phenotype matches,
//! so rules are authored most specific first. Every call returns a complete
//! [`RiskResult`]: unknown drugs are labelled `Unknown` and drugs without a matching
//! rule fall back to `Safe` with moderate confidence.
//!
//! ```rust
//! use pgxrisk_core::{PhenotypeEntry, PhenotypeProfile};
//! use pgxrisk_rules::{RiskLabel, RuleBook, assess_risk};
//!
//! let profile: PhenotypeProfile =
//!     [PhenotypeEntry::new("CYP2D6", "*4/*4", "Poor Metabolizer", &[])].into_iter().collect();
//!
//! let result = assess_risk("codeine", &profile, RuleBook::builtin());
//! assert_eq!(result.risk_label, RiskLabel::Ineffective);
//! assert_eq!(result.confidence, 0.95);
//! ```
//!
//! Enable the `parallel` feature for `par_assess_many`, which spreads a drug list over
//! the rayon thread pool.
mod builtin;

pub mod consts;
pub mod engine;
pub mod models;
pub mod rulebook;

// re-export for cleaner imports
#[cfg(feature = "parallel")]
pub use engine::par_assess_many;
pub use engine::{assess_many, assess_risk};
pub use models::{DrugEntry, DrugRule, RiskLabel, RiskResult, Severity};
pub use rulebook::{RuleBook, normalize_drug};
