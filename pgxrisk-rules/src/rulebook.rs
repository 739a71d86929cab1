use std::fs::read_to_string;
use std::path::Path;

use fxhash::FxHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use pgxrisk_core::{ReferenceDataError, ReferenceDataResult};

use crate::builtin::{DRUG_RULES, DrugSpec, RuleSpec};
use crate::models::{DrugEntry, DrugRule};

static BUILTIN_RULES: Lazy<RuleBook> = Lazy::new(RuleBook::default_rules);

///
/// RuleBook struct, the drugs with pharmacogenomic guidance and their ordered rules.
///
/// Drug names are stored upper-case; lookups trim and upper-case the query.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleBook {
    #[serde(rename = "drugs")]
    pub entries: FxHashMap<String, DrugEntry>,
}

///
/// Normalize a drug name for lookup: trimmed and upper-cased.
///
pub fn normalize_drug(drug: &str) -> String {
    drug.trim().to_uppercase()
}

impl RuleBook {
    ///
    /// The built-in rule book, created on first use and shared by every caller.
    ///
    pub fn builtin() -> &'static RuleBook {
        &BUILTIN_RULES
    }

    fn default_rules() -> RuleBook {
        RuleBook {
            entries: DRUG_RULES
                .iter()
                .map(|spec| (spec.drug.to_string(), entry_from_spec(spec)))
                .collect(),
        }
    }

    ///
    /// Parse a rule book from a TOML document and check it for consistency.
    ///
    pub fn from_toml_str(toml_str: &str) -> ReferenceDataResult<Self> {
        let book: RuleBook = toml::from_str(toml_str)?;

        let book = RuleBook {
            entries: book
                .entries
                .into_iter()
                .map(|(drug, entry)| (normalize_drug(&drug), entry))
                .collect(),
        };

        book.validate()?;
        Ok(book)
    }

    fn validate(&self) -> ReferenceDataResult<()> {
        for (drug, entry) in &self.entries {
            if drug.is_empty() {
                return Err(ReferenceDataError::InvalidTable(
                    "rule book has a drug without a name".to_string(),
                ));
            }

            for (index, rule) in entry.rules.iter().enumerate() {
                let problem = if rule.gene.trim().is_empty() {
                    Some("has no gene")
                } else if rule.phenotype_match.is_empty() {
                    Some("has no phenotype terms")
                } else if rule.phenotype_match.iter().any(|term| term.trim().is_empty()) {
                    Some("has an empty phenotype term")
                } else if !(0.0..=1.0).contains(&rule.confidence) {
                    Some("has a confidence outside 0..=1")
                } else {
                    None
                };

                if let Some(problem) = problem {
                    return Err(ReferenceDataError::InvalidTable(format!(
                        "{drug} rule {} {problem}",
                        index + 1
                    )));
                }
            }
        }

        Ok(())
    }

    ///
    /// Entry for a drug, matched case-insensitively after trimming.
    ///
    pub fn get(&self, drug: &str) -> Option<&DrugEntry> {
        self.entries.get(&normalize_drug(drug))
    }

    ///
    /// Recognized drugs in sorted order.
    ///
    pub fn drugs(&self) -> Vec<&str> {
        let mut drugs: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        drugs.sort_unstable();
        drugs
    }

    pub fn primary_gene(&self, drug: &str) -> Option<&str> {
        self.get(drug)?.primary_gene.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<&Path> for RuleBook {
    type Error = ReferenceDataError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        RuleBook::from_toml_str(&toml_str)
    }
}

fn entry_from_spec(spec: &DrugSpec) -> DrugEntry {
    DrugEntry {
        primary_gene: Some(spec.primary_gene.to_string()),
        rules: spec.rules.iter().map(rule_from_spec).collect(),
    }
}

fn rule_from_spec(spec: &RuleSpec) -> DrugRule {
    DrugRule {
        gene: spec.gene.to_string(),
        phenotype_match: spec.phenotypes.iter().map(|p| p.to_string()).collect(),
        risk_label: spec.label,
        severity: spec.severity,
        confidence: spec.confidence,
        clinical_action: spec.action.to_string(),
        alternatives: spec.alternatives.iter().map(|a| a.to_string()).collect(),
        dose_adjustment: spec.dose.map(str::to_string),
        monitoring: spec.monitoring.map(str::to_string),
        guideline: spec.guideline.to_string(),
    }
}
