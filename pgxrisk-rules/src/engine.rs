use log::{debug, info};

use pgxrisk_core::{PhenotypeEntry, PhenotypeProfile};

use crate::consts::{
    NO_MATCH_ACTION, NO_MATCH_CONFIDENCE, NO_MATCH_GUIDELINE, PLACEHOLDER_DIPLOTYPE,
    PLACEHOLDER_PHENOTYPE, UNKNOWN, UNKNOWN_DRUG_CONFIDENCE, UNKNOWN_DRUG_GUIDELINE,
};
use crate::models::{DrugRule, RiskLabel, RiskResult, Severity};
use crate::rulebook::{RuleBook, normalize_drug};

///
/// Assess one drug against a phenotype profile.
///
/// The drug's rules are evaluated in their declared order and the first rule whose
/// gene has a phenotype matching one of its terms decides the result. A drug without
/// rules yields an `Unknown` result; a drug whose rules all miss yields a `Safe` result
/// with moderate confidence. Never fails.
///
/// # Arguments
/// - drug: drug name, any case, surrounding whitespace ignored
/// - profile: the patient's phenotype per gene
/// - rules: the rule book to evaluate
///
pub fn assess_risk(drug: &str, profile: &PhenotypeProfile, rules: &RuleBook) -> RiskResult {
    let name = normalize_drug(drug);
    let entry = rules.get(&name);
    let primary_gene = entry
        .and_then(|entry| entry.primary_gene.as_deref())
        .unwrap_or(UNKNOWN);

    let Some(entry) = entry.filter(|entry| !entry.rules.is_empty()) else {
        debug!("No pharmacogenomic rules for {}", name);
        return unknown_drug(drug.trim(), name, primary_gene, profile);
    };

    for rule in &entry.rules {
        let Some(gene_entry) = profile.get(&rule.gene) else {
            continue;
        };

        let patient_phenotype = gene_entry.matchable_phenotype();
        if patient_phenotype.is_empty() {
            continue;
        }

        if rule.matches(&patient_phenotype) {
            info!(
                "Drug {} matched rule: gene={} phenotype={} -> {}",
                name, rule.gene, patient_phenotype, rule.risk_label
            );
            return matched(name, rule, gene_entry, patient_phenotype);
        }
    }

    debug!("No rule matched for {}, defaulting to {}", name, RiskLabel::Safe);
    no_match(name, primary_gene, profile)
}

///
/// Assess several drugs against the same profile, one result per drug in input order.
///
pub fn assess_many<S: AsRef<str>>(
    drugs: &[S],
    profile: &PhenotypeProfile,
    rules: &RuleBook,
) -> Vec<RiskResult> {
    drugs
        .iter()
        .map(|drug| assess_risk(drug.as_ref(), profile, rules))
        .collect()
}

///
/// Parallel version of [`assess_many`]. Results keep the input order.
///
#[cfg(feature = "parallel")]
pub fn par_assess_many<S: AsRef<str> + Sync>(
    drugs: &[S],
    profile: &PhenotypeProfile,
    rules: &RuleBook,
) -> Vec<RiskResult> {
    use rayon::prelude::*;

    drugs
        .par_iter()
        .map(|drug| assess_risk(drug.as_ref(), profile, rules))
        .collect()
}

fn matched(
    drug: String,
    rule: &DrugRule,
    gene_entry: &PhenotypeEntry,
    patient_phenotype: String,
) -> RiskResult {
    RiskResult {
        drug,
        gene: rule.gene.clone(),
        risk_label: rule.risk_label,
        severity: rule.severity,
        confidence: rule.confidence,
        diplotype: gene_entry.diplotype.clone(),
        phenotype: patient_phenotype,
        detected_variants: gene_entry.detected_variants.clone(),
        clinical_action: rule.clinical_action.clone(),
        alternatives: rule.alternatives.clone(),
        dose_adjustment: rule.dose_adjustment.clone(),
        monitoring: rule.monitoring.clone(),
        guideline: rule.guideline.clone(),
    }
}

fn unknown_drug(
    query: &str,
    drug: String,
    primary_gene: &str,
    profile: &PhenotypeProfile,
) -> RiskResult {
    let gene_entry = profile.get(primary_gene);

    RiskResult {
        drug,
        gene: primary_gene.to_string(),
        risk_label: RiskLabel::Unknown,
        severity: Severity::Low,
        confidence: UNKNOWN_DRUG_CONFIDENCE,
        diplotype: gene_entry.map_or(UNKNOWN, |e| e.diplotype.as_str()).to_string(),
        phenotype: gene_entry.map_or(UNKNOWN, |e| e.phenotype.as_str()).to_string(),
        detected_variants: detected_variants(gene_entry),
        clinical_action: format!(
            "No pharmacogenomic guideline available for {}. Use standard prescribing information.",
            query
        ),
        alternatives: vec![],
        dose_adjustment: None,
        monitoring: None,
        guideline: UNKNOWN_DRUG_GUIDELINE.to_string(),
    }
}

fn no_match(drug: String, primary_gene: &str, profile: &PhenotypeProfile) -> RiskResult {
    let gene_entry = profile.get(primary_gene);

    RiskResult {
        drug,
        gene: primary_gene.to_string(),
        risk_label: RiskLabel::Safe,
        severity: Severity::Low,
        confidence: NO_MATCH_CONFIDENCE,
        diplotype: gene_entry
            .map_or(PLACEHOLDER_DIPLOTYPE, |e| e.diplotype.as_str())
            .to_string(),
        phenotype: gene_entry
            .map_or(PLACEHOLDER_PHENOTYPE, |e| e.phenotype.as_str())
            .to_string(),
        detected_variants: detected_variants(gene_entry),
        clinical_action: NO_MATCH_ACTION.to_string(),
        alternatives: vec![],
        dose_adjustment: None,
        monitoring: None,
        guideline: NO_MATCH_GUIDELINE.to_string(),
    }
}

fn detected_variants(gene_entry: Option<&PhenotypeEntry>) -> Vec<String> {
    gene_entry
        .map(|e| e.detected_variants.clone())
        .unwrap_or_default()
}
