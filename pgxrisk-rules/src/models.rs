use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Clinical risk category of a drug for a patient.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    Safe,
    #[serde(rename = "Adjust Dosage")]
    AdjustDosage,
    Toxic,
    Ineffective,
    Unknown,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Safe => "Safe",
            RiskLabel::AdjustDosage => "Adjust Dosage",
            RiskLabel::Toxic => "Toxic",
            RiskLabel::Ineffective => "Ineffective",
            RiskLabel::Unknown => "Unknown",
        }
    }
}

impl Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of a risk, ordered from `Low` to `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Moderate,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// DrugRule struct, one entry of a drug's ordered rule list.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrugRule {
    /// Gene whose phenotype the rule inspects.
    pub gene: String,
    /// Phenotype terms, any of which makes the rule fire.
    pub phenotype_match: Vec<String>,
    pub risk_label: RiskLabel,
    pub severity: Severity,
    pub confidence: f64,
    pub clinical_action: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
    #[serde(default)]
    pub dose_adjustment: Option<String>,
    #[serde(default)]
    pub monitoring: Option<String>,
    pub guideline: String,
}

impl DrugRule {
    ///
    /// Case-insensitive, two-way substring match: a term inside the patient
    /// phenotype, or the patient phenotype inside a term.
    ///
    /// The two-way test is permissive. A patient phenotype `Rapid Metabolizer`
    /// matches the term `Ultrarapid Metabolizer`.
    ///
    pub fn matches(&self, patient_phenotype: &str) -> bool {
        let patient = patient_phenotype.to_lowercase();

        self.phenotype_match.iter().any(|term| {
            let term = term.to_lowercase();
            patient.contains(&term) || term.contains(&patient)
        })
    }
}

///
/// DrugEntry struct, a drug's nominal primary gene and its rules in evaluation order.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrugEntry {
    #[serde(default)]
    pub primary_gene: Option<String>,
    #[serde(default)]
    pub rules: Vec<DrugRule>,
}

///
/// RiskResult struct, the assessment of one drug against one phenotype profile.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Normalized (trimmed, upper-case) drug name.
    pub drug: String,
    pub gene: String,
    pub risk_label: RiskLabel,
    pub severity: Severity,
    pub confidence: f64,
    pub diplotype: String,
    pub phenotype: String,
    pub detected_variants: Vec<String>,
    pub clinical_action: String,
    pub alternatives: Vec<String>,
    pub dose_adjustment: Option<String>,
    pub monitoring: Option<String>,
    pub guideline: String,
}

impl Display for RiskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{} ({})\t{}\t{:.2}",
            self.drug, self.gene, self.phenotype, self.diplotype, self.risk_label, self.confidence
        )
    }
}
