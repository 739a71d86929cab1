//! Built-in rule book: drug-specific rules in evaluation order.
//!
//! Rules for a drug are evaluated top to bottom and the first match wins, so more
//! specific phenotypes are listed before broader ones.
use pgxrisk_core::consts::{CYP2C19, CYP2C9, CYP2D6, DPYD, HLA_A, HLA_B, SLCO1B1, TPMT};

use crate::models::RiskLabel::{self, AdjustDosage, Ineffective, Safe, Toxic};
use crate::models::Severity::{self, Critical, High, Low, Moderate};

pub(crate) struct RuleSpec {
    pub gene: &'static str,
    pub phenotypes: &'static [&'static str],
    pub label: RiskLabel,
    pub severity: Severity,
    pub confidence: f64,
    pub action: &'static str,
    pub alternatives: &'static [&'static str],
    pub dose: Option<&'static str>,
    pub monitoring: Option<&'static str>,
    pub guideline: &'static str,
}

pub(crate) struct DrugSpec {
    pub drug: &'static str,
    pub primary_gene: &'static str,
    pub rules: &'static [RuleSpec],
}

const CODEINE_GUIDELINE: &str = "CPIC guideline for codeine and CYP2D6 (2014, updated 2022)";
const TRAMADOL_GUIDELINE: &str = "CPIC guideline for tramadol and CYP2D6 (2021)";
const WARFARIN_GUIDELINE: &str = "CPIC guideline for warfarin, CYP2C9, VKORC1, CYP4F2 (2017)";
const CLOPIDOGREL_GUIDELINE: &str =
    "CPIC guideline for clopidogrel and CYP2C19 (2013, updated 2022)";
const STATIN_GUIDELINE: &str = "CPIC guideline for statins and SLCO1B1, ABCG2, CYP2C9 (2022)";
const THIOPURINE_GUIDELINE: &str =
    "CPIC guideline for thiopurines and TPMT, NUDT15 (2018, updated 2021)";
const FLUOROPYRIMIDINE_GUIDELINE: &str =
    "CPIC guideline for fluoropyrimidines and DPYD (2017, updated 2022)";
const FLUOROPYRIMIDINE_EMA_GUIDELINE: &str =
    "CPIC guideline for fluoropyrimidines and DPYD (2017, updated 2022); EMA recommendation";
const TCA_GUIDELINE: &str =
    "CPIC guideline for tricyclic antidepressants and CYP2D6, CYP2C19 (2016)";
const ABACAVIR_GUIDELINE: &str = "CPIC guideline for abacavir and HLA-B (2012, updated 2014)";
const CARBAMAZEPINE_GUIDELINE: &str =
    "CPIC guideline for carbamazepine and oxcarbazepine and HLA-B, HLA-A (2017)";

pub(crate) const DRUG_RULES: &[DrugSpec] = &[
    // opioids
    DrugSpec {
        drug: "CODEINE",
        primary_gene: CYP2D6,
        rules: &[
            RuleSpec {
                gene: CYP2D6,
                phenotypes: &["Poor Metabolizer"],
                label: Ineffective,
                severity: Moderate,
                confidence: 0.95,
                action: "Use alternative opioid (morphine, hydromorphone, oxycodone). Codeine will not be converted to active morphine.",
                alternatives: &["Morphine", "Hydromorphone", "Oxycodone"],
                dose: None,
                monitoring: None,
                guideline: CODEINE_GUIDELINE,
            },
            RuleSpec {
                gene: CYP2D6,
                phenotypes: &["Ultrarapid Metabolizer"],
                label: Toxic,
                severity: Critical,
                confidence: 0.97,
                action: "CONTRAINDICATED. Risk of life-threatening morphine toxicity (respiratory depression). Select alternative opioid.",
                alternatives: &["Morphine (dose-titrated)", "Tramadol", "Buprenorphine"],
                dose: None,
                monitoring: None,
                guideline: "CPIC guideline for codeine and CYP2D6 (2014, updated 2022); FDA black box warning",
            },
            RuleSpec {
                gene: CYP2D6,
                phenotypes: &["Intermediate Metabolizer"],
                label: AdjustDosage,
                severity: Moderate,
                confidence: 0.80,
                action: "Reduced analgesic effect expected. Consider alternative opioid or careful dose titration.",
                alternatives: &["Morphine", "Oxycodone"],
                dose: Some(
                    "Consider dose increase with caution or switch to non-CYP2D6-metabolised opioid.",
                ),
                monitoring: None,
                guideline: CODEINE_GUIDELINE,
            },
            RuleSpec {
                gene: CYP2D6,
                phenotypes: &["Normal Metabolizer"],
                label: Safe,
                severity: Low,
                confidence: 0.90,
                action: "Use label-recommended dosing.",
                alternatives: &[],
                dose: None,
                monitoring: None,
                guideline: CODEINE_GUIDELINE,
            },
        ],
    },
    DrugSpec {
        drug: "TRAMADOL",
        primary_gene: CYP2D6,
        rules: &[
            RuleSpec {
                gene: CYP2D6,
                phenotypes: &["Ultrarapid Metabolizer"],
                label: Toxic,
                severity: High,
                confidence: 0.88,
                action: "Risk of excessive O-desmethyltramadol accumulation. Consider alternative.",
                alternatives: &["Morphine", "Oxycodone"],
                dose: None,
                monitoring: None,
                guideline: TRAMADOL_GUIDELINE,
            },
            RuleSpec {
                gene: CYP2D6,
                phenotypes: &["Poor Metabolizer"],
                label: Ineffective,
                severity: Moderate,
                confidence: 0.85,
                action: "Reduced O-desmethyltramadol formation; reduced analgesia. Consider alternative.",
                alternatives: &["Morphine", "Hydromorphone"],
                dose: None,
                monitoring: None,
                guideline: TRAMADOL_GUIDELINE,
            },
        ],
    },
    // anticoagulants
    DrugSpec {
        drug: "WARFARIN",
        primary_gene: CYP2C9,
        rules: &[
            RuleSpec {
                gene: CYP2C9,
                phenotypes: &["Poor Metabolizer"],
                label: AdjustDosage,
                severity: High,
                confidence: 0.92,
                action: "Significantly reduced warfarin metabolism. Start at 25–50% of standard dose. Frequent INR monitoring required.",
                alternatives: &[],
                dose: Some("Reduce initial dose by 50%. Target INR 2.0–3.0 with enhanced monitoring."),
                monitoring: Some("INR twice weekly for first 2 weeks, then weekly until stable."),
                guideline: WARFARIN_GUIDELINE,
            },
            RuleSpec {
                gene: CYP2C9,
                phenotypes: &["Intermediate Metabolizer"],
                label: AdjustDosage,
                severity: Moderate,
                confidence: 0.87,
                action: "Reduced warfarin clearance. Initiate at 75% of standard dose with close INR monitoring.",
                alternatives: &[],
                dose: Some("Reduce initial dose by 25%. Increase INR monitoring frequency."),
                monitoring: Some("Weekly INR for first month."),
                guideline: WARFARIN_GUIDELINE,
            },
            RuleSpec {
                gene: CYP2C9,
                phenotypes: &["Normal Metabolizer"],
                label: Safe,
                severity: Low,
                confidence: 0.85,
                action: "Use standard label dosing. Routine INR monitoring.",
                alternatives: &[],
                dose: None,
                monitoring: None,
                guideline: WARFARIN_GUIDELINE,
            },
        ],
    },
    DrugSpec {
        drug: "PHENYTOIN",
        primary_gene: CYP2C9,
        rules: &[RuleSpec {
            gene: CYP2C9,
            phenotypes: &["Poor Metabolizer"],
            label: Toxic,
            severity: High,
            confidence: 0.90,
            action: "Severely reduced phenytoin metabolism. High risk of toxicity at standard doses. Reduce dose by 25–50%.",
            alternatives: &[],
            dose: Some("Reduce by 25–50%, use lower maintenance dose. Monitor serum levels closely."),
            monitoring: None,
            guideline: "CPIC guideline for phenytoin and CYP2C9, HLA-B (2020)",
        }],
    },
    // antiplatelet
    DrugSpec {
        drug: "CLOPIDOGREL",
        primary_gene: CYP2C19,
        rules: &[
            RuleSpec {
                gene: CYP2C19,
                phenotypes: &["Poor Metabolizer"],
                label: Ineffective,
                severity: High,
                confidence: 0.95,
                action: "Clopidogrel will not be converted to active thiosuflate metabolite. Use prasugrel or ticagrelor instead.",
                alternatives: &["Prasugrel", "Ticagrelor"],
                dose: None,
                monitoring: None,
                guideline: CLOPIDOGREL_GUIDELINE,
            },
            RuleSpec {
                gene: CYP2C19,
                phenotypes: &["Intermediate Metabolizer"],
                label: AdjustDosage,
                severity: Moderate,
                confidence: 0.78,
                action: "Reduced activation of clopidogrel. Consider alternative antiplatelet if high cardiovascular risk.",
                alternatives: &["Prasugrel", "Ticagrelor"],
                dose: None,
                monitoring: None,
                guideline: CLOPIDOGREL_GUIDELINE,
            },
            RuleSpec {
                gene: CYP2C19,
                phenotypes: &["Rapid Metabolizer", "Ultrarapid Metabolizer"],
                label: Safe,
                severity: Low,
                confidence: 0.88,
                action: "Enhanced clopidogrel activation. Use label-recommended dosing.",
                alternatives: &[],
                dose: None,
                monitoring: None,
                guideline: CLOPIDOGREL_GUIDELINE,
            },
            RuleSpec {
                gene: CYP2C19,
                phenotypes: &["Normal Metabolizer"],
                label: Safe,
                severity: Low,
                confidence: 0.90,
                action: "Standard clopidogrel dosing recommended.",
                alternatives: &[],
                dose: None,
                monitoring: None,
                guideline: CLOPIDOGREL_GUIDELINE,
            },
        ],
    },
    // statins
    DrugSpec {
        drug: "SIMVASTATIN",
        primary_gene: SLCO1B1,
        rules: &[
            RuleSpec {
                gene: SLCO1B1,
                phenotypes: &["Poor Function", "Decreased Function"],
                label: Toxic,
                severity: High,
                confidence: 0.92,
                action: "High risk of simvastatin-induced myopathy due to reduced hepatic uptake. Use pravastatin or rosuvastatin. If simvastatin must be used, limit dose to 20 mg/day.",
                alternatives: &["Pravastatin", "Rosuvastatin", "Atorvastatin (lower risk)"],
                dose: Some("Maximum simvastatin dose 20 mg/day if no alternative available."),
                monitoring: Some("Monitor for muscle pain, weakness, elevated CK."),
                guideline: STATIN_GUIDELINE,
            },
            RuleSpec {
                gene: SLCO1B1,
                phenotypes: &["Normal Function"],
                label: Safe,
                severity: Low,
                confidence: 0.88,
                action: "Standard simvastatin dosing. Routine monitoring.",
                alternatives: &[],
                dose: None,
                monitoring: None,
                guideline: STATIN_GUIDELINE,
            },
        ],
    },
    DrugSpec {
        drug: "ATORVASTATIN",
        primary_gene: SLCO1B1,
        rules: &[RuleSpec {
            gene: SLCO1B1,
            phenotypes: &["Poor Function"],
            label: AdjustDosage,
            severity: Moderate,
            confidence: 0.78,
            action: "Increased atorvastatin exposure. Use lowest effective dose and monitor for myopathy.",
            alternatives: &[],
            dose: Some("Consider dose reduction. Max 40 mg/day."),
            monitoring: None,
            guideline: "CPIC guideline for statins and SLCO1B1 (2022)",
        }],
    },
    // thiopurines
    DrugSpec {
        drug: "AZATHIOPRINE",
        primary_gene: TPMT,
        rules: &[
            RuleSpec {
                gene: TPMT,
                phenotypes: &["Poor Metabolizer"],
                label: Toxic,
                severity: Critical,
                confidence: 0.97,
                action: "TPMT-deficient patient. Life-threatening myelosuppression risk at standard doses. Use non-thiopurine immunosuppressant or reduce dose to 10% with weekly CBC monitoring.",
                alternatives: &["Mycophenolate mofetil", "Methotrexate"],
                dose: Some(
                    "If thiopurine required: reduce dose to 10% of standard, titrate based on CBC.",
                ),
                monitoring: Some("Weekly CBC for first month, then bi-weekly."),
                guideline: THIOPURINE_GUIDELINE,
            },
            RuleSpec {
                gene: TPMT,
                phenotypes: &["Intermediate Metabolizer"],
                label: AdjustDosage,
                severity: Moderate,
                confidence: 0.88,
                action: "Reduced TPMT activity. Start at 50% of standard dose and titrate based on tolerance and CBC.",
                alternatives: &[],
                dose: Some("Reduce initial dose by 30–50%."),
                monitoring: Some("CBC every 2 weeks for first 3 months."),
                guideline: THIOPURINE_GUIDELINE,
            },
            RuleSpec {
                gene: TPMT,
                phenotypes: &["Normal Metabolizer"],
                label: Safe,
                severity: Low,
                confidence: 0.88,
                action: "Standard dosing. Routine CBC monitoring per label.",
                alternatives: &[],
                dose: None,
                monitoring: None,
                guideline: THIOPURINE_GUIDELINE,
            },
        ],
    },
    DrugSpec {
        drug: "MERCAPTOPURINE",
        primary_gene: TPMT,
        rules: &[
            RuleSpec {
                gene: TPMT,
                phenotypes: &["Poor Metabolizer"],
                label: Toxic,
                severity: Critical,
                confidence: 0.97,
                action: "CONTRAINDICATED at standard doses. Use 10% of standard dose with aggressive CBC monitoring or select alternative.",
                alternatives: &["Mycophenolate mofetil"],
                dose: None,
                monitoring: None,
                guideline: THIOPURINE_GUIDELINE,
            },
            RuleSpec {
                gene: TPMT,
                phenotypes: &["Intermediate Metabolizer"],
                label: AdjustDosage,
                severity: High,
                confidence: 0.90,
                action: "Start at 30–70% of standard dose, titrate based on CBC and clinical response.",
                alternatives: &[],
                dose: Some("Reduce dose by 30–70%."),
                monitoring: None,
                guideline: THIOPURINE_GUIDELINE,
            },
        ],
    },
    DrugSpec {
        drug: "THIOGUANINE",
        primary_gene: TPMT,
        rules: &[RuleSpec {
            gene: TPMT,
            phenotypes: &["Poor Metabolizer"],
            label: Toxic,
            severity: Critical,
            confidence: 0.95,
            action: "Reduce dose to 10% with weekly CBC monitoring or use non-thiopurine alternative.",
            alternatives: &["Cytarabine"],
            dose: None,
            monitoring: None,
            guideline: THIOPURINE_GUIDELINE,
        }],
    },
    // fluoropyrimidines
    DrugSpec {
        drug: "FLUOROURACIL",
        primary_gene: DPYD,
        rules: &[
            RuleSpec {
                gene: DPYD,
                phenotypes: &["Poor Metabolizer"],
                label: Toxic,
                severity: Critical,
                confidence: 0.97,
                action: "CONTRAINDICATED. DPYD-deficient patient has <1% residual enzyme activity. Life-threatening 5-FU toxicity. Use alternative chemotherapy.",
                alternatives: &["Irinotecan-based regimens (if applicable)", "Oxaliplatin"],
                dose: None,
                monitoring: None,
                guideline: FLUOROPYRIMIDINE_EMA_GUIDELINE,
            },
            RuleSpec {
                gene: DPYD,
                phenotypes: &["Intermediate Metabolizer"],
                label: AdjustDosage,
                severity: High,
                confidence: 0.90,
                action: "Reduce starting dose by 50%. If well-tolerated after 2 cycles consider dose escalation with close monitoring.",
                alternatives: &[],
                dose: Some("Start at 50% of standard dose."),
                monitoring: Some("CBC, LFTs, and toxicity assessment each cycle."),
                guideline: FLUOROPYRIMIDINE_EMA_GUIDELINE,
            },
            RuleSpec {
                gene: DPYD,
                phenotypes: &["Normal Metabolizer"],
                label: Safe,
                severity: Low,
                confidence: 0.88,
                action: "Standard dosing per oncology protocol.",
                alternatives: &[],
                dose: None,
                monitoring: None,
                guideline: FLUOROPYRIMIDINE_GUIDELINE,
            },
        ],
    },
    DrugSpec {
        drug: "CAPECITABINE",
        primary_gene: DPYD,
        rules: &[
            RuleSpec {
                gene: DPYD,
                phenotypes: &["Poor Metabolizer"],
                label: Toxic,
                severity: Critical,
                confidence: 0.96,
                action: "CONTRAINDICATED. Capecitabine is a prodrug of 5-FU. Use alternative therapy.",
                alternatives: &[],
                dose: None,
                monitoring: None,
                guideline: FLUOROPYRIMIDINE_GUIDELINE,
            },
            RuleSpec {
                gene: DPYD,
                phenotypes: &["Intermediate Metabolizer"],
                label: AdjustDosage,
                severity: High,
                confidence: 0.90,
                action: "Reduce starting dose to 50%. Monitor for fluoropyrimidine toxicity.",
                alternatives: &[],
                dose: Some("Start at 50% of standard dose."),
                monitoring: None,
                guideline: FLUOROPYRIMIDINE_GUIDELINE,
            },
        ],
    },
    // antidepressants
    DrugSpec {
        drug: "AMITRIPTYLINE",
        primary_gene: CYP2D6,
        rules: &[
            RuleSpec {
                gene: CYP2D6,
                phenotypes: &["Poor Metabolizer"],
                label: Toxic,
                severity: High,
                confidence: 0.88,
                action: "Reduced amitriptyline metabolism. High plasma levels possible. Reduce dose by 50% or use alternative (nortriptyline at reduced dose).",
                alternatives: &["SSRIs", "SNRIs"],
                dose: Some("Reduce dose to 50% of standard."),
                monitoring: None,
                guideline: TCA_GUIDELINE,
            },
            RuleSpec {
                gene: CYP2C19,
                phenotypes: &["Poor Metabolizer"],
                label: AdjustDosage,
                severity: Moderate,
                confidence: 0.80,
                action: "Reduced demethylation of amitriptyline. Use 50% of standard dose or alternative.",
                alternatives: &[],
                dose: Some("Reduce initial dose by 50%."),
                monitoring: None,
                guideline: TCA_GUIDELINE,
            },
        ],
    },
    DrugSpec {
        drug: "CITALOPRAM",
        primary_gene: CYP2C19,
        rules: &[
            RuleSpec {
                gene: CYP2C19,
                phenotypes: &["Poor Metabolizer"],
                label: AdjustDosage,
                severity: Moderate,
                confidence: 0.85,
                action: "Reduced citalopram metabolism → elevated plasma levels → QTc prolongation risk. Reduce dose by 50%. Maximum 20 mg/day.",
                alternatives: &[],
                dose: Some("Maximum dose 20 mg/day."),
                monitoring: Some("ECG monitoring recommended."),
                guideline: "CPIC guideline for SSRIs and CYP2C19 (2015); FDA Drug Safety Communication",
            },
            RuleSpec {
                gene: CYP2C19,
                phenotypes: &["Ultrarapid Metabolizer"],
                label: Ineffective,
                severity: Moderate,
                confidence: 0.75,
                action: "Rapid citalopram metabolism may reduce efficacy. Consider alternative SSRI.",
                alternatives: &["Sertraline", "Mirtazapine"],
                dose: None,
                monitoring: None,
                guideline: "CPIC guideline for SSRIs and CYP2C19 (2015)",
            },
        ],
    },
    // HLA-mediated hypersensitivity
    DrugSpec {
        drug: "ABACAVIR",
        primary_gene: HLA_B,
        rules: &[
            RuleSpec {
                gene: HLA_B,
                phenotypes: &["Positive"],
                label: Toxic,
                severity: Critical,
                confidence: 0.98,
                action: "HLA-B*57:01 carrier. High risk of abacavir hypersensitivity reaction. Abacavir is not recommended.",
                alternatives: &["Tenofovir alafenamide", "Tenofovir disoproxil fumarate"],
                dose: None,
                monitoring: None,
                guideline: ABACAVIR_GUIDELINE,
            },
            RuleSpec {
                gene: HLA_B,
                phenotypes: &["Negative"],
                label: Safe,
                severity: Low,
                confidence: 0.90,
                action: "HLA-B*57:01 not detected. Use abacavir per standard dosing.",
                alternatives: &[],
                dose: None,
                monitoring: None,
                guideline: ABACAVIR_GUIDELINE,
            },
        ],
    },
    DrugSpec {
        drug: "CARBAMAZEPINE",
        primary_gene: HLA_B,
        rules: &[
            RuleSpec {
                gene: HLA_B,
                phenotypes: &["Positive"],
                label: Toxic,
                severity: Critical,
                confidence: 0.95,
                action: "HLA-B risk allele carrier. High risk of carbamazepine-induced SJS/TEN. Use a non-aromatic anticonvulsant.",
                alternatives: &["Levetiracetam", "Valproic acid"],
                dose: None,
                monitoring: None,
                guideline: CARBAMAZEPINE_GUIDELINE,
            },
            RuleSpec {
                gene: HLA_A,
                phenotypes: &["Positive"],
                label: Toxic,
                severity: High,
                confidence: 0.85,
                action: "HLA-A*31:01 carrier. Increased risk of carbamazepine hypersensitivity (DRESS, SJS/TEN). Consider an alternative anticonvulsant.",
                alternatives: &["Levetiracetam", "Lamotrigine"],
                dose: None,
                monitoring: Some("Monitor for rash and fever during the first 3 months."),
                guideline: CARBAMAZEPINE_GUIDELINE,
            },
            RuleSpec {
                gene: HLA_B,
                phenotypes: &["Negative"],
                label: Safe,
                severity: Low,
                confidence: 0.88,
                action: "No HLA-B risk allele detected. Use carbamazepine per standard dosing.",
                alternatives: &[],
                dose: None,
                monitoring: None,
                guideline: CARBAMAZEPINE_GUIDELINE,
            },
        ],
    },
];
