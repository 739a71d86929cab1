pub mod metabolizer;
pub mod presence;
pub mod transporter;

use serde::{Deserialize, Serialize};

use pgxrisk_core::{PhenotypeEntry, Variant};

// re-export for cleaner imports
pub use self::metabolizer::{ActivityBand, ActivityModel, MetabolizerModel};
pub use self::presence::{PresenceModel, PresenceTag};
pub use self::transporter::{TransporterCall, TransporterModel};

///
/// GeneModel enum, the classification strategy used for a gene.
///
/// In a TOML table the variant is selected by the `model` key:
/// `"presence"`, `"transporter"` or `"metabolizer"`.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum GeneModel {
    Presence(PresenceModel),
    Transporter(TransporterModel),
    Metabolizer(MetabolizerModel),
}

impl GeneModel {
    pub fn classify(&self, gene: &str, variants: &[Variant]) -> PhenotypeEntry {
        match self {
            GeneModel::Presence(model) => model.classify(gene, variants),
            GeneModel::Transporter(model) => model.classify(gene, variants),
            GeneModel::Metabolizer(model) => model.classify(gene, variants),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GeneModel::Presence(_) => "presence",
            GeneModel::Transporter(_) => "transporter",
            GeneModel::Metabolizer(_) => "metabolizer",
        }
    }
}
