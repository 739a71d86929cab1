use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use pgxrisk_core::{GenePanel, GeneVariantGroup, PhenotypeProfile};
use pgxrisk_phenotype::{PhenotypeTables, infer_phenotypes};
use pgxrisk_rules::{RiskResult, RuleBook, assess_many};
use pgxrisk_vcf::{VcfExtraction, extract, extract_from_reader, group_by_gene};

///
/// Analysis struct, the output of every stage for one patient file.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub extraction: VcfExtraction,
    pub grouped: GeneVariantGroup,
    pub profile: PhenotypeProfile,
    /// One result per requested drug, in request order.
    pub results: Vec<RiskResult>,
}

impl Analysis {
    pub fn sample_id(&self) -> &str {
        &self.extraction.sample_id
    }
}

///
/// Pipeline struct, the three pipeline stages bound to their reference tables.
///
/// The tables are only read, so one pipeline can serve any number of threads.
///
#[derive(Clone, Copy, Debug)]
pub struct Pipeline<'a> {
    panel: &'a GenePanel,
    tables: &'a PhenotypeTables,
    rules: &'a RuleBook,
}

impl Pipeline<'static> {
    ///
    /// Pipeline over the built-in panel, phenotype tables and rule book.
    ///
    pub fn builtin() -> Self {
        Pipeline {
            panel: GenePanel::builtin(),
            tables: PhenotypeTables::builtin(),
            rules: RuleBook::builtin(),
        }
    }
}

impl Default for Pipeline<'static> {
    fn default() -> Self {
        Pipeline::builtin()
    }
}

impl<'a> Pipeline<'a> {
    pub fn new(panel: &'a GenePanel, tables: &'a PhenotypeTables, rules: &'a RuleBook) -> Self {
        Pipeline {
            panel,
            tables,
            rules,
        }
    }

    pub fn panel(&self) -> &'a GenePanel {
        self.panel
    }

    pub fn tables(&self) -> &'a PhenotypeTables {
        self.tables
    }

    pub fn rules(&self) -> &'a RuleBook {
        self.rules
    }

    ///
    /// Run every stage on a variant file.
    ///
    /// Fails only when the file is missing or cannot be opened.
    ///
    /// # Arguments
    /// - path: plain or gzipped variant file
    /// - drugs: drug names to assess
    ///
    pub fn analyze<P: AsRef<Path>, S: AsRef<str>>(&self, path: P, drugs: &[S]) -> Result<Analysis> {
        let path = path.as_ref();

        let start = Instant::now();
        let extraction = extract(path, self.panel)
            .with_context(|| format!("Failed to extract variants from {}", path.display()))?;
        info!(
            "stage extract finished in {} ms",
            start.elapsed().as_millis()
        );

        Ok(self.analyze_extraction(extraction, drugs))
    }

    ///
    /// Run every stage on an already opened variant stream.
    ///
    /// Fails when the stream cannot be read at all.
    ///
    /// # Arguments
    /// - reader: variant file contents
    /// - source_name: file name used for the sample identifier when the header has none
    /// - drugs: drug names to assess
    ///
    pub fn analyze_reader<R: BufRead, S: AsRef<str>>(
        &self,
        reader: R,
        source_name: Option<&str>,
        drugs: &[S],
    ) -> Result<Analysis> {
        let extraction = extract_from_reader(reader, source_name, self.panel)
            .context("Failed to extract variants from stream")?;
        Ok(self.analyze_extraction(extraction, drugs))
    }

    fn analyze_extraction<S: AsRef<str>>(&self, extraction: VcfExtraction, drugs: &[S]) -> Analysis {
        let start = Instant::now();
        let grouped = group_by_gene(&extraction.variants, self.panel);
        info!("stage group finished: {}", grouped);

        let profile = infer_phenotypes(&grouped, self.tables);
        info!("stage phenotype finished: {}", profile);

        let results = assess_many(drugs, &profile, self.rules);
        info!(
            "stage rules finished: {} drugs assessed for {} in {} ms",
            results.len(),
            extraction.sample_id,
            start.elapsed().as_millis()
        );

        Analysis {
            extraction,
            grouped,
            profile,
            results,
        }
    }
}
