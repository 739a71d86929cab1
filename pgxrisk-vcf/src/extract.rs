use std::io::BufRead;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use pgxrisk_core::consts::UNKNOWN_SAMPLE_ID;
use pgxrisk_core::utils::{get_dynamic_reader, normalize_chrom, sample_name_from_path};
use pgxrisk_core::{GenePanel, Variant, Zygosity};

use crate::consts::{
    GENOTYPE_KEY, HEADER_PREFIX, INFO_GENE_KEYS, META_PREFIX, MIN_DATA_FIELDS, MISSING_VALUE,
    SAMPLE_COLUMN,
};
use crate::error::{Result, VcfError};

///
/// VcfExtraction struct, the retained variants of one file plus parsing diagnostics.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VcfExtraction {
    pub sample_id: String,
    pub variants: Vec<Variant>,
    /// Data lines with at least the eight mandatory columns.
    pub total_parsed: usize,
    /// Variants retained on panel genes.
    pub pgx_found: usize,
    pub errors: Vec<String>,
}

impl VcfExtraction {
    ///
    /// True when no line produced a diagnostic.
    ///
    pub fn parsing_succeeded(&self) -> bool {
        self.errors.is_empty()
    }

    ///
    /// Panel genes with at least one retained variant, in panel order.
    ///
    pub fn genes_with_variants<'p>(&self, panel: &'p GenePanel) -> Vec<&'p str> {
        panel
            .genes
            .iter()
            .filter(|gene| self.variants.iter().any(|v| &v.gene == *gene))
            .map(String::as_str)
            .collect()
    }
}

///
/// Extract the pharmacogenomic variants from a variant file.
///
/// Gzipped files (`.gz`) are decompressed on the fly.
///
/// # Arguments
/// - path: path to the variant file
/// - panel: genes and lookup tables deciding which variants are kept
///
pub fn extract<P: AsRef<Path>>(path: P, panel: &GenePanel) -> Result<VcfExtraction> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(VcfError::NotFound(path.display().to_string()));
    }

    let reader =
        get_dynamic_reader(path).map_err(|e| VcfError::Unreadable(format!("{:#}", e)))?;

    let mut extraction = read_records(reader, panel)?;
    if extraction.sample_id.is_empty() {
        extraction.sample_id =
            sample_name_from_path(path).unwrap_or_else(|| UNKNOWN_SAMPLE_ID.to_string());
    }

    info!(
        "Extracted {} pharmacogenomic variants from {} records in {} ({} diagnostics)",
        extraction.pgx_found,
        extraction.total_parsed,
        path.display(),
        extraction.errors.len()
    );

    Ok(extraction)
}

///
/// Extract the pharmacogenomic variants from an already opened stream.
///
/// Fails when not even the first line can be read.
///
/// # Arguments
/// - reader: buffered variant file contents
/// - source_name: optional file name, used for the sample identifier when the header has none
/// - panel: genes and lookup tables deciding which variants are kept
///
pub fn extract_from_reader<R: BufRead>(
    reader: R,
    source_name: Option<&str>,
    panel: &GenePanel,
) -> Result<VcfExtraction> {
    let mut extraction = read_records(reader, panel)?;
    if extraction.sample_id.is_empty() {
        extraction.sample_id = source_name
            .and_then(|name| sample_name_from_path(Path::new(name)))
            .unwrap_or_else(|| UNKNOWN_SAMPLE_ID.to_string());
    }
    Ok(extraction)
}

///
/// Walk every line of the source. The sample id is left empty when the header
/// does not name a sample so the caller can fall back to its own source name.
///
/// A source whose first read fails is unreadable and yields an error. A read
/// failure after that ends the walk with a diagnostic, keeping the records
/// parsed so far.
///
fn read_records<R: BufRead>(mut reader: R, panel: &GenePanel) -> Result<VcfExtraction> {
    let mut extraction = VcfExtraction {
        sample_id: String::new(),
        variants: Vec::new(),
        total_parsed: 0,
        pgx_found: 0,
        errors: Vec::new(),
    };

    let mut header_seen = false;
    let mut buffer: Vec<u8> = Vec::new();
    let mut line_num: usize = 0;

    loop {
        buffer.clear();
        match reader.read_until(b'\n', &mut buffer) {
            Ok(0) => break,
            Ok(_) => line_num += 1,
            Err(e) if line_num == 0 => return Err(VcfError::Io(e)),
            Err(e) => {
                warn!("Read error after line {}: {}", line_num, e);
                extraction
                    .errors
                    .push(format!("Read error after line {}: {}", line_num, e));
                break;
            }
        }

        let line = String::from_utf8_lossy(&buffer);
        let line = line.trim_end_matches(['\n', '\r']);

        if line.starts_with(META_PREFIX) {
            continue;
        }

        if line.starts_with(HEADER_PREFIX) {
            let columns: Vec<&str> = line.trim_start_matches('#').split('\t').collect();
            if let Some(sample) = columns.get(SAMPLE_COLUMN).map(|s| s.trim()) {
                if !sample.is_empty() {
                    extraction.sample_id = sample.to_string();
                }
            }
            header_seen = true;
            continue;
        }

        // anything before the column header is preamble
        if !header_seen || line.trim().is_empty() {
            continue;
        }

        let Some(record) = DataLine::parse(line) else {
            warn!("Line {}: fewer than {} fields, skipped", line_num, MIN_DATA_FIELDS);
            extraction.errors.push(format!(
                "Line {}: fewer than {} fields, skipped",
                line_num, MIN_DATA_FIELDS
            ));
            continue;
        };

        extraction.total_parsed += 1;

        if let Some(variant) = record.into_variant(panel) {
            debug!(
                "PGx variant found: {} {} [{}]",
                variant.gene, variant, variant.zygosity
            );
            extraction.variants.push(variant);
        }
    }

    extraction.pgx_found = extraction.variants.len();
    Ok(extraction)
}

///
/// One tab-delimited data line, borrowed from the input.
///
#[derive(Debug)]
struct DataLine<'a> {
    chrom: &'a str,
    position: &'a str,
    id: &'a str,
    ref_allele: &'a str,
    alt_allele: &'a str,
    quality: &'a str,
    filter: &'a str,
    info: &'a str,
    format: Option<&'a str>,
    sample: Option<&'a str>,
}

impl<'a> DataLine<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_DATA_FIELDS {
            return None;
        }

        // FORMAT is only meaningful together with a SAMPLE column
        let (format, sample) = match fields.len() > SAMPLE_COLUMN {
            true => (Some(fields[8]), Some(fields[9])),
            false => (None, None),
        };

        Some(DataLine {
            chrom: fields[0].trim(),
            position: fields[1].trim(),
            id: fields[2].trim(),
            ref_allele: fields[3].trim(),
            alt_allele: fields[4].trim(),
            quality: fields[5].trim(),
            filter: fields[6].trim(),
            info: fields[7].trim(),
            format,
            sample,
        })
    }

    fn rsid(&self) -> Option<&'a str> {
        match self.id.is_empty() || self.id == MISSING_VALUE {
            true => None,
            false => Some(self.id),
        }
    }

    fn position(&self) -> u64 {
        self.position.parse().unwrap_or(0)
    }

    ///
    /// Build the retained variant, or `None` when the line has no panel gene
    /// or is homozygous reference.
    ///
    fn into_variant(self, panel: &GenePanel) -> Option<Variant> {
        let gene = resolve_gene(panel, &self)?;

        let genotype = parse_genotype(self.format, self.sample);
        let zygosity = Zygosity::from_genotype(genotype.as_deref());
        if zygosity == Zygosity::HomozygousRef {
            return None;
        }

        let rsid = self.rsid();
        Some(Variant {
            chrom: normalize_chrom(self.chrom),
            position: self.position(),
            rsid: rsid.map(str::to_string),
            ref_allele: self.ref_allele.to_string(),
            alt_allele: self.alt_allele.to_string(),
            gene: gene.to_string(),
            genotype,
            zygosity,
            star_allele: rsid
                .and_then(|id| panel.star_allele_for(id))
                .map(str::to_string),
            quality: self.quality.to_string(),
            filter: self.filter.to_string(),
        })
    }
}

type GeneResolver = for<'p, 'r, 'a> fn(&'p GenePanel, &'r DataLine<'a>) -> Option<&'p str>;

/// Gene assignment strategies, in precedence order.
const GENE_RESOLVERS: [GeneResolver; 3] = [gene_from_rsid, gene_from_info, gene_from_locus];

fn resolve_gene<'p>(panel: &'p GenePanel, record: &DataLine<'_>) -> Option<&'p str> {
    GENE_RESOLVERS
        .iter()
        .find_map(|resolver| resolver(panel, record))
}

fn gene_from_rsid<'p>(panel: &'p GenePanel, record: &DataLine<'_>) -> Option<&'p str> {
    record.rsid().and_then(|rsid| panel.gene_for_rsid(rsid))
}

///
/// Take the first value of a `GENE=` INFO entry, if it names a panel gene.
///
fn gene_from_info<'p>(panel: &'p GenePanel, record: &DataLine<'_>) -> Option<&'p str> {
    let candidate = record.info.split(';').find_map(|entry| {
        let (key, value) = entry.split_once('=')?;
        match INFO_GENE_KEYS.contains(&key.trim()) {
            true => value.split(',').next().map(str::trim),
            false => None,
        }
    })?;

    panel
        .genes
        .iter()
        .find(|gene| gene.as_str() == candidate)
        .map(String::as_str)
}

fn gene_from_locus<'p>(panel: &'p GenePanel, record: &DataLine<'_>) -> Option<&'p str> {
    panel.gene_at(record.chrom, record.position())
}

///
/// Read the GT value for the sample and normalize phased separators.
///
fn parse_genotype(format: Option<&str>, sample: Option<&str>) -> Option<String> {
    let keys: Vec<&str> = format?.split(':').collect();
    let values: Vec<&str> = sample?.split(':').collect();

    let index = keys.iter().position(|key| *key == GENOTYPE_KEY)?;
    values.get(index).map(|gt| gt.trim().replace('|', "/"))
}
