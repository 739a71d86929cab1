use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::io::prelude::*;
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::consts::CHROM_PREFIX;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Normalize a chromosome name so it always carries a lowercase `chr` prefix.
///
/// `7`, `chr7` and `CHR7` all become `chr7`.
///
pub fn normalize_chrom(chrom: &str) -> String {
    let chrom = chrom.trim();
    let has_prefix = chrom
        .get(..CHROM_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(CHROM_PREFIX));

    match has_prefix {
        true => format!("{}{}", CHROM_PREFIX, &chrom[CHROM_PREFIX.len()..]),
        false => format!("{}{}", CHROM_PREFIX, chrom),
    }
}

///
/// Derive a sample name from a file path: the upper-cased file name without
/// a trailing `.gz` and its last extension.
///
/// `data/patient_01.vcf.gz` gives `PATIENT_01`.
///
pub fn sample_name_from_path(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let base = file_name.strip_suffix(".gz").unwrap_or(file_name);
    let stem = Path::new(base).file_stem()?.to_str()?;

    match stem.is_empty() {
        true => None,
        false => Some(stem.to_uppercase()),
    }
}
