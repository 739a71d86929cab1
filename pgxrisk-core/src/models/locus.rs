use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::utils::normalize_chrom;

///
/// GeneLocus struct, the coordinate span of one panel gene.
///
/// Unlike BED regions both ends are inclusive, matching the 1-based
/// positions of variant files.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct GeneLocus {
    pub gene: String,
    pub chr: String,
    pub start: u64,
    pub end: u64,
}

impl GeneLocus {
    pub fn new(gene: &str, chr: &str, start: u64, end: u64) -> Self {
        GeneLocus {
            gene: gene.to_string(),
            chr: normalize_chrom(chr),
            start,
            end,
        }
    }

    ///
    /// Number of bases covered by the locus
    ///
    pub fn width(&self) -> u64 {
        self.end - self.start + 1
    }

    ///
    /// Check whether a position on an already normalized chromosome falls inside the locus
    ///
    pub fn contains(&self, chr: &str, position: u64) -> bool {
        self.chr == chr && self.start <= position && position <= self.end
    }

    ///
    /// Get the locus as `chr:start-end`
    ///
    pub fn as_string(&self) -> String {
        format!("{}:{}-{}", self.chr, self.start, self.end)
    }
}

impl Display for GeneLocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.gene, self.as_string())
    }
}
