use std::fmt::{self, Display};

use crate::consts::{DIPLOTYPE_SEPARATOR, WILDTYPE_ALLELE};

///
/// Diplotype struct, the pair of alleles called for one gene.
///
/// The pair is ordered for display only; lookups must treat `*1/*4` and `*4/*1` alike.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diplotype {
    pub first: String,
    pub second: String,
}

impl Diplotype {
    pub fn new(first: &str, second: &str) -> Self {
        Diplotype {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    /// `*1/*1`
    pub fn wildtype() -> Self {
        Diplotype::new(WILDTYPE_ALLELE, WILDTYPE_ALLELE)
    }

    ///
    /// Build the canonical diplotype from alleles in extraction order.
    ///
    /// No alleles gives the wildtype pair and a single allele is paired with
    /// wildtype. Otherwise the first two alleles are taken and sorted lexically;
    /// any further alleles are ignored.
    ///
    pub fn from_alleles<S: AsRef<str>>(alleles: &[S]) -> Self {
        match alleles {
            [] => Diplotype::wildtype(),
            [only] => Diplotype::new(WILDTYPE_ALLELE, only.as_ref()),
            [first, second, ..] => {
                let mut pair = [first.as_ref(), second.as_ref()];
                pair.sort_unstable();
                Diplotype::new(pair[0], pair[1])
            }
        }
    }

    pub fn reversed(&self) -> Self {
        Diplotype::new(&self.second, &self.first)
    }

    pub fn alleles(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }

    ///
    /// Parse an `a/b` label. Returns `None` unless there are exactly two non-empty alleles.
    ///
    pub fn parse(label: &str) -> Option<Self> {
        let (first, second) = label.trim().split_once(DIPLOTYPE_SEPARATOR)?;
        let (first, second) = (first.trim(), second.trim());

        if first.is_empty() || second.is_empty() || second.contains(DIPLOTYPE_SEPARATOR) {
            return None;
        }

        Some(Diplotype::new(first, second))
    }
}

impl Display for Diplotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.first, DIPLOTYPE_SEPARATOR, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(&[], "*1/*1")]
    #[case(&["*4"], "*1/*4")]
    #[case(&["*4", "*4"], "*4/*4")]
    #[case(&["*4", "*10"], "*10/*4")]
    #[case(&["*41", "*2", "*3"], "*2/*41")]
    #[case(&["*?", "*2A"], "*2A/*?")]
    fn test_from_alleles(#[case] alleles: &[&str], #[case] expected: &str) {
        assert_eq!(Diplotype::from_alleles(alleles).to_string(), expected);
    }

    #[rstest]
    fn test_reversed() {
        let diplotype = Diplotype::new("*1", "*17");
        assert_eq!(diplotype.reversed().to_string(), "*17/*1");
        assert_eq!(diplotype.reversed().reversed(), diplotype);
    }

    #[rstest]
    #[case("*1/*4", Some(("*1", "*4")))]
    #[case(" *1a / *5 ", Some(("*1a", "*5")))]
    #[case("*1/*1xN", Some(("*1", "*1xN")))]
    #[case("*1", None)]
    #[case("*1/", None)]
    #[case("*1/*2/*3", None)]
    fn test_parse(#[case] label: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(
            Diplotype::parse(label),
            expected.map(|(a, b)| Diplotype::new(a, b))
        );
    }
}
