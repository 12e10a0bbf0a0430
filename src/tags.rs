//! Qualitative classification tags per function family.
//!
//! Tags are keyed by family name (`"ackley"`), while catalog problems may
//! carry start-variant suffixes (`"ackley_good_start"`); [`family_name`] joins
//! the two keying schemes. The seven booleans are independent facts about a
//! family, recorded as published — no invariant links them.

use crate::error::{BenchmarkError, Result};
use std::collections::HashMap;

/// Classification facts for one function family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionTags {
    /// The function is continuous over its domain.
    pub continuous: bool,
    /// The function is convex.
    pub convex: bool,
    /// The function is a sum of per-coordinate terms.
    pub separable: bool,
    /// The function is differentiable everywhere.
    pub differentiable: bool,
    /// The function has more than one local minimum.
    pub multimodal: bool,
    /// The published form carries a randomized term (any implementation must
    /// take its seed as explicit input, never ambient state).
    pub randomized_term: bool,
    /// The shape depends on constants beyond the input vector.
    pub parametric: bool,
}

/// Strips the start-variant suffix from a problem name, leaving the family
/// name used as a tag key.
pub fn family_name(problem_name: &str) -> &str {
    problem_name
        .strip_suffix("_good_start")
        .or_else(|| problem_name.strip_suffix("_bad_start"))
        .unwrap_or(problem_name)
}

const fn tags(
    continuous: bool,
    convex: bool,
    separable: bool,
    differentiable: bool,
    multimodal: bool,
    randomized_term: bool,
    parametric: bool,
) -> FunctionTags {
    FunctionTags {
        continuous,
        convex,
        separable,
        differentiable,
        multimodal,
        randomized_term,
        parametric,
    }
}

// Columns: continuous, convex, separable, differentiable, multimodal,
// randomized_term, parametric.
#[rustfmt::skip]
const TABLE: &[(&str, FunctionTags)] = &[
    ("ackley",                tags(true,  false, true,  true,  true,  false, true)),
    ("ackley2",               tags(false, true,  false, true,  false, false, false)),
    ("ackley3",               tags(false, false, false, true,  true,  false, false)),
    ("ackley4",               tags(false, false, false, true,  true,  false, false)),
    ("adjiman",               tags(true,  false, false, true,  true,  false, false)),
    ("alpine1",               tags(false, false, true,  true,  true,  false, false)),
    ("alpine2",               tags(true,  false, true,  true,  true,  false, false)),
    ("bartels",               tags(false, false, false, false, true,  false, false)),
    ("beale",                 tags(true,  false, false, true,  true,  false, true)),
    ("bird",                  tags(true,  false, false, true,  true,  false, true)),
    ("bohachevsky1",          tags(true,  true,  true,  true,  false, false, false)),
    ("bohachevsky2",          tags(true,  false, false, true,  true,  false, false)),
    ("bohachevsky3",          tags(true,  false, false, true,  true,  false, false)),
    ("booth",                 tags(true,  true,  false, true,  false, false, false)),
    ("branin",                tags(true,  false, false, true,  true,  false, false)),
    ("brent",                 tags(true,  true,  false, true,  false, false, false)),
    ("brown",                 tags(true,  true,  false, true,  false, false, false)),
    ("bukin6",                tags(true,  true,  false, false, true,  false, false)),
    ("colville",              tags(true,  false, false, true,  true,  false, false)),
    ("crossintray",           tags(true,  false, false, false, true,  false, false)),
    ("dejong5",               tags(true,  false, false, true,  true,  false, true)),
    ("deckkersaarts",         tags(true,  false, false, true,  true,  false, false)),
    ("dixonprice",            tags(true,  true,  false, true,  false, false, false)),
    ("dropwave",              tags(true,  false, false, true,  false, false, false)),
    ("easom",                 tags(true,  false, true,  true,  true,  false, false)),
    ("eggcrate",              tags(true,  false, true,  true,  true,  false, false)),
    ("eggholder",             tags(false, false, false, true,  true,  false, false)),
    ("exponential",           tags(true,  true,  true,  true,  false, false, false)),
    ("forrester",             tags(true,  false, false, true,  true,  false, false)),
    ("goldsteinprice",        tags(false, false, false, true,  true,  false, false)),
    ("gramacylee",            tags(true,  false, false, true,  true,  false, false)),
    ("griewank",              tags(true,  false, true,  true,  false, false, false)),
    ("happycat",              tags(true,  false, false, true,  true,  false, true)),
    ("himmelblau",            tags(true,  false, false, true,  true,  false, false)),
    ("holdertable",           tags(true,  false, false, false, true,  false, false)),
    ("keane",                 tags(true,  false, false, true,  true,  false, false)),
    ("langermann",            tags(true,  false, false, true,  true,  false, true)),
    ("leon",                  tags(true,  false, false, true,  false, false, false)),
    ("levy13",                tags(true,  false, false, true,  true,  false, false)),
    ("matyas",                tags(true,  true,  false, true,  false, false, false)),
    ("mccormick",             tags(true,  true,  false, true,  true,  false, false)),
    ("michalewicz",           tags(true,  false, true,  true,  true,  false, true)),
    ("periodic",              tags(true,  false, false, true,  true,  false, false)),
    ("permzerodbeta",         tags(true,  true,  false, true,  false, false, true)),
    ("permdbeta",             tags(true,  false, false, true,  true,  false, true)),
    ("powell",                tags(true,  true,  true,  false, false, false, false)),
    ("qing",                  tags(true,  false, true,  true,  true,  false, false)),
    ("quartic",               tags(true,  false, true,  true,  true,  true,  false)),
    ("rastrigin",             tags(true,  false, true,  true,  true,  false, false)),
    ("ridge",                 tags(true,  false, false, true,  false, false, true)),
    ("rosenbrock",            tags(true,  false, false, true,  true,  false, true)),
    ("rotatedhyperellipsoid", tags(true,  true,  false, true,  false, false, false)),
    ("salomon",               tags(true,  false, false, true,  true,  false, false)),
    ("schaffel1",             tags(true,  false, false, true,  false, false, false)),
    ("schaffel2",             tags(true,  false, false, true,  false, false, false)),
    ("schaffel3",             tags(true,  false, false, true,  false, false, false)),
    ("schaffel4",             tags(true,  false, false, true,  false, false, false)),
    ("schwefel",              tags(true,  false, true,  false, true,  false, false)),
    ("schwefel2_20",          tags(true,  true,  true,  false, false, false, false)),
    ("schwefel2_21",          tags(true,  true,  true,  false, false, false, false)),
    ("schwefel2_22",          tags(true,  true,  true,  false, false, false, false)),
    ("schwefel2_23",          tags(true,  true,  true,  false, false, false, false)),
    ("shekel",                tags(true,  false, false, true,  true,  false, true)),
    ("shubert",               tags(true,  false, false, true,  true,  false, false)),
    ("shubert3",              tags(true,  false, false, true,  true,  false, false)),
    ("shubert4",              tags(true,  false, false, true,  true,  false, false)),
    ("sphere",                tags(true,  true,  true,  false, false, false, false)),
    ("styblinskitank",        tags(true,  false, true,  true,  true,  false, false)),
    ("sumsquares",            tags(true,  true,  true,  true,  false, false, false)),
    ("thevenot",              tags(true,  true,  true,  true,  true,  false, true)),
    ("threehumps",            tags(true,  false, false, true,  false, false, false)),
    ("trid",                  tags(true,  true,  false, true,  false, false, false)),
    ("wolfe",                 tags(true,  false, false, true,  true,  false, false)),
    ("xinsheyang",            tags(false, false, true,  false, true,  true,  false)),
    ("xinsheyang2",           tags(false, false, false, false, true,  false, false)),
    ("xinsheyang3",           tags(true,  true,  false, true,  false, false, true)),
    ("xinsheyang4",           tags(true,  true,  false, false, false, false, false)),
    ("zakharov",              tags(false, false, false, false, false, false, false)),
];

/// Lookup table of classification tags, keyed by function family name.
pub struct TagTable {
    entries: HashMap<&'static str, FunctionTags>,
}

impl TagTable {
    /// Builds the table from its literal entries.
    pub fn new() -> Self {
        Self {
            entries: TABLE.iter().copied().collect(),
        }
    }

    /// Looks up the tags of a function family.
    pub fn get_tags(&self, family: &str) -> Result<&FunctionTags> {
        self.entries
            .get(family)
            .ok_or_else(|| BenchmarkError::UnknownFamily {
                name: family.to_string(),
            })
    }

    /// All family names, sorted alphabetically.
    pub fn family_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Family names whose tags satisfy `predicate`, sorted alphabetically.
    pub fn filter_by<P>(&self, predicate: P) -> Vec<&'static str>
    where
        P: Fn(&FunctionTags) -> bool,
    {
        let mut names: Vec<_> = self
            .entries
            .iter()
            .filter(|&(_, t)| predicate(t))
            .map(|(&name, _)| name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Number of classified families.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TagTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tags_known_family() {
        let table = TagTable::new();
        let ackley = table.get_tags("ackley").unwrap();

        assert!(ackley.continuous);
        assert!(!ackley.convex);
        assert!(ackley.separable);
        assert!(ackley.multimodal);
        assert!(ackley.parametric);
    }

    #[test]
    fn test_get_tags_unknown_family() {
        let table = TagTable::new();
        let err = table.get_tags("nonesuch").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "unknown function family: 'nonesuch'");
    }

    #[test]
    fn test_get_tags_is_pure() {
        let table = TagTable::new();

        assert_eq!(
            table.get_tags("rosenbrock").unwrap(),
            table.get_tags("rosenbrock").unwrap()
        );
    }

    #[test]
    fn test_filter_convex_and_differentiable() {
        let table = TagTable::new();
        let names = table.filter_by(|t| t.convex && t.differentiable);

        for expected in ["brown", "trid", "brent", "booth", "bohachevsky1"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
        // bartels is not differentiable, bukin6 is convex but not differentiable
        assert!(!names.contains(&"bartels"));
        assert!(!names.contains(&"bukin6"));
    }

    #[test]
    fn test_filter_randomized_term() {
        let table = TagTable::new();

        assert_eq!(
            table.filter_by(|t| t.randomized_term),
            vec!["quartic", "xinsheyang"]
        );
    }

    #[test]
    fn test_every_catalog_family_is_tagged() {
        use crate::catalog::ProblemCatalog;

        let table = TagTable::new();
        let catalog = ProblemCatalog::new();

        for problem in catalog.iter() {
            assert!(
                table.get_tags(problem.family()).is_ok(),
                "family '{}' of problem '{}' has no tags",
                problem.family(),
                problem.name
            );
        }
    }

    #[test]
    fn test_family_name_suffix_stripping() {
        assert_eq!(family_name("ackley_good_start"), "ackley");
        assert_eq!(family_name("ackley_bad_start"), "ackley");
        assert_eq!(family_name("adjiman"), "adjiman");
        assert_eq!(family_name("rosenbrock_good_start"), "rosenbrock");
    }

    #[test]
    fn test_table_size() {
        let table = TagTable::new();
        assert_eq!(table.len(), 78);
    }
}
