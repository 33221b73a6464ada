// src/teams/mod.rs

//! Read-only franchise lookups built once from embedded data.

mod data;

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::error::{Result, ScrapeError};

static INDEX: Lazy<TeamAbbreviationIndex> =
    Lazy::new(|| TeamAbbreviationIndex::new(data::TEAM_NAMES, data::FRANCHISE_SETS));

static FRANCHISES: Lazy<FranchiseAliasSets> =
    Lazy::new(|| FranchiseAliasSets::from_groups(data::FRANCHISE_SETS));

/// Process-wide name → code index.
pub fn abbreviations() -> &'static TeamAbbreviationIndex {
    &INDEX
}

/// Process-wide franchise lineages.
pub fn franchises() -> &'static FranchiseAliasSets {
    &FRANCHISES
}

/// Uppercase full team name → abbreviation code. The code set also holds
/// every lineage code, since player tables cite codes whose full name is
/// ambiguous (`CHH` and `CHO` are both "Charlotte Hornets").
#[derive(Debug)]
pub struct TeamAbbreviationIndex {
    by_name: HashMap<&'static str, &'static str>,
    codes: HashSet<&'static str>,
}

impl TeamAbbreviationIndex {
    fn new(
        pairs: &'static [(&'static str, &'static str)],
        lineages: &'static [&'static [&'static str]],
    ) -> Self {
        let by_name: HashMap<_, _> = pairs.iter().copied().collect();
        let codes = by_name
            .values()
            .copied()
            .chain(lineages.iter().flat_map(|group| group.iter().copied()))
            .collect();
        Self { by_name, codes }
    }

    /// Code for an already-cleaned, uppercase team name.
    pub fn abbr_of(&self, name: &str) -> Result<&'static str> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ScrapeError::UnknownFranchise(name.to_string()))
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Partition of codes into franchise lineages.
#[derive(Debug)]
pub struct FranchiseAliasSets {
    groups: Vec<&'static [&'static str]>,
    by_code: HashMap<&'static str, usize>,
}

impl FranchiseAliasSets {
    fn from_groups(groups: &'static [&'static [&'static str]]) -> Self {
        let mut by_code = HashMap::new();
        for (i, group) in groups.iter().enumerate() {
            for &code in group.iter() {
                by_code.insert(code, i);
            }
        }
        Self {
            groups: groups.to_vec(),
            by_code,
        }
    }

    /// The lineage containing `code`, if it belongs to one.
    pub fn group_of(&self, code: &str) -> Option<&'static [&'static str]> {
        self.by_code.get(code).map(|&i| self.groups[i])
    }

    /// Codes that count as `code`: its whole lineage, or just itself.
    pub fn lineage(&self, code: &str) -> Vec<String> {
        match self.group_of(code) {
            Some(group) => group.iter().map(|c| c.to_string()).collect(),
            None => vec![code.to_string()],
        }
    }

    pub fn same_franchise(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        match (self.by_code.get(a), self.by_code.get(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_hit_and_miss() {
        let idx = abbreviations();
        assert_eq!(idx.abbr_of("BOSTON CELTICS").unwrap(), "BOS");
        assert_eq!(idx.abbr_of("SEATTLE SUPERSONICS").unwrap(), "SEA");
        assert!(idx.contains_code("OKC"));
        assert!(!idx.contains_code("XYZ"));
        match idx.abbr_of("GOTHAM ROGUES") {
            Err(ScrapeError::UnknownFranchise(name)) => assert_eq!(name, "GOTHAM ROGUES"),
            other => panic!("expected UnknownFranchise, got {:?}", other),
        }
    }

    #[test]
    fn test_alias_sets_form_a_partition() {
        let mut seen = HashSet::new();
        for group in data::FRANCHISE_SETS {
            for code in group.iter() {
                assert!(seen.insert(*code), "{} appears in two lineages", code);
            }
        }
    }

    #[test]
    fn test_every_lineage_code_is_a_valid_team() {
        let idx = abbreviations();
        for group in data::FRANCHISE_SETS {
            for code in group.iter() {
                assert!(idx.contains_code(code), "{} missing from the index", code);
            }
        }
        for code in ["CHH", "NJA", "NYA", "DNA", "INA", "SAA", "DLC", "TEX"] {
            assert!(idx.contains_code(code));
        }
        assert!(!idx.contains_code("TOT"));
        assert!(!idx.contains_code("2TM"));
    }

    #[test]
    fn test_relocated_franchise_shares_a_lineage() {
        let f = franchises();
        assert!(f.same_franchise("SEA", "OKC"));
        assert!(f.same_franchise("BRK", "NJN"));
        assert!(!f.same_franchise("LAL", "LAC"));
        assert_eq!(f.lineage("MEM"), vec!["MEM", "VAN"]);
        assert_eq!(f.lineage("ZZZ"), vec!["ZZZ"]);
    }
}
