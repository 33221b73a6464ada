// src/normalize/header.rs

use tracing::{debug, error};

use crate::error::{Result, ScrapeError};
use crate::request::View;
use crate::schema::{schema_for, Layout};
use crate::table::{is_placeholder, RawTable};

/// Output of header resolution: which source columns survive, what they are
/// called, and which columns are appended as missing values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHeader {
    /// Source column index for each entry of `names`.
    pub source: Vec<usize>,
    pub names: Vec<String>,
    pub backfill: Vec<String>,
    /// Width every raw row must have.
    pub source_width: usize,
}

impl ResolvedHeader {
    /// Full ordered column list: kept columns, then backfill.
    pub fn columns(&self) -> Vec<String> {
        self.names.iter().chain(&self.backfill).cloned().collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// Collapse the header of `table` and map it onto the canonical columns for
/// (`view`, `season`).
pub fn resolve_header(table: &RawTable, view: View, season: u16) -> Result<ResolvedHeader> {
    let labels = table.header.labels();
    let schema = schema_for(view);
    if table.header.is_grouped() {
        debug!(%view, "collapsing grouped header to sub-labels");
    }

    let source: Vec<usize> = match schema.layout {
        Layout::Positional => (0..labels.len()).collect(),
        Layout::Fixed | Layout::Passthrough => labels
            .iter()
            .enumerate()
            .filter(|(_, l)| !is_placeholder(l))
            .map(|(i, _)| i)
            .collect(),
    };

    let resolved = match schema.variant_for(season) {
        Some(variant) => {
            if source.len() != variant.columns.len() {
                let err = ScrapeError::mismatch(
                    view,
                    format!(
                        "season {} expects {} columns, table has {} ({} labels, {} spacers dropped)",
                        season,
                        variant.columns.len(),
                        source.len(),
                        labels.len(),
                        labels.len() - source.len()
                    ),
                );
                error!(%view, season, error = %err, "header does not fit schema");
                return Err(err);
            }
            ResolvedHeader {
                source,
                names: variant.columns.iter().map(|c| c.to_string()).collect(),
                backfill: variant.backfill.iter().map(|c| c.to_string()).collect(),
                source_width: labels.len(),
            }
        }
        None => {
            let names = source.iter().map(|&i| labels[i].clone()).collect();
            ResolvedHeader {
                source,
                names,
                backfill: Vec::new(),
                source_width: labels.len(),
            }
        }
    };

    debug!(%view, season, columns = resolved.names.len(), backfill = resolved.backfill.len(), "resolved header");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{PlayerFormat, TeamFormat};
    use crate::schema::views;
    use crate::table::Header;

    /// Grouped shooting header shaped like the source: spacer columns between groups.
    fn shooting_header(canonical: &[&str]) -> Header {
        let mut labels = Vec::new();
        let mut groups = Vec::new();
        for (i, c) in canonical.iter().enumerate() {
            // spacer after MP and after every sixth column
            if i == 4 || (i > 4 && i % 6 == 0) {
                labels.push(String::new());
                groups.push(String::new());
            }
            labels.push(c.to_string());
            groups.push(if i < 4 { String::new() } else { "Shooting".into() });
        }
        Header::Grouped { groups, labels }
    }

    fn table(header: Header) -> RawTable {
        RawTable {
            header,
            rows: Vec::new(),
        }
    }

    #[test]
    fn test_stable_within_a_variant() {
        let view = View::Team(TeamFormat::Shooting);
        let t = table(shooting_header(views::TEAM_SHOOTING_PRE_LAYUPS));
        let a = resolve_header(&t, view, 2016).unwrap();
        let b = resolve_header(&t, view, 2021).unwrap();
        assert_eq!(a.columns(), b.columns());
        assert_eq!(a.backfill, vec!["LayupsFGA", "LayupsMade"]);
        assert_eq!(a.columns().len(), views::TEAM_SHOOTING.len());
        assert_eq!(a.columns().last().map(String::as_str), Some("LayupsMade"));

        let t = table(shooting_header(views::TEAM_SHOOTING));
        let c = resolve_header(&t, view, 2022).unwrap();
        let d = resolve_header(&t, view, 2024).unwrap();
        assert_eq!(c, d);
        assert!(c.backfill.is_empty());
    }

    #[test]
    fn test_spacer_columns_are_dropped() {
        let t = table(shooting_header(views::PLAYER_PBP));
        let r = resolve_header(&t, View::Player(PlayerFormat::PlayByPlay), 2019).unwrap();
        assert_eq!(r.names, views::PLAYER_PBP);
        assert!(r.source_width > r.source.len());
        for &i in &r.source {
            assert!(!t.header.labels()[i].is_empty());
        }
    }

    #[test]
    fn test_wrong_width_is_a_structural_mismatch() {
        // a post-threshold header resolved as an older season
        let t = table(shooting_header(views::TEAM_SHOOTING));
        let err = resolve_header(&t, View::Team(TeamFormat::Shooting), 2019).unwrap_err();
        assert!(matches!(err, ScrapeError::StructuralMismatch { .. }));
    }

    #[test]
    fn test_passthrough_keeps_source_labels() {
        let t = RawTable::flat(&["Rk", "Team", "G", "", "PTS"], Vec::new());
        let r = resolve_header(&t, View::Opponent(TeamFormat::PerGame), 2023).unwrap();
        assert_eq!(r.names, vec!["Rk", "Team", "G", "PTS"]);
        assert_eq!(r.source, vec![0, 1, 2, 4]);
    }

    #[test]
    fn test_roster_keeps_blank_country_column() {
        let t = RawTable::flat(
            &["No.", "Player", "Pos", "Ht", "Wt", "Birth Date", "", "Exp", "College"],
            Vec::new(),
        );
        let r = resolve_header(&t, View::Roster, 2023).unwrap();
        assert_eq!(r.names, views::ROSTER);
        assert_eq!(r.source, (0..9).collect::<Vec<_>>());
    }
}
