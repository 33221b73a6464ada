// src/normalize/rows.rs

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{Result, ScrapeError};
use crate::record::Value;
use crate::request::Entity;
use crate::teams::{abbreviations, franchises};

/// Prefix applied to statistical columns of opponent-perspective tables.
pub const OPP_PREFIX: &str = "OPP_";
pub const TEAM: &str = "TEAM";
pub const SEASON: &str = "SEASON";

static PLAYOFF_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\*+\s*$").expect("playoff marker regex should compile"));

/// Season totals of a traded player: `TOT` on older pages, `2TM`, `3TM`, … on newer ones.
static MULTI_TEAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(TOT|\dTM)$").expect("multi-team regex should compile"));

/// `2023` → `"2022-23"`.
pub fn season_label(season_end_year: u16) -> String {
    format!(
        "{}-{:02}",
        season_end_year.saturating_sub(1),
        season_end_year % 100
    )
}

/// Clean a team-name cell (playoff marker, case) and resolve it to a code.
pub fn strip_team_markup(cell: &str) -> Result<&'static str> {
    let name = PLAYOFF_MARKER.replace(cell.trim(), "").to_uppercase();
    abbreviations().abbr_of(&name)
}

/// Name opponent columns: every statistical column gets [`OPP_PREFIX`], `TEAM` does not.
pub fn opponent_columns(columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .map(|c| {
            if c == TEAM || c == SEASON {
                c.clone()
            } else {
                format!("{}{}", OPP_PREFIX, c)
            }
        })
        .collect()
}

/// Append the SEASON cell to a row.
pub fn derive_columns(mut row: Vec<Value>, season_end_year: u16) -> Vec<Value> {
    row.push(Value::Text(season_label(season_end_year)));
    row
}

/// Keep rows whose team cell (`team_col`) is the requested code or another
/// code of the same franchise. `League` keeps everything.
pub fn filter_entity(rows: Vec<Vec<Value>>, team_col: usize, entity: &Entity) -> Vec<Vec<Value>> {
    let wanted = match entity {
        Entity::League => return rows,
        Entity::Team(code) => code,
    };
    let lineage = franchises();
    debug!(codes = ?lineage.lineage(wanted), "keeping franchise lineage");
    rows.into_iter()
        .filter(|row| {
            row.get(team_col)
                .and_then(Value::as_str)
                .map_or(false, |code| lineage.same_franchise(code, wanted))
        })
        .collect()
}

/// Drop the combined rows of players who changed teams mid-season; their
/// per-team rows are kept.
pub fn drop_multi_team_rows(rows: Vec<Vec<Value>>, team_col: usize) -> Vec<Vec<Value>> {
    let before = rows.len();
    let kept: Vec<Vec<Value>> = rows
        .into_iter()
        .filter(|row| {
            !row.get(team_col)
                .and_then(Value::as_str)
                .map_or(false, |code| MULTI_TEAM.is_match(code.trim()))
        })
        .collect();
    if kept.len() < before {
        debug!(dropped = before - kept.len(), "dropped multi-team total rows");
    }
    kept
}

/// A player row's team cell must be a known code.
pub fn check_team_code(cell: &Value) -> Result<()> {
    match cell.as_str() {
        Some(code) if abbreviations().contains_code(code) => Ok(()),
        Some(code) => Err(ScrapeError::UnknownFranchise(code.to_string())),
        None => Err(ScrapeError::UnknownFranchise(String::new())),
    }
}

/// Drop separator rows: anything without a player name in `player_col`.
pub fn filter_non_players(rows: Vec<Vec<Value>>, player_col: usize) -> Vec<Vec<Value>> {
    rows.into_iter()
        .filter(|row| {
            row.get(player_col)
                .and_then(Value::as_str)
                .map_or(false, |name| !name.trim().is_empty())
        })
        .collect()
}
