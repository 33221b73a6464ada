// src/normalize/mod.rs

//! Schema normalization: one [`RawTable`] in, one column-consistent
//! [`RecordSet`] out.

pub mod header;
pub mod rows;

use chrono::NaiveDate;
use tracing::{debug, error, info, instrument, warn};

use crate::error::{Result, ScrapeError};
use crate::names::NameNormalizer;
use crate::record::{RecordSet, RecordSetBuilder, Value};
use crate::request::{Entity, Request, View};
use crate::schema::views::PLAYER_RENAMES;
use crate::table::RawTable;

pub use header::{resolve_header, ResolvedHeader};
pub use rows::{
    check_team_code, derive_columns, drop_multi_team_rows, filter_entity, filter_non_players,
    opponent_columns, season_label, strip_team_markup, SEASON, TEAM,
};

const RANK: &str = "Rk";
const TEAM_NAME: &str = "Team";
const PLAYER: &str = "Player";

const BIRTH_DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d"];

/// Normalize `table` for `req`. Row order follows the source table.
#[instrument(level = "debug", skip(table, names), fields(view = %req.view, season = req.season, entity = %req.entity))]
pub fn normalize(
    table: &RawTable,
    req: &Request,
    names: &dyn NameNormalizer,
) -> Result<RecordSet> {
    let header = resolve_header(table, req.view, req.season)?;
    let rows = project(table, &header, req.view)?;

    let set = match req.view {
        View::Roster => roster(header, rows, req, names)?,
        View::Team(_) | View::Opponent(_) | View::TeamMisc => team_level(header, rows, req)?,
        View::Player(_) => player_level(header, rows, req, names)?,
    };

    if set.is_empty() {
        info!(view = %req.view, season = req.season, entity = %req.entity, "no rows matched");
    } else {
        debug!(rows = set.len(), columns = set.columns().len(), "normalized");
    }
    Ok(set)
}

/// Pick the kept source columns out of every raw row and append backfill cells.
fn project(table: &RawTable, header: &ResolvedHeader, view: View) -> Result<Vec<Vec<Value>>> {
    let mut out = Vec::with_capacity(table.rows.len());
    for (i, raw) in table.rows.iter().enumerate() {
        if raw.len() != header.source_width {
            let err = ScrapeError::mismatch(
                view,
                format!(
                    "source row {} has {} cells, header has {}",
                    i,
                    raw.len(),
                    header.source_width
                ),
            );
            error!(%view, error = %err, "ragged source row");
            return Err(err);
        }
        let mut row: Vec<Value> = header
            .source
            .iter()
            .map(|&c| Value::from(raw[c].clone()))
            .collect();
        row.extend(header.backfill.iter().map(|_| Value::Missing));
        out.push(row);
    }
    Ok(out)
}

fn required(header: &ResolvedHeader, names: &[&str], view: View) -> Result<usize> {
    names
        .iter()
        .find_map(|n| header.position(n))
        .ok_or_else(|| {
            ScrapeError::mismatch(view, format!("no `{}` column in the table", names.join("`/`")))
        })
}

/// Team, opponent and misc tables: resolve full team names, drop `Rk`/`Team`,
/// append TEAM and SEASON, then keep the requested franchise.
fn team_level(header: ResolvedHeader, rows: Vec<Vec<Value>>, req: &Request) -> Result<RecordSet> {
    let team_idx = required(&header, &[TEAM_NAME], req.view)?;
    let rank_idx = header.position(RANK);
    let drop = |i: usize| i == team_idx || Some(i) == rank_idx;

    let mut stats: Vec<String> = header
        .columns()
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !drop(*i))
        .map(|(_, c)| c)
        .collect();
    stats.push(TEAM.to_string());
    let team_out = stats.len() - 1;

    let mut resolved = Vec::with_capacity(rows.len());
    for row in rows {
        let name = match &row[team_idx] {
            Value::Text(s) => s.clone(),
            _ => return Err(ScrapeError::mismatch(req.view, "team row without a team name")),
        };
        let code = strip_team_markup(&name)?;
        let mut out: Vec<Value> = row
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !drop(*i))
            .map(|(_, v)| v)
            .collect();
        out.push(Value::text(code));
        resolved.push(out);
    }

    // Renaming targets the post-resolution schema, so it runs after TEAM exists.
    let mut columns = if req.view.is_opponent() {
        opponent_columns(&stats)
    } else {
        stats
    };
    columns.push(SEASON.to_string());

    let mut builder = RecordSetBuilder::new(req.view, columns);
    for row in filter_entity(resolved, team_out, &req.entity) {
        builder.push(derive_columns(row, req.season))?;
    }
    Ok(builder.finish())
}

/// Season-wide per-player tables: drop separator and multi-team total rows,
/// keep the requested lineage, check team codes, rename to output names,
/// normalize player names, append SEASON.
fn player_level(
    header: ResolvedHeader,
    rows: Vec<Vec<Value>>,
    req: &Request,
    names: &dyn NameNormalizer,
) -> Result<RecordSet> {
    let player_idx = required(&header, &[PLAYER], req.view)?;
    let team_idx = required(&header, &["Tm", TEAM_NAME], req.view)?;
    let rank_idx = header.position(RANK);

    let rows = filter_non_players(rows, player_idx);
    let rows = drop_multi_team_rows(rows, team_idx);
    let rows = filter_entity(rows, team_idx, &req.entity);

    let mut columns: Vec<String> = header
        .columns()
        .into_iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != rank_idx)
        .map(|(_, c)| rename_player_column(c))
        .collect();
    columns.push(SEASON.to_string());

    let mut builder = RecordSetBuilder::new(req.view, columns);
    for row in rows {
        check_team_code(&row[team_idx])?;
        let context_team = match &req.entity {
            Entity::Team(code) => code.clone(),
            Entity::League => row[team_idx].to_string(),
        };
        let mut out = Vec::with_capacity(row.len());
        for (i, v) in row.into_iter().enumerate() {
            if Some(i) == rank_idx {
                continue;
            }
            if i == player_idx {
                out.push(normalize_name(v, names, &context_team, req.season));
            } else {
                out.push(v);
            }
        }
        builder.push(derive_columns(out, req.season))?;
    }
    Ok(builder.finish())
}

/// Team roster page: positional columns, date and nationality cleanup.
fn roster(
    header: ResolvedHeader,
    rows: Vec<Vec<Value>>,
    req: &Request,
    names: &dyn NameNormalizer,
) -> Result<RecordSet> {
    let team = req.entity.code().ok_or_else(|| {
        ScrapeError::Configuration("a roster needs a team, not the league".into())
    })?;
    let player_idx = required(&header, &["PLAYER"], req.view)?;
    let birth_idx = required(&header, &["BIRTH_DATE"], req.view)?;
    let nation_idx = required(&header, &["NATIONALITY"], req.view)?;

    let mut columns = header.columns();
    columns.push(SEASON.to_string());

    let mut builder = RecordSetBuilder::new(req.view, columns);
    for mut row in filter_non_players(rows, player_idx) {
        let name = std::mem::replace(&mut row[player_idx], Value::Missing);
        row[player_idx] = normalize_name(name, names, team, req.season);

        let birth = std::mem::replace(&mut row[birth_idx], Value::Missing);
        row[birth_idx] = parse_birth_date(birth);

        row[nation_idx] = match &row[nation_idx] {
            Value::Text(s) => Value::text(s.to_uppercase()),
            _ => Value::text(""),
        };

        builder.push(derive_columns(row, req.season))?;
    }
    Ok(builder.finish())
}

fn rename_player_column(c: String) -> String {
    PLAYER_RENAMES
        .iter()
        .find(|(from, _)| *from == c)
        .map_or(c, |(_, to)| to.to_string())
}

fn normalize_name(v: Value, names: &dyn NameNormalizer, team: &str, season: u16) -> Value {
    match v {
        Value::Text(name) => Value::Text(names.normalize(&name, team, season)),
        other => other,
    }
}

/// Date cell, or the missing marker when blank or unparsable.
fn parse_birth_date(v: Value) -> Value {
    let text = match v {
        Value::Text(s) => s,
        other => return other,
    };
    for fmt in BIRTH_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(text.trim(), fmt) {
            return Value::Date(d);
        }
    }
    warn!(birth_date = %text, "unparsable birth date, recording as missing");
    Value::Missing
}
