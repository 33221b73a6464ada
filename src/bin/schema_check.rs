// src/bin/schema_check.rs

//! Fetch one view over a range of seasons and print, as YAML, the source
//! header and the resolved output columns for each season. Useful for
//! spotting the season a table changed shape.

use anyhow::{anyhow, Context, Result};
use bbref_tables::{
    normalize::resolve_header, parse_seasons, table::extract_first_table, Config, Endpoints,
    Entity, Fetcher, HttpFetcher, Request, View,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// What one season's table looks like.
#[derive(Serialize)]
struct SeasonSchema {
    url: String,
    status: String,
    source_labels: Vec<String>,
    columns: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    backfill: Vec<String>,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // schema_check <category> [format] <YEAR|FROM..TO> [TEAM]
    let args: Vec<String> = env::args().skip(1).collect();
    let usage = || anyhow!("usage: schema_check <category> [FORMAT] <YEAR|FROM..TO> [TEAM]");
    let (view, seasons, entity) = match args.as_slice() {
        [c, s] => (View::parse(c, None)?, s, Entity::League),
        [c, a, b] => match parse_seasons(a) {
            Ok(_) => (View::parse(c, None)?, a, b.parse::<Entity>()?),
            Err(_) => (View::parse(c, Some(a.as_str()))?, b, Entity::League),
        },
        [c, f, s, t] => (View::parse(c, Some(f.as_str()))?, s, t.parse::<Entity>()?),
        _ => return Err(usage()),
    };
    let seasons = parse_seasons(seasons)?;

    let cfg = Config::from_env().context("loading configuration")?;
    let endpoints = Endpoints::from_config(&cfg)?;
    let fetcher = HttpFetcher::new(&cfg)?;

    let mut out: BTreeMap<u16, SeasonSchema> = BTreeMap::new();
    for season in seasons {
        let req = Request::new(entity.clone(), season, view);
        let target = endpoints.target(&req)?;
        let url = target.url().to_string();

        let resp = match fetcher.fetch(target.url()) {
            Ok(resp) if resp.is_success() => resp,
            Ok(resp) => {
                warn!(season, status = resp.status, "non-success status");
                continue;
            }
            Err(e) => {
                warn!(season, error = %e, "fetch failed");
                continue;
            }
        };
        let table = match extract_first_table(&resp.body) {
            Some(t) => t,
            None => {
                warn!(season, "no table");
                continue;
            }
        };

        let source_labels = table.header.labels().to_vec();
        let entry = match resolve_header(&table, view, season) {
            Ok(h) => SeasonSchema {
                url,
                status: "ok".into(),
                source_labels,
                columns: h.names,
                backfill: h.backfill,
            },
            Err(e) => SeasonSchema {
                url,
                status: e.to_string(),
                source_labels,
                columns: Vec::new(),
                backfill: Vec::new(),
            },
        };
        info!(season, status = %entry.status, "checked");
        out.insert(season, entry);
    }

    print!("{}", serde_yaml::to_string(&out)?);
    Ok(())
}
