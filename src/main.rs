// src/main.rs

use anyhow::{anyhow, bail, Context, Result};
use bbref_tables::{
    export, parse_seasons, stack_seasons, Config, Entity, RecordSet, Request, Scraper, View,
};
use rayon::prelude::*;
use std::{env, io, ops::RangeInclusive, path::PathBuf, time::Instant};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage: bbref_tables <roster|team|opp|misc|players> [FORMAT] <TEAM|league> \
                     <YEAR|FROM..TO> [--playoffs] [--parquet PATH]";

struct Args {
    request: Request,
    seasons: RangeInclusive<u16>,
    parquet: Option<PathBuf>,
}

fn parse_args(raw: Vec<String>) -> Result<Args> {
    let mut positional = Vec::new();
    let mut playoffs = false;
    let mut parquet = None;

    let mut it = raw.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--playoffs" => playoffs = true,
            "--parquet" => {
                let path = it.next().ok_or_else(|| anyhow!("--parquet needs a path"))?;
                parquet = Some(PathBuf::from(path));
            }
            "-h" | "--help" => bail!(USAGE),
            _ => positional.push(arg),
        }
    }

    let (category, format, entity, seasons) = match positional.as_slice() {
        [c, e, s] => (c, None, e, s),
        [c, f, e, s] => (c, Some(f.as_str()), e, s),
        _ => bail!(USAGE),
    };

    let view = View::parse(category, format)?;
    let entity: Entity = entity.parse()?;
    let seasons = parse_seasons(seasons)?;

    let mut request = Request::new(entity, *seasons.start(), view);
    if playoffs {
        request = request.playoffs();
    }
    Ok(Args {
        request,
        seasons,
        parquet,
    })
}

fn main() -> Result<()> {
    // ─── 1) init logging (stderr; stdout carries the rows) ──────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // ─── 2) args + config ───────────────────────────────────────────
    let args = parse_args(env::args().skip(1).collect())?;
    let cfg = Config::from_env().context("loading configuration")?;
    let scraper = Scraper::from_config(&cfg)?;
    info!(
        view = %args.request.view,
        entity = %args.request.entity,
        from = args.seasons.start(),
        to = args.seasons.end(),
        "startup"
    );

    // ─── 3) fetch + normalize every season ──────────────────────────
    let start = Instant::now();
    let seasons: Vec<u16> = args.seasons.clone().collect();
    let results: Vec<Option<RecordSet>> = if seasons.len() == 1 {
        vec![scraper.run(&args.request)?]
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(cfg.parallel_seasons.max(1))
            .build()
            .context("building season thread pool")?;
        // indexed collect keeps season order
        pool.install(|| {
            seasons
                .par_iter()
                .map(|&season| scraper.run(&args.request.for_season(season)))
                .collect::<Result<Vec<_>, _>>()
        })?
    };

    let all = match stack_seasons(results) {
        Some(all) => all,
        None => {
            warn!("no table for any requested season");
            return Ok(());
        }
    };
    info!(rows = all.len(), columns = all.columns().len(), elapsed = ?start.elapsed(), "normalized");

    // ─── 4) write ───────────────────────────────────────────────────
    match &args.parquet {
        Some(path) => {
            export::write_parquet(&all, path)?;
            info!(path = %path.display(), "wrote parquet");
        }
        None => export::write_json_lines(&all, io::stdout().lock())?,
    }
    Ok(())
}
