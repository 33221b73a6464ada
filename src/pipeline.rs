// src/pipeline.rs

use std::ops::RangeInclusive;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::error::{Result, ScrapeError};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::names::{AccentStripper, NameNormalizer};
use crate::normalize::normalize;
use crate::record::RecordSet;
use crate::request::{Endpoints, Entity, FetchTarget, Period, PlayerFormat, Request, TeamFormat, View};
use crate::table::extract_first_table;

/// Public entry points. Each call performs at most one fetch and returns
/// `Ok(None)` when no table could be obtained, `Ok(Some(set))` otherwise
/// (possibly with zero rows).
pub struct Scraper<F, N = AccentStripper> {
    endpoints: Endpoints,
    fetcher: F,
    names: N,
}

impl Scraper<HttpFetcher> {
    /// HTTP-backed scraper built from `cfg`.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let endpoints = Endpoints::from_config(cfg)?;
        let fetcher = HttpFetcher::new(cfg)
            .map_err(|e| ScrapeError::Configuration(format!("building HTTP client: {}", e)))?;
        Ok(Scraper::new(endpoints, fetcher))
    }
}

impl<F: Fetcher> Scraper<F> {
    pub fn new(endpoints: Endpoints, fetcher: F) -> Self {
        Self {
            endpoints,
            fetcher,
            names: AccentStripper::new(),
        }
    }
}

impl<F: Fetcher, N: NameNormalizer> Scraper<F, N> {
    /// Swap in another name normalizer.
    pub fn with_names<M: NameNormalizer>(self, names: M) -> Scraper<F, M> {
        Scraper {
            endpoints: self.endpoints,
            fetcher: self.fetcher,
            names,
        }
    }

    /// Build, fetch, locate, normalize.
    #[instrument(level = "info", skip(self), fields(view = %req.view, season = req.season, entity = %req.entity))]
    pub fn run(&self, req: &Request) -> Result<Option<RecordSet>> {
        let target = self.endpoints.target(req)?;
        if let FetchTarget::Widget { page, div, .. } = &target {
            debug!(%page, %div, "widget target");
        }
        let url = target.url();

        let resp = match self.fetcher.fetch(url) {
            Ok(resp) => resp,
            Err(e) => {
                warn!(%url, error = %e, "fetch failed; no data");
                return Ok(None);
            }
        };
        if !resp.is_success() {
            warn!(%url, status = resp.status, "non-success status; no data");
            return Ok(None);
        }

        let table = match extract_first_table(&resp.body) {
            Some(t) => t,
            None => {
                warn!(%url, bytes = resp.body.len(), "no table in response; no data");
                return Ok(None);
            }
        };
        debug!(rows = table.rows.len(), columns = table.header.width(), "located table");

        normalize(&table, req, &self.names).map(Some)
    }

    /// Players on `team`'s roster for one season.
    pub fn roster(&self, team: &str, season: u16) -> Result<Option<RecordSet>> {
        self.run(&Request::new(Entity::team(team), season, View::Roster))
    }

    /// Team totals / per-game / per-possession / shooting.
    pub fn team_stats(
        &self,
        entity: Entity,
        season: u16,
        format: TeamFormat,
    ) -> Result<Option<RecordSet>> {
        self.run(&Request::new(entity, season, View::Team(format)))
    }

    /// Same tables from the opponents' side; columns come back `OPP_`-prefixed.
    pub fn opponent_stats(
        &self,
        entity: Entity,
        season: u16,
        format: TeamFormat,
    ) -> Result<Option<RecordSet>> {
        self.run(&Request::new(entity, season, View::Opponent(format)))
    }

    /// Advanced / miscellaneous team table.
    pub fn team_misc(&self, entity: Entity, season: u16) -> Result<Option<RecordSet>> {
        self.run(&Request::new(entity, season, View::TeamMisc))
    }

    /// Per-player stats for the players of `entity`'s franchise lineage.
    pub fn roster_stats(
        &self,
        entity: Entity,
        season: u16,
        format: PlayerFormat,
        period: Period,
    ) -> Result<Option<RecordSet>> {
        let mut req = Request::new(entity, season, View::Player(format));
        req.period = period;
        self.run(&req)
    }

    /// Run `req` for each season in ascending order and stack the results,
    /// so rows stay contiguous by season. `None` when no season had a table.
    pub fn history(&self, req: &Request, seasons: RangeInclusive<u16>) -> Result<Option<RecordSet>> {
        let results = seasons
            .map(|season| self.run(&req.for_season(season)))
            .collect::<Result<Vec<_>>>()?;
        Ok(stack_seasons(results))
    }
}

/// Stack per-season results in the order given, skipping seasons without a
/// table. `None` when none had one.
pub fn stack_seasons<I>(results: I) -> Option<RecordSet>
where
    I: IntoIterator<Item = Option<RecordSet>>,
{
    let mut sets = Vec::new();
    for (i, result) in results.into_iter().enumerate() {
        match result {
            Some(set) => sets.push(set),
            None => debug!(index = i, "no data for season"),
        }
    }
    if sets.is_empty() {
        return None;
    }
    let all = RecordSet::concat(sets);
    info!(rows = all.len(), "history assembled");
    Some(all)
}
