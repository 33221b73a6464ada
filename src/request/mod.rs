// src/request/mod.rs

//! Request building: turns (entity, season, view, period) into the URL the
//! fetcher should hit. Pure; no I/O happens here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::{fmt, ops::RangeInclusive, str::FromStr};
use url::Url;

use crate::config::Config;
use crate::error::{Result, ScrapeError};

/// Whose rows a request is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Entity {
    League,
    Team(String),
}

impl Entity {
    pub fn team(code: &str) -> Self {
        Entity::Team(code.trim().to_uppercase())
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Entity::League => None,
            Entity::Team(code) => Some(code),
        }
    }
}

impl FromStr for Entity {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ScrapeError::Configuration("empty entity".into()));
        }
        if s.eq_ignore_ascii_case("league") {
            Ok(Entity::League)
        } else {
            Ok(Entity::team(s))
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::League => f.write_str("league"),
            Entity::Team(code) => f.write_str(code),
        }
    }
}

/// Sub-views of the league-page team/opponent tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TeamFormat {
    Totals,
    PerGame,
    PerPoss,
    Shooting,
}

impl TeamFormat {
    fn div_stem(self) -> &'static str {
        match self {
            TeamFormat::Totals => "totals",
            TeamFormat::PerGame => "per_game",
            TeamFormat::PerPoss => "per_poss",
            TeamFormat::Shooting => "shooting",
        }
    }
}

impl FromStr for TeamFormat {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self> {
        match canonical_key(s).as_str() {
            "total" | "totals" => Ok(TeamFormat::Totals),
            "per_game" | "pergame" => Ok(TeamFormat::PerGame),
            "per_poss" | "perposs" | "per_100" => Ok(TeamFormat::PerPoss),
            "shooting" => Ok(TeamFormat::Shooting),
            other => Err(ScrapeError::Configuration(format!(
                "unknown team stats format `{}`",
                other
            ))),
        }
    }
}

/// Sub-views of the season-wide per-player tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerFormat {
    Totals,
    PerGame,
    PerPoss,
    PlayByPlay,
    Shooting,
}

impl PlayerFormat {
    /// (page slug, div key) on the source site.
    fn page_and_div(self) -> (&'static str, &'static str) {
        match self {
            PlayerFormat::Totals => ("totals", "totals"),
            PlayerFormat::PerGame => ("per_game", "per_game"),
            PlayerFormat::PerPoss => ("per_poss", "per_poss"),
            PlayerFormat::PlayByPlay => ("play-by-play", "pbp"),
            PlayerFormat::Shooting => ("shooting", "shooting"),
        }
    }
}

impl FromStr for PlayerFormat {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self> {
        match canonical_key(s).as_str() {
            "total" | "totals" => Ok(PlayerFormat::Totals),
            "per_game" | "pergame" => Ok(PlayerFormat::PerGame),
            "per_poss" | "perposs" | "per_100" => Ok(PlayerFormat::PerPoss),
            "pbp" | "play_by_play" => Ok(PlayerFormat::PlayByPlay),
            "shooting" => Ok(PlayerFormat::Shooting),
            other => Err(ScrapeError::Configuration(format!(
                "unknown player stats format `{}`",
                other
            ))),
        }
    }
}

/// Statistical view: which table, from whose perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Roster,
    Team(TeamFormat),
    Opponent(TeamFormat),
    TeamMisc,
    Player(PlayerFormat),
}

impl View {
    /// Parse a CLI-style category (`roster`, `team`, `opp`, `misc`, `players`)
    /// plus an optional format.
    pub fn parse(category: &str, format: Option<&str>) -> Result<Self> {
        let format = format.unwrap_or("per_game");
        match canonical_key(category).as_str() {
            "roster" => Ok(View::Roster),
            "team" => Ok(View::Team(format.parse()?)),
            "opp" | "opponent" => Ok(View::Opponent(format.parse()?)),
            "misc" | "advanced" => Ok(View::TeamMisc),
            "player" | "players" | "roster_stats" => Ok(View::Player(format.parse()?)),
            other => Err(ScrapeError::Configuration(format!("unknown view `{}`", other))),
        }
    }

    /// Whether the result is an opponent-perspective table.
    pub fn is_opponent(self) -> bool {
        matches!(self, View::Opponent(_))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Roster => f.write_str("roster"),
            View::Team(fmt_) => write!(f, "team/{}", fmt_.div_stem()),
            View::Opponent(fmt_) => write!(f, "opponent/{}", fmt_.div_stem()),
            View::TeamMisc => f.write_str("misc"),
            View::Player(fmt_) => write!(f, "players/{}", fmt_.page_and_div().1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Period {
    #[default]
    Regular,
    Playoffs,
}

impl Period {
    fn path_segment(self) -> &'static str {
        match self {
            Period::Regular => "leagues",
            Period::Playoffs => "playoffs",
        }
    }
}

/// One pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Request {
    pub entity: Entity,
    /// Calendar year the season ends in; 2023 is the 2022-23 season.
    pub season: u16,
    pub view: View,
    pub period: Period,
}

impl Request {
    pub fn new(entity: Entity, season: u16, view: View) -> Self {
        Self {
            entity,
            season,
            view,
            period: Period::Regular,
        }
    }

    pub fn playoffs(mut self) -> Self {
        self.period = Period::Playoffs;
        self
    }

    /// Same request for another season.
    pub fn for_season(&self, season: u16) -> Self {
        Self {
            season,
            ..self.clone()
        }
    }
}

/// Where and how to fetch the table for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchTarget {
    /// Server-rendered page; the target is its first table.
    Page { url: Url },
    /// Widget proxy rendering one `div` of `page` standalone.
    Widget { url: Url, page: String, div: String },
}

impl FetchTarget {
    pub fn url(&self) -> &Url {
        match self {
            FetchTarget::Page { url } | FetchTarget::Widget { url, .. } => url,
        }
    }
}

/// Parsed base URLs.
#[derive(Debug, Clone)]
pub struct Endpoints {
    site: Url,
    widget: Url,
}

impl Endpoints {
    pub fn new(site_base: &str, widget_base: &str) -> Result<Self> {
        let mut site = site_base.trim().to_string();
        if !site.ends_with('/') {
            site.push('/');
        }
        let site = Url::parse(&site).map_err(|e| {
            ScrapeError::Configuration(format!("site base `{}`: {}", site_base, e))
        })?;
        let widget = Url::parse(widget_base.trim()).map_err(|e| {
            ScrapeError::Configuration(format!("widget base `{}`: {}", widget_base, e))
        })?;
        Ok(Self { site, widget })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(&cfg.site_base, &cfg.widget_base)
    }

    /// Build the fetch target for `req`.
    pub fn target(&self, req: &Request) -> Result<FetchTarget> {
        if req.period == Period::Playoffs && !matches!(req.view, View::Player(_)) {
            return Err(ScrapeError::Configuration(format!(
                "playoff tables are only available for player stats, not {}",
                req.view
            )));
        }

        match req.view {
            View::Roster => {
                let code = req.entity.code().ok_or_else(|| {
                    ScrapeError::Configuration("a roster needs a team, not the league".into())
                })?;
                let url = self
                    .site
                    .join(&format!("teams/{}/{}.html", code, req.season))
                    .map_err(|e| ScrapeError::Configuration(format!("roster URL: {}", e)))?;
                Ok(FetchTarget::Page { url })
            }
            View::Team(fmt_) => {
                Ok(self.widget(league_page(req.season), format!("div_{}-team", fmt_.div_stem())))
            }
            View::Opponent(fmt_) => Ok(self.widget(
                league_page(req.season),
                format!("div_{}-opponent", fmt_.div_stem()),
            )),
            View::TeamMisc => Ok(self.widget(league_page(req.season), "div_advanced-team".into())),
            View::Player(fmt_) => {
                let (page, key) = fmt_.page_and_div();
                let page = format!(
                    "/{}/NBA_{}_{}.html",
                    req.period.path_segment(),
                    req.season,
                    page
                );
                Ok(self.widget(page, format!("div_{}_stats", key)))
            }
        }
    }

    fn widget(&self, page: String, div: String) -> FetchTarget {
        let mut url = self.widget.clone();
        url.query_pairs_mut()
            .append_pair("css", "1")
            .append_pair("site", "bbr")
            .append_pair("url", &page)
            .append_pair("div", &div);
        FetchTarget::Widget { url, page, div }
    }
}

fn league_page(season: u16) -> String {
    format!("/leagues/NBA_{}.html", season)
}

static SEASON_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})(?:\s*(?:\.\.=?|-|:)\s*(\d{4}))?$")
        .expect("season range regex should compile")
});

/// `2023` or `2008..2012` (also `2008-2012`, `2008:2012`), inclusive, as
/// season end years.
pub fn parse_seasons(s: &str) -> Result<RangeInclusive<u16>> {
    let bad = || ScrapeError::Configuration(format!("season `{}` is not YEAR or FROM..TO", s));
    let caps = SEASON_RANGE.captures(s.trim()).ok_or_else(bad)?;
    let from: u16 = caps[1].parse().map_err(|_| bad())?;
    let to: u16 = match caps.get(2) {
        Some(m) => m.as_str().parse().map_err(|_| bad())?,
        None => from,
    };
    if to < from {
        return Err(ScrapeError::Configuration(format!(
            "season range {}..{} runs backwards",
            from, to
        )));
    }
    Ok(from..=to)
}

/// Lowercase and unify separators so `PER_GAME`, `per-game` and `Per Game` agree.
fn canonical_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SITE_BASE, DEFAULT_WIDGET_BASE};

    fn endpoints() -> Endpoints {
        Endpoints::new(DEFAULT_SITE_BASE, DEFAULT_WIDGET_BASE).unwrap()
    }

    #[test]
    fn test_roster_is_a_direct_page() {
        let req = Request::new(Entity::team("bos"), 2023, View::Roster);
        let target = endpoints().target(&req).unwrap();
        assert_eq!(
            target,
            FetchTarget::Page {
                url: Url::parse("https://www.basketball-reference.com/teams/BOS/2023.html")
                    .unwrap()
            }
        );
    }

    #[test]
    fn test_team_views_go_through_the_widget() {
        let req = Request::new(Entity::team("BOS"), 2023, View::Team(TeamFormat::PerGame));
        let target = endpoints().target(&req).unwrap();
        assert_eq!(
            target.url().as_str(),
            "https://widgets.sports-reference.com/wg.fcgi?css=1&site=bbr\
             &url=%2Fleagues%2FNBA_2023.html&div=div_per_game-team"
        );

        let opp = Request::new(Entity::League, 2019, View::Opponent(TeamFormat::Shooting));
        match endpoints().target(&opp).unwrap() {
            FetchTarget::Widget { page, div, .. } => {
                assert_eq!(page, "/leagues/NBA_2019.html");
                assert_eq!(div, "div_shooting-opponent");
            }
            other => panic!("expected widget target, got {:?}", other),
        }

        let misc = Request::new(Entity::team("LAL"), 2010, View::TeamMisc);
        match endpoints().target(&misc).unwrap() {
            FetchTarget::Widget { div, .. } => assert_eq!(div, "div_advanced-team"),
            other => panic!("expected widget target, got {:?}", other),
        }
    }

    #[test]
    fn test_player_views_pick_period_and_page() {
        let pbp = Request::new(Entity::team("MIA"), 2020, View::Player(PlayerFormat::PlayByPlay))
            .playoffs();
        match endpoints().target(&pbp).unwrap() {
            FetchTarget::Widget { page, div, .. } => {
                assert_eq!(page, "/playoffs/NBA_2020_play-by-play.html");
                assert_eq!(div, "div_pbp_stats");
            }
            other => panic!("expected widget target, got {:?}", other),
        }

        let totals = Request::new(Entity::League, 2001, View::Player(PlayerFormat::Totals));
        match endpoints().target(&totals).unwrap() {
            FetchTarget::Widget { page, div, .. } => {
                assert_eq!(page, "/leagues/NBA_2001_totals.html");
                assert_eq!(div, "div_totals_stats");
            }
            other => panic!("expected widget target, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_requests_are_configuration_errors() {
        let e = endpoints();
        let league_roster = Request::new(Entity::League, 2023, View::Roster);
        assert!(matches!(
            e.target(&league_roster),
            Err(ScrapeError::Configuration(_))
        ));

        let playoff_team = Request::new(Entity::team("BOS"), 2023, View::TeamMisc).playoffs();
        assert!(matches!(
            e.target(&playoff_team),
            Err(ScrapeError::Configuration(_))
        ));

        assert!(matches!(
            View::parse("team", Some("per_minute")),
            Err(ScrapeError::Configuration(_))
        ));
        assert!(matches!(
            View::parse("standings", None),
            Err(ScrapeError::Configuration(_))
        ));
        assert!(matches!(
            Endpoints::new("not a url", DEFAULT_WIDGET_BASE),
            Err(ScrapeError::Configuration(_))
        ));
    }

    #[test]
    fn test_season_ranges() {
        assert_eq!(parse_seasons("2023").unwrap(), 2023..=2023);
        assert_eq!(parse_seasons("2006..2010").unwrap(), 2006..=2010);
        assert_eq!(parse_seasons("2006..=2010").unwrap(), 2006..=2010);
        assert_eq!(parse_seasons(" 2006-2010 ").unwrap(), 2006..=2010);
        assert!(matches!(parse_seasons("2010..2006"), Err(ScrapeError::Configuration(_))));
        assert!(matches!(parse_seasons("last year"), Err(ScrapeError::Configuration(_))));
    }

    #[test]
    fn test_view_names_parse_loosely() {
        assert_eq!(
            View::parse("opp", Some("PER_POSS")).unwrap(),
            View::Opponent(TeamFormat::PerPoss)
        );
        assert_eq!(
            View::parse("players", Some("play-by-play")).unwrap(),
            View::Player(PlayerFormat::PlayByPlay)
        );
        assert_eq!(View::parse("team", None).unwrap(), View::Team(TeamFormat::PerGame));
        assert_eq!("league".parse::<Entity>().unwrap(), Entity::League);
        assert_eq!(" okc ".parse::<Entity>().unwrap(), Entity::Team("OKC".into()));
    }
}
