// src/schema/mod.rs

//! Versioned view schemas: one lookup decides which canonical column list a
//! (view, season) pair gets.

pub mod views;

use crate::request::{PlayerFormat, TeamFormat, View};

pub use views::{LAYUP_BACKFILL, LAYUP_COLUMNS_SINCE};

/// How source columns turn into output columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Every source column, spacers included, is named by position.
    Positional,
    /// Spacer columns are dropped, the rest are named by position.
    Fixed,
    /// Spacer columns are dropped and source labels are kept.
    Passthrough,
}

/// One schema version, valid from `since` (season end year) onward.
#[derive(Debug, Clone, Copy)]
pub struct SchemaVariant {
    pub since: u16,
    pub columns: &'static [&'static str],
    /// Columns newer variants have; filled with missing values for this one.
    pub backfill: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ViewSchema {
    pub layout: Layout,
    /// Newest first.
    variants: &'static [SchemaVariant],
}

impl ViewSchema {
    /// The variant covering `season`, or `None` for passthrough views.
    pub fn variant_for(&self, season: u16) -> Option<&'static SchemaVariant> {
        self.variants.iter().find(|v| season >= v.since)
    }
}

static ROSTER: ViewSchema = ViewSchema {
    layout: Layout::Positional,
    variants: &[SchemaVariant {
        since: 0,
        columns: views::ROSTER,
        backfill: &[],
    }],
};

static PASSTHROUGH: ViewSchema = ViewSchema {
    layout: Layout::Passthrough,
    variants: &[],
};

static TEAM_SHOOTING: ViewSchema = ViewSchema {
    layout: Layout::Fixed,
    variants: &[
        SchemaVariant {
            since: LAYUP_COLUMNS_SINCE,
            columns: views::TEAM_SHOOTING,
            backfill: &[],
        },
        SchemaVariant {
            since: 0,
            columns: views::TEAM_SHOOTING_PRE_LAYUPS,
            backfill: LAYUP_BACKFILL,
        },
    ],
};

static OPP_SHOOTING: ViewSchema = ViewSchema {
    layout: Layout::Fixed,
    variants: &[
        SchemaVariant {
            since: LAYUP_COLUMNS_SINCE,
            columns: views::OPP_SHOOTING,
            backfill: &[],
        },
        SchemaVariant {
            since: 0,
            columns: views::OPP_SHOOTING_PRE_LAYUPS,
            backfill: LAYUP_BACKFILL,
        },
    ],
};

static TEAM_MISC: ViewSchema = ViewSchema {
    layout: Layout::Fixed,
    variants: &[SchemaVariant {
        since: 0,
        columns: views::TEAM_MISC,
        backfill: &[],
    }],
};

static PLAYER_SHOOTING: ViewSchema = ViewSchema {
    layout: Layout::Fixed,
    variants: &[
        SchemaVariant {
            since: LAYUP_COLUMNS_SINCE,
            columns: views::PLAYER_SHOOTING,
            backfill: &[],
        },
        SchemaVariant {
            since: 0,
            columns: views::PLAYER_SHOOTING_PRE_LAYUPS,
            backfill: LAYUP_BACKFILL,
        },
    ],
};

static PLAYER_PBP: ViewSchema = ViewSchema {
    layout: Layout::Fixed,
    variants: &[SchemaVariant {
        since: 0,
        columns: views::PLAYER_PBP,
        backfill: &[],
    }],
};

/// Schema registry lookup.
pub fn schema_for(view: View) -> &'static ViewSchema {
    match view {
        View::Roster => &ROSTER,
        View::Team(TeamFormat::Shooting) => &TEAM_SHOOTING,
        View::Opponent(TeamFormat::Shooting) => &OPP_SHOOTING,
        View::TeamMisc => &TEAM_MISC,
        View::Player(PlayerFormat::Shooting) => &PLAYER_SHOOTING,
        View::Player(PlayerFormat::PlayByPlay) => &PLAYER_PBP,
        View::Team(_) | View::Opponent(_) | View::Player(_) => &PASSTHROUGH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shooting_variant_switches_at_threshold() {
        let s = schema_for(View::Team(TeamFormat::Shooting));
        let new = s.variant_for(2022).unwrap();
        let old = s.variant_for(2021).unwrap();
        assert!(new.columns.contains(&"LayupsFGA"));
        assert!(new.backfill.is_empty());
        assert!(!old.columns.contains(&"LayupsFGA"));
        assert_eq!(old.backfill, LAYUP_BACKFILL);
        assert_eq!(new.columns.len(), old.columns.len() + old.backfill.len());
    }

    #[test]
    fn test_seasons_in_one_variant_share_columns() {
        let s = schema_for(View::Opponent(TeamFormat::Shooting));
        assert_eq!(
            s.variant_for(2015).unwrap().columns,
            s.variant_for(2020).unwrap().columns
        );
        assert_eq!(
            s.variant_for(2022).unwrap().columns,
            s.variant_for(2024).unwrap().columns
        );
    }

    #[test]
    fn test_player_shooting_gains_layups() {
        let s = schema_for(View::Player(PlayerFormat::Shooting));
        let new = s.variant_for(2023).unwrap();
        let old = s.variant_for(2019).unwrap();
        assert!(new.columns.contains(&"LayupsMade"));
        assert!(new.backfill.is_empty());
        assert!(!old.columns.contains(&"LayupsMade"));
        assert_eq!(old.backfill, LAYUP_BACKFILL);
        assert_eq!(new.columns.len(), old.columns.len() + 2);
    }

    #[test]
    fn test_passthrough_views_have_no_variant() {
        let s = schema_for(View::Team(TeamFormat::PerGame));
        assert_eq!(s.layout, Layout::Passthrough);
        assert!(s.variant_for(2023).is_none());
        assert_eq!(schema_for(View::Roster).layout, Layout::Positional);
        assert_eq!(schema_for(View::TeamMisc).variant_for(1990).unwrap().columns.len(), 28);
    }
}
