// src/schema/views.rs

//! Canonical column lists. These must match the source tables column for
//! column after spacer columns are removed.

/// First season end year whose shooting tables carry layup columns.
pub const LAYUP_COLUMNS_SINCE: u16 = 2022;

/// Appended, as missing values, to shooting tables older than [`LAYUP_COLUMNS_SINCE`].
pub const LAYUP_BACKFILL: &[&str] = &["LayupsFGA", "LayupsMade"];

pub const ROSTER: &[&str] = &[
    "NUMBER",
    "PLAYER",
    "POS",
    "HEIGHT",
    "WEIGHT",
    "BIRTH_DATE",
    "NATIONALITY",
    "EXPERIENCE",
    "COLLEGE",
];

pub const TEAM_SHOOTING: &[&str] = &[
    "Rk",
    "Team",
    "G",
    "MP",
    "FG%",
    "Dist.",
    "2P/FGA",
    "0-3/FGA",
    "3-10/FGA",
    "10-16/FGA",
    "16-3P/FGA",
    "3P/FGA",
    "2PPCT",
    "0-3PCT",
    "3-10PCT",
    "10-16PCT",
    "16-3PPCT",
    "3PPCT",
    "2PAssisted",
    "3PAssisted",
    "Dunks/FGA",
    "DunkMade",
    "LayupsFGA",
    "LayupsMade",
    "Corner3s/3PA",
    "Corner3PCT",
    "HeaveAttempts",
    "HeavesMade",
];

pub const TEAM_SHOOTING_PRE_LAYUPS: &[&str] = &[
    "Rk",
    "Team",
    "G",
    "MP",
    "FG%",
    "Dist.",
    "2P/FGA",
    "0-3/FGA",
    "3-10/FGA",
    "10-16/FGA",
    "16-3P/FGA",
    "3P/FGA",
    "2PPCT",
    "0-3PCT",
    "3-10PCT",
    "10-16PCT",
    "16-3PPCT",
    "3PPCT",
    "2PAssisted",
    "3PAssisted",
    "Dunks/FGA",
    "DunkMade",
    "Corner3s/3PA",
    "Corner3PCT",
    "HeaveAttempts",
    "HeavesMade",
];

// The opponent shooting table has no heave columns.
pub const OPP_SHOOTING: &[&str] = &[
    "Rk",
    "Team",
    "G",
    "MP",
    "FG%",
    "Dist.",
    "2P/FGA",
    "0-3/FGA",
    "3-10/FGA",
    "10-16/FGA",
    "16-3P/FGA",
    "3P/FGA",
    "2PPCT",
    "0-3PCT",
    "3-10PCT",
    "10-16PCT",
    "16-3PPCT",
    "3PPCT",
    "2PAssisted",
    "3PAssisted",
    "Dunks/FGA",
    "DunkMade",
    "LayupsFGA",
    "LayupsMade",
    "Corner3s/3PA",
    "Corner3PCT",
];

pub const OPP_SHOOTING_PRE_LAYUPS: &[&str] = &[
    "Rk",
    "Team",
    "G",
    "MP",
    "FG%",
    "Dist.",
    "2P/FGA",
    "0-3/FGA",
    "3-10/FGA",
    "10-16/FGA",
    "16-3P/FGA",
    "3P/FGA",
    "2PPCT",
    "0-3PCT",
    "3-10PCT",
    "10-16PCT",
    "16-3PPCT",
    "3PPCT",
    "2PAssisted",
    "3PAssisted",
    "Dunks/FGA",
    "DunkMade",
    "Corner3s/3PA",
    "Corner3PCT",
];

pub const TEAM_MISC: &[&str] = &[
    "Rk",
    "Team",
    "AGE",
    "W",
    "L",
    "PW",
    "PL",
    "MOV",
    "SOS",
    "SRS",
    "ORtg",
    "DRtg",
    "NRtg",
    "PACE",
    "FTr",
    "3PAr",
    "TSPCT",
    "eFGPCT",
    "TOVPCT",
    "ORBPCT",
    "FT/FGA",
    "OppeFGPCT",
    "OppTOVPCT",
    "OppDRBPCT",
    "OppFT/FGA",
    "ARENA",
    "ATTENDANCE",
    "ATTENDANCE/G",
];

pub const PLAYER_SHOOTING: &[&str] = &[
    "Rk",
    "Player",
    "Pos",
    "Age",
    "Tm",
    "G",
    "MP",
    "FG%",
    "Dist.",
    "2P/FGA",
    "0-3/FGA",
    "3-10/FGA",
    "10-16/FGA",
    "16-3P/FGA",
    "3P/FGA",
    "2PPCT",
    "0-3PCT",
    "3-10PCT",
    "10-16PCT",
    "16-3PPCT",
    "3PPCT",
    "2PAssisted",
    "3PAssisted",
    "Dunks/FGA",
    "DunkAttempts",
    "LayupsFGA",
    "LayupsMade",
    "Corner3s/3PA",
    "Corner3PPCT",
    "HeaveAttempts.",
    "HeavesMade",
];

pub const PLAYER_SHOOTING_PRE_LAYUPS: &[&str] = &[
    "Rk",
    "Player",
    "Pos",
    "Age",
    "Tm",
    "G",
    "MP",
    "FG%",
    "Dist.",
    "2P/FGA",
    "0-3/FGA",
    "3-10/FGA",
    "10-16/FGA",
    "16-3P/FGA",
    "3P/FGA",
    "2PPCT",
    "0-3PCT",
    "3-10PCT",
    "10-16PCT",
    "16-3PPCT",
    "3PPCT",
    "2PAssisted",
    "3PAssisted",
    "Dunks/FGA",
    "DunkAttempts",
    "Corner3s/3PA",
    "Corner3PPCT",
    "HeaveAttempts.",
    "HeavesMade",
];

pub const PLAYER_PBP: &[&str] = &[
    "Rk",
    "Player",
    "Pos",
    "Age",
    "Tm",
    "G",
    "MP",
    "PGPCT",
    "SGPCT",
    "SFPCT",
    "PFPCT",
    "CPCT",
    "OnCourt",
    "On-Off",
    "BadPass",
    "LostBall",
    "ShootFoulCommitted",
    "OffFoulCommitted",
    "ShootFoulDrawn",
    "OffFoulDrawn",
    "PGA",
    "And1",
    "Blkd",
];

/// Source label → output name for per-player tables.
pub const PLAYER_RENAMES: &[(&str, &str)] = &[
    ("Player", "PLAYER"),
    ("Pos", "POS"),
    ("Age", "AGE"),
    ("Tm", "TEAM"),
    ("Team", "TEAM"),
];
