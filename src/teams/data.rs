// src/teams/data.rs

/// Full franchise name (uppercase, as it appears on league pages) → code.
pub(super) static TEAM_NAMES: &[(&str, &str)] = &[
    ("ATLANTA HAWKS", "ATL"),
    ("ST. LOUIS HAWKS", "STL"),
    ("MILWAUKEE HAWKS", "MLH"),
    ("TRI-CITIES BLACKHAWKS", "TRI"),
    ("BOSTON CELTICS", "BOS"),
    ("BROOKLYN NETS", "BRK"),
    ("NEW JERSEY NETS", "NJN"),
    ("NEW YORK NETS", "NYN"),
    ("CHARLOTTE HORNETS", "CHO"),
    ("CHARLOTTE BOBCATS", "CHA"),
    ("CHICAGO BULLS", "CHI"),
    ("CLEVELAND CAVALIERS", "CLE"),
    ("DALLAS MAVERICKS", "DAL"),
    ("DENVER NUGGETS", "DEN"),
    ("DENVER ROCKETS", "DNR"),
    ("DETROIT PISTONS", "DET"),
    ("FORT WAYNE PISTONS", "FTW"),
    ("GOLDEN STATE WARRIORS", "GSW"),
    ("SAN FRANCISCO WARRIORS", "SFW"),
    ("PHILADELPHIA WARRIORS", "PHW"),
    ("HOUSTON ROCKETS", "HOU"),
    ("SAN DIEGO ROCKETS", "SDR"),
    ("INDIANA PACERS", "IND"),
    ("LOS ANGELES CLIPPERS", "LAC"),
    ("LA CLIPPERS", "LAC"),
    ("SAN DIEGO CLIPPERS", "SDC"),
    ("BUFFALO BRAVES", "BUF"),
    ("LOS ANGELES LAKERS", "LAL"),
    ("MINNEAPOLIS LAKERS", "MNL"),
    ("MEMPHIS GRIZZLIES", "MEM"),
    ("VANCOUVER GRIZZLIES", "VAN"),
    ("MIAMI HEAT", "MIA"),
    ("MILWAUKEE BUCKS", "MIL"),
    ("MINNESOTA TIMBERWOLVES", "MIN"),
    ("NEW ORLEANS PELICANS", "NOP"),
    ("NEW ORLEANS/OKLAHOMA CITY HORNETS", "NOK"),
    ("NEW ORLEANS HORNETS", "NOH"),
    ("NEW YORK KNICKS", "NYK"),
    ("OKLAHOMA CITY THUNDER", "OKC"),
    ("SEATTLE SUPERSONICS", "SEA"),
    ("ORLANDO MAGIC", "ORL"),
    ("PHILADELPHIA 76ERS", "PHI"),
    ("SYRACUSE NATIONALS", "SYR"),
    ("PHOENIX SUNS", "PHO"),
    ("PORTLAND TRAIL BLAZERS", "POR"),
    ("SACRAMENTO KINGS", "SAC"),
    ("KANSAS CITY KINGS", "KCK"),
    ("KANSAS CITY-OMAHA KINGS", "KCO"),
    ("CINCINNATI ROYALS", "CIN"),
    ("ROCHESTER ROYALS", "ROC"),
    ("SAN ANTONIO SPURS", "SAS"),
    ("TORONTO RAPTORS", "TOR"),
    ("UTAH JAZZ", "UTA"),
    ("NEW ORLEANS JAZZ", "NOJ"),
    ("WASHINGTON WIZARDS", "WAS"),
    ("WASHINGTON BULLETS", "WSB"),
    ("CAPITAL BULLETS", "CAP"),
    ("BALTIMORE BULLETS", "BAL"),
    ("CHICAGO ZEPHYRS", "CHZ"),
    ("CHICAGO PACKERS", "CHP"),
    // Defunct early-league clubs still listed on historical league pages.
    ("ANDERSON PACKERS", "AND"),
    ("CHICAGO STAGS", "CHS"),
    ("INDIANAPOLIS OLYMPIANS", "INO"),
    ("INDIANAPOLIS JETS", "INJ"),
    ("SHEBOYGAN RED SKINS", "SHE"),
    ("ST. LOUIS BOMBERS", "STB"),
    ("WASHINGTON CAPITOLS", "WSC"),
    ("WATERLOO HAWKS", "WAT"),
    ("PROVIDENCE STEAMROLLERS", "PRO"),
    ("TORONTO HUSKIES", "TRH"),
    ("CLEVELAND REBELS", "CLR"),
    ("DETROIT FALCONS", "DTF"),
    ("PITTSBURGH IRONMEN", "PIT"),
];

/// Franchise lineages: every code a single franchise has played under.
pub(super) static FRANCHISE_SETS: &[&[&str]] = &[
    &["STL", "TRI", "MLH", "ATL"],
    &["BOS"],
    &["NJN", "BRK", "NYN", "NJA", "NYA"],
    &["CHO", "CHA", "CHH"],
    &["CHI"],
    &["CLE"],
    &["DAL"],
    &["DEN", "DNR", "DNA"],
    &["DET", "FTW"],
    &["GSW", "SFW", "PHW"],
    &["SDR", "HOU"],
    &["INA", "IND"],
    &["SDC", "LAC", "BUF"],
    &["LAL", "MNL"],
    &["MEM", "VAN"],
    &["MIA"],
    &["MIL"],
    &["MIN"],
    &["NOP", "NOH", "NOK"],
    &["NYK"],
    &["SEA", "OKC"],
    &["ORL"],
    &["PHI", "SYR"],
    &["PHO"],
    &["POR"],
    &["CIN", "SAC", "KCO", "KCK", "ROC"],
    &["SAS", "DLC", "SAA", "TEX"],
    &["TOR"],
    &["NOJ", "UTA"],
    &["WSB", "CHP", "CAP", "BAL", "WAS", "CHZ"],
];
