//! Synonym tables
//!
//! Keys are written in cleaned form (after filler stripping for teams) and
//! every value is its own canonical form, so lookups stay idempotent.

/// Club-type abbreviations that carry no identity
pub const TEAM_FILLERS: &[&str] = &[
    "fc", "cf", "afc", "sc", "ac", "ec", "se", "cr", "cd", "sv", "fk", "club", "clube",
];

pub const TEAM_SYNONYMS: &[(&str, &str)] = &[
    ("manchester united", "man united"),
    ("manchester utd", "man united"),
    ("man utd", "man united"),
    ("manchester city", "man city"),
    ("internacional", "inter"),
    ("sport internacional", "inter"),
    ("paris saint germain", "paris sg"),
    ("psg", "paris sg"),
    ("bayern munich", "bayern"),
    ("bayern munchen", "bayern"),
    ("atletico mineiro", "atletico mg"),
    ("flamengo rj", "flamengo"),
    ("vasco da gama", "vasco"),
    ("botafogo rj", "botafogo"),
    ("palmeiras sp", "palmeiras"),
];

pub const LEAGUE_SYNONYMS: &[(&str, &str)] = &[
    ("premier league", "inglaterra premier league"),
    ("english premier league", "inglaterra premier league"),
    ("la liga", "espanha la liga"),
    ("laliga", "espanha la liga"),
    ("bundesliga", "alemanha bundesliga"),
    ("serie a", "italia serie a"),
    ("ligue 1", "franca ligue 1"),
    ("campeonato brasileiro", "brasil brasileirao"),
    ("brasileirao", "brasil brasileirao"),
    ("brasileirao serie a", "brasil brasileirao"),
];

pub const MARKET_SYNONYMS: &[(&str, &str)] = &[
    ("match winner", "1x2"),
    ("result", "1x2"),
    ("match result", "1x2"),
    ("full time result", "1x2"),
    ("moneyline", "1x2"),
    ("resultado final", "1x2"),
    ("over under", "over_under"),
    ("o u", "over_under"),
    ("totals", "over_under"),
    ("total goals", "over_under"),
    ("asian handicap", "asian_handicap"),
    ("handicap", "asian_handicap"),
    ("spread", "asian_handicap"),
    ("double chance", "double_chance"),
    ("dupla chance", "double_chance"),
    ("both teams to score", "btts"),
    ("ambas marcam", "btts"),
];

pub const SELECTION_SYNONYMS: &[(&str, &str)] = &[
    ("casa", "home"),
    ("mandante", "home"),
    ("1", "home"),
    ("empate", "draw"),
    ("tie", "draw"),
    ("x", "draw"),
    ("fora", "away"),
    ("visitante", "away"),
    ("2", "away"),
    ("home or draw", "1x"),
    ("draw or away", "x2"),
    ("home or away", "12"),
    ("12", "12"),
    ("sim", "yes"),
    ("nao", "no"),
];

/// Look `key` up in `table`, falling back to the key itself.
pub fn lookup(table: &[(&str, &str)], key: String) -> String {
    table
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(key)
}
