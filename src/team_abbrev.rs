/// Static lookup table for NHL team abbreviations
///
/// The API identifies teams only by their 3-letter code; this maps the code
/// back to a display name for headers and the TUI title bar.
use phf::phf_map;

static TEAM_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "ANA" => "Anaheim Ducks",
    "ARI" => "Arizona Coyotes",
    "BOS" => "Boston Bruins",
    "BUF" => "Buffalo Sabres",
    "CGY" => "Calgary Flames",
    "CAR" => "Carolina Hurricanes",
    "CHI" => "Chicago Blackhawks",
    "COL" => "Colorado Avalanche",
    "CBJ" => "Columbus Blue Jackets",
    "DAL" => "Dallas Stars",
    "DET" => "Detroit Red Wings",
    "EDM" => "Edmonton Oilers",
    "FLA" => "Florida Panthers",
    "LAK" => "Los Angeles Kings",
    "MIN" => "Minnesota Wild",
    "MTL" => "Montreal Canadiens",
    "NSH" => "Nashville Predators",
    "NJD" => "New Jersey Devils",
    "NYI" => "New York Islanders",
    "NYR" => "New York Rangers",
    "OTT" => "Ottawa Senators",
    "PHI" => "Philadelphia Flyers",
    "PIT" => "Pittsburgh Penguins",
    "SJS" => "San Jose Sharks",
    "SEA" => "Seattle Kraken",
    "STL" => "St. Louis Blues",
    "TBL" => "Tampa Bay Lightning",
    "TOR" => "Toronto Maple Leafs",
    "VAN" => "Vancouver Canucks",
    "VGK" => "Vegas Golden Knights",
    "WSH" => "Washington Capitals",
    "WPG" => "Winnipeg Jets",
    "UTA" => "Utah Hockey Club",
    // Historical teams still present in older seasons
    "PHX" => "Phoenix Coyotes",
    "ATL" => "Atlanta Thrashers",
};

/// Map a team abbreviation to its full name
pub fn team_name(abbrev: &str) -> Option<&'static str> {
    TEAM_NAMES.get(abbrev).copied()
}
