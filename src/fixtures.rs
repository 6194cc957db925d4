/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit and integration tests - ensuring tests have predictable data
/// 2. Development mock mode - running the app with fake data for debugging
/// 3. Benchmarks - providing consistent data for performance testing
///
/// The skater fixture models a realistic career: several seasons, a mid-season
/// trade (two teams in 2022), playoff appearances in some years, and records
/// for every situation tag.
use crate::model::{
    GoalieStatRecord, LeagueSkaterRow, PlayerInfo, SkaterStatRecord, Situation,
};

/// Create mock player identity for any requested id
pub fn create_player_info(player_id: i64) -> PlayerInfo {
    PlayerInfo {
        player_id,
        name: "Sample Skater".to_string(),
        team_abbrev: "BOS".to_string(),
        position: "C".to_string(),
    }
}

fn skater(
    season: i32,
    team: &str,
    situation: Situation,
    is_playoffs: bool,
    gp: u32,
    toi: f64,
    goals: u32,
    assists: u32,
    shots: u32,
    xg: f64,
    corsi: Option<f64>,
) -> SkaterStatRecord {
    SkaterStatRecord {
        season,
        team: team.to_string(),
        situation,
        is_playoffs,
        games_played: gp,
        ice_time_seconds: toi,
        goals,
        assists,
        points: goals + assists,
        shots,
        expected_goals: xg,
        corsi_for_pct: corsi,
    }
}

/// Create the mock skater career
///
/// 2023 BOS: full season plus a playoff run. 2022: traded from VAN to BOS
/// mid-season (two stints, no playoffs with VAN). 2021 VAN: no playoffs.
pub fn create_skater_records() -> Vec<SkaterStatRecord> {
    vec![
        // 2023, BOS, regular season
        skater(2023, "BOS", Situation::All, false, 82, 96000.0, 31, 42, 255, 27.3, Some(53.1)),
        skater(2023, "BOS", Situation::FiveOnFive, false, 82, 72000.0, 22, 30, 190, 19.8, Some(52.4)),
        skater(2023, "BOS", Situation::PowerPlay, false, 78, 14400.0, 8, 11, 55, 6.6, None),
        skater(2023, "BOS", Situation::PenaltyKill, false, 60, 7200.0, 1, 1, 10, 0.9, None),
        // 2023, BOS, playoffs
        skater(2023, "BOS", Situation::All, true, 7, 8700.0, 3, 2, 24, 2.4, Some(49.7)),
        skater(2023, "BOS", Situation::FiveOnFive, true, 7, 6600.0, 2, 1, 18, 1.7, Some(48.9)),
        // 2022, VAN stint before the deadline
        skater(2022, "VAN", Situation::All, false, 49, 55000.0, 14, 20, 140, 13.1, Some(47.2)),
        skater(2022, "VAN", Situation::FiveOnFive, false, 49, 44000.0, 10, 14, 105, 9.8, Some(46.5)),
        // 2022, BOS stint after the trade
        skater(2022, "BOS", Situation::All, false, 31, 34000.0, 9, 13, 88, 8.2, Some(54.0)),
        skater(2022, "BOS", Situation::FiveOnFive, false, 31, 27000.0, 7, 9, 66, 6.1, Some(53.2)),
        // 2022, BOS, playoffs
        skater(2022, "BOS", Situation::All, true, 6, 7000.0, 1, 3, 17, 1.5, Some(51.0)),
        // 2021, VAN, no playoffs
        skater(2021, "VAN", Situation::All, false, 71, 80000.0, 19, 27, 180, 17.9, Some(48.8)),
        skater(2021, "VAN", Situation::FiveOnFive, false, 71, 62000.0, 14, 19, 130, 12.6, Some(48.1)),
        skater(2021, "VAN", Situation::Other, false, 40, 3000.0, 1, 2, 9, 0.8, None),
    ]
}

fn goalie(
    season: i32,
    team: &str,
    situation: Situation,
    is_playoffs: bool,
    gp: u32,
    toi: f64,
    ga: u32,
    sa: u32,
    gsax: f64,
) -> GoalieStatRecord {
    GoalieStatRecord {
        season,
        team: team.to_string(),
        situation,
        is_playoffs,
        games_played: gp,
        ice_time_seconds: toi,
        goals_against: ga,
        shots_against: sa,
        goals_saved_above_expected: gsax,
    }
}

/// Create the mock goalie career: a starter's workload with one playoff year
pub fn create_goalie_records() -> Vec<GoalieStatRecord> {
    vec![
        goalie(2023, "NYR", Situation::All, false, 61, 215000.0, 140, 1840, 21.4),
        goalie(2023, "NYR", Situation::FiveOnFive, false, 61, 168000.0, 95, 1390, 14.9),
        goalie(2023, "NYR", Situation::PenaltyKill, false, 58, 18500.0, 38, 330, 5.2),
        goalie(2023, "NYR", Situation::All, true, 10, 37000.0, 22, 310, 4.8),
        goalie(2022, "NYR", Situation::All, false, 55, 192000.0, 145, 1650, 6.3),
        goalie(2022, "NYR", Situation::FiveOnFive, false, 55, 150000.0, 100, 1260, 4.1),
        goalie(2021, "NYR", Situation::All, false, 24, 82000.0, 70, 700, -2.5),
    ]
}

/// Create mock league-wide skater rows for the distribution view
///
/// 96 rows with a spread of production levels so histograms have shape.
pub fn create_league_rows(season: i32) -> Vec<LeagueSkaterRow> {
    let teams = ["BOS", "TOR", "NYR", "COL", "EDM", "DAL", "VAN", "FLA"];
    let positions = ["C", "L", "R", "D"];
    // Small year-to-year drift so consecutive seasons are distinguishable
    let year_bump = season.rem_euclid(3) as u32;

    (0..96)
        .map(|i| {
            let tier = i / 24; // 4 production tiers
            let within = (i % 24) as u32;
            let goals = year_bump
                + match tier {
                    0 => 35 - within,     // stars: 12..35
                    1 => 20 - within / 2, // middle six: 9..20
                    2 => 12 - within / 3, // depth: 5..12
                    _ => 6 - within / 6,  // grinders: 3..6
                };
            let assists = goals + within % 7;
            LeagueSkaterRow {
                player_id: season as i64 * 1_000_000 + i as i64,
                name: format!("Player {:02}", i),
                team: teams[i % teams.len()].to_string(),
                position: positions[i % positions.len()].to_string(),
                games_played: 60 + within,
                ice_time_seconds: 50000.0 + 1000.0 * (i % 40) as f64,
                goals,
                assists,
                points: goals + assists,
                shots: goals * 8 + 20,
                expected_goals: goals as f64 * 0.9 + 1.5,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{skater_career_totals, skater_season_rows};

    #[test]
    fn test_fixtures_are_deterministic() {
        assert_eq!(create_skater_records(), create_skater_records());
        assert_eq!(create_goalie_records(), create_goalie_records());
        assert_eq!(create_league_rows(2024), create_league_rows(2024));
    }

    #[test]
    fn test_skater_fixture_covers_trade_and_playoffs() {
        let rows = skater_season_rows(&create_skater_records(), crate::model::Situation::All);
        // 2023 BOS, 2022 BOS, 2022 VAN, 2021 VAN
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().any(|r| r.playoffs.is_some()));
        assert!(rows.iter().any(|r| r.playoffs.is_none()));

        let totals = skater_career_totals(&rows);
        assert_eq!(totals.games_played, 82 + 49 + 31 + 71);
    }

    #[test]
    fn test_league_rows_vary_by_season() {
        assert_ne!(create_league_rows(2023), create_league_rows(2024));
    }

    #[test]
    fn test_league_rows_have_spread() {
        let rows = create_league_rows(2024);
        assert_eq!(rows.len(), 96);
        let max = rows.iter().map(|r| r.goals).max().unwrap();
        let min = rows.iter().map(|r| r.goals).min().unwrap();
        assert!(max > min + 10);
    }
}
