/// Season/team aggregation for skater stat records
///
/// Groups a flat list of per-record stats (filtered to one situation) into one
/// row per (season, team), with separate regular-season and playoff sums, then
/// folds those rows into career totals. Rates are always derived from summed
/// counts; the single exception is corsi-for%, which is blended across records
/// as an ice-time-weighted mean so short stints do not skew it.
use std::collections::HashMap;

use crate::model::{SkaterStatRecord, Situation};

/// Playoff counting-stat sums for one (season, team)
///
/// Present only when the combination has at least one playoff record; the UI
/// uses absence to distinguish "did not make playoffs" from zero production.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkaterPlayoffTotals {
    pub games_played: u32,
    pub ice_time_seconds: f64,
    pub goals: u32,
    pub assists: u32,
    pub points: u32,
    pub shots: u32,
    pub expected_goals: f64,
}

/// Aggregated skater row for one (season, team)
#[derive(Debug, Clone, PartialEq)]
pub struct SkaterSeasonRow {
    pub season: i32,
    pub team: String,
    pub games_played: u32,
    pub ice_time_seconds: f64,
    pub goals: u32,
    pub assists: u32,
    pub points: u32,
    pub shots: u32,
    pub expected_goals: f64,
    /// Ice-time-weighted across records that carried a value; None when no
    /// qualifying ice time
    pub corsi_for_pct: Option<f64>,
    pub playoffs: Option<SkaterPlayoffTotals>,
}

impl SkaterSeasonRow {
    pub fn goals_per60(&self) -> Option<f64> {
        per60(self.goals, self.ice_time_seconds)
    }

    pub fn points_per60(&self) -> Option<f64> {
        per60(self.points, self.ice_time_seconds)
    }
}

/// Career totals folded from season rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkaterCareerTotals {
    pub games_played: u32,
    pub ice_time_seconds: f64,
    pub goals: u32,
    pub assists: u32,
    pub points: u32,
    pub shots: u32,
    pub expected_goals: f64,
    pub corsi_for_pct: Option<f64>,
    /// Playoff sums; zero (not None) when the player never made the playoffs
    pub playoff_games_played: u32,
    pub playoff_ice_time_seconds: f64,
    pub playoff_goals: u32,
    pub playoff_assists: u32,
    pub playoff_points: u32,
    pub playoff_shots: u32,
    pub playoff_expected_goals: f64,
}

impl SkaterCareerTotals {
    pub fn goals_per60(&self) -> Option<f64> {
        per60(self.goals, self.ice_time_seconds)
    }

    pub fn points_per60(&self) -> Option<f64> {
        per60(self.points, self.ice_time_seconds)
    }
}

fn per60(count: u32, ice_time_seconds: f64) -> Option<f64> {
    if ice_time_seconds > 0.0 {
        Some(count as f64 / (ice_time_seconds / 3600.0))
    } else {
        None
    }
}

/// Per-key accumulator; kept in first-appearance order so equal-season rows
/// stay deterministic through the final stable sort
struct Acc {
    season: i32,
    team: String,
    games_played: u32,
    ice_time_seconds: f64,
    goals: u32,
    assists: u32,
    points: u32,
    shots: u32,
    expected_goals: f64,
    corsi_weighted_sum: f64,
    corsi_ice_time: f64,
    playoffs: Option<SkaterPlayoffTotals>,
}

impl Acc {
    fn new(season: i32, team: String) -> Self {
        Self {
            season,
            team,
            games_played: 0,
            ice_time_seconds: 0.0,
            goals: 0,
            assists: 0,
            points: 0,
            shots: 0,
            expected_goals: 0.0,
            corsi_weighted_sum: 0.0,
            corsi_ice_time: 0.0,
            playoffs: None,
        }
    }

    fn add(&mut self, rec: &SkaterStatRecord) {
        if rec.is_playoffs {
            let p = self.playoffs.get_or_insert_with(SkaterPlayoffTotals::default);
            p.games_played += rec.games_played;
            p.ice_time_seconds += rec.ice_time_seconds;
            p.goals += rec.goals;
            p.assists += rec.assists;
            p.points += rec.points;
            p.shots += rec.shots;
            p.expected_goals += rec.expected_goals;
        } else {
            self.games_played += rec.games_played;
            self.ice_time_seconds += rec.ice_time_seconds;
            self.goals += rec.goals;
            self.assists += rec.assists;
            self.points += rec.points;
            self.shots += rec.shots;
            self.expected_goals += rec.expected_goals;
            if let Some(pct) = rec.corsi_for_pct {
                self.corsi_weighted_sum += pct * rec.ice_time_seconds;
                self.corsi_ice_time += rec.ice_time_seconds;
            }
        }
    }

    fn into_row(self) -> SkaterSeasonRow {
        let corsi_for_pct = if self.corsi_ice_time > 0.0 {
            Some(self.corsi_weighted_sum / self.corsi_ice_time)
        } else {
            None
        };
        SkaterSeasonRow {
            season: self.season,
            team: self.team,
            games_played: self.games_played,
            ice_time_seconds: self.ice_time_seconds,
            goals: self.goals,
            assists: self.assists,
            points: self.points,
            shots: self.shots,
            expected_goals: self.expected_goals,
            corsi_for_pct,
            playoffs: self.playoffs,
        }
    }
}

/// Aggregate raw records for one situation into per-(season, team) rows,
/// sorted by season descending
///
/// Records for other situations are excluded entirely. Multiple records for
/// the same key (mid-season trades produce one per stint) are summed, never
/// overwritten. Rows with zero regular-season games played are dropped, even
/// when playoff games exist for that team.
pub fn skater_season_rows(
    records: &[SkaterStatRecord],
    situation: Situation,
) -> Vec<SkaterSeasonRow> {
    let mut index: HashMap<(i32, String), usize> = HashMap::new();
    let mut accs: Vec<Acc> = Vec::new();

    for rec in records.iter().filter(|r| r.situation == situation) {
        let key = (rec.season, rec.team.clone());
        let idx = *index
            .entry(key)
            .or_insert_with(|| {
                accs.push(Acc::new(rec.season, rec.team.clone()));
                accs.len() - 1
            });
        accs[idx].add(rec);
    }

    let mut rows: Vec<SkaterSeasonRow> = accs
        .into_iter()
        .filter(|acc| acc.games_played > 0)
        .map(Acc::into_row)
        .collect();

    // Stable sort keeps first-appearance order for rows in the same season
    rows.sort_by(|a, b| b.season.cmp(&a.season));
    rows
}

/// Fold season rows into one career-totals row
///
/// Pure function: recomputes every rate from the summed counts instead of
/// averaging per-season rates, so short seasons do not bias the career line.
/// Missing playoff rows contribute zero to the career playoff sums.
pub fn skater_career_totals(rows: &[SkaterSeasonRow]) -> SkaterCareerTotals {
    let mut totals = SkaterCareerTotals::default();
    let mut corsi_weighted_sum = 0.0;
    let mut corsi_ice_time = 0.0;

    for row in rows {
        totals.games_played += row.games_played;
        totals.ice_time_seconds += row.ice_time_seconds;
        totals.goals += row.goals;
        totals.assists += row.assists;
        totals.points += row.points;
        totals.shots += row.shots;
        totals.expected_goals += row.expected_goals;
        if let Some(pct) = row.corsi_for_pct {
            corsi_weighted_sum += pct * row.ice_time_seconds;
            corsi_ice_time += row.ice_time_seconds;
        }
        if let Some(p) = &row.playoffs {
            totals.playoff_games_played += p.games_played;
            totals.playoff_ice_time_seconds += p.ice_time_seconds;
            totals.playoff_goals += p.goals;
            totals.playoff_assists += p.assists;
            totals.playoff_points += p.points;
            totals.playoff_shots += p.shots;
            totals.playoff_expected_goals += p.expected_goals;
        }
    }

    if corsi_ice_time > 0.0 {
        totals.corsi_for_pct = Some(corsi_weighted_sum / corsi_ice_time);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(season: i32, team: &str, situation: Situation) -> SkaterStatRecord {
        SkaterStatRecord {
            season,
            team: team.to_string(),
            situation,
            is_playoffs: false,
            games_played: 0,
            ice_time_seconds: 0.0,
            goals: 0,
            assists: 0,
            points: 0,
            shots: 0,
            expected_goals: 0.0,
            corsi_for_pct: None,
        }
    }

    #[test]
    fn test_regular_and_playoff_records_split_into_one_row() {
        let records = vec![
            SkaterStatRecord {
                games_played: 10,
                goals: 5,
                assists: 3,
                points: 8,
                ..record(2023, "BOS", Situation::FiveOnFive)
            },
            SkaterStatRecord {
                is_playoffs: true,
                games_played: 4,
                goals: 2,
                points: 2,
                ..record(2023, "BOS", Situation::FiveOnFive)
            },
        ];

        let rows = skater_season_rows(&records, Situation::FiveOnFive);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.season, 2023);
        assert_eq!(row.team, "BOS");
        assert_eq!(row.games_played, 10);
        assert_eq!(row.goals, 5);
        let playoffs = row.playoffs.as_ref().unwrap();
        assert_eq!(playoffs.games_played, 4);
        assert_eq!(playoffs.goals, 2);
    }

    #[test]
    fn test_other_situations_are_excluded() {
        let records = vec![
            SkaterStatRecord {
                games_played: 10,
                ..record(2023, "BOS", Situation::FiveOnFive)
            },
            SkaterStatRecord {
                games_played: 10,
                ..record(2023, "BOS", Situation::PowerPlay)
            },
        ];

        let rows = skater_season_rows(&records, Situation::FiveOnFive);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].games_played, 10);
    }

    #[test]
    fn test_trade_records_sum_not_overwrite() {
        // Two stints with the same team in one season (sent down and recalled)
        // must sum into one row
        let records = vec![
            SkaterStatRecord {
                games_played: 20,
                goals: 7,
                ice_time_seconds: 18000.0,
                ..record(2022, "CGY", Situation::All)
            },
            SkaterStatRecord {
                games_played: 30,
                goals: 8,
                ice_time_seconds: 27000.0,
                ..record(2022, "CGY", Situation::All)
            },
        ];

        let rows = skater_season_rows(&records, Situation::All);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].games_played, 50);
        assert_eq!(rows[0].goals, 15);
        assert_eq!(rows[0].ice_time_seconds, 45000.0);
    }

    #[test]
    fn test_team_change_produces_separate_rows() {
        let records = vec![
            SkaterStatRecord {
                games_played: 40,
                ..record(2022, "VAN", Situation::All)
            },
            SkaterStatRecord {
                games_played: 30,
                ..record(2022, "NYI", Situation::All)
            },
        ];

        let rows = skater_season_rows(&records, Situation::All);
        assert_eq!(rows.len(), 2);
        // Equal seasons keep first-appearance order
        assert_eq!(rows[0].team, "VAN");
        assert_eq!(rows[1].team, "NYI");
    }

    #[test]
    fn test_gp_sum_invariant() {
        let records = vec![
            SkaterStatRecord {
                games_played: 12,
                ..record(2021, "BOS", Situation::FiveOnFive)
            },
            SkaterStatRecord {
                games_played: 34,
                ..record(2022, "BOS", Situation::FiveOnFive)
            },
            SkaterStatRecord {
                games_played: 9,
                ..record(2022, "DAL", Situation::FiveOnFive)
            },
            // Playoff and other-situation records do not count
            SkaterStatRecord {
                is_playoffs: true,
                games_played: 6,
                ..record(2022, "DAL", Situation::FiveOnFive)
            },
            SkaterStatRecord {
                games_played: 50,
                ..record(2022, "DAL", Situation::PowerPlay)
            },
        ];

        let rows = skater_season_rows(&records, Situation::FiveOnFive);
        let total_gp: u32 = rows.iter().map(|r| r.games_played).sum();
        assert_eq!(total_gp, 12 + 34 + 9);
    }

    #[test]
    fn test_zero_regular_season_games_drops_row() {
        // Playoff-only stint with a team: no regular-season games recorded, so
        // the row disappears entirely
        let records = vec![
            SkaterStatRecord {
                games_played: 60,
                ..record(2023, "BOS", Situation::All)
            },
            SkaterStatRecord {
                is_playoffs: true,
                games_played: 7,
                goals: 3,
                ..record(2023, "FLA", Situation::All)
            },
        ];

        let rows = skater_season_rows(&records, Situation::All);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].team, "BOS");
    }

    #[test]
    fn test_no_playoff_records_yields_none_not_zero() {
        let records = vec![SkaterStatRecord {
            games_played: 82,
            ..record(2023, "CHI", Situation::All)
        }];

        let rows = skater_season_rows(&records, Situation::All);
        assert!(rows[0].playoffs.is_none());
    }

    #[test]
    fn test_rows_sorted_by_season_descending() {
        let records = vec![
            SkaterStatRecord {
                games_played: 70,
                ..record(2021, "BOS", Situation::All)
            },
            SkaterStatRecord {
                games_played: 75,
                ..record(2023, "BOS", Situation::All)
            },
            SkaterStatRecord {
                games_played: 80,
                ..record(2022, "BOS", Situation::All)
            },
        ];

        let rows = skater_season_rows(&records, Situation::All);
        let seasons: Vec<i32> = rows.iter().map(|r| r.season).collect();
        assert_eq!(seasons, vec![2023, 2022, 2021]);
    }

    #[test]
    fn test_corsi_is_ice_time_weighted() {
        let records = vec![
            SkaterStatRecord {
                games_played: 2,
                ice_time_seconds: 100.0,
                corsi_for_pct: Some(40.0),
                ..record(2023, "BOS", Situation::FiveOnFive)
            },
            SkaterStatRecord {
                games_played: 5,
                ice_time_seconds: 300.0,
                corsi_for_pct: Some(60.0),
                ..record(2023, "BOS", Situation::FiveOnFive)
            },
        ];

        let rows = skater_season_rows(&records, Situation::FiveOnFive);
        // (40*100 + 60*300) / 400 = 55, not the simple average 50
        assert_eq!(rows[0].corsi_for_pct, Some(55.0));
    }

    #[test]
    fn test_corsi_none_when_no_record_carries_it() {
        let records = vec![SkaterStatRecord {
            games_played: 10,
            ice_time_seconds: 9000.0,
            ..record(2023, "BOS", Situation::FiveOnFive)
        }];

        let rows = skater_season_rows(&records, Situation::FiveOnFive);
        assert_eq!(rows[0].corsi_for_pct, None);
    }

    #[test]
    fn test_per60_guards_zero_ice_time() {
        let records = vec![SkaterStatRecord {
            games_played: 1,
            goals: 1,
            points: 1,
            ..record(2023, "BOS", Situation::All)
        }];

        let rows = skater_season_rows(&records, Situation::All);
        assert_eq!(rows[0].goals_per60(), None);
        assert_eq!(rows[0].points_per60(), None);
    }

    #[test]
    fn test_unmatched_situation_yields_no_rows() {
        let records = vec![SkaterStatRecord {
            games_played: 82,
            ..record(2023, "BOS", Situation::All)
        }];
        assert!(skater_season_rows(&records, Situation::PenaltyKill).is_empty());
    }

    fn sample_rows() -> Vec<SkaterSeasonRow> {
        let records = vec![
            SkaterStatRecord {
                games_played: 82,
                goals: 30,
                assists: 40,
                points: 70,
                shots: 250,
                ice_time_seconds: 90000.0,
                expected_goals: 25.5,
                corsi_for_pct: Some(52.0),
                ..record(2023, "BOS", Situation::All)
            },
            SkaterStatRecord {
                is_playoffs: true,
                games_played: 7,
                goals: 3,
                assists: 2,
                points: 5,
                shots: 22,
                ice_time_seconds: 7800.0,
                expected_goals: 2.1,
                ..record(2023, "BOS", Situation::All)
            },
            SkaterStatRecord {
                games_played: 60,
                goals: 18,
                assists: 22,
                points: 40,
                shots: 180,
                ice_time_seconds: 60000.0,
                expected_goals: 16.0,
                corsi_for_pct: Some(48.0),
                ..record(2022, "BOS", Situation::All)
            },
        ];
        skater_season_rows(&records, Situation::All)
    }

    #[test]
    fn test_career_totals_sums_counts() {
        let rows = sample_rows();
        let totals = skater_career_totals(&rows);
        assert_eq!(totals.games_played, 142);
        assert_eq!(totals.goals, 48);
        assert_eq!(totals.points, 110);
        assert_eq!(totals.playoff_games_played, 7);
        assert_eq!(totals.playoff_goals, 3);
    }

    #[test]
    fn test_career_totals_rates_from_sums_not_averages() {
        let rows = sample_rows();
        let totals = skater_career_totals(&rows);
        // 48 goals over 150000 seconds, not mean of per-season rates
        let expected = 48.0 / (150000.0 / 3600.0);
        assert!((totals.goals_per60().unwrap() - expected).abs() < 1e-9);
        // Corsi weighted by season ice time: (52*90000 + 48*60000) / 150000
        let corsi = (52.0 * 90000.0 + 48.0 * 60000.0) / 150000.0;
        assert!((totals.corsi_for_pct.unwrap() - corsi).abs() < 1e-9);
    }

    #[test]
    fn test_career_totals_is_deterministic() {
        let rows = sample_rows();
        assert_eq!(skater_career_totals(&rows), skater_career_totals(&rows));
    }

    #[test]
    fn test_career_totals_no_playoffs_is_zero() {
        let records = vec![SkaterStatRecord {
            games_played: 82,
            ..record(2023, "CHI", Situation::All)
        }];
        let rows = skater_season_rows(&records, Situation::All);
        let totals = skater_career_totals(&rows);
        // Career playoff sums are zero (not absent) for players who never
        // made the playoffs
        assert_eq!(totals.playoff_games_played, 0);
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert!(skater_season_rows(&[], Situation::All).is_empty());
        let totals = skater_career_totals(&[]);
        assert_eq!(totals.games_played, 0);
        assert_eq!(totals.corsi_for_pct, None);
    }
}
