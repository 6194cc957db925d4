/// Season/team aggregation for goalie stat records
///
/// Parallel to the skater variant: group by (season, team) within one
/// situation, sum regular-season and playoff records separately, and derive
/// save percentage and goals-against average from the summed counts. Deriving
/// from sums (rather than averaging per-record rates) keeps a 3-game stint
/// from weighing as much as a 60-game season.
use std::collections::HashMap;

use crate::model::{GoalieStatRecord, Situation};

/// Playoff counting-stat sums for one (season, team); absent when the
/// combination has no playoff records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoaliePlayoffTotals {
    pub games_played: u32,
    pub ice_time_seconds: f64,
    pub goals_against: u32,
    pub shots_against: u32,
    pub goals_saved_above_expected: f64,
}

impl GoaliePlayoffTotals {
    pub fn save_pct(&self) -> Option<f64> {
        save_pct(self.goals_against, self.shots_against)
    }

    pub fn gaa(&self) -> Option<f64> {
        gaa(self.goals_against, self.ice_time_seconds)
    }
}

/// Aggregated goalie row for one (season, team)
#[derive(Debug, Clone, PartialEq)]
pub struct GoalieSeasonRow {
    pub season: i32,
    pub team: String,
    pub games_played: u32,
    pub ice_time_seconds: f64,
    pub goals_against: u32,
    pub shots_against: u32,
    pub goals_saved_above_expected: f64,
    pub playoffs: Option<GoaliePlayoffTotals>,
}

impl GoalieSeasonRow {
    /// `(SA - GA) / SA`, None when no shots faced
    pub fn save_pct(&self) -> Option<f64> {
        save_pct(self.goals_against, self.shots_against)
    }

    /// Goals against per 60 minutes, None when no ice time
    pub fn gaa(&self) -> Option<f64> {
        gaa(self.goals_against, self.ice_time_seconds)
    }
}

/// Career totals folded from season rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalieCareerTotals {
    pub games_played: u32,
    pub ice_time_seconds: f64,
    pub goals_against: u32,
    pub shots_against: u32,
    pub goals_saved_above_expected: f64,
    pub playoff_games_played: u32,
    pub playoff_ice_time_seconds: f64,
    pub playoff_goals_against: u32,
    pub playoff_shots_against: u32,
    pub playoff_goals_saved_above_expected: f64,
}

impl GoalieCareerTotals {
    pub fn save_pct(&self) -> Option<f64> {
        save_pct(self.goals_against, self.shots_against)
    }

    pub fn gaa(&self) -> Option<f64> {
        gaa(self.goals_against, self.ice_time_seconds)
    }

    pub fn playoff_save_pct(&self) -> Option<f64> {
        save_pct(self.playoff_goals_against, self.playoff_shots_against)
    }
}

fn save_pct(goals_against: u32, shots_against: u32) -> Option<f64> {
    if shots_against > 0 {
        Some((shots_against as f64 - goals_against as f64) / shots_against as f64)
    } else {
        None
    }
}

fn gaa(goals_against: u32, ice_time_seconds: f64) -> Option<f64> {
    if ice_time_seconds > 0.0 {
        Some(goals_against as f64 / (ice_time_seconds / 3600.0))
    } else {
        None
    }
}

struct Acc {
    season: i32,
    team: String,
    games_played: u32,
    ice_time_seconds: f64,
    goals_against: u32,
    shots_against: u32,
    goals_saved_above_expected: f64,
    playoffs: Option<GoaliePlayoffTotals>,
}

impl Acc {
    fn new(season: i32, team: String) -> Self {
        Self {
            season,
            team,
            games_played: 0,
            ice_time_seconds: 0.0,
            goals_against: 0,
            shots_against: 0,
            goals_saved_above_expected: 0.0,
            playoffs: None,
        }
    }

    fn add(&mut self, rec: &GoalieStatRecord) {
        if rec.is_playoffs {
            let p = self.playoffs.get_or_insert_with(GoaliePlayoffTotals::default);
            p.games_played += rec.games_played;
            p.ice_time_seconds += rec.ice_time_seconds;
            p.goals_against += rec.goals_against;
            p.shots_against += rec.shots_against;
            p.goals_saved_above_expected += rec.goals_saved_above_expected;
        } else {
            self.games_played += rec.games_played;
            self.ice_time_seconds += rec.ice_time_seconds;
            self.goals_against += rec.goals_against;
            self.shots_against += rec.shots_against;
            self.goals_saved_above_expected += rec.goals_saved_above_expected;
        }
    }

    fn into_row(self) -> GoalieSeasonRow {
        GoalieSeasonRow {
            season: self.season,
            team: self.team,
            games_played: self.games_played,
            ice_time_seconds: self.ice_time_seconds,
            goals_against: self.goals_against,
            shots_against: self.shots_against,
            goals_saved_above_expected: self.goals_saved_above_expected,
            playoffs: self.playoffs,
        }
    }
}

/// Aggregate raw goalie records for one situation into per-(season, team)
/// rows, sorted by season descending
///
/// Same policies as the skater variant: non-matching situations excluded,
/// multiple records per key summed, rows with zero regular-season games
/// dropped, playoff sums None when no playoff records exist.
pub fn goalie_season_rows(
    records: &[GoalieStatRecord],
    situation: Situation,
) -> Vec<GoalieSeasonRow> {
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

    let mut rows: Vec<GoalieSeasonRow> = accs
        .into_iter()
        .filter(|acc| acc.games_played > 0)
        .map(Acc::into_row)
        .collect();

    rows.sort_by(|a, b| b.season.cmp(&a.season));
    rows
}

/// Fold season rows into one career-totals row, rates recomputed from the
/// summed counts
pub fn goalie_career_totals(rows: &[GoalieSeasonRow]) -> GoalieCareerTotals {
    let mut totals = GoalieCareerTotals::default();

    for row in rows {
        totals.games_played += row.games_played;
        totals.ice_time_seconds += row.ice_time_seconds;
        totals.goals_against += row.goals_against;
        totals.shots_against += row.shots_against;
        totals.goals_saved_above_expected += row.goals_saved_above_expected;
        if let Some(p) = &row.playoffs {
            totals.playoff_games_played += p.games_played;
            totals.playoff_ice_time_seconds += p.ice_time_seconds;
            totals.playoff_goals_against += p.goals_against;
            totals.playoff_shots_against += p.shots_against;
            totals.playoff_goals_saved_above_expected += p.goals_saved_above_expected;
        }
    }

    totals
}
