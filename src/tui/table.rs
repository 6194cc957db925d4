/// Column definitions for the season stat tables
///
/// A `ColumnDef` couples a header, a display width, an alignment, a cell
/// renderer, and an optional numeric extractor used by the sort state. The
/// skater and goalie tables are the same widget with different column sets.
use crate::formatting::{
    format_f1, format_opt_u32, format_pct1, format_rate2, format_sv_pct, format_toi,
};
use crate::stats::{GoalieSeasonRow, SkaterSeasonRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

pub struct ColumnDef<T> {
    pub header: &'static str,
    pub width: u16,
    pub align: Alignment,
    /// Column only rendered when playoff columns are shown
    pub playoff: bool,
    cell: fn(&T) -> String,
    sort_value: Option<fn(&T) -> Option<f64>>,
}

impl<T> ColumnDef<T> {
    pub fn new(header: &'static str, width: u16, align: Alignment, cell: fn(&T) -> String) -> Self {
        Self {
            header,
            width,
            align,
            playoff: false,
            cell,
            sort_value: None,
        }
    }

    pub fn sortable(mut self, sort_value: fn(&T) -> Option<f64>) -> Self {
        self.sort_value = Some(sort_value);
        self
    }

    pub fn playoff_only(mut self) -> Self {
        self.playoff = true;
        self
    }

    pub fn cell(&self, item: &T) -> String {
        (self.cell)(item)
    }

    pub fn is_sortable(&self) -> bool {
        self.sort_value.is_some()
    }

    pub fn sort_value(&self, item: &T) -> Option<f64> {
        self.sort_value.and_then(|f| f(item))
    }
}

/// Columns for the skater season table
///
/// Columns: Season, Team, GP, G, A, PTS, SOG, xG, CF%, G/60, P/60, TOI,
/// plus playoff GP/G/PTS when enabled
pub fn skater_columns() -> Vec<ColumnDef<SkaterSeasonRow>> {
    vec![
        ColumnDef::new("Season", 6, Alignment::Left, |r: &SkaterSeasonRow| {
            r.season.to_string()
        })
        .sortable(|r| Some(r.season as f64)),
        ColumnDef::new("Team", 4, Alignment::Left, |r: &SkaterSeasonRow| {
            r.team.clone()
        }),
        ColumnDef::new("GP", 4, Alignment::Right, |r: &SkaterSeasonRow| {
            r.games_played.to_string()
        })
        .sortable(|r| Some(r.games_played as f64)),
        ColumnDef::new("G", 4, Alignment::Right, |r: &SkaterSeasonRow| {
            r.goals.to_string()
        })
        .sortable(|r| Some(r.goals as f64)),
        ColumnDef::new("A", 4, Alignment::Right, |r: &SkaterSeasonRow| {
            r.assists.to_string()
        })
        .sortable(|r| Some(r.assists as f64)),
        ColumnDef::new("PTS", 4, Alignment::Right, |r: &SkaterSeasonRow| {
            r.points.to_string()
        })
        .sortable(|r| Some(r.points as f64)),
        ColumnDef::new("SOG", 4, Alignment::Right, |r: &SkaterSeasonRow| {
            r.shots.to_string()
        })
        .sortable(|r| Some(r.shots as f64)),
        ColumnDef::new("xG", 6, Alignment::Right, |r: &SkaterSeasonRow| {
            format_f1(r.expected_goals)
        })
        .sortable(|r| Some(r.expected_goals)),
        ColumnDef::new("CF%", 6, Alignment::Right, |r: &SkaterSeasonRow| {
            format_pct1(r.corsi_for_pct)
        })
        .sortable(|r| r.corsi_for_pct),
        ColumnDef::new("G/60", 6, Alignment::Right, |r: &SkaterSeasonRow| {
            format_rate2(r.goals_per60())
        })
        .sortable(|r| r.goals_per60()),
        ColumnDef::new("P/60", 6, Alignment::Right, |r: &SkaterSeasonRow| {
            format_rate2(r.points_per60())
        })
        .sortable(|r| r.points_per60()),
        ColumnDef::new("TOI", 8, Alignment::Right, |r: &SkaterSeasonRow| {
            format_toi(r.ice_time_seconds)
        })
        .sortable(|r| Some(r.ice_time_seconds)),
        ColumnDef::new("PGP", 4, Alignment::Right, |r: &SkaterSeasonRow| {
            format_opt_u32(r.playoffs.as_ref().map(|p| p.games_played))
        })
        .sortable(|r| r.playoffs.as_ref().map(|p| p.games_played as f64))
        .playoff_only(),
        ColumnDef::new("PG", 4, Alignment::Right, |r: &SkaterSeasonRow| {
            format_opt_u32(r.playoffs.as_ref().map(|p| p.goals))
        })
        .sortable(|r| r.playoffs.as_ref().map(|p| p.goals as f64))
        .playoff_only(),
        ColumnDef::new("PPTS", 4, Alignment::Right, |r: &SkaterSeasonRow| {
            format_opt_u32(r.playoffs.as_ref().map(|p| p.points))
        })
        .sortable(|r| r.playoffs.as_ref().map(|p| p.points as f64))
        .playoff_only(),
    ]
}

/// Columns for the goalie season table
///
/// Columns: Season, Team, GP, GA, SA, SV%, GAA, GSAx, TOI, plus playoff
/// GP/GA/SV% when enabled
pub fn goalie_columns() -> Vec<ColumnDef<GoalieSeasonRow>> {
    vec![
        ColumnDef::new("Season", 6, Alignment::Left, |r: &GoalieSeasonRow| {
            r.season.to_string()
        })
        .sortable(|r| Some(r.season as f64)),
        ColumnDef::new("Team", 4, Alignment::Left, |r: &GoalieSeasonRow| {
            r.team.clone()
        }),
        ColumnDef::new("GP", 4, Alignment::Right, |r: &GoalieSeasonRow| {
            r.games_played.to_string()
        })
        .sortable(|r| Some(r.games_played as f64)),
        ColumnDef::new("GA", 5, Alignment::Right, |r: &GoalieSeasonRow| {
            r.goals_against.to_string()
        })
        .sortable(|r| Some(r.goals_against as f64)),
        ColumnDef::new("SA", 5, Alignment::Right, |r: &GoalieSeasonRow| {
            r.shots_against.to_string()
        })
        .sortable(|r| Some(r.shots_against as f64)),
        ColumnDef::new("SV%", 6, Alignment::Right, |r: &GoalieSeasonRow| {
            format_sv_pct(r.save_pct())
        })
        .sortable(|r| r.save_pct()),
        ColumnDef::new("GAA", 6, Alignment::Right, |r: &GoalieSeasonRow| {
            format_rate2(r.gaa())
        })
        .sortable(|r| r.gaa()),
        ColumnDef::new("GSAx", 6, Alignment::Right, |r: &GoalieSeasonRow| {
            format_f1(r.goals_saved_above_expected)
        })
        .sortable(|r| Some(r.goals_saved_above_expected)),
        ColumnDef::new("TOI", 8, Alignment::Right, |r: &GoalieSeasonRow| {
            format_toi(r.ice_time_seconds)
        })
        .sortable(|r| Some(r.ice_time_seconds)),
        ColumnDef::new("PGP", 4, Alignment::Right, |r: &GoalieSeasonRow| {
            format_opt_u32(r.playoffs.as_ref().map(|p| p.games_played))
        })
        .sortable(|r| r.playoffs.as_ref().map(|p| p.games_played as f64))
        .playoff_only(),
        ColumnDef::new("PGA", 4, Alignment::Right, |r: &GoalieSeasonRow| {
            format_opt_u32(r.playoffs.as_ref().map(|p| p.goals_against))
        })
        .sortable(|r| r.playoffs.as_ref().map(|p| p.goals_against as f64))
        .playoff_only(),
        ColumnDef::new("PSV%", 6, Alignment::Right, |r: &GoalieSeasonRow| {
            format_sv_pct(r.playoffs.as_ref().and_then(|p| p.save_pct()))
        })
        .sortable(|r| r.playoffs.as_ref().and_then(|p| p.save_pct()))
        .playoff_only(),
    ]
}
