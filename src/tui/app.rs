/// Interactive state for the player view
///
/// Holds everything the keyboard can change: the active situation, the
/// selected column, the sort state, and whether playoff columns are shown.
/// Aggregated rows are rebuilt from the shared records on every draw, so this
/// state never holds stale data.
use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Situation;
use crate::stats::SortState;
use crate::types::PlayerKind;

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Refresh,
    Redraw,
}

pub struct App {
    pub kind: PlayerKind,
    pub situation: Situation,
    pub selected_col: usize,
    pub show_playoffs: bool,
    pub sort: SortState<usize>,
}

impl App {
    pub fn new(kind: PlayerKind, situation: Situation) -> Self {
        Self {
            kind,
            situation,
            selected_col: 0,
            show_playoffs: true,
            sort: SortState::new(),
        }
    }

    /// Number of columns currently visible
    fn column_count(&self) -> usize {
        let (total, playoff) = match self.kind {
            PlayerKind::Skater => (super::table::skater_columns().len(), 3),
            PlayerKind::Goalie => (super::table::goalie_columns().len(), 3),
        };
        if self.show_playoffs {
            total
        } else {
            total - playoff
        }
    }

    /// Whether the currently selected column accepts sorting
    fn selected_is_sortable(&self) -> bool {
        match self.kind {
            PlayerKind::Skater => super::table::skater_columns()
                .get(self.selected_col)
                .map(|c| c.is_sortable())
                .unwrap_or(false),
            PlayerKind::Goalie => super::table::goalie_columns()
                .get(self.selected_col)
                .map(|c| c.is_sortable())
                .unwrap_or(false),
        }
    }

    /// Translate a key press into an action, mutating state as needed
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppAction> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppAction::Quit),
            KeyCode::Char('r') => Some(AppAction::Refresh),
            KeyCode::Left => {
                self.selected_col = self.selected_col.saturating_sub(1);
                Some(AppAction::Redraw)
            }
            KeyCode::Right => {
                if self.selected_col + 1 < self.column_count() {
                    self.selected_col += 1;
                }
                Some(AppAction::Redraw)
            }
            KeyCode::Char('s') | KeyCode::Enter => {
                if self.selected_is_sortable() {
                    self.sort.select(self.selected_col);
                    Some(AppAction::Redraw)
                } else {
                    None
                }
            }
            KeyCode::Char('p') => {
                self.show_playoffs = !self.show_playoffs;
                // Selection may fall off the end when playoff columns hide
                self.selected_col = self.selected_col.min(self.column_count() - 1);
                Some(AppAction::Redraw)
            }
            KeyCode::Char('1') => self.set_situation(Situation::All),
            KeyCode::Char('2') => self.set_situation(Situation::FiveOnFive),
            KeyCode::Char('3') => self.set_situation(Situation::PowerPlay),
            KeyCode::Char('4') => self.set_situation(Situation::PenaltyKill),
            KeyCode::Char('5') => self.set_situation(Situation::Other),
            _ => None,
        }
    }

    fn set_situation(&mut self, situation: Situation) -> Option<AppAction> {
        self.situation = situation;
        Some(AppAction::Redraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SortDirection;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(PlayerKind::Skater, Situation::All);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Some(AppAction::Quit));
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Some(AppAction::Quit));
    }

    #[test]
    fn test_column_navigation_clamps() {
        let mut app = App::new(PlayerKind::Skater, Situation::All);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.selected_col, 0);

        for _ in 0..100 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.selected_col, app.column_count() - 1);
    }

    #[test]
    fn test_sort_toggle_on_selected_column() {
        let mut app = App::new(PlayerKind::Skater, Situation::All);
        // Move to GP (index 2) past the unsortable Team column
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));

        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.sort.key(), Some(2));
        assert_eq!(app.sort.direction(), SortDirection::Descending);

        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.sort.direction(), SortDirection::Ascending);
    }

    #[test]
    fn test_sort_ignored_on_unsortable_column() {
        let mut app = App::new(PlayerKind::Skater, Situation::All);
        app.handle_key(key(KeyCode::Right)); // Team
        assert_eq!(app.handle_key(key(KeyCode::Char('s'))), None);
        assert_eq!(app.sort.key(), None);
    }

    #[test]
    fn test_playoff_toggle_clamps_selection() {
        let mut app = App::new(PlayerKind::Goalie, Situation::All);
        for _ in 0..100 {
            app.handle_key(key(KeyCode::Right));
        }
        let last_with_playoffs = app.selected_col;

        app.handle_key(key(KeyCode::Char('p')));
        assert!(!app.show_playoffs);
        assert!(app.selected_col < last_with_playoffs);
    }

    #[test]
    fn test_situation_keys() {
        let mut app = App::new(PlayerKind::Skater, Situation::All);
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.situation, Situation::FiveOnFive);
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.situation, Situation::PenaltyKill);
    }
}
