use std::path::PathBuf;

use analyzer::Analyzer;
use crossterm::event::KeyCode;
use ratatui::{widgets::Block, Frame};

use crate::{
    state::form::FormState,
    ui::{layout, theme::Theme, widgets},
};

use super::Action;

/// The prediction form together with the analyzer it drives.
pub struct FormScreen {
    pub analyzer: Analyzer,
    pub state: FormState,
}

impl FormScreen {
    pub fn new(analyzer: Analyzer, export_path: PathBuf) -> Self {
        let state = FormState::load(&analyzer, export_path);
        Self { analyzer, state }
    }
}

pub fn handle_key(screen: &mut FormScreen, key: KeyCode) -> Action {
    let FormScreen { analyzer, state } = screen;

    match key {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            state.push_digit(c as u8 - b'0');
        }
        KeyCode::Backspace => state.pop_digit(),
        KeyCode::Up | KeyCode::Char('+') => state.increment(),
        KeyCode::Down | KeyCode::Char('-') => state.decrement(),
        KeyCode::Enter => state.predict(analyzer),
        KeyCode::Char('c') => state.clear(analyzer),
        KeyCode::Char('e') => state.export(analyzer),
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, screen: &FormScreen) {
    let state = &screen.state;
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (side, content) = layout::columns(area);
    let (instructions_area, history_area, notice_area) = layout::sidebar(side);
    let (title_area, input_area, result_area, hints_area) = layout::main(content);

    f.render_widget(widgets::instructions(), instructions_area);
    if state.history.is_empty() {
        f.render_widget(widgets::empty_history(), history_area);
    } else {
        f.render_widget(widgets::history_table(&state.history), history_area);
    }
    f.render_widget(widgets::notice(state.notice.as_ref()), notice_area);

    f.render_widget(widgets::title(), title_area);
    f.render_widget(widgets::input(state), input_area);
    f.render_widget(widgets::result(state), result_area);
    f.render_widget(widgets::hints(), hints_area);
}

#[cfg(test)]
mod tests {
    use analyzer::{HistoryStore, PredictionRecord};
    use model::LinearRegression;
    use tempfile::TempDir;

    use crate::state::form::Outcome;

    use super::*;

    fn screen() -> (TempDir, FormScreen) {
        let dir = tempfile::tempdir().unwrap();
        let predictor = Box::new(LinearRegression::new(vec![3.93571802], 50.44735504));
        let analyzer = Analyzer::new(predictor, HistoryStore::new(dir.path().join("history.csv")));
        let screen = FormScreen::new(analyzer, dir.path().join("prediction_history.csv"));
        (dir, screen)
    }

    fn press(screen: &mut FormScreen, keys: &[KeyCode]) {
        for key in keys {
            assert!(matches!(handle_key(screen, *key), Action::None));
        }
    }

    #[test]
    fn typing_and_enter_predicts() {
        let (_dir, mut screen) = screen();

        press(&mut screen, &[KeyCode::Char('8'), KeyCode::Enter]);

        let expected = PredictionRecord::new(8.0, 81.93);
        assert_eq!(screen.state.outcome, Outcome::Predicted(expected));
        assert_eq!(screen.analyzer.history().unwrap().records(), &[expected]);
    }

    #[test]
    fn arrows_change_hours() {
        let (_dir, mut screen) = screen();

        press(&mut screen, &[KeyCode::Up, KeyCode::Up, KeyCode::Up, KeyCode::Down]);
        assert_eq!(screen.state.hours, 2);
    }

    #[test]
    fn c_clears_history() {
        let (_dir, mut screen) = screen();
        press(&mut screen, &[KeyCode::Char('5'), KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(screen.state.history.len(), 2);

        press(&mut screen, &[KeyCode::Char('c')]);

        assert!(screen.state.history.is_empty());
    }

    #[test]
    fn q_and_esc_quit() {
        let (_dir, mut screen) = screen();

        assert!(matches!(handle_key(&mut screen, KeyCode::Char('q')), Action::Quit));
        assert!(matches!(handle_key(&mut screen, KeyCode::Esc), Action::Quit));
    }
}
