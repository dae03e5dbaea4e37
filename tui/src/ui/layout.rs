use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Splits the screen into (sidebar, main).
pub fn columns(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    (cols[0], cols[1])
}

/// Splits the sidebar into (instructions, history, notice).
pub fn sidebar(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    (rows[0], rows[1], rows[2])
}

/// Splits the main area into (title, input, result, hints).
pub fn main(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    (rows[0], rows[1], rows[2], rows[3])
}
