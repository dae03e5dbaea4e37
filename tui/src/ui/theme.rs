use ratatui::style::{Color, Modifier, Style};

/// Dark theme with the page's blue accent.
///
/// Base aesthetic:
/// - white foreground on near-black
/// - blue borders and titles
/// - green for results, red for errors
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(14, 17, 23);
    pub const FG: Color = Color::Rgb(255, 255, 255);
    pub const FG_DIM: Color = Color::Rgb(190, 196, 204);
    pub const FG_MUTED: Color = Color::Rgb(110, 116, 124);

    pub const ACCENT_BLUE: Color = Color::Rgb(0, 120, 215);
    pub const ACCENT_GREEN: Color = Color::Rgb(33, 195, 84);
    pub const ACCENT_RED: Color = Color::Rgb(255, 75, 75);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::ACCENT_BLUE).bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// The editable number.
    pub fn input() -> Style {
        Style::default()
            .fg(Self::FG)
            .bg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }
}
