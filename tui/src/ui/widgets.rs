use analyzer::{HistoryLog, MAX_HOURS, MIN_HOURS};
use ratatui::{
    layout::{Alignment, Constraint},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::state::form::{FormState, Notice, Outcome};

use super::theme::Theme;

const INSTRUCTIONS: [&str; 3] = [
    "Enter the number of hours you study per day.",
    "Press Enter to get your estimated marks.",
    "View your prediction and history here.",
];

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(title)
        .title_style(Theme::title())
}

pub fn instructions() -> Paragraph<'static> {
    let lines = INSTRUCTIONS
        .iter()
        .enumerate()
        .map(|(i, step)| Line::from(Span::styled(format!("{}. {step}", i + 1), Theme::text())))
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(panel(" Features | Instructions "))
        .wrap(Wrap { trim: true })
}

/// The history as a two-column table, newest last.
pub fn history_table(history: &HistoryLog) -> Table<'static> {
    let header = Row::new(vec!["Study Hours", "Predicted Marks"]).style(Theme::title());

    let rows = history.iter().map(|r| {
        Row::new(vec![
            Cell::from(format!("{}", r.study_hours)),
            Cell::from(format!("{:.2}", r.predicted_score)),
        ])
        .style(Theme::text())
    });

    Table::new(rows, [Constraint::Length(12), Constraint::Min(8)])
        .header(header)
        .block(panel(" Prediction History "))
}

/// Shown in place of the table while the history is empty.
pub fn empty_history() -> Paragraph<'static> {
    Paragraph::new(Span::styled("No prediction history available.", Theme::dim()))
        .block(panel(" Prediction History "))
        .wrap(Wrap { trim: true })
}

pub fn notice(notice: Option<&Notice>) -> Paragraph<'static> {
    let line = match notice {
        Some(Notice::Cleared) => Span::styled("Prediction history cleared.", Theme::ok()),
        Some(Notice::Exported(path)) => {
            Span::styled(format!("Saved {}", path.display()), Theme::ok())
        }
        Some(Notice::Failed(msg)) => Span::styled(msg.clone(), Theme::error()),
        None => Span::styled("c  Clear Prediction History", Theme::muted()),
    };

    Paragraph::new(line)
        .block(Block::default().borders(Borders::TOP).border_style(Theme::border()))
        .wrap(Wrap { trim: true })
}

pub fn title() -> Paragraph<'static> {
    Paragraph::new(Span::styled("Academic Performance Analyzer", Theme::title()))
        .alignment(Alignment::Center)
        .block(panel(""))
}

pub fn input(state: &FormState) -> Paragraph<'static> {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Enter hours studied per day ({MIN_HOURS}-{MAX_HOURS}): "),
                Theme::dim(),
            ),
            Span::styled(format!(" {:>2} ", state.hours), Theme::input()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("You are studying for {} hours per day.", state.hours),
            Theme::text(),
        )),
    ];

    Paragraph::new(lines).block(panel(" Study Hours "))
}

pub fn result(state: &FormState) -> Paragraph<'static> {
    let lines = match &state.outcome {
        Outcome::Idle => vec![Line::from(Span::styled(
            "Press Enter to predict.",
            Theme::muted(),
        ))],
        Outcome::Predicted(record) => vec![
            Line::from(Span::styled(
                format!("Predicted Marks: {}%", record.predicted_score),
                Theme::title(),
            )),
            Line::from(Span::styled(
                format!(
                    "You will score {}% marks if you study {} hours per day.",
                    record.predicted_score, record.study_hours
                ),
                Theme::ok(),
            )),
            Line::from(Span::styled(
                format!("e  Download {}", file_name(state)),
                Theme::muted(),
            )),
        ],
        Outcome::Invalid(msg) | Outcome::Failed(msg) => {
            vec![Line::from(Span::styled(msg.clone(), Theme::error()))]
        }
    };

    Paragraph::new(lines)
        .block(panel(" Prediction "))
        .wrap(Wrap { trim: true })
}

pub fn hints() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("0-9 ↑↓", Theme::dim()),
        Span::styled("  hours    ", Theme::muted()),
        Span::styled("enter", Theme::dim()),
        Span::styled("  predict    ", Theme::muted()),
        Span::styled("c", Theme::dim()),
        Span::styled("  clear    ", Theme::muted()),
        Span::styled("e", Theme::dim()),
        Span::styled("  export    ", Theme::muted()),
        Span::styled("q", Theme::dim()),
        Span::styled("  quit", Theme::muted()),
    ]))
    .alignment(Alignment::Center)
}

fn file_name(state: &FormState) -> String {
    state
        .export_path()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
