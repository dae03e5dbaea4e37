//! Server-side rendering of the single analyzer page.

use std::fmt::Write as _;

use analyzer::{HistoryLog, PredictionRecord};

use crate::assets::Background;

const INSTRUCTIONS: [&str; 3] = [
    "Enter the number of hours you study per day in the input box below.",
    "Press the <strong>Predict</strong> button to get your estimated marks.",
    "View your prediction and history on the main page.",
];

/// What happened on the request that produced this page.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    None,
    Predicted(PredictionRecord),
    Invalid(String),
    Cleared,
}

/// Everything the page shows.
pub struct PageView<'a> {
    pub history: &'a HistoryLog,
    /// Value echoed back into the hours input.
    pub hours: &'a str,
    pub notice: &'a Notice,
    pub background: &'a Background,
    pub download_name: &'a str,
}

/// Renders the full HTML document.
pub fn render(view: &PageView) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Academic Performance Analyzer</title>\n");
    html.push_str("<link rel=\"icon\" href=\"data:,\">\n");
    let _ = writeln!(html, "<style>{}</style>", stylesheet(view.background));
    html.push_str("</head>\n<body>\n<div class=\"app\">\n");

    sidebar(&mut html, view);
    content(&mut html, view);

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn sidebar(html: &mut String, view: &PageView) {
    html.push_str("<aside class=\"sidebar\">\n<h1>🔧 Features</h1>\n<h2>📘 Instructions</h2>\n<ol>\n");
    for step in INSTRUCTIONS {
        let _ = writeln!(html, "<li>{step}</li>");
    }
    html.push_str("</ol>\n<h3>📝 Prediction History</h3>\n");

    if view.history.is_empty() {
        html.push_str("<p>No prediction history available.</p>\n");
    } else {
        history_table(html, view.history);
    }

    html.push_str("<hr>\n<form method=\"post\" action=\"/clear\">\n");
    html.push_str("<button type=\"submit\">Clear Prediction History</button>\n</form>\n");
    if *view.notice == Notice::Cleared {
        html.push_str("<p class=\"success\">Prediction history cleared.</p>\n");
    }
    html.push_str("</aside>\n");
}

fn history_table(html: &mut String, history: &HistoryLog) {
    html.push_str("<table>\n<thead><tr><th></th><th>Study Hours</th><th>Predicted Marks</th></tr></thead>\n<tbody>\n");
    for (i, record) in history.iter().enumerate() {
        let _ = writeln!(
            html,
            "<tr><td>{i}</td><td>{}</td><td>{}</td></tr>",
            record.study_hours, record.predicted_score
        );
    }
    html.push_str("</tbody>\n</table>\n");
}

fn content(html: &mut String, view: &PageView) {
    let hours = escape(view.hours);

    html.push_str("<main class=\"content\">\n<h1>📚 Academic Performance Analyzer</h1>\n");
    html.push_str("<form method=\"post\" action=\"/predict\">\n");
    html.push_str(
        "<label class=\"big-text\" for=\"hours\">Enter the number of hours you study per day:</label>\n",
    );
    let _ = writeln!(
        html,
        "<input id=\"hours\" name=\"hours\" type=\"number\" min=\"0\" max=\"24\" step=\"1\" value=\"{hours}\" required>"
    );
    let _ = writeln!(
        html,
        "<p class=\"small-text\">You are studying for {hours} hours per day.</p>"
    );
    html.push_str("<button type=\"submit\">📈 Predict</button>\n</form>\n");

    match view.notice {
        Notice::Predicted(record) => {
            let _ = writeln!(
                html,
                "<p class=\"prediction-text\">Predicted Marks: {}%</p>",
                record.predicted_score
            );
            let _ = writeln!(
                html,
                "<p class=\"success\">You will score <strong>{}%</strong> marks if you study <strong>{}</strong> hours per day.</p>",
                record.predicted_score,
                record.study_hours.trunc()
            );
            let _ = writeln!(
                html,
                "<a class=\"download\" href=\"/download\" download=\"{}\">📥 Download Prediction History</a>",
                escape(view.download_name)
            );
        }
        Notice::Invalid(msg) => {
            let _ = writeln!(html, "<p class=\"error\">⚠️ {}</p>", escape(msg));
        }
        Notice::None | Notice::Cleared => {}
    }

    html.push_str("</main>\n");
}

fn stylesheet(background: &Background) -> String {
    format!(
        r#"
body {{ margin: 0; font-family: sans-serif; }}
.app {{
    display: flex; min-height: 100vh; color: white;
    background-image: url("{}");
    background-size: cover; background-repeat: no-repeat;
    background-attachment: fixed; background-position: center;
}}
.sidebar {{ width: 20rem; padding: 1.5rem; background: rgba(0, 0, 0, 0.55); }}
.content {{ flex: 1; padding: 2rem 3rem; }}
h1, h2, h3, h4, h5, h6, p, li {{ color: white; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ text-align: center; padding: 0.25rem 0.5rem; border-bottom: 1px solid rgba(255, 255, 255, 0.3); }}
button, .download {{
    background-color: #0078D7; color: white; border-radius: 5px; border: none;
    padding: 0.5rem 1rem; cursor: pointer; text-decoration: none; display: inline-block;
}}
input[type=number] {{ font-size: 1.2rem; padding: 0.3rem; width: 8rem; }}
.big-text {{ font-size: 30px; font-weight: bold; color: white; display: block; }}
.small-text {{ font-size: 20px; color: white; }}
.prediction-text {{ font-size: 18px; color: white; }}
.success {{ background: rgba(33, 195, 84, 0.35); padding: 0.75rem; border-radius: 5px; }}
.error {{ background: rgba(255, 43, 43, 0.35); padding: 0.75rem; border-radius: 5px; }}
"#,
        background.data_uri()
    )
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_with(history: &HistoryLog, hours: &str, notice: Notice) -> String {
        let background = Background::from_bytes("image/png", b"png");
        render(&PageView {
            history,
            hours,
            notice: &notice,
            background: &background,
            download_name: "prediction_history.csv",
        })
    }

    #[test]
    fn empty_history_message() {
        let html = render_with(&HistoryLog::new(), "0", Notice::None);
        assert!(html.contains("No prediction history available."));
        assert!(html.contains("You are studying for 0 hours per day."));
        assert!(!html.contains("Download Prediction History"));
    }

    #[test]
    fn prediction_shows_result_and_download() {
        let record = PredictionRecord::new(5.0, 70.13);
        let history: HistoryLog = [record].into_iter().collect();
        let html = render_with(&history, "5", Notice::Predicted(record));

        assert!(html.contains("Predicted Marks: 70.13%"));
        assert!(html.contains(
            "You will score <strong>70.13%</strong> marks if you study <strong>5</strong> hours per day."
        ));
        assert!(html.contains("<td>5</td><td>70.13</td>"));
        assert!(html.contains("download=\"prediction_history.csv\""));
    }

    #[test]
    fn invalid_input_is_escaped() {
        let html = render_with(
            &HistoryLog::new(),
            "<script>",
            Notice::Invalid("Please enter valid hours between 0 and 24.".into()),
        );
        assert!(html.contains("⚠️ Please enter valid hours between 0 and 24."));
        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn cleared_notice_in_sidebar() {
        let html = render_with(&HistoryLog::new(), "0", Notice::Cleared);
        assert!(html.contains("Prediction history cleared."));
    }

    #[test]
    fn background_is_inlined() {
        let html = render_with(&HistoryLog::new(), "0", Notice::None);
        assert!(html.contains("url(\"data:image/png;base64,cG5n\")"));
    }
}
