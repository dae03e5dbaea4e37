use analyzer::{Analyzer, AnalyzerError, INVALID_HOURS_MESSAGE};
use serde::Serialize;

use crate::{
    assets::Background,
    http::{Request, Response, Status},
    page::{self, Notice, PageView},
};

const ROUTES: [&str; 7] = [
    "/",
    "/predict",
    "/clear",
    "/download",
    "/api/predict",
    "/api/history",
    "/health",
];

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Maps requests onto the analyzer and renders the results.
pub struct App {
    analyzer: Analyzer,
    background: Background,
    download_name: String,
}

impl App {
    /// Creates a new `App`.
    ///
    /// # Arguments
    /// * `analyzer` - The prediction backend.
    /// * `background` - The page background image.
    /// * `download_name` - File name offered for the history download.
    pub fn new(analyzer: Analyzer, background: Background, download_name: String) -> Self {
        Self {
            analyzer,
            background,
            download_name,
        }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Handles a single request. Never fails: errors become error responses.
    pub fn handle(&self, req: &Request) -> Response {
        match (req.method.as_str(), req.path.as_str()) {
            ("GET", "/") => self.page(Status::Ok, "0", &Notice::None),
            ("POST", "/predict") => self.predict_form(req),
            ("POST", "/clear") => self.clear(),
            ("GET", "/download") => self.download(),
            ("POST", "/api/predict") => self.api_predict(req),
            ("GET", "/api/history") => self.api_history(),
            ("GET", "/health") => Response::text(Status::Ok, "ok"),
            (_, path) if ROUTES.contains(&path) => {
                Response::text(Status::MethodNotAllowed, "method not allowed")
            }
            _ => Response::text(Status::NotFound, "not found"),
        }
    }

    fn predict_form(&self, req: &Request) -> Response {
        let raw = req.params().remove("hours").unwrap_or_default();

        match self.analyzer.predict_input(&raw) {
            Ok(record) => {
                let hours = record.study_hours.to_string();
                self.page(Status::Ok, &hours, &Notice::Predicted(record))
            }
            Err(e) if e.is_user_error() => {
                log::warn!("rejected study hours {raw:?}");
                self.page(
                    Status::UnprocessableEntity,
                    &raw,
                    &Notice::Invalid(e.user_message()),
                )
            }
            Err(e) => self.failure(e),
        }
    }

    fn clear(&self) -> Response {
        match self.analyzer.clear() {
            Ok(()) => self.page(Status::Ok, "0", &Notice::Cleared),
            Err(e) => self.failure(e),
        }
    }

    fn download(&self) -> Response {
        match self.analyzer.export() {
            Ok(csv) => Response::attachment(csv, &self.download_name),
            Err(e) => self.failure(e),
        }
    }

    fn api_predict(&self, req: &Request) -> Response {
        let Some(raw) = req.params().remove("hours") else {
            return Response::json(
                Status::UnprocessableEntity,
                &ErrorBody {
                    error: INVALID_HOURS_MESSAGE,
                },
            );
        };

        match self.analyzer.predict_input(&raw) {
            Ok(record) => Response::json(Status::Ok, &record),
            Err(e) if e.is_user_error() => Response::json(
                Status::UnprocessableEntity,
                &ErrorBody {
                    error: &e.user_message(),
                },
            ),
            Err(e) => {
                log::error!("prediction failed: {e}");
                Response::json(
                    Status::InternalServerError,
                    &ErrorBody {
                        error: &e.to_string(),
                    },
                )
            }
        }
    }

    fn api_history(&self) -> Response {
        match self.analyzer.history() {
            Ok(history) => Response::json(Status::Ok, &history),
            Err(e) => {
                log::error!("reading history failed: {e}");
                Response::json(
                    Status::InternalServerError,
                    &ErrorBody {
                        error: &e.to_string(),
                    },
                )
            }
        }
    }

    fn page(&self, status: Status, hours: &str, notice: &Notice) -> Response {
        let history = match self.analyzer.history() {
            Ok(history) => history,
            Err(e) => return self.failure(e),
        };

        let html = page::render(&PageView {
            history: &history,
            hours,
            notice,
            background: &self.background,
            download_name: &self.download_name,
        });
        Response::html(status, html)
    }

    fn failure(&self, e: AnalyzerError) -> Response {
        log::error!("request failed: {e}");
        Response::text(Status::InternalServerError, e.user_message())
    }
}
