//! Error-to-response mapping.
//!
//! Page classification failures become 400s that name the missing screen;
//! report-path extraction defects become 422s; OCR sidecar failures are
//! reported as a gateway problem without leaking connection details.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use report_core::Error as CoreError;

#[derive(Debug)]
pub enum ApiError {
    Core(CoreError),
    BadImage(String),
    UnknownEngine(String),
    OcrUnavailable(anyhow::Error),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::Core(err)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, detail) = match self {
            ApiError::Core(CoreError::PageNotFound(keyword)) => (
                StatusCode::BAD_REQUEST,
                "page_not_found",
                missing_page_message(&keyword),
            ),
            ApiError::Core(
                err @ (CoreError::MissingNeighbor { .. } | CoreError::ValueParse { .. }),
            ) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "extraction_failed",
                err.to_string(),
            ),
            ApiError::Core(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "error",
                err.to_string(),
            ),
            ApiError::BadImage(detail) => (StatusCode::BAD_REQUEST, "bad_image", detail),
            ApiError::UnknownEngine(engine) => (
                StatusCode::BAD_REQUEST,
                "unknown_engine",
                format!("Unsupported OCR engine {engine:?}."),
            ),
            ApiError::OcrUnavailable(err) => {
                tracing::error!(error = %err, "OCR sidecar failure");
                (
                    StatusCode::BAD_GATEWAY,
                    "ocr_unavailable",
                    "The OCR service is currently unavailable.".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { code, detail })).into_response()
    }
}

/// User-facing message naming the screen missing from the upload.
fn missing_page_message(keyword: &str) -> String {
    let page = match keyword {
        "stat" => "Stats".to_string(),
        "battle overview" => "Battle Overview".to_string(),
        other => title_case(other),
    };
    format!(
        "The \"{page}\" page was not found in the uploaded files. \
         Please ensure the images include that page."
    )
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_keyword_maps_to_pretty_page_name() {
        let message = missing_page_message("stat");
        assert!(message.starts_with("The \"Stats\" page was not found"));
    }

    #[test]
    fn battle_overview_keyword_maps_to_pretty_page_name() {
        let message = missing_page_message("battle overview");
        assert!(message.starts_with("The \"Battle Overview\" page was not found"));
    }

    #[test]
    fn unknown_keywords_are_title_cased() {
        let message = missing_page_message("hero gear");
        assert!(message.starts_with("The \"Hero Gear\" page was not found"));
    }
}
