//! report-reader REST API server
//!
//! Accepts base64-encoded screenshots over HTTP, fans them out to the OCR
//! sidecar, and runs the core parsing pipelines over the returned
//! detections.

mod error;
mod ocr;
mod schemas;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use report_core::{parse_battle_report, parse_bonus_overview, ReportOptions};

use crate::error::ApiError;
use crate::ocr::OcrClient;
use crate::schemas::{
    BattleReportResponse, BonusOverviewResponse, ReadBattleReportRequest,
    ReadBonusOverviewRequest,
};

#[derive(Clone)]
struct AppState {
    ocr: OcrClient,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let state = Arc::new(AppState {
        ocr: OcrClient::from_env()?,
    });

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/read_bonus_overview", post(read_bonus_overview))
        .route("/api/v1/read_battle_report", post(read_battle_report))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = std::env::var("REPORT_READER_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn read_bonus_overview(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReadBonusOverviewRequest>,
) -> Result<Json<BonusOverviewResponse>, ApiError> {
    tracing::info!(images = request.images.len(), "read_bonus_overview");
    let images = state
        .ocr
        .detect_batch(&request.images, &request.ocr_engine)
        .await?;
    let stats = parse_bonus_overview(&images)?;
    Ok(Json(BonusOverviewResponse { stats }))
}

async fn read_battle_report(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReadBattleReportRequest>,
) -> Result<Json<BattleReportResponse>, ApiError> {
    tracing::info!(
        images = request.images.len(),
        stats_only = request.stats_only,
        "read_battle_report"
    );
    let images = state
        .ocr
        .detect_batch(&request.images, &request.ocr_engine)
        .await?;
    let options = ReportOptions {
        stats_only: request.stats_only,
        ..ReportOptions::default()
    };
    let report = parse_battle_report(&images, &options)?;
    Ok(Json(BattleReportResponse {
        troops_outcome: report.outcome,
        left_stats: report.left,
        right_stats: report.right,
    }))
}
