//! Client for the RapidOCR sidecar service.
//!
//! The OCR engine is an external collaborator: it takes one base64-encoded
//! image and returns `[box, text, confidence]` detections. Payloads are
//! validated as decodable images before dispatch so malformed uploads fail
//! fast with a client error instead of a sidecar roundtrip.

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use report_core::{RawDetection, Token};

use crate::error::ApiError;
use crate::schemas::ImageData;

/// Configuration for the OCR sidecar connection.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8001".to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the OCR sidecar.
#[derive(Clone)]
pub struct OcrClient {
    config: OcrConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct OcrRequest<'a> {
    image_base64: &'a str,
}

#[derive(Deserialize)]
struct OcrResponse {
    boxes: Vec<RawDetection>,
}

impl OcrClient {
    pub fn new(config: OcrConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Builds a client from `REPORT_READER_OCR_URL`, falling back to the
    /// default sidecar address.
    pub fn from_env() -> Result<Self> {
        let mut config = OcrConfig::default();
        if let Ok(url) = std::env::var("REPORT_READER_OCR_URL") {
            config.base_url = url;
        }
        Self::new(config)
    }

    /// Runs OCR on every uploaded image, preserving upload order.
    pub async fn detect_batch(
        &self,
        images: &[ImageData],
        engine: &str,
    ) -> Result<Vec<Vec<Token>>, ApiError> {
        // Only RapidOCR is wired up; the selector stays in the API for
        // future engines.
        if engine != "rapidocr" {
            return Err(ApiError::UnknownEngine(engine.to_string()));
        }
        let mut batches = Vec::with_capacity(images.len());
        for image in images {
            validate_payload(&image.image_data)
                .map_err(|err| ApiError::BadImage(format!("{err:#}")))?;
            let tokens = self
                .detect(&image.image_data)
                .await
                .map_err(ApiError::OcrUnavailable)?;
            batches.push(tokens);
        }
        Ok(batches)
    }

    async fn detect(&self, image_base64: &str) -> Result<Vec<Token>> {
        let url = format!("{}/ocr", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .json(&OcrRequest { image_base64 })
            .send()
            .await
            .context("OCR sidecar unreachable")?;

        if !response.status().is_success() {
            bail!("OCR sidecar error: {}", response.status());
        }

        let body: OcrResponse = response
            .json()
            .await
            .context("invalid OCR sidecar response")?;
        Ok(body.boxes.into_iter().map(Token::from).collect())
    }
}

/// Decodes the base64 payload and checks the bytes look like an image.
fn validate_payload(image_base64: &str) -> Result<()> {
    let bytes = STANDARD
        .decode(image_base64.trim())
        .context("payload is not valid base64")?;
    image::guess_format(&bytes).context("payload is not a recognizable image")?;
    Ok(())
}
