//! Image verification submission.
//!
//! Client-side (hydrate): with no endpoint configured the call waits a fixed
//! simulated delay and reports the placeholder score; with an endpoint it
//! POSTs the file as multipart form data via `gloo-net`.
//! Server-side (SSR): always `SubmitError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, non-2xx, unparseable body) surfaces as a
//! `SubmitError` so the import surface can re-enable submit and keep the
//! selected file for a retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use serde::Deserialize;

use crate::util::browser_file::BrowserFile;

/// Multipart field name carrying the image.
pub const IMAGE_FIELD: &str = "image";
pub const SIMULATED_DELAY_MS: u32 = 2000;
pub const SIMULATED_INTEGRITY_SCORE: u8 = 98;

/// Where (and whether) verification requests are sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitConfig {
    /// `None` keeps the simulated round-trip.
    pub endpoint: Option<String>,
    pub simulated_delay_ms: u32,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self { endpoint: None, simulated_delay_ms: SIMULATED_DELAY_MS }
    }
}

impl SubmitConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self { endpoint: Some(endpoint.into()), ..Self::default() }
    }

    pub fn is_simulated(&self) -> bool {
        self.endpoint.is_none()
    }
}

/// Successful verification response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct VerificationReport {
    pub integrity_score: u8,
}

impl VerificationReport {
    pub fn simulated() -> Self {
        Self { integrity_score: SIMULATED_INTEGRITY_SCORE }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("verification request failed: {0}")]
    Transport(String),
    #[error("verification failed: status {0}")]
    Status(u16),
    #[error("verification response invalid: {0}")]
    InvalidResponse(String),
    #[error("verification is only available in the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(SubmitError::Status(status)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_report(body: &str) -> Result<VerificationReport, SubmitError> {
    let report: VerificationReport =
        serde_json::from_str(body).map_err(|e| SubmitError::InvalidResponse(e.to_string()))?;
    if report.integrity_score > 100 {
        return Err(SubmitError::InvalidResponse(format!(
            "integrity_score {} out of range",
            report.integrity_score
        )));
    }
    Ok(report)
}

/// Submit `file` for verification.
///
/// # Errors
///
/// Returns a `SubmitError` on transport failure, a non-2xx status, or a body
/// that is not a valid `VerificationReport`.
pub async fn submit_image(config: &SubmitConfig, file: &BrowserFile) -> Result<VerificationReport, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(endpoint) = config.endpoint.as_deref() else {
            gloo_timers::future::TimeoutFuture::new(config.simulated_delay_ms).await;
            return Ok(VerificationReport::simulated());
        };

        let form = web_sys::FormData::new().map_err(|e| SubmitError::Transport(format!("{e:?}")))?;
        form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())
            .map_err(|e| SubmitError::Transport(format!("{e:?}")))?;

        let resp = gloo_net::http::Request::post(endpoint)
            .body(form)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| SubmitError::Transport(e.to_string()))?;
        parse_report(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, file);
        Err(SubmitError::Unavailable)
    }
}
