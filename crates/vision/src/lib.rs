//! Clients for the external image-classification services.
//!
//! Both providers map their free-text classification into the same
//! fixed four-field [`RecyclingAnalysis`] shape. Provider failures are
//! expected operating conditions: callers degrade to
//! [`RecyclingAnalysis::unknown`] rather than failing the request.

use serde::Serialize;

pub mod gemini;
pub mod imagga;

pub use gemini::GeminiClient;
pub use imagga::ImaggaClient;

/// Classification result for a recyclable item.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecyclingAnalysis {
    pub item_name: String,
    pub material: String,
    pub recyclability: String,
    pub recycling_process: String,
    /// Present only on a degraded response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecyclingAnalysis {
    /// Fallback result for an unidentifiable image or provider failure.
    pub fn unknown(error: impl Into<String>) -> Self {
        Self {
            item_name: "Unknown Item".to_string(),
            material: "Unknown Material".to_string(),
            recyclability: "Unknown".to_string(),
            recycling_process: "No recycling process available.".to_string(),
            error: Some(error.into()),
        }
    }
}

/// Errors from the vision API layer.
#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Vision API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider's response did not have the expected shape.
    #[error("Unparsable vision response: {0}")]
    Parse(String),
}
