//! REST client for the Google Gemini `generateContent` endpoint.
//!
//! Sends the image as base64 inline data together with an instruction
//! prompt asking for a JSON classification, then parses the model's
//! text reply back into a [`RecyclingAnalysis`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::{RecyclingAnalysis, VisionError};

/// Default API base URL.
const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used for classification.
const MODEL: &str = "gemini-1.5-flash";

/// Instruction prompt sent alongside the image.
const PROMPT: &str = "Identify this item and provide a detailed recycling process for it. \
                      Return the response in JSON format with fields: itemName, material, \
                      recyclability, and recyclingProcess.";

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a new client with the production base URL.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_URL.to_string())
    }

    /// Create a client against a custom base URL (used by tests).
    pub fn with_base_url(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Classify an image. `mime_type` is the uploaded content type,
    /// e.g. `image/jpeg`.
    pub async fn analyze(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<RecyclingAnalysis, VisionError> {
        let body = serde_json::json!({
            "contents": [{
                "parts": [
                    {
                        "inlineData": {
                            "mimeType": mime_type,
                            "data": STANDARD.encode(image),
                        }
                    },
                    { "text": PROMPT },
                ]
            }]
        });

        let url = format!(
            "{}/v1beta/models/{MODEL}:generateContent?key={}",
            self.api_url, self.api_key
        );

        let response = self.client.post(url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VisionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = response.json().await?;
        let text = extract_reply_text(&payload)?;

        tracing::debug!(reply_len = text.len(), "Gemini classification received");

        Ok(parse_analysis(&text))
    }
}

/// Pull the model's text reply out of the `generateContent` envelope.
fn extract_reply_text(payload: &serde_json::Value) -> Result<String, VisionError> {
    payload
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| VisionError::Parse("missing candidates[0].content.parts[0].text".into()))
}

/// Parse the model's JSON reply into an analysis, tolerating markdown
/// code fences and missing fields.
fn parse_analysis(text: &str) -> RecyclingAnalysis {
    let stripped = strip_code_fences(text);

    let parsed: serde_json::Value = match serde_json::from_str(stripped) {
        Ok(value) => value,
        Err(e) => return RecyclingAnalysis::unknown(format!("Unparsable model reply: {e}")),
    };

    let field = |name: &str, fallback: &str| {
        parsed
            .get(name)
            .and_then(|v| v.as_str())
            .unwrap_or(fallback)
            .to_string()
    };

    RecyclingAnalysis {
        item_name: field("itemName", "Unknown Item"),
        material: field("material", "Unknown Material"),
        recyclability: field("recyclability", "Unknown"),
        recycling_process: field("recyclingProcess", "No recycling process available."),
        error: None,
    }
}

/// Strip a surrounding ```json ... ``` fence if the model added one.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
