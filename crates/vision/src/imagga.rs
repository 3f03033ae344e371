//! REST client for the Imagga tagging API.
//!
//! Uploads the image to `/v2/tags`, keeps the confident tags, and maps
//! them onto a material, a recyclability verdict, and a canned process
//! description via keyword heuristics.

use crate::{RecyclingAnalysis, VisionError};

/// Default API base URL.
const DEFAULT_API_URL: &str = "https://api.imagga.com";

/// Tags below this confidence are discarded.
const MIN_CONFIDENCE: f64 = 30.0;

/// At most this many tags feed the heuristics.
const MAX_TAGS: usize = 5;

/// HTTP client for the Imagga API.
pub struct ImaggaClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    api_secret: String,
}

impl ImaggaClient {
    /// Create a new client with the production base URL.
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self::with_base_url(api_key, api_secret, DEFAULT_API_URL.to_string())
    }

    /// Create a client against a custom base URL (used by tests).
    pub fn with_base_url(api_key: String, api_secret: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            api_secret,
        }
    }

    /// Classify an image by its Imagga tags.
    pub async fn analyze(
        &self,
        image: &[u8],
        file_name: &str,
    ) -> Result<RecyclingAnalysis, VisionError> {
        let part = reqwest::multipart::Part::bytes(image.to_vec()).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(format!("{}/v2/tags", self.api_url))
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VisionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = response.json().await?;
        let tags = extract_tags(&payload);

        tracing::debug!(tag_count = tags.len(), "Imagga tags received");

        Ok(analysis_from_tags(&tags))
    }
}

/// Keep the English names of confident tags, best-first, capped at
/// [`MAX_TAGS`].
fn extract_tags(payload: &serde_json::Value) -> Vec<String> {
    payload
        .pointer("/result/tags")
        .and_then(|v| v.as_array())
        .map(|tags| {
            tags.iter()
                .filter(|tag| {
                    tag.get("confidence").and_then(|c| c.as_f64()).unwrap_or(0.0) > MIN_CONFIDENCE
                })
                .take(MAX_TAGS)
                .filter_map(|tag| tag.pointer("/tag/en").and_then(|v| v.as_str()))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Map a tag list onto the fixed four-field response.
fn analysis_from_tags(tags: &[String]) -> RecyclingAnalysis {
    let item_name = tags
        .first()
        .cloned()
        .unwrap_or_else(|| "unknown item".to_string());
    let material = determine_material(tags);

    RecyclingAnalysis {
        item_name,
        recyclability: determine_recyclability(material),
        recycling_process: recycling_process_for(material),
        material: material.to_string(),
        error: None,
    }
}

/// Pick a material from tag keywords. First match wins.
fn determine_material(tags: &[String]) -> &'static str {
    let has = |needle: &str| tags.iter().any(|tag| tag.contains(needle));
    if has("plastic") {
        "Plastic"
    } else if has("metal") {
        "Metal"
    } else if has("paper") {
        "Paper"
    } else if has("glass") {
        "Glass"
    } else {
        "Unknown material"
    }
}

fn determine_recyclability(material: &str) -> String {
    match material {
        "Plastic" | "Metal" | "Paper" | "Glass" => "Recyclable".to_string(),
        _ => "Please check with local recycling guidelines".to_string(),
    }
}

fn recycling_process_for(material: &str) -> String {
    match material {
        "Plastic" => {
            "1. Clean the item\n2. Check for recycling symbol\n3. Place in plastic recycling bin"
        }
        "Metal" => {
            "1. Clean the item\n2. Remove any non-metal parts\n3. Place in metal recycling bin"
        }
        "Paper" => {
            "1. Remove any non-paper materials\n2. Flatten if possible\n3. Place in paper recycling bin"
        }
        "Glass" => {
            "1. Clean the item\n2. Remove any non-glass parts\n3. Place in glass recycling bin"
        }
        _ => "Please consult your local recycling guidelines for proper disposal methods",
    }
    .to_string()
}
