use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

use super::{VisionService, DISH_PROMPT};
use crate::config::VisionConfig;
use crate::error::VisionError;

const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

pub struct GeminiVision {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiVision {
    /// Create a Gemini client from configuration.
    ///
    /// Returns `None` when no API key is configured; image analysis then
    /// takes the no-credential fallback path without any network call.
    pub fn from_config(config: &VisionConfig) -> Option<Self> {
        let api_key = config.credential()?.to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .unwrap_or_else(|e| {
                warn!(
                    "Failed to build HTTP client with a {}s timeout, using defaults: {}",
                    config.timeout, e
                );
                Client::new()
            });

        Some(GeminiVision {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl VisionService for GeminiVision {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn describe(&self, image: &[u8], content_type: &str) -> Result<String, VisionError> {
        let mime_type = if content_type.trim().is_empty() {
            DEFAULT_CONTENT_TYPE
        } else {
            content_type
        };

        let response = self
            .client
            .post(self.endpoint())
            .json(&json!({
                "contents": [{
                    "parts": [
                        { "text": DISH_PROMPT },
                        {
                            "inline_data": {
                                "mime_type": mime_type,
                                "data": STANDARD.encode(image)
                            }
                        }
                    ]
                }]
            }))
            .send()
            .await?;

        let status = response.status();
        let response_body: Value = response.json().await?;
        debug!("Gemini response ({}): {:?}", status, response_body);

        // Check for API error response
        if let Some(error) = response_body.get("error") {
            let code = error["code"].as_i64().unwrap_or(i64::from(status.as_u16()));
            let message = error["message"]
                .as_str()
                .unwrap_or("Unknown error")
                .to_string();

            if status == StatusCode::BAD_REQUEST || error["status"] == "INVALID_ARGUMENT" {
                return Err(VisionError::InvalidArgument(message));
            }
            return Err(VisionError::Api { code, message });
        }

        if !status.is_success() {
            return Err(VisionError::Api {
                code: i64::from(status.as_u16()),
                message: response_body.to_string(),
            });
        }

        let text = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(VisionError::EmptyResponse)?;

        Ok(text.to_string())
    }
}
