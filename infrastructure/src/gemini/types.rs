//! Request and response shapes for the Gemini REST API
//!
//! Builds the `generateContent` body from a port-level
//! [`GenerationRequest`] and pulls the generated text back out.

use fairfinder_application::{GatewayError, GenerationRequest};
use serde_json::{Value, json};

// ─── Domain → Gemini ─────────────────────────────────────────────

/// Build a structured-output `generateContent` body.
pub fn build_request_body(request: &GenerationRequest) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": request.prompt }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": request.response_schema,
            "temperature": request.temperature,
        }
    })
}

/// `{base_url}/v1beta/models/{model}:generateContent`
pub fn endpoint(base_url: &str, model: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    )
}

// ─── Gemini → Domain ─────────────────────────────────────────────

/// Concatenate the text parts of the first candidate.
///
/// A prompt rejected by safety filters comes back with no candidates and a
/// `promptFeedback.blockReason`; that reason is surfaced in the error.
pub fn extract_text(response: &Value) -> Result<String, GatewayError> {
    let Some(candidate) = response["candidates"].as_array().and_then(|c| c.first()) else {
        let reason = response["promptFeedback"]["blockReason"]
            .as_str()
            .map(|r| format!("Prompt blocked: {}", r))
            .unwrap_or_else(|| "No candidates in response".to_string());
        return Err(GatewayError::InvalidResponse(reason));
    };

    let text: String = candidate["content"]["parts"]
        .as_array()
        .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let finish = candidate["finishReason"].as_str().unwrap_or("unknown");
        return Err(GatewayError::InvalidResponse(format!(
            "Missing content (finishReason: {})",
            finish
        )));
    }

    Ok(text)
}

/// Map a transport failure to a gateway error.
pub fn convert_send_error(error: &reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() || error.is_request() {
        GatewayError::ConnectionError(error.to_string())
    } else {
        GatewayError::Other(error.to_string())
    }
}
