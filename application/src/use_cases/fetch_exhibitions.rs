//! Fetch Exhibitions use case
//!
//! Turns a [`SearchFilter`] into a generation request, submits it once, and
//! parses the reply into an [`ExhibitionBatch`].

use crate::config::SearchParams;
use crate::ports::generation_gateway::{GatewayError, GenerationGateway, GenerationRequest};
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::progress::{NoProgress, SearchProgressNotifier};
use chrono::Utc;
use fairfinder_domain::{
    DomainError, Exhibition, ExhibitionBatch, ExhibitionPrompt, SearchFilter, truncate,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Bytes of raw response quoted in parse errors
const RAW_PREVIEW_BYTES: usize = 200;

/// Errors that can occur while fetching exhibitions
#[derive(Error, Debug)]
pub enum FetchError {
    /// No credential or endpoint; nothing will work until it is fixed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The service failed, timed out, or answered with something unparsable
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The filter itself is invalid; no request was made
    #[error("Invalid filter: {0}")]
    Validation(#[from] DomainError),
}

impl From<GatewayError> for FetchError {
    fn from(error: GatewayError) -> Self {
        if error.is_configuration() {
            FetchError::Configuration(error.to_string())
        } else {
            FetchError::Upstream(error.to_string())
        }
    }
}

impl FetchError {
    /// Whether resubmitting the same search can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Upstream(_))
    }

    /// Message shown to the user in place of the results
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Configuration(_) => {
                "No API key is configured for the generation service. Set the API_KEY environment variable (or gemini.api_key_env in the config file) and restart.".to_string()
            }
            FetchError::Upstream(_) => {
                "Failed to fetch exhibition data. Please check your API key and try again."
                    .to_string()
            }
            FetchError::Validation(e) => e.to_string(),
        }
    }
}

/// Use case for generating one batch of exhibitions
pub struct FetchExhibitionsUseCase<G: GenerationGateway + 'static> {
    gateway: Arc<G>,
    params: SearchParams,
    logger: Arc<dyn GenerationLogger>,
}

impl<G: GenerationGateway + 'static> FetchExhibitionsUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            params: SearchParams::default(),
            logger: Arc::new(NoGenerationLogger),
        }
    }

    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, filter: &SearchFilter) -> Result<ExhibitionBatch, FetchError> {
        self.execute_with_progress(filter, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        filter: &SearchFilter,
        progress: &dyn SearchProgressNotifier,
    ) -> Result<ExhibitionBatch, FetchError> {
        let request = GenerationRequest::new(
            ExhibitionPrompt::render(filter, self.params.target_count),
            ExhibitionPrompt::response_schema(),
        )
        .with_temperature(self.params.temperature);

        info!(
            model = self.gateway.model_name(),
            "Requesting {} exhibitions for {}", self.params.target_count, filter
        );
        self.logger.log(GenerationEvent::new(
            "generation_request",
            json!({
                "model": self.gateway.model_name(),
                "filter": filter,
                "target_count": self.params.target_count,
                "temperature": self.params.temperature,
                "prompt": request.prompt,
            }),
        ));

        progress.on_search_start(filter);
        let result = self.generate_batch(filter, &request).await;
        match &result {
            Ok(batch) => {
                progress.on_search_complete(true, batch.len());
                self.logger.log(GenerationEvent::new(
                    "generation_response",
                    json!({ "count": batch.len(), "exhibitions": batch.exhibitions }),
                ));
            }
            Err(e) => {
                progress.on_search_complete(false, 0);
                warn!("Exhibition generation failed: {}", e);
                self.logger.log(GenerationEvent::new(
                    "generation_failed",
                    json!({ "error": e.to_string(), "retryable": e.is_retryable() }),
                ));
            }
        }
        result
    }

    async fn generate_batch(
        &self,
        filter: &SearchFilter,
        request: &GenerationRequest,
    ) -> Result<ExhibitionBatch, FetchError> {
        let text = self.gateway.generate(request).await?;
        let records = parse_exhibitions(&text)?;

        let batch = ExhibitionBatch::new(filter.clone(), Utc::now(), records)
            .map_err(|e| FetchError::Upstream(format!("Response violates the schema: {}", e)))?;

        if batch.len() != self.params.target_count {
            debug!(
                "Asked for {} exhibitions, got {}",
                self.params.target_count,
                batch.len()
            );
        }

        let report = batch.plausibility();
        if !report.is_clean() {
            warn!(
                out_of_range = report.out_of_range,
                inverted_dates = report.inverted_dates,
                "Some generated exhibitions ignore the requested date range"
            );
        }

        Ok(batch)
    }
}

/// Parse the raw generated text into records.
///
/// The text is trimmed and must be a JSON array whose every element matches
/// the exhibition schema; anything else fails the whole batch.
pub fn parse_exhibitions(text: &str) -> Result<Vec<Exhibition>, FetchError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FetchError::Upstream("Empty response".to_string()));
    }

    serde_json::from_str::<Vec<Exhibition>>(trimmed).map_err(|e| {
        FetchError::Upstream(format!(
            "Failed to parse response: {} (response starts with: {})",
            e,
            truncate(trimmed, RAW_PREVIEW_BYTES)
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{
        RecordingLogger, RecordingProgress, ScriptedGateway, guangzhou_filter, records_json,
    };
    use fairfinder_domain::REQUIRED_FIELDS;

    #[tokio::test]
    async fn test_success_returns_schema_conformant_batch() {
        let gateway = Arc::new(ScriptedGateway::with_text(records_json(&[
            ("a", "Guangdong", "Free"),
            ("b", "Guangdong", "Paid"),
        ])));
        let use_case = FetchExhibitionsUseCase::new(gateway.clone());

        let batch = use_case.execute(&guangzhou_filter()).await.unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.filter, guangzhou_filter());

        // Every record serializes back with the full set of required keys
        for record in &batch.exhibitions {
            let value = serde_json::to_value(record).unwrap();
            for field in REQUIRED_FIELDS {
                assert!(!value[field].is_null(), "{} missing", field);
            }
        }
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_prompt_schema_and_temperature() {
        let gateway = Arc::new(ScriptedGateway::with_text("[]"));
        let use_case = FetchExhibitionsUseCase::new(gateway.clone())
            .with_params(SearchParams::default().with_target_count(7).with_temperature(0.4));

        use_case.execute(&guangzhou_filter()).await.unwrap();

        let request = gateway.last_request().unwrap();
        assert!(request.prompt.contains("generate a list of 7 fictional"));
        assert!(request.prompt.contains("- City: Guangzhou"));
        assert_eq!(request.response_schema, ExhibitionPrompt::response_schema());
        assert!((request.temperature - 0.4).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_whitespace_is_trimmed() {
        let text = format!("\n\n  {}  \n", records_json(&[("a", "Hubei", "Free")]));
        let gateway = Arc::new(ScriptedGateway::with_text(text));
        let batch = FetchExhibitionsUseCase::new(gateway)
            .execute(&guangzhou_filter())
            .await
            .unwrap();
        assert_eq!(batch.exhibitions[0].province, "Hubei");
    }

    #[tokio::test]
    async fn test_count_mismatch_is_not_an_error() {
        let gateway = Arc::new(ScriptedGateway::with_text(records_json(&[(
            "only", "Hunan", "Paid",
        )])));
        let batch = FetchExhibitionsUseCase::new(gateway)
            .execute(&guangzhou_filter())
            .await
            .unwrap();
        assert_eq!(batch.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_is_upstream_error() {
        let gateway = Arc::new(ScriptedGateway::with_text("[{\"id\": \"a\", "));
        let err = FetchExhibitionsUseCase::new(gateway)
            .execute(&guangzhou_filter())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_missing_field_is_upstream_error() {
        let mut value: serde_json::Value =
            serde_json::from_str(&records_json(&[("a", "Hebei", "Free")])).unwrap();
        value[0].as_object_mut().unwrap().remove("organizer");
        let gateway = Arc::new(ScriptedGateway::with_text(value.to_string()));

        let err = FetchExhibitionsUseCase::new(gateway)
            .execute(&guangzhou_filter())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Upstream(ref m) if m.contains("organizer")));
    }

    #[tokio::test]
    async fn test_wrong_primitive_type_is_upstream_error() {
        let text = records_json(&[("a", "Hebei", "Free")])
            .replace("\"consularAcceptance\":false", "\"consularAcceptance\":\"no\"");
        let gateway = Arc::new(ScriptedGateway::with_text(text));
        let err = FetchExhibitionsUseCase::new(gateway)
            .execute(&guangzhou_filter())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_object_instead_of_array_is_upstream_error() {
        let gateway = Arc::new(ScriptedGateway::with_text("{\"exhibitions\": []}"));
        let err = FetchExhibitionsUseCase::new(gateway)
            .execute(&guangzhou_filter())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_upstream_error() {
        let gateway = Arc::new(ScriptedGateway::with_text(records_json(&[
            ("dup", "Jilin", "Free"),
            ("dup", "Jilin", "Paid"),
        ])));
        let err = FetchExhibitionsUseCase::new(gateway)
            .execute(&guangzhou_filter())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Upstream(ref m) if m.contains("duplicate id 'dup'")));
    }

    #[tokio::test]
    async fn test_missing_credential_is_configuration_error() {
        let gateway = Arc::new(ScriptedGateway::with_error(GatewayError::MissingCredential(
            "API_KEY".to_string(),
        )));
        let err = FetchExhibitionsUseCase::new(gateway)
            .execute(&guangzhou_filter())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Configuration(_)));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_timeout_is_upstream_error_without_retry() {
        let gateway = Arc::new(ScriptedGateway::with_error(GatewayError::Timeout));
        let err = FetchExhibitionsUseCase::new(gateway.clone())
            .execute(&guangzhou_filter())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)));
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_progress_and_transcript_events() {
        let gateway = Arc::new(ScriptedGateway::with_text(records_json(&[(
            "a", "Anhui", "Free",
        )])));
        let logger = Arc::new(RecordingLogger::default());
        let progress = RecordingProgress::default();
        let use_case = FetchExhibitionsUseCase::new(gateway).with_logger(logger.clone());

        use_case
            .execute_with_progress(&guangzhou_filter(), &progress)
            .await
            .unwrap();

        assert_eq!(
            logger.event_types(),
            vec!["generation_request", "generation_response"]
        );
        assert_eq!(progress.events(), vec!["start".to_string(), "complete:true:1".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_logs_generation_failed() {
        let gateway = Arc::new(ScriptedGateway::with_text("nonsense"));
        let logger = Arc::new(RecordingLogger::default());
        let use_case = FetchExhibitionsUseCase::new(gateway).with_logger(logger.clone());

        assert!(use_case.execute(&guangzhou_filter()).await.is_err());
        assert_eq!(
            logger.event_types(),
            vec!["generation_request", "generation_failed"]
        );
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(matches!(
            parse_exhibitions("   \n"),
            Err(FetchError::Upstream(ref m)) if m == "Empty response"
        ));
    }

    #[test]
    fn test_user_messages() {
        let upstream = FetchError::Upstream("HTTP 500".to_string());
        assert_eq!(
            upstream.user_message(),
            "Failed to fetch exhibition data. Please check your API key and try again."
        );
        let validation = FetchError::from(DomainError::InvalidFilter("bad range".to_string()));
        assert_eq!(validation.user_message(), "Invalid filter: bad range");
    }
}
