//! Shared fakes for use case tests

use crate::ports::generation_gateway::{GatewayError, GenerationGateway, GenerationRequest};
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger};
use crate::ports::progress::SearchProgressNotifier;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use fairfinder_domain::{Exhibition, ExhibitionBatch, SearchFilter};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Gateway that replays queued responses, one per call
pub struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let gateway = Self::new();
        gateway.push_text(text);
        gateway
    }

    pub fn with_error(error: GatewayError) -> Self {
        let gateway = Self::new();
        gateway.push_error(error);
        gateway
    }

    pub fn push_text(&self, text: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn push_error(&self, error: GatewayError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerationGateway for ScriptedGateway {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("no scripted response".to_string())))
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

/// Logger that keeps every event type it sees
#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<&'static str>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl GenerationLogger for RecordingLogger {
    fn log(&self, event: GenerationEvent) {
        self.events.lock().unwrap().push(event.event_type);
    }
}

/// Progress notifier that records callbacks as strings
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl SearchProgressNotifier for RecordingProgress {
    fn on_search_start(&self, _filter: &SearchFilter) {
        self.events.lock().unwrap().push("start".to_string());
    }

    fn on_search_complete(&self, success: bool, count: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("complete:{}:{}", success, count));
    }
}

/// Guangdong / Guangzhou, any category and invitation, Q1 2025
pub fn guangzhou_filter() -> SearchFilter {
    SearchFilter::builder()
        .province("Guangdong")
        .city("Guangzhou")
        .category("Any")
        .invitation("Any")
        .start_date("2025-01-01")
        .end_date("2025-04-01")
        .build()
        .unwrap()
}

/// Generated-response text for `(id, province, invitationType)` triples
pub fn records_json(records: &[(&str, &str, &str)]) -> String {
    let values: Vec<serde_json::Value> = records
        .iter()
        .map(|(id, province, invitation)| {
            serde_json::json!({
                "id": id,
                "name": format!("{} Trade Fair", id),
                "province": province,
                "city": "Guangzhou",
                "category": "General Trade",
                "startDate": "2025-02-10",
                "endDate": "2025-02-13",
                "venue": "Pazhou Complex",
                "organizer": "Guangzhou Trade Bureau",
                "website": format!("https://{}.example.com", id),
                "applicationLink": format!("https://{}.example.com/apply", id),
                "invitationType": invitation,
                "verificationStatus": true,
                "consularAcceptance": false
            })
        })
        .collect();
    serde_json::Value::Array(values).to_string()
}

/// A two-record batch for cache tests
pub fn sample_batch() -> ExhibitionBatch {
    let records: Vec<Exhibition> =
        serde_json::from_str(&records_json(&[("cached-a", "Zhejiang", "Free"), ("cached-b", "Fujian", "Paid")]))
            .unwrap();
    ExhibitionBatch::new(
        guangzhou_filter(),
        Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap(),
        records,
    )
    .unwrap()
}
