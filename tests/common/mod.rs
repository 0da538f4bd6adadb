//! 测试用的假服务与记录视图
#![allow(dead_code)]

use async_trait::async_trait;
use langid::domain::error::DetectError;
use langid::domain::model::{
    Alternative, DetectionMethod, DetectionRequest, DetectionResponse, DetectionResult,
    MethodOutcome, NgramAnalysis, PanelKind,
};
use langid::domain::traits::{DetectionService, Layout, Scheduler, View};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::Notify;

pub type Reply = fn() -> Result<DetectionResponse, DetectError>;

/// Records every request and answers with a fixed reply.
pub struct FakeService {
    reply: Reply,
    requests: Mutex<Vec<(String, DetectionMethod)>>,
}

impl FakeService {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(String, DetectionMethod)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DetectionService for FakeService {
    async fn detect(&self, request: &DetectionRequest) -> Result<DetectionResponse, DetectError> {
        self.requests
            .lock()
            .unwrap()
            .push((request.text().to_string(), request.method()));
        (self.reply)()
    }
}

/// Blocks inside `detect` until released, so a second submit can race it.
pub struct GatedService {
    pub entered: Notify,
    pub release: Notify,
    pub calls: Mutex<usize>,
}

impl GatedService {
    pub fn new() -> Self {
        Self {
            entered: Notify::new(),
            release: Notify::new(),
            calls: Mutex::new(0),
        }
    }
}

#[async_trait]
impl DetectionService for GatedService {
    async fn detect(&self, _request: &DetectionRequest) -> Result<DetectionResponse, DetectError> {
        *self.calls.lock().unwrap() += 1;
        self.entered.notify_one();
        self.release.notified().await;
        Ok(traditional_only())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Busy(bool),
    ShowLoading,
    HideLoading,
    Error(String),
    Prepare(Layout),
    Reveal,
    Panel(PanelKind, Option<String>),
    AnimateConfidence,
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<Event>,
}

impl RecordingView {
    pub fn busy_changes(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Busy(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn panels(&self) -> Vec<PanelKind> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Panel(kind, _) => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Error(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }
}

impl View for RecordingView {
    fn set_busy(&mut self, busy: bool) {
        self.events.push(Event::Busy(busy));
    }

    fn show_loading(&mut self) {
        self.events.push(Event::ShowLoading);
    }

    fn hide_loading(&mut self) {
        self.events.push(Event::HideLoading);
    }

    fn show_error(&mut self, message: &str) {
        self.events.push(Event::Error(message.to_string()));
    }

    fn prepare_results(&mut self, layout: Layout) {
        self.events.push(Event::Prepare(layout));
    }

    fn reveal_results(&mut self) {
        self.events.push(Event::Reveal);
    }

    fn render_panel(&mut self, panel: PanelKind, outcome: &MethodOutcome) {
        self.events
            .push(Event::Panel(panel, outcome.error().map(str::to_string)));
    }

    fn animate_confidence(&mut self) {
        self.events.push(Event::AnimateConfidence);
    }
}

/// Records requested delays instead of sleeping.
#[derive(Default)]
pub struct RecordingScheduler {
    pub delays: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Scheduler for RecordingScheduler {
    async fn pause(&self, delay: Duration) {
        self.delays.lock().unwrap().push(delay);
    }
}

pub fn traditional_result() -> DetectionResult {
    DetectionResult {
        language: "English".to_string(),
        language_code: Some("en".to_string()),
        confidence: 94.12,
        method: "Traditional N-gram Analysis".to_string(),
        analysis: Some(NgramAnalysis {
            total_bigrams: 10,
            unique_bigrams: 9,
            total_trigrams: Some(9),
            unique_trigrams: Some(9),
            common_bigrams: vec![("he".to_string(), 1), ("el".to_string(), 1)],
            common_trigrams: vec![("hel".to_string(), 1)],
        }),
        alternatives: None,
        total_candidates: None,
    }
}

pub fn pretrained_result() -> DetectionResult {
    DetectionResult {
        language: "French".to_string(),
        language_code: Some("fr".to_string()),
        confidence: 99.99,
        method: "Pre-trained Model (Google langdetect)".to_string(),
        analysis: None,
        alternatives: Some(vec![Alternative {
            language: "French".to_string(),
            language_code: Some("fr".to_string()),
            confidence: 99.99,
        }]),
        total_candidates: Some(1),
    }
}

pub fn traditional_only() -> DetectionResponse {
    DetectionResponse {
        traditional: Some(MethodOutcome::Detected(traditional_result())),
        pretrained: None,
    }
}

pub fn traditional_failed_pretrained_ok() -> DetectionResponse {
    DetectionResponse {
        traditional: Some(MethodOutcome::Failed {
            error: "Traditional detection failed: model unavailable".to_string(),
        }),
        pretrained: Some(MethodOutcome::Detected(pretrained_result())),
    }
}

pub fn both_failed() -> DetectionResponse {
    DetectionResponse {
        traditional: Some(MethodOutcome::Failed {
            error: "Traditional detection failed: a".to_string(),
        }),
        pretrained: Some(MethodOutcome::Failed {
            error: "Pre-trained detection failed: b".to_string(),
        }),
    }
}
