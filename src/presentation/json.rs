use crate::domain::error::DetectError;
use crate::domain::model::{DetectionResponse, MethodOutcome, PanelKind};
use crate::domain::traits::{Layout, View};
use serde_json::json;

/// View for `--json` output: remembers the error message, renders nothing.
#[derive(Debug, Default)]
pub struct SilentView {
    error: Option<String>,
}

impl SilentView {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl View for SilentView {
    fn set_busy(&mut self, _busy: bool) {}

    fn show_loading(&mut self) {}

    fn hide_loading(&mut self) {}

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn prepare_results(&mut self, _layout: Layout) {
        self.error = None;
    }

    fn reveal_results(&mut self) {}

    fn render_panel(&mut self, _panel: PanelKind, _outcome: &MethodOutcome) {}
}

/// Pretty JSON for a submit outcome; failures become `{"error": message}`.
pub fn to_json(outcome: &Result<DetectionResponse, DetectError>) -> Result<String, DetectError> {
    let text = match outcome {
        Ok(response) => serde_json::to_string_pretty(response)?,
        Err(err) => serde_json::to_string_pretty(&json!({ "error": err.to_string() }))?,
    };
    Ok(text)
}
