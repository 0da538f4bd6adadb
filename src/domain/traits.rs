use crate::domain::error::DetectError;
use crate::domain::model::{DetectionMethod, DetectionRequest, DetectionResponse, MethodOutcome, PanelKind};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Remote language detection service.
///
/// The HTTP client is the production implementation; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait DetectionService: Send + Sync {
    /// Issue exactly one detection call for `request`.
    async fn detect(&self, request: &DetectionRequest) -> Result<DetectionResponse, DetectError>;
}

#[async_trait]
impl<T: DetectionService + ?Sized> DetectionService for Arc<T> {
    async fn detect(&self, request: &DetectionRequest) -> Result<DetectionResponse, DetectError> {
        (**self).detect(request).await
    }
}

/// How result panels are arranged on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Only one method was requested.
    Single(PanelKind),
    /// Both panels next to each other.
    SideBySide,
    /// Both panels, one above the other (narrow screens).
    Stacked,
}

impl Layout {
    /// Widths at or below this stack the two panels.
    pub const STACK_MAX_WIDTH: u32 = 1200;

    pub fn for_method(method: DetectionMethod, width: Option<u32>) -> Self {
        match method {
            DetectionMethod::Traditional => Layout::Single(PanelKind::Traditional),
            DetectionMethod::Pretrained => Layout::Single(PanelKind::Pretrained),
            DetectionMethod::Both => match width {
                Some(w) if w <= Self::STACK_MAX_WIDTH => Layout::Stacked,
                _ => Layout::SideBySide,
            },
        }
    }
}

/// The page the controller drives: loading indicator, submit control,
/// error section and the two result panels.
///
/// Every call is synchronous; the controller never holds the view across
/// the network await.
pub trait View: Send {
    /// Disable (`true`) or re-enable (`false`) the submit control.
    fn set_busy(&mut self, busy: bool);

    fn show_loading(&mut self);

    fn hide_loading(&mut self);

    /// Show the single error message and hide any results.
    fn show_error(&mut self, message: &str);

    /// Clear both panels and arrange them for a new set of results.
    fn prepare_results(&mut self, layout: Layout);

    fn reveal_results(&mut self);

    /// Fill one panel with its result or its own error.
    fn render_panel(&mut self, panel: PanelKind, outcome: &MethodOutcome);

    fn animate_confidence(&mut self) {}
}

/// Consumes the delays of a render plan.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn pause(&self, delay: Duration);
}
