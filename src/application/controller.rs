use crate::application::render_plan::{apply_step, ImmediateScheduler, RenderPlan};
use crate::domain::error::DetectError;
use crate::domain::model::{DetectionMethod, DetectionResponse};
use crate::domain::traits::{DetectionService, Scheduler, View};
use crate::domain::validation::validate_request;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Where the controller is in the submit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Phase {
    Idle = 0,
    Validating = 1,
    Loading = 2,
    Rendering = 3,
    ErrorDisplay = 4,
}

impl Phase {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Phase::Validating,
            2 => Phase::Loading,
            3 => Phase::Rendering,
            4 => Phase::ErrorDisplay,
            _ => Phase::Idle,
        }
    }
}

/// Drives one submit-to-render cycle at a time against an injected
/// service and view.
pub struct DetectionController<S, V> {
    service: S,
    view: Mutex<V>,
    scheduler: Arc<dyn Scheduler>,
    width: Option<u32>,
    phase: AtomicU8,
    in_flight: AtomicBool,
    // submit control currently disabled by us
    control_disabled: AtomicBool,
}

impl<S, V> DetectionController<S, V>
where
    S: DetectionService,
    V: View,
{
    pub fn new(service: S, view: V) -> Self {
        Self {
            service,
            view: Mutex::new(view),
            scheduler: Arc::new(ImmediateScheduler),
            width: None,
            phase: AtomicU8::new(Phase::Idle as u8),
            in_flight: AtomicBool::new(false),
            control_disabled: AtomicBool::new(false),
        }
    }

    pub fn with_scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Available display width, used to pick the two-panel layout.
    pub fn with_width(mut self, width: Option<u32>) -> Self {
        self.width = width;
        self
    }

    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn view(&self) -> &Mutex<V> {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view.into_inner()
    }

    /// Validate `text`, send one detection request and render the outcome.
    ///
    /// The view is always updated before this returns. A call made while
    /// another is in flight fails with [`DetectError::Busy`] and touches
    /// neither the view nor the service. Dropping the returned future
    /// mid-call re-enables the submit control and frees the controller.
    pub async fn submit(
        &self,
        text: &str,
        method: DetectionMethod,
    ) -> Result<DetectionResponse, DetectError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Rejected submit: a detection request is already in flight");
            return Err(DetectError::Busy);
        }

        let _guard = InFlightGuard { controller: self };
        self.run(text, method).await
    }

    async fn run(
        &self,
        text: &str,
        method: DetectionMethod,
    ) -> Result<DetectionResponse, DetectError> {
        self.set_phase(Phase::Validating);
        let request = match validate_request(text, method) {
            Ok(request) => request,
            Err(err) => {
                debug!(error = %err, "Input rejected locally");
                self.set_phase(Phase::ErrorDisplay);
                self.view.lock().await.show_error(&err.to_string());
                return Err(err.into());
            }
        };

        self.set_phase(Phase::Loading);
        {
            let mut view = self.view.lock().await;
            view.set_busy(true);
            self.control_disabled.store(true, Ordering::Release);
            view.show_loading();
        }

        info!(
            method = %request.method(),
            chars = request.text().chars().count(),
            "Submitting detection request"
        );
        let outcome = self.service.detect(&request).await;

        match outcome {
            Ok(response) => {
                self.render(&response, method).await;
                Ok(response)
            }
            Err(err) => {
                warn!(error = %err, "Detection request failed");
                self.set_phase(Phase::ErrorDisplay);
                let mut view = self.view.lock().await;
                view.hide_loading();
                view.show_error(&err.to_string());
                self.enable_control(&mut *view);
                Err(err)
            }
        }
    }

    async fn render(&self, response: &DetectionResponse, method: DetectionMethod) {
        self.set_phase(Phase::Rendering);

        for panel in response.unrequested_panels(method) {
            warn!(?panel, %method, "Ignoring result for a method that was not requested");
        }

        self.view.lock().await.hide_loading();

        let plan = RenderPlan::build(response, method, self.width);
        debug!(stages = plan.stages().len(), "Rendering detection results");
        for stage in plan.into_stages() {
            self.scheduler.pause(stage.delay).await;
            let mut view = self.view.lock().await;
            apply_step(&mut *view, &stage.step);
        }

        let mut view = self.view.lock().await;
        self.enable_control(&mut *view);
    }

    /// Re-enable the submit control, at most once per disable.
    fn enable_control(&self, view: &mut V) {
        if self.control_disabled.swap(false, Ordering::AcqRel) {
            view.set_busy(false);
        }
    }

    fn set_phase(&self, phase: Phase) {
        self.phase.store(phase as u8, Ordering::Release);
    }
}

/// Returns the controller to idle when a submit ends, including when its
/// future is dropped before completion.
struct InFlightGuard<'a, S, V>
where
    S: DetectionService,
    V: View,
{
    controller: &'a DetectionController<S, V>,
}

impl<S, V> Drop for InFlightGuard<'_, S, V>
where
    S: DetectionService,
    V: View,
{
    fn drop(&mut self) {
        let controller = self.controller;
        if controller.control_disabled.load(Ordering::Acquire) {
            // 取消时视图锁不会被持有 (锁从不跨 await)
            if let Ok(mut view) = controller.view.try_lock() {
                warn!("Detection request cancelled before completion");
                view.hide_loading();
                controller.enable_control(&mut *view);
            }
        }
        controller.set_phase(Phase::Idle);
        controller.in_flight.store(false, Ordering::Release);
    }
}
