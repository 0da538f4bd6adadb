use crate::domain::model::{DetectionMethod, DetectionResponse, MethodOutcome, PanelKind};
use crate::domain::traits::{Layout, Scheduler, View};
use async_trait::async_trait;
use std::time::Duration;

// 相对于渲染开始的时间点 (毫秒)
const REVEAL_AT_MS: u64 = 100;
const FIRST_PANEL_AT_MS: u64 = 200;
const SECOND_PANEL_AT_MS: u64 = 400;
const CONFIDENCE_AT_MS: u64 = 600;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderStep {
    Layout(Layout),
    RevealSection,
    Panel(PanelKind, MethodOutcome),
    AnimateConfidence,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderStage {
    /// Wait before this stage, relative to the previous one.
    pub delay: Duration,
    pub step: RenderStep,
}

/// Ordered render steps for one successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    stages: Vec<RenderStage>,
}

impl RenderPlan {
    pub fn build(response: &DetectionResponse, method: DetectionMethod, width: Option<u32>) -> Self {
        let mut timed: Vec<(u64, RenderStep)> = vec![
            (0, RenderStep::Layout(Layout::for_method(method, width))),
            (REVEAL_AT_MS, RenderStep::RevealSection),
        ];

        if method.includes_traditional() {
            if let Some(outcome) = &response.traditional {
                timed.push((FIRST_PANEL_AT_MS, RenderStep::Panel(PanelKind::Traditional, outcome.clone())));
            }
        }
        if method.includes_pretrained() {
            if let Some(outcome) = &response.pretrained {
                let at = if method == DetectionMethod::Both {
                    SECOND_PANEL_AT_MS
                } else {
                    FIRST_PANEL_AT_MS
                };
                timed.push((at, RenderStep::Panel(PanelKind::Pretrained, outcome.clone())));
            }
        }

        timed.push((CONFIDENCE_AT_MS, RenderStep::AnimateConfidence));

        // stable sort: 同一时间点保持插入顺序
        timed.sort_by_key(|(at, _)| *at);

        let mut previous = 0;
        let stages = timed
            .into_iter()
            .map(|(at, step)| {
                let delay = Duration::from_millis(at - previous);
                previous = at;
                RenderStage { delay, step }
            })
            .collect();

        Self { stages }
    }

    pub fn stages(&self) -> &[RenderStage] {
        &self.stages
    }

    /// Panels in the order they will be rendered.
    pub fn panel_order(&self) -> Vec<PanelKind> {
        self.stages
            .iter()
            .filter_map(|stage| match &stage.step {
                RenderStep::Panel(kind, _) => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub fn total_delay(&self) -> Duration {
        self.stages.iter().map(|stage| stage.delay).sum()
    }

    pub fn into_stages(self) -> Vec<RenderStage> {
        self.stages
    }
}

/// Apply a single step to the view.
pub fn apply_step<V: View + ?Sized>(view: &mut V, step: &RenderStep) {
    match step {
        RenderStep::Layout(layout) => view.prepare_results(*layout),
        RenderStep::RevealSection => view.reveal_results(),
        RenderStep::Panel(kind, outcome) => view.render_panel(*kind, outcome),
        RenderStep::AnimateConfidence => view.animate_confidence(),
    }
}

/// Runs every stage without waiting.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateScheduler;

#[async_trait]
impl Scheduler for ImmediateScheduler {
    async fn pause(&self, _delay: Duration) {}
}

/// Waits out each stage delay on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PacedScheduler;

#[async_trait]
impl Scheduler for PacedScheduler {
    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MethodOutcome;

    fn failed(msg: &str) -> MethodOutcome {
        MethodOutcome::Failed {
            error: msg.to_string(),
        }
    }

    fn both_failed() -> DetectionResponse {
        DetectionResponse {
            traditional: Some(failed("t")),
            pretrained: Some(failed("p")),
        }
    }

    #[test]
    fn traditional_precedes_pretrained_when_both_requested() {
        let plan = RenderPlan::build(&both_failed(), DetectionMethod::Both, None);
        assert_eq!(
            plan.panel_order(),
            vec![PanelKind::Traditional, PanelKind::Pretrained]
        );
        assert_eq!(plan.total_delay(), Duration::from_millis(600));
    }

    #[test]
    fn stage_delays_are_relative() {
        let plan = RenderPlan::build(&both_failed(), DetectionMethod::Both, Some(1600));
        let delays: Vec<u64> = plan
            .stages()
            .iter()
            .map(|s| s.delay.as_millis() as u64)
            .collect();
        assert_eq!(delays, vec![0, 100, 100, 200, 200]);
        assert_eq!(
            plan.stages()[0].step,
            RenderStep::Layout(Layout::SideBySide)
        );
    }

    #[test]
    fn skips_panels_that_were_not_requested() {
        let plan = RenderPlan::build(&both_failed(), DetectionMethod::Pretrained, None);
        assert_eq!(plan.panel_order(), vec![PanelKind::Pretrained]);
        assert_eq!(
            plan.stages()[0].step,
            RenderStep::Layout(Layout::Single(PanelKind::Pretrained))
        );
    }

    #[test]
    fn skips_panels_missing_from_response() {
        let response = DetectionResponse {
            traditional: Some(failed("t")),
            pretrained: None,
        };
        let plan = RenderPlan::build(&response, DetectionMethod::Both, Some(800));
        assert_eq!(plan.panel_order(), vec![PanelKind::Traditional]);
        assert_eq!(plan.stages()[0].step, RenderStep::Layout(Layout::Stacked));
    }
}
