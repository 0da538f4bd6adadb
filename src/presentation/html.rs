//! HTML rendering of detection results.
//!
//! `HtmlView` keeps a model of the detection page (loading section, error
//! section, two result columns, submit control) and produces the same result
//! markup the web front end shows.

use crate::domain::model::{Alternative, DetectionResult, MethodOutcome, NgramAnalysis, PanelKind};
use crate::domain::traits::{Layout, View};
use crate::presentation::confidence::{format_score, ConfidenceLevel};
use std::fmt::Write;

const FULL_WIDTH_COLUMN: &str = "col-12 mb-4";
const HALF_WIDTH_COLUMN: &str = "col-xl-6 col-lg-12 col-md-12 mb-4";

/// Escape text for element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub visible: bool,
    pub class: &'static str,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            visible: true,
            class: HALF_WIDTH_COLUMN,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HtmlView {
    submit_disabled: bool,
    loading_visible: bool,
    results_visible: bool,
    error_visible: bool,
    error_message: String,
    traditional_column: Column,
    pretrained_column: Column,
    traditional_html: String,
    pretrained_html: String,
    confidence_animated: bool,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.submit_disabled
    }

    pub fn is_loading_visible(&self) -> bool {
        self.loading_visible
    }

    pub fn is_results_visible(&self) -> bool {
        self.results_visible
    }

    /// The error section message, if the section is showing.
    pub fn error_message(&self) -> Option<&str> {
        self.error_visible.then_some(self.error_message.as_str())
    }

    pub fn panel_html(&self, panel: PanelKind) -> &str {
        match panel {
            PanelKind::Traditional => &self.traditional_html,
            PanelKind::Pretrained => &self.pretrained_html,
        }
    }

    pub fn column(&self, panel: PanelKind) -> &Column {
        match panel {
            PanelKind::Traditional => &self.traditional_column,
            PanelKind::Pretrained => &self.pretrained_column,
        }
    }

    pub fn confidence_animated(&self) -> bool {
        self.confidence_animated
    }

    /// Markup for whichever section is currently visible.
    pub fn to_html(&self) -> String {
        if let Some(message) = self.error_message() {
            return format!(
                "<div id=\"error-section\">\n<div class=\"alert alert-danger\" role=\"alert\">\n<span id=\"error-message\">{}</span>\n</div>\n</div>\n",
                escape(message)
            );
        }
        if !self.results_visible {
            return String::new();
        }

        let mut out = String::from("<div id=\"results-section\" class=\"row\">\n");
        for panel in [PanelKind::Traditional, PanelKind::Pretrained] {
            let column = self.column(panel);
            if !column.visible {
                continue;
            }
            let (id, body_id) = match panel {
                PanelKind::Traditional => ("traditional-card", "traditional-results"),
                PanelKind::Pretrained => ("pretrained-card", "pretrained-results"),
            };
            writeln!(out, "<div class=\"{}\">", column.class).ok();
            writeln!(out, "<div id=\"{}\" class=\"card h-100 results-enter\">", id).ok();
            writeln!(out, "<div class=\"card-header\"><h5>{}</h5></div>", panel.title()).ok();
            writeln!(
                out,
                "<div id=\"{}\" class=\"card-body\">{}</div>",
                body_id,
                self.panel_html(panel)
            )
            .ok();
            out.push_str("</div>\n</div>\n");
        }
        out.push_str("</div>\n");
        out
    }
}

impl View for HtmlView {
    fn set_busy(&mut self, busy: bool) {
        self.submit_disabled = busy;
    }

    fn show_loading(&mut self) {
        self.loading_visible = true;
        self.results_visible = false;
        self.error_visible = false;
    }

    fn hide_loading(&mut self) {
        self.loading_visible = false;
    }

    fn show_error(&mut self, message: &str) {
        self.error_message = message.to_string();
        self.error_visible = true;
        self.results_visible = false;
        self.loading_visible = false;
    }

    fn prepare_results(&mut self, layout: Layout) {
        self.error_visible = false;
        self.traditional_html.clear();
        self.pretrained_html.clear();
        self.confidence_animated = false;

        let (traditional, pretrained) = match layout {
            Layout::Single(PanelKind::Traditional) => (
                Column { visible: true, class: FULL_WIDTH_COLUMN },
                Column { visible: false, class: HALF_WIDTH_COLUMN },
            ),
            Layout::Single(PanelKind::Pretrained) => (
                Column { visible: false, class: HALF_WIDTH_COLUMN },
                Column { visible: true, class: FULL_WIDTH_COLUMN },
            ),
            Layout::SideBySide => (Column::default(), Column::default()),
            Layout::Stacked => (
                Column { visible: true, class: FULL_WIDTH_COLUMN },
                Column { visible: true, class: FULL_WIDTH_COLUMN },
            ),
        };
        self.traditional_column = traditional;
        self.pretrained_column = pretrained;
    }

    fn reveal_results(&mut self) {
        self.results_visible = true;
    }

    fn render_panel(&mut self, panel: PanelKind, outcome: &MethodOutcome) {
        let html = match (panel, outcome) {
            (_, MethodOutcome::Failed { error }) => error_html(error),
            (PanelKind::Traditional, MethodOutcome::Detected(result)) => traditional_result_html(result),
            (PanelKind::Pretrained, MethodOutcome::Detected(result)) => pretrained_result_html(result),
        };
        match panel {
            PanelKind::Traditional => self.traditional_html = html,
            PanelKind::Pretrained => self.pretrained_html = html,
        }
    }

    fn animate_confidence(&mut self) {
        self.confidence_animated = true;
    }
}

fn result_header_html(result: &DetectionResult, text_class: &str) -> String {
    let score = format_score(result.confidence);
    let level = ConfidenceLevel::from_score(result.confidence);
    let code = result
        .language_code
        .as_deref()
        .map(|code| format!(" <span class=\"badge bg-light text-dark ms-2\">{}</span>", escape(code)))
        .unwrap_or_default();
    format!(
        concat!(
            "<div class=\"language-result {}\"><i class=\"fas fa-flag me-2\"></i>{}{}</div>\n",
            "<div class=\"confidence-text mb-3\">Confidence: <strong>{}%</strong></div>\n",
            "<div class=\"confidence-meter mb-3\"><div class=\"confidence-meter-fill {}\" style=\"width: {}%\"></div></div>\n",
            "<div class=\"method-info mb-3\"><small class=\"text-muted\"><i class=\"fas fa-info-circle me-1\"></i>{}</small></div>\n",
        ),
        text_class,
        escape(&result.language),
        code,
        score,
        level.css_class(),
        format_score(result.confidence.clamp(0.0, 100.0)),
        escape(&result.method),
    )
}

pub fn traditional_result_html(result: &DetectionResult) -> String {
    let mut html = result_header_html(result, "text-success");
    if let Some(analysis) = &result.analysis {
        html.push_str(&analysis_html(analysis));
    }
    html
}

pub fn pretrained_result_html(result: &DetectionResult) -> String {
    let mut html = result_header_html(result, "text-info");
    if let Some(alternatives) = &result.alternatives {
        html.push_str(&alternatives_html(alternatives));
    }
    if let Some(total) = result.total_candidates {
        write!(
            html,
            "<div class=\"mt-2\"><small class=\"text-muted\">{} candidates considered</small></div>\n",
            total
        )
        .ok();
    }
    html
}

fn ngram_items(items: &[(String, u64)]) -> String {
    items
        .iter()
        .map(|(ngram, count)| format!("<span class=\"ngram-item\">{} ({})</span>", escape(ngram), count))
        .collect()
}

fn trigram_totals_html(analysis: &NgramAnalysis) -> String {
    match (analysis.total_trigrams, analysis.unique_trigrams) {
        (Some(total), Some(unique)) => format!(
            concat!(
                "<div class=\"row mb-3\">",
                "<div class=\"col-6\"><div class=\"text-center\"><div class=\"h5 text-success\">{}</div><small class=\"text-muted\">Total Trigrams</small></div></div>",
                "<div class=\"col-6\"><div class=\"text-center\"><div class=\"h5 text-success\">{}</div><small class=\"text-muted\">Unique Trigrams</small></div></div>",
                "</div>\n",
            ),
            total, unique
        ),
        _ => String::new(),
    }
}

pub fn analysis_html(analysis: &NgramAnalysis) -> String {
    format!(
        concat!(
            "<div class=\"analysis-details\">\n",
            "<h6 class=\"mb-3\"><i class=\"fas fa-chart-line me-2\"></i>N-gram Analysis</h6>\n",
            "<div class=\"row mb-3\">",
            "<div class=\"col-6\"><div class=\"text-center\"><div class=\"h5 text-success\">{}</div><small class=\"text-muted\">Total Bigrams</small></div></div>",
            "<div class=\"col-6\"><div class=\"text-center\"><div class=\"h5 text-success\">{}</div><small class=\"text-muted\">Unique Bigrams</small></div></div>",
            "</div>\n",
            "{}",
            "<div class=\"mb-3\"><strong>Most Common Bigrams:</strong><div class=\"mt-2\">{}</div></div>\n",
            "<div><strong>Most Common Trigrams:</strong><div class=\"mt-2\">{}</div></div>\n",
            "</div>\n",
        ),
        analysis.total_bigrams,
        analysis.unique_bigrams,
        trigram_totals_html(analysis),
        ngram_items(&analysis.common_bigrams),
        ngram_items(&analysis.common_trigrams),
    )
}

pub fn alternatives_html(alternatives: &[Alternative]) -> String {
    let mut items = String::new();
    for (index, alt) in alternatives.iter().enumerate() {
        write!(
            items,
            concat!(
                "<div class=\"alternative-item\">",
                "<div><span class=\"badge bg-secondary me-2\">{}</span>{}</div>",
                "<div><span class=\"badge bg-info\">{}%</span></div>",
                "</div>\n",
            ),
            index + 1,
            escape(&alt.language),
            format_score(alt.confidence),
        )
        .ok();
    }

    format!(
        concat!(
            "<div class=\"analysis-details\">\n",
            "<h6 class=\"mb-3\"><i class=\"fas fa-list me-2\"></i>Alternative Predictions</h6>\n",
            "<div class=\"alternatives-list\">\n{}</div>\n",
            "</div>\n",
        ),
        items
    )
}

pub fn error_html(error: &str) -> String {
    format!(
        "<div class=\"alert alert-danger\" role=\"alert\"><i class=\"fas fa-exclamation-triangle me-2\"></i>{}</div>\n",
        escape(error)
    )
}
