use crate::domain::model::{DetectionResult, MethodOutcome, PanelKind};
use crate::domain::traits::{Layout, View};
use crate::presentation::confidence::{format_score, meter};
use crate::presentation::theme::Theme;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

const METER_WIDTH: usize = 20;

/// Colored terminal rendering of the detection page.
pub struct TerminalView<W: Write + Send = io::Stdout> {
    out: W,
    theme: Theme,
    enable_emoji: bool,
    spinner: Option<ProgressBar>,
}

impl TerminalView<io::Stdout> {
    pub fn stdout(theme: Theme, enable_emoji: bool) -> Self {
        Self::with_writer(io::stdout(), theme, enable_emoji)
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn with_writer(out: W, theme: Theme, enable_emoji: bool) -> Self {
        Self {
            out,
            theme,
            enable_emoji,
            spinner: None,
        }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn icon(&self, emoji: &'static str, plain: &'static str) -> &'static str {
        if self.enable_emoji {
            emoji
        } else {
            plain
        }
    }

    fn write_result(&mut self, panel: PanelKind, result: &DetectionResult) {
        let flag = self.icon("🏳 ", "");
        let info = self.icon("ℹ ", "- ");
        let theme = &self.theme;
        let score = format!("{}%", format_score(result.confidence));
        let language = match &result.language_code {
            Some(code) => format!("{} ({})", result.language, code),
            None => result.language.clone(),
        };

        writeln!(
            self.out,
            "  {}{}  {}  {}",
            flag,
            (theme.language)(&language),
            (theme.score)(&score),
            (theme.line)(&meter(result.confidence, METER_WIDTH))
        )
        .ok();
        writeln!(self.out, "  {}{}", info, (theme.info)(&result.method)).ok();

        if panel == PanelKind::Traditional {
            if let Some(analysis) = &result.analysis {
                writeln!(
                    self.out,
                    "  {} {} total, {} unique",
                    (theme.label)("Bigrams:"),
                    analysis.total_bigrams,
                    analysis.unique_bigrams
                )
                .ok();
                if let (Some(total), Some(unique)) = (analysis.total_trigrams, analysis.unique_trigrams) {
                    writeln!(
                        self.out,
                        "  {} {} total, {} unique",
                        (theme.label)("Trigrams:"),
                        total,
                        unique
                    )
                    .ok();
                }
                for (label, items) in [
                    ("Most common bigrams:", &analysis.common_bigrams),
                    ("Most common trigrams:", &analysis.common_trigrams),
                ] {
                    let joined = items
                        .iter()
                        .map(|(ngram, count)| format!("{} ({})", (theme.ngram)(ngram), count))
                        .collect::<Vec<_>>()
                        .join("  ");
                    writeln!(self.out, "  {} {}", (theme.label)(label), joined).ok();
                }
            }
        }

        if panel == PanelKind::Pretrained {
            if let Some(alternatives) = &result.alternatives {
                writeln!(self.out, "  {}", (theme.label)("Alternative predictions:")).ok();
                for (i, alt) in alternatives.iter().enumerate() {
                    writeln!(
                        self.out,
                        "    {}. {} {}",
                        (theme.idx)(&(i + 1).to_string()),
                        alt.language,
                        (theme.score)(&format!("{}%", format_score(alt.confidence)))
                    )
                    .ok();
                }
            }
            if let Some(total) = result.total_candidates {
                writeln!(self.out, "  {} {}", (theme.label)("Candidates:"), total).ok();
            }
        }
    }
}

impl<W: Write + Send> View for TerminalView<W> {
    // 终端里没有可禁用的提交按钮
    fn set_busy(&mut self, _busy: bool) {}

    fn show_loading(&mut self) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Detecting language...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn hide_loading(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn show_error(&mut self, message: &str) {
        self.hide_loading();
        let mark = self.icon("✘ ", "");
        writeln!(self.out, "{}{}", mark, (self.theme.error)(message)).ok();
        self.out.flush().ok();
    }

    fn prepare_results(&mut self, layout: Layout) {
        let heading = match layout {
            Layout::Single(panel) => panel.title().to_string(),
            Layout::SideBySide | Layout::Stacked => "Language Detection Results".to_string(),
        };
        writeln!(self.out, "{}", (self.theme.title)(&heading)).ok();
    }

    fn reveal_results(&mut self) {
        let cutoff = "⸺".repeat(40);
        writeln!(self.out, "{}", (self.theme.line)(&cutoff)).ok();
        self.out.flush().ok();
    }

    fn render_panel(&mut self, panel: PanelKind, outcome: &MethodOutcome) {
        writeln!(self.out, "{}", (self.theme.label)(panel.title())).ok();
        match outcome {
            MethodOutcome::Detected(result) => self.write_result(panel, result),
            MethodOutcome::Failed { error } => {
                let mark = self.icon("⚠ ", "! ");
                writeln!(self.out, "  {}{}", mark, (self.theme.error)(error)).ok();
            }
        }
        writeln!(self.out).ok();
        self.out.flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Alternative, NgramAnalysis};

    fn render(outcome: MethodOutcome, panel: PanelKind) -> String {
        let mut view = TerminalView::with_writer(Vec::new(), Theme::plain(), false);
        view.render_panel(panel, &outcome);
        String::from_utf8(view.into_writer()).unwrap()
    }

    #[test]
    fn renders_alternatives_for_pretrained() {
        let outcome = MethodOutcome::Detected(DetectionResult {
            language: "Russian".to_string(),
            language_code: Some("ru".to_string()),
            confidence: 99.0,
            method: "Pre-trained Model (Google langdetect)".to_string(),
            analysis: None,
            alternatives: Some(vec![Alternative {
                language: "Russian".to_string(),
                language_code: Some("ru".to_string()),
                confidence: 99.0,
            }]),
            total_candidates: Some(1),
        });

        let text = render(outcome, PanelKind::Pretrained);
        assert!(text.starts_with("Pre-trained Model\n"));
        assert!(text.contains("Russian (ru)  99%"));
        assert!(text.contains("1. Russian 99%"));
        assert!(text.contains("Candidates: 1"));
    }

    #[test]
    fn renders_trigram_totals_for_traditional() {
        let outcome = MethodOutcome::Detected(DetectionResult {
            language: "English".to_string(),
            language_code: None,
            confidence: 94.12,
            method: "Traditional N-gram".to_string(),
            analysis: Some(NgramAnalysis {
                total_bigrams: 10,
                unique_bigrams: 8,
                total_trigrams: Some(9),
                unique_trigrams: Some(7),
                common_bigrams: vec![("he".to_string(), 2)],
                common_trigrams: vec![("hel".to_string(), 1)],
            }),
            alternatives: None,
            total_candidates: None,
        });

        let text = render(outcome, PanelKind::Traditional);
        assert!(text.contains("English  94.12%"));
        assert!(text.contains("Bigrams: 10 total, 8 unique"));
        assert!(text.contains("Trigrams: 9 total, 7 unique"));
        assert!(!text.contains("Candidates:"));
    }

    #[test]
    fn renders_panel_error_without_emoji() {
        let outcome = MethodOutcome::Failed {
            error: "Traditional detection failed: boom".to_string(),
        };
        let text = render(outcome, PanelKind::Traditional);
        assert!(text.contains("  ! Traditional detection failed: boom"));
    }

    #[test]
    fn error_is_written_once() {
        let mut view = TerminalView::with_writer(Vec::new(), Theme::plain(), false);
        view.show_error("Detection failed");
        let text = String::from_utf8(view.into_writer()).unwrap();
        assert_eq!(text, "Detection failed\n");
    }
}
