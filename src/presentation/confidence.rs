// 置信度分档
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(confidence: f64) -> Self {
        if confidence >= 80.0 {
            ConfidenceLevel::High
        } else if confidence >= 60.0 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "confidence-high",
            ConfidenceLevel::Medium => "confidence-medium",
            ConfidenceLevel::Low => "confidence-low",
        }
    }
}

/// Format a percentage the way the service reports it (`87.5`, `100`).
pub fn format_score(confidence: f64) -> String {
    let rounded = (confidence * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        let text = format!("{:.2}", rounded);
        text.trim_end_matches('0').to_string()
    }
}

/// Fixed-width text meter, e.g. `█████░░░░░` for 50 with width 10.
pub fn meter(confidence: f64, width: usize) -> String {
    let clamped = confidence.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
