use serde::{Deserialize, Serialize};
use std::fmt;

// 检测方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    Traditional,
    Pretrained,
    #[default]
    Both,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::Traditional => "traditional",
            DetectionMethod::Pretrained => "pretrained",
            DetectionMethod::Both => "both",
        }
    }

    pub fn includes_traditional(&self) -> bool {
        matches!(self, DetectionMethod::Traditional | DetectionMethod::Both)
    }

    pub fn includes_pretrained(&self) -> bool {
        matches!(self, DetectionMethod::Pretrained | DetectionMethod::Both)
    }

    /// Whether a result panel of the given kind belongs to this method.
    pub fn includes(&self, panel: PanelKind) -> bool {
        match panel {
            PanelKind::Traditional => self.includes_traditional(),
            PanelKind::Pretrained => self.includes_pretrained(),
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 结果面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Traditional,
    Pretrained,
}

impl PanelKind {
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Traditional => "Traditional N-gram",
            PanelKind::Pretrained => "Pre-trained Model",
        }
    }
}

/// Request body for `POST /detect`.
///
/// Only [`crate::domain::validation::validate_request`] builds one, so `text`
/// is always trimmed and at least [`crate::domain::validation::MIN_TEXT_CHARS`] long.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionRequest {
    text: String,
    method: DetectionMethod,
}

impl DetectionRequest {
    pub(crate) fn new(text: String, method: DetectionMethod) -> Self {
        Self { text, method }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn method(&self) -> DetectionMethod {
        self.method
    }
}

// 单个方法的检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    pub confidence: f64, // 0-100
    pub method: String,  // 方法描述
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<NgramAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<Alternative>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_candidates: Option<usize>,
}

// N-gram 分析 (仅用于展示)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgramAnalysis {
    pub total_bigrams: usize,
    pub unique_bigrams: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_trigrams: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_trigrams: Option<usize>,
    #[serde(default)]
    pub common_bigrams: Vec<(String, u64)>, // (ngram, count)
    #[serde(default)]
    pub common_trigrams: Vec<(String, u64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    pub confidence: f64,
}

/// Per-method sub-result: either a detection or that method's own failure.
///
/// `Failed` is listed first so a body carrying `error` never parses as a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MethodOutcome {
    Failed { error: String },
    Detected(DetectionResult),
}

impl MethodOutcome {
    pub fn result(&self) -> Option<&DetectionResult> {
        match self {
            MethodOutcome::Detected(result) => Some(result),
            MethodOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MethodOutcome::Failed { error } => Some(error),
            MethodOutcome::Detected(_) => None,
        }
    }
}

// 服务端响应
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traditional: Option<MethodOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretrained: Option<MethodOutcome>,
}

impl DetectionResponse {
    pub fn outcome(&self, panel: PanelKind) -> Option<&MethodOutcome> {
        match panel {
            PanelKind::Traditional => self.traditional.as_ref(),
            PanelKind::Pretrained => self.pretrained.as_ref(),
        }
    }

    /// Panels present in the response that were not asked for.
    pub fn unrequested_panels(&self, method: DetectionMethod) -> Vec<PanelKind> {
        [PanelKind::Traditional, PanelKind::Pretrained]
            .into_iter()
            .filter(|panel| self.outcome(*panel).is_some() && !method.includes(*panel))
            .collect()
    }
}

// 失败响应体, error 字段可选
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}
