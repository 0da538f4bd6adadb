use crate::domain::model::DetectionMethod;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Traditional,
    Pretrained,
    Both,
}

impl From<MethodArg> for DetectionMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Traditional => DetectionMethod::Traditional,
            MethodArg::Pretrained => DetectionMethod::Pretrained,
            MethodArg::Both => DetectionMethod::Both,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "langid")]
#[command(about = "Identify the language of a text using a remote detection service.")]
#[command(version)]
pub struct Cli {
    /// Detection method (defaults to the configured one)
    #[arg(short = 'm', long, value_enum)]
    pub method: Option<MethodArg>,

    /// Detection service base URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Output the raw response as JSON
    #[arg(long, conflicts_with = "html")]
    pub json: bool,

    /// Output the result panels as an HTML fragment
    #[arg(long)]
    pub html: bool,

    /// Viewport width in pixels for the HTML layout (two panels stack at 1200 or less)
    #[arg(long, requires = "html")]
    pub width: Option<u32>,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Render results without staggered delays
    #[arg(long)]
    pub no_animate: bool,

    /// Use a built-in sample text (french, spanish, japanese, english, russian)
    #[arg(short = 's', long)]
    pub sample: Option<String>,

    /// List built-in sample texts
    #[arg(long)]
    pub list_samples: bool,

    /// Only check whether the text is long enough; no request is sent
    #[arg(long)]
    pub check: bool,

    /// Query the service health endpoint
    #[arg(long)]
    pub health: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to analyze
    #[arg(num_args = 0..)]
    pub text: Vec<String>,
}
