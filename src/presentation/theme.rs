use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub language: fn(&str) -> String,
    pub score: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub label: fn(&str) -> String,
    pub idx: fn(&str) -> String,
    pub info: fn(&str) -> String,
    pub ngram: fn(&str) -> String,
    pub error: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "temp" | "" => Self::temp(),
            "wudao" => Self::wudao(),
            "canvas" => Self::canvas(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::temp() // Fallback to default
            }
        }
    }

    /// Theme that emits text unchanged (HTML output, tests).
    pub fn plain() -> Self {
        Self {
            title: |s| s.to_string(),
            language: |s| s.to_string(),
            score: |s| s.to_string(),
            line: |s| s.to_string(),
            label: |s| s.to_string(),
            idx: |s| s.to_string(),
            info: |s| s.to_string(),
            ngram: |s| s.to_string(),
            error: |s| s.to_string(),
        }
    }

    fn temp() -> Self {
        Self {
            title: |s| s.bright_magenta().italic().bold().underline().to_string(),
            language: |s| s.green().bold().to_string(),
            score: |s| s.bright_white().bold().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            label: |s| s.cyan().italic().to_string(),
            idx: |s| s.bright_white().to_string(),
            info: |s| s.bright_white().dimmed().italic().to_string(),
            ngram: |s| s.yellow().to_string(),
            error: |s| s.red().bold().to_string(),
        }
    }

    fn wudao() -> Self {
        Self {
            title: |s| s.red().italic().bold().underline().to_string(),
            language: |s| s.cyan().bold().to_string(),
            score: |s| s.bright_white().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            label: |s| s.green().italic().to_string(),
            idx: |s| s.bright_white().to_string(),
            info: |s| s.bright_yellow().dimmed().italic().to_string(),
            ngram: |s| s.bright_white().to_string(),
            error: |s| s.red().italic().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            title: |s| s.blue().bold().underline().to_string(),
            language: |s| s.magenta().bold().to_string(),
            score: |s| s.black().bold().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            label: |s| s.green().italic().to_string(),
            idx: |s| s.cyan().to_string(),
            info: |s| s.bright_black().italic().to_string(),
            ngram: |s| s.black().to_string(),
            error: |s| s.red().bold().to_string(),
        }
    }
}
