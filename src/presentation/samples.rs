use std::io::Write;
use std::time::Duration;

/// Built-in texts for trying the service out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub name: &'static str,
    pub label: &'static str,
    pub text: &'static str,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "french",
        label: "French Sample",
        text: "Bonjour tout le monde, comment allez-vous aujourd'hui?",
    },
    Sample {
        name: "spanish",
        label: "Spanish Sample",
        text: "Hola amigo, ¿cómo estás? Espero que tengas un buen día.",
    },
    Sample {
        name: "japanese",
        label: "Japanese Sample",
        text: "これは日本語のサンプルテキストです。今日はとても良い天気ですね。",
    },
    Sample {
        name: "english",
        label: "English Sample",
        text: "Hello world, this is a sample text in English for testing purposes.",
    },
    Sample {
        name: "russian",
        label: "Russian Sample",
        text: "Привет мир, это образец текста на русском языке для тестирования.",
    },
];

pub const TYPING_INTERVAL: Duration = Duration::from_millis(30);

/// Case-insensitive lookup by name (`french`) or label (`French Sample`).
pub fn find_sample(name: &str) -> Option<&'static Sample> {
    let wanted = name.trim();
    SAMPLES
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(wanted) || s.label.eq_ignore_ascii_case(wanted))
}

/// Echo `text` one character at a time, like someone typing it.
pub async fn type_out<W: Write>(out: &mut W, text: &str, interval: Duration) -> std::io::Result<()> {
    for c in text.chars() {
        write!(out, "{}", c)?;
        out.flush()?;
        if !interval.is_zero() {
            tokio::time::sleep(interval).await;
        }
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_samples_by_name_or_label() {
        assert_eq!(find_sample("French").map(|s| s.name), Some("french"));
        assert_eq!(find_sample("japanese sample").map(|s| s.name), Some("japanese"));
        assert!(find_sample("klingon").is_none());
    }

    #[test]
    fn every_sample_is_long_enough_to_submit() {
        for sample in SAMPLES {
            assert!(crate::domain::validation::input_feedback(sample.text).is_ready());
        }
    }

    #[tokio::test]
    async fn typed_text_matches_sample() {
        let mut out = Vec::new();
        type_out(&mut out, "Hola amigo", Duration::ZERO).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hola amigo\n");
    }
}
