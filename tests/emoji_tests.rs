//! Emoji 控制功能测试

use langid::domain::model::{MethodOutcome, PanelKind};
use langid::domain::traits::View;
use langid::presentation::terminal::TerminalView;
use langid::presentation::theme::Theme;

fn render_failure(enable_emoji: bool) -> String {
    let mut view = TerminalView::with_writer(Vec::new(), Theme::plain(), enable_emoji);
    view.render_panel(
        PanelKind::Pretrained,
        &MethodOutcome::Failed {
            error: "Pre-trained detection failed: No features in text.".to_string(),
        },
    );
    view.show_error("Detection failed");
    String::from_utf8(view.into_writer()).unwrap()
}

#[test]
fn test_emoji_markers() {
    let text = render_failure(true);
    assert!(text.contains("⚠ Pre-trained detection failed"));
    assert!(text.contains("✘ Detection failed"));
}

#[test]
fn test_plain_markers() {
    let text = render_failure(false);
    assert!(text.contains("! Pre-trained detection failed"));
    assert!(!text.contains('⚠'));
    assert!(!text.contains('✘'));
}
