//! Status bar widget - shows Fs, Nyquist, aliasing verdict and audio state

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use shannon_demo::{aliasing::AliasKind, DemoFrame};

use super::Overlay;

/// Short aliasing verdict for the status bar
pub fn verdict(demo: &DemoFrame) -> (String, Color) {
    match (demo.alias.kind, demo.alias.order) {
        (None, _) => ("no aliasing".to_string(), Color::Green),
        (Some(AliasKind::ZeroFrequency), Some(k)) => {
            (format!("aliasing: k = {}, images meet at 0 Hz", k), Color::Red)
        }
        (Some(AliasKind::Nyquist), Some(k)) => {
            (format!("aliasing: k = {}, images meet at Fs/2", k), Color::Red)
        }
        (Some(_), None) => ("aliasing: Fs < 2B".to_string(), Color::Red),
    }
}

/// Render the status bar
pub fn render_status(frame: &mut Frame, area: Rect, demo: &DemoFrame, overlay: &Overlay) {
    let block = Block::default()
        .title(" The Generalized Shannon Theorem ")
        .borders(Borders::ALL);

    let (verdict_text, verdict_color) = verdict(demo);
    let audio = if overlay.audio_available {
        "♪ audio"
    } else {
        "audio off"
    };

    let mut spans = vec![
        Span::styled(
            format!(" Fs: {}  ", demo.sampling_rate),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Fs/2: {:.0} Hz  ", demo.sampling_rate.nyquist()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{}  ", verdict_text),
            Style::default().fg(verdict_color),
        ),
        Span::styled(
            format!("{} samples  ", demo.sampled.len()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{}  ", audio), Style::default().fg(Color::DarkGray)),
    ];
    if let Some(status) = &overlay.status {
        spans.push(Span::styled(
            status.clone(),
            Style::default().fg(Color::Magenta),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
