//! Commentary panel - static explanation plus the intervals computed from F0 and B

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use shannon_demo::{aliasing, synth::NarrowbandSignal};

/// Render the commentary panel
pub fn render_notes(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Comments ")
        .borders(Borders::ALL);

    let mut lines: Vec<Line> = aliasing::COMMENTARY
        .iter()
        .map(|paragraph| Line::from(*paragraph))
        .collect();

    let derived: Vec<String> = aliasing::excluded_intervals(&NarrowbandSignal::default())
        .iter()
        .map(ToString::to_string)
        .collect();
    lines.push(Line::from(vec![
        Span::styled("Computed: ", Style::default().fg(Color::DarkGray)),
        Span::styled(derived.join(" ∪ "), Style::default().fg(Color::Yellow)),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
