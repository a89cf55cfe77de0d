//! TUI module for shannon
//!
//! Draws a [`DemoFrame`] as a status bar, spectral view, time view and an
//! optional commentary panel.

mod notes;
mod spectrum;
mod transport;
mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};

use shannon_demo::{DemoFrame, Presenter, Result};

use notes::render_notes;
use spectrum::render_spectrum;
use transport::render_status;
use waveform::render_time_view;

const HELP: &str = " [←/→] fine  [↓/↑] coarse  [Home/End] min/max  [O] play original  \
                    [S] play sampled  [W] export WAV  [C] comments  [Q] quit";

/// UI state that is not part of the pipeline output
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    /// Whether the commentary panel is open
    pub show_commentary: bool,
    /// Whether an audio device is available
    pub audio_available: bool,
    /// Transient message (playback, export result)
    pub status: Option<String>,
}

/// Presenter drawing frames into the terminal
pub struct TerminalPresenter {
    terminal: DefaultTerminal,
    overlay: Overlay,
}

impl TerminalPresenter {
    pub fn new(terminal: DefaultTerminal) -> Self {
        Self {
            terminal,
            overlay: Overlay::default(),
        }
    }

    pub fn set_overlay(&mut self, overlay: Overlay) {
        self.overlay = overlay;
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, frame: &DemoFrame) -> Result<()> {
        let overlay = &self.overlay;
        self.terminal.draw(|f| render(f, frame, overlay))?;
        Ok(())
    }
}

/// Render the UI
pub fn render(frame: &mut Frame, demo: &DemoFrame, overlay: &Overlay) {
    let area = frame.area();

    let commentary_height = if overlay.show_commentary { 14 } else { 0 };

    // Main layout: status, spectrum, time view, commentary, help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Status bar
            Constraint::Min(10),                   // Spectral view
            Constraint::Min(8),                    // Time view
            Constraint::Length(commentary_height), // Comments
            Constraint::Length(1),                 // Help bar
        ])
        .split(area);

    render_status(frame, chunks[0], demo, overlay);
    render_spectrum(frame, chunks[1], demo);
    render_time_view(frame, chunks[2], demo);
    if overlay.show_commentary {
        render_notes(frame, chunks[3]);
    }

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use shannon_demo::{SamplingDemo, SamplingRate};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_draws_every_panel() {
        let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
        let demo = SamplingDemo::default().run(SamplingRate::new(500).unwrap());
        let overlay = Overlay {
            show_commentary: true,
            audio_available: false,
            status: Some("ready".to_string()),
        };

        terminal.draw(|f| render(f, &demo, &overlay)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Fs: 500 Hz"));
        assert!(text.contains("Spectral View"));
        assert!(text.contains("Original and Sampled Signals"));
        assert!(text.contains("Comments"));
        assert!(text.contains("ready"));
    }

    #[test]
    fn test_commentary_hidden_by_default() {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        let demo = SamplingDemo::default().run(SamplingRate::default());

        terminal
            .draw(|f| render(f, &demo, &Overlay::default()))
            .unwrap();

        assert!(!buffer_text(&terminal).contains(" Comments "));
    }
}
