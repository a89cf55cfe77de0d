//! Shannon - interactive application state and event loop

use std::path::Path;
use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use shannon_demo::{io::wav, DemoConfig, DemoFrame, Presenter, SamplingDemo, SamplingRate};

use super::audio::Player;
use super::ui::{Overlay, TerminalPresenter};

/// Which clip a play request refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clip {
    Original,
    Sampled,
}

/// Interactive demo: one sampling frequency, the frame computed for it, and
/// the UI state around it
pub struct App {
    config: DemoConfig,
    demo: SamplingDemo,
    frame: DemoFrame,
    player: Option<Player>,
    show_commentary: bool,
    status: Option<String>,
    /// Redraw needed
    dirty: bool,
    should_quit: bool,
}

impl App {
    /// Compute the first frame and open audio if enabled
    pub fn new(config: DemoConfig, demo: SamplingDemo) -> Self {
        let frame = demo.run(config.sampling_rate);
        let player = if config.audio_enabled {
            match Player::open() {
                Ok(player) => Some(player),
                Err(err) => {
                    log::warn!("audio disabled: {:#}", err);
                    None
                }
            }
        } else {
            None
        };

        Self {
            config,
            demo,
            frame,
            player,
            show_commentary: false,
            status: None,
            dirty: true,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(mut self, terminal: DefaultTerminal) -> EyreResult<()> {
        let mut presenter = TerminalPresenter::new(terminal);

        while !self.should_quit {
            if self.dirty {
                presenter.set_overlay(self.overlay());
                presenter.present(&self.frame)?;
                self.dirty = false;
            }

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code);
                    }
                    Event::Resize(_, _) => self.dirty = true,
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Current sampling frequency
    pub fn sampling_rate(&self) -> SamplingRate {
        self.frame.sampling_rate
    }

    fn overlay(&self) -> Overlay {
        Overlay {
            show_commentary: self.show_commentary,
            audio_available: self.player.is_some(),
            status: self.status.clone(),
        }
    }

    /// Re-run the pipeline if the rate actually changed
    fn set_rate(&mut self, rate: SamplingRate) {
        if rate != self.frame.sampling_rate {
            self.frame = self.demo.run(rate);
            self.status = None;
            self.dirty = true;
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        let rate = self.frame.sampling_rate;
        let fine = self.config.fine_step_hz as i64;
        let coarse = self.config.coarse_step_hz as i64;

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Right => self.set_rate(rate.offset(fine)),
            KeyCode::Left => self.set_rate(rate.offset(-fine)),
            KeyCode::Up => self.set_rate(rate.offset(coarse)),
            KeyCode::Down => self.set_rate(rate.offset(-coarse)),
            KeyCode::Home => self.set_rate(SamplingRate::MIN),
            KeyCode::End => self.set_rate(SamplingRate::MAX),
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.show_commentary = !self.show_commentary;
                self.dirty = true;
            }
            KeyCode::Char('o') | KeyCode::Char('O') => self.play(Clip::Original),
            KeyCode::Char('s') | KeyCode::Char('S') => self.play(Clip::Sampled),
            KeyCode::Char('w') | KeyCode::Char('W') => self.export(Path::new(".")),
            _ => {}
        }
    }

    fn play(&mut self, which: Clip) {
        let Some(player) = self.player.as_mut() else {
            self.status = Some("no audio device".to_string());
            self.dirty = true;
            return;
        };

        let (label, clip) = match which {
            Clip::Original => ("original", self.frame.reference_clip()),
            Clip::Sampled => ("sampled", self.frame.sampled_clip()),
        };
        player.play(&clip, self.config.playback_repeats);
        self.status = Some(format!("playing {} @ {} Hz", label, clip.sample_rate));
        self.dirty = true;
    }

    fn export(&mut self, dir: &Path) {
        self.status = Some(match wav::export_frame(dir, &self.frame) {
            Ok([_, sampled]) => format!("wrote reference.wav, {}", sampled.display()),
            Err(err) => {
                log::error!("WAV export failed: {}", err);
                format!("export failed: {}", err)
            }
        });
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(hz: u32) -> App {
        let config = DemoConfig::default()
            .sampling_rate(SamplingRate::new(hz).unwrap())
            .audio(false);
        App::new(config, SamplingDemo::default())
    }

    #[test]
    fn test_arrow_keys_step_the_rate() {
        let mut app = app(1000);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.sampling_rate().hz(), 1010);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.sampling_rate().hz(), 910);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.sampling_rate().hz(), 900);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.sampling_rate().hz(), 1000);
    }

    #[test]
    fn test_rate_change_recomputes_frame() {
        let mut app = app(4000);
        app.handle_key(KeyCode::Home);
        assert_eq!(app.sampling_rate(), SamplingRate::MIN);
        assert_eq!(app.frame.sampled.len(), 60);
        app.handle_key(KeyCode::End);
        assert_eq!(app.frame.sampled.len(), 800);
    }

    #[test]
    fn test_rate_saturates_at_bounds() {
        let mut app = app(4000);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.sampling_rate(), SamplingRate::MAX);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_play_without_device_reports_status() {
        let mut app = app(440);
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.status.as_deref(), Some("no audio device"));
    }

    #[test]
    fn test_commentary_toggle_and_quit() {
        let mut app = app(440);
        app.handle_key(KeyCode::Char('c'));
        assert!(app.show_commentary);
        app.handle_key(KeyCode::Char('c'));
        assert!(!app.show_commentary);
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_export_writes_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(650);
        app.export(dir.path());
        assert!(dir.path().join("reference.wav").exists());
        assert!(dir.path().join("sampled_650hz.wav").exists());
        assert!(app.status.unwrap().starts_with("wrote"));
    }
}
