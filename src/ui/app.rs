//! Main TUI application state and logic

use crate::config::RevealConfig;
use crate::ui::reveal::Reveal;
use crate::viewer::StepViewer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// Catalog and active step
    pub viewer: StepViewer,

    /// Line-by-line reveal of the code panel
    pub reveal: Reveal,

    /// Scroll offset of the code panel
    pub code_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether autoplay is advancing through the steps
    pub is_playing: bool,

    /// Last time autoplay advanced
    pub last_play_time: Instant,

    /// Time each step stays up during autoplay
    pub autoplay_interval: Duration,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app showing the viewer's current step
    pub fn new(viewer: StepViewer, reveal: &RevealConfig) -> Self {
        let now = Instant::now();
        App {
            reveal: Reveal::new(viewer.generation(), reveal.line_delay(), now),
            viewer,
            code_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: now,
            autoplay_interval: reveal.autoplay_interval(),
            last_space_press: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.autoplay_due(Instant::now()) {
                match self.viewer.next() {
                    Ok(index) => self.on_step_changed(index),
                    Err(_) => {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                }
                self.last_play_time = Instant::now();
            }

            // Short poll so the reveal keeps animating between key presses
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Autoplay advances once the interval has passed and the current block
    /// has finished revealing
    fn autoplay_due(&self, now: Instant) -> bool {
        let total = self.viewer.active().code.split('\n').count();
        now.saturating_duration_since(self.last_play_time) >= self.autoplay_interval
            && self.reveal.is_complete(total, now)
    }

    /// Render the UI
    pub fn draw(&mut self, frame: &mut Frame) {
        let now = Instant::now();
        self.reveal.sync(self.viewer.generation(), now);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(main_chunks[0]);

        super::panes::render_steps_pane(
            frame,
            columns[0],
            self.viewer.steps(),
            self.viewer.selected(),
        );

        let view = self.viewer.render();
        let visible = self.reveal.visible_lines(view.lines.len(), now);
        super::panes::render_code_pane(frame, columns[1], &view, visible, &mut self.code_scroll);

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.viewer.selected(),
            self.viewer.len(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                if let Some(n) = c.to_digit(10) {
                    self.jump_to(n as usize - 1);
                }
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
                self.is_playing = false;
                self.move_by(1);
            }
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                self.is_playing = false;
                self.move_by(-1);
            }
            KeyCode::Home | KeyCode::Backspace => {
                self.is_playing = false;
                self.viewer.first();
                self.on_step_changed(0);
            }
            KeyCode::End | KeyCode::Enter => {
                self.is_playing = false;
                self.viewer.last();
                self.on_step_changed(self.viewer.selected());
            }
            KeyCode::PageDown => {
                self.code_scroll = self.code_scroll.saturating_add(5);
            }
            KeyCode::PageUp => {
                self.code_scroll = self.code_scroll.saturating_sub(5);
            }
            KeyCode::Char('r') => {
                self.reveal.restart(Instant::now());
                self.code_scroll = 0;
                self.status_message = "Replaying".to_string();
            }
            KeyCode::Char(' ') => {
                // Toggle autoplay (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now();
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            _ => {}
        }
    }

    fn move_by(&mut self, delta: isize) {
        match self.viewer.select_relative(delta) {
            Ok(index) => self.on_step_changed(index),
            Err(e) => {
                tracing::debug!(error = %e, "step move rejected");
                self.status_message = if delta < 0 {
                    "Already at the first step".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
        }
    }

    fn jump_to(&mut self, index: usize) {
        match self.viewer.select(index) {
            Ok(()) => self.on_step_changed(index),
            Err(e) => {
                self.status_message = format!("No step {}: {}", index + 1, e);
            }
        }
    }

    fn on_step_changed(&mut self, index: usize) {
        self.code_scroll = 0;
        self.status_message = format!("Step {}: {}", index + 1, self.viewer.active().title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let reveal = RevealConfig {
            line_delay_ms: 0,
            ..RevealConfig::default()
        };
        App::new(StepViewer::new(builtin()).unwrap(), &reveal)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_arrow_keys_move_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.viewer.selected(), 1);
        assert_eq!(app.status_message, "Step 2: Move to Cloud Storage");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.viewer.selected(), 0);
    }

    #[test]
    fn test_moving_past_first_step_is_reported() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.viewer.selected(), 0);
        assert_eq!(app.status_message, "Already at the first step");
    }

    #[test]
    fn test_number_keys_jump() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.viewer.selected(), 3);

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.viewer.selected(), 3);
        assert!(app.status_message.starts_with("No step 9"));
    }

    #[test]
    fn test_home_and_end() {
        let mut app = app();
        press(&mut app, KeyCode::End);
        assert_eq!(app.viewer.selected(), app.viewer.len() - 1);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.viewer.selected(), 0);
    }

    #[test]
    fn test_selection_resets_scroll() {
        let mut app = app();
        app.code_scroll = 7;
        press(&mut app, KeyCode::Down);
        assert_eq!(app.code_scroll, 0);
    }

    #[test]
    fn test_space_toggles_playback() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.is_playing);
        press(&mut app, KeyCode::Down);
        assert!(!app.is_playing);
    }

    #[test]
    fn test_autoplay_waits_for_interval() {
        let mut app = app();
        let now = Instant::now();
        app.last_play_time = now;
        assert!(!app.autoplay_due(now));
        assert!(app.autoplay_due(now + app.autoplay_interval));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_draw_shows_active_step() {
        let mut app = app();
        let text = screen(&mut app);
        assert!(text.contains("Local Development"));
        assert!(text.contains("terminal"));
        assert!(text.contains("Step 1/5"));
        assert!(text.contains("docker run -p 8080:8080"));

        press(&mut app, KeyCode::Char('2'));
        let text = screen(&mut app);
        assert!(text.contains("opendata.toml"));
        assert!(text.contains("[storage]"));
        assert!(text.contains("Step 2/5"));
    }

    #[test]
    fn test_draw_reveals_gradually() {
        let reveal = RevealConfig {
            line_delay_ms: 60_000,
            ..RevealConfig::default()
        };
        let mut app = App::new(StepViewer::new(builtin()).unwrap(), &reveal);
        let text = screen(&mut app);
        assert!(text.contains("# Start OpenData Log locally"));
        assert!(!text.contains("docker run -p 8080:8080"));
    }
}
