//! Main TUI application state and logic

use super::panes::{self, PseudocodeScrollState, StatusRenderData};
use crate::config::PlayerConfig;
use crate::playback::{Playback, PlaybackError};
use crate::trace::Trace;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Pseudocode,
    Visual,
    Details,
}

impl FocusedPane {
    /// Move focus to the next pane (pseudocode -> details -> visual)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Pseudocode => FocusedPane::Details,
            FocusedPane::Details => FocusedPane::Visual,
            FocusedPane::Visual => FocusedPane::Pseudocode,
        }
    }
}

/// Tree operation waiting for a key in the input prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeCommand {
    Insert,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub command: TreeCommand,
    pub buffer: String,
}

impl Prompt {
    fn label(&self) -> String {
        let verb = match self.command {
            TreeCommand::Insert => "insert",
            TreeCommand::Search => "search",
        };
        format!("{} key: {}", verb, self.buffer)
    }
}

/// The main application state
pub struct App {
    pub trace: Trace,
    pub playback: Playback,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub pseudocode_scroll: PseudocodeScrollState,
    pub visual_scroll: usize,
    pub details_scroll: usize,

    /// Open while the user types a key for a tree insert/search
    pub prompt: Option<Prompt>,

    pub should_quit: bool,
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    pub fn new(trace: Trace, config: &PlayerConfig) -> Self {
        let playback = Playback::new(trace.len(), config.speed);
        App {
            trace,
            playback,
            focused_pane: FocusedPane::Pseudocode,
            pseudocode_scroll: PseudocodeScrollState::default(),
            visual_scroll: 0,
            details_scroll: 0,
            prompt: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.playback.tick(Instant::now()) {
                self.status_message = if self.playback.is_playing() {
                    "Playing...".to_string()
                } else {
                    "Playback complete".to_string()
                };
            }

            // Poll with a timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);

        // Left column: Pseudocode (top) | Details (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[0]);

        let position = self.playback.position();

        panes::render_pseudocode_pane(
            frame,
            left_rows[0],
            &self.trace.title(),
            self.trace.pseudocode(),
            self.trace.active_lines(position),
            self.focused_pane == FocusedPane::Pseudocode,
            &mut self.pseudocode_scroll,
        );

        panes::render_details_pane(
            frame,
            left_rows[1],
            &self.trace,
            position,
            self.focused_pane == FocusedPane::Details,
            &mut self.details_scroll,
        );

        panes::render_visual_pane(
            frame,
            columns[1],
            &self.trace,
            position,
            self.focused_pane == FocusedPane::Visual,
            &mut self.visual_scroll,
        );

        let prompt = self.prompt.as_ref().map(Prompt::label);
        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                current_step: position,
                total_steps: self.playback.len(),
                is_playing: self.playback.is_playing(),
                prompt: prompt.as_deref(),
                tree_mode: matches!(self.trace, Trace::Tree(_)),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.playback.pause();
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = self.playback.step_forward_by(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Char(c @ ('i' | 's')) if matches!(self.trace, Trace::Tree(_)) => {
                self.playback.pause();
                self.prompt = Some(Prompt {
                    command: if c == 'i' {
                        TreeCommand::Insert
                    } else {
                        TreeCommand::Search
                    },
                    buffer: String::new(),
                });
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.playback.pause();
                let result = self.playback.step_backward();
                self.report_step(result, "Stepped backward");
            }
            KeyCode::Right => {
                self.playback.pause();
                let result = self.playback.step_forward();
                self.report_step(result, "Stepped forward");
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Pseudocode => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.pseudocode_scroll.target_line_row {
                        self.pseudocode_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Visual => {
                    self.visual_scroll = self.visual_scroll.saturating_sub(1);
                }
                FocusedPane::Details => {
                    self.details_scroll = self.details_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Pseudocode => {
                    if let Some(row) = self.pseudocode_scroll.target_line_row {
                        self.pseudocode_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Visual => {
                    self.visual_scroll = self.visual_scroll.saturating_add(1);
                }
                FocusedPane::Details => {
                    self.details_scroll = self.details_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play (200ms debounce against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.status_message = if self.playback.toggle_play(Instant::now()) {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Enter => {
                self.playback.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.playback.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    fn report_step(&mut self, result: Result<(), PlaybackError>, done: &str) {
        self.status_message = match result {
            Ok(()) => done.to_string(),
            Err(e) => format!("Cannot step: {}", e),
        };
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
                self.status_message = "Cancelled".to_string();
            }
            KeyCode::Backspace => {
                prompt.buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || (c == '-' && prompt.buffer.is_empty()) => {
                prompt.buffer.push(c);
            }
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    self.submit(prompt);
                }
            }
            _ => {}
        }
    }

    /// Run the prompted tree operation and jump to its first new step
    fn submit(&mut self, prompt: Prompt) {
        let key = match prompt.buffer.trim().parse::<i64>() {
            Ok(key) => key,
            Err(_) => {
                self.status_message = format!("'{}' is not an integer key", prompt.buffer);
                return;
            }
        };
        let Some(session) = self.trace.tree_session_mut() else {
            return;
        };

        let first_new = session.len();
        match prompt.command {
            TreeCommand::Insert => session.insert(key),
            TreeCommand::Search => session.search(key),
        }
        let added = session.len() - first_new;
        self.playback.extend_to(session.len());
        self.playback.seek(first_new);
        self.status_message = match prompt.command {
            TreeCommand::Insert => format!("Inserted {} ({} steps)", key, added),
            TreeCommand::Search => format!("Searched {} ({} steps)", key, added),
        };
    }
}
