//! Main state for the console.

use super::{InputBuffer, ScrollState, Visibility, VisibilityState};
use crate::action::{ConsoleAction, ConsoleKey};
use crate::command::{parse_line, Command};
use crate::error::ConsoleError;
use crate::event::ConsoleEvent;
use crate::geometry::Viewport;
use game_console_config::ConsoleConfig;
use std::collections::VecDeque;

/// Viewport figures needed for paging, refreshed every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    pub viewport: Viewport,
    pub line_height: f32,
}

impl ScreenMetrics {
    /// Number of log lines one page of the open console holds.
    pub fn lines_per_page(&self, open_fraction: f32) -> usize {
        if self.line_height <= 0.0 {
            return 0;
        }
        (self.viewport.height * open_fraction / self.line_height).floor() as usize
    }
}

/// Everything the console owns: input line, log, pending command, scroll
/// and visibility.
#[derive(Debug, Clone)]
pub struct ConsoleState {
    pub input: InputBuffer,
    /// Most recent line first
    log: VecDeque<String>,
    /// Lowercased message of the last submission, empty when consumed
    pending_message: String,
    pending_arguments: Vec<String>,
    pub scroll: ScrollState,
    pub visibility: Visibility,
    /// Published when tab is typed
    quick_command: String,
}

impl ConsoleState {
    /// Closed console state; the config is validated first.
    pub fn new(config: &ConsoleConfig, viewport_height: f32) -> Self {
        let config = config.clone().validate();
        let mut log = VecDeque::new();
        log.push_front(config.welcome_line.clone());

        Self {
            input: InputBuffer::new(),
            log,
            pending_message: String::new(),
            pending_arguments: Vec::new(),
            scroll: ScrollState::new(config.scroll_margin),
            visibility: Visibility::new(viewport_height, config.open_fraction, config.slide_speed),
            quick_command: config.quick_command.clone(),
        }
    }

    // === Log ===

    /// Log lines, most recent first.
    pub fn log_lines(&self) -> &VecDeque<String> {
        &self.log
    }

    /// Insert a line at the front of the log.
    pub fn insert_text(&mut self, line: impl Into<String>, metrics: &ScreenMetrics) {
        self.log.push_front(line.into());
        self.clamp_scroll(metrics);
    }

    /// Drop every log line.
    pub fn clear_log(&mut self) {
        self.log.clear();
        self.scroll.end();
    }

    // === Pending command ===

    pub fn peek_message(&self) -> &str {
        &self.pending_message
    }

    pub fn arguments(&self) -> &[String] {
        &self.pending_arguments
    }

    /// Read a pending argument.
    pub fn argument(&self, index: usize) -> Result<&str, ConsoleError> {
        self.pending_arguments
            .get(index)
            .map(String::as_str)
            .ok_or(ConsoleError::ArgumentOutOfRange {
                index,
                len: self.pending_arguments.len(),
            })
    }

    /// Consume the pending message and its arguments.
    pub fn clear_message(&mut self) {
        self.pending_message.clear();
        self.pending_arguments.clear();
    }

    // === Scroll ===

    pub fn lines_per_page(&self, metrics: &ScreenMetrics) -> usize {
        metrics.lines_per_page(self.visibility.open_fraction())
    }

    pub fn clamp_scroll(&mut self, metrics: &ScreenMetrics) {
        let page = self.lines_per_page(metrics);
        self.scroll.clamp(self.log.len(), page);
    }

    // === Actions ===

    /// Apply one input action.
    pub fn handle_action(
        &mut self,
        action: &ConsoleAction,
        metrics: &ScreenMetrics,
    ) -> Option<ConsoleEvent> {
        log::trace!("Console action: {:?}", action);

        if let ConsoleAction::CharacterTyped('\t') = action {
            return Some(self.publish_quick_command());
        }

        if action.requires_active() && !self.visibility.is_active() {
            return None;
        }

        let line_count = self.log.len();
        let page = self.lines_per_page(metrics);

        match action {
            ConsoleAction::CharacterTyped(c) => {
                self.input.type_char(*c);
                None
            }
            ConsoleAction::KeyPressed(key) => match key {
                ConsoleKey::Toggle => {
                    self.visibility.toggle();
                    None
                }
                ConsoleKey::DeleteLine => {
                    self.input.clear();
                    None
                }
                ConsoleKey::Submit => self.submit(metrics).map(ConsoleEvent::Submitted),
                ConsoleKey::PageUp => {
                    self.scroll.page_up(line_count, page);
                    None
                }
                ConsoleKey::PageDown => {
                    self.scroll.page_down(line_count, page);
                    None
                }
                ConsoleKey::Home => {
                    self.scroll.home(line_count, page);
                    None
                }
                ConsoleKey::End => {
                    self.scroll.end();
                    None
                }
            },
            ConsoleAction::Scrolled(amount_y) => {
                self.scroll.wheel(*amount_y, line_count, page);
                None
            }
        }
    }

    /// Decompose the input line into the pending command.
    ///
    /// Does nothing for an empty input line.
    pub fn submit(&mut self, metrics: &ScreenMetrics) -> Option<Command> {
        if self.input.is_empty() {
            return None;
        }

        let line = self.input.take();
        let parsed = parse_line(&line);
        for echo in parsed.echo_lines() {
            self.log.push_front(echo);
        }
        self.clamp_scroll(metrics);

        let command = parsed.to_command();
        log::debug!(
            "Console submitted {:?} with {} argument(s)",
            command.message,
            command.arguments.len()
        );
        self.pending_message = command.message.clone();
        self.pending_arguments = command.arguments.clone();
        Some(command)
    }

    fn publish_quick_command(&mut self) -> ConsoleEvent {
        let command = Command::new(self.quick_command.clone());
        self.pending_message = command.message.clone();
        self.pending_arguments.clear();
        ConsoleEvent::Submitted(command)
    }

    /// Advance the slide animation.
    pub fn update_visibility(&mut self, delta: f32, viewport_height: f32) -> Option<ConsoleEvent> {
        match self.visibility.update(delta, viewport_height)? {
            VisibilityState::Open => Some(ConsoleEvent::Opened),
            VisibilityState::Closed => Some(ConsoleEvent::Closed),
            VisibilityState::Opening | VisibilityState::Closing => None,
        }
    }
}
