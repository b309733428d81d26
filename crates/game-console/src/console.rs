//! Frame-driven console facade.

use crate::action::ConsoleAction;
use crate::error::ConsoleError;
use crate::event::ConsoleEvent;
use crate::geometry::{Projection, Viewport};
use crate::input::{self, ConsoleInput};
use crate::state::{ConsoleState, ScreenMetrics, VisibilityState};
use crate::traits::{FontMetrics, Renderer};
use crate::widget::{ConsoleStyle, ConsoleWidget, DrawCommand};
use game_console_config::ConsoleConfig;
use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

/// A drop-down developer console.
///
/// Polled once per frame by the host:
/// 1. input callbacks post actions through [`Console::input`],
/// 2. [`Console::update`] drains them and advances the slide animation,
/// 3. [`Console::draw`] replays the overlay against the host renderer,
/// 4. the host's command handler reads [`Console::peek_message`] and calls
///    [`Console::clear_message`] once it has acted on it.
pub struct Console<F: FontMetrics> {
    state: ConsoleState,
    style: ConsoleStyle,
    font: F,
    /// Added to the font's line height
    line_padding: f32,
    input: ConsoleInput,
    action_rx: Receiver<ConsoleAction>,
    viewport: Viewport,
    projection: Projection,
    /// Duration of the last frame, for the FPS readout
    frame_delta: f32,
}

impl<F: FontMetrics> Console<F> {
    /// Create a closed console for a viewport.
    ///
    /// The config is validated first, so unusable values fall back to defaults.
    pub fn new(config: &ConsoleConfig, font: F, viewport: Viewport) -> Self {
        let config = config.clone().validate();
        let (input, action_rx) = input::channel();

        Self {
            state: ConsoleState::new(&config, viewport.height),
            style: ConsoleStyle::from(&config),
            font,
            line_padding: config.line_padding,
            input,
            action_rx,
            viewport,
            projection: Projection::for_viewport(viewport),
            frame_delta: 0.0,
        }
    }

    /// Handle for posting input from host callbacks.
    pub fn input(&self) -> ConsoleInput {
        self.input.clone()
    }

    /// Queue an action for the next update.
    pub fn post(&self, action: ConsoleAction) {
        self.input.post(action);
    }

    /// Height of one console row: font line height plus padding.
    pub fn line_height(&self) -> f32 {
        self.font.line_height() + self.line_padding
    }

    fn metrics(&self) -> ScreenMetrics {
        ScreenMetrics {
            viewport: self.viewport,
            line_height: self.line_height(),
        }
    }

    /// Advance one frame: apply queued input, then animate.
    ///
    /// `delta` is the elapsed frame time in seconds.
    pub fn update(&mut self, delta: f32, viewport: Viewport) -> Vec<ConsoleEvent> {
        self.frame_delta = delta;
        if viewport != self.viewport {
            log::debug!(
                "Console viewport resized to {}x{}",
                viewport.width,
                viewport.height
            );
            self.viewport = viewport;
        }
        self.update_transform();

        let metrics = self.metrics();
        self.state.clamp_scroll(&metrics);

        let mut events = Vec::new();
        for action in self.action_rx.try_iter() {
            events.extend(self.state.handle_action(&action, &metrics));
        }
        events.extend(self.state.update_visibility(delta, viewport.height));
        events
    }

    /// Recompute the projection from the current viewport.
    pub fn update_transform(&mut self) {
        self.projection = Projection::for_viewport(self.viewport);
    }

    /// Orthographic projection matching the viewport, origin bottom-left.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Draw calls for the current frame; empty while fully closed.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        ConsoleWidget::new(&self.state, &self.style)
            .with_frame_delta(self.frame_delta)
            .commands(&self.metrics())
    }

    /// Draw the overlay if it is open or still sliding out.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        ConsoleWidget::new(&self.state, &self.style)
            .with_frame_delta(self.frame_delta)
            .render(&self.metrics(), renderer);
    }

    /// [`update`](Self::update) followed by [`draw`](Self::draw).
    pub fn update_and_draw<R: Renderer + ?Sized>(
        &mut self,
        delta: f32,
        viewport: Viewport,
        renderer: &mut R,
    ) -> Vec<ConsoleEvent> {
        let events = self.update(delta, viewport);
        self.draw(renderer);
        events
    }

    // === Pending command ===

    /// Lowercased message of the last submission, empty if none is pending.
    pub fn peek_message(&self) -> &str {
        self.state.peek_message()
    }

    pub fn arguments(&self) -> &[String] {
        self.state.arguments()
    }

    /// Read a pending argument by position.
    pub fn argument(&self, index: usize) -> Result<&str, ConsoleError> {
        self.state.argument(index)
    }

    /// Consume the pending message and arguments.
    pub fn clear_message(&mut self) {
        self.state.clear_message();
    }

    // === Log ===

    /// Insert a line at the front of the log.
    pub fn insert_text(&mut self, line: impl Into<String>) {
        let metrics = self.metrics();
        self.state.insert_text(line, &metrics);
    }

    pub fn clear_log(&mut self) {
        self.state.clear_log();
    }

    /// Log lines, most recent first.
    pub fn log_lines(&self) -> &VecDeque<String> {
        self.state.log_lines()
    }

    pub fn scroll_offset(&self) -> usize {
        self.state.scroll.offset()
    }

    // === Appearance ===

    /// Change the background colour, keeping its transparency.
    pub fn set_background_color(&mut self, r: f32, g: f32, b: f32) {
        self.style.background = self.style.background.with_rgb(r, g, b);
    }

    pub fn style(&self) -> &ConsoleStyle {
        &self.style
    }

    // === Visibility ===

    pub fn visibility(&self) -> VisibilityState {
        self.state.visibility.state()
    }

    /// Whether the console is taking input.
    pub fn is_active(&self) -> bool {
        self.state.visibility.is_active()
    }

    /// Whether the console is drawn, including while it slides out.
    pub fn is_visible(&self) -> bool {
        self.state.visibility.is_visible()
    }

    /// The line currently being typed.
    pub fn input_line(&self) -> &str {
        self.state.input.as_str()
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }
}
