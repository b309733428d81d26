//! The console overlay widget.

use super::DrawCommand;
use crate::geometry::{Color, Projection, Rect};
use crate::state::{ConsoleState, ScreenMetrics};
use crate::traits::{BlendMode, Renderer};
use game_console_config::ConsoleConfig;

/// Colours and text offsets of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleStyle {
    pub background: Color,
    pub rule: Color,
    pub text: Color,
    pub x_border: f32,
    pub fps_right_offset: f32,
    pub fps_baseline_offset: f32,
    pub input_baseline_offset: f32,
}

impl From<&ConsoleConfig> for ConsoleStyle {
    fn from(config: &ConsoleConfig) -> Self {
        Self {
            background: config.background_color.into(),
            rule: config.rule_color.into(),
            text: Color::WHITE,
            x_border: config.x_border,
            fps_right_offset: config.fps_right_offset,
            fps_baseline_offset: config.fps_baseline_offset,
            input_baseline_offset: config.input_baseline_offset,
        }
    }
}

impl Default for ConsoleStyle {
    fn default() -> Self {
        Self::from(&ConsoleConfig::default())
    }
}

/// Assembles the overlay's draw calls from console state.
///
/// Layout, bottom-left origin, `y` being the console's bottom edge:
///
/// ```text
///  H ┌──────────────────────────────────────┐
///    │ log[scroll + n]                      │
///    │ ...                                  │
///    │ log[scroll]                          │
///    ├──────────────────────────────────────┤ y + line height
///    │ input line                 FPS: 60   │ entry row
///  y ╞══════════════════════════════════════╡ rule at y - 1
/// ```
///
/// # Example
///
/// ```ignore
/// let widget = ConsoleWidget::new(&state, &style).with_frame_delta(delta);
/// widget.render(&metrics, &mut renderer);
/// ```
pub struct ConsoleWidget<'a> {
    state: &'a ConsoleState,
    style: &'a ConsoleStyle,
    fps: u32,
}

impl<'a> ConsoleWidget<'a> {
    pub fn new(state: &'a ConsoleState, style: &'a ConsoleStyle) -> Self {
        Self {
            state,
            style,
            fps: 0,
        }
    }

    /// Derive the FPS readout from the last frame's duration in seconds.
    pub fn with_frame_delta(mut self, delta: f32) -> Self {
        self.fps = if delta > 0.0 {
            (1.0 / delta) as u32
        } else {
            0
        };
        self
    }

    /// Build the draw calls for the current state.
    ///
    /// Returns nothing once the console is fully closed.
    pub fn commands(&self, metrics: &ScreenMetrics) -> Vec<DrawCommand> {
        if !self.state.visibility.is_visible() {
            return Vec::new();
        }

        let width = metrics.viewport.width;
        let height = metrics.viewport.height;
        let line_height = metrics.line_height;
        let y = self.state.visibility.y();
        let style = self.style;

        let mut commands = vec![
            DrawCommand::SetProjection(Projection::for_viewport(metrics.viewport)),
            DrawCommand::SetBlendMode(BlendMode::Alpha),
            DrawCommand::SetColor(style.background),
            DrawCommand::FillRect(Rect::new(0.0, y, width, height - y)),
            DrawCommand::FillRect(Rect::new(0.0, y, width, line_height)),
            DrawCommand::SetColor(style.rule),
            DrawCommand::FillRect(Rect::new(0.0, y - 1.0, width, 1.0)),
            DrawCommand::SetColor(style.text),
            DrawCommand::Text {
                text: format!("FPS: {}", self.fps),
                x: width - style.fps_right_offset,
                y: y + line_height - style.fps_baseline_offset,
            },
            DrawCommand::Text {
                text: self.state.input.as_str().to_string(),
                x: style.x_border,
                y: y + line_height - style.input_baseline_offset,
            },
        ];

        let scroll = self.state.scroll.offset();
        let visible = self
            .state
            .log_lines()
            .iter()
            .skip(scroll)
            .enumerate()
            .map(|(row, line)| (y + (row + 2) as f32 * line_height, line))
            .take_while(|(line_y, _)| *line_y < height + line_height);

        for (line_y, line) in visible {
            commands.push(DrawCommand::Text {
                text: line.clone(),
                x: style.x_border,
                y: line_y,
            });
        }

        commands
    }

    /// Replay the draw calls against a renderer.
    pub fn render<R: Renderer + ?Sized>(&self, metrics: &ScreenMetrics, renderer: &mut R) {
        for command in self.commands(metrics) {
            command.apply(renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Viewport;
    use crate::test_support::RecordingRenderer;
    use crate::{ConsoleAction, ConsoleKey};
    use pretty_assertions::assert_eq;

    fn metrics() -> ScreenMetrics {
        ScreenMetrics {
            viewport: Viewport::new(800.0, 600.0),
            line_height: 20.0,
        }
    }

    /// Half-screen console so the open position lands on y = 300.
    fn config() -> ConsoleConfig {
        ConsoleConfig {
            open_fraction: 0.5,
            ..ConsoleConfig::default()
        }
    }

    fn open_state() -> ConsoleState {
        let mut state = ConsoleState::new(&config(), 600.0);
        state.handle_action(&ConsoleAction::KeyPressed(ConsoleKey::Toggle), &metrics());
        state.update_visibility(10.0, 600.0);
        state
    }

    fn texts(commands: &[DrawCommand]) -> Vec<(String, f32, f32)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, x, y } => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_closed_console_draws_nothing() {
        let state = ConsoleState::new(&config(), 600.0);
        let style = ConsoleStyle::default();
        assert!(ConsoleWidget::new(&state, &style)
            .commands(&metrics())
            .is_empty());
    }

    #[test]
    fn test_background_rectangles() {
        let state = open_state();
        let style = ConsoleStyle::default();
        let commands = ConsoleWidget::new(&state, &style).commands(&metrics());

        assert_eq!(state.visibility.y(), 300.0);
        assert_eq!(
            &commands[..7],
            &[
                DrawCommand::SetProjection(Projection::for_viewport(Viewport::new(800.0, 600.0))),
                DrawCommand::SetBlendMode(BlendMode::Alpha),
                DrawCommand::SetColor(Color::rgba(0.15, 0.6, 0.25, 0.3)),
                DrawCommand::FillRect(Rect::new(0.0, 300.0, 800.0, 300.0)),
                DrawCommand::FillRect(Rect::new(0.0, 300.0, 800.0, 20.0)),
                DrawCommand::SetColor(Color::rgba(1.0, 1.0, 0.9, 0.5)),
                DrawCommand::FillRect(Rect::new(0.0, 299.0, 800.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_text_positions() {
        let mut state = open_state();
        state.insert_text("second", &metrics());
        for c in "hp".chars() {
            state.handle_action(&ConsoleAction::CharacterTyped(c), &metrics());
        }
        let style = ConsoleStyle::default();

        let commands = ConsoleWidget::new(&state, &style)
            .with_frame_delta(0.02)
            .commands(&metrics());

        assert_eq!(
            texts(&commands),
            vec![
                ("FPS: 50".to_string(), 625.0, 310.0),
                ("hp".to_string(), 42.0, 315.0),
                ("second".to_string(), 42.0, 340.0),
                ("    -= welcome =-".to_string(), 42.0, 360.0),
            ]
        );
    }

    #[test]
    fn test_scroll_skips_newest_lines() {
        let mut state = open_state();
        for i in 0..30 {
            state.insert_text(format!("line {}", i), &metrics());
        }
        state.handle_action(&ConsoleAction::Scrolled(-2.0), &metrics());
        let style = ConsoleStyle::default();

        let commands = ConsoleWidget::new(&state, &style).commands(&metrics());
        let log = &texts(&commands)[2..];

        assert_eq!(log[0], ("line 27".to_string(), 42.0, 340.0));
        // Nothing starts beyond the top edge
        assert!(log.iter().all(|(_, _, line_y)| *line_y < 620.0));
    }

    #[test]
    fn test_zero_delta_fps() {
        let state = open_state();
        let style = ConsoleStyle::default();
        let commands = ConsoleWidget::new(&state, &style)
            .with_frame_delta(0.0)
            .commands(&metrics());
        assert_eq!(texts(&commands)[0].0, "FPS: 0");
    }

    #[test]
    fn test_render_replays_commands() {
        let state = open_state();
        let style = ConsoleStyle::default();
        let widget = ConsoleWidget::new(&state, &style);
        let mut renderer = RecordingRenderer::default();

        widget.render(&metrics(), &mut renderer);

        assert_eq!(renderer.commands, widget.commands(&metrics()));
    }
}
