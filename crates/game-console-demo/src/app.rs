//! Demo main loop: the terminal plays the game engine

use crate::commands::{self, Outcome};
use crate::keymap::{self, HostInput};
use crate::scene;
use crate::terminal_renderer::{viewport_of, CellFont, TerminalRenderer};
use anyhow::Result;
use game_console::{Console, ConsoleEvent};
use game_console_config::ConsoleConfig;
use ratatui::{backend::Backend, crossterm::event, Terminal};
use std::time::{Duration, Instant};

/// Target frame time
const FRAME: Duration = Duration::from_millis(16);

/// Pixels per terminal row in the default layout
const PIXELS_PER_ROW: f32 = 24.0;

/// Rescale pixel-sized layout settings to terminal cells.
///
/// Fractions, colours and text settings are kept as configured.
pub fn cell_layout(config: ConsoleConfig) -> ConsoleConfig {
    ConsoleConfig {
        slide_speed: config.slide_speed / PIXELS_PER_ROW,
        line_padding: 0.0,
        x_border: 2.0,
        fps_right_offset: 12.0,
        fps_baseline_offset: 0.0,
        input_baseline_offset: 0.0,
        ..config
    }
}

/// Run frames until the user quits
pub fn run<B: Backend>(terminal: &mut Terminal<B>, config: &ConsoleConfig) -> Result<()> {
    let size = terminal.size()?;
    let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
    let mut console = Console::new(config, CellFont, viewport_of(area));
    let input = console.input();

    let started = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        // Deliver input to the console's queue
        while event::poll(Duration::ZERO)? {
            match keymap::translate(&event::read()?) {
                Some(HostInput::Quit) => return Ok(()),
                Some(HostInput::Console(action)) => input.post(action),
                Some(HostInput::Resized) | None => {}
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        let size = terminal.size()?;
        let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
        for console_event in console.update(delta, viewport_of(area)) {
            match console_event {
                ConsoleEvent::Submitted(command) => {
                    log::debug!("Submitted {:?}", command)
                }
                ConsoleEvent::Opened => log::debug!("Console open"),
                ConsoleEvent::Closed => log::debug!("Console closed"),
            }
        }

        if commands::handle_pending(&mut console) == Outcome::Quit {
            return Ok(());
        }

        let elapsed = started.elapsed().as_secs_f32();
        terminal.draw(|frame| {
            let area = frame.area();
            scene::render(frame, area, elapsed);
            let mut renderer = TerminalRenderer::new(frame.buffer_mut(), area);
            console.draw(&mut renderer);
        })?;

        if let Some(rest) = FRAME.checked_sub(last_frame.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_console::{ConsoleAction, ConsoleKey};
    use ratatui::backend::TestBackend;

    #[test]
    fn test_cell_layout_keeps_non_pixel_settings() {
        let config = ConsoleConfig {
            open_fraction: 0.5,
            welcome_line: "hi".to_string(),
            ..ConsoleConfig::default()
        };
        let cells = cell_layout(config);

        assert_eq!(cells.open_fraction, 0.5);
        assert_eq!(cells.welcome_line, "hi");
        assert_eq!(cells.slide_speed, 62.5);
        assert_eq!(cells.line_padding, 0.0);
    }

    #[test]
    fn test_open_console_draws_into_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        let config = cell_layout(ConsoleConfig::default());
        let area = ratatui::layout::Rect::new(0, 0, 40, 20);
        let mut console = Console::new(&config, CellFont, viewport_of(area));

        console.post(ConsoleAction::KeyPressed(ConsoleKey::Toggle));
        for c in "hello".chars() {
            console.post(ConsoleAction::CharacterTyped(c));
        }
        console.update(10.0, viewport_of(area));

        terminal
            .draw(|frame| {
                let area = frame.area();
                let mut renderer = TerminalRenderer::new(frame.buffer_mut(), area);
                console.draw(&mut renderer);
            })
            .unwrap();

        // Open at y = 20 * 0.35 = 7 from the bottom: the entry row is row 12
        let buffer = terminal.backend().buffer();
        let row: String = (0..40u16).map(|x| buffer[(x, 12u16)].symbol()).collect();
        assert!(row.contains("hello"), "entry row was {:?}", row);
        assert!(row.contains("FPS: 0"), "entry row was {:?}", row);
    }
}
