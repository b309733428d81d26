//! Demo command handler
//!
//! The console only decomposes lines; acting on them is the game's job.
//! This handler polls the pending message once per frame, acts on it and
//! clears it, the way a game would wire its own commands.

use game_console::{Console, ConsoleKey, FontMetrics};

/// Outcome of handling one frame's pending message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

const HELP: &[&str] = &[
    "commands:",
    "  help                 this list",
    "  echo @text,...       print the arguments",
    "  color @r,g,b         tint the console (0.0 - 1.0)",
    "  clear                clear the log",
    "  quit                 leave the demo",
];

/// Handle the pending message, if any, and clear it.
pub fn handle_pending<F: FontMetrics>(console: &mut Console<F>) -> Outcome {
    let message = console.peek_message().to_string();
    if message.is_empty() {
        // An empty message (a line starting with " @") is a no-op command
        console.clear_message();
        return Outcome::Continue;
    }

    log::info!(
        "Handling command {:?} with arguments {:?}",
        message,
        console.arguments()
    );

    let outcome = match message.trim() {
        "help" => {
            for line in HELP {
                console.insert_text(*line);
            }
            let keys = [
                ConsoleKey::PageUp,
                ConsoleKey::PageDown,
                ConsoleKey::Home,
                ConsoleKey::End,
            ]
            .map(|k| k.to_string())
            .join(", ");
            console.insert_text(format!("  scroll keys: {}", keys));
            Outcome::Continue
        }
        "echo" => {
            let text = console.arguments().join(" ");
            console.insert_text(text);
            Outcome::Continue
        }
        "color" => {
            match parse_color(console) {
                Ok((r, g, b)) => console.set_background_color(r, g, b),
                Err(e) => console.insert_text(format!("color: {}", e)),
            }
            Outcome::Continue
        }
        "clear" => {
            console.clear_log();
            Outcome::Continue
        }
        "quit" | "exit" => Outcome::Quit,
        "edit" => {
            console.insert_text("edit mode is not available in this demo");
            Outcome::Continue
        }
        other => {
            console.insert_text(format!("unknown command '{}', try help", other));
            Outcome::Continue
        }
    };

    console.clear_message();
    outcome
}

fn parse_color<F: FontMetrics>(console: &Console<F>) -> anyhow::Result<(f32, f32, f32)> {
    let channel = |index: usize| -> anyhow::Result<f32> {
        let raw = console.argument(index)?;
        let value: f32 = raw.trim().parse()?;
        Ok(value.clamp(0.0, 1.0))
    };
    Ok((channel(0)?, channel(1)?, channel(2)?))
}
