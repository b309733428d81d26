//! Events emitted by the console for the host to handle.

use crate::command::Command;

/// Events returned from [`Console::update`](crate::Console::update).
///
/// These mirror what the console already exposes through its accessors, so a
/// host may either react to events or poll the pending message each frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleEvent {
    /// A line was submitted and is now the pending message.
    Submitted(Command),
    /// The slide-in animation finished.
    Opened,
    /// The slide-out animation finished; the console is no longer drawn.
    Closed,
}
