//! State management for the console.

mod console_state;
mod input_buffer;
mod scroll;
mod visibility;

pub use console_state::{ConsoleState, ScreenMetrics};
pub use input_buffer::InputBuffer;
pub use scroll::ScrollState;
pub use visibility::{Visibility, VisibilityState};
