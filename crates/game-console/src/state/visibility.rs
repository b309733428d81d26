//! Slide-in/slide-out state machine.
//!
//! ```text
//!            toggle                 reached open target
//!  Closed ──────────► Opening ──────────────────────────► Open
//!    ▲                 │   ▲                                │
//!    │ reached H       │   │ toggle                  toggle │
//!    │          toggle ▼   │                                │
//!    └──────────────── Closing ◄────────────────────────────┘
//! ```
//!
//! `y` is the bottom edge of the console in bottom-left-origin coordinates:
//! `H` means fully hidden, `H * (1 - open_fraction)` fully open.

use strum::Display;

/// Logical state of the console overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum VisibilityState {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Animated visibility of the console.
#[derive(Debug, Clone, PartialEq)]
pub struct Visibility {
    state: VisibilityState,
    y: f32,
    open_fraction: f32,
    slide_speed: f32,
}

impl Visibility {
    /// Start closed, hidden above a viewport of `viewport_height`.
    pub fn new(viewport_height: f32, open_fraction: f32, slide_speed: f32) -> Self {
        Self {
            state: VisibilityState::Closed,
            y: viewport_height,
            open_fraction,
            slide_speed,
        }
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// Current bottom edge of the console.
    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn open_fraction(&self) -> f32 {
        self.open_fraction
    }

    /// Whether the console takes input (opening or open).
    pub fn is_active(&self) -> bool {
        matches!(self.state, VisibilityState::Opening | VisibilityState::Open)
    }

    /// Whether the console should be drawn, including while closing.
    pub fn is_visible(&self) -> bool {
        self.state != VisibilityState::Closed
    }

    /// Resting position of the open console.
    pub fn open_target(&self, viewport_height: f32) -> f32 {
        viewport_height * (1.0 - self.open_fraction)
    }

    /// Flip between opening and closing.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            VisibilityState::Closed | VisibilityState::Closing => VisibilityState::Opening,
            VisibilityState::Opening | VisibilityState::Open => VisibilityState::Closing,
        };
        log::debug!("Console visibility toggled to {}", self.state);
    }

    /// Advance the animation by `delta` seconds.
    ///
    /// Returns the settled state when an animation finishes this frame.
    pub fn update(&mut self, delta: f32, viewport_height: f32) -> Option<VisibilityState> {
        let step = self.slide_speed * delta.max(0.0);

        match self.state {
            VisibilityState::Closed => {
                self.y = viewport_height;
                None
            }
            VisibilityState::Open => {
                self.y = self.open_target(viewport_height);
                None
            }
            VisibilityState::Opening => {
                let target = self.open_target(viewport_height);
                self.y = move_toward(self.y, target, step);
                if self.y == target {
                    self.state = VisibilityState::Open;
                    log::debug!("Console opened");
                    Some(VisibilityState::Open)
                } else {
                    None
                }
            }
            VisibilityState::Closing => {
                self.y = move_toward(self.y, viewport_height, step);
                if self.y == viewport_height {
                    self.state = VisibilityState::Closed;
                    log::debug!("Console closed");
                    Some(VisibilityState::Closed)
                } else {
                    None
                }
            }
        }
    }
}

/// Move `from` towards `to` by at most `step` without overshooting.
fn move_toward(from: f32, to: f32, step: f32) -> f32 {
    if from > to {
        (from - step).max(to)
    } else {
        (from + step).min(to)
    }
}
