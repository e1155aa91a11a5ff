//! whim-core: the decision wheel itself
//!
//! Option-list model, cubic ease-out trajectory, and the tick-driven spin
//! state machine. No UI dependencies; the terminal front end lives in
//! whim-tui / whim-cli.

pub mod easing;
pub mod error;
pub mod spin;
pub mod wheel;

pub use error::WheelError;
pub use spin::{DEFAULT_FRAME_COUNT, DEFAULT_FRAME_DELAY, SPIN_RANGE, SpinEvent, SpinState};
pub use wheel::{FULL_TURN, MAX_OPTIONS, MIN_OPTIONS, Wheel};
