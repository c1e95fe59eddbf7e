//! Platform abstraction layer
//!
//! Handles the parts of the host that the game loop consumes:
//! - Input events
//! - Time and frame pacing

pub mod input;
pub mod time;

pub use input::{InputEvent, InputSource, Key, command_for, tick_input};
pub use time::{Clock, FrameLimiter, ManualClock, SystemClock};
