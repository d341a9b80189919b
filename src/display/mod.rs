//! Display helpers that turn state into readable text.
//!
//! Nothing here feeds back into the state machine.

mod format;
mod screen;

pub use format::format_operand;
pub use screen::Screen;
