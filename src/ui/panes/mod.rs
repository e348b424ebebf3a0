//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`steps`]: Numbered step list; the active step shows its description
//! - [`code`]: Code panel with the classified, progressively revealed transcript
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane exports one stateless `render_*` function. Scroll offsets are
//! owned by [`App`](crate::ui::App) and passed in by reference.

pub mod code;
pub mod status;
pub mod steps;

pub use code::render_code_pane;
pub use status::render_status_bar;
pub use steps::render_steps_pane;
