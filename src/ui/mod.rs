//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is the display surface for [`StepViewer`]:
//!
//! - **[`app`]**: application state, keyboard event loop, autoplay
//! - **[`panes`]**: stateless render functions for the step list, code panel
//!   and status bar
//! - **[`reveal`]**: timing of the line-by-line code reveal
//! - **[`theme`]**: color palette and the `StyleTag` → style mapping
//! - **[`print`]**: non-interactive ANSI output for `--print`
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`StepViewer`] and call [`App::run`] to start the event loop.
//!
//! [`StepViewer`]: crate::viewer::StepViewer
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod print;
pub mod reveal;
pub mod theme;

pub use app::App;
