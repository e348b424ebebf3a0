//! # Introduction
//!
//! walkthrough steps a viewer through a scripted product demo: an ordered
//! list of steps, each pairing a short description with a terminal or config
//! transcript. Transcripts get lightweight coloring from a line classifier;
//! there is no real syntax highlighting underneath.
//!
//! ## Pipeline
//!
//! ```text
//! Catalog → StepViewer (selection) → split on '\n' → classify → StepView → TUI / print
//! ```
//!
//! 1. [`catalog`]: the built-in demo script and the TOML catalog loader.
//! 2. [`viewer`]: holds the single active step and projects it into a
//!    [`viewer::StepView`] of reveal-indexed, classified lines.
//! 3. [`classify`]: the first-match-wins line classifier producing
//!    [`classify::Segment`]s.
//! 4. [`ui`]: ratatui-based TUI and the `--print` writer; not part of the
//!    stable library API.
//! 5. [`config`] and [`logging`]: runtime settings and `tracing` setup for
//!    the binary.
//!
//! ## Example
//!
//! ```
//! use walkthrough::catalog::builtin;
//! use walkthrough::classify::StyleTag;
//! use walkthrough::viewer::StepViewer;
//!
//! let mut viewer = StepViewer::new(builtin()).unwrap();
//! viewer.select(1).unwrap();
//! let view = viewer.render();
//! assert_eq!(view.code_title, "opendata.toml");
//! assert_eq!(view.lines[1].segments[0].tag, StyleTag::SectionHeader);
//! ```

pub mod catalog;
pub mod classify;
pub mod config;
pub mod logging;
pub mod ui;
pub mod viewer;
