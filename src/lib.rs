//! # Introduction
//!
//! sortty animates elementary comparison sorts (bubble, insertion, selection,
//! merge) on a random integer array, one comparison or placement per frame,
//! in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Config → SortArray → Stepper (one unit of work per resumption) → Player → TUI
//! ```
//!
//! 1. [`config`] — immutable startup configuration, validated before the
//!    terminal is touched.
//! 2. [`model`] — the owned value buffer plus its derived layout metrics.
//! 3. [`sorts`] — each algorithm as an explicit state machine implementing
//!    [`sorts::Stepper`]; one `step` call performs one comparison/swap or one
//!    merge placement and reports which bars to recolor.
//! 4. [`player`] — the playback driver: Idle/Running transitions, command
//!    dispatch, speed clamping, one stepper resumption per tick.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Controls
//!
//! `SPACE` start, `R` reset, `A`/`D` direction, `B`/`I`/`S`/`M` algorithm,
//! `+`/`-` speed, `Q` quit. Everything except reset and quit is ignored
//! while a sort is running.

pub mod config;
pub mod model;
pub mod player;
pub mod sorts;
pub mod ui;
