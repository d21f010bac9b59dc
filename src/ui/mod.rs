//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — the keyboard event loop and frame pacing around the
//!   [`Player`](crate::player::Player)
//! - **[`panes`]** — stateless render functions for the header, bar chart
//!   and status bar
//! - **[`theme`]** — centralized color palette, including the highlight role
//!   colors and the grey bar gradient
//!
//! The entry point for consumers is [`App`]: construct it with a `Player`
//! and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
