//! Stateless render functions for the visible panes
//!
//! Each pane is a free function taking a [`Frame`](ratatui::Frame) and its
//! target area; all state lives in the [`Player`](crate::player::Player).

pub mod chart;
pub mod header;
pub mod status;

pub use chart::render_chart_pane;
pub use header::render_header_pane;
pub use status::render_status_bar;
