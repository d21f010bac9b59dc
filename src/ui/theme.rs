use crate::sorts::Role;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub title: Color, // Blue
    pub help: Color,  // Grey
    pub placed: Color,
    pub compared: Color,
    pub candidate: Color,
    pub settled: Color,
    pub badge_idle: Color,
    pub badge_running: Color,
    pub status_bg: Color,
    pub bar_gradient: [Color; 3], // Grey shades cycled by index
}

impl Theme {
    /// Bar color for a highlight role
    pub fn role_color(&self, role: Role) -> Color {
        match role {
            Role::Placed => self.placed,
            Role::Compared => self.compared,
            Role::Candidate => self.candidate,
            Role::Settled => self.settled,
        }
    }

    /// Base color for an unhighlighted bar
    pub fn gradient_color(&self, index: usize) -> Color {
        self.bar_gradient[index % self.bar_gradient.len()]
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    title: Color::Rgb(137, 180, 250), // Blue for the header title
    help: Color::Rgb(108, 112, 134),  // Grey for control hints
    placed: Color::Rgb(166, 227, 161),    // Green
    compared: Color::Rgb(243, 139, 168),  // Red
    candidate: Color::Rgb(137, 180, 250), // Blue
    settled: Color::Rgb(166, 227, 161),   // Green (merge writeback)
    badge_idle: Color::Rgb(249, 226, 175),    // Yellow
    badge_running: Color::Rgb(166, 227, 161), // Green
    status_bg: Color::Rgb(50, 50, 70),
    bar_gradient: [
        Color::Rgb(128, 128, 128),
        Color::Rgb(160, 160, 160),
        Color::Rgb(192, 192, 192),
    ],
};
