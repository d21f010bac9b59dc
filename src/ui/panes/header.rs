//! Header pane: algorithm title and control help lines

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub fn render_header_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm_name: &str,
    ascending: bool,
    speed: u32,
) {
    let direction = if ascending { "Ascending" } else { "Descending" };

    let lines = vec![
        Line::styled(
            format!("{} - {}", algorithm_name, direction),
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "R - Reset | SPACE - Start Sorting | A - Ascending | D - Descending",
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Line::styled(
            "B - Bubble Sort | I - Insertion Sort | S - Selection Sort | M - Merge Sort",
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Line::styled(
            format!("+ - Speed Up | - - Speed Down | Current Speed: {}", speed),
            Style::default().fg(DEFAULT_THEME.help),
        ),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
