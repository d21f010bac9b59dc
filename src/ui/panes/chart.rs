//! Bar chart rendering
//!
//! Maps each array element to a colored column. Geometry follows the
//! original layout math: bars start at a centered horizontal offset, each
//! occupies `block_width` columns, and height scales with the value span
//! from the array's layout snapshot.

use crate::model::SortArray;
use crate::sorts::Highlights;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    Frame,
};

/// Render the bar chart for the current array state.
///
/// `highlights` is the transient index -> role mapping from the most recent
/// step; highlighted bars override their gradient color.
pub fn render_chart_pane(
    frame: &mut Frame,
    area: Rect,
    array: &SortArray,
    highlights: &Highlights,
) {
    let len = array.len();
    if len == 0 || area.width == 0 || area.height == 0 {
        return;
    }

    let layout = array.layout();
    let block_width = (area.width as usize / len).max(1) as u16;
    let used = (block_width as usize * len).min(area.width as usize) as u16;
    let start_x = area.x + area.width.saturating_sub(used) / 2;

    let buf = frame.buffer_mut();

    for (i, &value) in array.values().iter().enumerate() {
        let x = start_x + i as u16 * block_width;
        if x >= area.x + area.width {
            // Terminal too narrow for every bar; drop the overflow.
            break;
        }

        let color = match highlights.get(&i) {
            Some(&role) => DEFAULT_THEME.role_color(role),
            None => DEFAULT_THEME.gradient_color(i),
        };

        let height = layout.bar_height(value, area.height);
        let top = area.y + area.height - height;
        let width = block_width.min(area.x + area.width - x);
        let bar = Rect::new(x, top, width, height);
        buf.set_style(bar, Style::default().bg(color));
    }
}
