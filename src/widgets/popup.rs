use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of at most `width` x `height`, centered inside `area`
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    Rect {
        x: area.x + (area.width - popup_width) / 2,
        y: area.y + (area.height - popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}

/// Rect anchored to the top-right corner of `area`, `margin` cells in
pub fn top_right_popup(area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let max_width = area.width.saturating_sub(margin * 2);
    let max_height = area.height.saturating_sub(margin * 2);
    let popup_width = width.min(max_width);

    Rect {
        x: area.x + area.width.saturating_sub(popup_width + margin),
        y: area.y + margin.min(area.height),
        width: popup_width,
        height: height.min(max_height),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
