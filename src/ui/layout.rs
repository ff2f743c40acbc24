use ratatui::layout::Rect;

/// Vertical split of the frame: header, body (list), input line, footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let input_height = 3.min(
        area.height
            .saturating_sub(header_height + footer_height),
    );

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let input = Rect {
        x: area.x,
        y: footer.y.saturating_sub(input_height),
        width: area.width,
        height: input_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + input_height + footer_height),
    };
    (header, body, input, footer)
}
