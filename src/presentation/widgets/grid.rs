use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Cells of a `columns`-wide grid of `count` items, each `cell_height` rows tall
///
/// The last column absorbs the rounding remainder. Cells that would fall
/// below `area` are clipped away.
pub fn grid_cells(area: Rect, count: usize, columns: usize, cell_height: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    let Ok(cols) = u16::try_from(columns) else {
        return vec![];
    };
    let cell_width = area.width / cols;

    (0..count)
        .map(|i| {
            let row = u16::try_from(i / columns).unwrap_or(u16::MAX);
            let col = (i % columns) as u16;
            let x = area.x + col * cell_width;
            let width = if col + 1 == cols {
                area.right().saturating_sub(x)
            } else {
                cell_width
            };
            let y = area.y.saturating_add(row.saturating_mul(cell_height));
            Rect::new(x, y, width, cell_height).intersection(area)
        })
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Shrink `area` horizontally by `margin` columns on each side
pub fn inset(area: Rect, margin: u16) -> Rect {
    let margin = margin.min(area.width / 2);
    Rect::new(
        area.x + margin,
        area.y,
        area.width - margin * 2,
        area.height,
    )
}

/// One row of `area`, or an empty rect when `row` is outside it
pub fn row(area: Rect, row: u16) -> Rect {
    if row >= area.height {
        return Rect::new(area.x, area.y, 0, 0);
    }
    Rect::new(area.x, area.y + row, area.width, 1)
}

/// Centered heading and subheading, three rows including the gap below
pub fn render_section_title(
    area: Rect,
    buf: &mut Buffer,
    title: &str,
    subtitle: &str,
    title_style: Style,
    subtitle_style: Style,
) {
    Paragraph::new(Line::styled(title, title_style))
        .alignment(Alignment::Center)
        .render(row(area, 0), buf);
    Paragraph::new(Line::styled(subtitle, subtitle_style))
        .alignment(Alignment::Center)
        .render(row(area, 1), buf);
}
