use ratatui::layout::Rect;

/// Widest the calculator grows; extra terminal width is left empty.
pub const MAX_WIDTH: u16 = 48;
/// Borders, register line and three glyph rows.
pub const DISPLAY_HEIGHT: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub display: Rect,
    pub keypad: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let area = centered_columns(area, MAX_WIDTH);
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let display_height =
        DISPLAY_HEIGHT.min(area.height.saturating_sub(header_height + footer_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let display = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: display_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let keypad = Rect {
        x: area.x,
        y: display.y + display_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + display_height + footer_height),
    };
    Regions {
        header,
        display,
        keypad,
        footer,
    }
}

/// Horizontally centered slice of `area` at most `width` columns wide.
pub fn centered_columns(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_without_overlap() {
        let regions = layout_regions(Rect::new(0, 0, 48, 30));
        assert_eq!(regions.header, Rect::new(0, 0, 48, 3));
        assert_eq!(regions.display, Rect::new(0, 3, 48, 6));
        assert_eq!(regions.keypad, Rect::new(0, 9, 48, 18));
        assert_eq!(regions.footer, Rect::new(0, 27, 48, 3));
    }

    #[test]
    fn wide_terminals_center_the_calculator() {
        let regions = layout_regions(Rect::new(0, 0, 100, 30));
        assert_eq!(regions.header.x, 26);
        assert_eq!(regions.header.width, MAX_WIDTH);
    }

    #[test]
    fn tiny_terminals_do_not_underflow() {
        let regions = layout_regions(Rect::new(0, 0, 10, 4));
        assert_eq!(regions.header.height, 3);
        assert_eq!(regions.footer.height, 1);
        assert_eq!(regions.display.height, 0);
        assert_eq!(regions.keypad.height, 0);
    }
}
