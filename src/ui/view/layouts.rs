use ratatui::layout::Rect;

/// 在 area 中居中放置一个宽度按百分比、高度固定的矩形
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(50, 6, Rect::new(0, 0, 80, 20));
        assert_eq!(rect, Rect::new(20, 7, 40, 6));
    }

    #[test]
    fn test_centered_rect_clamps_height() {
        let rect = centered_rect(100, 10, Rect::new(2, 1, 30, 4));
        assert_eq!(rect, Rect::new(2, 1, 30, 4));
    }
}
