//! Wheel widget
//!
//! Renders the decision wheel as a colored disc with a center hole, labels
//! that rotate with their slices, and a fixed pointer above the top of the
//! disc. Pure function of its inputs: identical wheel, rotation, highlight,
//! and area produce an identical buffer.
//!
//! Geometry: screen angles are measured in degrees clockwise from the
//! pointer (12 o'clock), matching `Wheel::slice_at`. Terminal cells are
//! roughly twice as tall as wide, so a row counts as two distance units.

use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use whim_core::Wheel;

/// Fixed marker above the disc indicating the selected slice
const POINTER: &str = "▼";

/// Fraction of the radius left empty in the middle (donut hole)
const HOLE_RATIO: f64 = 0.35;

/// Longest label fragment drawn on a slice
const MAX_LABEL_CELLS: usize = 9;

/// The decision wheel at a given rotation
pub struct WheelWidget<'a> {
    wheel: &'a Wheel,
    rotation: f64,
    highlight: Option<usize>,
    theme: &'a Theme,
}

impl<'a> WheelWidget<'a> {
    /// Create a wheel widget at rest
    pub fn new(wheel: &'a Wheel, theme: &'a Theme) -> Self {
        Self {
            wheel,
            rotation: 0.0,
            highlight: None,
            theme,
        }
    }

    /// Set the clockwise rotation in degrees
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Highlight one slice (the winner)
    pub fn highlight(mut self, index: Option<usize>) -> Self {
        self.highlight = index;
        self
    }

    fn slice_color(&self, index: usize) -> ratatui::style::Color {
        if self.highlight == Some(index) {
            self.theme.highlight
        } else {
            self.theme.palette[index % self.theme.palette.len()]
        }
    }
}

impl Widget for WheelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Pointer row on top, at least a few rows of disc below it.
        if area.width < 9 || area.height < 5 {
            return;
        }

        let cx = area.x as f64 + (area.width as f64 - 1.0) / 2.0;
        // Radius in cell-width units; the disc spans `radius` rows, plus one
        // row reserved for the pointer.
        let radius = ((area.width as f64 - 1.0) / 2.0).min(area.height as f64 - 2.0);
        let hole = radius * HOLE_RATIO;
        let cy = area.y as f64 + 1.0 + radius / 2.0;

        // Disc body
        for y in (area.y + 1)..area.y + area.height {
            for x in area.x..area.x + area.width {
                let dx = x as f64 - cx;
                let dy = (y as f64 - cy) * 2.0;
                let r = (dx * dx + dy * dy).sqrt();
                if r > radius || r < hole {
                    continue;
                }
                let screen_angle = dx.atan2(-dy).to_degrees().rem_euclid(360.0);
                let index = self.wheel.slice_at(screen_angle, self.rotation);
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ').set_bg(self.slice_color(index));
                }
            }
        }

        // Labels at each slice's mid-angle, rotating with the wheel
        let slice_angle = self.wheel.slice_angle();
        let label_r = (radius + hole) / 2.0;
        let label_style = Style::default().fg(self.theme.label_fg);
        for (i, label) in self.wheel.options().iter().enumerate() {
            let mid = (i as f64 + 0.5) * slice_angle + self.rotation;
            let rad = mid.to_radians();
            let lx = cx + label_r * rad.sin();
            let ly = cy - label_r * rad.cos() / 2.0;

            let text: String = label.chars().take(MAX_LABEL_CELLS).collect();
            let width = text.chars().count() as u16;
            let x = (lx - f64::from(width) / 2.0).round().max(area.x as f64) as u16;
            let y = ly.round().max(0.0) as u16;
            if y > area.y && y < area.y + area.height && x + width <= area.x + area.width {
                buf.set_stringn(x, y, &text, width as usize, label_style);
            }
        }

        // Fixed pointer above the disc
        let px = cx.round() as u16;
        buf.set_stringn(px, area.y, POINTER, 1, self.theme.pointer_style());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn render(wheel: &Wheel, rotation: f64, highlight: Option<usize>) -> Buffer {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 41, 22);
        let mut buf = Buffer::empty(area);
        WheelWidget::new(wheel, &theme)
            .rotation(rotation)
            .highlight(highlight)
            .render(area, &mut buf);
        buf
    }

    fn bg_colors(buf: &Buffer) -> Vec<Color> {
        buf.content.iter().map(|cell| cell.bg).collect()
    }

    #[test]
    fn test_render_is_idempotent() {
        let wheel = Wheel::numbered(5).unwrap();
        let first = render(&wheel, 123.4, Some(2));
        let second = render(&wheel, 123.4, Some(2));
        assert_eq!(first, second);
    }

    #[test]
    fn test_pointer_at_top_center() {
        let wheel = Wheel::numbered(4).unwrap();
        let buf = render(&wheel, 0.0, None);
        assert_eq!(buf[(20, 0)].symbol(), POINTER);
    }

    #[test]
    fn test_slice_under_pointer_matches_winner_formula() {
        // Four slices, total rotation 90 degrees lands on index 3.
        let wheel = Wheel::numbered(4).unwrap();
        let theme = Theme::dark();
        let buf = render(&wheel, 90.0, None);
        // Cell straight below the pointer, inside the disc.
        assert_eq!(buf[(20, 2)].bg, theme.palette[wheel.winner_at(90.0)]);
        assert_eq!(wheel.winner_at(90.0), 3);
    }

    #[test]
    fn test_highlight_replaces_slice_color() {
        let wheel = Wheel::numbered(4).unwrap();
        let theme = Theme::dark();

        let plain = render(&wheel, 0.0, None);
        assert!(bg_colors(&plain).contains(&theme.palette[0]));
        assert!(!bg_colors(&plain).contains(&theme.highlight));

        let highlighted = render(&wheel, 0.0, Some(0));
        assert!(!bg_colors(&highlighted).contains(&theme.palette[0]));
        assert!(bg_colors(&highlighted).contains(&theme.highlight));
    }

    #[test]
    fn test_all_slices_painted() {
        for n in 2..=8 {
            let wheel = Wheel::numbered(n).unwrap();
            let buf = render(&wheel, 0.0, None);
            let colors = bg_colors(&buf);
            for i in 0..n {
                assert!(
                    colors.contains(&Theme::dark().palette[i]),
                    "slice {i} of {n} missing"
                );
            }
        }
    }

    #[test]
    fn test_center_hole_left_empty() {
        let wheel = Wheel::numbered(4).unwrap();
        let buf = render(&wheel, 0.0, None);
        // Center of the disc: cy = 1 + radius/2 = 11 for a 41x22 area.
        assert_eq!(buf[(20, 11)].bg, Color::Reset);
    }

    #[test]
    fn test_tiny_area_renders_nothing() {
        let wheel = Wheel::numbered(4).unwrap();
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        WheelWidget::new(&wheel, &theme).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
