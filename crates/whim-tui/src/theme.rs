//! Color theme support

use ratatui::style::{Color, Modifier, Style};

/// Slice colors, applied as `palette[i % len]` in option order
pub const SLICE_PALETTE: [Color; 8] = [
    Color::Rgb(0x4e, 0x79, 0xa7),
    Color::Rgb(0xf2, 0x8e, 0x2b),
    Color::Rgb(0xe1, 0x57, 0x59),
    Color::Rgb(0x76, 0xb7, 0xb2),
    Color::Rgb(0x59, 0xa1, 0x4f),
    Color::Rgb(0x1f, 0x7a, 0x8c),
    Color::Rgb(0xb0, 0x7a, 0xa1),
    Color::Rgb(0xff, 0x9d, 0xa7),
];

/// Gold, used for the winning slice and the pointer
pub const HIGHLIGHT: Color = Color::Rgb(0xff, 0xd7, 0x00);

/// Color theme for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Primary text color
    pub fg: Color,
    /// Dimmed/secondary text
    pub dim: Color,
    /// Accent color (focused controls)
    pub accent: Color,
    /// Success color (winner banner)
    pub success: Color,
    /// Border color
    pub border: Color,
    /// Slice colors in option order
    pub palette: [Color; 8],
    /// Winning slice color
    pub highlight: Color,
    /// Text drawn on top of slices
    pub label_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            success: Color::Green,
            border: Color::DarkGray,
            palette: SLICE_PALETTE,
            highlight: HIGHLIGHT,
            label_fg: Color::Black,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
            success: Color::Green,
            border: Color::Gray,
            palette: SLICE_PALETTE,
            highlight: HIGHLIGHT,
            label_fg: Color::Black,
        }
    }

    /// Get base style
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Get dimmed style
    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Get accent style
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Get bold accent style
    pub fn accent_bold(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Get success style
    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the pointer marker
    pub fn pointer_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }
}
