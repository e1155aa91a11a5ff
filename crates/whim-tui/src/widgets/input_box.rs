//! Single-line text input widget

use crate::input::Action;
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

/// Single-line text input for an option label
#[derive(Debug, Default, Clone)]
pub struct InputBox {
    /// Current input text
    content: String,
    /// Cursor position (character index, not byte index)
    cursor: usize,
    /// Horizontal scroll offset (in display width)
    scroll: usize,
    /// Whether the input is focused
    focused: bool,
}

impl InputBox {
    /// Create a new input box with initial content
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self {
            content,
            cursor,
            scroll: 0,
            focused: false,
        }
    }

    /// Set focus state
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Get the current content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Get the byte offset for the current cursor position
    fn cursor_byte_offset(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Get the display width of text before the cursor
    fn cursor_display_width(&self) -> usize {
        self.content
            .chars()
            .take(self.cursor)
            .map(|c| c.to_string().width())
            .sum()
    }

    /// Handle an input action; returns true if the action was consumed
    pub fn handle_action(&mut self, action: &Action, width: u16) -> bool {
        let char_count = self.content.chars().count();

        match action {
            Action::Char(c) => {
                self.insert_char(*c);
                self.update_scroll(width as usize);
                true
            }
            Action::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.remove_char_at_cursor();
                    self.update_scroll(width as usize);
                    true
                } else {
                    false
                }
            }
            Action::Delete => {
                if self.cursor < char_count {
                    self.remove_char_at_cursor();
                    true
                } else {
                    false
                }
            }
            Action::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.update_scroll(width as usize);
                    true
                } else {
                    false
                }
            }
            Action::Right => {
                if self.cursor < char_count {
                    self.cursor += 1;
                    self.update_scroll(width as usize);
                    true
                } else {
                    false
                }
            }
            Action::Home => {
                self.cursor = 0;
                self.update_scroll(width as usize);
                true
            }
            Action::End => {
                self.cursor = char_count;
                self.update_scroll(width as usize);
                true
            }
            Action::ClearLine => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    fn insert_char(&mut self, c: char) {
        let byte_offset = self.cursor_byte_offset();
        self.content.insert(byte_offset, c);
        self.cursor += 1;
    }

    /// Remove the character starting at the cursor's byte offset
    fn remove_char_at_cursor(&mut self) {
        let byte_offset = self.cursor_byte_offset();
        let next_boundary = self.content[byte_offset..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| byte_offset + i)
            .unwrap_or(self.content.len());
        self.content.drain(byte_offset..next_boundary);
    }

    fn update_scroll(&mut self, width: usize) {
        let visible_width = width.saturating_sub(1);
        let cursor_pos = self.cursor_display_width();

        if cursor_pos < self.scroll {
            self.scroll = cursor_pos;
        } else if visible_width > 0 && cursor_pos >= self.scroll + visible_width {
            self.scroll = cursor_pos - visible_width + 1;
        }
    }

    /// Render as a single borderless line, with a block cursor when focused
    pub fn render_line(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Apply scroll: skip characters until the scroll offset, then take
        // what fits.
        let visible_width = area.width as usize;
        let mut skipped = 0;
        let mut visible = String::new();
        let mut used = 0;
        for c in self.content.chars() {
            let char_width = c.to_string().width();
            if skipped < self.scroll {
                skipped += char_width;
                continue;
            }
            if used + char_width > visible_width {
                break;
            }
            visible.push(c);
            used += char_width;
        }

        let style = if self.focused {
            theme.base_style()
        } else {
            theme.dim_style()
        };
        buf.set_stringn(area.x, area.y, &visible, visible_width, style);

        // Block cursor
        if self.focused {
            let cursor_x = self.cursor_display_width().saturating_sub(self.scroll);
            if cursor_x < area.width as usize {
                let x = area.x + cursor_x as u16;
                if let Some(cell) = buf.cell_mut((x, area.y)) {
                    cell.set_style(Style::default().bg(theme.accent).fg(theme.bg));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_cursor_at_end() {
        let mut input = InputBox::new("ab");
        input.handle_action(&Action::Char('c'), 20);
        assert_eq!(input.content(), "abc");
    }

    #[test]
    fn test_edit_round_trip() {
        let mut input = InputBox::new("");
        for c in "pizza".chars() {
            input.handle_action(&Action::Char(c), 20);
        }
        input.handle_action(&Action::Backspace, 20);
        assert_eq!(input.content(), "pizz");

        input.handle_action(&Action::Home, 20);
        input.handle_action(&Action::Delete, 20);
        assert_eq!(input.content(), "izz");
    }

    #[test]
    fn test_backspace_at_start_is_ignored() {
        let mut input = InputBox::new("x");
        input.handle_action(&Action::Home, 20);
        assert!(!input.handle_action(&Action::Backspace, 20));
        assert_eq!(input.content(), "x");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = InputBox::new("héllo");
        input.handle_action(&Action::Backspace, 20);
        assert_eq!(input.content(), "héll");
        input.handle_action(&Action::Home, 20);
        input.handle_action(&Action::Right, 20);
        input.handle_action(&Action::Delete, 20);
        assert_eq!(input.content(), "hll");
    }

    #[test]
    fn test_clear_line() {
        let mut input = InputBox::new("anything");
        assert!(input.handle_action(&Action::ClearLine, 20));
        assert_eq!(input.content(), "");
    }

    #[test]
    fn test_spin_action_not_consumed() {
        let mut input = InputBox::new("a");
        assert!(!input.handle_action(&Action::Spin, 20));
        assert_eq!(input.content(), "a");
    }
}
