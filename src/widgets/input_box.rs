use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CURSOR, COLOR_TEXT};

/// A single-line text input with cursor handling and horizontal scrolling.
///
/// Backs the chat prompt and the drive search box. Multi-line editing is
/// deliberately out of scope; messages are single paragraphs.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    /// The text content of the input box
    content: String,
    /// Current cursor position (character index)
    cursor: usize,
    /// Scroll offset for horizontal scrolling
    scroll_offset: usize,
}

impl InputBox {
    /// Create a new empty InputBox
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.content.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (Backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.byte_index(self.cursor);
            self.content.remove(byte_idx);
        }
    }

    /// Delete the character at the cursor (Delete)
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_len() {
            let byte_idx = self.byte_index(self.cursor);
            self.content.remove(byte_idx);
        }
    }

    /// Move cursor one position left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor one position right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to the beginning
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// The current text
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Clear all content and reset the cursor
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Take the content out, leaving the box empty
    pub fn take(&mut self) -> String {
        let content = std::mem::take(&mut self.content);
        self.cursor = 0;
        self.scroll_offset = 0;
        content
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Render with a bordered block and the given title
    pub fn render_with_title(&self, area: Rect, buf: &mut Buffer, title: &str, focused: bool) {
        let inner_width = area.width.saturating_sub(2) as usize;

        let mut scroll_offset = self.scroll_offset;
        if inner_width > 0 {
            if self.cursor < scroll_offset {
                scroll_offset = self.cursor;
            }
            if self.cursor >= scroll_offset + inner_width {
                scroll_offset = self.cursor - inner_width + 1;
            }
        }

        let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title.to_string());
        block.render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: inner_width as u16,
            height: if area.height > 2 { 1 } else { 0 },
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let visible: String = self
            .content
            .chars()
            .skip(scroll_offset)
            .take(inner_width)
            .collect();
        buf.set_string(inner.x, inner.y, &visible, Style::default().fg(COLOR_TEXT));

        if focused {
            let cursor_x = (self.cursor - scroll_offset) as u16;
            if cursor_x < inner.width {
                let under_cursor = self
                    .content
                    .chars()
                    .nth(self.cursor)
                    .unwrap_or(' ')
                    .to_string();
                buf.set_string(
                    inner.x + cursor_x,
                    inner.y,
                    under_cursor,
                    Style::default().fg(COLOR_CURSOR.0).bg(COLOR_CURSOR.1),
                );
            }
        }
    }
}

/// A renderable wrapper for InputBox that implements the Widget trait
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    focused: bool,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, focused: bool) -> Self {
        Self {
            input_box,
            title,
            focused,
        }
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box
            .render_with_title(area, buf, self.title, self.focused);
    }
}
