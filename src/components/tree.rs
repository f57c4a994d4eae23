use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::app::{App, FlatItem};
use crate::theme::ThemeColors;

/// Tree widget that renders the visible rows with box-drawing connectors.
pub struct TreeWidget<'a> {
    app: &'a App,
    theme: &'a ThemeColors,
    block: Option<Block<'a>>,
}

impl<'a> TreeWidget<'a> {
    pub fn new(app: &'a App, theme: &'a ThemeColors) -> Self {
        Self {
            app,
            theme,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Build the connector prefix for a row.
    ///
    /// Each ancestor level draws a continuation line unless that ancestor
    /// was the last of its siblings.
    fn build_prefix(item: &FlatItem, items: &[FlatItem], item_index: usize) -> String {
        if item.depth == 0 {
            return String::new();
        }

        let mut prefix = String::new();
        for d in 1..item.depth {
            let mut ancestor_is_last = false;
            for j in (0..item_index).rev() {
                if items[j].depth == d {
                    ancestor_is_last = items[j].is_last_sibling;
                    break;
                }
                if items[j].depth < d {
                    break;
                }
            }
            prefix.push_str(if ancestor_is_last { "   " } else { "│  " });
        }

        prefix.push_str(if item.is_last_sibling { "└──" } else { "├──" });
        prefix
    }
}

impl<'a> Widget for TreeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_area = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        let items = &self.app.flat_items;
        let visible_height = inner_area.height as usize;
        if items.is_empty() || visible_height == 0 {
            return;
        }

        let rows = items
            .iter()
            .enumerate()
            .skip(self.app.scroll_offset)
            .take(visible_height);

        for (i, (idx, item)) in rows.enumerate() {
            let y = inner_area.y + i as u16;

            let text_style = if idx == self.app.selected_index {
                Style::default()
                    .bg(self.theme.selected_bg)
                    .fg(self.theme.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else if item.selectable {
                Style::default().fg(self.theme.dir_fg)
            } else {
                Style::default().fg(self.theme.file_fg)
            };

            let line = Line::from(vec![
                Span::styled(
                    Self::build_prefix(item, items, idx),
                    Style::default().fg(self.theme.graphics_fg),
                ),
                Span::styled(self.app.label(item.id), text_style),
            ]);
            buf.set_line(inner_area.x, y, &line, inner_area.width);
        }
    }
}
