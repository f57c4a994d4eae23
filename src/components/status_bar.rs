use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::ThemeColors;

/// One-line footer: total size and sort mode on the left, key hints on the
/// right.
pub struct StatusBarWidget<'a> {
    total: &'a str,
    sort_label: &'a str,
    sort_key: char,
    theme: &'a ThemeColors,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(
        total: &'a str,
        sort_label: &'a str,
        sort_key: char,
        theme: &'a ThemeColors,
    ) -> Self {
        Self {
            total,
            sort_label,
            sort_key,
            theme,
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let base = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);
        buf.set_style(area, base);

        let left = Line::from(vec![
            Span::styled(format!(" Total: {} ", self.total.trim_start()), base),
            Span::styled(
                format!(" Sort: {} ", self.sort_label),
                base.fg(self.theme.accent_fg).add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(area.x, area.y, &left, area.width);

        let hints = format!("{}:sort  Enter:expand/collapse  q:quit ", self.sort_key);
        let left_width = left.width() as u16;
        let hints_width = hints.chars().count() as u16;
        if left_width + hints_width < area.width {
            let x = area.x + area.width - hints_width;
            buf.set_line(x, area.y, &Line::from(Span::styled(hints, base)), hints_width);
        }
    }
}
