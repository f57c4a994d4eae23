use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::app::App;
use crate::components::status_bar::StatusBarWidget;
use crate::components::tree::TreeWidget;
use crate::fs::size::format_size;
use crate::theme::ThemeColors;

/// Render the application UI.
pub fn render(app: &mut App, theme: &ThemeColors, frame: &mut Frame) {
    let [tree_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    // Keep the selected row visible inside the border.
    let visible_height = tree_area.height.saturating_sub(2) as usize;
    app.update_scroll(visible_height);

    let root = app.tree.node(app.tree.root());
    let block = Block::default()
        .title(format!(" {} ", root.path.display()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_fg));
    frame.render_widget(TreeWidget::new(app, theme).block(block), tree_area);

    let total = format_size(root.size());
    let status = StatusBarWidget::new(&total, app.sort_policy.label(), app.cycle_sort_key, theme);
    frame.render_widget(status, status_area);
}
