use crate::config::AppConfig;
use crate::fs::size;
use crate::fs::sort::SortPolicy;
use crate::fs::tree::{DiskTree, NodeId};

/// One visible row of the tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatItem {
    pub id: NodeId,
    pub depth: usize,
    pub is_last_sibling: bool,
    /// Only directories take the selection cursor.
    pub selectable: bool,
}

/// Main application state.
pub struct App {
    pub tree: DiskTree,
    pub sort_policy: SortPolicy,
    /// Display text per node, indexed by `NodeId`. Computed once after the
    /// scan; re-sorting does not touch it.
    pub labels: Vec<String>,
    pub flat_items: Vec<FlatItem>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    /// Rows visible in the last frame, used for paging.
    pub page_height: usize,
    pub cycle_sort_key: char,
    pub should_quit: bool,
}

impl App {
    /// Take ownership of a scanned tree, apply the initial sort and expand
    /// the root.
    pub fn new(mut tree: DiskTree, config: &AppConfig) -> Self {
        let sort_policy = SortPolicy::from_config(config.sort_by());
        tree.sort(sort_policy);

        let labels = tree.ids().map(|id| size::label(tree.node(id))).collect();

        let root = tree.root();
        tree.expand(root);

        let mut app = Self {
            tree,
            sort_policy,
            labels,
            flat_items: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            page_height: 0,
            cycle_sort_key: config.cycle_sort_key(),
            should_quit: false,
        };
        app.flatten();
        app
    }

    /// Rebuild the visible rows from the tree, keeping the cursor on the
    /// same node when it is still visible.
    pub fn flatten(&mut self) {
        let selected = self.selected_node();

        self.flat_items.clear();
        let mut stack = vec![(self.tree.root(), 0usize, true)];
        while let Some((id, depth, is_last)) = stack.pop() {
            let node = self.tree.node(id);
            self.flat_items.push(FlatItem {
                id,
                depth,
                is_last_sibling: is_last,
                selectable: node.is_dir(),
            });
            if node.expanded {
                let children = node.children();
                for (i, child) in children.iter().enumerate().rev() {
                    stack.push((*child, depth + 1, i == children.len() - 1));
                }
            }
        }

        self.selected_index = selected
            .and_then(|id| self.flat_items.iter().position(|item| item.id == id))
            .unwrap_or_else(|| self.selected_index.min(self.flat_items.len().saturating_sub(1)));
    }

    /// Node under the cursor.
    pub fn selected_node(&self) -> Option<NodeId> {
        self.flat_items.get(self.selected_index).map(|item| item.id)
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id.idx()]
    }

    /// Advance the sort policy and re-order the whole tree.
    pub fn cycle_sort(&mut self) {
        self.sort_policy = self.sort_policy.next();
        self.tree.sort(self.sort_policy);
        self.flatten();
        tracing::debug!(policy = self.sort_policy.label(), "sort policy changed");
    }

    /// Selection callback: toggle the node under the cursor.
    pub fn select(&mut self) {
        if let Some(id) = self.selected_node() {
            self.tree.toggle(id);
            self.flatten();
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn next_selectable(&self, from: usize) -> Option<usize> {
        (from..self.flat_items.len()).find(|&i| self.flat_items[i].selectable)
    }

    fn prev_selectable(&self, from: usize) -> Option<usize> {
        (0..=from.min(self.flat_items.len().saturating_sub(1)))
            .rev()
            .find(|&i| self.flat_items[i].selectable)
    }

    /// Move selection down to the next directory row.
    pub fn select_next(&mut self) {
        if let Some(i) = self.next_selectable(self.selected_index + 1) {
            self.selected_index = i;
        }
    }

    /// Move selection up to the previous directory row.
    pub fn select_previous(&mut self) {
        if self.selected_index == 0 {
            return;
        }
        if let Some(i) = self.prev_selectable(self.selected_index - 1) {
            self.selected_index = i;
        }
    }

    /// Jump to the first selectable row.
    pub fn select_first(&mut self) {
        if let Some(i) = self.next_selectable(0) {
            self.selected_index = i;
        }
    }

    /// Jump to the last selectable row.
    pub fn select_last(&mut self) {
        if let Some(i) = self.prev_selectable(self.flat_items.len().saturating_sub(1)) {
            self.selected_index = i;
        }
    }

    pub fn page_down(&mut self) {
        let target = self.selected_index + self.page_height.max(1);
        if let Some(i) = self
            .prev_selectable(target)
            .filter(|&i| i > self.selected_index)
        {
            self.selected_index = i;
        }
    }

    pub fn page_up(&mut self) {
        let target = self.selected_index.saturating_sub(self.page_height.max(1));
        if let Some(i) = self
            .next_selectable(target)
            .filter(|&i| i < self.selected_index)
        {
            self.selected_index = i;
        }
    }

    /// Update the scroll offset so the selected row stays visible.
    pub fn update_scroll(&mut self, visible_height: usize) {
        self.page_height = visible_height;
        if visible_height == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected_index - visible_height + 1;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    /// `/r`: files `big` (4096) and `small` (10), directory `d` holding
    /// `d/e/f1` (100) and `d/g` (5), and an empty directory `empty`.
    pub(crate) fn setup_app() -> App {
        let root = PathBuf::from("/r");
        let mut tree = DiskTree::new(root.clone());
        tree.insert_file(root.join("big"), 4096).unwrap();
        tree.insert_dir(root.join("d")).unwrap();
        tree.insert_dir(root.join("d/e")).unwrap();
        tree.insert_file(root.join("d/e/f1"), 100).unwrap();
        tree.insert_file(root.join("d/g"), 5).unwrap();
        tree.insert_dir(root.join("empty")).unwrap();
        tree.insert_file(root.join("small"), 10).unwrap();
        App::new(tree, &AppConfig::default())
    }

    fn visible_paths(app: &App) -> Vec<PathBuf> {
        app.flat_items
            .iter()
            .map(|item| app.tree.node(item.id).path.clone())
            .collect()
    }

    fn select_path(app: &mut App, path: &str) {
        let id = app.tree.find(Path::new(path)).unwrap();
        app.selected_index = app.flat_items.iter().position(|i| i.id == id).unwrap();
    }

    #[test]
    fn new_app_sorts_by_size_and_expands_root() {
        let app = setup_app();
        assert_eq!(app.sort_policy, SortPolicy::SizeDescending);
        assert!(app.tree.node(app.tree.root()).expanded);
        assert_eq!(
            visible_paths(&app),
            vec![
                PathBuf::from("/r"),
                PathBuf::from("/r/big"),
                PathBuf::from("/r/d"),
                PathBuf::from("/r/small"),
                PathBuf::from("/r/empty"),
            ]
        );
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn name_sort_from_config() {
        let root = PathBuf::from("/r");
        let mut tree = DiskTree::new(root.clone());
        tree.insert_file(root.join("b"), 1).unwrap();
        tree.insert_file(root.join("a"), 2).unwrap();
        let config: AppConfig = toml::from_str("[tree]\nsort_by = \"name\"\n").unwrap();
        let app = App::new(tree, &config);
        assert_eq!(app.sort_policy, SortPolicy::NameAscending);
        assert_eq!(
            visible_paths(&app)[1..],
            [PathBuf::from("/r/a"), PathBuf::from("/r/b")]
        );
    }

    #[test]
    fn labels_are_computed_once() {
        let mut app = setup_app();
        let root = app.tree.root();
        assert_eq!(app.label(root), "  4 KiB /r");
        let before = app.labels.clone();
        app.cycle_sort();
        assert_eq!(app.labels, before);
    }

    #[test]
    fn flatten_marks_last_sibling_and_depth() {
        let app = setup_app();
        let last = app.flat_items.last().unwrap();
        assert!(last.is_last_sibling);
        assert_eq!(last.depth, 1);
        assert_eq!(app.flat_items[0].depth, 0);
        assert!(!app.flat_items[1].is_last_sibling);
    }

    #[test]
    fn only_directories_are_selectable() {
        let app = setup_app();
        let selectable: Vec<bool> = app.flat_items.iter().map(|i| i.selectable).collect();
        assert_eq!(selectable, vec![true, false, true, false, true]);
    }

    #[test]
    fn navigation_skips_files() {
        let mut app = setup_app();
        app.select_next();
        assert_eq!(visible_paths(&app)[app.selected_index], PathBuf::from("/r/d"));
        app.select_next();
        assert_eq!(visible_paths(&app)[app.selected_index], PathBuf::from("/r/empty"));
        app.select_next();
        assert_eq!(visible_paths(&app)[app.selected_index], PathBuf::from("/r/empty"));
        app.select_previous();
        assert_eq!(visible_paths(&app)[app.selected_index], PathBuf::from("/r/d"));
        app.select_previous();
        assert_eq!(app.selected_index, 0);
        app.select_previous();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn first_and_last_selectable() {
        let mut app = setup_app();
        app.select_last();
        assert_eq!(visible_paths(&app)[app.selected_index], PathBuf::from("/r/empty"));
        app.select_first();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn paging_lands_on_directories() {
        let mut app = setup_app();
        app.page_height = 3;
        app.page_down();
        assert_eq!(visible_paths(&app)[app.selected_index], PathBuf::from("/r/d"));
        app.page_down();
        assert_eq!(visible_paths(&app)[app.selected_index], PathBuf::from("/r/empty"));
        app.page_up();
        assert_eq!(visible_paths(&app)[app.selected_index], PathBuf::from("/r/d"));
        app.page_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn select_expands_with_cascade() {
        let mut app = setup_app();
        select_path(&mut app, "/r/d");
        app.select();
        assert_eq!(
            visible_paths(&app),
            vec![
                PathBuf::from("/r"),
                PathBuf::from("/r/big"),
                PathBuf::from("/r/d"),
                PathBuf::from("/r/d/e"),
                PathBuf::from("/r/d/g"),
                PathBuf::from("/r/small"),
                PathBuf::from("/r/empty"),
            ]
        );
        // d has two children, so e stays collapsed
        let e = app.tree.find(Path::new("/r/d/e")).unwrap();
        assert!(!app.tree.node(e).expanded);
        assert_eq!(visible_paths(&app)[app.selected_index], PathBuf::from("/r/d"));
    }

    #[test]
    fn select_collapses_expanded_node() {
        let mut app = setup_app();
        app.select();
        assert_eq!(app.flat_items.len(), 1);
        app.select();
        assert_eq!(app.flat_items.len(), 5);
    }

    #[test]
    fn cycle_sort_reorders_and_keeps_cursor() {
        let mut app = setup_app();
        select_path(&mut app, "/r/d");
        app.cycle_sort();
        assert_eq!(app.sort_policy, SortPolicy::NameAscending);
        assert_eq!(
            visible_paths(&app),
            vec![
                PathBuf::from("/r"),
                PathBuf::from("/r/big"),
                PathBuf::from("/r/d"),
                PathBuf::from("/r/empty"),
                PathBuf::from("/r/small"),
            ]
        );
        assert_eq!(visible_paths(&app)[app.selected_index], PathBuf::from("/r/d"));

        app.cycle_sort();
        assert_eq!(app.sort_policy, SortPolicy::SizeDescending);
        assert_eq!(visible_paths(&app)[3], PathBuf::from("/r/small"));
    }

    #[test]
    fn hidden_cursor_is_clamped() {
        let mut app = setup_app();
        select_path(&mut app, "/r/d");
        app.select();
        select_path(&mut app, "/r/d/e");
        app.select();
        assert!(visible_paths(&app).contains(&PathBuf::from("/r/d/e/f1")));

        // collapse the root: e disappears, cursor falls back into range
        let root = app.tree.root();
        app.tree.toggle(root);
        app.flatten();
        assert_eq!(app.flat_items.len(), 1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn update_scroll_follows_selection() {
        let mut app = setup_app();
        app.selected_index = 4;
        app.update_scroll(2);
        assert_eq!(app.scroll_offset, 3);
        app.selected_index = 0;
        app.update_scroll(2);
        assert_eq!(app.scroll_offset, 0);
        assert_eq!(app.page_height, 2);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = setup_app();
        assert!(!app.should_quit);
        app.quit();
        assert!(app.should_quit);
    }
}
