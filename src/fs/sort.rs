use std::cmp::Ordering;

use super::tree::{DiskTree, Node};

/// Sibling ordering applied to every directory in the tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortPolicy {
    /// Case-insensitive path, case-sensitive path as tie-break.
    NameAscending,
    /// Largest first; equal sizes fall back to name order.
    #[default]
    SizeDescending,
}

impl SortPolicy {
    /// Parse the `sort_by` config value. Unknown values keep the default.
    pub fn from_config(s: &str) -> Self {
        match s {
            "name" => SortPolicy::NameAscending,
            _ => SortPolicy::SizeDescending,
        }
    }

    /// Display label for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            SortPolicy::NameAscending => "Name",
            SortPolicy::SizeDescending => "Size",
        }
    }

    /// Advance the two-step cycle.
    pub fn next(self) -> Self {
        match self {
            SortPolicy::NameAscending => SortPolicy::SizeDescending,
            SortPolicy::SizeDescending => SortPolicy::NameAscending,
        }
    }

    /// Compare two siblings under this policy.
    pub fn compare(self, a: &Node, b: &Node) -> Ordering {
        match self {
            SortPolicy::NameAscending => compare_names(a, b),
            SortPolicy::SizeDescending => b
                .size()
                .cmp(&a.size())
                .then_with(|| compare_names(a, b)),
        }
    }
}

fn compare_names(a: &Node, b: &Node) -> Ordering {
    let la = a.path.to_string_lossy().to_lowercase();
    let lb = b.path.to_string_lossy().to_lowercase();
    la.cmp(&lb)
        .then_with(|| a.path.as_os_str().cmp(b.path.as_os_str()))
}

impl DiskTree {
    /// Re-order the children of every directory under `policy`.
    ///
    /// Only child order changes; sizes and expansion flags are untouched.
    pub fn sort(&mut self, policy: SortPolicy) {
        let ids: Vec<_> = self.ids().collect();
        for id in ids {
            let mut children = self.take_children(id);
            if children.len() > 1 {
                children.sort_by(|a, b| policy.compare(self.node(*a), self.node(*b)));
            }
            self.put_children(id, children);
        }
    }
}
