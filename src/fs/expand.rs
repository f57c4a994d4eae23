use super::tree::{DiskTree, NodeId};

impl DiskTree {
    /// Expand `id`, then keep expanding while the current node has exactly
    /// one child. Stops at a node with zero or several children.
    pub fn expand(&mut self, id: NodeId) {
        let mut current = id;
        loop {
            self.node_mut(current).expanded = true;
            match self.node(current).children() {
                [only] => current = *only,
                _ => break,
            }
        }
    }

    /// Collapse an expanded node (descendants keep their flags), or expand a
    /// collapsed one with the single-child cascade.
    pub fn toggle(&mut self, id: NodeId) {
        if self.node(id).expanded {
            self.node_mut(id).expanded = false;
        } else {
            self.expand(id);
        }
    }
}
