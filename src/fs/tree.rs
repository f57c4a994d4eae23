//! Arena-backed disk usage tree.
//!
//! Every node lives in one `Vec<Node>` and refers to its parent and children
//! by [`NodeId`]. A path registry gives O(1) parent lookup while the tree is
//! being built; after the scan it is only used for lookups by path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// Index of a node in the [`DiskTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "NodeId overflow");
        Self(index as u32)
    }

    /// The arena slot of this node.
    #[inline]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What a node is, with the data that only makes sense for that kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File {
        size: u64,
    },
    Directory {
        /// Sum of the sizes of every descendant file.
        size: u64,
        children: Vec<NodeId>,
    },
}

/// One filesystem entry.
#[derive(Debug, Clone)]
pub struct Node {
    pub path: PathBuf,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub expanded: bool,
}

impl Node {
    fn new(path: PathBuf, kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            path,
            kind,
            parent,
            expanded: false,
        }
    }

    /// Size in bytes: raw size for files, aggregate for directories.
    pub fn size(&self) -> u64 {
        match self.kind {
            NodeKind::File { size } | NodeKind::Directory { size, .. } => size,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Children in their current order; always empty for files.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Directory { children, .. } => children,
            NodeKind::File { .. } => &[],
        }
    }
}

/// The complete tree produced by a scan.
#[derive(Debug, Clone)]
pub struct DiskTree {
    nodes: Vec<Node>,
    registry: HashMap<PathBuf, NodeId>,
    root: NodeId,
}

impl DiskTree {
    /// Create a tree holding only the root directory.
    pub fn new(root: PathBuf) -> Self {
        let id = NodeId::new(0);
        let mut registry = HashMap::new();
        registry.insert(root.clone(), id);
        let node = Node::new(
            root,
            NodeKind::Directory {
                size: 0,
                children: Vec::new(),
            },
            None,
        );
        Self {
            nodes: vec![node],
            registry,
            root: id,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.idx()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.idx()]
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over every node id in registration order (parents first).
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Look up a node by its path.
    pub fn find(&self, path: &Path) -> Option<NodeId> {
        self.registry.get(path).copied()
    }

    /// Register a directory under its already-registered parent.
    pub fn insert_dir(&mut self, path: PathBuf) -> Result<NodeId> {
        self.insert(
            path,
            NodeKind::Directory {
                size: 0,
                children: Vec::new(),
            },
        )
    }

    /// Register a file under its already-registered parent and add its size
    /// to every ancestor.
    pub fn insert_file(&mut self, path: PathBuf, size: u64) -> Result<NodeId> {
        let id = self.insert(path, NodeKind::File { size })?;
        self.add_to_ancestors(id, size);
        Ok(id)
    }

    fn insert(&mut self, path: PathBuf, kind: NodeKind) -> Result<NodeId> {
        let parent = path
            .parent()
            .and_then(|p| self.find(p))
            .filter(|p| self.nodes[p.idx()].is_dir())
            .ok_or_else(|| AppError::UnrootedEntry(path.clone()))?;

        let id = NodeId::new(self.nodes.len());
        self.registry.insert(path.clone(), id);
        self.nodes.push(Node::new(path, kind, Some(parent)));

        if let NodeKind::Directory { children, .. } = &mut self.nodes[parent.idx()].kind {
            children.push(id);
        }
        Ok(id)
    }

    /// Walk up from `id` through the parent chain, adding `size` to each
    /// directory on the way to the root.
    fn add_to_ancestors(&mut self, id: NodeId, size: u64) {
        let mut current = self.nodes[id.idx()].parent;
        while let Some(ancestor) = current {
            let node = &mut self.nodes[ancestor.idx()];
            if let NodeKind::Directory { size: total, .. } = &mut node.kind {
                *total += size;
            }
            current = node.parent;
        }
    }

    /// Take a directory's child list out so it can be reordered while the
    /// rest of the arena stays borrowable. Files yield an empty list.
    pub(crate) fn take_children(&mut self, id: NodeId) -> Vec<NodeId> {
        match &mut self.nodes[id.idx()].kind {
            NodeKind::Directory { children, .. } => std::mem::take(children),
            NodeKind::File { .. } => Vec::new(),
        }
    }

    pub(crate) fn put_children(&mut self, id: NodeId, new_children: Vec<NodeId>) {
        if let NodeKind::Directory { children, .. } = &mut self.nodes[id.idx()].kind {
            *children = new_children;
        }
    }
}
