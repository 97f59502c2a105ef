//! Binary search tree sessions
//!
//! Unlike the other engines, a [`TreeSession`] outlives a single call: it owns
//! the tree and an append-only step history, and every `insert`/`search`
//! appends to that history. Nodes live in an arena keyed by [`NodeId`] so the
//! recursive insert can snapshot the whole tree while it is halfway down a
//! path.

use super::{Meta, RunResult};
use crate::snapshot::{Dir, NodeId, Step, StepRecorder, TreeFrame, TreeHighlight, TreeNode, TreeOp};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Keys a default session starts with
pub const DEFAULT_SEED: [i64; 9] = [8, 3, 10, 1, 6, 14, 4, 7, 13];

pub const PSEUDOCODE: &[&str] = &[
    "struct Node { int key; Node *left, *right; }",
    "Node* insert(Node* root, int key)",
    "    if (root == NULL) return new Node(key)",
    "    if (key < root->key) root->left = insert(root->left, key)",
    "    else if (key > root->key) root->right = insert(root->right, key)",
    "    return root",
    "Node* search(Node* root, int key)",
    "    if (root == NULL || root->key == key) return root",
    "    if (key < root->key) return search(root->left, key)",
    "    else return search(root->right, key)",
];

pub const META: Meta = Meta::fixed(
    "O(log n)",
    "O(log n)",
    "O(n)",
    "O(h)",
    "Unbalanced BST. Worst case degenerates to O(n). Use AVL/Red-Black for balancing.",
);

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Source of node ids for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeIdAllocator {
    /// Shared counter: ids are unique across every session in the process
    ProcessWide,
    /// Private sequence, useful for reproducible output
    Local { next: NodeId },
}

impl NodeIdAllocator {
    pub fn process_wide() -> Self {
        NodeIdAllocator::ProcessWide
    }

    pub fn starting_at(first: NodeId) -> Self {
        NodeIdAllocator::Local { next: first }
    }

    pub fn next_id(&mut self) -> NodeId {
        match self {
            NodeIdAllocator::ProcessWide => NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed),
            NodeIdAllocator::Local { next } => {
                let id = *next;
                *next += 1;
                id
            }
        }
    }
}

impl Default for NodeIdAllocator {
    fn default() -> Self {
        NodeIdAllocator::process_wide()
    }
}

#[derive(Debug, Clone, Copy)]
struct ArenaNode {
    key: i64,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// A BST plus its recorded history
#[derive(Debug, Clone)]
pub struct TreeSession {
    nodes: FxHashMap<NodeId, ArenaNode>,
    root: Option<NodeId>,
    ids: NodeIdAllocator,
    recorder: StepRecorder<TreeFrame>,
}

impl TreeSession {
    /// Session drawing ids from the process-wide counter, seeded with
    /// `initial_keys` inserted in order
    pub fn new(initial_keys: &[i64]) -> Self {
        Self::with_allocator(initial_keys, NodeIdAllocator::process_wide())
    }

    pub fn with_allocator(initial_keys: &[i64], ids: NodeIdAllocator) -> Self {
        let mut session = TreeSession {
            nodes: FxHashMap::default(),
            root: None,
            ids,
            recorder: StepRecorder::new(),
        };
        for &key in initial_keys {
            session.insert(key);
        }
        session
    }

    /// Insert `key`, recording every slot visited on the way down and every
    /// return on the way back up. Inserting a key already present changes
    /// nothing but its steps are still recorded.
    pub fn insert(&mut self, key: i64) {
        let before = self.recorder.len();
        let root = self.insert_at(self.root, key);
        self.root = Some(root);
        tracing::trace!(
            key,
            steps = self.recorder.len() - before,
            size = self.nodes.len(),
            "bst insert"
        );
    }

    fn insert_at(&mut self, slot: Option<NodeId>, key: i64) -> NodeId {
        self.record(&[2, 3], TreeHighlight::new(TreeOp::InsertVisit, slot, key));

        let Some((id, node)) = slot.and_then(|id| self.nodes.get(&id).map(|n| (id, *n))) else {
            let id = self.ids.next_id();
            // Recorded before the node is linked into the tree
            self.record(&[2], TreeHighlight::new(TreeOp::InsertNew, Some(id), key));
            self.nodes.insert(
                id,
                ArenaNode {
                    key,
                    left: None,
                    right: None,
                },
            );
            return id;
        };

        if key < node.key {
            self.record(&[4], TreeHighlight::new(TreeOp::Cmp, Some(id), key).toward(Dir::L));
            let child = self.insert_at(node.left, key);
            self.link(id, Dir::L, child);
        } else if key > node.key {
            self.record(&[5], TreeHighlight::new(TreeOp::Cmp, Some(id), key).toward(Dir::R));
            let child = self.insert_at(node.right, key);
            self.link(id, Dir::R, child);
        }

        self.record(&[6], TreeHighlight::new(TreeOp::Ret, Some(id), key));
        id
    }

    fn link(&mut self, parent: NodeId, dir: Dir, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(&parent) {
            match dir {
                Dir::L => node.left = Some(child),
                Dir::R => node.right = Some(child),
            }
        }
    }

    /// Walk from the root toward `key`. The final step reports whether it
    /// was found.
    pub fn search(&mut self, key: i64) {
        let before = self.recorder.len();
        let mut current = self.root;

        loop {
            self.record(&[7, 8], TreeHighlight::new(TreeOp::SearchVisit, current, key));
            let Some((id, node)) = current.and_then(|id| self.nodes.get(&id).map(|n| (id, *n))) else {
                break;
            };
            if node.key == key {
                break;
            }
            if key < node.key {
                self.record(&[9], TreeHighlight::new(TreeOp::Cmp, Some(id), key).toward(Dir::L));
                current = node.left;
            } else {
                self.record(&[10], TreeHighlight::new(TreeOp::Cmp, Some(id), key).toward(Dir::R));
                current = node.right;
            }
        }

        let found = current.is_some();
        self.record(
            &[8],
            TreeHighlight::new(TreeOp::SearchResult, current, key).with_found(found),
        );
        tracing::trace!(key, found, steps = self.recorder.len() - before, "bst search");
    }

    fn record(&mut self, lines: &[usize], highlight: TreeHighlight) {
        let frame = TreeFrame {
            tree: self.snapshot(),
            highlight,
        };
        self.recorder.record(lines, frame);
    }

    /// Deep value copy of the current tree
    pub fn snapshot(&self) -> Option<TreeNode> {
        self.root.and_then(|id| self.copy_subtree(id))
    }

    fn copy_subtree(&self, id: NodeId) -> Option<TreeNode> {
        let node = self.nodes.get(&id)?;
        Some(TreeNode {
            id,
            key: node.key,
            left: node.left.and_then(|c| self.copy_subtree(c)).map(Box::new),
            right: node.right.and_then(|c| self.copy_subtree(c)).map(Box::new),
        })
    }

    pub fn contains(&self, key: i64) -> bool {
        let mut current = self.root;
        while let Some(node) = current.and_then(|id| self.nodes.get(&id)) {
            if key == node.key {
                return true;
            }
            current = if key < node.key { node.left } else { node.right };
        }
        false
    }

    pub fn keys_in_order(&self) -> Vec<i64> {
        self.snapshot()
            .map(|root| root.keys_in_order())
            .unwrap_or_default()
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn steps(&self) -> &[Step<TreeFrame>] {
        self.recorder.steps()
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.recorder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recorder.is_empty()
    }

    /// Forget the recorded steps but keep the tree
    pub fn clear_history(&mut self) {
        self.recorder.clear();
    }

    /// Drop the tree and the history, then insert `keys` afresh
    pub fn reset(&mut self, keys: &[i64]) {
        self.nodes.clear();
        self.root = None;
        self.recorder.clear();
        for &key in keys {
            self.insert(key);
        }
    }

    pub fn pseudocode(&self) -> &'static [&'static str] {
        PSEUDOCODE
    }

    pub fn meta(&self) -> Meta {
        META
    }

    pub fn memory_usage(&self) -> usize {
        self.recorder.memory_usage()
    }

    /// Copy of the history in the same shape the other engines return
    pub fn to_run_result(&self) -> RunResult<TreeFrame> {
        RunResult {
            steps: self.recorder.steps().to_vec(),
            pseudocode: PSEUDOCODE,
            meta: META,
        }
    }
}

impl Default for TreeSession {
    fn default() -> Self {
        TreeSession::new(&DEFAULT_SEED)
    }
}
