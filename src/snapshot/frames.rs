//! Frame types recorded by each algorithm family
//!
//! Frames only ever hold owned data. Constructors such as
//! [`ArrayFrame::capture`] take borrowed working state and copy it.

use super::Footprint;
use serde::{Serialize, Serializer};

/// Stable identity of a BST node
pub type NodeId = u64;

/// Inclusive index bounds of a divide-and-conquer segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub low: usize,
    pub high: usize,
}

/// Role markers for one array step
///
/// Each role is an ordered set: repeated indices are dropped, first
/// occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marks {
    pub selected: Vec<usize>,
    pub compared: Vec<usize>,
    pub swapped: Vec<usize>,
    pub segment: Option<Segment>,
}

impl Marks {
    pub fn none() -> Self {
        Marks::default()
    }

    pub fn select(mut self, indices: &[usize]) -> Self {
        self.selected = index_set(indices);
        self
    }

    pub fn compare(mut self, indices: &[usize]) -> Self {
        self.compared = index_set(indices);
        self
    }

    pub fn swap(mut self, indices: &[usize]) -> Self {
        self.swapped = index_set(indices);
        self
    }

    pub fn within(mut self, low: usize, high: usize) -> Self {
        self.segment = Some(Segment { low, high });
        self
    }

    /// Same as [`Marks::within`] but keeps an already-optional segment
    pub fn within_opt(mut self, segment: Option<Segment>) -> Self {
        self.segment = segment;
        self
    }
}

fn index_set(indices: &[usize]) -> Vec<usize> {
    let mut set = Vec::with_capacity(indices.len());
    for &idx in indices {
        if !set.contains(&idx) {
            set.push(idx);
        }
    }
    set
}

/// Sorting step payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayFrame {
    pub array: Vec<f64>,
    pub selected: Vec<usize>,
    pub compared: Vec<usize>,
    pub swapped: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<Segment>,
}

impl ArrayFrame {
    /// Copy the working array together with its role markers
    pub fn capture(array: &[f64], marks: Marks) -> Self {
        ArrayFrame {
            array: array.to_vec(),
            selected: marks.selected,
            compared: marks.compared,
            swapped: marks.swapped,
            segment: marks.segment,
        }
    }
}

impl Footprint for ArrayFrame {
    fn estimated_size(&self) -> usize {
        self.array.len() * 8
            + (self.selected.len() + self.compared.len() + self.swapped.len()) * 8
            + 16
    }
}

/// Binary search bounds. `high` can drop to -1 once the window is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub low: i64,
    pub high: i64,
}

impl Window {
    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }

    pub fn contains(&self, index: usize) -> bool {
        let index = index as i64;
        self.low <= index && index <= self.high
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchCursor {
    /// Walk over the index-chained list view (`next(i) = i + 1`)
    Linear {
        current: Option<usize>,
        compare: Option<usize>,
    },
    Binary {
        window: Option<Window>,
        mid: Option<usize>,
    },
}

/// Terminal result of a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found(usize),
    NotFound,
}

impl Outcome {
    /// Index form used by renderers: `-1` when not found
    pub fn as_index(&self) -> i64 {
        match self {
            Outcome::Found(index) => *index as i64,
            Outcome::NotFound => -1,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_index())
    }
}

/// Searching step payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFrame {
    pub array: Vec<f64>,
    pub target: f64,
    pub cursor: SearchCursor,
    #[serde(rename = "result", skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

impl SearchFrame {
    pub fn capture(array: &[f64], target: f64, cursor: SearchCursor) -> Self {
        SearchFrame {
            array: array.to_vec(),
            target,
            cursor,
            outcome: None,
        }
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn found(&self) -> bool {
        self.outcome.is_some_and(|o| o.is_found())
    }

    /// Successor of `index` in the chained view of the array
    pub fn next_of(&self, index: usize) -> Option<usize> {
        (index + 1 < self.array.len()).then_some(index + 1)
    }
}

impl Footprint for SearchFrame {
    fn estimated_size(&self) -> usize {
        self.array.len() * 8 + 48
    }
}

/// Pending vertices, by discipline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frontier {
    Queue(Vec<usize>),
    Stack(Vec<usize>),
}

impl Frontier {
    pub fn items(&self) -> &[usize] {
        match self {
            Frontier::Queue(items) | Frontier::Stack(items) => items,
        }
    }
}

/// Graph traversal step payload. Vertex references are indices into `nodes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphFrame {
    pub nodes: Vec<String>,
    /// Visitation order per vertex, 0 = not visited yet
    pub order: Vec<usize>,
    pub selected: Vec<usize>,
    pub compared: Vec<usize>,
    pub frontier: Frontier,
    /// Visited vertices in the order they were marked
    pub visited: Vec<usize>,
    pub current: Option<usize>,
    pub neighbor: Option<usize>,
}

impl GraphFrame {
    pub fn name(&self, index: usize) -> &str {
        self.nodes.get(index).map(String::as_str).unwrap_or("?")
    }
}

impl Footprint for GraphFrame {
    fn estimated_size(&self) -> usize {
        let names: usize = self.nodes.iter().map(|n| n.len() + 24).sum();
        names + (self.order.len() + self.frontier.items().len() + self.visited.len()) * 8 + 32
    }
}

/// Owned copy of a BST subtree; child links are ownership edges
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub key: i64,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn leaf(id: NodeId, key: i64) -> Self {
        TreeNode {
            id,
            key,
            left: None,
            right: None,
        }
    }

    /// Number of nodes in this subtree
    pub fn size(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.size()) + self.right.as_ref().map_or(0, |n| n.size())
    }

    pub fn height(&self) -> usize {
        1 + self
            .left
            .as_ref()
            .map_or(0, |n| n.height())
            .max(self.right.as_ref().map_or(0, |n| n.height()))
    }

    /// In-order key listing
    pub fn keys_in_order(&self) -> Vec<i64> {
        let mut keys = Vec::with_capacity(self.size());
        self.collect_keys(&mut keys);
        keys
    }

    fn collect_keys(&self, keys: &mut Vec<i64>) {
        if let Some(left) = &self.left {
            left.collect_keys(keys);
        }
        keys.push(self.key);
        if let Some(right) = &self.right {
            right.collect_keys(keys);
        }
    }

    /// Find the node carrying `id` anywhere in this subtree
    pub fn find_id(&self, id: NodeId) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.left
            .as_deref()
            .and_then(|n| n.find_id(id))
            .or_else(|| self.right.as_deref().and_then(|n| n.find_id(id)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dir {
    L,
    R,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TreeOp {
    InsertVisit,
    InsertNew,
    Cmp,
    Ret,
    SearchVisit,
    SearchResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeHighlight {
    /// `None` when the step points at an empty slot
    pub node: Option<NodeId>,
    pub key: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<Dir>,
    pub op: TreeOp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<bool>,
}

impl TreeHighlight {
    pub fn new(op: TreeOp, node: Option<NodeId>, key: i64) -> Self {
        TreeHighlight {
            node,
            key,
            dir: None,
            op,
            found: None,
        }
    }

    pub fn toward(mut self, dir: Dir) -> Self {
        self.dir = Some(dir);
        self
    }

    pub fn with_found(mut self, found: bool) -> Self {
        self.found = Some(found);
        self
    }
}

/// BST step payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeFrame {
    pub tree: Option<TreeNode>,
    pub highlight: TreeHighlight,
}

impl Footprint for TreeFrame {
    fn estimated_size(&self) -> usize {
        self.tree.as_ref().map_or(0, |t| t.size() * 40) + 32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_drop_repeated_indices() {
        let marks = Marks::none().select(&[2, 2, 0]).compare(&[1, 1]);
        assert_eq!(marks.selected, vec![2, 0]);
        assert_eq!(marks.compared, vec![1]);
        assert!(marks.swapped.is_empty());
    }

    #[test]
    fn test_outcome_serializes_as_index() {
        let json = serde_json::to_string(&Outcome::NotFound).unwrap();
        assert_eq!(json, "-1");
        let json = serde_json::to_string(&Outcome::Found(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_tree_node_queries() {
        let mut root = TreeNode::leaf(1, 8);
        root.left = Some(Box::new(TreeNode::leaf(2, 3)));
        root.right = Some(Box::new(TreeNode::leaf(3, 10)));

        assert_eq!(root.size(), 3);
        assert_eq!(root.height(), 2);
        assert_eq!(root.keys_in_order(), vec![3, 8, 10]);
        assert_eq!(root.find_id(3).map(|n| n.key), Some(10));
        assert!(root.find_id(9).is_none());
    }
}
