use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::frequency::{self, FrequencyTable};
use crate::min_heap::MinHeap;

/// A Huffman tree built from the symbol frequencies of some text.
///
/// The tree owns its whole node graph. Rebuilding or dropping it releases the
/// previous graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<HuffNode>,
}

impl HuffmanTree {
    /// An empty tree with no root.
    pub fn new() -> Self {
        HuffmanTree { root: None }
    }

    pub fn from_text(text: &str) -> Self {
        HuffmanTree::from_frequencies(frequency::count(text))
    }

    /// Builds a tree from an existing table. Zero counts are skipped.
    pub fn from_frequencies(frequencies: FrequencyTable) -> Self {
        let mut nodes: Vec<HuffNode> = frequencies
            .into_iter()
            .filter(|&(_, count)| count > 0)
            .map(|(symbol, count)| HuffNode::new(symbol, count))
            .collect();

        // Fix the leaf order so equal weights break ties by symbol.
        nodes.sort_by_key(|node| node.symbol());

        let root = HuffmanTree::build_from_leaves(nodes);
        HuffmanTree { root }
    }

    /// Rebuilds this tree from `text`, replacing any previous tree.
    pub fn build(&mut self, text: &str) {
        *self = HuffmanTree::from_text(text);
    }

    fn build_from_leaves(leaves: Vec<HuffNode>) -> Option<HuffNode> {
        let distinct = leaves.len();
        let mut seq = 0;
        let ranked = leaves
            .into_iter()
            .map(|node| {
                seq += 1;
                Ranked::new(node, seq)
            })
            .collect();
        let mut heap = MinHeap::build(ranked);

        let root = loop {
            let Some(x) = heap.extract_min() else {
                break None;
            };
            let Some(y) = heap.extract_min() else {
                break Some(x.node);
            };
            let z = HuffNode::merge(x.node, y.node);
            trace!(weight = z.weight(), "merged two lowest nodes");

            seq += 1;
            heap.insert(Ranked::new(z, seq));
        };
        debug!(
            distinct,
            weight = root.as_ref().map_or(0, HuffNode::weight),
            "built huffman tree"
        );
        root
    }

    pub fn root(&self) -> Option<&HuffNode> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops the current node graph.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Root weight, i.e. the number of symbols the tree was built from.
    pub fn weight(&self) -> usize {
        self.root.as_ref().map_or(0, HuffNode::weight)
    }

    /// `(symbol, weight)` of every leaf, left to right.
    pub fn leaves(&self) -> Vec<(char, usize)> {
        let mut leaves = Vec::new();
        if let Some(root) = &self.root {
            root.collect_leaves(&mut leaves);
        }
        leaves
    }

    pub fn frequencies(&self) -> FrequencyTable {
        self.leaves().into_iter().collect()
    }

    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, HuffNode::node_count)
    }

    /// Number of levels; 0 when empty, 1 for a lone leaf.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, HuffNode::depth)
    }

    /// Distance of every leaf from the root.
    pub fn code_lengths(&self) -> BTreeMap<char, usize> {
        let mut lengths = BTreeMap::new();
        if let Some(root) = &self.root {
            root.collect_code_lengths(&mut lengths, 0);
        }
        lengths
    }

    /// Sum of weight * code length over all leaves.
    pub fn weighted_path_length(&self) -> usize {
        let lengths = self.code_lengths();
        self.leaves()
            .into_iter()
            .map(|(symbol, weight)| weight * lengths[&symbol])
            .sum()
    }
}

impl From<&str> for HuffmanTree {
    fn from(text: &str) -> Self {
        HuffmanTree::from_text(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        weight: usize,
        symbol: char,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn new(symbol: char, weight: usize) -> Self {
        HuffNode::Leaf { weight, symbol }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn symbol(&self) -> Option<char> {
        match self {
            HuffNode::Leaf { symbol, .. } => Some(*symbol),
            HuffNode::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// `(left, right)` for internal nodes.
    pub fn children(&self) -> Option<(&HuffNode, &HuffNode)> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => Some((left, right)),
        }
    }

    /// Joins two subtrees under a new internal node, `a` on the left.
    ///
    /// The combined weight saturates at `usize::MAX` rather than wrapping.
    pub fn merge(a: Self, b: Self) -> Self {
        let weight = a.weight().saturating_add(b.weight());
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }

    fn node_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn collect_leaves(&self, leaves: &mut Vec<(char, usize)>) {
        match self {
            HuffNode::Leaf { symbol, weight } => leaves.push((*symbol, *weight)),
            HuffNode::Internal { left, right, .. } => {
                left.collect_leaves(leaves);
                right.collect_leaves(leaves);
            }
        }
    }

    fn collect_code_lengths(&self, lengths: &mut BTreeMap<char, usize>, depth: usize) {
        match self {
            HuffNode::Leaf { symbol, .. } => {
                lengths.insert(*symbol, depth);
            }
            HuffNode::Internal { left, right, .. } => {
                left.collect_code_lengths(lengths, depth + 1);
                right.collect_code_lengths(lengths, depth + 1);
            }
        }
    }
}

/// Heap entry: weight first, then insertion sequence, so ties pop in the
/// order they were pushed.
#[derive(Debug)]
struct Ranked {
    weight: usize,
    seq: usize,
    node: HuffNode,
}

impl Ranked {
    fn new(node: HuffNode, seq: usize) -> Self {
        Ranked {
            weight: node.weight(),
            seq,
            node,
        }
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}
