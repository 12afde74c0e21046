use std::collections::HashSet;

use huffman_tree::{count, HuffNode, HuffmanTree, PrintConfig, TreePrinter};
use rstest::{fixture, rstest};

const PANGRAM: &str = "the quick brown fox jumps over the lazy dog";

#[fixture]
fn printer() -> TreePrinter {
    TreePrinter::default()
}

fn internal_nodes_consistent(node: &HuffNode) -> bool {
    match node.children() {
        None => true,
        Some((left, right)) => {
            node.weight() == left.weight() + right.weight()
                && internal_nodes_consistent(left)
                && internal_nodes_consistent(right)
        }
    }
}

#[rstest]
#[case("")]
#[case("x")]
#[case("aab")]
#[case("abracadabra")]
#[case(PANGRAM)]
#[case("ünïcödé ☃☃☃ and\nnewlines\ttoo")]
fn test_frequencies_sum_to_length(#[case] text: &str) {
    let table = count(text);
    assert_eq!(table.values().sum::<usize>(), text.chars().count());
}

#[rstest]
#[case("x")]
#[case("aab")]
#[case("abracadabra")]
#[case(PANGRAM)]
#[case("ünïcödé ☃☃☃ and\nnewlines\ttoo")]
fn test_tree_invariants(#[case] text: &str) {
    let tree = HuffmanTree::from_text(text);
    let root = tree.root().expect("non-empty input has a root");

    assert_eq!(root.weight(), text.chars().count());
    assert!(internal_nodes_consistent(root));

    let leaves = tree.leaves();
    let symbols: HashSet<char> = leaves.iter().map(|(s, _)| *s).collect();
    assert_eq!(symbols.len(), leaves.len(), "leaf symbols are unique");
    assert!(symbols.iter().all(|s| text.contains(*s)));
    assert_eq!(tree.frequencies(), count(text));

    // full binary tree: n leaves -> 2n - 1 nodes
    assert_eq!(tree.node_count(), 2 * leaves.len() - 1);
}

#[rstest]
#[case("q", 1)]
#[case("qqqqqqqqqq", 10)]
fn test_single_distinct_symbol(#[case] text: &str, #[case] weight: usize) {
    let tree = HuffmanTree::from_text(text);
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.root(), Some(&HuffNode::new('q', weight)));
}

#[rstest]
fn test_aab_scenario(printer: TreePrinter) {
    let table = count("aab");
    assert_eq!(table.len(), 2);
    assert_eq!(table[&'a'], 2);
    assert_eq!(table[&'b'], 1);

    let tree = HuffmanTree::from_text("aab");
    let (left, right) = tree.root().unwrap().children().unwrap();
    let mut children = vec![
        (left.symbol(), left.weight()),
        (right.symbol(), right.weight()),
    ];
    children.sort();
    assert_eq!(children, vec![(Some('a'), 2), (Some('b'), 1)]);

    let out = printer.render(&tree).unwrap();
    assert!(out.contains("a:2"));
    assert!(out.contains("b:1"));
    assert!(out.contains("#:3"));
}

#[rstest]
fn test_empty_scenario(printer: TreePrinter) {
    let tree = HuffmanTree::from_text("");
    assert!(count("").is_empty());
    assert!(tree.root().is_none());
    assert_eq!(printer.render(&tree).unwrap(), "");

    let mut sink = Vec::new();
    printer.write_tree(&tree, &mut sink).unwrap();
    assert!(sink.is_empty());
}

#[rstest]
fn test_single_char_scenario(printer: TreePrinter) {
    let tree = HuffmanTree::from_text("x");
    assert!(tree.root().unwrap().is_leaf());

    let out = printer.render(&tree).unwrap();
    let lines: Vec<&str> = out.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("x:1"));
}

#[rstest]
fn test_rebuild_is_deterministic(printer: TreePrinter) {
    let first = HuffmanTree::from_text(PANGRAM);
    let mut second = HuffmanTree::from_text("something else entirely");
    second.build(PANGRAM);

    let mut a = first.leaves();
    let mut b = second.leaves();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);

    assert_eq!(first, second);
    assert_eq!(printer.render(&first).unwrap(), printer.render(&second).unwrap());
}

#[rstest]
#[case("aaaaabbcd", 15)]
#[case("abcd", 8)]
#[case("aab", 3)]
#[case("x", 0)]
fn test_weighted_path_length(#[case] text: &str, #[case] expected: usize) {
    assert_eq!(HuffmanTree::from_text(text).weighted_path_length(), expected);
}

#[rstest]
fn test_hash_symbol_is_distinguishable(printer: TreePrinter) {
    let tree = HuffmanTree::from_text("##a");
    let out = printer.render(&tree).unwrap();
    assert!(out.contains("\\#:2"));
    assert!(out.contains("#:3"));
    assert!(out.contains("a:1"));
}

#[rstest]
fn test_indent_grows_with_depth() {
    let printer = TreePrinter::new(PrintConfig { indent_step: 4 });
    let tree = HuffmanTree::from_text("aaaaabbcd");
    let out = printer.render(&tree).unwrap();

    let depth = tree.code_lengths();
    for line in out.lines().filter(|l| !l.is_empty()) {
        let (label, _) = line.trim_start().split_once(':').unwrap();
        let width = line.find(':').unwrap();
        if let Some(symbol) = label.chars().next().filter(|c| *c != '#') {
            assert_eq!(width, 4 * (depth[&symbol] + 1), "line {line:?}");
        }
    }
}
