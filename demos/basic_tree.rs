use huffman_tree::{HuffmanTree, TreePrinter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sample_text = "Hello, world! This is a sample text for a Huffman tree. \
                      Huffman coding is a greedy algorithm that builds optimal prefix codes.";

    let tree = HuffmanTree::from_text(sample_text);

    println!(
        "Built tree: {} symbols, {} distinct, {} nodes, depth {}",
        tree.weight(),
        tree.leaves().len(),
        tree.node_count(),
        tree.depth()
    );
    println!("Weighted path length: {} bits", tree.weighted_path_length());

    TreePrinter::default().print(&tree)?;

    Ok(())
}
