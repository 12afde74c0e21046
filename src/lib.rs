//! # huffman_tree
//!
//! Builds Huffman prefix-code trees from text and renders them for inspection.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffman_tree::{HuffmanTree, TreePrinter};
//!
//! let tree = HuffmanTree::from_text("aab");
//! assert_eq!(tree.weight(), 3);
//!
//! let rendered = TreePrinter::default().render(&tree)?;
//! assert!(rendered.contains("a:2"));
//! # Ok::<(), huffman_tree::Error>(())
//! ```

pub mod error;
pub mod frequency;
pub mod hufftree;
pub mod printer;

// Internal modules - not part of public API
mod min_heap;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use frequency::{count, FrequencyTable};
pub use hufftree::{HuffNode, HuffmanTree};
pub use printer::{PrintConfig, TreePrinter};
