//! Sideways rendering of a [`HuffmanTree`].
//!
//! The right subtree is drawn above its parent and the left subtree below,
//! each level pushed further right by a fixed indent step:
//!
//! ```text
//!
//!                    a:2
//!
//!          #:3
//!
//!                    b:1
//! ```

use std::io::{self, Write};

use crate::error::Result;
use crate::hufftree::{HuffNode, HuffmanTree};

/// Label printed for internal nodes.
pub const INTERNAL_LABEL: char = '#';

pub const DEFAULT_INDENT_STEP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintConfig {
    /// Field width added per level; the root is right-aligned in one step.
    pub indent_step: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            indent_step: DEFAULT_INDENT_STEP,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TreePrinter {
    config: PrintConfig,
}

impl TreePrinter {
    pub fn new(config: PrintConfig) -> Self {
        TreePrinter { config }
    }

    pub fn config(&self) -> &PrintConfig {
        &self.config
    }

    /// Writes the rendering to stdout. An empty tree writes nothing.
    pub fn print(&self, tree: &HuffmanTree) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_tree(tree, &mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn write_tree<W: Write>(&self, tree: &HuffmanTree, writer: &mut W) -> Result<()> {
        if let Some(root) = tree.root() {
            self.write_node(root, self.config.indent_step, writer)?;
        }
        Ok(())
    }

    pub fn render(&self, tree: &HuffmanTree) -> Result<String> {
        let mut buf = Vec::new();
        self.write_tree(tree, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_node<W: Write>(
        &self,
        node: &HuffNode,
        width: usize,
        writer: &mut W,
    ) -> io::Result<()> {
        let child_width = width + self.config.indent_step;

        if let Some((_, right)) = node.children() {
            self.write_node(right, child_width, writer)?;
        }

        writeln!(writer)?;
        writeln!(writer, "{:>width$}:{}", label(node), node.weight(), width = width)?;

        if let Some((left, _)) = node.children() {
            self.write_node(left, child_width, writer)?;
        }
        Ok(())
    }
}

/// Printable label for a node. Leaf symbols are escaped so they never span
/// lines and never read as the internal label.
pub fn label(node: &HuffNode) -> String {
    match node.symbol() {
        None => INTERNAL_LABEL.to_string(),
        Some(INTERNAL_LABEL) => format!("\\{INTERNAL_LABEL}"),
        Some(symbol) => symbol.escape_debug().to_string(),
    }
}
