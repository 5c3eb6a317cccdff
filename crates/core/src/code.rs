//! Code table generation.
//!
//! Walks the tree depth-first from the root, accumulating the path taken:
//! descending left appends a 0 bit, descending right a 1 bit. Reaching a
//! leaf records the accumulated path as that symbol's code. Every path
//! terminates only at leaves, so no code is a prefix of another.

use std::collections::BTreeMap;

use crate::tree::Node;

/// Mapping from symbol to its prefix-free bitstring code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Vec<bool>>,
}

impl CodeTable {
    /// Generate the code table for a tree.
    ///
    /// A bare-leaf root (single-symbol alphabet) has no branch to name its
    /// path, so its symbol is assigned the one-bit code `0`.
    pub fn generate(root: &Node) -> Self {
        let mut codes = BTreeMap::new();
        match root {
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, vec![false]);
            }
            Node::Internal { .. } => {
                walk(root, &mut Vec::new(), &mut codes);
            }
        }
        Self { codes }
    }

    /// Code for `symbol`, if the symbol was present in the source alphabet.
    pub fn get(&self, symbol: u8) -> Option<&[bool]> {
        self.codes.get(&symbol).map(|c| c.as_slice())
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate (symbol, code) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_slice()))
    }
}

fn walk(node: &Node, path: &mut Vec<bool>, codes: &mut BTreeMap<u8, Vec<bool>>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, path.clone());
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            walk(left, path, codes);
            path.pop();

            path.push(true);
            walk(right, path, codes);
            path.pop();
        }
    }
}
