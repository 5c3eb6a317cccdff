//! Persisted container serialization and parsing.
//!
//! A container bundles the Huffman tree with the packed payload into one
//! self-describing record. The layout is an explicit binary schema (the
//! format round-trips bit-exactly across implementations, unlike opaque
//! object serialization):
//!
//! ```text
//! +------------------+
//! | Magic (4 bytes)  |  0x48 0x50 0x4B 0x31 ("HPK1")
//! +------------------+
//! | tree_len (4)     |  u32 little-endian, tree section byte length
//! +------------------+
//! | payload_len (4)  |  u32 little-endian, payload byte length
//! +------------------+
//! | crc32 (4)        |  u32 over tree_len, payload_len, tree, payload
//! +------------------+
//! | tree section     |  pre-order bits, zero-padded to a byte
//! | (variable)       |
//! +------------------+
//! | payload          |  packed bits from the encoder
//! | (variable)       |
//! +------------------+
//! ```
//!
//! # Tree Section
//!
//! Pre-order traversal with one marker bit per node: `1` introduces a leaf
//! and is followed by its 8-bit symbol; `0` introduces an internal node and
//! is followed by the encodings of its left then right subtrees. An empty
//! container (empty input stream) has a zero-length tree section and a
//! zero-length payload.
//!
//! Leaf weights are build-time state and are not persisted; reconstructed
//! nodes carry weight 0, which the decoder never reads.

use crate::bitio::{BitCursor, BitPacker};
use crate::error::{ContainerError, Result};
use crate::tree::Node;

/// Magic number for containers: "HPK1"
const MAGIC: [u8; 4] = [0x48, 0x50, 0x4B, 0x31];

/// Size of the container header in bytes
const HEADER_SIZE: usize = 16;

/// Deepest node any 256-symbol alphabet can produce.
///
/// A genuine Huffman tree over at most 256 leaves never descends past 255
/// internal nodes; deeper pre-order input is malformed.
const MAX_TREE_DEPTH: usize = 255;

/// The persisted unit combining a decode tree with the packed payload.
///
/// Created at the end of compression and consumed atomically at the start
/// of decompression; write-once, read-once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    root: Option<Node>,
    payload: Vec<u8>,
}

impl Container {
    /// Bundle a tree and packed payload bytes.
    pub fn new(root: Option<Node>, payload: Vec<u8>) -> Self {
        Self { root, payload }
    }

    /// The container an empty input compresses to.
    pub fn empty() -> Self {
        Self {
            root: None,
            payload: Vec::new(),
        }
    }

    /// The decode tree, absent for the empty container.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// The packed payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Serialize into the persisted wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let tree_section = match &self.root {
            Some(root) => encode_tree(root),
            None => Vec::new(),
        };

        let tree_len = tree_section.len() as u32;
        let payload_len = self.payload.len() as u32;
        let crc32 = compute_crc(tree_len, payload_len, &tree_section, &self.payload);

        let mut bytes =
            Vec::with_capacity(HEADER_SIZE + tree_section.len() + self.payload.len());
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&tree_len.to_le_bytes());
        bytes.extend_from_slice(&payload_len.to_le_bytes());
        bytes.extend_from_slice(&crc32.to_le_bytes());
        bytes.extend_from_slice(&tree_section);
        bytes.extend_from_slice(&self.payload);

        bytes
    }

    /// Parse a previously serialized container.
    ///
    /// # Errors
    /// - `ContainerError::Truncated` if the buffer is shorter than the
    ///   header or than the declared section lengths
    /// - `ContainerError::InvalidMagic` if the magic number doesn't match
    /// - `ContainerError::Crc` if the checksum doesn't validate
    /// - `ContainerError::TruncatedTree` / `TreeTooDeep` if the tree
    ///   section is structurally invalid
    /// - `ContainerError::PayloadWithoutTree` if payload bytes are present
    ///   with no tree to decode them
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(ContainerError::Truncated {
                required: HEADER_SIZE,
                actual: bytes.len(),
            }
            .into());
        }

        let magic: [u8; 4] = bytes[0..4].try_into().unwrap();
        if magic != MAGIC {
            return Err(ContainerError::InvalidMagic {
                expected: MAGIC,
                actual: magic,
            }
            .into());
        }

        let tree_len = u32::from_le_bytes(bytes[4..8].try_into().unwrap()) as usize;
        let payload_len = u32::from_le_bytes(bytes[8..12].try_into().unwrap()) as usize;
        let crc32 = u32::from_le_bytes(bytes[12..16].try_into().unwrap());

        let expected_size = HEADER_SIZE + tree_len + payload_len;
        if bytes.len() != expected_size {
            return Err(ContainerError::Truncated {
                required: expected_size,
                actual: bytes.len(),
            }
            .into());
        }

        let tree_section = &bytes[HEADER_SIZE..HEADER_SIZE + tree_len];
        let payload = &bytes[HEADER_SIZE + tree_len..];

        let computed_crc =
            compute_crc(tree_len as u32, payload_len as u32, tree_section, payload);
        if computed_crc != crc32 {
            return Err(ContainerError::Crc {
                expected: crc32,
                actual: computed_crc,
            }
            .into());
        }

        let root = if tree_section.is_empty() {
            if !payload.is_empty() {
                return Err(ContainerError::PayloadWithoutTree.into());
            }
            None
        } else {
            Some(decode_tree(tree_section)?)
        };

        Ok(Self {
            root,
            payload: payload.to_vec(),
        })
    }
}

/// Encode a tree pre-order into a zero-padded byte section.
fn encode_tree(root: &Node) -> Vec<u8> {
    let mut packer = BitPacker::new();
    encode_node(root, &mut packer);
    packer.finish()
}

fn encode_node(node: &Node, packer: &mut BitPacker) {
    match node {
        Node::Leaf { symbol, .. } => {
            packer.push(true);
            packer.push_byte(*symbol);
        }
        Node::Internal { left, right, .. } => {
            packer.push(false);
            encode_node(left, packer);
            encode_node(right, packer);
        }
    }
}

/// Decode a pre-order tree section back into a tree.
fn decode_tree(section: &[u8]) -> Result<Node> {
    let mut cursor = BitCursor::new(section);
    let root = decode_node(&mut cursor, 0)?;
    // Anything left past the tree must be byte-boundary padding
    if cursor.bits_remaining() >= 8 {
        return Err(ContainerError::TruncatedTree.into());
    }
    Ok(root)
}

fn decode_node(cursor: &mut BitCursor<'_>, depth: usize) -> Result<Node> {
    if depth > MAX_TREE_DEPTH {
        return Err(ContainerError::TreeTooDeep {
            limit: MAX_TREE_DEPTH,
        }
        .into());
    }

    let is_leaf = cursor
        .read_bit()
        .map_err(|_| ContainerError::TruncatedTree)?;
    if is_leaf {
        let symbol = cursor
            .read_byte()
            .map_err(|_| ContainerError::TruncatedTree)?;
        Ok(Node::Leaf { symbol, weight: 0 })
    } else {
        let left = decode_node(cursor, depth + 1)?;
        let right = decode_node(cursor, depth + 1)?;
        Ok(Node::Internal {
            weight: 0,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

fn compute_crc(tree_len: u32, payload_len: u32, tree_section: &[u8], payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&tree_len.to_le_bytes());
    hasher.update(&payload_len.to_le_bytes());
    hasher.update(tree_section);
    hasher.update(payload);
    hasher.finalize()
}
