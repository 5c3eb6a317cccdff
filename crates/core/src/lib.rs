//! huffpack-core: Huffman-coding compression library
//!
//! This library converts a stream of byte symbols into a prefix-free binary
//! encoding driven by symbol frequency, packs the bitstream into bytes, and
//! reverses the process exactly, persisting everything needed for decoding
//! in an explicit binary container format.
//!
//! # Architecture
//!
//! The pipeline is built from small modules with clear boundaries:
//! - `bitio`: MSB-first bit packing/unpacking
//! - `freq`: symbol frequency counting
//! - `tree`: Huffman tree construction via a priority-ordered merge
//! - `code`: symbol-to-bitstring code table generation
//! - `codec`: encode/decode orchestration (`compress` / `decompress`)
//! - `container`: the persisted tree + payload record
//! - `metrics`: observable run behavior
//!
//! Compression flows freq -> tree -> code -> codec -> container;
//! decompression flows container -> codec.
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured errors reported to the caller
//! - **No shared state**: every stage takes and returns what it needs;
//!   ownership of the tree flows top-down from the builder
//! - **Deterministic**: equal-weight merges tie-break by creation order, so
//!   the same input always produces the same tree and container
//! - **All-or-nothing**: a failure mid-operation never yields partial output
//!
//! # Example
//!
//! ```
//! use huffpack_core::codec;
//! use huffpack_core::container::Container;
//!
//! let container = codec::compress(b"abababab")?;
//! let bytes = container.to_bytes();
//!
//! let restored = Container::from_bytes(&bytes)?;
//! assert_eq!(codec::decompress(&restored)?, b"abababab");
//! # Ok::<(), huffpack_core::Error>(())
//! ```

pub mod bitio;
pub mod code;
pub mod codec;
pub mod container;
pub mod error;
pub mod freq;
pub mod metrics;
pub mod tree;

// Re-export commonly used types
pub use error::{Error, Result};
