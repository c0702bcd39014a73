//! FLI Forge - FLI/FLC animation writer for decoder robustness testing.
//!
//! This crate builds single-frame FLI files byte by byte. Every level of the
//! format (file, frame, chunk) declares its own length, and the chunk level
//! accepts a signed size override so that declared lengths can be made to
//! disagree with the real payload, including negative values. With an
//! override of 0 the output is a well-formed file.
//!
//! # Architecture
//!
//! - `fli`: Binary layout and the chunk, frame and container encoders
//! - `schema`: JSON image specifications, presets and corpus settings
//! - `corpus`: Parallel generation of many override variants of one image
//!
//! # Example
//!
//! ```rust
//! use fli_forge::fli::{ChunkRecord, ChunkType, encode_image};
//!
//! let chunks = [ChunkRecord::new(ChunkType::Copy, vec![0x01, 0x01])];
//!
//! // Well-formed file
//! let file = encode_image(100, 100, &chunks, 0).unwrap();
//! assert_eq!(file.len(), 128 + 16 + 10);
//!
//! // Same file, chunk size field shifted far below zero
//! let hostile = encode_image(100, 100, &chunks, -100_000_000).unwrap();
//! let size = i32::from_le_bytes(hostile[144..148].try_into().unwrap());
//! assert_eq!(size, 10 - 100_000_000);
//! ```

pub mod corpus;
pub mod fli;
pub mod schema;

// Re-export commonly used types
pub use corpus::{CorpusEntry, CorpusError, generate_corpus, write_corpus};
pub use fli::{ChunkRecord, ChunkType, Container, EncodeError, Frame, encode_image};
pub use schema::{ChunkSpec, ConfigError, CorpusConfig, ImageSpec, Preset};
