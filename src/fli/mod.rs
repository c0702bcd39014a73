//! FLI animation writer.
//!
//! Files are built bottom-up: chunks are encoded first, wrapped in a frame,
//! and the frame is wrapped in the file header. Each level declares its own
//! total length, and the chunk level can be told to lie about it.
//!
//! # File Format
//!
//! ```text
//! File header (128 bytes):
//!   Size: u32
//!   Magic: 0xAF12 (u16)
//!   Frame count: u16 (always 1)
//!   Width: u16
//!   Height: u16
//!   Color depth: u16 (8)
//!   Flags: u16 (3)
//!   Speed: u32 (40)
//!   Reserved: 108 bytes
//!
//! Frame header (16 bytes):
//!   Size: u32
//!   Magic: 0xF1FA (u16)
//!   Chunk count: u16
//!   Reserved: 8 bytes
//!
//! Chunk (6 + payload bytes):
//!   Size: i32 (real size + size override)
//!   Type: u16
//!   Payload: zero padded to an even length of at least 4
//! ```

mod chunk;
mod container;
mod error;
mod format;
mod frame;

pub use chunk::{ChunkRecord, chunk_label, declared_size, encode_chunk, pad_payload, padded_len};
pub use container::{Container, encode_container, encode_image};
pub use error::EncodeError;
pub use format::{
    ChunkHeader, ChunkType, DEFAULT_COLOR_DEPTH, DEFAULT_FLAGS, DEFAULT_SPEED, FILE_MAGIC,
    FRAME_MAGIC, FileHeader, FrameHeader, MIN_CHUNK_PAYLOAD, MIN_CHUNK_SIZE,
};
pub use frame::{Frame, encode_frame};
