//! Image specifications: the JSON form of a file to generate.

use serde::{Deserialize, Serialize};

use crate::fli::{ChunkRecord, ChunkType, Container, EncodeError, Frame};

/// A single-frame FLI file to encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSpec {
    /// Image width in pixels.
    pub width: u16,
    /// Image height in pixels.
    pub height: u16,
    /// Chunks of the single frame, in draw order.
    pub chunks: Vec<ChunkSpec>,
    /// Offset added to every chunk's declared size. 0 writes a faithful file.
    #[serde(default)]
    pub size_override: i32,
}

impl Default for ImageSpec {
    fn default() -> Self {
        Preset::CopyChunk.spec()
    }
}

/// A chunk as written in a spec file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSpec {
    /// Raw chunk type tag (16 = FLI_COPY).
    pub type_tag: u16,
    /// Payload bytes before padding.
    #[serde(default)]
    pub payload: Vec<u8>,
}

impl From<&ChunkSpec> for ChunkRecord {
    fn from(spec: &ChunkSpec) -> Self {
        ChunkRecord::new(spec.type_tag, spec.payload.clone())
    }
}

impl ImageSpec {
    /// Build the container described by this spec.
    pub fn to_container(&self) -> Container {
        Container::new(
            self.width,
            self.height,
            Frame::new(self.chunks.iter().map(ChunkRecord::from).collect()),
        )
    }

    /// Encode with this spec's own size override.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        self.encode_with_override(self.size_override)
    }

    /// Encode with an explicit size override, ignoring `self.size_override`.
    pub fn encode_with_override(&self, size_override: i32) -> Result<Vec<u8>, EncodeError> {
        self.to_container().encode(size_override)
    }
}

/// The two adversarial files this tool was written to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Preset {
    /// 100x100 image whose single COPY chunk carries far fewer bytes than
    /// the image needs.
    CopyChunk,
    /// 1x1 image with two COPY chunks declaring hugely negative sizes.
    SignedChunkSize,
}

impl Preset {
    pub const SIGNED_SIZE_OVERRIDE: i32 = -100_000_000;

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "copy" | "copy-chunk" => Some(Preset::CopyChunk),
            "signed" | "signed-chunk-size" => Some(Preset::SignedChunkSize),
            _ => None,
        }
    }

    pub fn spec(self) -> ImageSpec {
        let copy = ChunkSpec {
            type_tag: ChunkType::Copy.tag(),
            payload: vec![0x01, 0x01],
        };
        match self {
            Preset::CopyChunk => ImageSpec {
                width: 100,
                height: 100,
                chunks: vec![copy],
                size_override: 0,
            },
            Preset::SignedChunkSize => ImageSpec {
                width: 1,
                height: 1,
                chunks: vec![copy.clone(), copy],
                size_override: Self::SIGNED_SIZE_OVERRIDE,
            },
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Corpus size must be positive")]
    InvalidCount,
    #[error("Invalid size override range: min ({min}) > max ({max})")]
    InvalidOverrideRange { min: i32, max: i32 },
}
