use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("image dimensions must be in 1..=2147483647, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("a {width}x{height} image does not fit in memory")]
    ImageTooLarge { width: u32, height: u32 },

    #[error("chunk type must be exactly 4 ASCII characters, got {0:?}")]
    InvalidChunkType(String),

    #[error("chunk payload of {0} bytes does not fit a 32-bit length field")]
    ChunkTooLarge(usize),

    #[error("expected 3 color channels, got {0}")]
    ChannelCount(usize),

    #[error("color channel value {0} is outside 0..=255")]
    ChannelOutOfRange(i64),

    #[error("color index {index} is out of range for {len} entries")]
    PaletteIndex { index: usize, len: usize },

    #[error("bad color at pixel ({x}, {y}): {source}")]
    Pixel {
        x: u32,
        y: u32,
        #[source]
        source: Box<Error>,
    },

    #[error("zlib compression failed: {0}")]
    Compression(#[source] io::Error),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }
}
