//! A minimal PNG writer: 8-bit truecolor, no interlacing, filter type 0,
//! one IDAT chunk. Compression is delegated to `libflate`; everything else
//! (signature, chunk framing, CRC-32) is done here.

pub mod chunk;
pub mod crc;
pub mod scanline;

pub use chunk::{make_chunk, Chunk, ChunkType};
pub use crc::crc32;
pub use scanline::{build_raw_scanlines, compress_scanlines};

use crate::color::Rgb;
use crate::error::{Error, Result};

pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Largest width or height a PNG header may carry.
pub const MAX_DIMENSION: u32 = 0x7FFF_FFFF;

const BIT_DEPTH: u8 = 8;
const COLOUR_TYPE_RGB: u8 = 2;

/// Supplies the color of each pixel.
pub trait ColorSource {
    fn color_at(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Rgb>;
}

impl<F> ColorSource for F
where
    F: Fn(u32, u32, u32, u32) -> Result<Rgb>,
{
    fn color_at(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Rgb> {
        self(x, y, width, height)
    }
}

/// Solid fill.
impl ColorSource for Rgb {
    fn color_at(&self, _x: u32, _y: u32, _width: u32, _height: u32) -> Result<Rgb> {
        Ok(*self)
    }
}

fn ihdr_payload(width: u32, height: u32) -> Vec<u8> {
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.push(BIT_DEPTH);
    ihdr.push(COLOUR_TYPE_RGB);
    ihdr.push(0); // Type 0 compression
    ihdr.push(0); // Type 0 filtering
    ihdr.push(0); // No interlacing
    ihdr
}

/// An encoded image, held as its three chunks until serialized.
#[derive(Debug, Clone)]
pub struct Png {
    pub dimension: (u32, u32),
    ihdr: Chunk,
    idat: Chunk,
    iend: Chunk,
}

impl Png {
    pub fn new<C>(width: u32, height: u32, colors: &C) -> Result<Png>
    where
        C: ColorSource + ?Sized,
    {
        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return Err(Error::InvalidDimensions { width, height });
        }

        let raw = build_raw_scanlines(width, height, colors)?;
        let compressed = compress_scanlines(&raw)?;
        log::debug!(
            "encoded {}x{}: {} raw bytes -> {} compressed",
            width,
            height,
            raw.len(),
            compressed.len()
        );

        Ok(Png {
            dimension: (width, height),
            ihdr: Chunk::new(ChunkType::IHDR, ihdr_payload(width, height))?,
            idat: Chunk::new(ChunkType::IDAT, compressed)?,
            iend: Chunk::new(ChunkType::IEND, Vec::new())?,
        })
    }

    pub fn chunks(&self) -> [&Chunk; 3] {
        [&self.ihdr, &self.idat, &self.iend]
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let len = SIGNATURE.len() + self.chunks().iter().map(|c| c.encoded_len()).sum::<usize>();
        let mut out = Vec::with_capacity(len);
        out.extend_from_slice(&SIGNATURE);
        for chunk in self.chunks() {
            chunk.write_to(&mut out);
        }
        out
    }
}

/// Encode a `width` x `height` truecolor PNG whose pixels come from `colors`.
///
/// Fails without producing output if either dimension is zero or above
/// [`MAX_DIMENSION`], if the pixel buffer cannot be allocated, if the color
/// source rejects a pixel, or if compression fails.
pub fn encode_png<C>(width: u32, height: u32, colors: &C) -> Result<Vec<u8>>
where
    C: ColorSource + ?Sized,
{
    Png::new(width, height, colors).map(|png| png.to_bytes())
}
