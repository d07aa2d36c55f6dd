use std::io::Write;

use libflate::zlib::Encoder;

use super::ColorSource;
use crate::error::{Error, Result};

/// "None" filter: the row's bytes are stored as-is.
pub const FILTER_NONE: u8 = 0;

/// Raw (pre-compression) stream length for a truecolor image, or `None`
/// if it overflows `usize`.
pub fn raw_len(width: u32, height: u32) -> Option<usize> {
    usize::try_from(width)
        .ok()?
        .checked_mul(3)?
        .checked_add(1)?
        .checked_mul(usize::try_from(height).ok()?)
}

/// Lay out every row as a filter byte followed by its RGB triples,
/// top-to-bottom and left-to-right.
pub fn build_raw_scanlines<C>(width: u32, height: u32, colors: &C) -> Result<Vec<u8>>
where
    C: ColorSource + ?Sized,
{
    let too_large = || Error::ImageTooLarge { width, height };
    let len = raw_len(width, height).ok_or_else(too_large)?;
    let mut raw = Vec::new();
    raw.try_reserve_exact(len).map_err(|_| too_large())?;
    for y in 0..height {
        raw.push(FILTER_NONE);
        for x in 0..width {
            let rgb = colors
                .color_at(x, y, width, height)
                .map_err(|e| Error::Pixel {
                    x,
                    y,
                    source: Box::new(e),
                })?;
            raw.extend_from_slice(&rgb.to_bytes());
        }
    }
    Ok(raw)
}

/// zlib-wrapped DEFLATE at the encoder's default settings.
pub fn compress_scanlines(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = Encoder::new(Vec::new()).map_err(Error::Compression)?;
    encoder.write_all(raw).map_err(Error::Compression)?;
    encoder.finish().into_result().map_err(Error::Compression)
}
