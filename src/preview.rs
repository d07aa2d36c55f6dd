//! Placeholder marketplace images rendered with the built-in PNG encoder.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::png::encode_png;

pub const BG1: Rgb = Rgb::new(0x12, 0x12, 0x12);
pub const BG2: Rgb = Rgb::new(0x1e, 0x1e, 0x1e);
pub const OPERATOR: Rgb = Rgb::new(0xFF, 0x8F, 0x2E);
pub const STRING: Rgb = Rgb::new(0x8A, 0x9E, 0x78);
pub const KEYWORD: Rgb = Rgb::new(0xea, 0x60, 0x3e);
pub const STORAGE: Rgb = Rgb::new(0xFF, 0xC6, 0x2F);
pub const ENTITY: Rgb = Rgb::new(0x79, 0x82, 0x83);
pub const NUMBER: Rgb = Rgb::new(0xCF, 0x7F, 0x8F);

/// Equal-width bands of color across one axis.
#[derive(Clone, Copy, Debug)]
pub struct Bands(pub &'static [Rgb]);

impl Bands {
    /// Band for `pos` along an axis of length `extent`.
    ///
    /// An index past the last band is an error rather than a fallback color.
    pub fn pick(&self, pos: u32, extent: u32) -> Result<Rgb> {
        let len = self.0.len();
        let index = (u64::from(pos) * len as u64 / u64::from(extent.max(1))) as usize;
        self.0
            .get(index)
            .copied()
            .ok_or(Error::PaletteIndex { index, len })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Diagonal gradient from the first to the second color.
    Diagonal(Rgb, Rgb),
    /// Bands stacked top to bottom.
    Rows(&'static [Rgb]),
    /// Bands laid out left to right.
    Columns(&'static [Rgb]),
}

#[derive(Clone, Copy, Debug)]
pub struct Preview {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    pub layout: Layout,
}

pub const PREVIEWS: &[Preview] = &[
    Preview {
        file_name: "icon.png",
        width: 128,
        height: 128,
        layout: Layout::Diagonal(BG1, OPERATOR),
    },
    Preview {
        file_name: "preview-editor.png",
        width: 800,
        height: 600,
        layout: Layout::Rows(&[BG1, BG2, KEYWORD, STRING, BG1]),
    },
    Preview {
        file_name: "preview-syntax.png",
        width: 800,
        height: 400,
        layout: Layout::Columns(&[STRING, KEYWORD, STORAGE, OPERATOR]),
    },
    Preview {
        file_name: "preview-terminal.png",
        width: 800,
        height: 300,
        layout: Layout::Columns(&[ENTITY, STRING, KEYWORD, STORAGE, OPERATOR, NUMBER]),
    },
];

impl Layout {
    pub fn color_at(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Rgb> {
        match *self {
            Layout::Diagonal(from, to) => {
                let ratio = f64::from(x + y) / f64::from(width + height);
                from.lerp(to, ratio)
            }
            Layout::Rows(colors) => Bands(colors).pick(y, height),
            Layout::Columns(colors) => Bands(colors).pick(x, width),
        }
    }
}

impl Preview {
    pub fn render(&self) -> Result<Vec<u8>> {
        let layout = self.layout;
        let colors = move |x: u32, y: u32, w: u32, h: u32| layout.color_at(x, y, w, h);
        encode_png(self.width, self.height, &colors)
    }
}

/// Render every preview into `dir`, creating it if needed.
pub fn generate_previews(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut written = Vec::with_capacity(PREVIEWS.len());
    for preview in PREVIEWS {
        let bytes = preview.render()?;
        let path = dir.join(preview.file_name);
        fs::write(&path, &bytes).map_err(|e| Error::io(&path, e))?;
        log::info!(
            "created {} ({}x{}, {} bytes)",
            preview.file_name,
            preview.width,
            preview.height,
            bytes.len()
        );
        written.push(path);
    }
    Ok(written)
}
