//! Build, validate and preview-render editor color themes.
//!
//! The [`png`] module is a self-contained truecolor PNG writer; the rest
//! is theme plumbing built on top of `serde_json`.

pub mod build;
pub mod color;
pub mod error;
pub mod png;
pub mod preview;
pub mod theme;
pub mod validate;

pub use color::Rgb;
pub use error::{Error, Result};
pub use png::{encode_png, ColorSource};
