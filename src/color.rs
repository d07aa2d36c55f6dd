//! 8-bit RGB colors, hex parsing and WCAG contrast math.

use std::fmt;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Build a color from loosely typed channel values.
    ///
    /// Exactly three channels are required and each must lie in `0..=255`.
    pub fn from_channels(channels: &[i64]) -> Result<Rgb> {
        let [r, g, b] = channels else {
            return Err(Error::ChannelCount(channels.len()));
        };
        Ok(Rgb::new(channel(*r)?, channel(*g)?, channel(*b)?))
    }

    /// Linear interpolation toward `other`, flooring each channel.
    pub fn lerp(self, other: Rgb, ratio: f64) -> Result<Rgb> {
        let mix = |a: u8, b: u8| {
            let (a, b) = (f64::from(a), f64::from(b));
            (a + (b - a) * ratio).floor() as i64
        };
        Rgb::from_channels(&[
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        ])
    }

    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn channel(value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::ChannelOutOfRange(value))
}

/// `#RRGGBB` or `#RRGGBBAA`, hex digits in either case.
pub fn is_valid_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Reads the leading six hex digits (the `#` is optional). Alpha is ignored.
pub fn parse_hex(value: &str) -> Option<Rgb> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    let rgb = digits.get(..6)?;
    if !rgb.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&rgb[i..i + 2], 16).ok();
    Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x, in `[0.0, 1.0]`.
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio. Symmetric, always `>= 1.0`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast between two hex strings; `0.0` when either fails to parse.
pub fn hex_contrast_ratio(fg: &str, bg: &str) -> f64 {
    match (parse_hex(fg), parse_hex(bg)) {
        (Some(fg), Some(bg)) => contrast_ratio(fg, bg),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_validation() {
        assert!(is_valid_hex_color("#121212"));
        assert!(is_valid_hex_color("#FF8F2Eaa"));
        assert!(!is_valid_hex_color("121212"));
        assert!(!is_valid_hex_color("#12121"));
        assert!(!is_valid_hex_color("#1212121"));
        assert!(!is_valid_hex_color("#12121g"));
        assert!(!is_valid_hex_color("red"));
    }

    #[test]
    fn parse_ignores_alpha_and_hash() {
        assert_eq!(parse_hex("#FF8F2E"), Some(Rgb::new(0xFF, 0x8F, 0x2E)));
        assert_eq!(parse_hex("ea603e80"), Some(Rgb::new(0xEA, 0x60, 0x3E)));
        assert_eq!(parse_hex("#abc"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn display_is_upper_hex() {
        assert_eq!(Rgb::new(0x8a, 0x9e, 0x78).to_string(), "#8A9E78");
    }

    #[test]
    fn channels_are_checked() {
        assert_eq!(Rgb::from_channels(&[1, 2, 3]).unwrap(), Rgb::new(1, 2, 3));
        assert!(matches!(
            Rgb::from_channels(&[1, 2]),
            Err(Error::ChannelCount(2))
        ));
        assert!(matches!(
            Rgb::from_channels(&[1, 2, 3, 4]),
            Err(Error::ChannelCount(4))
        ));
        assert!(matches!(
            Rgb::from_channels(&[0, 256, 0]),
            Err(Error::ChannelOutOfRange(256))
        ));
        assert!(matches!(
            Rgb::from_channels(&[-1, 0, 0]),
            Err(Error::ChannelOutOfRange(-1))
        ));
    }

    #[test]
    fn lerp_floors() {
        let a = Rgb::new(0x12, 0x12, 0x12);
        let b = Rgb::new(0xFF, 0x8F, 0x2E);
        assert_eq!(a.lerp(b, 0.0).unwrap(), a);
        assert_eq!(a.lerp(b, 0.5).unwrap(), Rgb::new(136, 80, 32));
    }

    #[test]
    fn luminance_extremes() {
        assert!(relative_luminance(Rgb::new(0, 0, 0)).abs() < 1e-9);
        assert!((relative_luminance(Rgb::new(255, 255, 255)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
        assert!((ratio - 21.0).abs() < 1e-9, "ratio: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Rgb::new(0x79, 0x82, 0x83);
        let b = Rgb::new(0x12, 0x12, 0x12);
        assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < 1e-12);
        assert!(contrast_ratio(a, a) >= 1.0);
    }

    #[test]
    fn unparsable_hex_has_zero_contrast() {
        assert_eq!(hex_contrast_ratio("nope", "#121212"), 0.0);
    }
}
