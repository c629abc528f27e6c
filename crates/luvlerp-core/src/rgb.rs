//! Gamma-encoded sRGB color value.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color_management::blend::lerp_preserving_lightness;
use crate::color_management::transfer::{SrgbTransfer, TransferFunction};
use crate::error::ColorParseError;
use crate::hsluv::Hsluv;

/// An sRGB color with channels clamped to `[0, 1]`.
///
/// Equality and hashing compare the 8-bit quantized channels, so two colors
/// that pack to the same `0xRRGGBB` are equal. Serializes as its `RRGGBB`
/// hex string.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    r: f32,
    g: f32,
    b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    /// Create a color, clamping each channel to `[0, 1]`.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create a color from a packed `0xRRGGBB` integer. Bits above the low 24 are ignored.
    pub fn from_packed(rgb: u32) -> Self {
        let channel = |shift: u32| ((rgb >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Encode a linear RGB triplet, clamping the result into gamut.
    pub(crate) fn from_linear(linear: [f32; 3]) -> Self {
        let [r, g, b] = SrgbTransfer.to_encoded_rgb(linear);
        Self::new(r, g, b)
    }

    pub fn r(&self) -> f32 {
        self.r
    }

    pub fn g(&self) -> f32 {
        self.g
    }

    pub fn b(&self) -> f32 {
        self.b
    }

    /// Overwrite all three channels, clamping each to `[0, 1]`.
    pub fn set(&mut self, r: f32, g: f32, b: f32) -> &mut Self {
        *self = Self::new(r, g, b);
        self
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels with the sRGB transfer function removed.
    pub fn to_linear(self) -> [f32; 3] {
        SrgbTransfer.to_linear_rgb(self.to_array())
    }

    pub fn to_hsluv(self) -> Hsluv {
        Hsluv::from_rgb(self)
    }

    /// Channels quantized to bytes: `round(255 × c)`, clamped to `[0, 255]`.
    pub fn to_bytes(self) -> [u8; 3] {
        self.to_array().map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    /// Pack into `0xRRGGBB`.
    pub fn to_packed(self) -> u32 {
        let [r, g, b] = self.to_bytes();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Interpolate toward `target` by `a` without a brightness dip.
    ///
    /// Blends in linear light and rescales so the result's CIE lightness is
    /// the linear mix of the two endpoint lightnesses. `a == 0` and `a == 1`
    /// return the endpoints untouched.
    pub fn lerp(self, target: Rgb, a: f32) -> Rgb {
        if a == 0.0 {
            return self;
        }
        if a == 1.0 {
            return target;
        }
        Self::from_linear(lerp_preserving_lightness(self.to_linear(), target.to_linear(), a))
    }
}

impl PartialEq for Rgb {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for Rgb {}

impl Hash for Rgb {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state);
    }
}

impl From<[f32; 3]> for Rgb {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [f32; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl From<Hsluv> for Rgb {
    fn from(hsluv: Hsluv) -> Self {
        hsluv.to_rgb()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06x}", self.to_packed())
    }
}

impl fmt::LowerHex for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_packed(), f)
    }
}

impl fmt::UpperHex for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.to_packed(), f)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Parse `RRGGBB`, with or without a leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let len = digits.chars().count();
        if len != 6 {
            tracing::debug!(input = s, "rejected hex color of wrong length");
            return Err(ColorParseError::Length(len));
        }
        // from_str_radix alone would accept a leading '+'.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            tracing::debug!(input = s, "rejected non-hex color");
            return Err(ColorParseError::InvalidHex(s.to_string()));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidHex(s.to_string()))?;
        Ok(Self::from_packed(packed))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_string()
    }
}
