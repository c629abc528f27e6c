//! HSLuv color value and its conversions to and from sRGB.
//!
//! # Pipeline
//! ```text
//!   sRGB ──→ linear ──→ XYZ ──→ LUV ──→ LCh ──→ HSLuv
//!                                        s = C / max_chroma(L, H)
//! ```
//! The reverse direction recovers `C = max_chroma(L, H) × s` and walks the
//! same stages back. Saturation 1 therefore always lands on the sRGB gamut
//! boundary, whatever the lightness and hue.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::color_management::blend::lerp_preserving_lightness;
use crate::color_management::color_space::{linear_srgb_to_xyz, xyz_to_linear_srgb};
use crate::color_management::gamut::max_chroma;
use crate::color_management::luv::{
    LIGHTNESS_CEIL, LIGHTNESS_FLOOR, lch_to_luv, luv_to_lch, luv_to_xyz, xyz_to_luv_with_lightness,
    y_to_l,
};
use crate::rgb::Rgb;

/// A color in HSLuv space.
///
/// Hue is in degrees `[0, 360]`; saturation and lightness are fractions
/// `[0, 1]`. Values are clamped on construction, never wrapped. Equality and
/// hashing compare the exact bit patterns of the clamped components.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hsluv {
    h: f32,
    s: f32,
    l: f32,
}

impl Hsluv {
    /// Create a color, clamping hue to `[0, 360]` and saturation/lightness to `[0, 1]`.
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: h.clamp(0.0, 360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    pub fn hue(&self) -> f32 {
        self.h
    }

    pub fn saturation(&self) -> f32 {
        self.s
    }

    pub fn lightness(&self) -> f32 {
        self.l
    }

    pub fn with_hue(self, h: f32) -> Self {
        Self::new(h, self.s, self.l)
    }

    pub fn with_saturation(self, s: f32) -> Self {
        Self::new(self.h, s, self.l)
    }

    pub fn with_lightness(self, l: f32) -> Self {
        Self::new(self.h, self.s, l)
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::from_linear(rgb.to_linear(), None)
    }

    /// Convert a packed `0xRRGGBB` integer directly.
    pub fn from_packed(rgb: u32) -> Self {
        Self::from_rgb(Rgb::from_packed(rgb))
    }

    /// Convert from linear RGB.
    ///
    /// With `lightness` set, that value replaces the lightness derived from
    /// `Y`; only the chromaticity of `linear` then matters.
    fn from_linear(linear: [f32; 3], lightness: Option<f32>) -> Self {
        let xyz = linear_srgb_to_xyz(linear);
        let l = lightness.unwrap_or_else(|| y_to_l(xyz[1]));
        let [l, c, h] = luv_to_lch(xyz_to_luv_with_lightness(xyz, l));

        if l > LIGHTNESS_CEIL {
            Self { h, s: 0.0, l: 1.0 }
        } else if l < LIGHTNESS_FLOOR {
            Self { h, s: 0.0, l: 0.0 }
        } else {
            let s = (c / max_chroma(l, h.to_radians())).min(1.0);
            Self { h, s, l }
        }
    }

    /// Linear RGB for this color. Not clamped; in-gamut colors may stray
    /// outside `[0, 1]` by float error.
    pub fn to_linear(&self) -> [f32; 3] {
        let (l, c) = if self.l > LIGHTNESS_CEIL {
            (1.0, 0.0)
        } else if self.l < LIGHTNESS_FLOOR {
            (0.0, 0.0)
        } else {
            (self.l, max_chroma(self.l, self.h.to_radians()) * self.s)
        };
        xyz_to_linear_srgb(luv_to_xyz(lch_to_luv([l, c, self.h])))
    }

    /// Gamma-encoded sRGB, clamped to `[0, 1]`.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_linear(self.to_linear())
    }

    /// Interpolate toward `target` by `a`.
    ///
    /// Lightness moves linearly from one end to the other. Hue and saturation
    /// come from the lightness-corrected linear RGB blend, so the path never
    /// detours through hues that neither endpoint has. `a == 0` and `a == 1`
    /// return the endpoints untouched.
    pub fn lerp(self, target: Hsluv, a: f32) -> Hsluv {
        if a == 0.0 {
            return self;
        }
        if a == 1.0 {
            return target;
        }
        let l = self.l + (target.l - self.l) * a;
        let linear = lerp_preserving_lightness(self.to_linear(), target.to_linear(), a);
        Self::from_linear(linear, Some(l))
    }

    /// Bit patterns of the components, with `-0.0` folded into `0.0`.
    fn key(&self) -> [u32; 3] {
        [self.h, self.s, self.l].map(|v| (v + 0.0).to_bits())
    }
}

impl PartialEq for Hsluv {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Hsluv {}

impl Hash for Hsluv {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<Rgb> for Hsluv {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl fmt::Display for Hsluv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.h, self.s, self.l)
    }
}
