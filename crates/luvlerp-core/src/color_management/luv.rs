//! CIE XYZ ↔ CIE LUV ↔ LCh(uv) conversions.
//!
//! Lightness is kept on a 0–1 scale rather than CIE's 0–100, so `KAPPA` is
//! the usual 903.3 divided by 100.
//!
//! ```text
//! L = Y × κ                  Y <= ε
//! L = 1.16 × Y^(1/3) − 0.16  Y >  ε
//!
//! U = 13L × (4X / (X + 15Y + 3Z) − u'n)
//! V = 13L × (9Y / (X + 15Y + 3Z) − v'n)
//! ```
//!
//! # Reference
//! - CIE 15:2004 — Colorimetry, 3rd edition
//! - <https://www.hsluv.org/math/>

/// Chromaticity u' of the D65 reference white.
#[allow(clippy::excessive_precision)]
pub const REF_U: f32 = 0.19783000664283;
/// Chromaticity v' of the D65 reference white.
#[allow(clippy::excessive_precision)]
pub const REF_V: f32 = 0.46831999493879;
/// Slope of the linear segment of the lightness curve (0–1 lightness scale).
pub const KAPPA: f32 = 9.032962962;
/// Luminance at which the lightness curve switches from linear to cube root.
pub const EPSILON: f32 = 0.0088564516;

/// Lightness (and chroma) below which a color is treated as black/achromatic.
pub const LIGHTNESS_FLOOR: f32 = 0.00001;
/// Lightness above which a color is treated as pure white.
pub const LIGHTNESS_CEIL: f32 = 0.99999;

/// Lightness at which the inverse curve switches segments.
const INVERSE_PIVOT: f32 = 0.08;

/// CIE lightness from relative luminance `Y`.
pub fn y_to_l(y: f32) -> f32 {
    if y <= EPSILON {
        y * KAPPA
    } else {
        1.16 * y.powf(1.0 / 3.0) - 0.16
    }
}

/// Relative luminance `Y` from CIE lightness.
pub fn l_to_y(l: f32) -> f32 {
    if l <= INVERSE_PIVOT {
        l / KAPPA
    } else {
        let y = (l + 0.16) / 1.16;
        y * y * y
    }
}

/// XYZ → LUV, deriving lightness from `Y`.
pub fn xyz_to_luv(xyz: [f32; 3]) -> [f32; 3] {
    xyz_to_luv_with_lightness(xyz, y_to_l(xyz[1]))
}

/// XYZ → LUV using a caller-supplied lightness instead of the one implied by `Y`.
///
/// Only the chromaticity of `xyz` is used, so any uniform scale of the input
/// yields the same `U`/`V`.
pub fn xyz_to_luv_with_lightness(xyz: [f32; 3], l: f32) -> [f32; 3] {
    if l < LIGHTNESS_FLOOR {
        return [0.0, 0.0, 0.0];
    }
    let [x, y, z] = xyz;
    let denom = x + 15.0 * y + 3.0 * z;
    let u = 13.0 * l * (4.0 * x / denom - REF_U);
    let v = 13.0 * l * (9.0 * y / denom - REF_V);
    [l, u, v]
}

/// LUV → XYZ.
pub fn luv_to_xyz(luv: [f32; 3]) -> [f32; 3] {
    let [l, u, v] = luv;
    if l < LIGHTNESS_FLOOR {
        return [0.0, 0.0, 0.0];
    }
    let y = l_to_y(l);
    let var_u = u / (13.0 * l) + REF_U;
    let var_v = v / (13.0 * l) + REF_V;
    let x = 9.0 * var_u * y / (4.0 * var_v);
    let z = (3.0 * y / var_v) - x / 3.0 - 5.0 * y;
    [x, y, z]
}

/// LUV → LCh, hue in degrees `[0, 360)`.
///
/// Chroma below [`LIGHTNESS_FLOOR`] has no meaningful hue and reports 0.
pub fn luv_to_lch(luv: [f32; 3]) -> [f32; 3] {
    let [l, u, v] = luv;
    let c = (u * u + v * v).sqrt();
    let h = if c < LIGHTNESS_FLOOR {
        0.0
    } else {
        let h = v.atan2(u).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    };
    [l, c, h]
}

/// LCh → LUV, hue in degrees.
pub fn lch_to_luv(lch: [f32; 3]) -> [f32; 3] {
    let [l, c, h] = lch;
    let (sin, cos) = h.to_radians().sin_cos();
    [l, cos * c, sin * c]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_management::color_space::linear_srgb_to_xyz;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn test_lightness_roundtrip_across_pivot() {
        for l in [0.0, 0.01, 0.05, 0.079, 0.081, 0.2, 0.5, 0.9, 1.0] {
            let back = y_to_l(l_to_y(l));
            assert!((back - l).abs() < TOLERANCE, "L={l}: back={back}");
        }
    }

    #[test]
    fn test_lightness_of_white_is_one() {
        assert!((y_to_l(1.0) - 1.0).abs() < TOLERANCE);
        assert_eq!(y_to_l(0.0), 0.0);
    }

    #[test]
    fn test_white_has_no_chroma() {
        let luv = xyz_to_luv(linear_srgb_to_xyz([1.0, 1.0, 1.0]));
        assert!((luv[0] - 1.0).abs() < TOLERANCE);
        assert!(luv[1].abs() < 1e-4, "U={}", luv[1]);
        assert!(luv[2].abs() < 1e-4, "V={}", luv[2]);
    }

    #[test]
    fn test_black_is_degenerate_zero() {
        assert_eq!(xyz_to_luv([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(luv_to_xyz([0.0, 0.3, -0.2]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_luv_xyz_roundtrip() {
        for rgb in [[0.8, 0.1, 0.3], [0.02, 0.05, 0.01], [0.4, 0.4, 0.9]] {
            let xyz = linear_srgb_to_xyz(rgb);
            let back = luv_to_xyz(xyz_to_luv(xyz));
            for c in 0..3 {
                assert!(
                    (back[c] - xyz[c]).abs() < TOLERANCE,
                    "channel {c}: {:.8} vs {:.8}",
                    back[c],
                    xyz[c]
                );
            }
        }
    }

    #[test]
    fn test_lch_hue_is_normalized_positive() {
        let [_, c, h] = luv_to_lch([0.5, 0.1, -0.1]);
        assert!((c - 0.02_f32.sqrt()).abs() < TOLERANCE);
        assert!((h - 315.0).abs() < 1e-3, "h={h}");
    }

    #[test]
    fn test_lch_tiny_chroma_reports_zero_hue() {
        let [_, _, h] = luv_to_lch([0.5, 0.000001, 0.000001]);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_lch_luv_roundtrip() {
        let luv = [0.6, -0.3, 0.45];
        let back = lch_to_luv(luv_to_lch(luv));
        for c in 0..3 {
            assert!((back[c] - luv[c]).abs() < TOLERANCE);
        }
    }
}
