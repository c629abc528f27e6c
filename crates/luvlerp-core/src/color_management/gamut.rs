//! Maximum in-gamut chroma for a given lightness and hue.
//!
//! In linear RGB the sRGB gamut is the unit cube. Slicing the cube at a fixed
//! lightness turns each of its six faces (R, G, B = 0 or 1) into a line in
//! the UV plane. The largest chroma reachable along a hue is the distance from
//! the achromatic origin to the nearest of those lines along the hue ray.
//!
//! # Algorithm
//! For each row `m` of the XYZ → RGB matrix and each face value `t ∈ {0, 1}`:
//! ```text
//! sub2   = ((L + 0.16) / 1.16)^3   if that exceeds ε, else L / κ
//! top1   = (2845.17 × m1 − 948.39 × m3) × sub2
//! top2   = (8384.22 × m3 + 7698.60 × m2 + 7317.18 × m1) × sub2 × L − 7698.60 × t × L
//! bottom = (6322.60 × m3 − 1264.52 × m2) × sub2 + 1264.52 × t
//! line   = (slope: top1 / bottom, intercept: top2 / bottom)
//! length = intercept / (sin H − slope × cos H)
//! ```
//! The result is the minimum non-negative `length` over the six lines.
//!
//! The numeric constants fold the reference white and κ into the sRGB rows
//! and only hold for [`XYZ_TO_LINEAR_SRGB`].
//!
//! # Complexity
//! O(1): six line intersections.

use super::color_space::XYZ_TO_LINEAR_SRGB;
use super::luv::{EPSILON, KAPPA};

/// A gamut face projected into the UV plane at a fixed lightness.
#[derive(Debug, Clone, Copy)]
struct BoundLine {
    slope: f32,
    intercept: f32,
}

impl BoundLine {
    /// Distance from the origin to this line along the ray at angle `(sin, cos)`.
    ///
    /// Negative when the ray points away from the line.
    fn ray_length(&self, sin: f32, cos: f32) -> f32 {
        self.intercept / (sin - self.slope * cos)
    }
}

/// The six gamut faces at lightness `l`.
fn bound_lines(l: f32) -> [BoundLine; 6] {
    let sub1 = (l + 0.16) / 1.16;
    let sub1 = sub1 * sub1 * sub1;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut lines = [BoundLine { slope: 0.0, intercept: 0.0 }; 6];
    for i in 0..3 {
        let [m1, m2, m3] = XYZ_TO_LINEAR_SRGB.row(i).map(|m| m * sub2);
        for (face, t) in [0.0_f32, 1.0].into_iter().enumerate() {
            let top1 = 2845.17 * m1 - 948.39 * m3;
            let top2 = (8384.22 * m3 + 7698.60 * m2 + 7317.18 * m1 - 7698.60 * t) * l;
            let bottom = (6322.60 * m3 - 1264.52 * m2) + 1264.52 * t;
            lines[i * 2 + face] = BoundLine {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }
    lines
}

/// Largest chroma at lightness `l` and hue `hue_rad` (radians) that stays
/// inside the sRGB gamut.
///
/// `l` is expected strictly between 0 and 1; callers short-circuit the
/// black and white extremes before asking.
pub fn max_chroma(l: f32, hue_rad: f32) -> f32 {
    let (sin, cos) = hue_rad.sin_cos();
    bound_lines(l)
        .iter()
        .map(|line| line.ray_length(sin, cos))
        .filter(|&length| length >= 0.0)
        .fold(f32::MAX, f32::min)
}
