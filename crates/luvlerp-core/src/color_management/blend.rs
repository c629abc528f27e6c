//! Lightness-preserving blending in linear RGB.
//!
//! Mixing linear light keeps hues from drifting through unrelated colors,
//! but CIE lightness is not linear in luminance, so a straight mix of two
//! colors reads darker (or brighter) than either end suggests. The blend is
//! therefore rescaled so its lightness lands on the linear mix of the two
//! endpoint lightnesses.
//!
//! ```text
//! L_target = lerp(L(from), L(to), a)
//! trial    = lerp(from, to, a)                 per channel
//! out      = trial × Y(L_target) / Y(trial)    if L(trial) >= 1e-5
//! ```
//!
//! Luminance `Y` is linear in the channels while `L` is not, so the scale is
//! a luminance ratio. A uniform scale in linear RGB leaves chromaticity
//! untouched, so only the brightness of the trial color changes.

use super::color_space::LINEAR_SRGB_TO_XYZ;
use super::luv::{LIGHTNESS_FLOOR, l_to_y, y_to_l};

/// Relative luminance `Y` of a linear RGB triplet.
pub fn linear_luminance(rgb: [f32; 3]) -> f32 {
    LINEAR_SRGB_TO_XYZ.apply_row(1, rgb)
}

/// CIE lightness (0–1) of a linear RGB triplet.
pub fn linear_lightness(rgb: [f32; 3]) -> f32 {
    y_to_l(linear_luminance(rgb))
}

/// Blend two linear RGB triplets by `a`, correcting the result's lightness.
///
/// The output is not clamped.
pub fn lerp_preserving_lightness(from: [f32; 3], to: [f32; 3], a: f32) -> [f32; 3] {
    let from_l = linear_lightness(from);
    let target_l = from_l + (linear_lightness(to) - from_l) * a;

    let mut trial = [0.0_f32; 3];
    for c in 0..3 {
        trial[c] = from[c] + (to[c] - from[c]) * a;
    }

    let trial_y = linear_luminance(trial);
    let trial_l = y_to_l(trial_y);
    if trial_l < LIGHTNESS_FLOOR {
        tracing::trace!(trial_l, "blend too dark for lightness correction");
        return trial;
    }
    let scale = l_to_y(target_l) / trial_y;
    trial.map(|c| c * scale)
}
