//! sRGB/D65 primaries as 3x3 matrix transforms between linear RGB and CIE XYZ.
//!
//! The coefficients are reproduced to `f32` precision exactly as the HSLuv
//! reference publishes them. The gamut-boundary math in [`super::gamut`] is
//! derived from these rows, so they must not be recomputed from primaries.

/// A 3x3 color matrix for linear color space conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f32; 3]; 3]);

/// CIE XYZ → linear sRGB (`M`).
#[allow(clippy::excessive_precision)]
pub const XYZ_TO_LINEAR_SRGB: ColorMatrix = ColorMatrix([
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
]);

/// Linear sRGB → CIE XYZ (`Minv`).
#[allow(clippy::excessive_precision)]
pub const LINEAR_SRGB_TO_XYZ: ColorMatrix = ColorMatrix([
    [0.41239079926595, 0.35758433938387, 0.18048078840183],
    [0.21263900587151, 0.71516867876775, 0.072192315360733],
    [0.019330818715591, 0.11919477979462, 0.95053215224966],
]);

impl ColorMatrix {
    /// Row `i` of the matrix.
    pub const fn row(&self, i: usize) -> [f32; 3] {
        self.0[i]
    }

    /// Dot product of row `i` with `v`, without computing the other rows.
    pub fn apply_row(&self, i: usize, v: [f32; 3]) -> f32 {
        dot(self.0[i], v)
    }

    /// Apply this matrix to an RGB triplet.
    pub fn apply(&self, v: [f32; 3]) -> [f32; 3] {
        [dot(self.0[0], v), dot(self.0[1], v), dot(self.0[2], v)]
    }
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Linear sRGB to XYZ.
pub fn linear_srgb_to_xyz(rgb: [f32; 3]) -> [f32; 3] {
    LINEAR_SRGB_TO_XYZ.apply(rgb)
}

/// XYZ to linear sRGB. The result is not clamped to the gamut.
pub fn xyz_to_linear_srgb(xyz: [f32; 3]) -> [f32; 3] {
    XYZ_TO_LINEAR_SRGB.apply(xyz)
}
