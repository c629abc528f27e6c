//! sRGB transfer function (OETF/EOTF).
//!
//! Converts between gamma-encoded sRGB channel values and linear light.
//! Applied channel-wise; every other stage of the pipeline works on the
//! linear side of this curve.

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f32) -> f32;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f32) -> f32;

    /// Decode all three channels of an encoded triplet.
    fn to_linear_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        rgb.map(|c| self.to_linear(c))
    }

    /// Encode all three channels of a linear triplet.
    fn to_encoded_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        rgb.map(|c| self.to_encoded(c))
    }
}

/// sRGB transfer function per IEC 61966-2-1.
///
/// ```text
/// to_linear:   V <= 0.04045 → V / 12.92
///              V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
///
/// to_encoded:  L <= 0.0031308 → L × 12.92
///              L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SrgbTransfer;

impl SrgbTransfer {
    const ENCODED_CUT: f32 = 0.04045;
    const LINEAR_CUT: f32 = 0.0031308;
    const SLOPE: f32 = 12.92;
    const GAMMA: f32 = 2.4;
}

impl TransferFunction for SrgbTransfer {
    fn to_linear(&self, encoded: f32) -> f32 {
        if encoded <= Self::ENCODED_CUT {
            encoded / Self::SLOPE
        } else {
            ((encoded + 0.055) / 1.055).powf(Self::GAMMA)
        }
    }

    fn to_encoded(&self, linear: f32) -> f32 {
        if linear <= Self::LINEAR_CUT {
            linear * Self::SLOPE
        } else {
            1.055 * linear.powf(1.0 / Self::GAMMA) - 0.055
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_srgb_linearize_roundtrip_preserves_values() {
        let tf = SrgbTransfer;
        for v in [0.0, 0.001, 0.003, 0.01, 0.04, 0.1, 0.5, 0.9, 1.0] {
            let encoded = tf.to_encoded(v);
            let back = tf.to_linear(encoded);
            assert!(
                (v - back).abs() < EPSILON,
                "roundtrip failed for {v}: encoded={encoded}, back={back}"
            );
        }
    }

    #[test]
    fn test_srgb_linearize_known_values() {
        let tf = SrgbTransfer;
        assert!((tf.to_linear(0.0) - 0.0).abs() < EPSILON);
        assert!((tf.to_linear(1.0) - 1.0).abs() < EPSILON);
        // Mid-gray sRGB ≈ 0.5 encodes ~0.214 linear
        assert!((tf.to_linear(0.5) - 0.214041).abs() < 0.001);
        // Linear toe segment
        assert!((tf.to_linear(0.04) - 0.04 / 12.92).abs() < 1e-7);
    }

    #[test]
    fn test_srgb_triplet_helpers_apply_per_channel() {
        let tf = SrgbTransfer;
        let rgb = [0.2, 0.5, 0.8];
        let linear = tf.to_linear_rgb(rgb);
        for c in 0..3 {
            assert_eq!(linear[c], tf.to_linear(rgb[c]));
        }
        let back = tf.to_encoded_rgb(linear);
        for c in 0..3 {
            assert!((back[c] - rgb[c]).abs() < EPSILON);
        }
    }
}
