//! Cross-checks the HSLuv conversion against palette's independent implementation.
//!
//! palette derives its sRGB matrix from the primaries rather than using the
//! published HSLuv coefficients, so agreement is only expected to a few
//! decimal places.

use luvlerp_core::Rgb;
use palette::{FromColor, Hsluv as ReferenceHsluv, Srgb};

fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

#[test]
fn test_hsluv_matches_palette() {
    let samples = [
        0xff0000, 0x00ff00, 0x0000ff, 0x336699, 0xffa500, 0x800080, 0x2e8b57, 0xc0c0c0,
        0x101010, 0xfafad2, 0x8b4513, 0x4682b4,
    ];
    for packed in samples {
        let rgb = Rgb::from_packed(packed);
        let ours = rgb.to_hsluv();
        let reference: ReferenceHsluv =
            ReferenceHsluv::from_color(Srgb::new(rgb.r(), rgb.g(), rgb.b()));

        assert!(
            (ours.lightness() - reference.l / 100.0).abs() < 2e-3,
            "{rgb}: lightness {} vs {}",
            ours.lightness(),
            reference.l / 100.0
        );
        assert!(
            (ours.saturation() - reference.saturation / 100.0).abs() < 1e-2,
            "{rgb}: saturation {} vs {}",
            ours.saturation(),
            reference.saturation / 100.0
        );
        if ours.saturation() > 0.05 {
            let reference_hue = reference.hue.into_positive_degrees();
            assert!(
                hue_distance(ours.hue(), reference_hue) < 0.5,
                "{rgb}: hue {} vs {reference_hue}",
                ours.hue()
            );
        }
    }
}
