//! Luvlerp Core — sRGB ↔ HSLuv conversion and perceptual color interpolation.
//!
//! HSLuv re-parameterizes CIE LCh(uv) so that saturation is a fraction of the
//! largest chroma sRGB can show at a given lightness and hue. Interpolation
//! runs in linear RGB with a lightness correction so cross-fades neither dip
//! in brightness nor swing through unrelated hues. No I/O, no allocation on
//! the conversion path.

pub mod color_management;
pub mod error;
pub mod hsluv;
pub mod rgb;

// Re-exports for convenience.
pub use error::ColorParseError;
pub use hsluv::Hsluv;
pub use rgb::Rgb;
