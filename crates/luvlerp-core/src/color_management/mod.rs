//! Color management — transfer function, XYZ/LUV/LCh conversions, the sRGB
//! gamut boundary, and lightness-preserving blending.

pub mod blend;
pub mod color_space;
pub mod gamut;
pub mod luv;
pub mod transfer;
