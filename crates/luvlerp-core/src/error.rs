/// Failure to parse the `RRGGBB` hex form of an [`Rgb`](crate::Rgb).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, found {0} characters")]
    Length(usize),
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}
