//! serde round-trip of `Rgb` through its `RRGGBB` hex string form.

use luvlerp_core::{ColorParseError, Rgb};

#[test]
fn test_rgb_serializes_as_hex_string() {
    let json = serde_json::to_string(&Rgb::from_packed(0x336699)).unwrap();
    assert_eq!(json, "\"336699\"");
}

#[test]
fn test_rgb_deserializes_from_hex_string() {
    let rgb: Rgb = serde_json::from_str("\"#0a0B0c\"").unwrap();
    assert_eq!(rgb.to_packed(), 0x0a0b0c);

    let list: Vec<Rgb> = serde_json::from_str(r#"["ff0000", "00ff00"]"#).unwrap();
    assert_eq!(list, vec![Rgb::from_packed(0xff0000), Rgb::from_packed(0x00ff00)]);
}

#[test]
fn test_rgb_rejects_malformed_json_string() {
    let err = serde_json::from_str::<Rgb>("\"12345\"").unwrap_err();
    assert!(
        err.to_string().contains(&ColorParseError::Length(5).to_string()),
        "unexpected error: {err}"
    );
    assert!(serde_json::from_str::<Rgb>("[1.0, 0.0, 0.0]").is_err());
}
