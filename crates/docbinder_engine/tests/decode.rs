use docbinder_engine::decode_body;
use pretty_assertions::assert_eq;

#[test]
fn a_utf8_bom_wins_over_a_conflicting_header_charset() {
    let mut bytes = b"\xef\xbb\xbf".to_vec();
    bytes.extend_from_slice("caf\u{e9}".as_bytes());

    let decoded = decode_body(&bytes, Some("text/html; charset=ISO-8859-1")).unwrap();
    assert_eq!(decoded.text, "caf\u{e9}");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn a_utf16_bom_is_honoured_without_any_header() {
    // "hi" in UTF-16LE behind its BOM.
    let bytes = b"\xff\xfeh\x00i\x00".to_vec();

    let decoded = decode_body(&bytes, None).unwrap();
    assert_eq!(decoded.text, "hi");
    assert_eq!(decoded.encoding_label, "UTF-16LE");
}

#[test]
fn undecodable_bytes_surface_the_encoding_name() {
    // 0xff can never appear in well-formed UTF-8.
    let err = decode_body(b"abc\xff", Some("text/html; charset=utf-8")).unwrap_err();
    assert_eq!(err, "UTF-8");
}

#[test]
fn header_charset_applies_when_there_is_no_bom() {
    let decoded = decode_body(b"caf\xe9", Some("text/html; charset=ISO-8859-1")).unwrap();
    assert_eq!(decoded.text, "caf\u{e9}");
    assert_eq!(decoded.encoding_label, "windows-1252");
}
