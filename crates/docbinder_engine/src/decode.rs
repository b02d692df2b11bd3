use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Decoded response body plus the name of the encoding that was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBody {
    pub text: String,
    pub encoding_label: String,
}

/// Decode raw body bytes to UTF-8: BOM, then Content-Type charset, then a
/// chardetng guess over the full body.
///
/// `Err` carries the name of the encoding that rejected the bytes.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedBody, String> {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| {
            content_type
                .and_then(charset_label)
                .and_then(|label| Encoding::for_label(label.as_bytes()))
        })
        .unwrap_or_else(|| {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        });

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(encoding.name().to_string());
    }
    Ok(DecodedBody {
        text: text.into_owned(),
        encoding_label: encoding.name().to_string(),
    })
}

fn charset_label(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        if key.eq_ignore_ascii_case("charset") {
            Some(value.trim_matches([' ', '"', '\'']).to_string())
        } else {
            None
        }
    })
}
