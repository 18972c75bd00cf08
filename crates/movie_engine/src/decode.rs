use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use scrape_logging::{scrape_trace, scrape_warn};

use crate::FetchOutput;

/// Response body as text, plus the encoding it was read with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBody {
    pub html: String,
    pub encoding_label: &'static str,
    pub had_errors: bool,
}

/// Decode raw bytes into UTF-8 using: BOM -> Content-Type charset -> chardetng fallback.
///
/// Undecodable sequences become U+FFFD; `had_errors` reports whether any were seen.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> DecodedBody {
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
    DecodedBody {
        html: text.into_owned(),
        encoding_label: encoding.name(),
        had_errors,
    }
}

/// Decodes a fetched page, logging lossy decodes against its url.
pub(crate) fn decode_page(output: &FetchOutput) -> String {
    let decoded = decode_body(&output.bytes, output.metadata.content_type.as_deref());
    if decoded.had_errors {
        scrape_warn!(
            "{} contained bytes invalid for {}",
            output.metadata.original_url,
            decoded.encoding_label
        );
    }
    scrape_trace!(
        "{} decoded as {}",
        output.metadata.original_url,
        decoded.encoding_label
    );
    decoded.html
}

fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']))
    })
}
