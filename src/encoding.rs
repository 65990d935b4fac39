//! Encoding detection and transcoding module
//!
//! Decodes a downloaded word list body to UTF-8 and splits it into lines.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

use crate::error::SourceError;

/// Number of leading bytes fed to the detector
const SAMPLE_SIZE: usize = 64 * 1024;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Confidence level (0.0 - 1.0)
    pub confidence: f32,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
    /// Length of the byte order mark, if one was found
    pub bom_len: usize,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            confidence: 1.0,
            encoding: encoding_rs::UTF_8,
            bom_len: 0,
        }
    }
}

/// Detect the encoding of a response body by sampling its content
pub fn detect_encoding(body: &[u8]) -> EncodingInfo {
    if body.is_empty() {
        return EncodingInfo::default();
    }

    if let Some((encoding, bom_len)) = detect_bom(body) {
        return EncodingInfo {
            name: encoding.name(),
            confidence: 1.0,
            encoding,
            bom_len,
        };
    }

    let sample = &body[..body.len().min(SAMPLE_SIZE)];
    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == body.len());

    let encoding = detector.guess(None, true);

    let confidence = if encoding == encoding_rs::UTF_8 {
        if std::str::from_utf8(sample).is_ok() {
            1.0
        } else {
            0.5
        }
    } else {
        0.8
    };

    EncodingInfo {
        name: encoding.name(),
        confidence,
        encoding,
        bom_len: 0,
    }
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<(&'static Encoding, usize)> {
    if content.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Some((encoding_rs::UTF_8, 3));
    }
    if content.starts_with(&[0xFE, 0xFF]) {
        return Some((encoding_rs::UTF_16BE, 2));
    }
    if content.starts_with(&[0xFF, 0xFE]) {
        return Some((encoding_rs::UTF_16LE, 2));
    }
    None
}

/// True if `body` carries UTF-8 evidence: a valid multibyte sequence, an
/// invalid sequence starting with a UTF-8 lead byte (0xC2..=0xF4), or a
/// sequence cut off at the end.
fn looks_like_utf8(body: &[u8]) -> bool {
    let mut rest = body;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => return !valid.is_ascii(),
            Err(e) => {
                let (valid, invalid) = rest.split_at(e.valid_up_to());
                if !valid.is_ascii() {
                    return true;
                }
                if matches!(invalid.first().copied(), Some(0xC2..=0xF4)) {
                    return true;
                }
                match e.error_len() {
                    Some(len) => rest = &invalid[len..],
                    None => return true,
                }
            }
        }
    }
}

/// Decode a whole body to text.
///
/// Without a BOM the body is expected to be UTF-8. Damaged UTF-8 is a parse
/// error; the detected legacy encoding is only used for bodies whose high
/// bytes cannot start a UTF-8 sequence. Nothing is decoded lossily.
pub fn decode_body(body: &[u8]) -> Result<String, SourceError> {
    let info = detect_encoding(body);

    if info.bom_len == 0 {
        match std::str::from_utf8(body) {
            Ok(text) => return Ok(text.to_string()),
            Err(e) if looks_like_utf8(body) => {
                return Err(SourceError::Parse(format!(
                    "body is not valid UTF-8 (invalid byte at offset {})",
                    e.valid_up_to()
                )))
            }
            Err(_) => {}
        }
    }

    log::debug!(
        "Detected word list encoding {} (confidence {:.1})",
        info.name,
        info.confidence
    );

    let payload = &body[info.bom_len..];
    info.encoding
        .decode_without_bom_handling_and_without_replacement(payload)
        .map(|text| text.into_owned())
        .ok_or_else(|| SourceError::Parse(format!("body is not valid {}", info.name)))
}

/// Split text into words, one per line.
///
/// Both `\r\n` and `\n` terminate a line. Blank lines are skipped.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_detection() {
        let info = detect_encoding("Hello, World!\nПривет мир!\n".as_bytes());
        assert_eq!(info.name, "UTF-8");
        assert_eq!(info.bom_len, 0);
    }

    #[test]
    fn test_bom_is_stripped() {
        let decoded = decode_body(b"\xEF\xBB\xBFCRANE\r\nSLATE\r\n").unwrap();
        assert_eq!(decoded, "CRANE\r\nSLATE\r\n");
    }

    #[test]
    fn test_utf16_body() {
        let mut body = vec![0xFF, 0xFE];
        for unit in "abc\r\n".encode_utf16() {
            body.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_body(&body).unwrap(), "abc\r\n");
    }

    #[test]
    fn test_truncated_utf16_is_parse_error() {
        let result = decode_body(&[0xFF, 0xFE, 0x61]);
        assert!(matches!(result, Err(SourceError::Parse(_))));
    }

    #[test]
    fn test_malformed_utf8_is_parse_error() {
        // lead byte cut off by the line break
        let result = decode_body(b"CRANE\r\nCAF\xC3\r\nSLATE\r\n");
        assert!(matches!(result, Err(SourceError::Parse(_))));

        // valid multibyte word followed by a stray lead byte
        let mut body = "CRANE\r\nCAFÉ\r\n".as_bytes().to_vec();
        body.push(0xC3);
        assert!(matches!(decode_body(&body), Err(SourceError::Parse(_))));
    }

    #[test]
    fn test_valid_utf8_is_kept() {
        let decoded = decode_body("CRANE\r\nCAFÉ\r\n".as_bytes()).unwrap();
        assert_eq!(decoded, "CRANE\r\nCAFÉ\r\n");
    }

    #[test]
    fn test_legacy_single_byte_body() {
        // 0xB0 cannot start a UTF-8 sequence
        let decoded = decode_body(b"CRANE\r\nANGLE\r\n90\xB0\r\n").unwrap();
        assert!(decoded.starts_with("CRANE\r\nANGLE\r\n90"));
        assert!(!decoded.is_ascii());
    }

    #[test]
    fn test_utf8_evidence() {
        assert!(!looks_like_utf8(b"plain ascii"));
        assert!(!looks_like_utf8(b"90\xB0 and \x92"));
        assert!(looks_like_utf8(b"caf\xC3"));
        assert!(looks_like_utf8("é".as_bytes()));
        assert!(looks_like_utf8(b"ok\xE2\x82"));
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(decode_body(b"").unwrap(), "");
    }

    #[test]
    fn test_split_crlf_lines() {
        let lines = split_lines("AARDVARK\r\nABACK\r\nABANDON\r\n");
        assert_eq!(lines, vec!["AARDVARK", "ABACK", "ABANDON"]);
    }

    #[test]
    fn test_split_mixed_terminators() {
        let lines = split_lines("one\ntwo\r\n\r\n  three  \nfour");
        assert_eq!(lines, vec!["one", "two", "three", "four"]);
    }
}
