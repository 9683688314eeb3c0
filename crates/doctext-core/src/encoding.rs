//! Ordered character-encoding fallback.
//!
//! A candidate list is tried front to back and the first encoding that
//! decodes the whole input wins. Callers own the wording of any failure;
//! this module only reports which candidates were tried.

use std::borrow::Cow;
use std::fmt;
use std::io::{Read, Seek};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ExtractError;
use crate::input::read_from_start;

/// Candidates for single-stream text files.
pub const TEXT_CANDIDATES: &[TextEncoding] = &[TextEncoding::Utf8, TextEncoding::Latin1];

/// Candidates for delimited tables.
///
/// Longer than [`TEXT_CANDIDATES`] for historical reasons. Since Latin-1
/// accepts every byte, the last two entries only matter when the list is
/// overridden through configuration.
pub const TABULAR_CANDIDATES: &[TextEncoding] = &[
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
    TextEncoding::Iso8859_1,
];

/// Bytes left unassigned by Windows code page 1252.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Windows1252,
    Iso8859_1,
}

impl TextEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Windows1252 => "cp1252",
            TextEncoding::Iso8859_1 => "iso-8859-1",
        }
    }

    /// Decode the whole buffer, or `None` if any byte sequence is invalid
    /// under this encoding.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            TextEncoding::Utf8 => {
                encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(bytes)
            }
            TextEncoding::Latin1 | TextEncoding::Iso8859_1 => {
                Some(encoding_rs::mem::decode_latin1(bytes))
            }
            TextEncoding::Windows1252 => {
                if bytes.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
                    return None;
                }
                encoding_rs::WINDOWS_1252.decode_without_bom_handling_and_without_replacement(bytes)
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin-1" | "latin1" | "l1" => Ok(TextEncoding::Latin1),
            "cp1252" | "windows-1252" => Ok(TextEncoding::Windows1252),
            "iso-8859-1" | "iso8859-1" => Ok(TextEncoding::Iso8859_1),
            _ => Err(format!("unknown encoding '{s}'")),
        }
    }
}

impl Serialize for TextEncoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TextEncoding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Text decoded by one of the candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: TextEncoding,
}

/// Try each candidate against an in-memory buffer.
pub fn decode_first(bytes: &[u8], candidates: &[TextEncoding]) -> Option<Decoded> {
    candidates.iter().find_map(|encoding| {
        encoding.decode(bytes).map(|text| Decoded {
            text: text.into_owned(),
            encoding: *encoding,
        })
    })
}

/// Try each candidate against a seekable stream, rewinding and re-reading
/// it before every attempt.
pub fn decode_stream<R: Read + Seek + ?Sized>(
    reader: &mut R,
    candidates: &[TextEncoding],
) -> Result<Decoded, ExtractError> {
    for encoding in candidates {
        let bytes = read_from_start(reader)?;
        if let Some(text) = encoding.decode(&bytes) {
            log::debug!("decoded {} bytes as {}", bytes.len(), encoding);
            return Ok(Decoded {
                text: text.into_owned(),
                encoding: *encoding,
            });
        }
        log::debug!("{} decode failed, trying next candidate", encoding);
    }

    Err(ExtractError::DecodeExhausted {
        tried: candidates.iter().map(|e| e.label()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn utf8_wins_for_valid_utf8() {
        let decoded = decode_first("Grüße".as_bytes(), TEXT_CANDIDATES).unwrap();
        assert_eq!(decoded.text, "Grüße");
        assert_eq!(decoded.encoding, TextEncoding::Utf8);
    }

    #[test]
    fn latin1_accepts_any_byte() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let decoded = TextEncoding::Latin1.decode(&bytes).unwrap();
        assert_eq!(decoded.chars().count(), 256);
        assert_eq!(decoded.chars().nth(0xE9), Some('é'));
    }

    #[test]
    fn latin1_fallback_for_invalid_utf8() {
        let decoded = decode_first(b"caf\xe9", TEXT_CANDIDATES).unwrap();
        assert_eq!(decoded.text, "café");
        assert_eq!(decoded.encoding, TextEncoding::Latin1);
    }

    #[test]
    fn cp1252_maps_euro_sign() {
        let decoded = TextEncoding::Windows1252.decode(b"\x80 5").unwrap();
        assert_eq!(decoded, "€ 5");
    }

    #[test]
    fn cp1252_rejects_undefined_bytes() {
        assert!(TextEncoding::Windows1252.decode(b"ab\x81").is_none());
    }

    #[test]
    fn cp1252_chosen_when_earlier_candidates_fail() {
        let candidates = [TextEncoding::Utf8, TextEncoding::Windows1252];
        let decoded = decode_first(b"\x93quoted\x94", &candidates).unwrap();
        assert_eq!(decoded.text, "\u{201c}quoted\u{201d}");
        assert_eq!(decoded.encoding, TextEncoding::Windows1252);
    }

    #[test]
    fn exhausted_candidates_report_labels() {
        let candidates = [TextEncoding::Utf8, TextEncoding::Windows1252];
        let mut cursor = Cursor::new(b"\xff\x81".to_vec());
        let err = decode_stream(&mut cursor, &candidates).unwrap_err();
        match err {
            ExtractError::DecodeExhausted { tried } => assert_eq!(tried, vec!["utf-8", "cp1252"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_stream_starts_from_zero() {
        let mut cursor = Cursor::new(b"hello".to_vec());
        cursor.set_position(3);
        let decoded = decode_stream(&mut cursor, TEXT_CANDIDATES).unwrap();
        assert_eq!(decoded.text, "hello");
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for enc in TABULAR_CANDIDATES {
            assert_eq!(enc.label().parse::<TextEncoding>().unwrap(), *enc);
        }
        assert_eq!("Windows-1252".parse::<TextEncoding>().unwrap(), TextEncoding::Windows1252);
        assert!("ebcdic".parse::<TextEncoding>().is_err());
    }
}
