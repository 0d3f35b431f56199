//! Byte encodings of report documents and view descriptors.
//!
//! Producers write JSON. CBOR is accepted wherever JSON is, and a loaded
//! document's encoding is recognised from its first significant byte.

use serde::{Serialize, de::DeserializeOwned};
use tracing::trace;

use crate::error::Result;

/// Marker some Windows tools put in front of UTF-8 text.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

fn without_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Pretty-printed text; what the report producers write.
    #[default]
    Json,
    Cbor,
}

impl Format {
    /// Guess the encoding of `data`.
    ///
    /// A document whose first byte after an optional BOM and any ASCII
    /// whitespace opens an object or array is JSON. Anything else is CBOR.
    pub fn sniff(data: &[u8]) -> Self {
        let first = without_bom(data)
            .iter()
            .copied()
            .find(|b| !b.is_ascii_whitespace());
        if matches!(first, Some(b'{' | b'[')) {
            Format::Json
        } else {
            Format::Cbor
        }
    }

    pub fn to_bytes<T: Serialize>(self, value: &T) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        match self {
            Format::Json => serde_json::to_writer_pretty(&mut out, value)?,
            Format::Cbor => ciborium::into_writer(value, &mut out)?,
        }
        Ok(out)
    }

    pub fn from_bytes<T: DeserializeOwned>(self, data: &[u8]) -> Result<T> {
        let value = match self {
            Format::Json => serde_json::from_slice(without_bom(data))?,
            Format::Cbor => ciborium::from_reader(data)?,
        };
        Ok(value)
    }
}

/// Serialize `value` as `format`.
pub fn encode<T: Serialize>(value: &T, format: Format) -> Result<Vec<u8>> {
    format.to_bytes(value)
}

/// Deserialize `data`, which must be in `format`.
pub fn decode<T: DeserializeOwned>(data: &[u8], format: Format) -> Result<T> {
    format.from_bytes(data)
}

pub fn detect_format(data: &[u8]) -> Format {
    Format::sniff(data)
}

/// Deserialize `data` in whichever encoding it turns out to be.
pub fn decode_auto<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
    let format = Format::sniff(data);
    trace!(?format, len = data.len(), "Decoding document");
    format.from_bytes(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::report::{GenreProgress, ProgressReport};

    fn horror_and_drama() -> ProgressReport {
        ProgressReport {
            percent: 50,
            done: 1,
            total: 2,
            genres: vec![
                GenreProgress::new("Horror", 10, 6, 2).with_status("⏳"),
                GenreProgress::new("Drama", 4, 4, 4).with_status("✅"),
            ],
        }
    }

    #[test]
    fn test_json_is_pretty_and_readable_back() {
        let report = horror_and_drama();
        let bytes = encode(&report, Format::Json).unwrap();

        let text = std::str::from_utf8(&bytes).unwrap();
        assert!(text.starts_with("{\n"));
        assert!(text.contains("\"genre\": \"Horror\""));

        let back: ProgressReport = decode(&bytes, Format::Json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_cbor_output_is_binary_and_compact() {
        let report = horror_and_drama();
        let json = encode(&report, Format::Json).unwrap();
        let cbor = encode(&report, Format::Cbor).unwrap();

        assert!(cbor.len() < json.len());
        assert_eq!(Format::sniff(&cbor), Format::Cbor);
    }

    #[test]
    fn test_sniff() {
        assert_eq!(detect_format(b"[1, 2, 3]"), Format::Json);
        assert_eq!(detect_format(b"\r\n\t {\"genres\": []}"), Format::Json);
        assert_eq!(detect_format(b"\xef\xbb\xbf{}"), Format::Json);
        assert_eq!(detect_format(b"\xa1\x63key\x65value"), Format::Cbor);
        assert_eq!(detect_format(b"   "), Format::Cbor);
        assert_eq!(detect_format(b""), Format::Cbor);
    }

    #[test]
    fn test_decode_auto_accepts_both_encodings() {
        let report = horror_and_drama();

        let cbor = encode(&report, Format::Cbor).unwrap();
        let from_cbor: ProgressReport = decode_auto(&cbor).unwrap();
        assert_eq!(from_cbor.genres[0].genre, "Horror");

        let mut json = UTF8_BOM.to_vec();
        json.extend(encode(&report, Format::Json).unwrap());
        let from_json: ProgressReport = decode_auto(&json).unwrap();
        assert_eq!(from_json, report);
    }

    #[test]
    fn test_truncated_cbor_is_a_cbor_error() {
        let cbor = encode(&horror_and_drama(), Format::Cbor).unwrap();
        let err = decode_auto::<ProgressReport>(&cbor[..cbor.len() / 2]).unwrap_err();
        assert!(matches!(err, Error::Cbor(_)));
    }
}
