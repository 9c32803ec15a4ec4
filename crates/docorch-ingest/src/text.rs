//! Plain-text decoding

use tracing::debug;

/// Candidate encodings for text uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// Strict UTF-8
    Utf8,
    /// ISO-8859-1; maps every byte, so it accepts any input
    Latin1,
    /// UTF-16 with optional BOM (little-endian without one)
    Utf16,
}

/// Order in which encodings are tried
pub const DECODE_ORDER: [TextEncoding; 3] =
    [TextEncoding::Utf8, TextEncoding::Latin1, TextEncoding::Utf16];

impl TextEncoding {
    /// Decode `bytes`, or `None` if they are not valid in this encoding
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_string),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            TextEncoding::Utf16 => decode_utf16(bytes),
        }
    }
}

fn decode_utf16(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }

    let (big_endian, body) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (true, rest),
        [0xFF, 0xFE, rest @ ..] => (false, rest),
        _ => (false, bytes),
    };

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    String::from_utf16(&units).ok()
}

/// Decode a text upload, trying [`DECODE_ORDER`] and falling back to lossy UTF-8
pub fn decode_text(bytes: &[u8]) -> String {
    for encoding in DECODE_ORDER {
        if let Some(text) = encoding.decode(bytes) {
            debug!(?encoding, bytes = bytes.len(), "Decoded text upload");
            return text;
        }
    }
    String::from_utf8_lossy(bytes).into_owned()
}
