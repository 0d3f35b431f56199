//! Turns a view into the bytes written to stdout.

use serde::Serialize;

use medix_common::encode;

use crate::config::OutputFormat;

/// Paint the view as text, or encode its descriptor as JSON or CBOR.
///
/// `paint` is only called for text output.
pub fn render<T, F>(format: OutputFormat, descriptor: &T, paint: F) -> medix_common::Result<Vec<u8>>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    match format.encoding() {
        None => Ok(paint().into_bytes()),
        Some(encoding) => {
            let mut bytes = encode(descriptor, encoding)?;
            if !matches!(encoding, medix_common::Format::Cbor) {
                bytes.push(b'\n');
            }
            Ok(bytes)
        }
    }
}
