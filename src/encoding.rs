//! UTF-8 ↔ 16-bit-code-unit conversion (§4.1, component A).
//!
//! Every public buffer operation that crosses the UTF-8/UTF-16 boundary
//! routes through here. No internal encoding detail ever escapes to a
//! caller: this module's only job is turning validated UTF-8 bytes into
//! the 16-bit code units the gap buffer stores, and back.
//!
//! The two-pass (length-then-fill) shape is kept even though `std`'s
//! conversions don't strictly need it, because callers embedding this
//! crate behind an FFI boundary size their own output buffer from a
//! length query before asking for the fill (§4.1, §9 design note).

use crate::error::{Error, Result};

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod tests;

/// `true` for the first unit of a surrogate pair (U+D800..U+DBFF).
#[inline]
#[must_use]
pub fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

/// `true` for the second unit of a surrogate pair (U+DC00..U+DFFF).
#[inline]
#[must_use]
pub fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Converts UTF-8 bytes to internal 16-bit code units.
///
/// Fails with [`Error::Encoding`] on invalid UTF-8; no partial output is
/// produced.
pub fn utf8_to_utf16(bytes: &[u8]) -> Result<Vec<u16>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| Error::Encoding(format!("invalid UTF-8 input: {e}")).record())?;
    Ok(text.encode_utf16().collect())
}

/// First pass: how many UTF-8 bytes `units` would decode to. Callers
/// size their output buffer with this before calling
/// [`utf16_to_utf8_into`].
pub fn utf8_len_for_utf16(units: &[u16]) -> Result<usize> {
    let mut total = 0usize;
    for result in char::decode_utf16(units.iter().copied()) {
        let c = result
            .map_err(|e| Error::Encoding(format!("unpaired surrogate: {:?}", e.unpaired_surrogate())).record())?;
        total += c.len_utf8();
    }
    Ok(total)
}

/// Second pass: fills `out` with the UTF-8 encoding of `units`. Returns
/// the number of bytes written. Fails with [`Error::Encoding`] if `out`
/// is too small (truncation is never silent) or if `units` contains an
/// unpaired surrogate.
pub fn utf16_to_utf8_into(units: &[u16], out: &mut [u8]) -> Result<usize> {
    let mut written = 0usize;
    for result in char::decode_utf16(units.iter().copied()) {
        let c = result
            .map_err(|e| Error::Encoding(format!("unpaired surrogate: {:?}", e.unpaired_surrogate())).record())?;
        let needed = c.len_utf8();
        if written + needed > out.len() {
            return Err(Error::InvalidArgument("output buffer too small".into()).record());
        }
        c.encode_utf8(&mut out[written..written + needed]);
        written += needed;
    }
    Ok(written)
}

/// Convenience wrapper around the two-pass pattern for callers that just
/// want an owned `String`.
pub fn utf16_to_utf8(units: &[u16]) -> Result<String> {
    let len = utf8_len_for_utf16(units)?;
    let mut buf = vec![0u8; len];
    let written = utf16_to_utf8_into(units, &mut buf)?;
    debug_assert_eq!(written, len);
    // SAFETY: every byte written came from `char::encode_utf8`, so the
    // buffer is valid UTF-8 by construction.
    Ok(String::from_utf8(buf).expect("decode_utf16 output must be valid UTF-8"))
}
