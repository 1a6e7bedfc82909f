//! Canonical RLP encoding for byte strings and flat lists.
//!
//! Contract derivation only ever encodes a two-item list of short byte
//! strings, but the encoder follows the full length rules so the output
//! stays canonical for any input.

use alloc::vec::Vec;

/// Append the RLP encoding of a single byte string to `out`.
pub fn encode_bytes(out: &mut Vec<u8>, data: &[u8]) {
    if data.len() == 1 && data[0] < 0x80 {
        // A single byte below 0x80 is its own encoding
        out.push(data[0]);
    } else {
        encode_length(out, data.len(), 0x80);
        out.extend_from_slice(data);
    }
}

/// RLP-encode a flat list of byte strings.
pub fn encode_list(items: &[&[u8]]) -> Vec<u8> {
    let mut payload = Vec::new();
    for item in items {
        encode_bytes(&mut payload, item);
    }

    let mut out = Vec::with_capacity(payload.len() + 9);
    encode_length(&mut out, payload.len(), 0xc0);
    out.extend_from_slice(&payload);
    out
}

/// Write a length header with the given base offset (0x80 for strings,
/// 0xc0 for lists).
fn encode_length(out: &mut Vec<u8>, len: usize, offset: u8) {
    if len <= 55 {
        out.push(offset + len as u8);
    } else {
        let len_bytes_full = (len as u64).to_be_bytes();
        let leading = (len as u64).leading_zeros() as usize / 8;
        let len_bytes = &len_bytes_full[leading..];
        out.push(offset + 55 + len_bytes.len() as u8);
        out.extend_from_slice(len_bytes);
    }
}
