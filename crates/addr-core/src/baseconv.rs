//! Arbitrary-precision base-36 conversion.
//!
//! The ICAP payload is a base-36 numeral of up to 31 characters, past the
//! range of any native integer, so both directions work on big-endian
//! byte vectors directly.

use alloc::string::String;
use alloc::vec::Vec;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decode a base-36 numeral into minimal big-endian bytes.
///
/// Accepts both letter cases. Returns `None` on a non-base-36 character;
/// the empty string and all-zero input decode to an empty vector.
pub fn base36_to_bytes(input: &str) -> Option<Vec<u8>> {
    let mut result: Vec<u8> = Vec::new();

    for c in input.chars() {
        let value = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'A'..='Z' => c as u32 - 'A' as u32 + 10,
            'a'..='z' => c as u32 - 'a' as u32 + 10,
            _ => return None,
        };

        // Multiply the accumulator by 36 and add the digit
        let mut carry = value;
        for byte in result.iter_mut().rev() {
            let temp = (*byte as u32) * 36 + carry;
            *byte = (temp & 0xFF) as u8;
            carry = temp >> 8;
        }

        while carry > 0 {
            result.insert(0, (carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    Some(result)
}

/// Encode big-endian bytes as an uppercase base-36 numeral.
///
/// No leading zeros; zero encodes as "0".
pub fn bytes_to_base36(bytes: &[u8]) -> String {
    // Work on a mutable big-endian copy, repeatedly dividing by 36
    let mut num: Vec<u8> = bytes.iter().copied().skip_while(|&b| b == 0).collect();
    let mut digits: Vec<u8> = Vec::new();

    while !num.is_empty() {
        let mut rem: u32 = 0;
        let mut quotient: Vec<u8> = Vec::with_capacity(num.len());
        for &byte in &num {
            let acc = rem * 256 + byte as u32;
            quotient.push((acc / 36) as u8);
            rem = acc % 36;
        }
        digits.push(BASE36_ALPHABET[rem as usize]);

        while quotient.first() == Some(&0) {
            quotient.remove(0);
        }
        num = quotient;
    }

    if digits.is_empty() {
        digits.push(b'0');
    }

    let mut out = String::with_capacity(digits.len());
    for &d in digits.iter().rev() {
        out.push(d as char);
    }
    out
}
