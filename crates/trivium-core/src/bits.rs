//! Bit-sequence conversions shared by the cipher and the encode/decode layer.
//!
//! Every conversion here is most-significant-first: bit 0 of a byte sequence
//! is the MSB of its first byte, and bit 0 of a hex string is the MSB of its
//! first nibble. The ordering is part of the wire contract and must not be
//! reversed; previously generated ciphertext depends on it.

use crate::error::{Result, TriviumError};

/// Expands a byte slice into bits, MSB-first within each byte.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Packs a bit sequence into bytes, MSB-first within each byte.
///
/// Fails with [`TriviumError::MalformedCiphertext`] when the bit count is
/// not a multiple of 8.
pub fn bits_to_bytes(bits: &[u8]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(TriviumError::MalformedCiphertext(format!(
            "bit count {} is not a multiple of 8",
            bits.len()
        )));
    }
    Ok(bits
        .chunks_exact(8)
        .map(|byte| byte.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1)))
        .collect())
}

/// Expands a hex string into bits, MSB-first within each nibble.
///
/// Fails with [`TriviumError::MalformedCiphertext`] on the first character
/// outside `[0-9A-Fa-f]`.
pub fn hex_to_bits(hex: &str) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(hex.len() * 4);
    for ch in hex.chars() {
        let nibble = ch
            .to_digit(16)
            .ok_or_else(|| TriviumError::MalformedCiphertext(format!("non-hex character {ch:?}")))?;
        for shift in (0..4).rev() {
            bits.push(((nibble >> shift) & 1) as u8);
        }
    }
    Ok(bits)
}

/// Renders a bit sequence as lowercase hex, MSB-first within each nibble.
///
/// The bit count must be a multiple of 4; byte-aligned callers satisfy this
/// by construction, and a violation is a defect in the caller.
pub fn bits_to_hex(bits: &[u8]) -> String {
    debug_assert!(
        bits.len() % 4 == 0,
        "bit count must be a multiple of 4 to form whole nibbles"
    );
    bits.chunks_exact(4)
        .map(|nibble| {
            let value = nibble.iter().fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit & 1));
            char::from_digit(value, 16).expect("nibble value is below 16")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn bytes_expand_msb_first() {
        assert_eq!(bytes_to_bits(b"A"), vec![0, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(
            bytes_to_bits(&[0xf0, 0x01]),
            vec![1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]
        );
    }

    #[test]
    fn hex_expands_msb_first_per_nibble() {
        assert_eq!(hex_to_bits("f0").unwrap(), vec![1, 1, 1, 1, 0, 0, 0, 0]);
        assert_eq!(hex_to_bits("9").unwrap(), vec![1, 0, 0, 1]);
        assert_eq!(hex_to_bits("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn hex_round_trip_lowercases() {
        assert_eq!(bits_to_hex(&hex_to_bits("ABCDef0123").unwrap()), "abcdef0123");
    }

    #[test]
    fn bytes_round_trip_random() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..100 {
            let len = rng.gen_range(0..256);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let bits = bytes_to_bits(&bytes);
            assert_eq!(bits.len(), bytes.len() * 8);
            assert_eq!(bits_to_bytes(&bits).unwrap(), bytes);
        }
    }

    #[test]
    fn non_hex_character_is_rejected() {
        assert!(matches!(
            hex_to_bits("0g"),
            Err(TriviumError::MalformedCiphertext(_))
        ));
    }

    #[test]
    fn ragged_bit_count_is_rejected() {
        let bits = vec![1, 0, 1, 1];
        assert!(matches!(
            bits_to_bytes(&bits),
            Err(TriviumError::MalformedCiphertext(_))
        ));
    }
}
