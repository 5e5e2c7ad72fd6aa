//! Plaintext/ciphertext encoding and the XOR combine.
//!
//! Encryption and decryption are the same keystream XOR; the two functions
//! differ only in text-encoding direction. Both are pure over their
//! arguments, so `decrypt(encrypt(p, k, iv), k, iv) == p` for every input.

use crate::bits::{bits_to_bytes, bits_to_hex, bytes_to_bits, hex_to_bits};
use crate::error::Result;
use crate::init::initialize;
use crate::keystream::keystream;

fn xor_bits(data: &[u8], ks: &[u8]) -> Vec<u8> {
    data.iter().zip(ks).map(|(d, k)| d ^ k).collect()
}

/// Encrypts `plaintext` under the given key and IV, returning the ciphertext
/// as lowercase hex (two characters per plaintext byte).
///
/// Empty input yields an empty string.
pub fn encrypt(plaintext: &[u8], key_hex: &str, iv_hex: &str) -> Result<String> {
    let state = initialize(key_hex, iv_hex)?;
    let bits = bytes_to_bits(plaintext);
    let ks = keystream(&state, bits.len());
    Ok(bits_to_hex(&xor_bits(&bits, &ks)))
}

/// Decrypts hex `ciphertext` produced by [`encrypt`] back into bytes.
///
/// Fails with [`TriviumError::MalformedCiphertext`] when the input contains
/// a non-hex character or its bit count is not a multiple of 8.
///
/// [`TriviumError::MalformedCiphertext`]: crate::TriviumError::MalformedCiphertext
pub fn decrypt(ciphertext: &str, key_hex: &str, iv_hex: &str) -> Result<Vec<u8>> {
    let state = initialize(key_hex, iv_hex)?;
    let bits = hex_to_bits(ciphertext)?;
    let ks = keystream(&state, bits.len());
    bits_to_bytes(&xor_bits(&bits, &ks))
}
