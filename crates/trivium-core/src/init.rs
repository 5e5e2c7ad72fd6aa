//! Key/IV loading and the warm-up phase.

use crate::bits::hex_to_bits;
use crate::clock::clock;
use crate::error::{Result, TriviumError};
use crate::state::{State, REG_B_START, STATE_BITS};

/// Number of bits in a key.
pub const KEY_BITS: usize = 80;

/// Number of bits in an IV.
pub const IV_BITS: usize = 80;

/// Hex characters in a key or IV (4 bits per character).
pub const KEY_IV_HEX_CHARS: usize = 20;

/// Warm-up rounds run with discarded output before any keystream is exposed
/// (four full rotations of the largest register). Fixed by the cipher
/// specification, not tunable.
pub const WARMUP_ROUNDS: usize = 4 * STATE_BITS;

fn is_key_iv_hex(text: &str) -> bool {
    text.len() == KEY_IV_HEX_CHARS && text.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Builds a keystream-ready cipher state from a key and IV, each given as
/// exactly 20 hex characters (80 bits, MSB-first per nibble).
///
/// The key fills the head of register A and the IV the head of register B;
/// the last three bits of register C are set to 1 so the state is never
/// all-zero. The state is then clocked [`WARMUP_ROUNDS`] times with the
/// output discarded, diffusing every key and IV bit nonlinearly through the
/// whole state.
///
/// Fails with [`TriviumError::InvalidKeyFormat`] or
/// [`TriviumError::InvalidIvFormat`] before touching any state when either
/// input is not exactly 20 hex characters.
pub fn initialize(key_hex: &str, iv_hex: &str) -> Result<State> {
    if !is_key_iv_hex(key_hex) {
        return Err(TriviumError::InvalidKeyFormat);
    }
    if !is_key_iv_hex(iv_hex) {
        return Err(TriviumError::InvalidIvFormat);
    }
    let key_bits = hex_to_bits(key_hex)?;
    let iv_bits = hex_to_bits(iv_hex)?;

    let mut state: State = [0; STATE_BITS];
    state[..KEY_BITS].copy_from_slice(&key_bits);
    state[REG_B_START..REG_B_START + IV_BITS].copy_from_slice(&iv_bits);
    state[STATE_BITS - 3] = 1;
    state[STATE_BITS - 2] = 1;
    state[STATE_BITS - 1] = 1;

    for _ in 0..WARMUP_ROUNDS {
        let (next, _) = clock(&state);
        state = next;
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::bits_to_hex;

    const ZERO: &str = "00000000000000000000";
    const KEY: &str = "0123456789abcdef0123";
    const IV: &str = "fedcba9876543210fedc";

    #[test]
    fn zero_key_zero_iv_state_matches_reference() {
        let state = initialize(ZERO, ZERO).unwrap();
        assert_eq!(
            bits_to_hex(&state),
            "a158c92eb8675496371cd8451a02750204c82157f4b528afb69185cb8e1afe647e123549"
        );
    }

    #[test]
    fn nonzero_key_iv_state_matches_reference() {
        let state = initialize(KEY, IV).unwrap();
        assert_eq!(
            bits_to_hex(&state),
            "5407f6bdf28357b8f0639628c86f2bdf9a84ac0da39027f1a34ce2533b7ddaf037568966"
        );
    }

    #[test]
    fn initialization_is_deterministic() {
        assert_eq!(initialize(KEY, IV).unwrap(), initialize(KEY, IV).unwrap());
    }

    #[test]
    fn uppercase_hex_is_accepted() {
        let state = initialize("0123456789ABCDEF0123", "FEDCBA9876543210FEDC").unwrap();
        assert_eq!(state, initialize(KEY, IV).unwrap());
    }

    #[test]
    fn short_key_is_rejected_before_any_work() {
        assert_eq!(
            initialize("short", IV),
            Err(TriviumError::InvalidKeyFormat)
        );
    }

    #[test]
    fn non_hex_key_is_rejected() {
        assert_eq!(
            initialize("0123456789abcdef012g", IV),
            Err(TriviumError::InvalidKeyFormat)
        );
    }

    #[test]
    fn bad_iv_is_rejected_after_key_check() {
        assert_eq!(
            initialize(KEY, "0123456789abcdef01234"),
            Err(TriviumError::InvalidIvFormat)
        );
        assert_eq!(initialize(KEY, ""), Err(TriviumError::InvalidIvFormat));
    }

    #[test]
    fn single_hex_digit_flips_change_the_state() {
        let base = initialize(KEY, IV).unwrap();
        for position in 0..KEY_IV_HEX_CHARS {
            let mut flipped: Vec<char> = KEY.chars().collect();
            // Flip the low bit of one nibble.
            let digit = flipped[position].to_digit(16).unwrap() ^ 1;
            flipped[position] = char::from_digit(digit, 16).unwrap();
            let key: String = flipped.into_iter().collect();
            assert_ne!(initialize(&key, IV).unwrap(), base, "key digit {position}");
        }
        for position in 0..KEY_IV_HEX_CHARS {
            let mut flipped: Vec<char> = IV.chars().collect();
            let digit = flipped[position].to_digit(16).unwrap() ^ 1;
            flipped[position] = char::from_digit(digit, 16).unwrap();
            let iv: String = flipped.into_iter().collect();
            assert_ne!(initialize(KEY, &iv).unwrap(), base, "IV digit {position}");
        }
    }
}
