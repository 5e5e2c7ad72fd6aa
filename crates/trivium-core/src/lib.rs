//! Trivium stream cipher (eSTREAM hardware portfolio, De Cannière & Preneel).
//!
//! This crate implements the 80-bit-key/80-bit-IV cipher as specified: a
//! 288-bit register state advanced by a nonlinear feedback update, with a
//! fixed 1152-round warm-up before any keystream is exposed. It provides:
//! - The state update and initialization steps as standalone pure functions,
//!   so callers can observe and single-step the register state.
//! - Keystream generation, lazily via [`Keystream`] or eagerly via
//!   [`keystream`].
//! - The text encode/decode layer: byte<->bit and hex<->bit conversions and
//!   the symmetric XOR combine behind [`encrypt`] and [`decrypt`].
//!
//! All text conventions are most-significant-first: bit 0 of a byte is its
//! MSB and bit 0 of a hex nibble is its MSB. Ciphertext produced under this
//! convention is not interchangeable with LSB-first Trivium encodings.
//!
//! The implementation aims for clarity and bit-exactness with the reference
//! specification rather than raw throughput; it should not be treated as
//! side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bits;
mod clock;
mod codec;
mod error;
mod init;
mod keystream;
mod state;

pub use crate::bits::{bits_to_bytes, bits_to_hex, bytes_to_bits, hex_to_bits};
pub use crate::clock::{clock, Taps, TAPS_A, TAPS_B, TAPS_C};
pub use crate::codec::{decrypt, encrypt};
pub use crate::error::{Result, TriviumError};
pub use crate::init::{initialize, IV_BITS, KEY_BITS, KEY_IV_HEX_CHARS, WARMUP_ROUNDS};
pub use crate::keystream::{keystream, Keystream};
pub use crate::state::{
    register_a, register_b, register_c, State, REG_A_LEN, REG_B_LEN, REG_B_START, REG_C_LEN,
    REG_C_START, STATE_BITS,
};
