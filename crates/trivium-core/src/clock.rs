//! The state update ("clocking") step.

use crate::state::{debug_assert_bits, State, REG_B_START, REG_C_START, STATE_BITS};

/// Fixed tap positions for one register, 0-indexed (the reference
/// specification numbers state bits from 1).
pub struct Taps {
    /// Two taps XORed into this register's keystream term.
    pub out: [usize; 2],
    /// Two adjacent taps whose AND feeds the successor register's new bit.
    pub and: [usize; 2],
    /// Tap inside this register XORed into this register's own new bit.
    pub fwd: usize,
}

/// Register A taps (specification positions 66, 93, 91, 92, 69).
pub const TAPS_A: Taps = Taps {
    out: [65, 92],
    and: [90, 91],
    fwd: 68,
};

/// Register B taps (specification positions 162, 177, 175, 176, 171).
pub const TAPS_B: Taps = Taps {
    out: [161, 176],
    and: [174, 175],
    fwd: 170,
};

/// Register C taps (specification positions 243, 288, 286, 287, 264).
pub const TAPS_C: Taps = Taps {
    out: [242, 287],
    and: [285, 286],
    fwd: 263,
};

/// Advances `state` by one round, returning the successor state and the
/// keystream bit that round produces.
///
/// Every tap is read from the input snapshot before any bit of the successor
/// is written, so a tap can never observe an already-shifted neighbour. The
/// whole array then shifts one position toward the high end and the three
/// feedback bits become the new heads of registers A, B and C. Total
/// function; no failure mode for a well-formed state.
pub fn clock(state: &State) -> (State, u8) {
    debug_assert_bits(state);

    let t1 = state[TAPS_A.out[0]] ^ state[TAPS_A.out[1]];
    let t2 = state[TAPS_B.out[0]] ^ state[TAPS_B.out[1]];
    let t3 = state[TAPS_C.out[0]] ^ state[TAPS_C.out[1]];
    let keystream_bit = t1 ^ t2 ^ t3;

    let a_in = t3 ^ (state[TAPS_C.and[0]] & state[TAPS_C.and[1]]) ^ state[TAPS_A.fwd];
    let b_in = t1 ^ (state[TAPS_A.and[0]] & state[TAPS_A.and[1]]) ^ state[TAPS_B.fwd];
    let c_in = t2 ^ (state[TAPS_B.and[0]] & state[TAPS_B.and[1]]) ^ state[TAPS_C.fwd];

    let mut next: State = [0; STATE_BITS];
    next[1..].copy_from_slice(&state[..STATE_BITS - 1]);
    next[0] = a_in;
    next[REG_B_START] = b_in;
    next[REG_C_START] = c_in;

    (next, keystream_bit)
}
