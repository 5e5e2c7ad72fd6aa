//! The 288-bit Trivium register state.

/// Total number of bits in the cipher state.
pub const STATE_BITS: usize = 288;

/// Length of register A (state positions 0..93).
pub const REG_A_LEN: usize = 93;

/// Length of register B (state positions 93..177).
pub const REG_B_LEN: usize = 84;

/// Length of register C (state positions 177..288).
pub const REG_C_LEN: usize = 111;

/// First state position of register B.
pub const REG_B_START: usize = REG_A_LEN;

/// First state position of register C.
pub const REG_C_START: usize = REG_A_LEN + REG_B_LEN;

/// Trivium state: 288 bits stored one per byte, each element 0 or 1.
///
/// The length is enforced by the type; every constructor in this crate keeps
/// each element in {0, 1}. The state is plain value data and is copied, never
/// aliased, between successive update rounds: each round reads entirely from
/// the prior state before any bit of the successor is written.
pub type State = [u8; STATE_BITS];

/// Returns register A of `state` (93 bits).
#[inline]
pub fn register_a(state: &State) -> &[u8] {
    &state[..REG_B_START]
}

/// Returns register B of `state` (84 bits).
#[inline]
pub fn register_b(state: &State) -> &[u8] {
    &state[REG_B_START..REG_C_START]
}

/// Returns register C of `state` (111 bits).
#[inline]
pub fn register_c(state: &State) -> &[u8] {
    &state[REG_C_START..]
}

/// Debug-checks the bit-ness invariant. A violation is a defect in this
/// crate, not a recoverable condition.
#[inline]
pub(crate) fn debug_assert_bits(state: &State) {
    debug_assert!(
        state.iter().all(|&bit| bit <= 1),
        "every state element must be 0 or 1"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_lengths_partition_the_state() {
        assert_eq!(REG_A_LEN + REG_B_LEN + REG_C_LEN, STATE_BITS);
        let state: State = [0; STATE_BITS];
        assert_eq!(register_a(&state).len(), REG_A_LEN);
        assert_eq!(register_b(&state).len(), REG_B_LEN);
        assert_eq!(register_c(&state).len(), REG_C_LEN);
    }

    #[test]
    fn register_views_cover_contiguous_positions() {
        let mut state: State = [0; STATE_BITS];
        state[REG_B_START] = 1;
        state[REG_C_START] = 1;
        assert_eq!(register_b(&state)[0], 1);
        assert_eq!(register_c(&state)[0], 1);
        assert!(register_a(&state).iter().all(|&bit| bit == 0));
    }
}
