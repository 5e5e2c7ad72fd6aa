//! Keystream generation.

use crate::clock::clock;
use crate::state::State;

/// Lazy keystream bit generator over successive cipher states.
///
/// Each [`Iterator::next`] call applies one update round and yields its
/// keystream bit, threading the successor state into the following call.
/// The sequence is logically infinite (callers should stay below the
/// documented 2^64-bit usage limit per key/IV pair) and strictly
/// sequential; it restarts only by re-initializing from key and IV.
#[derive(Clone)]
pub struct Keystream {
    state: State,
}

impl Keystream {
    /// Starts a keystream from an initialized cipher state.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Returns the state the next round will read.
    pub fn state(&self) -> &State {
        &self.state
    }
}

impl Iterator for Keystream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let (next, bit) = clock(&self.state);
        self.state = next;
        Some(bit)
    }
}

/// Produces the first `len` keystream bits reachable from `state`.
pub fn keystream(state: &State, len: usize) -> Vec<u8> {
    Keystream::new(*state).take(len).collect()
}
