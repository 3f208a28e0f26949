//! BIG-box stage (C6): drives ten LITTLE-boxes and folds their output into
//! one 5-word sub-state.

use super::littlebox::run_single;
use super::nonlinear::gamma_mix;
use super::salt::generate as generate_salt;
use super::tables::rc;

/// Runs BIG-box stage `i` (round base `i * 2000`) against the current state
/// `h`, returning the folded 5-word sub-state `Bᵢ` (§4.6).
pub(crate) fn run(h: &[u64; 5], i: u64) -> [u64; 5] {
    let round_base = i * 2000;
    let salt = generate_salt(h);

    let mut little_states = [[0u64; 10]; 10];
    for b in 0..10u64 {
        let mut lane = [0u64; 10];
        for k in 0..5 {
            lane[k] = h[k] ^ salt[k];
        }
        for k in 0..5 {
            lane[k + 5] = h[k] ^ rc(b * 10 + k as u64);
        }

        let sv = salt[(b % 5) as usize] ^ rc(b * 10);
        little_states[b as usize] = run_single(lane, sv, round_base + b * 10);
    }

    let mut sub_state = [0u64; 5];
    for k in 0..5 {
        let mut acc: u64 = 0;
        for lane in &little_states {
            acc ^= lane[2 * k];
            acc = acc.wrapping_add(lane[2 * k + 1]);
        }
        sub_state[k] = gamma_mix(acc, salt[k], rc(i * 100 + k as u64), round_base + 1000);
    }

    sub_state
}
