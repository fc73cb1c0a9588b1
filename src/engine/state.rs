use std::mem;

use crate::domain::error::StreamError;
use crate::engine::mix::{PRIMES, mix, mum, read_u32, read_u64};

/// Granularity of buffers the facade forwards to [`StreamState::update`].
pub const UPDATE_SIZE: usize = 64;
/// One three-lane absorption round.
const ROUND_SIZE: usize = 48;
/// One single-lane absorption step.
const STEP_SIZE: usize = 16;

/// Running accumulator state of the streaming hash.
///
/// Three 64-bit accumulators advance round-robin over 16-byte steps, so
/// absorption can resume at any 16-byte boundary across `update` calls.
/// `one` and `two` exist only to break the serial dependency inside a
/// 48-byte round; they are folded into `seed` once, at finalization, and
/// only if at least one full round was absorbed.
///
/// `update` always holds back a full round plus the trailing remainder
/// (48..=63 bytes once input is flowing). Finalization decides how many
/// rounds the whole message has only when the total length is known, so
/// bytes past the last full-round boundary are never absorbed early; this
/// is what keeps the digest identical to the one-shot algorithm, which
/// mixes those bytes after the accumulator fold and reads its final
/// 16-byte window from positions that can overlap already-absorbed input.
#[derive(Debug, Clone)]
pub struct StreamState {
    seed: u64,
    one: u64,
    two: u64,
    /// Bytes absorbed so far; always a multiple of 16 until finalization.
    total: u64,
    tail: Vec<u8>,
    finalized: bool,
}

impl StreamState {
    pub fn new(seed: u64) -> Self {
        let seed = seed ^ mix(seed ^ PRIMES[0], PRIMES[1]);
        Self {
            seed,
            one: seed,
            two: seed,
            total: 0,
            tail: Vec::new(),
            finalized: false,
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Round-robin absorber. `buffer` length must be a multiple of 16.
    fn absorb(&mut self, buffer: &[u8]) {
        debug_assert!(buffer.len() % STEP_SIZE == 0);

        let mut lane = (self.total as usize % ROUND_SIZE) / STEP_SIZE;
        for step in buffer.chunks_exact(STEP_SIZE) {
            let x = read_u64(step, 0);
            let y = read_u64(step, 8);
            match lane {
                0 => self.seed = mix(x ^ PRIMES[1], y ^ self.seed),
                1 => self.one = mix(x ^ PRIMES[2], y ^ self.one),
                _ => self.two = mix(x ^ PRIMES[3], y ^ self.two),
            }
            lane = (lane + 1) % 3;
        }
        self.total += buffer.len() as u64;
    }

    /// Accepts a 64-byte aligned buffer, absorbs everything except a held
    /// back round-plus-remainder and retains that as the new tail.
    pub fn update(&mut self, buffer: &[u8]) -> Result<(), StreamError> {
        if self.finalized {
            return Err(StreamError::AlreadyFinalized);
        }
        debug_assert!(buffer.len() % UPDATE_SIZE == 0);

        self.tail.extend_from_slice(buffer);
        let aligned = self.tail.len().saturating_sub(ROUND_SIZE) / STEP_SIZE * STEP_SIZE;
        if aligned > 0 {
            let remainder = self.tail.split_off(aligned);
            let pending = mem::replace(&mut self.tail, remainder);
            self.absorb(&pending);
        }
        Ok(())
    }

    /// Accepts the final chunk of less than 64 bytes and returns the digest.
    pub fn finalize(&mut self, buffer: &[u8]) -> Result<u64, StreamError> {
        if self.finalized {
            return Err(StreamError::AlreadyFinalized);
        }
        debug_assert!(buffer.len() < UPDATE_SIZE);

        let mut pending = mem::take(&mut self.tail);
        pending.extend_from_slice(buffer);
        let mut remaining: &[u8] = &pending;

        // The last two 8-byte words of the logical input, once known.
        let mut last_window: Option<(u64, u64)> = None;

        // Bytes absorbed into the current, incomplete round.
        let uneven = self.total as usize % ROUND_SIZE;
        if uneven != 0 || remaining.len() > ROUND_SIZE {
            let n = remaining.len();
            last_window = Some((read_u64(remaining, n - 16), read_u64(remaining, n - 8)));

            // Absorb up to the last full-round boundary of the whole
            // message, leaving the final 1..=48 bytes as the true tail.
            let message_len = self.total + n as u64;
            let boundary = (message_len - 1) / ROUND_SIZE as u64 * ROUND_SIZE as u64;
            let peel = (boundary.saturating_sub(self.total)) as usize;
            self.absorb(&remaining[..peel]);
            remaining = &remaining[peel..];
        }

        let folded = self.total >= ROUND_SIZE as u64;
        if folded {
            self.seed ^= self.one ^ self.two;
        }

        let n = remaining.len();
        let (a, b) = if folded || n > STEP_SIZE {
            let window = last_window
                .unwrap_or_else(|| (read_u64(remaining, n - 16), read_u64(remaining, n - 8)));
            while remaining.len() > STEP_SIZE {
                self.seed = mix(
                    read_u64(remaining, 0) ^ PRIMES[1],
                    read_u64(remaining, 8) ^ self.seed,
                );
                remaining = &remaining[STEP_SIZE..];
            }
            window
        } else if n >= 4 {
            // Overlapping reads; deliberate bit reuse for short inputs.
            let half = (n >> 3) << 2;
            (
                read_u32(remaining, 0) << 32 | read_u32(remaining, half),
                read_u32(remaining, n - 4) << 32 | read_u32(remaining, n - 4 - half),
            )
        } else if n > 0 {
            (
                u64::from(remaining[0]) << 16
                    | u64::from(remaining[n >> 1]) << 8
                    | u64::from(remaining[n - 1]),
                0,
            )
        } else {
            (0, 0)
        };
        self.total += n as u64;

        let (lo, hi) = mum(a ^ PRIMES[1], b ^ self.seed);
        self.finalized = true;
        Ok(mix(lo ^ PRIMES[0] ^ self.total, hi ^ PRIMES[1]))
    }
}
