use std::mem;

use crate::domain::error::StreamError;
use crate::engine::state::{StreamState, UPDATE_SIZE};

/// Incremental wyhash hasher.
///
/// Accepts input of any size per call, re-chunks it to the 64-byte
/// granularity [`StreamState`] expects, and formats the digest. The digest
/// is identical for any chunking of the same bytes and seed.
///
/// ```
/// use hashq::engine::hasher::Hasher;
///
/// let mut hasher = Hasher::new(2);
/// hasher.update(b"ab").unwrap();
/// let digest = hasher.finish(b"c").unwrap();
/// assert_eq!(digest, Hasher::hash(b"abc", 2));
/// ```
#[derive(Debug, Clone)]
pub struct Hasher {
    state: StreamState,
    tail: Vec<u8>,
}

impl Hasher {
    pub fn new(seed: u64) -> Self {
        Self {
            state: StreamState::new(seed),
            tail: Vec::new(),
        }
    }

    /// One-shot digest of `buffer` under `seed`.
    pub fn hash(buffer: &[u8], seed: u64) -> String {
        let mut hasher = Self::new(seed);
        match hasher.finish(buffer) {
            Ok(digest) => digest,
            // A fresh hasher cannot already be finalized.
            Err(StreamError::AlreadyFinalized) => unreachable!(),
        }
    }

    /// Absorb a chunk. Fails once a digest has been produced.
    pub fn update(&mut self, buffer: &[u8]) -> Result<(), StreamError> {
        if self.state.is_finalized() {
            return Err(StreamError::AlreadyFinalized);
        }
        self.tail.extend_from_slice(buffer);
        let aligned = self.tail.len() / UPDATE_SIZE * UPDATE_SIZE;
        if aligned > 0 {
            let remainder = self.tail.split_off(aligned);
            let forwarded = mem::replace(&mut self.tail, remainder);
            self.state.update(&forwarded)?;
        }
        Ok(())
    }

    /// Terminal call: absorb `buffer`, close the stream, and return the
    /// digest as 16 lowercase hex characters.
    pub fn finish(&mut self, buffer: &[u8]) -> Result<String, StreamError> {
        if self.state.is_finalized() {
            return Err(StreamError::AlreadyFinalized);
        }
        let mut pending = mem::take(&mut self.tail);
        pending.extend_from_slice(buffer);
        let aligned = pending.len() / UPDATE_SIZE * UPDATE_SIZE;
        if aligned > 0 {
            self.state.update(&pending[..aligned])?;
        }
        let digest = self.state.finalize(&pending[aligned..])?;
        Ok(format!("{digest:016x}"))
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new(0)
    }
}
