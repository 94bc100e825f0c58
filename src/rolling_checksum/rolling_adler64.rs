use std::hash::Hasher;
use std::io;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::RollingChecksum;
use crate::error::{Error, Result};
use crate::{MOD, NMAX};

/// Adler-style checksum whose two accumulators are reduced modulo [`MOD`] and packed
/// into a 64-bit digest as `s2 << 32 | s1`.
///
/// The identity state is `s1 = 0, s2 = 0`, unlike classic Adler-32 which starts `s1` at 1.
/// A rolling window always has a known length, so the length-disambiguating seed is not
/// needed. The one-shot [`checksum`] keeps the classic seed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Accumulators", into = "Accumulators")]
pub struct RollingAdler64 {
    /// Sum of the bytes.
    s1: u64,
    /// Sum of the running values of `s1`.
    s2: u64,
}

impl RollingAdler64 {
    /// Rebuilds a checksum from a digest previously returned by [`RollingAdler64::digest`].
    ///
    /// ```
    /// use adler64_rolling::rolling_checksum::rolling_adler64::RollingAdler64;
    /// use adler64_rolling::rolling_checksum::RollingChecksum;
    ///
    /// let stored = RollingAdler64::new(b"abc").digest();
    /// assert_eq!(RollingAdler64::from_digest(stored).unwrap().digest(), stored);
    /// assert!(RollingAdler64::from_digest(u64::MAX).is_err());
    /// ```
    pub fn from_digest(digest: u64) -> Result<Self> {
        Self::from_accumulators(digest & 0xFFFF_FFFF, digest >> 32).map_err(|e| {
            debug!("rejecting digest {:#018x}: {}", digest, e);
            e
        })
    }

    fn from_accumulators(s1: u64, s2: u64) -> Result<Self> {
        if s1 >= MOD {
            return Err(Error::UnreducedAccumulator {
                accumulator: "s1",
                value: s1,
            });
        }
        if s2 >= MOD {
            return Err(Error::UnreducedAccumulator {
                accumulator: "s2",
                value: s2,
            });
        }
        Ok(RollingAdler64 { s1, s2 })
    }

    /// Returns `s2 << 32 | s1`. Only meaningful for equality comparison.
    pub fn digest(&self) -> u64 {
        self.s2 << 32 | self.s1
    }

    /// The lower 32 bits of the digest in big-endian order, the width classic
    /// Adler-32 consumers expect.
    pub fn to_be_bytes(&self) -> [u8; 4] {
        // s1 < MOD < 2^32
        (self.s1 as u32).to_be_bytes()
    }

    /// Appends [`RollingAdler64::to_be_bytes`] to `out`.
    pub fn sum(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_be_bytes());
    }
}

/// One-shot checksum of `data`, seeded with `s1 = 1` like classic Adler-32.
///
/// Note this differs from `RollingAdler64::new(data).checksum()`, which starts from `s1 = 0`.
///
/// ```
/// assert_eq!(adler64_rolling::checksum(b"Wikipedia"), 0x11E6_0000_0398);
/// ```
pub fn checksum(data: &[u8]) -> u64 {
    let mut adler = RollingAdler64 { s1: 1, s2: 0 };
    adler.update(data);
    adler.digest()
}

/// Adds `data` to the accumulators, reducing after every `batch_len` bytes.
/// `batch_len` must not exceed [`NMAX`] or the sums may overflow.
fn accumulate(mut s1: u64, mut s2: u64, data: &[u8], batch_len: usize) -> (u64, u64) {
    for (batch_number, batch) in data.chunks(batch_len).enumerate() {
        if batch_number > 0 {
            trace!("reducing after batch {} of {} bytes", batch_number, batch_len);
        }
        for &byte in batch {
            s1 += u64::from(byte);
            s2 += s1;
        }
        s1 %= MOD;
        s2 %= MOD;
    }
    (s1, s2)
}

impl RollingChecksum for RollingAdler64 {
    type ChecksumType = u64;

    fn new(initial_window: &[u8]) -> Self {
        let mut adler = RollingAdler64::default();
        adler.update(initial_window);
        adler
    }

    fn checksum(&self) -> Self::ChecksumType {
        self.digest()
    }

    fn reset(&mut self) {
        self.s1 = 0;
        self.s2 = 0;
    }

    fn update(&mut self, data: &[u8]) {
        (self.s1, self.s2) = accumulate(self.s1, self.s2, data, NMAX);
    }

    fn roll(&mut self, blocksize: usize, old_byte: u8, new_byte: u8) {
        let old_byte = u64::from(old_byte);
        let new_byte = u64::from(new_byte);

        // MOD is not a power of two, so u64 wraparound is not congruent modulo MOD.
        // Both subtrahends are reduced first and MOD is added to keep everything non-negative.
        let s1 = (self.s1 + MOD - old_byte + new_byte) % MOD;
        let removed = (blocksize as u64 % MOD) * old_byte % MOD;
        let s2 = (self.s2 + s1 + MOD - removed) % MOD;

        self.s1 = s1;
        self.s2 = s2;
    }
}

impl io::Write for RollingAdler64 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        RollingChecksum::update(self, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Hasher for RollingAdler64 {
    fn finish(&self) -> u64 {
        self.digest()
    }

    fn write(&mut self, bytes: &[u8]) {
        RollingChecksum::update(self, bytes);
    }
}

impl From<RollingAdler64> for u64 {
    fn from(adler: RollingAdler64) -> Self {
        adler.digest()
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct Accumulators {
    s1: u64,
    s2: u64,
}

impl From<RollingAdler64> for Accumulators {
    fn from(adler: RollingAdler64) -> Self {
        Accumulators {
            s1: adler.s1,
            s2: adler.s2,
        }
    }
}

impl TryFrom<Accumulators> for RollingAdler64 {
    type Error = Error;

    fn try_from(accumulators: Accumulators) -> Result<Self> {
        RollingAdler64::from_accumulators(accumulators.s1, accumulators.s2)
    }
}
