//! A rolling, Adler-style checksum with two accumulators reduced modulo the
//! prime `0xFFFF_FFFB` and packed into a 64-bit digest.
//!
//! The checksum of a fixed-size window can be slid by one byte in constant
//! time, which is what weak-hash-then-strong-hash pipelines (rsync-like delta
//! transfer, content-defined chunking) need:
//!
//! ```
//! use adler64_rolling::rolling_checksum::rolling_adler64::RollingAdler64;
//! use adler64_rolling::rolling_checksum::RollingChecksum;
//!
//! let data = b"You're a lizard, Harry.";
//! let mut rolling = RollingAdler64::new(&data[..16]);
//! rolling.roll(16, data[0], data[16]);
//!
//! assert_eq!(rolling.checksum(), RollingAdler64::new(&data[1..17]).checksum());
//! ```

pub mod error;
pub mod rolling_checksum;

pub use error::{Error, Result};
pub use rolling_checksum::rolling_adler64::{checksum, RollingAdler64};

/// The largest prime below 2^32; both accumulators are kept below it.
pub const MOD: u64 = 0xFFFF_FFFB;

/// The largest `n` such that `255 * n * (n + 1) / 2 + (n + 1) * (MOD - 1)` fits in a `u64`,
/// i.e. the number of bytes that can be summed between two reductions.
pub const NMAX: usize = 363_898_415;

/// Size of the full digest in bytes.
pub const SIZE: usize = 8;

/// Preferred write granularity in bytes.
pub const BLOCK_SIZE: usize = 1;
