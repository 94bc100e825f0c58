use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A stored digest carries an accumulator that was never reduced modulo [`crate::MOD`],
    /// so it cannot have been produced by this checksum.
    #[error("accumulator {accumulator} = {value:#x} is not reduced modulo 0xfffffffb")]
    UnreducedAccumulator { accumulator: &'static str, value: u64 },
}
