use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("invalid key length: {actual} bytes (expected one of {expected:?})")]
    InvalidKeyLength {
        actual: usize,
        expected: &'static [usize],
    },

    #[error("invalid block length: {actual} bytes (expected {expected})")]
    InvalidBlockLength { actual: usize, expected: usize },

    #[error("invalid padding length")]
    InvalidPaddingLength,

    #[error("invalid padding content")]
    InvalidPadding,

    #[error("padding cannot target a block size of {0} bytes")]
    InvalidPaddingBlockSize(usize),

    #[error("invalid IV length: {actual} bytes (expected {expected})")]
    InvalidIvLength { actual: usize, expected: usize },

    #[error("data length {len} is not a multiple of the block size {block_size}")]
    UnalignedData { len: usize, block_size: usize },

    #[error("suite configuration is missing the {0}")]
    IncompleteConfiguration(&'static str),

    #[error("unknown {kind}: {value:?}")]
    UnknownOption { kind: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("background task failed: {0}")]
    TaskFailed(String),
}
