use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DhError {
    #[error("peer public key is outside [2, p-2]")]
    InvalidPeerPublicKey,

    #[error("private key is outside [2, q)")]
    InvalidPrivateKey,

    #[error("bit length {0} is too small for safe-prime generation")]
    InvalidBitLength(u64),

    #[error("invalid domain parameters: {0}")]
    InvalidParameters(&'static str),

    #[error("failed to parse {0}")]
    Parse(String),
}
