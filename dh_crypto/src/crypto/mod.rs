//! Diffie-Hellman over safe-prime groups.

pub mod dh_error;
pub mod dh_params;
pub mod diffie_hellman_algorithm;
pub mod key_exchange_traits;

// Re-export main components for easier access from outside the crypto module.
pub use self::dh_error::DhError;
pub use self::dh_params::DhParams;
pub use self::diffie_hellman_algorithm::DiffieHellman;
pub use self::key_exchange_traits::{KeyAgreement, KeyPair};
