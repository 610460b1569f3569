pub mod crypto;
pub mod primality;
pub use crypto::dh_error::DhError;
pub use crypto::dh_params::DhParams;
pub use crypto::diffie_hellman_algorithm::DiffieHellman;
pub use crypto::key_exchange_traits::{KeyAgreement, KeyPair};
