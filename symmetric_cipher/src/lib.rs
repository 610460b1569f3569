pub mod crypto;
pub use crypto::byte_codec::{from_unsigned, to_fixed};
pub use crypto::cipher_error::CipherError;
pub use crypto::cipher_io::{CipherInput, CipherOutput};
pub use crypto::cipher_traits::{BlockCipher, BlockMode, Padding};
pub use crypto::cipher_types::{Algorithm, CipherMode, PaddingMode};
pub use crypto::crypto_suite::{CryptoSuite, SuiteBuilder};
pub use crypto::magenta::Magenta;
