/// Feistel round function: maps one half-block and a round key to a value
/// of the same length as the half-block.
pub trait EncryptionTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Vec<u8>;
}
