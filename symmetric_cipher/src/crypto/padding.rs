use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::Padding;
use crate::crypto::cipher_types::PaddingMode;
use rand::rngs::OsRng;
use rand::RngCore;

/// Number of bytes to append: a full block when `len` is already aligned.
fn padding_length(len: usize, block_size: usize) -> Result<usize, CipherError> {
    if block_size == 0 || block_size > u8::MAX as usize {
        return Err(CipherError::InvalidPaddingBlockSize(block_size));
    }
    Ok(block_size - len % block_size)
}

/// Reads the trailing length byte and checks it against the buffer.
fn trailing_length(data: &[u8]) -> Result<usize, CipherError> {
    let pad_len = *data.last().ok_or(CipherError::InvalidPaddingLength)? as usize;
    if pad_len == 0 || pad_len > data.len() {
        log::debug!("rejecting padding length {} for {} bytes", pad_len, data.len());
        return Err(CipherError::InvalidPaddingLength);
    }
    Ok(pad_len)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Pkcs7Padding;

impl Padding for Pkcs7Padding {
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>, CipherError> {
        let pad_len = padding_length(data.len(), block_size)?;
        let mut out = Vec::with_capacity(data.len() + pad_len);
        out.extend_from_slice(data);
        out.resize(data.len() + pad_len, pad_len as u8);
        Ok(out)
    }

    /// Only the length byte is checked; the other padding bytes are not.
    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let pad_len = trailing_length(data)?;
        Ok(data[..data.len() - pad_len].to_vec())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiX923Padding;

impl Padding for AnsiX923Padding {
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>, CipherError> {
        let pad_len = padding_length(data.len(), block_size)?;
        let mut out = Vec::with_capacity(data.len() + pad_len);
        out.extend_from_slice(data);
        out.resize(data.len() + pad_len - 1, 0);
        out.push(pad_len as u8);
        Ok(out)
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let pad_len = trailing_length(data)?;
        let start = data.len() - pad_len;
        if data[start..data.len() - 1].iter().any(|&b| b != 0) {
            return Err(CipherError::InvalidPadding);
        }
        Ok(data[..start].to_vec())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Iso10126Padding;

impl Padding for Iso10126Padding {
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>, CipherError> {
        let pad_len = padding_length(data.len(), block_size)?;
        let mut filler = vec![0u8; pad_len - 1];
        OsRng.fill_bytes(&mut filler);

        let mut out = Vec::with_capacity(data.len() + pad_len);
        out.extend_from_slice(data);
        out.extend_from_slice(&filler);
        out.push(pad_len as u8);
        Ok(out)
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let pad_len = trailing_length(data)?;
        Ok(data[..data.len() - pad_len].to_vec())
    }
}

/// Zero bytes with no length marker.
///
/// Unpadding strips every trailing zero, so plaintext that itself ends in
/// zero bytes loses them.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZerosPadding;

impl Padding for ZerosPadding {
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>, CipherError> {
        let pad_len = padding_length(data.len(), block_size)?;
        let mut out = data.to_vec();
        out.resize(data.len() + pad_len, 0);
        Ok(out)
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        Ok(data[..end].to_vec())
    }
}

pub fn for_mode(padding: PaddingMode) -> Box<dyn Padding> {
    match padding {
        PaddingMode::PKCS7 => Box::new(Pkcs7Padding),
        PaddingMode::ANSI_X923 => Box::new(AnsiX923Padding),
        PaddingMode::ISO10126 => Box::new(Iso10126Padding),
        PaddingMode::Zeros => Box::new(ZerosPadding),
    }
}
