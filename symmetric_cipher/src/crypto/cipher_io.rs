use crate::crypto::cipher_error::CipherError;
use crate::crypto::crypto_suite::CryptoSuite;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

/// Where a payload comes from: an in-memory message or a file attachment.
#[derive(Clone, Debug)]
pub enum CipherInput {
    Bytes(Vec<u8>),
    File(PathBuf),
}

#[derive(Clone, Debug)]
pub enum CipherOutput {
    Buffer(Vec<u8>),
    File(PathBuf),
}

impl CipherOutput {
    /// The buffered bytes, if this output is a buffer.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            CipherOutput::Buffer(buffer) => Some(buffer),
            CipherOutput::File(_) => None,
        }
    }
}

pub fn read_all(input: &CipherInput) -> io::Result<Vec<u8>> {
    match input {
        CipherInput::Bytes(data) => Ok(data.clone()),
        CipherInput::File(path) => {
            let mut reader = BufReader::new(File::open(path)?);
            let mut buffer = Vec::new();
            reader.read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

pub fn write_all(output: &mut CipherOutput, data: &[u8]) -> io::Result<()> {
    match output {
        CipherOutput::Buffer(buffer) => {
            buffer.clear();
            buffer.extend_from_slice(data);
            Ok(())
        }
        CipherOutput::File(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writer.write_all(data)?;
            writer.flush()
        }
    }
}

async fn read_all_async(input: CipherInput) -> io::Result<Vec<u8>> {
    match input {
        CipherInput::Bytes(data) => Ok(data),
        CipherInput::File(path) => tokio::fs::read(path).await,
    }
}

async fn write_all_async(output: &mut CipherOutput, data: Vec<u8>) -> io::Result<()> {
    match output {
        CipherOutput::Buffer(buffer) => {
            *buffer = data;
            Ok(())
        }
        CipherOutput::File(path) => tokio::fs::write(path, data).await,
    }
}

impl CryptoSuite {
    pub fn encrypt_io(
        &self,
        input: &CipherInput,
        output: &mut CipherOutput,
        iv: &[u8],
    ) -> Result<(), CipherError> {
        let data = read_all(input)?;
        let encrypted = self.encrypt(&data, iv)?;
        write_all(output, &encrypted)?;
        Ok(())
    }

    pub fn decrypt_io(
        &self,
        input: &CipherInput,
        output: &mut CipherOutput,
        iv: &[u8],
    ) -> Result<(), CipherError> {
        let data = read_all(input)?;
        let decrypted = self.decrypt(&data, iv)?;
        write_all(output, &decrypted)?;
        Ok(())
    }

    /// Async variant of [`Self::encrypt_io`]; the transform itself runs on
    /// tokio's blocking pool.
    pub async fn encrypt_async(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
        iv: &[u8],
    ) -> Result<(), CipherError> {
        self.transform_async(input, output, iv, true).await
    }

    pub async fn decrypt_async(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
        iv: &[u8],
    ) -> Result<(), CipherError> {
        self.transform_async(input, output, iv, false).await
    }

    async fn transform_async(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
        iv: &[u8],
        encrypt: bool,
    ) -> Result<(), CipherError> {
        let data = read_all_async(input).await?;
        let suite = self.clone();
        let iv = iv.to_vec();

        let processed = tokio::task::spawn_blocking(move || {
            if encrypt {
                suite.encrypt(&data, &iv)
            } else {
                suite.decrypt(&data, &iv)
            }
        })
        .await
        .map_err(|e| CipherError::TaskFailed(e.to_string()))??;

        write_all_async(output, processed).await?;
        Ok(())
    }
}
