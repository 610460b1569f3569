use crate::crypto::cipher_error::CipherError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Magenta,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CipherMode {
    ECB,
    CBC,
    PCBC,
    CFB,
    OFB,
    CTR,
    RandomDelta,
}

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaddingMode {
    PKCS7,
    ANSI_X923,
    ISO10126,
    Zeros,
}

impl CipherMode {
    pub const ALL: [CipherMode; 7] = [
        CipherMode::ECB,
        CipherMode::CBC,
        CipherMode::PCBC,
        CipherMode::CFB,
        CipherMode::OFB,
        CipherMode::CTR,
        CipherMode::RandomDelta,
    ];

    /// Modes that round-trip data of any length without padding.
    #[inline]
    pub fn is_stream_mode(&self) -> bool {
        matches!(
            self,
            CipherMode::CFB | CipherMode::OFB | CipherMode::CTR | CipherMode::RandomDelta
        )
    }

    /// IV length the mode expects for a cipher with the given block size.
    pub fn iv_len(&self, block_size: usize) -> usize {
        match self {
            CipherMode::ECB => 0,
            _ => block_size,
        }
    }
}

impl PaddingMode {
    pub const ALL: [PaddingMode; 4] = [
        PaddingMode::PKCS7,
        PaddingMode::ANSI_X923,
        PaddingMode::ISO10126,
        PaddingMode::Zeros,
    ];
}

/// Lowercases and drops `_`/`-` so "Random_Delta", "random-delta" and
/// "RANDOMDELTA" all compare equal.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Algorithm {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "magenta" => Ok(Algorithm::Magenta),
            _ => Err(CipherError::UnknownOption {
                kind: "algorithm",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for CipherMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ecb" => Ok(CipherMode::ECB),
            "cbc" => Ok(CipherMode::CBC),
            "pcbc" => Ok(CipherMode::PCBC),
            "cfb" => Ok(CipherMode::CFB),
            "ofb" => Ok(CipherMode::OFB),
            "ctr" => Ok(CipherMode::CTR),
            "randomdelta" => Ok(CipherMode::RandomDelta),
            _ => Err(CipherError::UnknownOption {
                kind: "cipher mode",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for PaddingMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "pkcs7" => Ok(PaddingMode::PKCS7),
            "ansix923" | "x923" => Ok(PaddingMode::ANSI_X923),
            "iso10126" => Ok(PaddingMode::ISO10126),
            "zeros" | "zero" => Ok(PaddingMode::Zeros),
            _ => Err(CipherError::UnknownOption {
                kind: "padding",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Magenta => f.write_str("MAGENTA"),
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherMode::ECB => "ECB",
            CipherMode::CBC => "CBC",
            CipherMode::PCBC => "PCBC",
            CipherMode::CFB => "CFB",
            CipherMode::OFB => "OFB",
            CipherMode::CTR => "CTR",
            CipherMode::RandomDelta => "Random_Delta",
        };
        f.write_str(name)
    }
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaddingMode::PKCS7 => "PKCS7",
            PaddingMode::ANSI_X923 => "ANSI_X923",
            PaddingMode::ISO10126 => "ISO_10126",
            PaddingMode::Zeros => "Zeros",
        };
        f.write_str(name)
    }
}
