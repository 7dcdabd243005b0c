use std::fmt;
use std::str::FromStr;

use crate::{alphabet, decode, encode, Alphabet, Error, UnknownVariant};

/// A base85 encoder/decoder bound to one alphabet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Codec<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Codec<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub const fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    pub fn encode(&self, data: impl AsRef<[u8]>) -> Result<String, Error> {
        encode(self.alphabet, data)
    }

    pub fn decode(&self, text: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        decode(self.alphabet, text)
    }
}

/// The predefined alphabets, selectable by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Ascii85,
    Z85,
    Rfc1924,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Ascii85, Variant::Z85, Variant::Rfc1924];

    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Variant::Ascii85 => &alphabet::ASCII85,
            Variant::Z85 => &alphabet::Z85,
            Variant::Rfc1924 => &alphabet::RFC1924,
        }
    }

    pub fn codec(self) -> Codec<'static> {
        Codec::new(self.alphabet())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Ascii85 => "ascii85",
            Variant::Z85 => "z85",
            Variant::Rfc1924 => "rfc1924",
        }
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    /// Accepts the canonical names case-insensitively, plus `standard` for Ascii85.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii85" | "standard" => Ok(Variant::Ascii85),
            "z85" => Ok(Variant::Z85),
            "rfc1924" => Ok(Variant::Rfc1924),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
