use thiserror::Error;

/// Errors returned by [`encode`](crate::encode) and [`decode`](crate::decode).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The input is not made of whole groups: 4 bytes when encoding, 5 symbols when decoding.
    #[error("input length {length} is not a multiple of {multiple}")]
    InvalidInputLength { length: usize, multiple: usize },

    /// A decode input byte is not a symbol of the alphabet.
    #[error("invalid symbol {symbol:#04x} at index {index}")]
    InvalidSymbol { symbol: u8, index: usize },
}

/// Errors returned when building an [`Alphabet`](crate::Alphabet).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum AlphabetError {
    #[error("alphabet has {length} symbols, expected 85")]
    InvalidLength { length: usize },

    #[error("non-printable symbol {symbol:#04x} at index {index}")]
    NonPrintableSymbol { symbol: u8, index: usize },

    #[error("duplicate symbol {symbol:#04x} at indexes {first} and {second}")]
    DuplicateSymbol { symbol: u8, first: usize, second: usize },
}

/// Returned when parsing a [`Variant`](crate::Variant) from an unknown name.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown base85 variant '{0}'")]
pub struct UnknownVariant(pub String);
