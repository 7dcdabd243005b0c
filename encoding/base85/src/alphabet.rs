use std::convert::{TryFrom, TryInto};
use std::fmt;
use std::str::FromStr;

use crate::{AlphabetError, Error};

/// Number of symbols in a base85 alphabet.
pub const SIZE: usize = 85;

/// The original Ascii85 table, `!` through `u`.
pub const ASCII85: Alphabet = match Alphabet::new(
    b"!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstu",
) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build Ascii85 alphabet"),
};

/// The ZeroMQ (Z85) table.
pub const Z85: Alphabet = match Alphabet::new(
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#",
) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build Z85 alphabet"),
};

/// The RFC1924 table.
pub const RFC1924: Alphabet = match Alphabet::new(
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~",
) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build RFC1924 alphabet"),
};

/// An ordered table of 85 distinct printable ASCII symbols.
///
/// Position `i` holds the symbol for digit `i`. The inverse table is built
/// together with the forward one, so looking a symbol up is a single index.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; SIZE],
    digits: [Option<u8>; 128],
}

impl Alphabet {
    /// Builds an alphabet, rejecting non-printable and repeated symbols.
    pub const fn new(symbols: &[u8; SIZE]) -> Result<Self, AlphabetError> {
        let mut digits: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < SIZE {
            let symbol = symbols[index];
            if !symbol.is_ascii_graphic() {
                return Err(AlphabetError::NonPrintableSymbol { symbol, index });
            }
            if let Some(first) = digits[symbol as usize] {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol,
                    first: first as usize,
                    second: index,
                });
            }
            digits[symbol as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self {
            symbols: *symbols,
            digits,
        })
    }

    /// Symbol for a digit in `0..85`.
    #[inline]
    pub fn symbol(&self, digit: u8) -> u8 {
        self.symbols[digit as usize]
    }

    /// Digit for a symbol; `index` is the symbol's position in the input and
    /// is only used to report errors.
    #[inline]
    pub fn digit(&self, symbol: u8, index: usize) -> Result<u8, Error> {
        self.digits
            .get(symbol as usize)
            .copied()
            .flatten()
            .ok_or(Error::InvalidSymbol { symbol, index })
    }

    pub fn contains(&self, symbol: u8) -> bool {
        matches!(self.digits.get(symbol as usize), Some(Some(_)))
    }

    pub fn symbols(&self) -> &[u8; SIZE] {
        &self.symbols
    }
}

impl TryFrom<&[u8]> for Alphabet {
    type Error = AlphabetError;

    fn try_from(symbols: &[u8]) -> Result<Self, Self::Error> {
        let symbols: &[u8; SIZE] = symbols
            .try_into()
            .map_err(|_| AlphabetError::InvalidLength { length: symbols.len() })?;
        Self::new(symbols)
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.as_bytes())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols
            .iter()
            .try_for_each(|&symbol| write!(f, "{}", symbol as char))
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({:?})", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_tables() {
        assert_eq!(
            ASCII85.to_string(),
            "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstu"
        );
        assert_eq!(
            Z85.to_string(),
            "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#"
        );
        assert_eq!(
            RFC1924.to_string(),
            "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~"
        );
    }

    #[test]
    fn digit_is_inverse_of_symbol() {
        for alphabet in &[ASCII85, Z85, RFC1924] {
            for digit in 0..SIZE as u8 {
                let symbol = alphabet.symbol(digit);
                assert!(alphabet.contains(symbol));
                assert_eq!(alphabet.digit(symbol, 0), Ok(digit));
            }
        }
    }

    #[test]
    fn unknown_symbols() {
        assert_eq!(ASCII85.digit(b'z', 3), Err(Error::InvalidSymbol { symbol: b'z', index: 3 }));
        assert_eq!(Z85.digit(b' ', 0), Err(Error::InvalidSymbol { symbol: b' ', index: 0 }));
        assert_eq!(RFC1924.digit(0xE9, 7), Err(Error::InvalidSymbol { symbol: 0xE9, index: 7 }));
        assert!(!Z85.contains(b'"'));
        assert!(!RFC1924.contains(0xFF));
    }

    #[test]
    fn rejects_duplicates() {
        let mut symbols = *Z85.symbols();
        symbols[40] = b'a';
        assert_eq!(
            Alphabet::new(&symbols),
            Err(AlphabetError::DuplicateSymbol { symbol: b'a', first: 10, second: 40 })
        );
    }

    #[test]
    fn rejects_non_printable() {
        let mut symbols = *RFC1924.symbols();
        symbols[84] = b' ';
        assert_eq!(
            Alphabet::new(&symbols),
            Err(AlphabetError::NonPrintableSymbol { symbol: b' ', index: 84 })
        );
        symbols[84] = 0x80;
        assert_eq!(
            Alphabet::new(&symbols),
            Err(AlphabetError::NonPrintableSymbol { symbol: 0x80, index: 84 })
        );
    }

    #[test]
    fn from_str() {
        let alphabet: Alphabet = Z85.to_string().parse().unwrap();
        assert_eq!(alphabet, Z85);
        assert_eq!(
            "0123456789".parse::<Alphabet>(),
            Err(AlphabetError::InvalidLength { length: 10 })
        );
        assert_eq!(
            Alphabet::try_from(&[b'!'; 86][..]),
            Err(AlphabetError::InvalidLength { length: 86 })
        );
    }
}
