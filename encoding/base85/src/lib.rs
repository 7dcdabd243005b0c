//! # Base85 Encoding
//!
//! base85 maps every 4 bytes of input to 5 printable symbols and back. The
//! 32-bit big-endian value of each group is written as 5 base-85 digits, most
//! significant first, and each digit is looked up in an [`Alphabet`]. Three
//! alphabets are predefined: the original Ascii85 table ([`ASCII85`]),
//! ZeroMQ's [`Z85`] and [`RFC1924`]. For more details on the encoding scheme
//! refer to [Wikipedia](https://en.wikipedia.org/wiki/Ascii85).
//!
//! Inputs must be made of whole groups. There is no padding for trailing
//! bytes, no `z` shorthand for zero groups, and neither `<~ ~>` delimiters
//! nor whitespace are accepted when decoding.
//!
//! ## Encode Example
//!
//! ```
//! let encoded = base85::Z85.encode([0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B]).unwrap();
//! assert_eq!(encoded, "HelloWorld");
//! ```
//!
//! ## Decode Example
//!
//! ```
//! use base85::{alphabet, decode};
//!
//! let decoded = decode(&alphabet::ASCII85, "9jqo^BlbD-BleB1DJ+*+F(f,q").unwrap();
//! assert_eq!(decoded, b"Man is distinguished");
//! ```
//!
//! ## Selecting an alphabet by name
//!
//! ```
//! use base85::Variant;
//!
//! let codec = "rfc1924".parse::<Variant>().unwrap().codec();
//! assert_eq!(codec.decode("hELLOwORLD").unwrap(), [0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B]);
//! ```

pub mod alphabet;
mod codec;
mod decode;
mod encode;
mod error;

pub use alphabet::Alphabet;
pub use codec::{Codec, Variant};
pub use decode::{decode, decoded_len};
pub use encode::{encode, encoded_len};
pub use error::{AlphabetError, Error, UnknownVariant};

/// Codec for the original Ascii85 alphabet, `!` through `u`.
pub const ASCII85: Codec<'static> = Codec::new(&alphabet::ASCII85);

/// Codec for the ZeroMQ alphabet.
pub const Z85: Codec<'static> = Codec::new(&alphabet::Z85);

/// Codec for the RFC1924 alphabet.
pub const RFC1924: Codec<'static> = Codec::new(&alphabet::RFC1924);
