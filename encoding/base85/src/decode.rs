use log::trace;

use crate::{Alphabet, Error};

/// Folds 5 digits, most significant first, into 4 big-endian bytes.
///
/// Groups above `u32::MAX` keep their low 32 bits.
fn decode_word(digits: [u8; 5]) -> [u8; 4] {
    let q = digits
        .iter()
        .fold(0u64, |q, &digit| q * 85 + digit as u64);
    (q as u32).to_be_bytes()
}

/// Length of the data produced for `len` input symbols, or `None` if `len`
/// is not a multiple of 5.
pub const fn decoded_len(len: usize) -> Option<usize> {
    if len % 5 == 0 {
        Some(len / 5 * 4)
    } else {
        None
    }
}

/// Decodes `text` with `alphabet`.
///
/// Fails on the first symbol that is not part of `alphabet`; nothing decoded
/// before it is returned. Whitespace is not skipped.
pub fn decode(alphabet: &Alphabet, text: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let text = text.as_ref();
    let len = decoded_len(text.len()).ok_or(Error::InvalidInputLength {
        length: text.len(),
        multiple: 5,
    })?;

    let mut out = Vec::with_capacity(len);
    for (group, chunk) in text.chunks_exact(5).enumerate() {
        let mut digits = [0u8; 5];
        for (offset, (digit, &symbol)) in digits.iter_mut().zip(chunk).enumerate() {
            *digit = alphabet.digit(symbol, group * 5 + offset)?;
        }
        out.extend_from_slice(&decode_word(digits));
    }
    trace!("decoded {} groups", text.len() / 5);

    Ok(out)
}
