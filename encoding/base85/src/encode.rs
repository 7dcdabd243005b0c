use log::trace;

use crate::{Alphabet, Error};

fn divmod(n: u32, m: u32) -> (u32, u32) {
    (n / m, n % m)
}

/// Expands a big-endian word into its 5 base85 digits, most significant first.
fn encode_word(word: [u8; 4]) -> [u8; 5] {
    let n = u32::from_be_bytes(word);
    let (n, e) = divmod(n, 85);
    let (n, d) = divmod(n, 85);
    let (n, c) = divmod(n, 85);
    let (a, b) = divmod(n, 85);

    [a as u8, b as u8, c as u8, d as u8, e as u8]
}

/// Length of the text produced for `len` input bytes, or `None` if `len` is
/// not a multiple of 4.
pub const fn encoded_len(len: usize) -> Option<usize> {
    if len % 4 == 0 {
        Some(len / 4 * 5)
    } else {
        None
    }
}

/// Encodes `data` with `alphabet`.
///
/// Every 4-byte group becomes exactly 5 symbols; there is no `z` shorthand
/// for zero groups and no padding, so the input length must be a multiple of 4.
pub fn encode(alphabet: &Alphabet, data: impl AsRef<[u8]>) -> Result<String, Error> {
    let data = data.as_ref();
    let len = encoded_len(data.len()).ok_or(Error::InvalidInputLength {
        length: data.len(),
        multiple: 4,
    })?;

    let mut buf = Vec::with_capacity(len);
    for chunk in data.chunks_exact(4) {
        let word = [chunk[0], chunk[1], chunk[2], chunk[3]];
        buf.extend(encode_word(word).iter().map(|&digit| alphabet.symbol(digit)));
    }
    trace!("encoded {} groups", data.len() / 4);

    // alphabet symbols are printable ASCII
    Ok(unsafe { String::from_utf8_unchecked(buf) })
}
