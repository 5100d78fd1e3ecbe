//! Fixed-width base-58 helpers (Bitcoin alphabet, no checksum).

use crate::error::{PrimitiveError, PrimitiveResult};

pub(crate) fn decode_fixed<const N: usize>(text: &str) -> PrimitiveResult<[u8; N]> {
    let bytes = bs58::decode(text)
        .into_vec()
        .map_err(|err| encoding_error(text, err))?;

    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| PrimitiveError::InvalidLength {
        expected: N,
        actual: bytes.len(),
    })
}

pub(crate) fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

fn encoding_error(text: &str, err: bs58::decode::Error) -> PrimitiveError {
    match err {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            PrimitiveError::InvalidEncoding { character, index }
        }
        bs58::decode::Error::NonAsciiCharacter { index } => PrimitiveError::InvalidEncoding {
            character: char_at(text, index),
            index,
        },
        // Remaining variants only arise from caller-provided buffers; report the
        // first offending character if any, else the start of the input.
        _ => first_invalid(text).unwrap_or(PrimitiveError::InvalidEncoding {
            character: char_at(text, 0),
            index: 0,
        }),
    }
}

fn first_invalid(text: &str) -> Option<PrimitiveError> {
    text.char_indices()
        .find(|(_, c)| !is_base58_char(*c))
        .map(|(index, character)| PrimitiveError::InvalidEncoding { character, index })
}

fn char_at(text: &str, index: usize) -> char {
    text.get(index..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn is_base58_char(c: char) -> bool {
    c.is_ascii_alphanumeric() && !matches!(c, '0' | 'O' | 'I' | 'l')
}
