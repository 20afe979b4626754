//! Masking policy: how a matched span is rewritten.

use serde::{Deserialize, Serialize};

use crate::error::MaskError;

/// Validated single-byte fill character.
///
/// Only constructible through [`MaskPolicy::replace_with`] or the checked
/// conversion from [`char`]; a multi-byte character is unrepresentable, so
/// rewriting with this fill never changes an input's byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct MaskChar(u8);

impl TryFrom<char> for MaskChar {
    type Error = MaskError;

    fn try_from(ch: char) -> Result<Self, MaskError> {
        if ch.is_ascii() {
            Ok(Self(ch as u8))
        } else {
            Err(MaskError::InvalidMaskLength(ch.len_utf8()))
        }
    }
}

impl From<MaskChar> for char {
    fn from(mask: MaskChar) -> Self {
        char::from(mask.0)
    }
}

/// Rewrite rule applied to every byte of a matched span
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaskPolicy {
    /// Every matched byte becomes `*`
    #[default]
    Asterisk,
    /// Every matched byte becomes the held single-byte character.
    Replace(MaskChar),
}

impl MaskPolicy {
    /// Validate a caller-supplied mask string into a replace policy.
    ///
    /// The mask must be exactly one byte long. The check is byte-oriented, so
    /// a multi-byte UTF-8 character is rejected; a single valid UTF-8 byte is
    /// always one ASCII character.
    pub fn replace_with(mask: &str) -> Result<Self, MaskError> {
        if mask.len() != 1 {
            return Err(MaskError::InvalidMaskLength(mask.len()));
        }
        match mask.bytes().next() {
            Some(byte) => Ok(Self::Replace(MaskChar(byte))),
            None => Err(MaskError::InvalidMaskLength(0)),
        }
    }

    /// The character written over each masked byte. Always one byte.
    pub fn fill_char(self) -> char {
        match self {
            Self::Asterisk => '*',
            Self::Replace(mask) => char::from(mask),
        }
    }
}
