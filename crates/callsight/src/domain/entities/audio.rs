//! AudioPayload - Normalized audio handed to the model backend

use crate::domain::value_objects::AudioFormat;

/// Audio bytes with their canonical container type.
///
/// Only produced by [`AudioNormalizer`](crate::domain::services::AudioNormalizer),
/// so a payload is always within the configured size ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    pub bytes: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioPayload {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
