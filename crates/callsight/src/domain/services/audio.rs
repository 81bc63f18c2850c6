//! Audio Normalizer
//!
//! Maps declared container labels onto canonical formats and enforces the
//! byte-size ceiling before anything leaves the process.

use crate::domain::entities::AudioPayload;
use crate::domain::errors::AnalysisError;
use crate::domain::value_objects::AudioFormat;

/// Default ceiling: 20 MiB
pub const DEFAULT_MAX_AUDIO_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioNormalizer {
    max_bytes: usize,
}

impl AudioNormalizer {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Validate size and resolve the canonical container type.
    ///
    /// Exactly `max_bytes` is accepted; one byte more is `OversizedInput`.
    pub fn normalize(
        &self,
        bytes: Vec<u8>,
        label: &str,
        filename: Option<&str>,
    ) -> Result<AudioPayload, AnalysisError> {
        if bytes.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "The uploaded recording is empty.".to_string(),
            ));
        }

        if bytes.len() > self.max_bytes {
            return Err(AnalysisError::OversizedInput {
                size: Some(bytes.len()),
                limit: self.max_bytes,
            });
        }

        let format = AudioFormat::resolve(label, filename);
        tracing::debug!(
            "Normalized audio: {} bytes, label '{}' -> {}",
            bytes.len(),
            label,
            format
        );

        Ok(AudioPayload { bytes, format })
    }
}

impl Default for AudioNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AUDIO_BYTES)
    }
}
