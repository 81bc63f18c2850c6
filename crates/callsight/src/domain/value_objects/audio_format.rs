//! AudioFormat - Canonical audio container types

use serde::{Deserialize, Serialize};

/// Canonical audio container accepted by the model backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    #[default]
    #[serde(rename = "audio/mpeg")]
    Mpeg,
    #[serde(rename = "audio/wav")]
    Wav,
    #[serde(rename = "audio/mp4")]
    Mp4,
    #[serde(rename = "audio/aac")]
    Aac,
    #[serde(rename = "audio/ogg")]
    Ogg,
    #[serde(rename = "audio/flac")]
    Flac,
    #[serde(rename = "audio/webm")]
    Webm,
    #[serde(rename = "audio/3gpp")]
    ThreeGpp,
    #[serde(rename = "audio/amr")]
    Amr,
}

/// Declared container labels (lowercase, parameters stripped) and their canonical type.
pub const LABEL_ALIASES: &[(&str, AudioFormat)] = &[
    ("audio/mpeg", AudioFormat::Mpeg),
    ("audio/mp3", AudioFormat::Mpeg),
    ("audio/mpeg3", AudioFormat::Mpeg),
    ("audio/x-mpeg", AudioFormat::Mpeg),
    ("audio/x-mpeg-3", AudioFormat::Mpeg),
    ("audio/x-mp3", AudioFormat::Mpeg),
    ("audio/mpga", AudioFormat::Mpeg),
    ("audio/wav", AudioFormat::Wav),
    ("audio/x-wav", AudioFormat::Wav),
    ("audio/wave", AudioFormat::Wav),
    ("audio/vnd.wave", AudioFormat::Wav),
    ("audio/x-pn-wav", AudioFormat::Wav),
    ("audio/mp4", AudioFormat::Mp4),
    ("audio/m4a", AudioFormat::Mp4),
    ("audio/x-m4a", AudioFormat::Mp4),
    ("audio/mp4a-latm", AudioFormat::Mp4),
    ("video/mp4", AudioFormat::Mp4),
    ("audio/aac", AudioFormat::Aac),
    ("audio/x-aac", AudioFormat::Aac),
    ("audio/aacp", AudioFormat::Aac),
    ("audio/ogg", AudioFormat::Ogg),
    ("audio/opus", AudioFormat::Ogg),
    ("audio/vorbis", AudioFormat::Ogg),
    ("application/ogg", AudioFormat::Ogg),
    ("audio/flac", AudioFormat::Flac),
    ("audio/x-flac", AudioFormat::Flac),
    ("audio/webm", AudioFormat::Webm),
    ("video/webm", AudioFormat::Webm),
    ("audio/3gpp", AudioFormat::ThreeGpp),
    ("audio/3gpp2", AudioFormat::ThreeGpp),
    ("video/3gpp", AudioFormat::ThreeGpp),
    ("audio/amr", AudioFormat::Amr),
    ("audio/amr-wb", AudioFormat::Amr),
];

/// Filename extensions (lowercase, no dot) and their canonical type.
pub const EXTENSION_ALIASES: &[(&str, AudioFormat)] = &[
    ("mp3", AudioFormat::Mpeg),
    ("mpeg", AudioFormat::Mpeg),
    ("mpga", AudioFormat::Mpeg),
    ("wav", AudioFormat::Wav),
    ("wave", AudioFormat::Wav),
    ("m4a", AudioFormat::Mp4),
    ("mp4", AudioFormat::Mp4),
    ("aac", AudioFormat::Aac),
    ("ogg", AudioFormat::Ogg),
    ("oga", AudioFormat::Ogg),
    ("opus", AudioFormat::Ogg),
    ("flac", AudioFormat::Flac),
    ("webm", AudioFormat::Webm),
    ("3gp", AudioFormat::ThreeGpp),
    ("3gpp", AudioFormat::ThreeGpp),
    ("amr", AudioFormat::Amr),
];

impl AudioFormat {
    /// Resolve a declared label, falling back to the filename extension and
    /// then to [`AudioFormat::Mpeg`]. Never fails.
    pub fn resolve(label: &str, filename: Option<&str>) -> Self {
        Self::from_label(label)
            .or_else(|| filename.and_then(Self::from_filename))
            .unwrap_or_default()
    }

    /// Look up a declared container label such as `audio/x-m4a` or
    /// `audio/webm;codecs=opus`.
    pub fn from_label(label: &str) -> Option<Self> {
        let essence = label.split(';').next().unwrap_or("").trim().to_lowercase();
        LABEL_ALIASES
            .iter()
            .find(|(alias, _)| *alias == essence)
            .map(|(_, format)| *format)
    }

    /// Look up by the extension of `filename`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.trim().rsplit_once('.')?;
        let ext = ext.to_lowercase();
        EXTENSION_ALIASES
            .iter()
            .find(|(alias, _)| *alias == ext)
            .map(|(_, format)| *format)
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioFormat::Mpeg => "audio/mpeg",
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Mp4 => "audio/mp4",
            AudioFormat::Aac => "audio/aac",
            AudioFormat::Ogg => "audio/ogg",
            AudioFormat::Flac => "audio/flac",
            AudioFormat::Webm => "audio/webm",
            AudioFormat::ThreeGpp => "audio/3gpp",
            AudioFormat::Amr => "audio/amr",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_alias_resolves() {
        for (label, expected) in LABEL_ALIASES {
            assert_eq!(AudioFormat::resolve(label, None), *expected, "label {label}");
            assert_eq!(
                AudioFormat::resolve(&label.to_uppercase(), None),
                *expected,
                "label {label} (uppercase)"
            );
        }
    }

    #[test]
    fn test_every_extension_alias_resolves() {
        for (ext, expected) in EXTENSION_ALIASES {
            let filename = format!("call-recording.{ext}");
            assert_eq!(
                AudioFormat::resolve("application/octet-stream", Some(&filename)),
                *expected,
                "extension {ext}"
            );
        }
    }

    #[test]
    fn test_label_parameters_are_ignored() {
        assert_eq!(
            AudioFormat::resolve("audio/webm;codecs=opus", None),
            AudioFormat::Webm
        );
        assert_eq!(AudioFormat::resolve(" Audio/X-M4A ", None), AudioFormat::Mp4);
    }

    #[test]
    fn test_label_wins_over_extension() {
        assert_eq!(
            AudioFormat::resolve("audio/wav", Some("recording.mp3")),
            AudioFormat::Wav
        );
    }

    #[test]
    fn test_double_miss_uses_default() {
        assert_eq!(
            AudioFormat::resolve("application/x-unknown", Some("recording.xyz")),
            AudioFormat::Mpeg
        );
        assert_eq!(AudioFormat::resolve("", None), AudioFormat::Mpeg);
        assert_eq!(AudioFormat::resolve("", Some("no_extension")), AudioFormat::Mpeg);
    }

    #[test]
    fn test_mime_type_round_trips() {
        for (_, format) in LABEL_ALIASES {
            assert_eq!(AudioFormat::from_label(format.mime_type()), Some(*format));
        }
    }
}
