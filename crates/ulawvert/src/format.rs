use core::fmt;

use std::process::Command;

/// The kind of mu-law output to produce.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) enum Format {
    /// Headerless G.711 mu-law samples.
    #[default]
    RawUlaw,
    /// mu-law samples wrapped in a WAV container.
    Wav,
}

impl Format {
    pub(crate) const SAMPLE_RATE: u32 = 8000;
    pub(crate) const CHANNELS: u32 = 1;

    /// Extension used when the output path is derived from the input.
    pub(crate) fn ext(&self) -> &'static str {
        match self {
            Format::RawUlaw => "ulaw",
            Format::Wav => "wav",
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Format::RawUlaw => "Raw mu-law (G.711) bytes",
            Format::Wav => "WAV container (pcm_mulaw)",
        }
    }

    /// Append the ffmpeg arguments selecting this format.
    ///
    /// Raw output forces the `mulaw` muxer, while the WAV container only sets
    /// the codec and lets ffmpeg pick the muxer from the output extension.
    pub(crate) fn codec(&self, command: &mut Command) {
        match self {
            Format::RawUlaw => {
                command.args(["-f", "mulaw"]);
            }
            Format::Wav => {
                command.args(["-c:a", "pcm_mulaw"]);
            }
        }
    }
}

impl fmt::Display for Format {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::process::Command;

    use super::Format;

    fn codec_args(format: Format) -> Vec<String> {
        let mut cmd = Command::new("ffmpeg");
        format.codec(&mut cmd);
        cmd.get_args()
            .map(OsStr::to_string_lossy)
            .map(|s| s.into_owned())
            .collect()
    }

    #[test]
    fn raw_selects_mulaw_muxer() {
        assert_eq!(codec_args(Format::RawUlaw), ["-f", "mulaw"]);
    }

    #[test]
    fn wav_selects_pcm_mulaw_codec() {
        assert_eq!(codec_args(Format::Wav), ["-c:a", "pcm_mulaw"]);
    }

    #[test]
    fn labels() {
        assert_eq!(Format::RawUlaw.to_string(), "Raw mu-law (G.711) bytes");
        assert_eq!(Format::Wav.to_string(), "WAV container (pcm_mulaw)");
        assert_eq!(Format::default(), Format::RawUlaw);
    }
}
