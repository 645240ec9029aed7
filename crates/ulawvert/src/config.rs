use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::format::Format;

/// A single resolved conversion.
pub(crate) struct Config {
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) format: Format,
    pub(crate) ffmpeg: PathBuf,
    pub(crate) verbose: bool,
    pub(crate) dry_run: bool,
}

/// Derive `<parent>/<stem>.<ext>` from the input path.
///
/// An input without a parent directory produces an output relative to the
/// current directory, so `greeting.mp3` becomes `greeting.ulaw`.
pub(crate) fn default_output(input: &Path, format: Format) -> PathBuf {
    let mut output = input.parent().map(Path::to_path_buf).unwrap_or_default();

    let mut name = OsString::new();

    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }

    name.push(".");
    name.push(format.ext());
    output.push(name);
    output
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::default_output;
    use crate::format::Format;

    #[test]
    fn replaces_extension_next_to_input() {
        let input = Path::new("/a/b/greeting.mp3");

        assert_eq!(
            default_output(input, Format::RawUlaw),
            PathBuf::from("/a/b/greeting.ulaw")
        );

        assert_eq!(
            default_output(input, Format::Wav),
            PathBuf::from("/a/b/greeting.wav")
        );
    }

    #[test]
    fn relative_input_without_parent() {
        assert_eq!(
            default_output(Path::new("greeting.mp3"), Format::RawUlaw),
            PathBuf::from("greeting.ulaw")
        );
    }

    #[test]
    fn only_final_extension_is_stripped() {
        assert_eq!(
            default_output(Path::new("dir/take.2.final.flac"), Format::Wav),
            PathBuf::from("dir/take.2.final.wav")
        );
    }

    #[test]
    fn input_without_extension() {
        assert_eq!(
            default_output(Path::new("sounds/beep"), Format::RawUlaw),
            PathBuf::from("sounds/beep.ulaw")
        );
    }

    #[test]
    fn wav_input_becomes_wav_output() {
        assert_eq!(
            default_output(Path::new("greeting.wav"), Format::Wav),
            PathBuf::from("greeting.wav")
        );
    }
}
