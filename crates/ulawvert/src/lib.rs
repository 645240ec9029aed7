//! A tool to convert audio files into G.711 mu-law.
//!
//! The input can be any file [ffmpeg] is able to read. It is resampled to
//! 8kHz, downmixed to a single channel and encoded as mu-law, either as raw
//! headerless bytes (the default) or wrapped in a WAV container with `--wav`.
//!
//! Unless an output path is given, the output is written next to the input
//! using the same file name with its extension replaced by `.ulaw` or `.wav`.
//!
//! <br>
//!
//! ## Usage
//!
//! ```sh
//! ulawvert greeting.mp3
//! ulawvert greeting.wav greeting.ulaw
//! ulawvert greeting.mp3 greeting.wav --wav
//! ```
//!
//! Paths starting with `-` have to be given after `--`, as in
//! `ulawvert -- -intro.mp3`.
//!
//! Use `--dry-run` or `-D` to see the ffmpeg command which would be run, and
//! `--ffmpeg-bin <path>` if ffmpeg is not available in `PATH`.
//!
//! <br>
//!
//! ## Exit codes
//!
//! * `0` if the conversion succeeded.
//! * `1` if the input does not exist or the conversion failed.
//! * `2` on invalid arguments.
//!
//! [ffmpeg]: https://ffmpeg.org

pub mod cli;
mod config;
mod convert;
mod format;
mod out;
mod shell;
