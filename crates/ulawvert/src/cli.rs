use core::cell::Cell;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use termcolor::StandardStream;

use crate::config::{self, Config};
use crate::convert::{self, ConvertErr};
use crate::format::Format;
use crate::out::{self, Colors, Out, blank, info, warn};
use crate::shell::FormatCommand;

/// Convert an audio file into G.711 mu-law (8kHz, mono).
#[derive(Parser)]
pub struct Ulawvert {
    /// Audio file to convert, in any format ffmpeg can read.
    input: PathBuf,
    /// Where to write the converted audio.
    ///
    /// Defaults to the input path with its extension replaced by `.ulaw`, or
    /// `.wav` if `--wav` is specified.
    output: Option<PathBuf>,
    /// Write a WAV container using the pcm_mulaw codec instead of raw mu-law
    /// bytes.
    #[arg(long, overrides_with = "wav")]
    wav: bool,
    /// Path to ffmpeg binary to use when performing the conversion.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg_bin: PathBuf,
    /// Print the ffmpeg command before running it, and the reason it failed
    /// if it does.
    #[arg(short = 'v', long, overrides_with = "verbose")]
    verbose: bool,
    /// Print the ffmpeg command without running it.
    #[arg(short = 'D', long, overrides_with = "dry_run")]
    dry_run: bool,
}

/// Entry for `ulawvert`.
///
/// See [`crate`] documentation.
pub fn entry(opts: &Ulawvert) -> Result<()> {
    if !opts.input.try_exists().unwrap_or(false) {
        bail!(ConvertErr::InputNotFound(opts.input.clone()));
    }

    let format = if opts.wav { Format::Wav } else { Format::RawUlaw };

    let output = match &opts.output {
        Some(output) => output.clone(),
        None => config::default_output(&opts.input, format),
    };

    let config = Config {
        input: opts.input.clone(),
        output,
        format,
        ffmpeg: opts.ffmpeg_bin.clone(),
        verbose: opts.verbose,
        dry_run: opts.dry_run,
    };

    let indent = Cell::new(0);
    let cols = Colors::new();

    let o = StandardStream::stdout(out::color_choice(&io::stdout()));
    let mut o = o.lock();
    let mut o = Out::new(&indent, &cols, &mut o);
    run(&mut o, &config)
}

fn run(o: &mut Out<'_>, config: &Config) -> Result<()> {
    let mut cmd = convert::command(config);

    if config.verbose || config.dry_run {
        blank!(o, "{}", FormatCommand::new(&cmd));
    }

    if config.dry_run {
        warn!(o, "Dry run, not converting");
        return Ok(());
    }

    if let Err(failure) = convert::execute(&mut cmd) {
        if config.verbose {
            return Err(failure).context(ConvertErr::ConversionFailed);
        }

        bail!(ConvertErr::ConversionFailed);
    }

    info!(o, "Converted:");
    let mut o = o.indent(1);
    blank!(o, "Input : {}", config.input.display());
    blank!(o, "Output: {}", config.output.display());
    blank!(o, "Format: {}", config.format);
    Ok(())
}
