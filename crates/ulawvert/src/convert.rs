use core::error::Error;
use core::fmt;

use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::config::Config;
use crate::format::Format;

#[derive(Debug)]
pub(crate) enum ConvertErr {
    /// The input path does not exist.
    InputNotFound(PathBuf),
    /// ffmpeg could not be started, or exited unsuccessfully.
    ConversionFailed,
}

impl fmt::Display for ConvertErr {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound(path) => write!(f, "Input file not found: {}", path.display()),
            Self::ConversionFailed => write!(
                f,
                "Conversion failed. Ensure ffmpeg is installed and the input is readable."
            ),
        }
    }
}

impl Error for ConvertErr {}

/// Why a transcoder invocation did not succeed.
#[derive(Debug)]
pub(crate) enum Failure {
    Spawn(io::Error),
    Status(ExitStatus),
}

impl fmt::Display for Failure {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Spawn(..) => write!(f, "failed to start transcoder"),
            Failure::Status(status) => write!(f, "transcoder exited with {status}"),
        }
    }
}

impl Error for Failure {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Failure::Spawn(e) => Some(e),
            Failure::Status(..) => None,
        }
    }
}

/// Build the ffmpeg invocation for a conversion.
pub(crate) fn command(config: &Config) -> Command {
    let mut cmd = Command::new(&config.ffmpeg);
    cmd.args(["-hide_banner", "-loglevel", "error", "-y"]);
    cmd.args([OsStr::new("-i"), config.input.as_os_str()]);
    cmd.arg("-ar").arg(Format::SAMPLE_RATE.to_string());
    cmd.arg("-ac").arg(Format::CHANNELS.to_string());
    config.format.codec(&mut cmd);
    cmd.arg(&config.output);
    cmd
}

/// Run the command to completion with inherited stdio.
pub(crate) fn execute(cmd: &mut Command) -> Result<(), Failure> {
    let status = cmd.status().map_err(Failure::Spawn)?;

    if !status.success() {
        return Err(Failure::Status(status));
    }

    Ok(())
}
