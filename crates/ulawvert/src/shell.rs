use core::fmt;

use std::ffi::OsStr;
use std::process::Command;

/// Escape a string so that a POSIX shell reads it back as exactly one word.
///
/// The value is wrapped in single quotes, inside of which nothing is special
/// except the single quote itself. Each embedded `'` closes the quoted
/// segment, emits an escaped quote and reopens it: `'\''`.
pub(crate) fn escape(s: &str) -> String {
    let mut o = String::with_capacity(s.len() + 2);
    o.push('\'');

    for c in s.chars() {
        if c == '\'' {
            o.push_str("'\\''");
        } else {
            o.push(c);
        }
    }

    o.push('\'');
    o
}

/// Escape an OS string, such as a path or a command argument.
///
/// Non-UTF-8 sequences are replaced, so the result is only suitable for
/// display.
pub(crate) fn escape_os(s: &OsStr) -> String {
    escape(&s.to_string_lossy())
}

/// Helper type to format a command as a single shell-escaped line.
pub(crate) struct FormatCommand<'a> {
    cmd: &'a Command,
}

impl<'a> FormatCommand<'a> {
    pub(crate) fn new(cmd: &'a Command) -> Self {
        Self { cmd }
    }
}

impl fmt::Display for FormatCommand<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", escape_os(self.cmd.get_program()))?;

        for arg in self.cmd.get_args() {
            write!(f, " {}", escape_os(arg))?;
        }

        Ok(())
    }
}
