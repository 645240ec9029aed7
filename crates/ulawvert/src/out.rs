use core::cell::Cell;
use core::fmt;

use std::io::{self, IsTerminal};

use termcolor::{ColorChoice, ColorSpec, WriteColor};

macro_rules! __log {
    ($log:ident, $o:ident $(, $($tt:tt)*)?) => {
        $( $o.$log(format_args!($($tt)*))?; )*
    };
}

pub(crate) use __log;

macro_rules! __blank { ($($tt:tt)*) => { $crate::out::__log!(blank, $($tt)*) }; }
macro_rules! __info { ($($tt:tt)*) => { $crate::out::__log!(info, $($tt)*) }; }
macro_rules! __warn { ($($tt:tt)*) => { $crate::out::__log!(warn, $($tt)*) }; }

pub(crate) use __blank as blank;
pub(crate) use __info as info;
pub(crate) use __warn as warn;

/// Only colorize streams which are attached to a terminal.
pub(crate) fn color_choice(stream: &impl IsTerminal) -> ColorChoice {
    if stream.is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

pub(crate) struct Colors {
    info: ColorSpec,
    warn: ColorSpec,
}

impl Colors {
    pub(crate) fn new() -> Self {
        let mut info = ColorSpec::new();
        info.set_fg(Some(termcolor::Color::Green)).set_bold(true);

        let mut warn = ColorSpec::new();
        warn.set_fg(Some(termcolor::Color::Yellow)).set_bold(true);

        Colors { info, warn }
    }
}

/// Indented, colorized line output.
pub(crate) struct Out<'a> {
    change: usize,
    indent: &'a Cell<usize>,
    c: &'a Colors,
    o: &'a mut dyn WriteColor,
}

impl Out<'_> {
    pub(crate) fn new<'a>(
        indent: &'a Cell<usize>,
        c: &'a Colors,
        o: &'a mut dyn WriteColor,
    ) -> Out<'a> {
        Out {
            change: 0,
            indent,
            c,
            o,
        }
    }
}

impl<'a> Out<'a> {
    /// Indent output until the returned guard is dropped.
    pub(crate) fn indent(&mut self, change: usize) -> Out<'_> {
        self.indent.set(self.indent.get().saturating_add(change));

        Out {
            change,
            indent: self.indent,
            c: self.c,
            o: self.o,
        }
    }

    /// Write an uncolored line at the current indentation.
    pub(crate) fn blank(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.prefix()?;
        writeln!(self.o, "{m}")?;
        self.o.flush()?;
        Ok(())
    }

    /// Write a line highlighted as progress or success.
    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.colorize(&self.c.info, m)
    }

    /// Write a line highlighted as a warning.
    pub(crate) fn warn(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.colorize(&self.c.warn, m)
    }

    fn prefix(&mut self) -> io::Result<()> {
        for _ in 0..self.indent.get() {
            self.o.write_all(b"  ")?;
        }

        Ok(())
    }

    fn colorize(&mut self, c: &ColorSpec, m: impl fmt::Display) -> io::Result<()> {
        self.prefix()?;
        self.o.set_color(c)?;
        write!(self.o, "{m}")?;
        self.o.reset()?;
        writeln!(self.o)?;
        self.o.flush()?;
        Ok(())
    }
}

impl Drop for Out<'_> {
    #[inline]
    fn drop(&mut self) {
        self.indent.set(self.indent.get().saturating_sub(self.change));
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use anyhow::Result;
    use termcolor::NoColor;

    use super::{Colors, Out, blank, info, warn};

    #[test]
    fn indents_nested_output() -> Result<()> {
        let indent = Cell::new(0);
        let colors = Colors::new();
        let mut buf = NoColor::new(Vec::new());

        {
            let mut o = Out::new(&indent, &colors, &mut buf);
            info!(o, "Converted:");

            {
                let mut o = o.indent(1);
                blank!(o, "Input : {}", "a.mp3");
                warn!(o, "{}", "nested");
            }

            blank!(o, "done");
        }

        assert_eq!(indent.get(), 0);
        assert_eq!(
            String::from_utf8(buf.into_inner())?,
            "Converted:\n  Input : a.mp3\n  nested\ndone\n"
        );
        Ok(())
    }
}
