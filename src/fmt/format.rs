use core::fmt::Write;

use jiff::civil::Date;

use crate::{
    error::Error,
    fmt::{names::FieldNames, render::render, token, Config},
};

pub(super) struct Formatter<'c, 'f, 'w, W, N> {
    pub(super) config: &'c Config<N>,
    pub(super) fmt: &'f str,
    pub(super) date: Date,
    pub(super) wtr: &'w mut W,
}

impl<'c, 'f, 'w, W: Write, N: FieldNames> Formatter<'c, 'f, 'w, W, N> {
    pub(super) fn format(&mut self) -> Result<(), Error> {
        while !self.fmt.is_empty() {
            if self.f() == b'\'' {
                self.fmt_quoted()?;
                continue;
            }
            match token::scan(self.fmt.as_bytes()) {
                Some((tok, len)) => {
                    trace!("matched {:?} as {tok:?}", &self.fmt[..len]);
                    render(
                        tok,
                        self.date,
                        &self.config.locale,
                        &self.config.names,
                        self.wtr,
                    )?;
                    self.fmt = &self.fmt[len..];
                }
                None => self.fmt_literal_char()?,
            }
        }
        Ok(())
    }

    /// Returns the byte at the current position of the format string.
    ///
    /// # Panics
    ///
    /// This panics when the entire format string has been consumed.
    fn f(&self) -> u8 {
        self.fmt.as_bytes()[0]
    }

    /// Returns true when the byte after the current one is a quote.
    fn next_is_quote(&self) -> bool {
        self.fmt.as_bytes().get(1) == Some(&b'\'')
    }

    /// Copies the character at the current position to the output and
    /// advances past it.
    fn fmt_literal_char(&mut self) -> Result<(), Error> {
        let Some(ch) = self.fmt.chars().next() else { return Ok(()) };
        self.wtr.write_char(ch)?;
        self.fmt = &self.fmt[ch.len_utf8()..];
        Ok(())
    }

    /// Handles an escaped literal starting at a `'`.
    ///
    /// A doubled quote, whether at the start or inside of an escaped literal,
    /// writes a single quote. Everything else up to the closing quote is
    /// written verbatim. The closing quote itself isn't written. If there is
    /// no closing quote, the rest of the format string is treated as literal.
    fn fmt_quoted(&mut self) -> Result<(), Error> {
        if self.next_is_quote() {
            self.wtr.write_char('\'')?;
            self.fmt = &self.fmt[2..];
            return Ok(());
        }
        self.fmt = &self.fmt[1..];
        while !self.fmt.is_empty() {
            if self.f() != b'\'' {
                // Write out everything up to the next quote in one go.
                let end = self.fmt.find('\'').unwrap_or(self.fmt.len());
                self.wtr.write_str(&self.fmt[..end])?;
                self.fmt = &self.fmt[end..];
                continue;
            }
            if self.next_is_quote() {
                self.wtr.write_char('\'')?;
                self.fmt = &self.fmt[2..];
                continue;
            }
            self.fmt = &self.fmt[1..];
            return Ok(());
        }
        debug!("unterminated quote in format string");
        Ok(())
    }
}
