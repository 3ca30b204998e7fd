use std::borrow::Cow;

use chrono::{DateTime, Utc};
use log::trace;

pub mod clock;
mod error;
pub mod markup;
pub mod palette;
pub mod severity;
mod strip;

pub use clock::{Stamp, time_and_date};
pub use error::TerminalError;
pub use markup::{Token, parse_colors, strip_markup, tokenize};
pub use palette::Paint;
pub use severity::{Severity, Stream};
pub use strip::clear_colour;

/// Zone used when none is given
pub const DEFAULT_TIMEZONE: &str = "Europe/Moscow";

/// Formats console lines as `[dd.MM.yyyy || HH:mm:ss] PREFIX -> message`
/// with the date and time taken in a fixed IANA zone.
///
/// The zone is only checked when a line is formatted, so constructing a
/// `Terminal` never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    timezone: String,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl Terminal {
    pub fn new(timezone: impl Into<String>) -> Self {
        Terminal {
            timezone: timezone.into(),
        }
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn set_timezone(&mut self, timezone: impl Into<String>) {
        self.timezone = timezone.into();
    }

    /// Format a line for the current time, expanding colour markup in
    /// `message`. A non-empty `debug` is appended gray on its own line.
    pub fn format(
        &self,
        prefix: &str,
        message: &str,
        debug: Option<&str>,
    ) -> Result<String, TerminalError> {
        self.format_at(prefix, message, debug, Utc::now())
    }

    /// Same as [`Terminal::format`] for a given instant
    pub fn format_at(
        &self,
        prefix: &str,
        message: &str,
        debug: Option<&str>,
        instant: DateTime<Utc>,
    ) -> Result<String, TerminalError> {
        let stamp = clock::stamp_at(&self.timezone, instant)?;
        let debug = non_empty(debug).map(|debug| Paint::FALLBACK.paint(debug));

        Ok(compose(&stamp, prefix, &parse_colors(message), debug.as_deref()))
    }

    /// Format a line without any styling; markup in `message` is kept as written
    pub fn format_plain(
        &self,
        prefix: &str,
        message: &str,
        debug: Option<&str>,
    ) -> Result<String, TerminalError> {
        self.format_plain_at(prefix, message, debug, Utc::now())
    }

    pub fn format_plain_at(
        &self,
        prefix: &str,
        message: &str,
        debug: Option<&str>,
        instant: DateTime<Utc>,
    ) -> Result<String, TerminalError> {
        let stamp = clock::stamp_at(&self.timezone, instant)?;
        Ok(compose(&stamp, prefix, message, non_empty(debug)))
    }

    pub fn parse_colors(&self, message: &str) -> String {
        parse_colors(message)
    }

    pub fn clear_colour<'a>(&self, text: &'a str) -> Cow<'a, str> {
        clear_colour(text)
    }

    /// The line an entry point prints for `severity`
    pub fn line(
        &self,
        severity: Severity,
        message: &str,
        debug: Option<&str>,
    ) -> Result<String, TerminalError> {
        self.format(&severity.tag(), message, debug)
    }

    pub fn line_at(
        &self,
        severity: Severity,
        message: &str,
        debug: Option<&str>,
        instant: DateTime<Utc>,
    ) -> Result<String, TerminalError> {
        self.format_at(&severity.tag(), message, debug, instant)
    }

    /// Unstyled counterpart of [`Terminal::line`]: plain label, markup kept as written
    pub fn line_plain(
        &self,
        severity: Severity,
        message: &str,
        debug: Option<&str>,
    ) -> Result<String, TerminalError> {
        self.format_plain(severity.label(), message, debug)
    }

    pub fn line_plain_at(
        &self,
        severity: Severity,
        message: &str,
        debug: Option<&str>,
        instant: DateTime<Utc>,
    ) -> Result<String, TerminalError> {
        self.format_plain_at(severity.label(), message, debug, instant)
    }

    /// Format a line for `severity` and write it to that severity's stream
    pub fn emit(
        &self,
        severity: Severity,
        message: &str,
        debug: Option<&str>,
    ) -> Result<(), TerminalError> {
        let line = self.line(severity, message, debug)?;
        trace!("writing {} line to {:?}", severity, severity.stream());

        match severity.stream() {
            Stream::Stdout => println!("{}", line),
            Stream::Stderr => eprintln!("{}", line),
        }

        Ok(())
    }

    /// Print an `INFO` line to stdout
    pub fn message(&self, text: &str) -> Result<(), TerminalError> {
        self.emit(Severity::Info, text, None)
    }

    /// Print an `ERROR` line to stderr, with optional details below it
    pub fn error(&self, message: &str, debug: Option<&str>) -> Result<(), TerminalError> {
        self.emit(Severity::Error, message, debug)
    }

    /// Print a `WARNING` line to stdout
    pub fn warning(&self, message: &str) -> Result<(), TerminalError> {
        self.emit(Severity::Warning, message, None)
    }
}

fn non_empty(debug: Option<&str>) -> Option<&str> {
    debug.filter(|debug| !debug.is_empty())
}

fn compose(stamp: &Stamp, prefix: &str, message: &str, debug: Option<&str>) -> String {
    let mut text = format!("[{} || {}] {} -> {}", stamp.date, stamp.time, prefix, message);
    if let Some(debug) = debug {
        text.push_str("\r\n");
        text.push_str(debug);
    }
    text
}
