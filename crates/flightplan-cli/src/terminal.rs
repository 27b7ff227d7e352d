//! Terminal styling for itineraries and menus.
//!
//! Text output names *what* it shows (an airport, a price, a layover) through
//! [`Style`]; the [`Palette`] decides whether that turns into ANSI escapes.

use std::ffi::OsString;
use std::fmt;

const RESET: &str = "\x1b[0m";

/// What a piece of text is, for styling purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Menu titles and route headings.
    Heading,
    /// IATA codes and airport names.
    Airport,
    /// Airline plus flight number.
    Flight,
    /// Fares and route totals.
    Price,
    /// Waiting time between legs and other secondary text.
    Layover,
    /// Errors and empty results.
    Problem,
}

impl Style {
    const fn ansi(self) -> &'static str {
        match self {
            Style::Heading => "\x1b[38;5;208m",
            Style::Airport => "\x1b[1;97m",
            Style::Flight => "\x1b[36m",
            Style::Price => "\x1b[32m",
            Style::Layover => "\x1b[90m",
            Style::Problem => "\x1b[31m",
        }
    }
}

/// Whether styled text is emitted with escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    #[must_use]
    pub const fn colored() -> Self {
        Self { enabled: true }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Palette for the current process environment, unless `--no-color` was given.
    #[must_use]
    pub fn detect(no_color_flag: bool) -> Self {
        if !no_color_flag && color_allowed(|key| std::env::var_os(key)) {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wrap `value` so that it displays in `style`.
    pub fn paint<T: fmt::Display>(&self, style: Style, value: T) -> Painted<T> {
        Painted {
            code: self.enabled.then(|| style.ansi()),
            value,
        }
    }
}

/// A value that displays with the escape codes of its style, if any.
pub struct Painted<T> {
    code: Option<&'static str>,
    value: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{code}{}{RESET}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Decide from environment variables whether escape codes are welcome.
///
/// A non-empty `NO_COLOR` (https://no-color.org/) or `TERM=dumb` disables
/// them. `lookup` reads a variable, normally `std::env::var_os`.
pub fn color_allowed<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<OsString>,
{
    if lookup("NO_COLOR").is_some_and(|value| !value.is_empty()) {
        return false;
    }
    !lookup("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}
