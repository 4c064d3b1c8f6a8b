//! Parsing of human written times such as `"5.2 ms"`, `"10min"` or `"3"`.
//!
//! A time string is a leading numeric literal followed by an optional unit.
//! The unit is matched after trimming whitespace and folding case. When no
//! unit is given the parser's default unit applies, which is seconds unless
//! configured otherwise.
//!
//! ```
//! use timecode::{Parser, Time9, TimeUnit};
//!
//! assert_eq!(timecode::parse::parse_secs("10min"), Ok(600.0));
//!
//! let parser = Parser::new().default_unit(TimeUnit::Milliseconds);
//! let time: Time9 = parser.parse_time("250").unwrap();
//! assert_eq!(time, Time9::new(250, TimeUnit::Milliseconds));
//! ```

use core::str::FromStr;
use log::debug;

use crate::{Error, Time, TimeUnit};

impl FromStr for TimeUnit {
    type Err = Error;

    /// Lookup a unit by name. An empty string is seconds. An unknown name is
    /// reported as given, surrounding whitespace included.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "ps" => TimeUnit::Picoseconds,
            "ns" => TimeUnit::Nanoseconds,
            "us" => TimeUnit::Microseconds,
            "ms" => TimeUnit::Milliseconds,
            "" | "s" | "sec" | "second" | "seconds" => TimeUnit::Seconds,
            "min" | "minute" | "minutes" => TimeUnit::Minutes,
            "hr" | "hour" | "hours" => TimeUnit::Hours,
            "day" => TimeUnit::Days,
            "week" | "wk" => TimeUnit::Weeks,
            _ => {
                debug!("time unit {s:?} not recognized");
                return Err(Error::UnknownUnit(s.to_string()));
            }
        };

        Ok(unit)
    }
}

/// Parses time strings into seconds or [`Time`] values.
///
/// The only setting is the unit applied to bare numbers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Parser {
    default_unit: TimeUnit,
}

impl Parser {
    /// A parser which treats bare numbers as seconds.
    pub const fn new() -> Self {
        Self {
            default_unit: TimeUnit::Seconds,
        }
    }

    /// Set the unit used when the string has no unit suffix.
    pub const fn default_unit(mut self, unit: TimeUnit) -> Self {
        self.default_unit = unit;
        self
    }

    /// Parse a time string into floating point seconds.
    pub fn parse_secs(&self, s: &str) -> Result<f64, Error> {
        let (value, rest) = match split_number(s) {
            Some(parts) => parts,
            None => {
                debug!("no numeric value found in time string {s:?}");
                return Err(Error::InvalidNumber(s.to_string()));
            }
        };

        let unit = if rest.trim().is_empty() {
            self.default_unit
        } else {
            rest.parse::<TimeUnit>()?
        };

        Ok(value * unit.as_secs_f64())
    }

    /// Parse a time string into a [`Time`], rounding to the nearest base unit.
    pub fn parse_time<const R: u32>(&self, s: &str) -> Result<Time<R>, Error> {
        Time::try_from_secs_f64(self.parse_secs(s)?)
    }
}

/// Parse a time string into seconds. Bare numbers are seconds.
pub fn parse_secs(s: &str) -> Result<f64, Error> {
    Parser::new().parse_secs(s)
}

/// Parse a time string into seconds, using `unit` for bare numbers.
pub fn parse_secs_with_default(s: &str, unit: TimeUnit) -> Result<f64, Error> {
    Parser::new().default_unit(unit).parse_secs(s)
}

impl<const R: u32> FromStr for Time<R> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new().parse_time(s)
    }
}

/// Splits the leading numeric literal off of `s`, returning its value and
/// the unparsed remainder.
fn split_number(s: &str) -> Option<(f64, &str)> {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int = count_digits(&bytes[end..]);
    end += int;

    let mut frac = 0;
    if bytes.get(end) == Some(&b'.') {
        frac = count_digits(&bytes[end + 1..]);
        end += 1 + frac;
    }

    if int + frac == 0 {
        return None;
    }

    // an exponent only counts when it has digits, so "5e" is 5 of unit "e"
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp = count_digits(bytes.get(exp_start..).unwrap_or_default());
        if exp > 0 {
            end = exp_start + exp;
        }
    }

    let value = s[..end].parse::<f64>().ok()?;
    Some((value, &s[end..]))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
