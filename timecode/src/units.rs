use core::fmt::Display;

/// A named time scale with a fixed length in seconds.
///
/// `s` and `sec` are the same unit: both parse to [`TimeUnit::Seconds`] and
/// [`TimeUnit::SEC`] is provided as an alias.
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    Picoseconds,
    Nanoseconds,
    Microseconds,
    Milliseconds,
    #[default]
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl TimeUnit {
    pub const SEC: TimeUnit = TimeUnit::Seconds;

    /// All units, finest first.
    pub const ALL: [TimeUnit; 9] = [
        TimeUnit::Picoseconds,
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
    ];

    /// Returns the length of one unit in seconds.
    pub const fn as_secs_f64(self) -> f64 {
        match self {
            TimeUnit::Picoseconds => 1e-12,
            TimeUnit::Nanoseconds => 1e-9,
            TimeUnit::Microseconds => 1e-6,
            TimeUnit::Milliseconds => 1e-3,
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3_600.0,
            TimeUnit::Days => 86_400.0,
            TimeUnit::Weeks => 604_800.0,
        }
    }

    /// Returns the exact length of one unit in picoseconds.
    pub const fn as_picos(self) -> i64 {
        match self {
            TimeUnit::Picoseconds => 1,
            TimeUnit::Nanoseconds => 1_000,
            TimeUnit::Microseconds => 1_000_000,
            TimeUnit::Milliseconds => 1_000_000_000,
            TimeUnit::Seconds => crate::PICOS_PER_SEC,
            TimeUnit::Minutes => 60 * crate::PICOS_PER_SEC,
            TimeUnit::Hours => 3_600 * crate::PICOS_PER_SEC,
            TimeUnit::Days => 86_400 * crate::PICOS_PER_SEC,
            TimeUnit::Weeks => 604_800 * crate::PICOS_PER_SEC,
        }
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            TimeUnit::Picoseconds => "ps",
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "hr",
            TimeUnit::Days => "day",
            TimeUnit::Weeks => "week",
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers() {
        assert_eq!(TimeUnit::Picoseconds.as_secs_f64(), 1e-12);
        assert_eq!(TimeUnit::SEC.as_secs_f64(), 1.0);
        assert_eq!(TimeUnit::Minutes.as_secs_f64(), 60.0);
        assert_eq!(TimeUnit::Weeks.as_secs_f64(), 604_800.0);
    }

    #[test]
    // the integer and floating point tables must describe the same units
    fn tables_agree() {
        for unit in TimeUnit::ALL {
            let secs = unit.as_picos() as f64 / crate::PICOS_PER_SEC as f64;
            let expected = unit.as_secs_f64();
            assert!(
                (secs - expected).abs() <= expected * 1e-15,
                "{unit}: {secs} != {expected}"
            );
        }
    }

    #[test]
    fn ordered_finest_first() {
        for pair in TimeUnit::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].as_picos() < pair[1].as_picos());
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", TimeUnit::Milliseconds), "ms");
        assert_eq!(format!("{}", TimeUnit::Weeks), "week");
        assert_eq!(TimeUnit::default(), TimeUnit::Seconds);
    }
}
