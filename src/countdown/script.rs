//! Text of every line in the countdown transcript.

use std::fmt;

pub const BANNER: &str = "=== WOFL IDE Python Test ===";
pub const VERSION_PREFIX: &str = "Python version: ";
pub const STARTING: &str = "Starting countdown...";
pub const COUNT_PREFIX: &str = "Count: ";
pub const DONE: &str = "Done! Your IDE is working perfectly.";
pub const COLORS: &str = "Output colors should be visible now.";

/// One line of output, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Banner,
    Version(&'a str),
    Starting,
    Count(u32),
    Done,
    Colors,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Banner => f.write_str(BANNER),
            Self::Version(version) => write!(f, "{}{}", VERSION_PREFIX, version),
            Self::Starting => f.write_str(STARTING),
            Self::Count(value) => write!(f, "{}{}", COUNT_PREFIX, value),
            Self::Done => f.write_str(DONE),
            Self::Colors => f.write_str(COLORS),
        }
    }
}
