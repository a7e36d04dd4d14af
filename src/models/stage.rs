use std::fmt;

use super::CountdownState;

/// Where a countdown run currently is.
///
/// The machine is linear: `Start → Banner → Countdown(n) … Countdown(1) →
/// Closing → Terminated`. There is no branching and no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Banner,
    Countdown(u32),
    Closing,
    Terminated,
}

impl Stage {
    /// Advance to the following stage, consuming a counter value when the
    /// next stage is a countdown step.
    pub fn next(self, counter: &mut CountdownState) -> Self {
        match self {
            Self::Start => Self::Banner,
            Self::Banner | Self::Countdown(_) => match counter.next() {
                Some(value) => Self::Countdown(value),
                None => Self::Closing,
            },
            Self::Closing | Self::Terminated => Self::Terminated,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminated)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Banner => "banner",
            Self::Countdown(_) => "countdown",
            Self::Closing => "closing",
            Self::Terminated => "terminated",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Countdown(value) => write!(f, "countdown({})", value),
            other => f.write_str(other.as_str()),
        }
    }
}
