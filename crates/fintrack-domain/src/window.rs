use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::common::ParseError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
/// Policy selecting transactions relative to a reference instant.
pub enum TimeWindow {
    #[default]
    All,
    /// Same local calendar date as the reference.
    Daily,
    /// The seven local calendar days leading up to the reference.
    Weekly,
    /// One calendar month back from the reference.
    Monthly,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 4] = [
        TimeWindow::All,
        TimeWindow::Daily,
        TimeWindow::Weekly,
        TimeWindow::Monthly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeWindow::All => "all",
            TimeWindow::Daily => "daily",
            TimeWindow::Weekly => "weekly",
            TimeWindow::Monthly => "monthly",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        TimeWindow::ALL
            .into_iter()
            .find(|window| window.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownWindow(value.to_string()))
    }
}
