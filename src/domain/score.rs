use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Games won by each side of a match, parsed from `"<int>-<int>"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScorePair {
    pub first: u32,
    pub second: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid score {0:?}")]
pub struct ParseScoreError(pub String);

impl ScorePair {
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.first) + u64::from(self.second)
    }
}

impl FromStr for ScorePair {
    type Err = ParseScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseScoreError(s.to_string());

        let (first, second) = s.split_once('-').ok_or_else(invalid)?;
        let first = parse_component(first).ok_or_else(invalid)?;
        let second = parse_component(second).ok_or_else(invalid)?;

        Ok(Self { first, second })
    }
}

// `u32::from_str` accepts a leading '+', which is not a valid score
fn parse_component(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

impl fmt::Display for ScorePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
