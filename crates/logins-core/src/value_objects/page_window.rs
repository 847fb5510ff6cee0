//! Page windowing - which rows make up page `n` of size `limit`
//!
//! Two strategies exist:
//! - `Offset`: skip `page * limit` rows ordered by id, take `limit`.
//! - `IdRange`: select ids in `(page * limit, (page + 1) * limit + 1)`.
//!   Only correct while ids are gapless; kept for deployments that still
//!   depend on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Page windowing strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageWindow {
    /// OFFSET/LIMIT over rows ordered by id
    #[default]
    Offset,
    /// Surrogate id range. Deprecated: pages shrink or go empty when ids
    /// have gaps.
    IdRange,
}

/// Concrete bounds for a single page query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBounds {
    Offset { offset: i64, limit: i64 },
    /// Both bounds are exclusive
    IdRange { after: i64, before: i64 },
}

impl PageWindow {
    /// Compute the bounds of the zero-based `page` with `limit` rows
    pub fn bounds(self, page: u32, limit: u32) -> PageBounds {
        let page = i64::from(page);
        let limit = i64::from(limit);

        match self {
            Self::Offset => PageBounds::Offset {
                offset: page.saturating_mul(limit),
                limit,
            },
            Self::IdRange => PageBounds::IdRange {
                after: page.saturating_mul(limit),
                before: page
                    .saturating_add(1)
                    .saturating_mul(limit)
                    .saturating_add(1),
            },
        }
    }

    /// Name used in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Offset => "offset",
            Self::IdRange => "id_range",
        }
    }
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a page window name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page window strategy: {0}")]
pub struct PageWindowParseError(pub String);

impl FromStr for PageWindow {
    type Err = PageWindowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "offset" => Ok(Self::Offset),
            "id_range" | "id-range" => Ok(Self::IdRange),
            other => Err(PageWindowParseError(other.to_string())),
        }
    }
}
