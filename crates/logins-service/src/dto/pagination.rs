//! Page parameters for the listing endpoint

use logins_common::PaginationConfig;

/// Normalized page request: `page` is 1-based, `limit` is within bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub limit: u32,
}

impl PageParams {
    /// Resolve raw values against the configured defaults.
    ///
    /// A missing or zero page becomes 1. A missing or zero limit becomes the
    /// default limit. Limits above the maximum are clamped.
    pub fn resolve(page: Option<u32>, limit: Option<u32>, config: &PaginationConfig) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(config.default_limit)
            .min(config.max_limit);

        Self { page, limit }
    }

    /// Zero-based page index used by the repository
    pub fn index(&self) -> u32 {
        self.page.saturating_sub(1)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::resolve(None, None, &PaginationConfig::default())
    }
}
