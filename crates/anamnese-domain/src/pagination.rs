//! Pagination parameters for client listing.

use serde::{Deserialize, Serialize};

/// Page sizes the listing endpoint accepts. Anything else is snapped to
/// the nearest of these.
pub const ALLOWED_LIMITS: [u32; 3] = [20, 50, 100];

/// Pagination parameters shared by list endpoints.
///
/// - `limit`: one of [`ALLOWED_LIMITS`], default 20
/// - `page`: ≥ 1, default 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_limit() -> u32 {
    20
}

fn default_page() -> u32 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            page: default_page(),
        }
    }
}

impl PageRequest {
    /// Snap `limit` to the nearest allowed page size (ties resolve to the
    /// smaller value) and force `page` to at least 1.
    ///
    /// Call after deserializing from query params to enforce bounds.
    pub fn clamped(self) -> Self {
        let limit = ALLOWED_LIMITS
            .into_iter()
            .min_by_key(|&allowed| allowed.abs_diff(self.limit))
            .unwrap_or(default_limit());
        Self {
            limit,
            page: self.page.max(1),
        }
    }

    /// Zero-based row offset for the current page.
    pub fn offset(&self) -> u64 {
        ((self.page - 1) * self.limit) as u64
    }
}

/// Pagination metadata returned alongside listing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl PageInfo {
    pub fn new(page: PageRequest, total: u64) -> Self {
        Self {
            page: page.page,
            limit: page.limit,
            total,
            total_pages: total.div_ceil(page.limit as u64),
        }
    }
}
