//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Page size used when the caller gives none or an unusable one.
pub const DEFAULT_LIMIT: u32 = 20;

/// Starting offset used when the caller gives none or an unusable one.
pub const DEFAULT_OFFSET: u32 = 0;

/// Limit/offset window over a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// Maximum number of items to return
    pub limit: u32,

    /// Number of items to skip
    pub offset: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl PageParams {
    /// Create page parameters, replacing a zero limit with the default
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
            offset,
        }
    }

    /// Build page parameters from raw query-string values.
    ///
    /// Missing, unparsable and non-positive values fall back to the defaults
    /// independently; an invalid `limit` never rejects the request.
    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v > 0)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(DEFAULT_LIMIT);
        let offset = offset
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v > 0)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(DEFAULT_OFFSET);

        Self { limit, offset }
    }

    /// Limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        i64::from(self.limit)
    }

    /// Offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        i64::from(self.offset)
    }
}

/// One page of a listing together with the total count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Items in this page
    pub items: Vec<T>,

    /// Number of non-deleted items across every page
    pub total: u64,

    /// Limit that produced this page
    pub limit: u32,

    /// Offset that produced this page
    pub offset: u32,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(items: Vec<T>, total: u64, params: PageParams) -> Self {
        Self {
            items,
            total,
            limit: params.limit,
            offset: params.offset,
        }
    }

    /// Transform the items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }

    /// Whether another page follows this one
    pub fn has_more(&self) -> bool {
        u64::from(self.offset) + (self.items.len() as u64) < self.total
    }
}
