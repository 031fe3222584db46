use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MIN_PAGE_SIZE: i64 = 1;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Raw query string of the paginated listing (`?page&pageSize&q`).
///
/// Values stay strings until `params` so a non-numeric `pageSize` is a
/// validation failure of the listing rather than a query parsing error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default, rename = "pageSize")]
    pub page_size: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

/// Validated page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("{name} must be an integer, got {value:?}")]
    NotNumeric { name: &'static str, value: String },

    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl PageParams {
    /// Number of items that come before this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    pub fn params(&self) -> Result<PageParams, ParamError> {
        let mut params = PageParams::default();
        if let Some(raw) = &self.page_size {
            params.page_size = parse_bounded("pageSize", raw, MIN_PAGE_SIZE, MAX_PAGE_SIZE)?;
        }
        if let Some(raw) = &self.page {
            params.page = parse_bounded("page", raw, 1, i64::from(u32::MAX))?;
        }
        Ok(params)
    }

    /// The search keyword, `None` when absent or blank.
    pub fn keyword(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

fn parse_bounded(name: &'static str, raw: &str, min: i64, max: i64) -> Result<u32, ParamError> {
    let value: i64 = raw.trim().parse().map_err(|_| ParamError::NotNumeric {
        name,
        value: raw.to_string(),
    })?;
    if value < min || value > max {
        return Err(ParamError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    u32::try_from(value).map_err(|_| ParamError::OutOfRange {
        name,
        value,
        min,
        max,
    })
}
