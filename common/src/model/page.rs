use crate::requests::PageParams;
use serde::{Deserialize, Serialize};

/// One page of an ordered collection together with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items of this page, never more than `page_size`.
    pub data: Vec<T>,
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
    /// Number of items in the whole (filtered) collection.
    pub total: u64,
    /// 1-based position of the first item on this page, `None` when empty.
    pub from: Option<u64>,
    /// 1-based position of the last item on this page, `None` when empty.
    pub to: Option<u64>,
    pub last_page: u32,
    pub has_more_pages: bool,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, params: PageParams, total: u64) -> Self {
        let size = u64::from(params.page_size);
        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            let first = params.offset() + 1;
            (Some(first), Some(first + data.len() as u64 - 1))
        };
        let last_page = total.div_ceil(size).max(1);

        Self {
            data,
            page: params.page,
            page_size: params.page_size,
            total,
            from,
            to,
            last_page: u32::try_from(last_page).unwrap_or(u32::MAX),
            has_more_pages: params.offset() + size < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: u32, page_size: u32) -> PageParams {
        PageParams { page, page_size }
    }

    #[test]
    fn middle_page_reports_positions_and_more_pages() {
        let page = Page::new(vec!["c", "d"], params(2, 2), 5);
        assert_eq!(page.from, Some(3));
        assert_eq!(page.to, Some(4));
        assert_eq!(page.last_page, 3);
        assert!(page.has_more_pages);
    }

    #[test]
    fn short_last_page() {
        let page = Page::new(vec!["e"], params(3, 2), 5);
        assert_eq!(page.from, Some(5));
        assert_eq!(page.to, Some(5));
        assert!(!page.has_more_pages);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page: Page<&str> = Page::new(Vec::new(), params(9, 20), 3);
        assert_eq!(page.from, None);
        assert_eq!(page.to, None);
        assert_eq!(page.last_page, 1);
        assert!(!page.has_more_pages);
    }

    #[test]
    fn metadata_uses_camel_case_keys() {
        let page = Page::new(vec![1, 2], params(1, 20), 2);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["pageSize"], 20);
        assert_eq!(value["lastPage"], 1);
        assert_eq!(value["hasMorePages"], false);
        assert_eq!(value["data"], serde_json::json!([1, 2]));
    }
}
