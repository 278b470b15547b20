//! Cursor pagination shared by the list routes.
//!
//! The cursor is the offset of the first item of the page, so a cursor stays
//! valid as long as the sort order does.

use serde::{Deserialize, Serialize};

use crate::error::WatsonError;

pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Query parameters accepted by every list route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page_limit: Option<usize>,
    pub cursor: Option<String>,
    pub sort: Option<String>,
    #[serde(default)]
    pub include_count: bool,
    #[serde(default)]
    pub include_audit: bool,
    #[serde(default)]
    pub export: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub refresh_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// Items that a list route can sort.
pub trait Sortable {
    /// Field names accepted by `sort`; the first one is the default order.
    const SORT_FIELDS: &'static [&'static str];

    fn sort_key(&self, field: &str) -> String;
}

#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

pub fn paginate<T: Sortable>(mut items: Vec<T>, params: &ListParams, path: &str) -> Result<Page<T>, WatsonError> {
    let (field, descending) = match params.sort.as_deref().filter(|s| !s.is_empty()) {
        Some(sort) => match sort.strip_prefix('-') {
            Some(field) => (field, true),
            None => (sort, false),
        },
        None => (T::SORT_FIELDS[0], false),
    };
    if !T::SORT_FIELDS.contains(&field) {
        return Err(WatsonError::bad_request(format!("Invalid value for sort: {field}")));
    }
    items.sort_by_cached_key(|item| item.sort_key(field));
    if descending {
        items.reverse();
    }

    let limit = params.page_limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    if limit == 0 {
        return Err(WatsonError::bad_request("page_limit must be greater than zero"));
    }
    let offset = match params.cursor.as_deref() {
        Some(cursor) => decode_cursor(cursor)?,
        None => 0,
    };

    let total = items.len();
    let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    let next_offset = offset + page.len();
    let next_cursor = (next_offset < total).then(|| encode_cursor(next_offset));

    let sort_param = params
        .sort
        .as_deref()
        .map(|s| format!("&sort={s}"))
        .unwrap_or_default();
    let pagination = Pagination {
        refresh_url: format!("{path}?page_limit={limit}{sort_param}"),
        next_url: next_cursor
            .as_ref()
            .map(|c| format!("{path}?cursor={c}&page_limit={limit}{sort_param}")),
        total: params.include_count.then_some(page.len()),
        matched: params.include_count.then_some(total),
        refresh_cursor: (offset > 0).then(|| encode_cursor(offset)),
        next_cursor,
    };
    Ok(Page { items: page, pagination })
}

fn encode_cursor(offset: usize) -> String {
    format!("c{offset:x}")
}

fn decode_cursor(cursor: &str) -> Result<usize, WatsonError> {
    cursor
        .strip_prefix('c')
        .and_then(|hex| usize::from_str_radix(hex, 16).ok())
        .ok_or_else(|| WatsonError::bad_request(format!("Invalid cursor: {cursor}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str, u32);

    impl Sortable for Item {
        const SORT_FIELDS: &'static [&'static str] = &["name", "rank"];

        fn sort_key(&self, field: &str) -> String {
            match field {
                "rank" => format!("{:010}", self.1),
                _ => self.0.to_string(),
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![Item("c", 1), Item("a", 3), Item("b", 2)]
    }

    #[test]
    fn walks_every_item_once() {
        let mut params = ListParams {
            page_limit: Some(2),
            ..ListParams::default()
        };
        let first = paginate(items(), &params, "/v1/things").unwrap();
        assert_eq!(first.items, vec![Item("a", 3), Item("b", 2)]);
        let cursor = first.pagination.next_cursor.clone().unwrap();

        params.cursor = Some(cursor);
        let second = paginate(items(), &params, "/v1/things").unwrap();
        assert_eq!(second.items, vec![Item("c", 1)]);
        assert!(second.pagination.next_cursor.is_none());
        assert!(second.pagination.next_url.is_none());
        assert!(second.pagination.refresh_cursor.is_some());
    }

    #[test]
    fn descending_sort_and_counts() {
        let params = ListParams {
            sort: Some("-rank".into()),
            include_count: true,
            ..ListParams::default()
        };
        let page = paginate(items(), &params, "/v1/things").unwrap();
        assert_eq!(page.items[0], Item("a", 3));
        assert_eq!(page.pagination.matched, Some(3));
    }

    #[test]
    fn rejects_bad_input() {
        let bad_sort = ListParams {
            sort: Some("color".into()),
            ..ListParams::default()
        };
        assert_eq!(paginate(items(), &bad_sort, "/").unwrap_err().code, 400);

        let bad_cursor = ListParams {
            cursor: Some("zzz".into()),
            ..ListParams::default()
        };
        assert_eq!(paginate(items(), &bad_cursor, "/").unwrap_err().code, 400);
    }
}
