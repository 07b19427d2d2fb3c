//! List query parameters and the paginated response envelope

use serde::{Deserialize, Serialize};

/// Default page size when `limit` is not supplied.
const DEFAULT_LIMIT: i64 = 10;

/// Sentinel meaning "unset": no filter for `sow_id`, all rows for `limit`.
const UNSET: i64 = -1;

fn default_sow_id() -> i64 {
    UNSET
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Raw query parameters for GET /milestones.
#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    /// Statement of work to filter by, -1 = all.
    #[serde(default = "default_sow_id")]
    pub sow_id: i64,
    /// Rows to skip before the first returned row.
    #[serde(default)]
    pub skip: i64,
    /// Page size, -1 = return every matching row.
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Column to order by, validated against the sortable allow-list.
    #[serde(default)]
    pub sortby: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            sow_id: UNSET,
            skip: 0,
            limit: DEFAULT_LIMIT,
            sortby: None,
        }
    }
}

/// Normalized list query with the sentinels resolved into options.
#[derive(Debug, Clone, Copy)]
pub struct ListQuery {
    /// Restrict to one statement of work; `None` = all rows.
    pub sow_id: Option<i64>,
    /// OFFSET applied when a window is requested. Never negative.
    pub skip: i64,
    /// LIMIT; `None` = no window, every matching row is returned.
    pub limit: Option<i64>,
}

impl From<&ListParams> for ListQuery {
    fn from(params: &ListParams) -> Self {
        Self {
            sow_id: (params.sow_id != UNSET).then_some(params.sow_id),
            skip: params.skip.max(0),
            limit: (params.limit != UNSET).then(|| params.limit.max(0)),
        }
    }
}

/// Response envelope for list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Rows for the requested window, in the requested order.
    pub data: Vec<T>,
    /// Count of matching rows ignoring pagination.
    pub total: i64,
    /// Echoed offset.
    pub skip: i64,
    /// Echoed page size; equals `total` when the caller asked for all rows.
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_apply_when_no_params_given() {
        let params: ListParams = serde_json::from_value(json!({})).expect("empty params");
        assert_eq!(params.sow_id, -1);
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, 10);
        assert!(params.sortby.is_none());
    }

    #[test]
    fn sentinel_sow_id_means_no_filter() {
        let query = ListQuery::from(&ListParams::default());
        assert_eq!(query.sow_id, None);

        let query = ListQuery::from(&ListParams {
            sow_id: 7,
            ..ListParams::default()
        });
        assert_eq!(query.sow_id, Some(7));
    }

    #[test]
    fn sentinel_limit_means_no_window() {
        let query = ListQuery::from(&ListParams {
            limit: -1,
            ..ListParams::default()
        });
        assert_eq!(query.limit, None);

        let query = ListQuery::from(&ListParams {
            limit: 3,
            skip: 2,
            ..ListParams::default()
        });
        assert_eq!(query.limit, Some(3));
        assert_eq!(query.skip, 2);
    }

    #[test]
    fn negative_skip_is_clamped() {
        let query = ListQuery::from(&ListParams {
            skip: -5,
            ..ListParams::default()
        });
        assert_eq!(query.skip, 0);
    }
}
