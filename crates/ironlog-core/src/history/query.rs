//! Filtered, sorted, paginated view of the session history.

use super::pagination::Pagination;
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::session::Session;
use chrono::{Days, NaiveDate};

/// Parameters of a history request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Keep only sessions from the last `n` days; `None` keeps everything
    pub filter_days: Option<u32>,
    /// Requested 1-based page; out-of-range values are clamped
    pub page: i64,
    pub page_size: usize,
    pub max_visible_pages: usize,
}

impl HistoryQuery {
    /// First page with the configured page sizes and no filter.
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            filter_days: None,
            page: 1,
            page_size: config.page_size,
            max_visible_pages: config.max_visible_pages,
        }
    }

    pub fn with_filter_days(mut self, filter_days: Option<u32>) -> Self {
        self.filter_days = filter_days;
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self::from_config(&TrackerConfig::default())
    }
}

/// One page of history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPage<'a> {
    /// Sessions on this page, newest first
    pub items: Vec<&'a Session>,
    pub pagination: Pagination,
    /// Page numbers to offer in the pagination controls
    pub page_window: Vec<usize>,
}

impl HistoryPage<'_> {
    pub fn total_count(&self) -> usize {
        self.pagination.total_count
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sessions dated on or after `today - filter_days`, in source order.
///
/// `None` and `Some(0)` both keep every session.
pub fn filter_recent(sessions: &[Session], filter_days: Option<u32>, today: NaiveDate) -> Vec<&Session> {
    let cutoff = filter_days
        .filter(|&days| days > 0)
        .and_then(|days| today.checked_sub_days(Days::new(u64::from(days))));
    sessions
        .iter()
        .filter(|session| cutoff.is_none_or(|cutoff| session.date >= cutoff))
        .collect()
}

/// Filters by recency, sorts newest first and cuts out the requested page.
///
/// Sessions sharing a date keep their source order. A page past the end is
/// clamped to the last page instead of failing.
///
/// # Errors
///
/// `Validation` when the page size is zero.
pub fn query_history<'a>(
    sessions: &'a [Session],
    query: &HistoryQuery,
    today: NaiveDate,
) -> Result<HistoryPage<'a>> {
    let mut matching = filter_recent(sessions, query.filter_days, today);
    // sort_by is stable, so equal dates keep source order
    matching.sort_by(|a, b| b.date.cmp(&a.date));

    let pagination = Pagination::compute(matching.len(), query.page_size, query.page)?;
    let items = matching[pagination.bounds()].to_vec();
    let page_window = pagination.window(query.max_visible_pages).collect();

    tracing::debug!(
        "History page {}/{} ({} of {} sessions)",
        pagination.page,
        pagination.total_pages,
        items.len(),
        pagination.total_count
    );

    Ok(HistoryPage {
        items,
        pagination,
        page_window,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn session(id: u64, date: &str) -> Session {
        let start = DateTime::parse_from_rfc3339(&format!("{}T18:00:00+00:00", date)).unwrap();
        Session::new(id, start, None, None).unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Twelve sessions, one per day from Jan 1st to Jan 12th.
    fn twelve_sessions() -> Vec<Session> {
        (1..=12)
            .map(|d| session(d, &format!("2024-01-{:02}", d)))
            .collect()
    }

    #[test]
    fn test_newest_first() {
        let sessions = vec![
            session(1, "2024-01-03"),
            session(2, "2024-01-10"),
            session(3, "2024-01-05"),
        ];
        let page = query_history(&sessions, &HistoryQuery::default(), day("2024-02-01")).unwrap();
        let ids: Vec<u64> = page.items.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_same_date_keeps_source_order() {
        let sessions = vec![
            session(1, "2024-01-03"),
            session(2, "2024-01-03"),
            session(3, "2024-01-04"),
            session(4, "2024-01-03"),
        ];
        let page = query_history(&sessions, &HistoryQuery::default(), day("2024-02-01")).unwrap();
        let ids: Vec<u64> = page.items.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_third_page_of_twelve() {
        let sessions = twelve_sessions();
        let query = HistoryQuery::default().with_page(3);
        let page = query_history(&sessions, &query, day("2024-01-12")).unwrap();

        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.total_count(), 12);
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.items.len(), 2);
        // Newest first, so the 11th and 12th entries are the two oldest
        let ids: Vec<u64> = page.items.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(page.pagination.showing(), Some((11, 12)));
        assert_eq!(page.page_window, vec![1, 2, 3]);
    }

    #[test]
    fn test_page_past_end_self_corrects() {
        let sessions = twelve_sessions();
        let query = HistoryQuery::default().with_page(42);
        let page = query_history(&sessions, &query, day("2024-01-12")).unwrap();
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_non_positive_page_clamps_to_first() {
        let sessions = twelve_sessions();
        let query = HistoryQuery::default().with_page(-1);
        let page = query_history(&sessions, &query, day("2024-01-12")).unwrap();
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.items[0].id, 12);
    }

    #[test]
    fn test_filter_days_is_inclusive() {
        let sessions = twelve_sessions();
        let query = HistoryQuery::default().with_filter_days(Some(7));
        let page = query_history(&sessions, &query, day("2024-01-12")).unwrap();
        // Jan 5th .. Jan 12th
        assert_eq!(page.total_count(), 8);
        assert_eq!(page.items.last().unwrap().id, 8);
    }

    #[test]
    fn test_zero_days_keeps_everything() {
        let sessions = twelve_sessions();
        let query = HistoryQuery::default().with_filter_days(Some(0));
        let page = query_history(&sessions, &query, day("2024-01-12")).unwrap();
        assert_eq!(page.total_count(), 12);
        assert_eq!(filter_recent(&sessions, Some(0), day("2024-01-12")).len(), 12);
    }

    #[test]
    fn test_empty_history() {
        let page = query_history(&[], &HistoryQuery::default(), day("2024-01-12")).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 0);
        assert!(page.page_window.is_empty());
    }

    #[test]
    fn test_zero_page_size() {
        let query = HistoryQuery {
            page_size: 0,
            ..HistoryQuery::default()
        };
        let err = query_history(&twelve_sessions(), &query, day("2024-01-12")).unwrap_err();
        assert!(err.is_validation());
    }
}
